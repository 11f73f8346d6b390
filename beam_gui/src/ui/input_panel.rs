//! Input Panel (Left)
//!
//! Displays:
//! - Beam modeling: beam type, support type, dimensions, Young's modulus
//! - Load definition: one Add button per load kind and the current load list
//! - Calculate / New Calculation
//!
//! Form fields are locked while a request streams. New Calculation stays
//! enabled so a running request can be cancelled.

use iced::widget::{
    button, column, container, pick_list, row, scrollable, text, text_input, Column, Space,
};
use iced::{Alignment, Element, Length, Padding};

use beam_core::beam::{BeamType, SupportType};
use beam_core::loads::LoadKind;
use beam_core::CalculatorState;

use crate::Message;

/// Render the input panel
pub fn view_input_panel(state: &CalculatorState) -> Element<'_, Message> {
    let locked = state.is_calculating();

    let panel = column![
        view_beam_section(state, locked),
        Space::new().height(16),
        view_loads_section(state, locked),
        Space::new().height(16),
        view_actions(locked),
    ];

    container(scrollable(panel.padding(8)))
        .width(Length::FillPortion(45))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_beam_section(state: &CalculatorState, locked: bool) -> Column<'_, Message> {
    let beam = &state.beam;

    // pick_list has no disabled state, so a locked form shows the choice as text
    let beam_type: Element<'_, Message> = if locked {
        locked_choice(beam.beam_type.display_name())
    } else {
        pick_list(
            &BeamType::ALL[..],
            beam.beam_type.is_set().then_some(beam.beam_type),
            Message::BeamTypeSelected,
        )
        .placeholder(BeamType::Unset.display_name())
        .width(Length::Fill)
        .text_size(11)
        .into()
    };

    let support_type: Element<'_, Message> = if locked {
        locked_choice(beam.support_type.display_name())
    } else {
        pick_list(
            &SupportType::ALL[..],
            beam.support_type.is_set().then_some(beam.support_type),
            Message::SupportTypeSelected,
        )
        .placeholder(SupportType::Unset.display_name())
        .width(Length::Fill)
        .text_size(11)
        .into()
    };

    column![
        text("1. Beam Modeling").size(14),
        Space::new().height(8),
        labeled("Beam Type", beam_type),
        labeled("Support Type", support_type),
        labeled_input("Length (m)", &beam.length, locked, Message::LengthChanged),
        labeled_input("Width (m)", &beam.width, locked, Message::WidthChanged),
        labeled_input("Height (m)", &beam.height, locked, Message::HeightChanged),
        labeled_input(
            "Young's Modulus (GPa)",
            &beam.youngs_modulus,
            locked,
            Message::YoungsModulusChanged,
        ),
    ]
    .spacing(6)
}

fn view_loads_section(state: &CalculatorState, locked: bool) -> Column<'_, Message> {
    let mut add_buttons: Column<'_, Message> = column![].spacing(4);
    for kind in LoadKind::ALL {
        add_buttons = add_buttons.push(
            button(text(kind.title()).size(11))
                .on_press_maybe((!locked).then_some(Message::OpenLoadModal(kind)))
                .padding(Padding::from([6, 12]))
                .width(Length::Fill)
                .style(button::primary),
        );
    }

    let descriptions = state.loads.describe();
    let mut load_list: Column<'_, Message> = column![].spacing(4);
    if descriptions.is_empty() {
        load_list = load_list.push(text("No loads defined").size(11).color([0.5, 0.5, 0.5]));
    }
    for line in descriptions {
        load_list = load_list.push(
            container(text(line).size(11))
                .padding(Padding::from([4, 8]))
                .width(Length::Fill)
                .style(container::rounded_box),
        );
    }

    column![
        text("2. Load Definition").size(14),
        Space::new().height(8),
        add_buttons,
        Space::new().height(8),
        text("Current Loads:").size(12),
        load_list,
    ]
    .spacing(4)
}

fn view_actions(locked: bool) -> Element<'static, Message> {
    let calculate_label = if locked { "Calculating..." } else { "Calculate" };

    row![
        button(text(calculate_label).size(12))
            .on_press_maybe((!locked).then_some(Message::Calculate))
            .padding(Padding::from([8, 16]))
            .width(Length::Fill)
            .style(button::primary),
        button(text("New Calculation").size(12))
            .on_press(Message::NewCalculation)
            .padding(Padding::from([8, 16]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .spacing(8)
    .into()
}

fn labeled<'a>(label: &'a str, field: Element<'a, Message>) -> Element<'a, Message> {
    row![text(label).size(11).width(Length::Fixed(140.0)), field]
        .align_y(Alignment::Center)
        .into()
}

/// Helper for a labeled text input; read-only while `locked`
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    locked: bool,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    let input = text_input("", value)
        .on_input_maybe((!locked).then_some(on_change))
        .width(Length::Fill)
        .padding(4)
        .size(11);

    labeled(label, input.into())
}

fn locked_choice<'a>(value: &'static str) -> Element<'a, Message> {
    container(text(value).size(11).color([0.5, 0.5, 0.5]))
        .padding(4)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}
