//! Modal dialog component
//!
//! The add-load dialog: magnitude and position for one load of a given
//! kind, drawn centered over a semi-transparent backdrop.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use beam_core::loads::LoadKind;
use beam_core::session::LoadDraft;

use crate::Message;

/// Render a modal backdrop (semi-transparent overlay that catches clicks)
pub fn view_backdrop() -> Element<'static, Message> {
    button(Space::new())
        .on_press(Message::ModalCancel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_, _| {
            iced::widget::button::Style::default()
                .with_background(iced::Color::from_rgba(0.0, 0.0, 0.0, 0.5))
        })
        .into()
}

/// Render the add-load dialog for `kind`
pub fn view_load_modal(kind: LoadKind, draft: &LoadDraft) -> Element<'_, Message> {
    let title = text(kind.title()).size(18);

    let magnitude = column![
        text(format!("Magnitude ({})", kind.unit())).size(12),
        text_input("Enter magnitude", &draft.magnitude)
            .on_input(Message::DraftMagnitudeChanged)
            .on_submit(Message::ModalConfirm)
            .padding(6)
            .size(12),
    ]
    .spacing(4);

    let position = column![
        text("Position (m from left)").size(12),
        text_input("Enter position", &draft.position)
            .on_input(Message::DraftPositionChanged)
            .on_submit(Message::ModalConfirm)
            .padding(6)
            .size(12),
    ]
    .spacing(4);

    let buttons = row![
        button(text("Add").size(11))
            .on_press(Message::ModalConfirm)
            .padding(Padding::from([6, 16]))
            .width(Length::Fill)
            .style(button::primary),
        Space::new().width(8),
        button(text("Cancel").size(11))
            .on_press(Message::ModalCancel)
            .padding(Padding::from([6, 16]))
            .width(Length::Fill)
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let content = column![
        title,
        Space::new().height(16),
        magnitude,
        Space::new().height(12),
        position,
        Space::new().height(20),
        buttons,
    ]
    .width(Length::Fixed(400.0));

    let modal_box = container(content)
        .padding(20)
        .style(container::bordered_box);

    // Center the modal in the screen
    container(modal_box)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
