//! Results Panel (Right Side)
//!
//! Dispatches on the session's results view:
//! - Streaming -> spinner, "Analyzing beam structure..." and the answer so far
//! - Steps -> one card per step, "Step 1" first
//! - Placeholder -> last error (if any) above the placeholder message

use iced::alignment::Horizontal;
use iced::widget::{column, container, scrollable, text, Canvas, Column, Space};
use iced::{Element, Font, Length, Padding};

use beam_core::segmenter::AnalysisStep;
use beam_core::session::{ResultsView, ANALYZING_MESSAGE, PLACEHOLDER_MESSAGE};
use beam_core::CalculatorState;

use super::shared::spinner::Spinner;
use crate::Message;

/// Render the results panel
pub fn view_results_panel(state: &CalculatorState, spinner_angle: f32) -> Element<'_, Message> {
    let content: Column<'_, Message> = match state.results_view() {
        ResultsView::Streaming { transcript } => view_streaming(transcript, spinner_angle),
        ResultsView::Steps(steps) => view_steps(steps),
        ResultsView::Placeholder { error } => view_placeholder(error),
    };

    let content = column![text("3. Results").size(14), Space::new().height(8), content];

    container(scrollable(content.padding(8)))
        .width(Length::FillPortion(55))
        .height(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

fn view_streaming(transcript: &str, spinner_angle: f32) -> Column<'_, Message> {
    let spinner: Element<'_, Message> = Canvas::new(Spinner::new(spinner_angle))
        .width(Length::Fixed(64.0))
        .height(Length::Fixed(64.0))
        .into();

    let header = column![
        spinner,
        Space::new().height(12),
        text(ANALYZING_MESSAGE).size(14).color([0.4, 0.4, 0.4]),
    ]
    .align_x(Horizontal::Center)
    .width(Length::Fill);

    let mut col = column![Space::new().height(24), header];
    if !transcript.is_empty() {
        col = col.push(Space::new().height(16)).push(
            container(text(transcript).size(11).font(Font::MONOSPACE).color([0.45, 0.45, 0.45]))
                .padding(8)
                .width(Length::Fill),
        );
    }
    col
}

fn view_steps(steps: &[AnalysisStep]) -> Column<'_, Message> {
    steps
        .iter()
        .fold(column![].spacing(12), |col, step| col.push(view_step_card(step)))
}

fn view_step_card(step: &AnalysisStep) -> Element<'_, Message> {
    let header = container(text(step.label()).size(16))
        .padding(Padding::from([8, 16]))
        .width(Length::Fill)
        .style(|theme: &iced::Theme| {
            let palette = theme.extended_palette();
            container::Style {
                text_color: Some(palette.primary.strong.text),
                background: Some(palette.primary.strong.color.into()),
                ..container::Style::default()
            }
        });

    let body = container(text(&step.text).size(12).font(Font::MONOSPACE))
        .padding(16)
        .width(Length::Fill);

    container(column![header, body])
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn view_placeholder(error: Option<&str>) -> Column<'_, Message> {
    let mut col = column![];

    if let Some(error) = error {
        col = col
            .push(text("Error").size(14))
            .push(Space::new().height(8))
            .push(text(error).size(12).color([0.8, 0.2, 0.2]))
            .push(Space::new().height(16));
    }

    col.push(
        container(text(PLACEHOLDER_MESSAGE).size(14).color([0.5, 0.5, 0.5]))
            .padding(32)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
}
