//! Status Bar (Bottom)
//!
//! Displays:
//! - Endpoint the calculator posts to
//! - Load count
//! - Status message for the current phase

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use beam_core::session::Phase;
use beam_core::CalculatorState;

use crate::Message;

/// One-line status for the current phase
pub fn status_message(state: &CalculatorState) -> String {
    match state.phase {
        Phase::Calculating { request } => {
            format!("Streaming {} ({} characters)", request, state.transcript.chars().count())
        }
        Phase::ShowingResults if state.error.is_some() => "Finished with errors".to_string(),
        Phase::ShowingResults => format!("{} steps", state.steps.len()),
        Phase::ModalOpen(kind) => kind.title().to_string(),
        Phase::Idle if state.error.is_some() => "Calculation failed".to_string(),
        Phase::Idle => "Ready".to_string(),
    }
}

/// Render the status bar
pub fn view_status_bar<'a>(state: &'a CalculatorState, endpoint: &'a str) -> Element<'a, Message> {
    let loads = match state.loads.len() {
        1 => "1 load".to_string(),
        n => format!("{} loads", n),
    };

    let error_color = if state.error.is_some() { [0.8, 0.2, 0.2] } else { [0.4, 0.4, 0.4] };

    row![
        text(endpoint).size(10),
        Space::new().width(12),
        text(loads).size(10).color([0.5, 0.5, 0.5]),
        Space::new().width(Length::Fill),
        text(status_message(state)).size(10).color(error_color),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
