//! Home page
//!
//! Two entries: the calculator, and an analysis visualization entry that has
//! no page behind it yet.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, text, Space};
use iced::{Element, Length, Padding};

use beam_core::session::Page;

use crate::Message;

pub fn view() -> Element<'static, Message> {
    let calculator = entry(
        "Calculator",
        "Perform beam calculations",
        Some(Message::Navigate(Page::Calculator)),
    );
    let visualization = entry("Analysis Visualization", "View graphical results", None);

    let content = column![
        text("Beam Analysis").size(22),
        Space::new().height(16),
        calculator,
        Space::new().height(8),
        visualization,
    ]
    .width(Length::Fixed(360.0));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// A large button with a title and one line of description
fn entry(
    title: &'static str,
    description: &'static str,
    on_press: Option<Message>,
) -> Element<'static, Message> {
    let label = column![
        text(title).size(16),
        text(description).size(11).color([0.5, 0.5, 0.5]),
    ]
    .spacing(4);

    button(label)
        .on_press_maybe(on_press)
        .padding(Padding::from([12, 16]))
        .width(Length::Fill)
        .style(button::secondary)
        .into()
}
