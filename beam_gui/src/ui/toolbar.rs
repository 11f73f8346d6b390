//! Header bar
//!
//! App title on the left, page name and Home button on the right.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use beam_core::session::Page;

use crate::Message;

/// Render the application header
pub fn view_header(page: Page) -> Element<'static, Message> {
    let page_name = match page {
        Page::Home => "Home",
        Page::Calculator => "Calculator",
    };

    let home_button = button(text("Home").size(11))
        .padding(Padding::from([4, 8]))
        .style(button::secondary);
    // Already home: nothing to navigate to
    let home_button = if page == Page::Home {
        home_button
    } else {
        home_button.on_press(Message::Navigate(Page::Home))
    };

    row![
        text("BeamCee").size(28),
        Space::new().width(Length::Fill),
        text(page_name).size(14),
        Space::new().width(12),
        home_button,
    ]
    .align_y(Alignment::Center)
    .into()
}
