// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::ui::{about, label_classes, splash};
use iced::{widget::Container, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub splash: &'a splash::State,
    pub classes: &'a label_classes::State,
    pub show_about_on_start: bool,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Splash => splash::view(ctx.splash).map(Message::Splash),
        Screen::Classes => label_classes::view(ctx.classes).map(Message::Classes),
        Screen::About => about::view(ctx.show_about_on_start).map(Message::About),
    };

    Container::new(current_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
