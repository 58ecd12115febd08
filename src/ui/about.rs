// SPDX-License-Identifier: MPL-2.0
//! About screen with application information and the hotkey reference.

use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, checkbox, container, rule, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keyboard and pointer shortcuts, in display order.
pub const HOTKEYS: [(&str, &str); 5] = [
    ("F1", "Show this screen"),
    ("Escape", "Go back, or skip the splash screen"),
    ("Click color", "Select or deselect a label class"),
    ("Double-click color", "Rename the label class"),
    ("Enter", "Save the class name being edited"),
];

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToClasses,
    ShowOnStartToggled(bool),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    BackToClasses,
    /// The "show at startup" preference changed and should be persisted.
    ShowOnStartChanged(bool),
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToClasses => Event::BackToClasses,
        Message::ShowOnStartToggled(enabled) => Event::ShowOnStartChanged(*enabled),
    }
}

/// Render the about screen.
///
/// `show_on_start` is the current value of the startup preference.
#[must_use]
pub fn view<'a>(show_on_start: bool) -> Element<'a, Message> {
    let back_button = button(text("← Back").size(typography::BODY)).on_press(Message::BackToClasses);

    let title = Text::new("About").size(typography::TITLE_LG);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(title)
        .push(build_app_section())
        .push(build_hotkeys_section())
        .push(
            checkbox(show_on_start)
                .label("Show this screen at startup")
                .on_toggle(Message::ShowOnStartToggled)
                .text_size(typography::BODY),
        );

    scrollable(content).into()
}

fn build_app_section<'a>() -> Element<'a, Message> {
    let app_name = Text::new("Iced Labeler").size(typography::TITLE_MD);
    let version = Text::new(format!("v{APP_VERSION}")).size(typography::BODY);
    let description =
        Text::new("Assign label classes to image regions.").size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(app_name)
                .push(version),
        )
        .push(description);

    build_section("Application", content.into())
}

fn build_hotkeys_section<'a>() -> Element<'a, Message> {
    let content = HOTKEYS
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, (keys, action)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(*keys)
                            .size(typography::BODY)
                            .width(Length::Fixed(sizing::KEY_COLUMN_WIDTH)),
                    )
                    .push(Text::new(*action).size(typography::BODY)),
            )
        });

    build_section("Hotkeys", content.into())
}

/// Build a section with a title and content.
fn build_section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}
