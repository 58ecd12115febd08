// SPDX-License-Identifier: MPL-2.0
//! Startup splash screen.
//!
//! The splash screen is the [`ProgressSurface`] the application's
//! [`ProgressQueue`](crate::progress::ProgressQueue) applies startup progress
//! to. It is only ever mutated on the UI thread.

use crate::progress::{ProgressState, ProgressSurface};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, container, progress_bar, Column, Text},
    Element, Length,
};

/// Messages emitted by the splash screen.
#[derive(Debug, Clone)]
pub enum Message {
    Skip,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    SkipRequested,
}

/// Process a splash screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Skip => Event::SkipRequested,
    }
}

/// What the splash screen currently displays.
#[derive(Debug, Clone, Default)]
pub struct State {
    progress: ProgressState,
    visible: bool,
    renders: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of refreshes applied so far.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.renders
    }
}

impl ProgressSurface for State {
    fn render(&mut self, state: &ProgressState) {
        self.progress.clone_from(state);
        self.renders += 1;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Render the splash screen.
#[must_use]
pub fn view(state: &State) -> Element<'_, Message> {
    let title = Text::new("Iced Labeler").size(typography::TITLE_LG);
    let version = Text::new(format!("v{}", env!("CARGO_PKG_VERSION"))).size(typography::CAPTION);

    let bar = progress_bar(0.0..=1.0, state.progress.fraction())
        .length(Length::Fixed(sizing::SPLASH_BAR_WIDTH))
        .girth(Length::Fixed(sizing::SPLASH_BAR_HEIGHT));

    let status = Text::new(state.progress.message.clone().unwrap_or_default())
        .size(typography::BODY);

    let counter = Text::new(match state.progress.maximum {
        Some(maximum) => format!("{} / {}", state.progress.current, maximum),
        None => String::new(),
    })
    .size(typography::CAPTION);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(title)
        .push(version)
        .push(bar)
        .push(status)
        .push(counter)
        .push(button(Text::new("Skip").size(typography::BODY)).on_press(Message::Skip));

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress;

    #[test]
    fn applies_queued_progress() {
        let (coordinator, mut queue) = progress::channel();
        coordinator.set_visible(true).unwrap();
        coordinator.set_maximum(3).unwrap();
        coordinator.update(2, Some("b".into())).unwrap();

        let mut splash = State::new();
        queue.process_pending(&mut splash);

        assert!(splash.is_visible());
        assert_eq!(splash.progress().current, 2);
        assert_eq!(splash.progress().message.as_deref(), Some("b"));
        assert_eq!(splash.render_count(), 2);
    }

    #[test]
    fn dispose_hides_splash() {
        let (coordinator, mut queue) = progress::channel();
        coordinator.set_visible(true).unwrap();
        coordinator.dispose();

        let mut splash = State::new();
        queue.process_pending(&mut splash);
        assert!(!splash.is_visible());
    }

    #[test]
    fn skip_requests_cancellation() {
        assert_eq!(update(&Message::Skip), Event::SkipRequested);
    }
}
