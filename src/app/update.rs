// SPDX-License-Identifier: MPL-2.0
//! Update handlers for the application.
//!
//! Each handler receives the [`App`] and one message family, mutates state,
//! and returns the follow-up [`Task`].

use super::message::Hotkey;
use super::{App, Message, Screen};
use crate::config;
use crate::progress::{self, CancelToken, StartupSequence, StepRunner, TaskOutcome};
use crate::ui::{about, label_classes, messages, splash};
use iced::Task;

/// Spawns `sequence` on a blocking worker and returns the UI-side queue,
/// the token that cancels it, and the task reporting its outcome.
pub fn start_startup(
    sequence: StartupSequence,
) -> (progress::ProgressQueue, CancelToken, Task<Message>) {
    let (coordinator, queue) = progress::channel();
    let cancel = CancelToken::new();
    let runner = StepRunner::new(coordinator.clone(), cancel.clone());

    let task = Task::perform(
        async move {
            let mut sequence = sequence;
            tokio::task::spawn_blocking(move || runner.run(&mut sequence))
                .await
                .unwrap_or_else(|err| {
                    // The runner disposes on unwind; this covers a worker that never started.
                    coordinator.dispose();
                    TaskOutcome::Failed {
                        step: 0,
                        error: err.to_string(),
                    }
                })
        },
        Message::StartupFinished,
    );

    (queue, cancel, task)
}

/// Applies queued progress commands to the splash screen.
///
/// Once the queue has seen `Dispose` it is detached and the splash screen
/// hands over to the first real screen.
pub fn handle_tick(app: &mut App) -> Task<Message> {
    let Some(queue) = app.progress.as_mut() else {
        return Task::none();
    };

    queue.process_pending(&mut app.splash);

    if queue.is_disposed() {
        tracing::debug!("startup progress disposed");
        app.progress = None;
        app.startup_cancel = None;
        if app.screen == Screen::Splash {
            app.screen = app.screen_after_splash();
        }
    }

    Task::none()
}

pub fn handle_startup_finished(outcome: TaskOutcome) -> Task<Message> {
    match outcome {
        TaskOutcome::Completed { steps } => {
            tracing::info!(steps, "startup completed");
            Task::none()
        }
        TaskOutcome::Cancelled { completed } => {
            tracing::info!(completed, "startup skipped");
            Task::none()
        }
        TaskOutcome::Failed { step, error } => {
            tracing::error!(step, %error, "startup failed");
            Task::perform(
                messages::error(
                    "Startup failed".to_string(),
                    format!("Step {step} failed: {error}"),
                ),
                |()| Message::DialogClosed,
            )
        }
    }
}

pub fn handle_splash_message(app: &mut App, message: &splash::Message) -> Task<Message> {
    match splash::update(message) {
        splash::Event::None => {}
        splash::Event::SkipRequested => app.cancel_startup(),
    }
    Task::none()
}

pub fn handle_classes_message(app: &mut App, message: label_classes::Message) -> Task<Message> {
    match label_classes::update(&mut app.classes, message) {
        label_classes::Event::None => {}
        label_classes::Event::OpenAbout => app.screen = Screen::About,
    }
    Task::none()
}

pub fn handle_about_message(app: &mut App, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        about::Event::None => Task::none(),
        about::Event::BackToClasses => {
            app.screen = Screen::Classes;
            Task::none()
        }
        about::Event::ShowOnStartChanged(enabled) => {
            app.config.general.show_about_on_start = Some(enabled);
            persist_config(&app.config)
        }
    }
}

pub fn handle_hotkey(app: &mut App, hotkey: Hotkey) -> Task<Message> {
    match (hotkey, app.screen) {
        (Hotkey::ShowAbout, Screen::Classes) => app.screen = Screen::About,
        (Hotkey::Back, Screen::Splash) => app.cancel_startup(),
        (Hotkey::Back, Screen::About) => app.screen = Screen::Classes,
        (Hotkey::Back, Screen::Classes) => {
            label_classes::update(&mut app.classes, label_classes::Message::CancelEdit);
        }
        (Hotkey::ShowAbout, Screen::Splash | Screen::About) => {}
    }
    Task::none()
}

fn persist_config(config: &config::Config) -> Task<Message> {
    match config::save(config) {
        Ok(()) => Task::none(),
        Err(err) => {
            tracing::warn!(%err, "failed to save config");
            Task::perform(
                messages::warning("Settings not saved".to_string(), err.to_string()),
                |()| Message::DialogClosed,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn drain_until_disposed(app: &mut App) {
        for _ in 0..500 {
            let _ = handle_tick(app);
            if app.progress.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(2));
        }
        panic!("startup never disposed");
    }

    /// Attaches a startup run driven from a plain thread instead of the iced runtime.
    fn attach_threaded_startup(app: &mut App, steps: u32) -> std::thread::JoinHandle<TaskOutcome> {
        let (coordinator, queue) = progress::channel();
        let cancel = CancelToken::new();
        app.progress = Some(queue);
        app.startup_cancel = Some(cancel.clone());
        app.screen = Screen::Splash;

        let runner = StepRunner::new(coordinator, cancel);
        std::thread::spawn(move || {
            let mut sequence = StartupSequence::new(steps, Duration::ZERO);
            runner.run(&mut sequence)
        })
    }

    #[test]
    fn splash_hands_over_to_classes_after_dispose() {
        let mut app = App::default();
        let worker = attach_threaded_startup(&mut app, 20);
        let outcome = worker.join().unwrap();
        assert_eq!(outcome, TaskOutcome::Completed { steps: 20 });

        drain_until_disposed(&mut app);
        assert_eq!(app.screen, Screen::Classes);
        assert_eq!(app.splash.progress().current, 20);
        assert!(!app.splash.is_visible());
    }

    #[test]
    fn show_about_on_start_lands_on_about() {
        let mut app = App::default();
        app.config.general.show_about_on_start = Some(true);
        let worker = attach_threaded_startup(&mut app, 3);
        worker.join().unwrap();

        drain_until_disposed(&mut app);
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn escape_on_splash_cancels_startup() {
        let mut app = App::default();
        let (_coordinator, queue) = progress::channel();
        let cancel = CancelToken::new();
        app.progress = Some(queue);
        app.startup_cancel = Some(cancel.clone());
        app.screen = Screen::Splash;

        let _ = handle_hotkey(&mut app, Hotkey::Back);
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn skip_button_cancels_startup() {
        let mut app = App::default();
        let cancel = CancelToken::new();
        app.startup_cancel = Some(cancel.clone());
        app.screen = Screen::Splash;

        let _ = handle_splash_message(&mut app, &splash::Message::Skip);
        assert!(cancel.is_cancelled());
    }

    #[test]
    fn f1_and_escape_navigate_between_classes_and_about() {
        let mut app = App::default();
        assert_eq!(app.screen, Screen::Classes);

        let _ = handle_hotkey(&mut app, Hotkey::ShowAbout);
        assert_eq!(app.screen, Screen::About);

        let _ = handle_hotkey(&mut app, Hotkey::Back);
        assert_eq!(app.screen, Screen::Classes);
    }

    #[test]
    fn f1_is_ignored_during_splash() {
        let mut app = App::default();
        app.screen = Screen::Splash;
        let _ = handle_hotkey(&mut app, Hotkey::ShowAbout);
        assert_eq!(app.screen, Screen::Splash);
    }

    #[test]
    fn about_button_and_back_button_round_trip() {
        let mut app = App::default();
        let _ = handle_classes_message(&mut app, label_classes::Message::OpenAbout);
        assert_eq!(app.screen, Screen::About);

        let _ = handle_about_message(&mut app, &about::Message::BackToClasses);
        assert_eq!(app.screen, Screen::Classes);
    }

    #[test]
    fn tick_without_queue_is_noop() {
        let mut app = App::default();
        let _ = handle_tick(&mut app);
        assert_eq!(app.screen, Screen::Classes);
    }
}
