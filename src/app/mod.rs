// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct owns the splash screen, the label class screen and the
//! startup progress queue. The startup sequence runs on a blocking worker and
//! reports through a [`ProgressCoordinator`](crate::progress::ProgressCoordinator);
//! the tick subscription drains its queue on the UI thread until the worker
//! disposes it.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Hotkey, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::progress::{CancelToken, ProgressQueue, StartupSequence};
use crate::ui::messages;
use crate::ui::{label_classes, splash};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    screen: Screen,
    config: Config,
    splash: splash::State,
    /// UI-side end of the startup progress channel, while startup runs.
    progress: Option<ProgressQueue>,
    startup_cancel: Option<CancelToken>,
    classes: label_classes::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("startup_running", &self.progress.is_some())
            .field("editing", &self.classes.editing())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 520;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are only consumed by the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Classes,
            config: Config::default(),
            splash: splash::State::new(),
            progress: None,
            startup_cancel: None,
            classes: label_classes::State::default(),
        }
    }
}

impl App {
    /// Loads the config and, unless disabled, starts the splash sequence.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();

        let mut app = App {
            config,
            ..Self::default()
        };
        let mut tasks = Vec::new();

        if let Some(warning) = config_warning {
            tasks.push(Task::perform(
                messages::warning("Settings".to_string(), warning),
                |()| Message::DialogClosed,
            ));
        }

        if app.config.splash.is_enabled() && !flags.no_splash {
            let sequence =
                StartupSequence::new(app.config.splash.step_count(), app.config.splash.step_delay());
            let (queue, cancel, task) = update::start_startup(sequence);
            app.progress = Some(queue);
            app.startup_cancel = Some(cancel);
            app.screen = Screen::Splash;
            tasks.push(task);
        } else {
            tracing::debug!("splash screen disabled");
            app.screen = app.screen_after_splash();
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        let app_name = "Iced Labeler";
        match self.screen {
            Screen::Splash => format!("Starting - {app_name}"),
            Screen::Classes => app_name.to_string(),
            Screen::About => format!("About - {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let hotkey_sub = subscription::create_hotkey_subscription();
        let tick_sub = subscription::create_tick_subscription(self.progress.is_some());

        Subscription::batch([hotkey_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Splash(splash_message) => update::handle_splash_message(self, &splash_message),
            Message::Classes(classes_message) => {
                update::handle_classes_message(self, classes_message)
            }
            Message::About(about_message) => update::handle_about_message(self, &about_message),
            Message::Hotkey(hotkey) => update::handle_hotkey(self, hotkey),
            Message::Tick(_now) => update::handle_tick(self),
            Message::StartupFinished(outcome) => update::handle_startup_finished(outcome),
            Message::DialogClosed => Task::none(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            screen: self.screen,
            splash: &self.splash,
            classes: &self.classes,
            show_about_on_start: self.config.general.show_about_on_start.unwrap_or(false),
        })
    }

    /// Screen shown once the splash screen is gone.
    fn screen_after_splash(&self) -> Screen {
        if self.config.general.show_about_on_start.unwrap_or(false) {
            Screen::About
        } else {
            Screen::Classes
        }
    }

    /// Asks the startup worker to stop; it still disposes the progress surface.
    fn cancel_startup(&self) {
        if let Some(cancel) = &self.startup_cancel {
            tracing::debug!("startup cancellation requested");
            cancel.cancel();
        }
    }
}
