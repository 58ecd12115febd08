// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::progress::TaskOutcome;
use crate::ui::about;
use crate::ui::label_classes;
use crate::ui::splash;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Splash(splash::Message),
    Classes(label_classes::Message),
    About(about::Message),
    Hotkey(Hotkey),
    Tick(Instant), // Drains queued progress commands
    /// The background startup sequence returned.
    StartupFinished(TaskOutcome),
    /// A message box was closed.
    DialogClosed,
}

/// Global keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hotkey {
    /// F1
    ShowAbout,
    /// Escape
    Back,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LABELER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip the splash screen regardless of the config.
    pub no_splash: bool,
}
