// SPDX-License-Identifier: MPL-2.0
//! Native message boxes.
//!
//! Every function returns a future so it can be driven by `Task::perform`
//! without blocking the UI thread.

use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};

/// Severity of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    fn level(self) -> MessageLevel {
        match self {
            Severity::Info => MessageLevel::Info,
            Severity::Warning => MessageLevel::Warning,
            Severity::Error => MessageLevel::Error,
        }
    }
}

fn dialog(severity: Severity, title: &str, description: &str) -> AsyncMessageDialog {
    AsyncMessageDialog::new()
        .set_level(severity.level())
        .set_title(title)
        .set_description(description)
}

/// Shows a message box with a single OK button.
pub async fn show(severity: Severity, title: String, description: String) {
    tracing::debug!(?severity, %title, "showing message box");
    dialog(severity, &title, &description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

pub async fn info(title: String, description: String) {
    show(Severity::Info, title, description).await;
}

pub async fn warning(title: String, description: String) {
    show(Severity::Warning, title, description).await;
}

pub async fn error(title: String, description: String) {
    show(Severity::Error, title, description).await;
}

/// Asks a yes/no question. Closing the box counts as "no".
pub async fn confirm(title: String, description: String) -> bool {
    let result = dialog(Severity::Warning, &title, &description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        .await;
    is_affirmative(&result)
}

fn is_affirmative(result: &MessageDialogResult) -> bool {
    matches!(result, MessageDialogResult::Yes | MessageDialogResult::Ok)
}
