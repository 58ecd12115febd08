// SPDX-License-Identifier: MPL-2.0
//! Widget-to-parent notification without a reference to the parent.
//!
//! A widget owns a [`NotificationHub`]. Whoever cares about the widget's
//! semantic actions implements [`Listener`], keeps its listener alive in an
//! `Rc`, and registers it. The hub only holds `Weak` references, so dropping
//! the last `Rc` silently unregisters the listener.
//!
//! Dispatch is synchronous, on the calling thread, in registration order.

use std::fmt;
use std::rc::{Rc, Weak};

/// Semantic actions a widget can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservedAction {
    /// The user asked to edit the object the widget represents.
    EditObjectRequested,
}

/// Error returned by a listener that could not handle an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerError {
    message: String,
}

impl ListenerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ListenerError {}

/// Something interested in a widget's actions.
pub trait Listener {
    /// Handles one action.
    ///
    /// # Errors
    ///
    /// A failure is collected by the hub; it does not stop dispatch to the
    /// remaining listeners.
    fn on_action(&self, action: ObservedAction) -> Result<(), ListenerError>;
}

/// One listener failure during a dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFailure {
    /// Zero-based position of the listener in dispatch order.
    pub position: usize,
    pub error: ListenerError,
}

/// Failures collected after every listener was notified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    pub action: ObservedAction,
    pub failures: Vec<ListenerFailure>,
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} listener(s) failed to handle {:?}",
            self.failures.len(),
            self.action
        )?;
        for failure in &self.failures {
            write!(f, "; #{}: {}", failure.position, failure.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for NotifyError {}

/// Ordered, non-owning registry of listeners.
#[derive(Default)]
pub struct NotificationHub {
    listeners: Vec<Weak<dyn Listener>>,
}

impl fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHub")
            .field("listeners", &self.len())
            .finish()
    }
}

impl NotificationHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listener`. Registering it twice notifies it twice.
    pub fn add_listener<L: Listener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<dyn Listener> = Rc::<L>::downgrade(listener);
        self.listeners.push(weak);
    }

    /// Removes the first registration of `listener`; does nothing if it was
    /// never added.
    pub fn remove_listener<L: Listener + 'static>(&mut self, listener: &Rc<L>) {
        let target: Weak<dyn Listener> = Rc::<L>::downgrade(listener);
        if let Some(index) = self.listeners.iter().position(|w| w.ptr_eq(&target)) {
            self.listeners.remove(index);
        }
    }

    /// Notifies every live listener of `action`, in registration order.
    ///
    /// Listeners registered or removed from inside a callback take effect on
    /// the next dispatch.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifyError`] listing every listener that failed, after all
    /// of them ran.
    pub fn notify(&mut self, action: ObservedAction) -> Result<(), NotifyError> {
        self.listeners.retain(|w| w.strong_count() > 0);
        let live: Vec<Rc<dyn Listener>> = self.listeners.iter().filter_map(Weak::upgrade).collect();

        let failures: Vec<ListenerFailure> = live
            .iter()
            .enumerate()
            .filter_map(|(position, listener)| {
                listener
                    .on_action(action)
                    .err()
                    .map(|error| ListenerFailure { position, error })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(NotifyError { action, failures })
        }
    }

    /// Number of registrations whose listener is still alive.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.iter().filter(|w| w.strong_count() > 0).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
