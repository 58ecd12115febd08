// SPDX-License-Identifier: MPL-2.0
//! Bounded progress reporting from background work to the UI thread.
//!
//! Background code never touches a visible surface. It holds a
//! [`ProgressCoordinator`] and sends commands; the UI thread owns the matching
//! [`ProgressQueue`] and applies them to a [`ProgressSurface`] when it drains
//! the queue on its tick.
//!
//! # Components
//!
//! - [`state`] - `ProgressState` and the `ProgressSurface` trait
//! - [`coordinator`] - the sending half and the UI-thread queue
//! - [`task`] - `StepTask`, `StepRunner` and cooperative cancellation
//! - [`startup`] - the startup sequence shown behind the splash screen
//!
//! # Usage
//!
//! ```
//! use iced_labeler::progress::{self, ProgressState, ProgressSurface};
//!
//! #[derive(Default)]
//! struct Bar {
//!     value: u32,
//!     visible: bool,
//! }
//!
//! impl ProgressSurface for Bar {
//!     fn render(&mut self, state: &ProgressState) {
//!         self.value = state.current;
//!     }
//!     fn set_visible(&mut self, visible: bool) {
//!         self.visible = visible;
//!     }
//! }
//!
//! let (coordinator, mut queue) = progress::channel();
//! std::thread::spawn(move || {
//!     coordinator.set_maximum(3).unwrap();
//!     coordinator.update(3, Some("done".into())).unwrap();
//!     coordinator.dispose();
//! })
//! .join()
//! .unwrap();
//!
//! let mut bar = Bar::default();
//! queue.process_pending(&mut bar);
//! assert_eq!(bar.value, 3);
//! assert!(!bar.visible);
//! ```

pub mod coordinator;
pub mod startup;
pub mod state;
pub mod task;

use std::fmt;

pub use coordinator::{channel, ProgressCoordinator, ProgressQueue, SurfaceCommand};
pub use startup::StartupSequence;
pub use state::{ProgressState, ProgressSurface};
pub use task::{CancelToken, StepRunner, StepTask, TaskOutcome};

/// Misuse of the coordinator's protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressError {
    /// `update` was called before `set_maximum`.
    MaximumNotSet,
    /// The coordinator was disposed, or the UI side is gone.
    Disposed,
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressError::MaximumNotSet => write!(f, "progress maximum has not been set"),
            ProgressError::Disposed => write!(f, "progress surface has been disposed"),
        }
    }
}

impl std::error::Error for ProgressError {}
