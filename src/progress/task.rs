// SPDX-License-Identifier: MPL-2.0
//! Step-wise background work that reports through a [`ProgressCoordinator`].
//!
//! A [`StepTask`] is a resumable step function. [`StepRunner`] calls it once per
//! step, forwards each step's status text to the coordinator, checks its
//! [`CancelToken`] between steps, and disposes the coordinator on every exit
//! path, including a panicking step.

use super::coordinator::ProgressCoordinator;
use super::ProgressError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Work split into a fixed number of steps.
pub trait StepTask: Send {
    /// Number of steps; becomes the coordinator's maximum.
    fn total_steps(&self) -> u32;

    /// Runs step `step` (1-based) and returns its status text.
    ///
    /// # Errors
    ///
    /// An `Err` stops the run; the message ends up in [`TaskOutcome::Failed`].
    fn run_step(&mut self, step: u32) -> Result<Option<String>, String>;
}

/// Cooperative stop request shared between the task owner and the runner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the runner to stop before its next step.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Every step ran.
    Completed { steps: u32 },
    /// Stopped between steps, by the token or by an external `dispose`.
    Cancelled { completed: u32 },
    /// A step returned an error.
    Failed { step: u32, error: String },
}

/// Disposes the coordinator when dropped, so unwinding still tears the surface down.
struct DisposeGuard<'a>(&'a ProgressCoordinator);

impl Drop for DisposeGuard<'_> {
    fn drop(&mut self) {
        self.0.dispose();
    }
}

/// Drives a [`StepTask`] to an outcome.
#[derive(Debug, Clone)]
pub struct StepRunner {
    coordinator: ProgressCoordinator,
    cancel: CancelToken,
}

impl StepRunner {
    #[must_use]
    pub fn new(coordinator: ProgressCoordinator, cancel: CancelToken) -> Self {
        Self {
            coordinator,
            cancel,
        }
    }

    /// Runs `task` on the calling thread until it completes, fails, or is cancelled.
    ///
    /// Blocks; call it from a worker thread. The coordinator is disposed on return.
    pub fn run<T: StepTask + ?Sized>(&self, task: &mut T) -> TaskOutcome {
        let _guard = DisposeGuard(&self.coordinator);
        let total = task.total_steps();

        if self.coordinator.set_visible(true).is_err()
            || self.coordinator.set_maximum(total).is_err()
        {
            return TaskOutcome::Cancelled { completed: 0 };
        }

        for step in 1..=total {
            if self.cancel.is_cancelled() {
                tracing::debug!(step, "step task cancelled");
                return TaskOutcome::Cancelled {
                    completed: step - 1,
                };
            }

            let message = match task.run_step(step) {
                Ok(message) => message,
                Err(error) => {
                    tracing::warn!(step, %error, "step task failed");
                    return TaskOutcome::Failed { step, error };
                }
            };

            // The maximum is set, so the only possible failure is a disposed surface.
            if let Err(ProgressError::Disposed | ProgressError::MaximumNotSet) =
                self.coordinator.update(step, message)
            {
                return TaskOutcome::Cancelled { completed: step };
            }
        }

        TaskOutcome::Completed { steps: total }
    }
}
