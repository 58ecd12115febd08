// SPDX-License-Identifier: MPL-2.0
//! Sending half and UI-thread queue of the progress channel.
//!
//! The coordinator never mutates a surface. Each call becomes one
//! [`SurfaceCommand`] on an unbounded channel, and the UI thread applies the
//! commands in arrival order when it calls [`ProgressQueue::process_pending`].

use super::state::{ProgressState, ProgressSurface};
use super::ProgressError;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

const PHASE_IDLE: u8 = 0;
const PHASE_RUNNING: u8 = 1;
const PHASE_DISPOSED: u8 = 2;

/// A deferred surface mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCommand {
    SetMaximum(u32),
    Update { value: u32, message: Option<String> },
    SetVisible(bool),
    Dispose,
}

/// Creates a connected coordinator and queue.
#[must_use]
pub fn channel() -> (ProgressCoordinator, ProgressQueue) {
    let (command_tx, command_rx) = unbounded();
    let coordinator = ProgressCoordinator {
        command_tx,
        phase: Arc::new(AtomicU8::new(PHASE_IDLE)),
    };
    let queue = ProgressQueue {
        command_rx,
        state: ProgressState::default(),
        visible: false,
        disposed: false,
    };
    (coordinator, queue)
}

/// Handle for reporting progress from any thread.
///
/// Cheap to clone; all clones share one phase. Calls made from one thread
/// are applied in the order they were issued.
#[derive(Clone, Debug)]
pub struct ProgressCoordinator {
    command_tx: Sender<SurfaceCommand>,
    phase: Arc<AtomicU8>,
}

impl ProgressCoordinator {
    /// Sets or redefines the ceiling and moves the coordinator to running.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Disposed`] after [`dispose`](Self::dispose).
    pub fn set_maximum(&self, maximum: u32) -> Result<(), ProgressError> {
        self.phase
            .compare_exchange(
                PHASE_IDLE,
                PHASE_RUNNING,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .or_else(|phase| {
                if phase == PHASE_DISPOSED {
                    Err(ProgressError::Disposed)
                } else {
                    Ok(phase)
                }
            })?;
        self.send(SurfaceCommand::SetMaximum(maximum))
    }

    /// Records a new value and schedules one surface refresh.
    ///
    /// Values above the maximum are clamped when applied.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::MaximumNotSet`] before
    /// [`set_maximum`](Self::set_maximum), and [`ProgressError::Disposed`]
    /// after [`dispose`](Self::dispose). Nothing is queued in either case.
    pub fn update(&self, value: u32, message: Option<String>) -> Result<(), ProgressError> {
        match self.phase.load(Ordering::Acquire) {
            PHASE_IDLE => Err(ProgressError::MaximumNotSet),
            PHASE_DISPOSED => Err(ProgressError::Disposed),
            _ => self.send(SurfaceCommand::Update { value, message }),
        }
    }

    /// Shows or hides the surface.
    ///
    /// # Errors
    ///
    /// Returns [`ProgressError::Disposed`] after [`dispose`](Self::dispose).
    pub fn set_visible(&self, visible: bool) -> Result<(), ProgressError> {
        if self.is_disposed() {
            return Err(ProgressError::Disposed);
        }
        self.send(SurfaceCommand::SetVisible(visible))
    }

    /// Tears the surface down. Later calls are no-ops.
    pub fn dispose(&self) {
        let previous = self.phase.swap(PHASE_DISPOSED, Ordering::AcqRel);
        if previous != PHASE_DISPOSED {
            // The UI side may already be gone; there is nothing left to hide then.
            let _ = self.command_tx.send(SurfaceCommand::Dispose);
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) was called on any clone.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.phase.load(Ordering::Acquire) == PHASE_DISPOSED
    }

    fn send(&self, command: SurfaceCommand) -> Result<(), ProgressError> {
        self.command_tx
            .send(command)
            .map_err(|_| ProgressError::Disposed)
    }
}

/// UI-thread end of the channel; owns the applied [`ProgressState`].
#[derive(Debug)]
pub struct ProgressQueue {
    command_rx: Receiver<SurfaceCommand>,
    state: ProgressState,
    visible: bool,
    disposed: bool,
}

impl ProgressQueue {
    /// Applies every pending command to `surface`, oldest first.
    ///
    /// Call this from the UI thread (e.g. on each tick). Commands that
    /// arrive after a `Dispose` are discarded. Returns the number of
    /// commands applied.
    pub fn process_pending<S: ProgressSurface + ?Sized>(&mut self, surface: &mut S) -> usize {
        let mut applied = 0;
        while let Ok(command) = self.command_rx.try_recv() {
            if self.disposed {
                continue;
            }
            self.apply(command, surface);
            applied += 1;
        }
        applied
    }

    fn apply<S: ProgressSurface + ?Sized>(&mut self, command: SurfaceCommand, surface: &mut S) {
        match command {
            SurfaceCommand::SetMaximum(maximum) => {
                self.state.set_maximum(maximum);
                surface.render(&self.state);
            }
            SurfaceCommand::Update { value, message } => {
                self.state.set_current(value, message);
                surface.render(&self.state);
            }
            SurfaceCommand::SetVisible(visible) => {
                self.visible = visible;
                surface.set_visible(visible);
            }
            SurfaceCommand::Dispose => {
                self.disposed = true;
                self.visible = false;
                surface.set_visible(false);
            }
        }
    }

    /// Latest applied state.
    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` once a `Dispose` command was applied.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}
