// SPDX-License-Identifier: MPL-2.0
//! Startup sequence shown behind the splash screen.

use super::task::StepTask;
use crate::config::{DEFAULT_SPLASH_STEPS, DEFAULT_SPLASH_STEP_DELAY_MS};
use std::thread;
use std::time::Duration;

/// Steps between two status text changes.
pub const STEPS_PER_STATUS: u32 = 10;

/// Status texts, cycled every [`STEPS_PER_STATUS`] steps.
pub const STATUS_MESSAGES: [&str; 5] = [
    "Loading configuration...",
    "Preparing label classes...",
    "Warming up canvas...",
    "Restoring workspace...",
    "Almost ready...",
];

/// Fixed-length startup work with a short pause per step.
#[derive(Debug, Clone)]
pub struct StartupSequence {
    steps: u32,
    step_delay: Duration,
}

impl Default for StartupSequence {
    fn default() -> Self {
        Self::new(
            DEFAULT_SPLASH_STEPS,
            Duration::from_millis(DEFAULT_SPLASH_STEP_DELAY_MS),
        )
    }
}

impl StartupSequence {
    #[must_use]
    pub fn new(steps: u32, step_delay: Duration) -> Self {
        Self { steps, step_delay }
    }

    /// Status text displayed while `step` (1-based) runs.
    #[must_use]
    pub fn status_for(step: u32) -> &'static str {
        let index = (step.saturating_sub(1) / STEPS_PER_STATUS) as usize % STATUS_MESSAGES.len();
        STATUS_MESSAGES[index]
    }
}

impl StepTask for StartupSequence {
    fn total_steps(&self) -> u32 {
        self.steps
    }

    fn run_step(&mut self, step: u32) -> Result<Option<String>, String> {
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
        Ok(Some(Self::status_for(step).to_string()))
    }
}
