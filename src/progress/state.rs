// SPDX-License-Identifier: MPL-2.0
//! Progress values as seen by the UI thread.

/// Latest applied progress.
///
/// Once `maximum` is set, `current <= maximum` holds after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub current: u32,
    pub maximum: Option<u32>,
    /// Display-only status text.
    pub message: Option<String>,
}

impl ProgressState {
    /// Redefines the ceiling, clamping `current` if it now exceeds it.
    pub fn set_maximum(&mut self, maximum: u32) {
        self.maximum = Some(maximum);
        self.current = self.current.min(maximum);
    }

    /// Records a new value, clamped to the maximum when one is set.
    pub fn set_current(&mut self, value: u32, message: Option<String>) {
        self.current = match self.maximum {
            Some(maximum) => value.min(maximum),
            None => value,
        };
        self.message = message;
    }

    /// Completed fraction in `0.0..=1.0`.
    ///
    /// Returns `0.0` while no maximum is set and `1.0` for a zero maximum.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f32 {
        match self.maximum {
            None => 0.0,
            Some(0) => 1.0,
            Some(maximum) => self.current as f32 / maximum as f32,
        }
    }
}

/// A visible, updatable surface bound to the UI thread.
pub trait ProgressSurface {
    /// Redraws from the latest state.
    fn render(&mut self, state: &ProgressState);

    /// Shows or hides the surface.
    fn set_visible(&mut self, visible: bool);
}
