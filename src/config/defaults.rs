// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Splash Defaults
// ==========================================================================

/// Default number of startup steps shown on the splash screen.
pub const DEFAULT_SPLASH_STEPS: u32 = 100;

/// Minimum number of startup steps.
pub const MIN_SPLASH_STEPS: u32 = 1;

/// Maximum number of startup steps.
pub const MAX_SPLASH_STEPS: u32 = 1000;

/// Default pause per startup step (in milliseconds).
pub const DEFAULT_SPLASH_STEP_DELAY_MS: u64 = 30;

/// Maximum pause per startup step (in milliseconds).
pub const MAX_SPLASH_STEP_DELAY_MS: u64 = 1000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval at which the UI thread drains the progress queue (in milliseconds).
pub const PROGRESS_TICK_MS: u64 = 30;
