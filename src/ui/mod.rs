// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! exposes a `Message`, an `Event` for the parent, `update` and `view`.
//!
//! # Screens
//!
//! - [`splash`] - Startup progress with a skip button
//! - [`label_classes`] - Label class list with color buttons and inline rename
//! - [`about`] - Application version and hotkeys
//!
//! # Shared Infrastructure
//!
//! - [`observer`] - Notification hub between widgets and their listeners
//! - [`widgets`] - Custom Iced widgets (color button)
//! - [`messages`] - Native message boxes
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod about;
pub mod design_tokens;
pub mod label_classes;
pub mod messages;
pub mod observer;
pub mod splash;
pub mod widgets;
