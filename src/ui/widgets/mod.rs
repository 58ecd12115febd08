// SPDX-License-Identifier: MPL-2.0
pub mod color_button;

pub use color_button::{ColorButton, GestureKind, PointerGesture};
