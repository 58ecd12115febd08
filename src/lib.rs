// SPDX-License-Identifier: MPL-2.0
//! `iced_labeler` is a small label class manager built with the Iced GUI framework.
//!
//! It demonstrates two pieces of plumbing: a notification hub through which
//! widgets report user actions to listeners they do not own, and a progress
//! coordinator that lets background work drive a UI-thread progress display.

#![doc(html_root_url = "https://docs.rs/iced_labeler/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod labels;
pub mod progress;
pub mod ui;
