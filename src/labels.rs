// SPDX-License-Identifier: MPL-2.0
//! Label classes an annotator assigns to image regions.

use iced::Color;

/// A named label class with its display color.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelClass {
    name: String,
    color: Color,
}

/// Why a rename was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameError {
    Blank,
}

impl LabelClass {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the name with `name`, trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::Blank`] if `name` is empty after trimming; the
    /// old name is kept.
    pub fn rename(&mut self, name: &str) -> Result<(), RenameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RenameError::Blank);
        }
        self.name = trimmed.to_string();
        Ok(())
    }
}

/// Classes a fresh workspace starts with.
#[must_use]
pub fn default_classes() -> Vec<LabelClass> {
    vec![
        LabelClass::new("person", Color::from_rgb8(230, 57, 70)),
        LabelClass::new("vehicle", Color::from_rgb8(69, 123, 157)),
        LabelClass::new("animal", Color::from_rgb8(42, 157, 143)),
        LabelClass::new("building", Color::from_rgb8(244, 162, 97)),
        LabelClass::new("vegetation", Color::from_rgb8(138, 177, 125)),
    ]
}
