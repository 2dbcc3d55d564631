//! Draw commands produced by the renderer.

use std::fmt;

use crate::host::{Canvas, Font};

/// A single drawing operation in top-down pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Line segment in an ARGB colour.
    Line {
        /// Start X.
        x0: f64,
        /// Start Y.
        y0: f64,
        /// End X.
        x1: f64,
        /// End Y.
        y1: f64,
        /// ARGB colour.
        colour: u32,
    },
    /// Text with its top-left corner at `(x, y)`.
    Text {
        /// Font to draw with.
        font: Font,
        /// Text content.
        text: String,
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
    },
}

impl DrawCommand {
    /// Create a text command.
    pub fn text(font: Font, text: impl Into<String>, x: i32, y: i32) -> Self {
        Self::Text {
            font,
            text: text.into(),
            x,
            y,
        }
    }

    /// Check if this is a line segment.
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Text content, if this is a text command.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Line { .. } => None,
        }
    }

    /// Replay this command onto a canvas.
    pub fn apply(&self, canvas: &mut dyn Canvas) {
        match self {
            Self::Line {
                x0,
                y0,
                x1,
                y1,
                colour,
            } => canvas.draw_line(*x0, *y0, *x1, *y1, *colour),
            Self::Text { font, text, x, y } => canvas.draw_text(*font, text, *x, *y),
        }
    }
}

impl fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line {
                x0,
                y0,
                x1,
                y1,
                colour,
            } => write!(
                f,
                "line ({:.2}, {:.2}) -> ({:.2}, {:.2}) #{:08x}",
                x0, y0, x1, y1, colour
            ),
            Self::Text { font, text, x, y } => {
                let font = match font {
                    Font::Small => "small",
                    Font::Normal => "normal",
                };
                write!(f, "text {} ({}, {}) {:?}", font, x, y, text)
            },
        }
    }
}
