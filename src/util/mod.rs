//! Utility functions.
//!
//! This module provides number formatting and colour helpers shared by the
//! chart labels, the tooltips and the terminal preview.

mod colour;
mod formatters;

pub use colour::{argb_to_rgb, parse_argb};
pub use formatters::{format_chance, format_float, format_percent};
