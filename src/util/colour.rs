//! ARGB colour helpers.

use crate::error::{ChartError, Result};

/// Parse `AARRGGBB` or `RRGGBB` hex, with an optional leading `#`.
///
/// Six-digit colours are treated as fully opaque.
pub fn parse_argb(input: &str) -> Result<u32> {
    let hex = input.trim().trim_start_matches('#');
    let value = u32::from_str_radix(hex, 16).map_err(|_| ChartError::invalid_colour(input))?;
    match hex.len() {
        8 => Ok(value),
        6 => Ok(0xFF00_0000 | value),
        _ => Err(ChartError::invalid_colour(input)),
    }
}

/// Split an ARGB colour into its RGB channels.
pub fn argb_to_rgb(colour: u32) -> (u8, u8, u8) {
    (
        ((colour >> 16) & 0xFF) as u8,
        ((colour >> 8) & 0xFF) as u8,
        (colour & 0xFF) as u8,
    )
}
