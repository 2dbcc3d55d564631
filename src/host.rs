//! Services the host application provides to the chart.
//!
//! The chart never draws or looks up strings on its own; it is handed
//! implementations of these traits by the caller.

/// Font used for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Small font used for axis labels and captions.
    Small,
    /// Regular font used for the dimension title.
    Normal,
}

/// Text measurement.
pub trait FontMetrics {
    /// Rendered width of `text` in pixels.
    fn string_width(&self, font: Font, text: &str) -> i32;
}

/// Drawing surface in top-down pixel space.
pub trait Canvas {
    /// Draw a line segment in an ARGB colour.
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, colour: u32);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, font: Font, text: &str, x: i32, y: i32);
}

/// Localised string lookup.
pub trait Translator {
    /// Translate a key.
    fn translate(&self, key: &str) -> String;

    /// Display name of a dimension id.
    fn translate_dimension(&self, id: &str) -> String {
        id.to_string()
    }

    /// Enchantment name with its level, e.g. `"Fortune II"`.
    fn translate_enchantment(&self, key: &str, level: u32) -> String {
        format!("{} {}", self.translate(key), roman_numeral(level))
    }
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translator for KeyTranslator {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Roman numeral for enchantment levels; falls back to digits past 10.
pub fn roman_numeral(level: u32) -> String {
    const NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
    match level {
        1..=10 => NUMERALS[level as usize - 1].to_string(),
        _ => level.to_string(),
    }
}
