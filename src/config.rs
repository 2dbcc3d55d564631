//! Layout constants and user settings.

use crate::chart::PlotGeometry;

/// Placement of everything drawn inside one recipe area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Plot rectangle.
    pub plot: PlotGeometry,
    /// X of the drops caption.
    pub drops_caption_x: i32,
    /// Y of the drops caption (8 pixels above the drop slots).
    pub drops_caption_y: i32,
    /// Width of the whole recipe area; the dimension title is centred on it.
    pub recipe_width: i32,
    /// Height of the whole recipe area.
    pub recipe_height: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            plot: PlotGeometry::default(),
            drops_caption_x: 6,
            drops_caption_y: 66 - 8,
            recipe_width: 168,
            recipe_height: 74,
        }
    }
}

/// User-facing toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Show developer data such as the average count per chunk.
    pub show_dev_data: bool,
}
