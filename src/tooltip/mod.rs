//! Tooltip text for the chart and its recipe slots.

mod coordinate;
mod drops;

pub use coordinate::{coordinate_tooltip, hovered_index};
pub use drops::drop_statistics_tooltip;

use crate::data::LootDrop;

/// What a slot tooltip describes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TooltipSubject<'a> {
    /// The generated block.
    Primary {
        /// Silk touch is needed to obtain the block.
        silk_touch_needed: bool,
        /// Biomes the block is restricted to.
        biome_restrictions: &'a [String],
        /// Average block count per chunk.
        average_per_chunk: f32,
    },
    /// An item dropped by the block.
    Drop {
        /// Loot variants for the item.
        loot_drops: &'a [LootDrop],
    },
}
