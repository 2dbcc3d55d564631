//! World generation entry and its drops.

use super::ProbabilityCurve;
use crate::error::{ChartError, Result};
use crate::tooltip::TooltipSubject;

/// Line colour used when an entry does not provide one (opaque grey).
pub const DEFAULT_LINE_COLOUR: u32 = 0xFF9B_9B9B;

/// One variant of how a drop chance was computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LootDrop {
    /// Fortune level required for this chance (0 = none).
    pub fortune_level: u32,
    /// Chance as the host formatted it, e.g. `"12.5%"` or `"1-3"`.
    pub chance: String,
}

impl LootDrop {
    /// Create a new loot drop descriptor.
    pub fn new(fortune_level: u32, chance: impl Into<String>) -> Self {
        Self {
            fortune_level,
            chance: chance.into(),
        }
    }
}

/// A dropped item together with its loot variants.
#[derive(Debug, Clone, PartialEq)]
pub struct DropEntry<I> {
    /// The dropped item.
    pub item: I,
    /// Loot variants, usually ordered by fortune level.
    pub loot: Vec<LootDrop>,
}

/// Recipe slot the pointer is over.
#[derive(Debug, PartialEq, Eq)]
pub enum Slot<'a, I> {
    /// The generated block itself.
    Input,
    /// One of the output items.
    Output(&'a I),
}

impl<I> Clone for Slot<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Slot<'_, I> {}

/// A generated block with its chance curve over a Y range.
#[derive(Debug, Clone)]
pub struct WorldGenEntry<I> {
    block: I,
    drops: Vec<DropEntry<I>>,
    curve: ProbabilityCurve,
    min_y: i32,
    max_y: i32,
    colour: u32,
    dimension: String,
    silk_touch: bool,
    biome_restrictions: Vec<String>,
    average_per_chunk: f32,
}

impl<I> WorldGenEntry<I> {
    /// Create an entry. The curve must hold exactly one sample per Y level.
    pub fn new(
        block: I,
        curve: ProbabilityCurve,
        min_y: i32,
        max_y: i32,
        dimension: impl Into<String>,
    ) -> Result<Self> {
        let expected = i64::from(max_y) - i64::from(min_y) + 1;
        if expected < 1 || curve.len() as i64 != expected {
            return Err(ChartError::range_mismatch(min_y, max_y, curve.len()));
        }
        Ok(Self {
            block,
            drops: Vec::new(),
            curve,
            min_y,
            max_y,
            colour: DEFAULT_LINE_COLOUR,
            dimension: dimension.into(),
            silk_touch: false,
            biome_restrictions: Vec::new(),
            average_per_chunk: 0.0,
        })
    }

    /// Set the line colour (ARGB).
    pub fn with_colour(mut self, colour: u32) -> Self {
        self.colour = colour;
        self
    }

    /// Add a dropped item.
    pub fn with_drop(mut self, item: I, loot: Vec<LootDrop>) -> Self {
        self.drops.push(DropEntry { item, loot });
        self
    }

    /// Mark the block as requiring silk touch.
    pub fn with_silk_touch(mut self, silk_touch: bool) -> Self {
        self.silk_touch = silk_touch;
        self
    }

    /// Restrict generation to the given biomes.
    pub fn with_biome_restrictions(mut self, biomes: Vec<String>) -> Self {
        self.biome_restrictions = biomes;
        self
    }

    /// Set the average block count per chunk.
    pub fn with_average_per_chunk(mut self, average: f32) -> Self {
        self.average_per_chunk = average;
        self
    }

    /// The generated block.
    pub fn block(&self) -> &I {
        &self.block
    }

    /// Dropped items with their loot variants.
    pub fn drops(&self) -> &[DropEntry<I>] {
        &self.drops
    }

    /// Chance curve.
    pub fn curve(&self) -> &ProbabilityCurve {
        &self.curve
    }

    /// Lowest Y level of the curve.
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Highest Y level of the curve.
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Line colour (ARGB).
    pub fn colour(&self) -> u32 {
        self.colour
    }

    /// Dimension id.
    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    /// Whether silk touch is needed to obtain the block.
    pub fn silk_touch_needed(&self) -> bool {
        self.silk_touch
    }

    /// Biomes the block is restricted to; empty means everywhere.
    pub fn biome_restrictions(&self) -> &[String] {
        &self.biome_restrictions
    }

    /// Average block count per chunk.
    pub fn average_per_chunk(&self) -> f32 {
        self.average_per_chunk
    }

    /// Input ingredients: the block.
    pub fn inputs(&self) -> Vec<&I> {
        vec![&self.block]
    }

    /// Output ingredients: the block followed by every drop.
    pub fn outputs(&self) -> Vec<&I> {
        std::iter::once(&self.block)
            .chain(self.drops.iter().map(|d| &d.item))
            .collect()
    }
}

impl<I: PartialEq> WorldGenEntry<I> {
    /// Loot variants for a dropped item; empty if it is not a drop.
    pub fn loot_drops(&self, item: &I) -> &[LootDrop] {
        self.drops
            .iter()
            .find(|d| &d.item == item)
            .map(|d| d.loot.as_slice())
            .unwrap_or(&[])
    }

    /// Tooltip subject for the given slot.
    pub fn tooltip_subject(&self, slot: Slot<'_, I>) -> TooltipSubject<'_> {
        match slot {
            Slot::Input => TooltipSubject::Primary {
                silk_touch_needed: self.silk_touch,
                biome_restrictions: &self.biome_restrictions,
                average_per_chunk: self.average_per_chunk,
            },
            Slot::Output(item) => TooltipSubject::Drop {
                loot_drops: self.loot_drops(item),
            },
        }
    }
}
