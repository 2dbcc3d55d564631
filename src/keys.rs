//! Translation keys looked up through [`Translator`](crate::host::Translator).

/// Caption above the drop slots.
pub const DROPS: &str = "jer.worldgen.drops";
/// Header of the biome restriction list.
pub const BIOMES: &str = "jer.worldgen.biomes";
/// Header of the developer average-per-chunk line.
pub const AVERAGE_CHUNK: &str = "jer.worldgen.averageChunk";
/// Header of the drop statistics tooltip.
pub const AVERAGE: &str = "jer.worldgen.average";
/// Label for a drop that needs no enchantment.
pub const BASE: &str = "jer.worldgen.base";
/// Silk touch requirement notice.
pub const SILK_TOUCH: &str = "jer.silkTouch";
/// Fortune enchantment name.
pub const FORTUNE: &str = "enchantment.fortune";
