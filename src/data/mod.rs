//! Data model for world generation entries.
//!
//! An entry couples a generated block with its chance curve over a range of
//! Y levels and with the items it drops when mined.

mod curve;
mod entry;

pub use curve::ProbabilityCurve;
pub use entry::{DropEntry, LootDrop, Slot, WorldGenEntry, DEFAULT_LINE_COLOUR};
