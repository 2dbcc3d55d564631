//! Tooltip lines for the block and drop slots.

use super::TooltipSubject;
use crate::config::Settings;
use crate::data::LootDrop;
use crate::host::Translator;
use crate::keys;
use crate::util::format_float;

/// Tooltip lines describing the hovered slot.
///
/// For the block itself: silk touch notice, biome restrictions and, with
/// developer data enabled, the average count per chunk. For a drop: a header
/// followed by one line per distinct chance.
pub fn drop_statistics_tooltip(
    subject: &TooltipSubject<'_>,
    translator: &dyn Translator,
    settings: &Settings,
) -> Vec<String> {
    match subject {
        TooltipSubject::Primary {
            silk_touch_needed,
            biome_restrictions,
            average_per_chunk,
        } => {
            let mut lines = Vec::new();
            if *silk_touch_needed {
                lines.push(translator.translate(keys::SILK_TOUCH));
            }

            if !biome_restrictions.is_empty() {
                lines.push(format!("{}:", translator.translate(keys::BIOMES)));
                lines.extend(biome_restrictions.iter().cloned());
            }

            if settings.show_dev_data {
                lines.push(format!("{}:", translator.translate(keys::AVERAGE_CHUNK)));
                lines.push(format_float(*average_per_chunk));
            }
            lines
        },
        TooltipSubject::Drop { loot_drops } => {
            let mut lines = vec![translator.translate(keys::AVERAGE)];
            lines.extend(loot_lines(loot_drops, translator));
            lines
        },
    }
}

/// One line per loot drop, skipping drops whose chance repeats the one
/// directly before it.
fn loot_lines(loot_drops: &[LootDrop], translator: &dyn Translator) -> Vec<String> {
    let mut previous: Option<&str> = None;
    let mut lines = Vec::new();

    for drop in loot_drops {
        if previous == Some(drop.chance.as_str()) {
            continue;
        }
        previous = Some(drop.chance.as_str());

        let label = if drop.fortune_level > 0 {
            translator.translate_enchantment(keys::FORTUNE, drop.fortune_level)
        } else {
            translator.translate(keys::BASE)
        };
        lines.push(format!("  {}: {}", label, drop.chance));
    }

    lines
}
