//! Terminal preview - state and behavior for the interactive chart viewer.
//!
//! This module owns the pointer, the focused recipe slot and the English
//! strings used when no host localisation is available. Drawing lives in
//! [`ui`].

pub mod ui;

use ratatui::layout::Rect;

use crate::chart::ChartRenderer;
use crate::config::{LayoutConfig, Settings};
use crate::data::{LootDrop, Slot, WorldGenEntry};
use crate::host::Translator;
use crate::keys;
use crate::pointer::PointerState;
use crate::tooltip::drop_statistics_tooltip;

/// English strings for the translation keys the chart uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslator;

impl Translator for EnglishTranslator {
    fn translate(&self, key: &str) -> String {
        match key {
            keys::DROPS => "Drops",
            keys::BIOMES => "Biomes",
            keys::AVERAGE_CHUNK => "Average per chunk",
            keys::AVERAGE => "Average drops",
            keys::BASE => "Base",
            keys::SILK_TOUCH => "Requires Silk Touch",
            keys::FORTUNE => "Fortune",
            other => other,
        }
        .to_string()
    }

    fn translate_dimension(&self, id: &str) -> String {
        match id {
            "overworld" | "0" => "Overworld".to_string(),
            "the_nether" | "-1" => "The Nether".to_string(),
            "the_end" | "1" => "The End".to_string(),
            other => other.to_string(),
        }
    }
}

/// Which recipe slot the tooltip panel describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotFocus {
    /// No slot; only the chart tooltip is shown.
    #[default]
    None,
    /// The generated block.
    Input,
    /// The drop at this index.
    Output(usize),
}

/// State for the preview.
#[derive(Debug, Clone)]
pub struct PreviewState {
    /// Entry being shown.
    pub entry: WorldGenEntry<String>,
    /// Chart renderer.
    pub renderer: ChartRenderer,
    /// User settings.
    pub settings: Settings,
    /// Pointer in recipe pixels.
    pub pointer: PointerState,
    /// Focused slot.
    pub focus: SlotFocus,
    /// Terminal area of the chart canvas from the last frame.
    pub canvas_area: Option<Rect>,
    /// Status message.
    pub status: String,
}

impl PreviewState {
    /// Create a new preview state with the pointer in the middle of the plot.
    pub fn new(entry: WorldGenEntry<String>, layout: LayoutConfig, settings: Settings) -> Self {
        let plot = layout.plot;
        let pointer = PointerState::at(
            plot.origin_x + plot.axis_width / 2,
            plot.origin_y - plot.axis_height / 2,
        );
        Self {
            entry,
            renderer: ChartRenderer::new(layout),
            settings,
            pointer,
            focus: SlotFocus::None,
            canvas_area: None,
            status: "Ready".to_string(),
        }
    }

    /// Move the pointer by whole recipe pixels, staying inside the recipe.
    pub fn move_pointer(&mut self, dx: i32, dy: i32) {
        let layout = self.renderer.layout();
        self.pointer = PointerState::at(
            (self.pointer.x + dx).clamp(0, layout.recipe_width - 1),
            (self.pointer.y + dy).clamp(0, layout.recipe_height - 1),
        );
    }

    /// Place the pointer from a terminal cell, keeping the sub-pixel part.
    ///
    /// Returns `false` when the cell is outside the chart canvas.
    pub fn point_at_cell(&mut self, column: u16, row: u16) -> bool {
        let Some(area) = self.canvas_area else {
            return false;
        };
        if area.width == 0
            || area.height == 0
            || column < area.x
            || column >= area.x + area.width
            || row < area.y
            || row >= area.y + area.height
        {
            return false;
        }

        let layout = self.renderer.layout();
        let logical_width = f64::from(layout.recipe_width);
        let physical_width = f64::from(area.width);
        // Centre of the cell, in terminal columns.
        let device_x = f64::from(column - area.x) + 0.5;
        let x = (device_x * logical_width / physical_width).floor() as i32;
        let y = ((f64::from(row - area.y) + 0.5) * f64::from(layout.recipe_height)
            / f64::from(area.height))
        .floor() as i32;

        self.pointer = PointerState::at(x, y).with_device(device_x, logical_width, physical_width);
        true
    }

    /// Cycle focus: none, the block, then each drop.
    pub fn cycle_focus(&mut self) {
        let drops = self.entry.drops().len();
        self.focus = match self.focus {
            SlotFocus::None => SlotFocus::Input,
            SlotFocus::Input if drops > 0 => SlotFocus::Output(0),
            SlotFocus::Output(i) if i + 1 < drops => SlotFocus::Output(i + 1),
            _ => SlotFocus::None,
        };
        self.status = match self.focus {
            SlotFocus::None => "Slot: none".to_string(),
            SlotFocus::Input => format!("Slot: {}", self.entry.block()),
            SlotFocus::Output(i) => format!("Slot: {}", self.entry.drops()[i].item),
        };
    }

    /// Toggle developer data.
    pub fn toggle_dev_data(&mut self) {
        self.settings.show_dev_data = !self.settings.show_dev_data;
        self.status = format!(
            "Developer data {}",
            if self.settings.show_dev_data { "on" } else { "off" }
        );
    }

    /// Chart tooltip for the current pointer.
    pub fn chart_tooltip(&self) -> Vec<String> {
        self.renderer.tooltip_strings(&self.entry, &self.pointer)
    }

    /// Slot tooltip for the focused slot.
    pub fn slot_tooltip(&self, translator: &dyn Translator) -> Vec<String> {
        let slot = match self.focus {
            SlotFocus::None => return Vec::new(),
            SlotFocus::Input => Slot::Input,
            SlotFocus::Output(i) => match self.entry.drops().get(i) {
                Some(drop) => Slot::Output(&drop.item),
                None => return Vec::new(),
            },
        };
        let subject = self.entry.tooltip_subject(slot);
        drop_statistics_tooltip(&subject, translator, &self.settings)
    }
}

/// Parse a drop argument: `ITEM=LEVEL:CHANCE[,LEVEL:CHANCE...]`.
///
/// `coal=0:100%,1:133%` describes coal dropping at 100% without fortune and
/// 133% with Fortune I.
pub fn parse_drop(input: &str) -> std::result::Result<(String, Vec<LootDrop>), String> {
    let (item, loot) = input
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM=LEVEL:CHANCE, got '{}'", input))?;
    let item = item.trim();
    if item.is_empty() {
        return Err(format!("missing item name in '{}'", input));
    }

    let mut drops = Vec::new();
    for part in loot.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (level, chance) = part
            .split_once(':')
            .ok_or_else(|| format!("expected LEVEL:CHANCE, got '{}'", part))?;
        let level = level
            .trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid fortune level '{}': {}", level, e))?;
        drops.push(LootDrop::new(level, chance.trim()));
    }
    Ok((item.to_string(), drops))
}
