//! worldgen-chart - chance-by-height charts for world generation entries.
//!
//! Given a generated block and the chance of finding it at each Y level,
//! worldgen-chart lays the curve out on a fixed pixel plot, produces the
//! draw commands for the line and its axis labels, and turns pointer
//! positions back into Y levels for hover tooltips.
//!
//! # Features
//!
//! - Pure, stateless rendering into [`chart::DrawCommand`]s
//! - Hit testing with sub-pixel pointer correction
//! - Block and drop tooltips with fortune-level statistics
//! - Host services (fonts, drawing, localisation) injected as traits
//! - Interactive terminal preview
//!
//! # Example
//!
//! ```ignore
//! use worldgen_chart::chart::ChartRenderer;
//! use worldgen_chart::data::{ProbabilityCurve, WorldGenEntry};
//! use worldgen_chart::host::KeyTranslator;
//! use worldgen_chart::pointer::PointerState;
//!
//! let curve = ProbabilityCurve::new(vec![0.1, 0.5, 0.2])?;
//! let entry = WorldGenEntry::new("iron_ore", curve, 0, 2, "overworld")?;
//! let renderer = ChartRenderer::default();
//!
//! let commands = renderer.render(&entry, &my_font, &KeyTranslator);
//! let tooltip = renderer.tooltip_strings(&entry, &PointerState::at(93, 30));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod chart;
pub mod config;
pub mod data;
pub mod error;
pub mod host;
pub mod keys;
pub mod pointer;
pub mod preview;
pub mod tooltip;
pub mod util;

pub use error::{ChartError, Result};
