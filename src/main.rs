//! worldgen-chart - terminal preview of a world generation chart.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use worldgen_chart::chart::ChartRenderer;
use worldgen_chart::config::{LayoutConfig, Settings};
use worldgen_chart::data::{LootDrop, ProbabilityCurve, Slot, WorldGenEntry};
use worldgen_chart::host::{Font, FontMetrics};
use worldgen_chart::pointer::PointerState;
use worldgen_chart::preview::{self, EnglishTranslator, PreviewState};
use worldgen_chart::tooltip::drop_statistics_tooltip;
use worldgen_chart::util::parse_argb;
use worldgen_chart::ChartError;

#[derive(Parser, Debug)]
#[command(name = "worldgen-chart")]
#[command(about = "Preview the chance-by-height chart of a world generation entry", long_about = None)]
struct Args {
    /// Chance per Y level, lowest level first (e.g. 0.1,0.5,0.2)
    #[arg(long, value_delimiter = ',', required = true)]
    chances: Vec<f32>,

    /// Y level of the first chance
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    min_y: i32,

    /// Name of the generated block
    #[arg(long, default_value = "block")]
    block: String,

    /// Dimension id
    #[arg(long, default_value = "overworld")]
    dimension: String,

    /// Line colour as AARRGGBB or RRGGBB hex
    #[arg(long, default_value = "ff9b9b9b")]
    colour: String,

    /// The block needs silk touch to be obtained
    #[arg(long)]
    silk_touch: bool,

    /// Biome the block is restricted to (repeatable)
    #[arg(long = "biome")]
    biomes: Vec<String>,

    /// Average block count per chunk
    #[arg(long, default_value_t = 0.0)]
    average: f32,

    /// Drop as ITEM=LEVEL:CHANCE[,LEVEL:CHANCE...] (repeatable)
    #[arg(long = "drop", value_parser = preview::parse_drop)]
    drops: Vec<(String, Vec<LootDrop>)>,

    /// Show developer data in tooltips
    #[arg(long)]
    dev_data: bool,

    /// Print draw commands and tooltips instead of opening the preview
    #[arg(long)]
    dump: bool,

    /// Pointer position for --dump, as X,Y in recipe pixels
    #[arg(long, value_parser = parse_pointer, allow_negative_numbers = true)]
    pointer: Option<(i32, i32)>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

/// One recipe pixel per character in dump output.
struct CharFont;

impl FontMetrics for CharFont {
    fn string_width(&self, _font: Font, text: &str) -> i32 {
        text.chars().count() as i32
    }
}

fn parse_pointer(input: &str) -> std::result::Result<(i32, i32), String> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", input))?;
    let x = x.trim().parse().map_err(|e| format!("invalid X '{}': {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid Y '{}': {}", y, e))?;
    Ok((x, y))
}

fn build_entry(args: &Args) -> Result<WorldGenEntry<String>> {
    let curve = ProbabilityCurve::new(args.chances.clone())?;
    let max_y = i32::try_from(curve.len())
        .ok()
        .and_then(|len| args.min_y.checked_add(len))
        .and_then(|end| end.checked_sub(1))
        .ok_or_else(|| ChartError::range_mismatch(args.min_y, i32::MAX, curve.len()))?;
    let mut entry = WorldGenEntry::new(
        args.block.clone(),
        curve,
        args.min_y,
        max_y,
        args.dimension.clone(),
    )?
    .with_colour(parse_argb(&args.colour)?)
    .with_silk_touch(args.silk_touch)
    .with_biome_restrictions(args.biomes.clone())
    .with_average_per_chunk(args.average);
    for (item, loot) in &args.drops {
        entry = entry.with_drop(item.clone(), loot.clone());
    }
    Ok(entry)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting worldgen-chart");
    }

    let entry = build_entry(&args)?;
    let settings = Settings {
        show_dev_data: args.dev_data,
    };
    tracing::info!(
        "Loaded {} with {} samples for Y {}..={}",
        entry.block(),
        entry.curve().len(),
        entry.min_y(),
        entry.max_y()
    );

    if args.dump {
        dump(&entry, settings, args.pointer);
    } else {
        run_preview(PreviewState::new(entry, LayoutConfig::default(), settings))?;
    }

    if args.log.is_some() {
        tracing::info!("worldgen-chart exited");
    }

    Ok(())
}

fn dump(entry: &WorldGenEntry<String>, settings: Settings, pointer: Option<(i32, i32)>) {
    let renderer = ChartRenderer::default();
    for command in renderer.render(entry, &CharFont, &EnglishTranslator) {
        println!("{}", command);
    }

    if let Some((x, y)) = pointer {
        for line in renderer.tooltip_strings(entry, &PointerState::at(x, y)) {
            println!("tooltip: {}", line);
        }
    }

    let slots = std::iter::once((entry.block().clone(), Slot::Input)).chain(
        entry
            .drops()
            .iter()
            .map(|d| (d.item.clone(), Slot::Output(&d.item))),
    );
    for (name, slot) in slots {
        let subject = entry.tooltip_subject(slot);
        for line in drop_statistics_tooltip(&subject, &EnglishTranslator, &settings) {
            println!("[{}] {}", name, line);
        }
    }
}

fn run_preview(state: PreviewState) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, state);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("Preview failed: {}", err);
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut state: PreviewState,
) -> Result<()> {
    loop {
        terminal.draw(|f| preview::ui::draw(f, &mut state))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match (key.modifiers, key.code) {
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => return Ok(()),

                // Pointer movement, shifted moves jump 10 pixels
                (KeyModifiers::NONE, KeyCode::Left)
                | (KeyModifiers::NONE, KeyCode::Char('h')) => state.move_pointer(-1, 0),
                (KeyModifiers::NONE, KeyCode::Right)
                | (KeyModifiers::NONE, KeyCode::Char('l')) => state.move_pointer(1, 0),
                (KeyModifiers::NONE, KeyCode::Up)
                | (KeyModifiers::NONE, KeyCode::Char('k')) => state.move_pointer(0, -1),
                (KeyModifiers::NONE, KeyCode::Down)
                | (KeyModifiers::NONE, KeyCode::Char('j')) => state.move_pointer(0, 1),
                (_, KeyCode::Char('H')) => state.move_pointer(-10, 0),
                (_, KeyCode::Char('L')) => state.move_pointer(10, 0),
                (_, KeyCode::Char('K')) => state.move_pointer(0, -10),
                (_, KeyCode::Char('J')) => state.move_pointer(0, 10),

                (KeyModifiers::NONE, KeyCode::Tab) => state.cycle_focus(),
                (KeyModifiers::NONE, KeyCode::Char('d')) => state.toggle_dev_data(),
                _ => {},
            },
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    state.point_at_cell(mouse.column, mouse.row);
                }
            },
            _ => {},
        }
    }
}
