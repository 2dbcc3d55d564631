//! Preview UI rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas as CanvasWidget, Context, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{EnglishTranslator, PreviewState};
use crate::host::{Canvas, Font, FontMetrics};
use crate::util::argb_to_rgb;

const TEXT: Color = Color::Rgb(235, 219, 178);
const BORDER: Color = Color::Rgb(102, 92, 84);
const HEADING: Color = Color::Rgb(251, 184, 108);
const STATUS_BG: Color = Color::Rgb(60, 56, 54);

/// Font metrics for a terminal grid: every column spans `cell_width` recipe
/// pixels, whatever the font.
#[derive(Debug, Clone, Copy)]
pub struct TerminalFont {
    /// Recipe pixels per terminal column.
    pub cell_width: f64,
}

impl FontMetrics for TerminalFont {
    fn string_width(&self, _font: Font, text: &str) -> i32 {
        (text.width() as f64 * self.cell_width).round() as i32
    }
}

/// Adapter drawing chart commands onto a ratatui canvas context.
///
/// The canvas has its Y axis pointing up, so pixel rows are flipped.
struct ContextCanvas<'c, 'a> {
    ctx: &'c mut Context<'a>,
    height: f64,
}

impl Canvas for ContextCanvas<'_, '_> {
    fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, colour: u32) {
        let (r, g, b) = argb_to_rgb(colour);
        self.ctx.draw(&CanvasLine::new(
            x0,
            self.height - y0,
            x1,
            self.height - y1,
            Color::Rgb(r, g, b),
        ));
    }

    fn draw_text(&mut self, _font: Font, text: &str, x: i32, y: i32) {
        self.ctx.print(
            f64::from(x),
            self.height - f64::from(y),
            Line::styled(text.to_string(), Style::default().fg(TEXT)),
        );
    }
}

/// Draw the preview.
pub fn draw(f: &mut Frame<'_>, state: &mut PreviewState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_chart(f, chunks[0], state);
    draw_tooltip(f, chunks[1], state);
    draw_status(f, chunks[2], state);
}

fn draw_chart(f: &mut Frame<'_>, area: Rect, state: &mut PreviewState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(" World generation ")
        .title_style(Style::default().fg(HEADING));
    let inner = block.inner(area);
    state.canvas_area = Some(inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let layout = state.renderer.layout();
    let width = f64::from(layout.recipe_width);
    let height = f64::from(layout.recipe_height);
    let font = TerminalFont {
        cell_width: width / f64::from(inner.width),
    };
    let commands = state
        .renderer
        .render(&state.entry, &font, &EnglishTranslator);
    let pointer = state.pointer;

    let canvas = CanvasWidget::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            let mut target = ContextCanvas { ctx, height };
            for command in &commands {
                command.apply(&mut target);
            }
            target.ctx.layer();
            target.ctx.print(
                f64::from(pointer.x),
                height - f64::from(pointer.y),
                Line::styled("+", Style::default().fg(HEADING)),
            );
        });

    f.render_widget(canvas, area);
}

fn draw_tooltip(f: &mut Frame<'_>, area: Rect, state: &PreviewState) {
    let mut lines: Vec<Line<'_>> = state
        .chart_tooltip()
        .into_iter()
        .map(|l| Line::styled(l, Style::default().fg(HEADING)))
        .collect();
    lines.extend(
        state
            .slot_tooltip(&EnglishTranslator)
            .into_iter()
            .map(Line::from),
    );

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BORDER))
                .title(" Tooltip "),
        );
    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame<'_>, area: Rect, state: &PreviewState) {
    let text = format!(
        "{} | x={} y={} | hjkl move, Tab slot, d dev data, q quit",
        state.status, state.pointer.x, state.pointer.y
    );
    let paragraph = Paragraph::new(text).style(Style::default().fg(TEXT).bg(STATUS_BG));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LayoutConfig, Settings};
    use crate::data::{LootDrop, ProbabilityCurve, WorldGenEntry};
    use ratatui::{backend::TestBackend, Terminal};

    fn state() -> PreviewState {
        let curve = ProbabilityCurve::new(vec![0.1, 0.5, 0.2]).unwrap();
        let entry = WorldGenEntry::new("gold_ore".to_string(), curve, 0, 2, "overworld")
            .unwrap()
            .with_drop("raw_gold".to_string(), vec![LootDrop::new(0, "100%")]);
        PreviewState::new(entry, LayoutConfig::default(), Settings::default())
    }

    fn screen(state: &mut PreviewState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|f| draw(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_terminal_font_scales_columns() {
        let font = TerminalFont { cell_width: 2.0 };
        assert_eq!(font.string_width(Font::Small, "50.00%"), 12);
        assert_eq!(font.string_width(Font::Normal, ""), 0);
    }

    #[test]
    fn test_draw_shows_title_and_tooltip() {
        let mut s = state();
        let text = screen(&mut s);
        assert!(text.contains("Overworld"));
        assert!(text.contains("Drops"));
        assert!(text.contains("Y: 1 (50.00%)"));
        assert!(s.canvas_area.is_some());
    }

    #[test]
    fn test_draw_shows_slot_tooltip() {
        let mut s = state();
        s.cycle_focus();
        s.cycle_focus();
        let text = screen(&mut s);
        assert!(text.contains("Average drops"));
        assert!(text.contains("Base: 100%"));
    }
}
