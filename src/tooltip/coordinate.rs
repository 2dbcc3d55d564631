//! Hover tooltip for a Y level on the chart.

use crate::chart::PlotGeometry;
use crate::data::ProbabilityCurve;
use crate::pointer::PointerState;
use crate::util::format_chance;

/// Sample index under the pointer, if it falls on the curve.
///
/// Columns are `axis_width / n` pixels wide here, one narrower in count
/// than the spacing the line is drawn with, so the last drawn point sits
/// just past the last hover column.
pub fn hovered_index(
    curve: &ProbabilityCurve,
    geometry: &PlotGeometry,
    pointer: &PointerState,
) -> Option<usize> {
    let n = curve.len();
    if n == 0 || geometry.axis_width <= 0 {
        return None;
    }
    let space = f64::from(geometry.axis_width) / n as f64;
    let index = ((pointer.exact_x() - f64::from(geometry.origin_x) + 1.0) / space).floor();
    if index >= 0.0 && index < n as f64 {
        Some(index as usize)
    } else {
        None
    }
}

/// `"Y: <level> (<chance>%)"` for the sample under the pointer.
///
/// Returns `None` when the pointer is left or right of the curve; the
/// index is never clamped.
pub fn coordinate_tooltip(
    curve: &ProbabilityCurve,
    geometry: &PlotGeometry,
    min_y: i32,
    pointer: &PointerState,
) -> Option<String> {
    let index = hovered_index(curve, geometry, pointer)?;
    let chance = curve.get(index)? * 100.0;
    let level = i64::from(min_y) + index as i64;
    Some(format!("Y: {} {}", level, format_chance(chance)))
}
