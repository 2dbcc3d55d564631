//! Shared formatting utilities for labels and tooltips.

/// Format a fraction as a percentage with two decimals, e.g. `0.5` -> `"50.00%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format a percentage for the hover tooltip.
///
/// Values in `(0, 0.01]` print as `"<0.01%"` so a rare but possible level
/// never reads as zero. Zero and everything else use two decimals in
/// parentheses.
pub fn format_chance(percent: f32) -> String {
    if percent > 0.01 || percent == 0.0 {
        format!("({:.2}%)", percent)
    } else {
        "<0.01%".to_string()
    }
}

/// Format a float the way the host's string conversion does.
///
/// Plain decimals with at least one fractional digit for magnitudes in
/// `[1e-3, 1e7)`, otherwise scientific notation such as `1.0E-4`.
pub fn format_float(val: f32) -> String {
    if val.is_nan() {
        return "NaN".to_string();
    }
    if val.is_infinite() {
        return if val > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 || (1e-3..1e7).contains(&abs_val) {
        return format!("{:?}", val);
    }
    let sci = format!("{:e}", val);
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => {
            format!("{}E{}", mantissa, exponent)
        },
        Some((mantissa, exponent)) => format!("{}.0E{}", mantissa, exponent),
        None => sci,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.0), "0.00%");
        assert_eq!(format_percent(0.123456), "12.35%");
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(2.5), "2.5");
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.001), "0.001");
        assert_eq!(format_float(1.0e-4), "1.0E-4");
        assert_eq!(format_float(1.5e-5), "1.5E-5");
        assert_eq!(format_float(1.0e7), "1.0E7");
        assert_eq!(format_float(-2.5e8), "-2.5E8");
        assert_eq!(format_float(f32::INFINITY), "Infinity");
    }

    #[test]
    fn test_format_chance() {
        assert_eq!(format_chance(12.5), "(12.50%)");
        assert_eq!(format_chance(0.0), "(0.00%)");
        assert_eq!(format_chance(0.004), "<0.01%");
        assert_eq!(format_chance(0.01), "<0.01%");
        assert_eq!(format_chance(0.02), "(0.02%)");
    }
}
