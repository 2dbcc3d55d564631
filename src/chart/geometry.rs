//! Plot area placement and hit testing.

/// Rectangle the curve is mapped into, in top-down pixel space.
///
/// The origin is the bottom-left corner of the plot: X grows to the right
/// along the Y-level axis, chance grows upward (towards smaller pixel Y).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotGeometry {
    /// Pixel X of the left edge.
    pub origin_x: i32,
    /// Pixel Y of the bottom edge.
    pub origin_y: i32,
    /// Width of the Y-level axis in pixels.
    pub axis_width: i32,
    /// Height of the chance axis in pixels.
    pub axis_height: i32,
}

impl Default for PlotGeometry {
    fn default() -> Self {
        Self {
            origin_x: 49 - 20,
            origin_y: 52,
            axis_width: 100 + 20 + 8,
            axis_height: 40,
        }
    }
}

impl PlotGeometry {
    /// Create a new plot geometry.
    #[must_use]
    pub const fn new(origin_x: i32, origin_y: i32, axis_width: i32, axis_height: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            axis_width,
            axis_height,
        }
    }

    /// Pixel Y of the top edge.
    #[must_use]
    pub fn top(&self) -> i32 {
        self.origin_y - self.axis_height
    }

    /// Pixel X of the right edge.
    #[must_use]
    pub fn right(&self) -> i32 {
        self.origin_x + self.axis_width
    }

    /// Check if a pointer position is over the plot.
    ///
    /// The near edges accept one extra pixel and the far edges are exclusive,
    /// so the box is `[x - 1, right) x [top - 1, bottom)`.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.origin_x - 1 && x < self.right() && y >= self.top() - 1 && y < self.origin_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let g = PlotGeometry::default();
        assert_eq!(g, PlotGeometry::new(29, 52, 128, 40));
        assert_eq!(g.top(), 12);
        assert_eq!(g.right(), 157);
    }

    #[test]
    fn test_contains_inside() {
        let g = PlotGeometry::default();
        for x in 28..157 {
            for y in 11..52 {
                assert!(g.contains(x, y), "({}, {}) should be inside", x, y);
            }
        }
    }

    #[test]
    fn test_contains_left_edge() {
        let g = PlotGeometry::default();
        assert!(g.contains(28, 30));
        assert!(!g.contains(27, 30));
    }

    #[test]
    fn test_contains_right_edge() {
        let g = PlotGeometry::default();
        assert!(g.contains(156, 30));
        assert!(!g.contains(157, 30));
    }

    #[test]
    fn test_contains_top_edge() {
        let g = PlotGeometry::default();
        assert!(g.contains(80, 11));
        assert!(!g.contains(80, 10));
    }

    #[test]
    fn test_contains_bottom_edge() {
        let g = PlotGeometry::default();
        assert!(g.contains(80, 51));
        assert!(!g.contains(80, 52));
    }
}
