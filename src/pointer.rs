//! Pointer position as reported by the host.

/// Pointer state for one frame.
///
/// Hosts usually report the pointer in logical (GUI-scaled) pixels, which is
/// coarser than the device. The device position and both display widths are
/// kept so the sub-pixel remainder can be recovered; without it the hovered
/// sample aliases between neighbours on dense curves.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Logical X in recipe-local pixels.
    pub x: i32,
    /// Logical Y in recipe-local pixels.
    pub y: i32,
    /// Pointer X in physical device pixels.
    pub device_x: f64,
    /// Display width in logical pixels.
    pub logical_width: f64,
    /// Display width in physical pixels.
    pub physical_width: f64,
}

impl PointerState {
    /// Pointer with no sub-pixel information.
    #[must_use]
    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            device_x: 0.0,
            logical_width: 0.0,
            physical_width: 0.0,
        }
    }

    /// Attach device-space information used for sub-pixel correction.
    #[must_use]
    pub fn with_device(mut self, device_x: f64, logical_width: f64, physical_width: f64) -> Self {
        self.device_x = device_x;
        self.logical_width = logical_width;
        self.physical_width = physical_width;
        self
    }

    /// Fractional part of the device position mapped to logical pixels.
    #[must_use]
    pub fn sub_pixel_fraction(&self) -> f64 {
        if self.physical_width <= 0.0 || !self.physical_width.is_finite() {
            return 0.0;
        }
        let exact = self.device_x * self.logical_width / self.physical_width;
        if exact.is_finite() {
            exact - exact.floor()
        } else {
            0.0
        }
    }

    /// Logical X plus the recovered sub-pixel fraction.
    #[must_use]
    pub fn exact_x(&self) -> f64 {
        f64::from(self.x) + self.sub_pixel_fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_device_info() {
        let p = PointerState::at(40, 30);
        assert_eq!(p.sub_pixel_fraction(), 0.0);
        assert_eq!(p.exact_x(), 40.0);
    }

    #[test]
    fn test_sub_pixel_fraction() {
        // 2x GUI scale: device pixel 81 is logical 40.5
        let p = PointerState::at(40, 30).with_device(81.0, 960.0, 1920.0);
        assert!((p.sub_pixel_fraction() - 0.5).abs() < 1e-9);
        assert!((p.exact_x() - 40.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_physical_width() {
        let p = PointerState::at(10, 10).with_device(5.0, 100.0, 0.0);
        assert_eq!(p.exact_x(), 10.0);
    }
}
