//! Mobile/desktop classification

/// Widths at or below this are treated as mobile
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// What the page knows about the device at startup
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    /// `ontouchstart` exists on `window`
    pub touch_events: bool,
    pub max_touch_points: u32,
}

impl Viewport {
    /// Narrow or touch-capable. Pointer-tracking effects are skipped here.
    pub fn is_mobile(&self, breakpoint: f64) -> bool {
        self.width <= breakpoint || self.touch_events || self.max_touch_points > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_detection() {
        let desktop = Viewport {
            width: 1440.0,
            ..Default::default()
        };
        assert!(!desktop.is_mobile(MOBILE_BREAKPOINT));
        assert!(
            Viewport {
                width: 768.0,
                ..desktop
            }
            .is_mobile(MOBILE_BREAKPOINT)
        );
        assert!(
            Viewport {
                touch_events: true,
                ..desktop
            }
            .is_mobile(MOBILE_BREAKPOINT)
        );
        assert!(
            Viewport {
                max_touch_points: 5,
                ..desktop
            }
            .is_mobile(MOBILE_BREAKPOINT)
        );
    }
}
