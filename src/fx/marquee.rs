//! Infinite logo marquee
//!
//! The track holds the original items followed by [`CLONE_PASSES`] copies.
//! Translating left by exactly one original set width looks identical to
//! not translating at all, so the offset wraps there.

/// Copies of the original item set appended to the track
pub const CLONE_PASSES: usize = 5;
/// Pixels advanced per animation frame
pub const MARQUEE_SPEED: f64 = 0.5;
/// Horizontal gap after each item, matching the track's CSS `gap`
pub const MARQUEE_GAP: f64 = 60.0;
/// Delay before the first measurement
pub const MARQUEE_MEASURE_DELAY_MS: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Marquee {
    offset: f64,
    speed: f64,
    gap: f64,
    set_width: Option<f64>,
    paused: bool,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(MARQUEE_SPEED, MARQUEE_GAP)
    }
}

impl Marquee {
    pub fn new(speed: f64, gap: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.max(0.0),
            gap,
            set_width: None,
            paused: false,
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn set_width(&self) -> Option<f64> {
        self.set_width
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Record the width of one original set from its item widths.
    /// A zero-width set (nothing laid out yet) leaves the marquee idle.
    pub fn measure<I>(&mut self, item_widths: I)
    where
        I: IntoIterator<Item = f64>,
    {
        let (sum, count) = item_widths
            .into_iter()
            .fold((0.0, 0usize), |(sum, count), w| (sum + w, count + 1));
        let width = sum + self.gap * count as f64;
        self.set_width = (width > 0.0).then_some(width);
    }

    /// Advance one frame. Returns the offset to render, or `None` when
    /// nothing moved (paused or unmeasured).
    pub fn advance(&mut self) -> Option<f64> {
        if self.paused {
            return None;
        }
        let width = self.set_width?;

        self.offset += self.speed;
        if self.offset >= width {
            self.offset -= width;
            // Only reachable when speed exceeds a whole set
            if self.offset >= width {
                self.offset %= width;
            }
        }
        Some(self.offset)
    }

    /// CSS transform for the current offset
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_idle_until_measured() {
        let mut marquee = Marquee::default();
        assert_eq!(marquee.advance(), None);
        marquee.measure(Vec::<f64>::new());
        assert_eq!(marquee.advance(), None);
        marquee.measure([100.0, 140.0]);
        assert_eq!(marquee.set_width(), Some(360.0));
        assert_eq!(marquee.advance(), Some(0.5));
    }

    #[test]
    fn test_pause_holds_offset() {
        let mut marquee = Marquee::default();
        marquee.measure([200.0]);
        marquee.advance();
        marquee.set_paused(true);
        assert_eq!(marquee.advance(), None);
        assert_eq!(marquee.offset(), 0.5);
        marquee.set_paused(false);
        assert_eq!(marquee.advance(), Some(1.0));
        assert_eq!(marquee.transform(), "translateX(-1px)");
    }

    #[test]
    fn test_remeasure_smaller_wraps_next_frame() {
        let mut marquee = Marquee::new(10.0, 0.0);
        marquee.measure([100.0]);
        for _ in 0..9 {
            marquee.advance();
        }
        assert_eq!(marquee.offset(), 90.0);
        marquee.measure([40.0]);
        assert_eq!(marquee.advance(), Some(20.0));
    }

    proptest! {
        #[test]
        fn prop_wrap_law(
            widths in proptest::collection::vec(1.0f64..400.0, 1..12),
            speed in 0.1f64..5.0,
            frames in 1usize..5000,
        ) {
            let mut marquee = Marquee::new(speed, MARQUEE_GAP);
            marquee.measure(widths.iter().copied());
            let w = marquee.set_width().unwrap();

            for _ in 0..frames {
                let old = marquee.offset();
                let new = marquee.advance().unwrap();
                prop_assert!(new >= 0.0);
                prop_assert!(new < w);
                if old + speed >= w {
                    prop_assert!((new - (old + speed - w)).abs() < 1e-9);
                } else {
                    prop_assert!((new - (old + speed)).abs() < 1e-9);
                }
            }
        }
    }
}
