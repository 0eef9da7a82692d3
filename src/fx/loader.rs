//! Synthetic page-load progress

/// Interval between progress ticks
pub const LOADER_TICK_MS: i32 = 100;
/// Largest random increment per tick (percent)
pub const LOADER_MAX_STEP: f64 = 30.0;
/// Pause between reaching 100% and hiding the loader
pub const LOADER_HIDE_DELAY_MS: i32 = 200;
/// Delay after the window `load` event before forcing completion
pub const LOADER_LOAD_FALLBACK_MS: i32 = 500;

/// `document.readyState` value once the window `load` event has fired
pub fn load_already_fired(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Progress bar fill in percent, never above 100
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoaderProgress {
    loaded: f64,
}

impl LoaderProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.loaded
    }

    pub fn is_complete(&self) -> bool {
        self.loaded >= 100.0
    }

    /// Add `unit * LOADER_MAX_STEP` where `unit` is a random draw in [0, 1).
    /// Returns true once the bar is full.
    pub fn advance(&mut self, unit: f64) -> bool {
        self.loaded += unit.clamp(0.0, 1.0) * LOADER_MAX_STEP;
        if self.loaded >= 100.0 {
            self.loaded = 100.0;
        }
        self.is_complete()
    }

    pub fn complete(&mut self) {
        self.loaded = 100.0;
    }

    /// CSS width value
    pub fn width(&self) -> String {
        format!("{}%", self.percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_clamps_at_full() {
        let mut progress = LoaderProgress::new();
        assert!(!progress.advance(0.5));
        assert_eq!(progress.width(), "15%");
        let mut ticks = 0;
        while !progress.advance(0.99) {
            ticks += 1;
        }
        assert!(ticks < 10);
        assert_eq!(progress.percent(), 100.0);
        assert_eq!(progress.width(), "100%");
    }

    #[test]
    fn test_complete_is_idempotent() {
        let mut progress = LoaderProgress::new();
        progress.complete();
        progress.complete();
        assert!(progress.is_complete());
        assert!(progress.advance(1.0));
        assert_eq!(progress.percent(), 100.0);
    }

    #[test]
    fn test_load_already_fired() {
        assert!(load_already_fired("complete"));
        assert!(!load_already_fired("interactive"));
        assert!(!load_already_fired("loading"));
        assert!(!load_already_fired(""));
    }
}
