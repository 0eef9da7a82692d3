//! Count-up animation for `[data-counter]` statistics

use super::attr::parse_int_prefix;

/// Default animation length
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// What a counter element counts to, parsed from its data attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: i64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    /// Build from `data-counter`, `data-prefix`, `data-suffix`.
    /// An unparsable counter value means the element is left alone.
    pub fn from_attributes(
        counter: &str,
        prefix: Option<String>,
        suffix: Option<String>,
    ) -> Option<Self> {
        Some(Self {
            target: parse_int_prefix(counter)?,
            prefix: prefix.unwrap_or_default(),
            suffix: suffix.unwrap_or_default(),
        })
    }

    pub fn render(&self, value: i64) -> String {
        format!("{}{}{}", self.prefix, format_compact(value), self.suffix)
    }
}

/// Decelerating curve: fast start, gentle landing
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Compact display: `1.5M`, `2K`, `42`
pub fn format_compact(num: i64) -> String {
    if num >= 1_000_000 {
        format!("{}M", to_fixed(num as f64 / 1_000_000.0, 1))
    } else if num >= 1_000 {
        format!("{}K", to_fixed(num as f64 / 1_000.0, 0))
    } else {
        num.to_string()
    }
}

/// Fixed-point formatting that rounds like `Number.prototype.toFixed`:
/// the exact binary value decides, and exact ties go away from zero.
fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // Zero residual means `scaled` holds the exact product
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract().abs() == 0.5 {
        // std formatting would round this tie to even
        let away = scaled.trunc() + scaled.signum();
        return format!("{:.*}", digits, away / scale);
    }
    format!("{:.*}", digits, value)
}

/// A running count-up, keyed to the timestamp it started at
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    pub spec: CounterSpec,
    pub duration_ms: f64,
    pub started_at: f64,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec, duration_ms: f64, started_at: f64) -> Self {
        Self {
            spec,
            duration_ms,
            started_at,
        }
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, now: f64) -> i64 {
        let eased = ease_out_quart(self.progress(now));
        (self.spec.target as f64 * eased).floor() as i64
    }

    pub fn text_at(&self, now: f64) -> String {
        self.spec.render(self.value_at(now))
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn plain(target: i64) -> CounterSpec {
        CounterSpec {
            target,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(1_500_000), "1.5M");
        assert_eq!(format_compact(2_300), "2K");
        assert_eq!(format_compact(42), "42");
        assert_eq!(format_compact(2_500), "3K");
        assert_eq!(format_compact(999), "999");
        assert_eq!(format_compact(1_000_000), "1.0M");
    }

    #[test]
    fn test_format_compact_rounds_stored_value() {
        // 1.15 and 2.05 are stored just below the halfway point
        assert_eq!(format_compact(1_150_000), "1.1M");
        assert_eq!(format_compact(2_050_000), "2.0M");
        // Exact ties round up
        assert_eq!(format_compact(1_250_000), "1.3M");
        assert_eq!(format_compact(1_750_000), "1.8M");
        assert_eq!(format_compact(2_500), "3K");
        assert_eq!(format_compact(3_500), "4K");
        assert_eq!(format_compact(1_499), "1K");
        assert_eq!(format_compact(999_999), "1000K");
    }

    #[test]
    fn test_final_text() {
        let done = 10_000.0;
        for (target, text) in [(1_500_000, "1.5M"), (2_300, "2K"), (42, "42")] {
            let anim = CounterAnimation::new(plain(target), COUNTER_DURATION_MS, 0.0);
            assert!(anim.is_finished(done));
            assert_eq!(anim.text_at(done), text);
        }
    }

    #[test]
    fn test_prefix_suffix() {
        let spec = CounterSpec::from_attributes("98", Some("$".into()), Some("%".into())).unwrap();
        assert_eq!(spec.render(98), "$98%");
        assert!(CounterSpec::from_attributes("n/a", None, None).is_none());
    }

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let anim = CounterAnimation::new(plain(10), 0.0, 5.0);
        assert_eq!(anim.value_at(5.0), 10);
    }

    proptest! {
        #[test]
        fn prop_counts_up_monotonically(target in 0i64..10_000_000, a in 0.0f64..2000.0, b in 0.0f64..2000.0) {
            let anim = CounterAnimation::new(plain(target), COUNTER_DURATION_MS, 0.0);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(anim.value_at(lo) <= anim.value_at(hi));
            prop_assert!(anim.value_at(hi) <= target);
            prop_assert_eq!(anim.value_at(COUNTER_DURATION_MS), target);
        }
    }
}
