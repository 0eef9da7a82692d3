//! Wall-clock hour to page theme

/// Coarse part of the day, written to `<html data-time="...">`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Classify a 24h clock hour. Hours past 23 wrap to night.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=7 => TimeOfDay::Morning,
            8..=16 => TimeOfDay::Day,
            17..=19 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Day => "day",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(TimeOfDay::from_hour(4), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(8), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(16), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(20), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Night);
    }

    proptest! {
        #[test]
        fn prop_hour_partition(hour in 0u32..24) {
            let expected = if (5..8).contains(&hour) {
                "morning"
            } else if (8..17).contains(&hour) {
                "day"
            } else if (17..20).contains(&hour) {
                "evening"
            } else {
                "night"
            };
            prop_assert_eq!(TimeOfDay::from_hour(hour).as_str(), expected);
        }
    }
}
