//! Typewriter cycle over a list of words

use serde::{Deserialize, Serialize};

/// Pause after a word is fully deleted, before typing the next
pub const NEXT_WORD_PAUSE_MS: u32 = 500;

/// Timing for a typing effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingOptions {
    /// How long a finished word stays on screen
    pub wait: u32,
    pub type_speed: u32,
    pub delete_speed: u32,
}

impl Default for TypingOptions {
    fn default() -> Self {
        Self {
            wait: 3000,
            type_speed: 100,
            delete_speed: 50,
        }
    }
}

/// Text to show now, and how long until the next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingStep {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct TypingCycle {
    words: Vec<Vec<char>>,
    options: TypingOptions,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl TypingOptions {
    /// Zero timings mean "unset" and take the default
    pub fn or_defaults(self) -> Self {
        let defaults = Self::default();
        let pick = |value: u32, fallback: u32| if value == 0 { fallback } else { value };
        Self {
            wait: pick(self.wait, defaults.wait),
            type_speed: pick(self.type_speed, defaults.type_speed),
            delete_speed: pick(self.delete_speed, defaults.delete_speed),
        }
    }
}

impl TypingCycle {
    /// `None` for an empty word list: nothing to type
    pub fn new<I, S>(words: I, options: TypingOptions) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            options: options.or_defaults(),
            word_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    #[cfg(test)]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[cfg(test)]
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Type or delete one character
    pub fn step(&mut self) -> TypingStep {
        let word = &self.words[self.word_index];

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(word.len());
        }
        let text: String = word[..self.char_index].iter().collect();

        let mut delay_ms = if self.deleting {
            self.options.delete_speed
        } else {
            self.options.type_speed
        };

        if !self.deleting && self.char_index == word.len() {
            delay_ms = self.options.wait;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay_ms = NEXT_WORD_PAUSE_MS;
        }

        TypingStep { text, delay_ms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cycle: &mut TypingCycle, n: usize) -> Vec<(String, u32)> {
        (0..n)
            .map(|_| {
                let step = cycle.step();
                (step.text, step.delay_ms)
            })
            .collect()
    }

    #[test]
    fn test_types_holds_deletes_advances() {
        let mut cycle = TypingCycle::new(["ab", "c"], TypingOptions::default()).unwrap();
        let steps = texts(&mut cycle, 6);
        assert_eq!(
            steps,
            vec![
                ("a".to_string(), 100),
                ("ab".to_string(), 3000),
                ("a".to_string(), 50),
                ("".to_string(), 500),
                ("c".to_string(), 3000),
                ("".to_string(), 500),
            ]
        );
        // Wrapped back to the first word
        assert_eq!(cycle.word_index(), 0);
        assert_eq!(cycle.step().text, "a");
    }

    #[test]
    fn test_multibyte_words() {
        let mut cycle = TypingCycle::new(["né"], TypingOptions::default()).unwrap();
        assert_eq!(cycle.step().text, "n");
        assert_eq!(cycle.step().text, "né");
        assert!(cycle.is_deleting());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(TypingCycle::new(Vec::<String>::new(), TypingOptions::default()).is_none());

        let mut cycle = TypingCycle::new([""], TypingOptions::default()).unwrap();
        assert_eq!(cycle.step(), TypingStep { text: String::new(), delay_ms: 3000 });
        assert_eq!(cycle.step(), TypingStep { text: String::new(), delay_ms: 500 });
    }

    #[test]
    fn test_options_from_json() {
        let opts: TypingOptions = serde_json::from_str(r#"{"typeSpeed": 80}"#).unwrap();
        assert_eq!(opts.type_speed, 80);
        assert_eq!(opts.wait, 3000);
    }

    #[test]
    fn test_zero_timings_use_defaults() {
        let opts = TypingOptions {
            wait: 0,
            type_speed: 0,
            delete_speed: 20,
        };
        assert_eq!(
            opts.or_defaults(),
            TypingOptions {
                wait: 3000,
                type_speed: 100,
                delete_speed: 20,
            }
        );

        let opts: TypingOptions = serde_json::from_str(r#"{"wait": 0}"#).unwrap();
        let mut cycle = TypingCycle::new(["a"], opts).unwrap();
        assert_eq!(cycle.step().delay_ms, 3000);
        assert_eq!(cycle.step().delay_ms, 500);
    }
}
