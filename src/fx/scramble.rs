//! Text scramble transition
//!
//! Every character position gets its own window: it keeps the old
//! character until `start`, shows flickering glyphs until `end`, then locks
//! in the new character. Windows are drawn from the caller's RNG so a
//! seeded RNG gives a reproducible animation.

use rand::Rng;

/// Symbols shown while a slot is scrambling. Underscores are repeated to
/// make them the most common glyph.
pub const SCRAMBLE_GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
    '_', '_', '_', '_', '_', '_', '_', '_',
];
/// Latest frame a slot may start scrambling (exclusive)
pub const START_WINDOW: u32 = 40;
/// Longest a slot may scramble before locking in (exclusive)
pub const SETTLE_WINDOW: u32 = 40;
/// Chance per frame that a scrambling slot picks a new glyph
pub const REROLL_CHANCE: f64 = 0.28;

/// One character position in the transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleSlot {
    pub from: Option<char>,
    pub to: Option<char>,
    pub start: u32,
    pub end: u32,
    glyph: Option<char>,
}

/// What a slot displays on a given frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrambleCell {
    /// Before `start`: the old character (or nothing past the old text's end)
    Original(Option<char>),
    /// Between `start` and `end`
    Glyph(char),
    /// At or past `end`: the new character
    Settled(Option<char>),
}

/// One rendered frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambleFrame {
    pub cells: Vec<ScrambleCell>,
    pub complete: bool,
}

impl ScrambleFrame {
    /// Visible text, glyphs included
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(|cell| match *cell {
                ScrambleCell::Original(c) | ScrambleCell::Settled(c) => c,
                ScrambleCell::Glyph(g) => Some(g),
            })
            .collect()
    }

    /// Markup with scrambling glyphs wrapped in `span.scramble-char`
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(self.cells.len() * 2);
        for cell in &self.cells {
            match *cell {
                ScrambleCell::Original(Some(c)) | ScrambleCell::Settled(Some(c)) => {
                    push_escaped(&mut html, c)
                }
                ScrambleCell::Glyph(g) => {
                    html.push_str("<span class=\"scramble-char\">");
                    push_escaped(&mut html, g);
                    html.push_str("</span>");
                }
                ScrambleCell::Original(None) | ScrambleCell::Settled(None) => {}
            }
        }
        html
    }
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}

/// Frame-stepped scramble state for one element
#[derive(Debug, Clone)]
pub struct Scrambler<R> {
    slots: Vec<ScrambleSlot>,
    frame: u32,
    rng: R,
}

impl<R: Rng> Scrambler<R> {
    pub fn new(rng: R) -> Self {
        Self {
            slots: Vec::new(),
            frame: 0,
            rng,
        }
    }

    pub fn slots(&self) -> &[ScrambleSlot] {
        &self.slots
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Replace any in-flight transition with `old` → `new`, from frame 0
    pub fn retarget(&mut self, old: &str, new: &str) {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let length = old.len().max(new.len());

        self.slots = (0..length)
            .map(|i| {
                let start = self.rng.random_range(0..START_WINDOW);
                let end = start + self.rng.random_range(0..SETTLE_WINDOW);
                ScrambleSlot {
                    from: old.get(i).copied(),
                    to: new.get(i).copied(),
                    start,
                    end,
                    glyph: None,
                }
            })
            .collect();
        self.frame = 0;
    }

    /// Render the current frame, then move to the next unless finished
    pub fn step(&mut self) -> ScrambleFrame {
        let frame = self.frame;
        let mut complete = 0;
        let mut cells = Vec::with_capacity(self.slots.len());

        for slot in &mut self.slots {
            let cell = if frame >= slot.end {
                complete += 1;
                ScrambleCell::Settled(slot.to)
            } else if frame >= slot.start {
                let glyph = match slot.glyph {
                    Some(g) if !self.rng.random_bool(REROLL_CHANCE) => g,
                    _ => random_glyph(&mut self.rng),
                };
                slot.glyph = Some(glyph);
                ScrambleCell::Glyph(glyph)
            } else {
                ScrambleCell::Original(slot.from)
            };
            cells.push(cell);
        }

        let complete = complete == self.slots.len();
        if !complete {
            self.frame += 1;
        }
        ScrambleFrame { cells, complete }
    }
}

fn random_glyph<R: Rng>(rng: &mut R) -> char {
    SCRAMBLE_GLYPHS[rng.random_range(0..SCRAMBLE_GLYPHS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn run_to_end(scrambler: &mut Scrambler<Pcg32>) -> (Vec<ScrambleFrame>, ScrambleFrame) {
        let mut frames = Vec::new();
        loop {
            let frame = scrambler.step();
            if frame.complete {
                return (frames, frame);
            }
            frames.push(frame);
        }
    }

    #[test]
    fn test_abc_to_de() {
        let mut scrambler = Scrambler::new(Pcg32::seed_from_u64(7));
        scrambler.retarget("ABC", "DE");
        assert_eq!(scrambler.slots().len(), 3);
        let (frames, last) = run_to_end(&mut scrambler);
        assert_eq!(last.text(), "DE");
        assert!(frames.len() < (START_WINDOW + SETTLE_WINDOW) as usize);
    }

    #[test]
    fn test_empty_transition_completes_immediately() {
        let mut scrambler = Scrambler::new(Pcg32::seed_from_u64(1));
        scrambler.retarget("", "");
        let frame = scrambler.step();
        assert!(frame.complete);
        assert_eq!(frame.text(), "");
        assert_eq!(scrambler.frame(), 0);
    }

    #[test]
    fn test_retarget_resets_frame() {
        let mut scrambler = Scrambler::new(Pcg32::seed_from_u64(3));
        scrambler.retarget("hello", "world");
        for _ in 0..10 {
            scrambler.step();
        }
        scrambler.retarget("world", "again!");
        assert_eq!(scrambler.frame(), 0);
        let (_, last) = run_to_end(&mut scrambler);
        assert_eq!(last.text(), "again!");
    }

    #[test]
    fn test_html_escapes_glyphs() {
        let frame = ScrambleFrame {
            cells: vec![
                ScrambleCell::Settled(Some('a')),
                ScrambleCell::Glyph('<'),
                ScrambleCell::Original(None),
                ScrambleCell::Original(Some('&')),
            ],
            complete: false,
        };
        assert_eq!(frame.to_html(), "a<span class=\"scramble-char\">&lt;</span>&amp;");
        assert_eq!(frame.text(), "a<&");
    }

    proptest! {
        #[test]
        fn prop_converges_and_respects_start(old in ".{0,12}", new in ".{0,12}", seed in any::<u64>()) {
            let mut scrambler = Scrambler::new(Pcg32::seed_from_u64(seed));
            scrambler.retarget(&old, &new);
            let slots = scrambler.slots().to_vec();

            let mut frame_index = 0u32;
            loop {
                let frame = scrambler.step();
                for (slot, cell) in slots.iter().zip(&frame.cells) {
                    if frame_index < slot.start {
                        prop_assert_eq!(*cell, ScrambleCell::Original(slot.from));
                    }
                    prop_assert!(slot.start < START_WINDOW);
                    prop_assert!(slot.end >= slot.start);
                }
                if frame.complete {
                    prop_assert_eq!(frame.text(), new.clone());
                    break;
                }
                frame_index += 1;
                prop_assert!(frame_index < START_WINDOW + SETTLE_WINDOW);
            }
        }
    }
}
