//! Deterministic effect logic
//!
//! Everything an effect computes lives here, free of any DOM dependency:
//! - Pure functions of their inputs (hour, rect, pointer, scroll offset)
//! - Seeded RNG only, passed in by the caller
//! - Frame-stepped state machines that the `dom` layer drives from
//!   timers and animation frames

pub mod attr;
pub mod counter;
pub mod effects;
pub mod loader;
pub mod marquee;
pub mod pointer;
pub mod scramble;
pub mod scroll;
pub mod startup;
pub mod time_of_day;
pub mod typing;
pub mod viewport;

pub use counter::{CounterAnimation, CounterSpec, ease_out_quart, format_compact};
pub use effects::{EFFECTS_KEY, EffectsSwitch, load_preference};
pub use loader::LoaderProgress;
pub use marquee::Marquee;
pub use pointer::{Point, Rect};
pub use scramble::{ScrambleCell, ScrambleFrame, Scrambler};
pub use startup::{Component, StartupPlan, StaggerGroup, STAGGER_GROUPS};
pub use time_of_day::TimeOfDay;
pub use typing::{TypingCycle, TypingOptions, TypingStep};
pub use viewport::Viewport;
