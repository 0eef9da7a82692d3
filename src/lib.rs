//! Stark Landing - interactive effects for a marketing landing page
//!
//! Core modules:
//! - `fx`: Deterministic effect logic (easing, scramble, marquee, geometry)
//! - `dom`: Browser bindings that drive `fx` from events and frames (WASM only)
//! - `platform`: Browser/native platform abstraction
//! - `config`: Page-level tunables

pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod fx;
pub mod platform;

pub use config::LandingConfig;
