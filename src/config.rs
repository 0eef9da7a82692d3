//! Page configuration
//!
//! Defaults match the landing page's stylesheet. A page can override any of
//! them with a JSON island:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "marqueeSpeed": 0.8, "logLevel": "debug" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::fx::counter::COUNTER_DURATION_MS;
use crate::fx::marquee::{MARQUEE_GAP, MARQUEE_SPEED};
use crate::fx::typing::TypingOptions;
use crate::fx::viewport::MOBILE_BREAKPOINT;

/// Element id of the JSON config island
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Tunables for every page effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    /// Stylesheet attached while background effects are enabled
    pub effects_stylesheet: String,
    /// Iframe source swapped into `.video-placeholder` on click
    pub video_embed_url: String,
    pub mobile_breakpoint: f64,
    /// Pixels per animation frame
    pub marquee_speed: f64,
    pub marquee_gap: f64,
    pub counter_duration_ms: f64,
    pub time_of_day_refresh_ms: i32,
    /// Default typing timings; elements may override per attribute
    pub typing: TypingOptions,
    /// Pause between `[data-scramble]` phrases
    pub scramble_hold_ms: i32,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            effects_stylesheet: "effects/backgrounds.css".to_string(),
            video_embed_url: "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0"
                .to_string(),
            mobile_breakpoint: MOBILE_BREAKPOINT,
            marquee_speed: MARQUEE_SPEED,
            marquee_gap: MARQUEE_GAP,
            counter_duration_ms: COUNTER_DURATION_MS,
            time_of_day_refresh_ms: 60_000,
            typing: TypingOptions::default(),
            scramble_hold_ms: 2_000,
            log_level: "info".to_string(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parsed log level, `Info` when unrecognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Load from the page's config island (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                // Logger is not up yet; go straight to the console
                web_sys::console::warn_1(
                    &format!("Ignoring invalid #{CONFIG_ELEMENT_ID}: {err}").into(),
                );
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config =
            LandingConfig::from_json(r#"{ "marqueeSpeed": 0.8, "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.marquee_speed, 0.8);
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.marquee_gap, MARQUEE_GAP);
        assert_eq!(config.effects_stylesheet, "effects/backgrounds.css");
    }

    #[test]
    fn test_nested_typing_override() {
        let config = LandingConfig::from_json(r#"{ "typing": { "wait": 1200 } }"#).unwrap();
        assert_eq!(config.typing.wait, 1200);
        assert_eq!(config.typing.type_speed, 100);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(LandingConfig::from_json("{ marqueeSpeed: }").is_err());
        assert!(LandingConfig::from_json(r#"{ "marqueeSpeed": "fast" }"#).is_err());
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = LandingConfig {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(LandingConfig::load(), LandingConfig::default());
    }
}
