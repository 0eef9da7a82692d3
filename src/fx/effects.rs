//! Background-effects preference
//!
//! The only persisted state on the page: whether the decorative background
//! stylesheet is attached.

use crate::platform::KeyValueStore;

/// Storage key holding `"true"` or `"false"`
pub const EFFECTS_KEY: &str = "effectsEnabled";

/// Saved preference; anything but an explicit `"false"` means enabled
pub fn load_preference(store: &impl KeyValueStore) -> bool {
    store.get(EFFECTS_KEY).as_deref() != Some("false")
}

/// Effects on/off state, persisted on every change
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EffectsSwitch {
    active: bool,
}

impl EffectsSwitch {
    /// Starts inactive; call [`EffectsSwitch::restore`] to apply the saved preference
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Enable if the saved preference allows it. Returns the resulting state.
    pub fn restore(&mut self, store: &mut impl KeyValueStore) -> bool {
        if load_preference(store) {
            self.enable(store);
        }
        self.active
    }

    pub fn enable(&mut self, store: &mut impl KeyValueStore) {
        self.active = true;
        store.set(EFFECTS_KEY, "true");
    }

    pub fn disable(&mut self, store: &mut impl KeyValueStore) {
        self.active = false;
        store.set(EFFECTS_KEY, "false");
    }

    /// Flip and persist; returns the new state
    pub fn toggle(&mut self, store: &mut impl KeyValueStore) -> bool {
        if self.active {
            self.disable(store);
        } else {
            self.enable(store);
        }
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;

    #[test]
    fn test_absent_preference_defaults_enabled() {
        let mut store = MemoryStore::new();
        let mut switch = EffectsSwitch::new();
        assert!(switch.restore(&mut store));
        assert_eq!(store.get(EFFECTS_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_saved_false_stays_disabled() {
        let mut store = MemoryStore::new();
        store.set(EFFECTS_KEY, "false");
        let mut switch = EffectsSwitch::new();
        assert!(!switch.restore(&mut store));
        assert_eq!(store.get(EFFECTS_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_unknown_value_means_enabled() {
        let mut store = MemoryStore::new();
        store.set(EFFECTS_KEY, "off");
        assert!(load_preference(&store));
    }

    #[test]
    fn test_double_toggle_round_trip() {
        for initial in ["true", "false"] {
            let mut store = MemoryStore::new();
            store.set(EFFECTS_KEY, initial);
            let mut switch = EffectsSwitch::new();
            let before = switch.restore(&mut store);

            let flipped = switch.toggle(&mut store);
            assert_eq!(flipped, !before);
            assert_eq!(store.get(EFFECTS_KEY), Some(flipped.to_string()));

            let back = switch.toggle(&mut store);
            assert_eq!(back, before);
            assert_eq!(store.get(EFFECTS_KEY), Some(back.to_string()));
        }
    }
}
