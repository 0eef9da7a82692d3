//! `<html data-time>` theme from the local clock

use crate::fx::TimeOfDay;

use super::{document, set_interval};

/// Write the current part of the day to the root element
pub fn apply() -> Option<TimeOfDay> {
    let root = document()?.document_element()?;
    let time = TimeOfDay::from_hour(js_sys::Date::new_0().get_hours());
    let _ = root.set_attribute("data-time", time.as_str());
    Some(time)
}

/// Apply now, then refresh every `refresh_ms`
pub fn init(refresh_ms: i32) {
    if let Some(time) = apply() {
        log::debug!("Time of day: {}", time.as_str());
    }
    set_interval(refresh_ms, || {
        apply();
    });
}
