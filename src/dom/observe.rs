//! IntersectionObserver wrapper

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Visibility trigger settings
#[derive(Debug, Clone, Copy)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px",
        }
    }
}

/// Call `on_visible` for each target as it enters the viewport.
///
/// Returns `None` without observing anything when `targets` is empty or the
/// browser lacks IntersectionObserver.
pub fn on_visible<F>(
    targets: &[HtmlElement],
    options: ObserverOptions,
    mut on_visible: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&HtmlElement, &IntersectionObserver) + 'static,
{
    if targets.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(target) = entry.target().dyn_into::<HtmlElement>() {
                    on_visible(&target, &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {:?}", err);
                return None;
            }
        };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Some(observer)
}
