//! One-shot visibility effects: reveal classes, lazy images, grid stagger

use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use crate::fx::STAGGER_GROUPS;

use super::observe::{ObserverOptions, on_visible};
use super::{add_class, query_all};

const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale";

/// Add `visible` to reveal-tagged elements the first time they scroll in.
/// Safe to call again after more elements have been tagged.
pub fn init_scroll_reveal() {
    let elements = query_all(REVEAL_SELECTOR);
    log::debug!("ScrollReveal watching {} elements", elements.len());
    let options = ObserverOptions {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    };
    on_visible(&elements, options, |el, observer| {
        add_class(el, "visible");
        observer.unobserve(el);
    });
}

/// Swap `data-src` into `src` shortly before an image scrolls into view
pub fn init_lazy_load() {
    let images = query_all("img[data-src]");
    let options = ObserverOptions {
        root_margin: "50px",
        ..Default::default()
    };
    on_visible(&images, options, |el, observer| {
        if let (Some(src), Some(img)) = (
            el.get_attribute("data-src"),
            el.dyn_ref::<HtmlImageElement>(),
        ) {
            img.set_src(&src);
        }
        let _ = el.remove_attribute("data-src");
        observer.unobserve(el);
    });
}

/// Tag grid children with a reveal class and a cycling `stagger-N` delay
pub fn apply_stagger() {
    for group in STAGGER_GROUPS {
        for (index, el) in query_all(group.selector).iter().enumerate() {
            add_class(el, group.reveal_class);
            add_class(el, &group.stagger_class(index));
        }
    }
}
