//! Browser bindings for the page effects (WASM only)
//!
//! Each component queries its elements once at construction. An empty match
//! is not an error, the component simply does nothing. Listener closures
//! live for the page lifetime and are leaked with `Closure::forget`.

pub mod counters;
pub mod effects_toggle;
pub mod frame;
pub mod loader;
pub mod marquee;
pub mod navigation;
pub mod observe;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod text;
pub mod time_of_day;
pub mod video;

pub use frame::FrameLoop;

use wasm_bindgen::JsCast;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, EventTarget, HtmlElement, MouseEvent, NodeList, Window};

use crate::fx::{Point, Rect};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// All matches for `selector`, possibly none
pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    document()
        .and_then(|d| d.query_selector_all(selector).ok())
        .map(html_elements)
        .unwrap_or_default()
}

pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .ok()
        .map(html_elements)
        .unwrap_or_default()
}

/// First match for `selector`. Invalid selectors count as no match.
pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?.query_selector(selector).ok()??.dyn_into().ok()
}

pub fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector).ok()??.dyn_into().ok()
}

fn html_elements(list: NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attach a page-lifetime event listener
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// One-shot timer
pub fn set_timeout(ms: i32, callback: impl FnOnce() + 'static) -> Option<i32> {
    let window = window()?;
    let callback = Closure::once_into_js(callback);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ms)
        .ok()
}

/// Repeating timer, cancelled with [`clear_interval`]
pub fn set_interval(ms: i32, callback: impl FnMut() + 'static) -> Option<i32> {
    let window = window()?;
    let closure = Closure::<dyn FnMut()>::new(callback);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok();
    closure.forget();
    id
}

pub fn clear_interval(id: i32) {
    if let Some(window) = window() {
        window.clear_interval_with_handle(id);
    }
}

/// Future that resolves after `ms` milliseconds
pub fn sleep(ms: i32) -> JsFuture {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    JsFuture::from(promise)
}

pub fn page_y_offset() -> f64 {
    window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn pointer_of(event: &MouseEvent) -> Point {
    Point::new(event.client_x() as f64, event.client_y() as f64)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    if on {
        add_class(el, class);
    } else {
        remove_class(el, class);
    }
}

/// Lock (`"hidden"`) or release (`""`) page scrolling
pub fn set_body_overflow(value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        set_style(&body, "overflow", value);
    }
}
