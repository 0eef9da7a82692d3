//! Scroll listeners: parallax layers, progress bar, mobile sticky CTA

use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use crate::fx::scroll::{
    parallax_offset, parallax_speed, parallax_transform, scroll_progress, sticky_cta_visible,
};

use super::{
    FrameLoop, add_class, document, listen, page_y_offset, query, query_all, rect_of, set_class,
    set_style, viewport_height, window,
};

/// `[data-parallax]` layers drift relative to the viewport centre.
/// Updates are coalesced to one per animation frame.
pub fn init_parallax() {
    let layers: Rc<Vec<(HtmlElement, f64)>> = query_all("[data-parallax]")
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute("data-parallax").as_deref());
            (el, speed)
        })
        .collect::<Vec<_>>()
        .into();
    if layers.is_empty() {
        return;
    }
    let Some(window) = window() else { return };

    let frames = FrameLoop::new();
    listen(&window, "scroll", move |_: Event| {
        if frames.is_running() {
            return;
        }
        let layers = layers.clone();
        frames.start(move |_| {
            let viewport = viewport_height();
            for (el, speed) in layers.iter() {
                let offset = parallax_offset(rect_of(el), viewport, *speed);
                set_style(el, "transform", &parallax_transform(offset));
            }
            ControlFlow::Break(())
        });
    });
}

/// Thin bar at the top of the page tracking read progress
pub fn init_scroll_progress() {
    let Some(document) = document() else { return };
    let Some(bar) = document
        .create_element("div")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    add_class(&bar, "scroll-progress");
    let Some(body) = document.body() else { return };
    if body.append_child(&bar).is_err() {
        return;
    }

    let Some(window) = window() else { return };
    listen(&window, "scroll", move |_: Event| {
        let Some(root) = document.document_element() else { return };
        let progress = scroll_progress(
            page_y_offset(),
            root.scroll_height() as f64,
            viewport_height(),
        );
        set_style(&bar, "width", &format!("{progress}%"));
    });
}

/// Show `.mobile-sticky-cta` once the hero has mostly scrolled away
pub fn init_mobile_sticky_cta() {
    let (Some(cta), Some(hero)) = (query(".mobile-sticky-cta"), query(".hero")) else {
        return;
    };
    let Some(window) = window() else { return };
    listen(&window, "scroll", move |_: Event| {
        let visible = sticky_cta_visible(
            page_y_offset(),
            hero.offset_top() as f64,
            hero.offset_height() as f64,
        );
        set_class(&cta, "visible", visible);
    });
}
