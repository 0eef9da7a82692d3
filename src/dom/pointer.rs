//! Pointer-following effects. Magnetic, tilt and mouse tracking are desktop only.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use crate::fx::pointer::{
    MAGNETIC_RESET_TRANSFORM, TILT_LEAVE_MS, TILT_LEAVE_TRANSITION, TILT_RESET_TRANSFORM,
    TILT_TRANSITION, magnetic_offset, magnetic_transform, pointer_percent, ripple_geometry,
    tilt_angles, tilt_transform,
};

use super::{
    add_class, document, listen, pointer_of, query_all, query_in, rect_of, set_style, set_timeout,
};

const TILT_SELECTOR: &str = ".hero-card, .feature-card, .result-card, .testimonial-card";
const TRACKING_SELECTOR: &str = ".feature-card, .result-card";

/// `.magnetic-btn` labels drift toward the pointer
pub fn init_magnetic_buttons() {
    for button in query_all(".magnetic-btn") {
        let Some(text) = query_in(&button, ".magnetic-btn-text") else {
            continue;
        };

        {
            let button_ref = button.clone();
            let text = text.clone();
            listen(&button, "mousemove", move |event: MouseEvent| {
                let offset = magnetic_offset(rect_of(&button_ref), pointer_of(&event));
                set_style(&text, "transform", &magnetic_transform(offset));
            });
        }
        listen(&button, "mouseleave", move |_: MouseEvent| {
            set_style(&text, "transform", MAGNETIC_RESET_TRANSFORM);
        });
    }
}

/// Expanding `span.ripple` from the click point on every `.btn`
pub fn init_ripple() {
    for button in query_all(".btn") {
        let target = button.clone();
        listen(&button, "click", move |event: MouseEvent| {
            spawn_ripple(&target, &event);
        });
    }
}

fn spawn_ripple(button: &HtmlElement, event: &MouseEvent) {
    let Some(ripple) = document()
        .and_then(|d| d.create_element("span").ok())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    add_class(&ripple, "ripple");

    let geometry = ripple_geometry(rect_of(button), pointer_of(event));
    let size = format!("{}px", geometry.size);
    set_style(&ripple, "width", &size);
    set_style(&ripple, "height", &size);
    set_style(&ripple, "left", &format!("{}px", geometry.left));
    set_style(&ripple, "top", &format!("{}px", geometry.top));

    if button.append_child(&ripple).is_err() {
        return;
    }
    let done = ripple.clone();
    let on_end = Closure::once_into_js(move || done.remove());
    let _ = ripple.add_event_listener_with_callback("animationend", on_end.unchecked_ref());
}

/// Cards lean toward the pointer in 3D
pub fn init_tilt() {
    for card in query_all(TILT_SELECTOR) {
        set_style(&card, "transition", TILT_TRANSITION);

        {
            let target = card.clone();
            listen(&card, "mousemove", move |event: MouseEvent| {
                let angles = tilt_angles(rect_of(&target), pointer_of(&event));
                set_style(&target, "transform", &tilt_transform(angles));
            });
        }

        let target = card.clone();
        listen(&card, "mouseleave", move |_: MouseEvent| {
            set_style(&target, "transition", TILT_LEAVE_TRANSITION);
            set_style(&target, "transform", TILT_RESET_TRANSFORM);
            let target = target.clone();
            set_timeout(TILT_LEAVE_MS, move || {
                set_style(&target, "transition", TILT_TRANSITION);
            });
        });
    }
}

/// `--mouse-x` / `--mouse-y` custom properties for card spotlight gradients
pub fn init_card_tracking() {
    for card in query_all(TRACKING_SELECTOR) {
        let target = card.clone();
        listen(&card, "mousemove", move |event: MouseEvent| {
            let Some((x, y)) = pointer_percent(rect_of(&target), pointer_of(&event)) else {
                return;
            };
            set_style(&target, "--mouse-x", &format!("{x}%"));
            set_style(&target, "--mouse-y", &format!("{y}%"));
        });
    }
}
