//! `[data-counter]` count-up on first view

use std::ops::ControlFlow;

use web_sys::HtmlElement;

use crate::fx::{CounterAnimation, CounterSpec};

use super::observe::{ObserverOptions, on_visible};
use super::{FrameLoop, add_class, query_all};

pub fn init(duration_ms: f64) {
    let counters = query_all("[data-counter]");
    let options = ObserverOptions {
        threshold: 0.5,
        ..Default::default()
    };
    on_visible(&counters, options, move |el, observer| {
        if el.class_list().contains("counted") {
            return;
        }
        add_class(el, "counted");
        observer.unobserve(el);
        animate(el.clone(), duration_ms);
    });
}

fn animate(el: HtmlElement, duration_ms: f64) {
    let Some(spec) = el.get_attribute("data-counter").and_then(|counter| {
        CounterSpec::from_attributes(
            &counter,
            el.get_attribute("data-prefix"),
            el.get_attribute("data-suffix"),
        )
    }) else {
        log::debug!("Skipping unparsable data-counter");
        return;
    };

    let frames = FrameLoop::new();
    let mut animation: Option<CounterAnimation> = None;
    // The loop owns a handle to itself until the count finishes
    let mut keep_alive = Some(frames.clone());
    frames.start(move |time| {
        let anim = animation.get_or_insert_with(|| {
            CounterAnimation::new(spec.clone(), duration_ms, time)
        });
        el.set_text_content(Some(&anim.text_at(time)));
        if anim.is_finished(time) {
            keep_alive.take();
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
}
