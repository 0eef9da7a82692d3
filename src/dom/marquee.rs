//! `.logos-track` infinite scroll

use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Event, HtmlElement, MouseEvent};

use crate::fx::Marquee;
use crate::fx::marquee::{CLONE_PASSES, MARQUEE_MEASURE_DELAY_MS};

use super::{FrameLoop, document, listen, query, set_style, set_timeout, window};

struct LogosScroll {
    track: HtmlElement,
    originals: Vec<HtmlElement>,
    marquee: Marquee,
}

impl LogosScroll {
    fn measure(&mut self) {
        self.marquee
            .measure(self.originals.iter().map(|item| item.offset_width() as f64));
        log::debug!("Marquee set width: {:?}", self.marquee.set_width());
    }

    fn advance(&mut self) {
        if self.marquee.advance().is_some() {
            set_style(&self.track, "transform", &self.marquee.transform());
        }
    }
}

pub fn init(speed: f64, gap: f64) {
    let Some(track) = query(".logos-track") else { return };

    let children = track.children();
    let originals: Vec<HtmlElement> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect();

    for _ in 0..CLONE_PASSES {
        for item in &originals {
            if let Ok(clone) = item.clone_node_with_deep(true) {
                let _ = track.append_child(&clone);
            }
        }
    }
    // CSS keyframes would fight the manual transform
    set_style(&track, "animation", "none");

    let state = Rc::new(RefCell::new(LogosScroll {
        track: track.clone(),
        originals,
        marquee: Marquee::new(speed, gap),
    }));

    let frames = FrameLoop::new();
    {
        let state = state.clone();
        set_timeout(MARQUEE_MEASURE_DELAY_MS, move || {
            state.borrow_mut().measure();
            let stepper = state.clone();
            frames.start(move |_| {
                stepper.borrow_mut().advance();
                ControlFlow::Continue(())
            });
            // The loop runs for the page lifetime
            std::mem::forget(frames);
        });
    }

    // Web fonts change item widths
    if let Some(ready) = document().and_then(|d| d.fonts().ready().ok()) {
        let state = state.clone();
        spawn_local(async move {
            if JsFuture::from(ready).await.is_ok() {
                state.borrow_mut().measure();
            }
        });
    }

    if let Some(window) = window() {
        let state = state.clone();
        listen(&window, "resize", move |_: Event| state.borrow_mut().measure());
    }

    {
        let state = state.clone();
        listen(&track, "mouseenter", move |_: MouseEvent| {
            state.borrow_mut().marquee.set_paused(true)
        });
    }
    listen(&track, "mouseleave", move |_: MouseEvent| {
        state.borrow_mut().marquee.set_paused(false)
    });
}
