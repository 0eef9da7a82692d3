//! Full-screen loader with a synthetic progress bar

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;
use rand_pcg::Pcg32;
use web_sys::{Event, HtmlElement};

use crate::fx::LoaderProgress;
use crate::fx::loader::{
    LOADER_HIDE_DELAY_MS, LOADER_LOAD_FALLBACK_MS, LOADER_TICK_MS, load_already_fired,
};

use super::{
    add_class, clear_interval, document, listen, query, set_body_overflow, set_interval, set_style,
    set_timeout, window,
};

struct PageLoader {
    loader: Option<HtmlElement>,
    bar: Option<HtmlElement>,
    progress: LoaderProgress,
    rng: Pcg32,
    interval: Option<i32>,
}

impl PageLoader {
    fn update_bar(&self) {
        if let Some(bar) = &self.bar {
            set_style(bar, "width", &self.progress.width());
        }
    }

    fn hide(&self) {
        if let Some(loader) = &self.loader {
            add_class(loader, "loaded");
            set_body_overflow("");
        }
    }

    fn stop_ticking(&mut self) {
        if let Some(id) = self.interval.take() {
            clear_interval(id);
        }
    }
}

/// Tick the bar toward 100%, and force it full shortly after `load`.
/// Either path hides the loader once the bar is full.
pub fn init(rng: Pcg32) {
    let state = Rc::new(RefCell::new(PageLoader {
        loader: query(".page-loader"),
        bar: query(".loader-progress"),
        progress: LoaderProgress::new(),
        rng,
        interval: None,
    }));

    let interval = {
        let state = state.clone();
        set_interval(LOADER_TICK_MS, move || {
            let mut loader = state.borrow_mut();
            let unit = loader.rng.random::<f64>();
            let done = loader.progress.advance(unit);
            loader.update_bar();
            if done {
                loader.stop_ticking();
                let state = state.clone();
                set_timeout(LOADER_HIDE_DELAY_MS, move || state.borrow().hide());
            }
        })
    };
    state.borrow_mut().interval = interval;

    // The module may start after `load` has already fired
    let ready_state = document().map(|d| d.ready_state()).unwrap_or_default();
    if load_already_fired(&ready_state) {
        schedule_fallback(state);
        return;
    }
    let Some(window) = window() else { return };
    listen(&window, "load", move |_: Event| schedule_fallback(state.clone()));
}

fn schedule_fallback(state: Rc<RefCell<PageLoader>>) {
    set_timeout(LOADER_LOAD_FALLBACK_MS, move || {
        {
            let mut loader = state.borrow_mut();
            loader.stop_ticking();
            loader.progress.complete();
            loader.update_bar();
        }
        set_timeout(LOADER_HIDE_DELAY_MS, move || state.borrow().hide());
    });
}
