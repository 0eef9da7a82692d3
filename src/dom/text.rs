//! Text-mutation effects: `[data-typing]` typewriter and `[data-scramble]`
//! phrase rotation

use std::cell::RefCell;
use std::future::Future;
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::HtmlElement;

use crate::fx::Scrambler;
use crate::fx::attr::{parse_int_prefix, parse_phrases};
use crate::fx::{TypingCycle, TypingOptions};

use super::{FrameLoop, query_all, set_timeout, sleep};

/// Scramble transition bound to one element.
///
/// Each `set_text` supersedes the previous run. The future of a superseded
/// run resolves to `false`, a completed one to `true`.
pub struct TextScramble {
    state: Rc<ScrambleState>,
}

struct ScrambleState {
    el: HtmlElement,
    scrambler: RefCell<Scrambler<Pcg32>>,
    frames: FrameLoop,
    resolve: RefCell<Option<js_sys::Function>>,
}

impl ScrambleState {
    fn settle(&self, completed: bool) {
        let resolve = self.resolve.borrow_mut().take();
        if let Some(resolve) = resolve {
            let _ = resolve.call1(&JsValue::NULL, &JsValue::from_bool(completed));
        }
    }

    fn render_frame(&self) -> ControlFlow<()> {
        let mut scrambler = self.scrambler.borrow_mut();
        let frame = scrambler.step();
        self.el.set_inner_html(&frame.to_html());
        if frame.complete {
            log::trace!("Scramble settled after {} frames", scrambler.frame());
            drop(scrambler);
            self.settle(true);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl TextScramble {
    pub fn new(el: HtmlElement, rng: Pcg32) -> Self {
        Self {
            state: Rc::new(ScrambleState {
                el,
                scrambler: RefCell::new(Scrambler::new(rng)),
                frames: FrameLoop::new(),
                resolve: RefCell::new(None),
            }),
        }
    }

    /// Scramble from the element's current text to `text`
    pub fn set_text(&self, text: &str) -> impl Future<Output = bool> + 'static {
        let state = &self.state;
        state.frames.cancel();
        state.settle(false);

        let mut resolver = None;
        let promise = js_sys::Promise::new(&mut |resolve, _reject| resolver = Some(resolve));
        *state.resolve.borrow_mut() = resolver;

        let old = state.el.inner_text();
        {
            let mut scrambler = state.scrambler.borrow_mut();
            scrambler.retarget(&old, text);
            log::trace!("Scrambling {} slots", scrambler.slots().len());
        }

        let weak: Weak<ScrambleState> = Rc::downgrade(state);
        state.frames.start(move |_| match weak.upgrade() {
            Some(state) => state.render_frame(),
            None => ControlFlow::Break(()),
        });

        let done = JsFuture::from(promise);
        async move { done.await.ok().and_then(|v| v.as_bool()).unwrap_or(false) }
    }
}

fn phrases_of(el: &HtmlElement, attribute: &str) -> Vec<String> {
    let Some(raw) = el.get_attribute(attribute) else {
        return Vec::new();
    };
    match parse_phrases(&raw) {
        Ok(phrases) => phrases,
        Err(err) => {
            log::warn!("Ignoring {attribute}: {err}");
            Vec::new()
        }
    }
}

/// Rotate every `[data-scramble]` element through its phrases, holding
/// each for `hold_ms`
pub fn init_text_scramble(hold_ms: i32, rng: &mut Pcg32) {
    for el in query_all("[data-scramble]") {
        let phrases = phrases_of(&el, "data-scramble");
        if phrases.is_empty() {
            continue;
        }
        log::debug!("TextScramble cycling {} phrases", phrases.len());
        let scramble = TextScramble::new(el, Pcg32::from_rng(rng));
        spawn_local(async move {
            for phrase in phrases.iter().cycle() {
                scramble.set_text(phrase).await;
                let _ = sleep(hold_ms).await;
            }
        });
    }
}

fn typing_options(el: &HtmlElement, defaults: TypingOptions) -> TypingOptions {
    let read = |attribute: &str, fallback: u32| {
        el.get_attribute(attribute)
            .and_then(|v| parse_int_prefix(&v))
            .and_then(|v| u32::try_from(v).ok())
            .filter(|&v| v > 0)
            .unwrap_or(fallback)
    };
    TypingOptions {
        wait: read("data-typing-wait", defaults.wait),
        type_speed: read("data-typing-speed", defaults.type_speed),
        delete_speed: read("data-typing-delete-speed", defaults.delete_speed),
    }
}

/// Start the typewriter on every `[data-typing]` element
pub fn init_typing(defaults: TypingOptions) {
    for el in query_all("[data-typing]") {
        let options = typing_options(&el, defaults);
        let Some(cycle) = TypingCycle::new(phrases_of(&el, "data-typing"), options) else {
            continue;
        };
        type_next(el, cycle);
    }
}

fn type_next(el: HtmlElement, mut cycle: TypingCycle) {
    let step = cycle.step();
    el.set_text_content(Some(&step.text));
    let delay = i32::try_from(step.delay_ms).unwrap_or(i32::MAX);
    set_timeout(delay, move || type_next(el, cycle));
}
