//! Cancellable requestAnimationFrame loop

use std::cell::{Cell, RefCell};
use std::ops::ControlFlow;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A repeating animation-frame task.
///
/// `start` supersedes whatever run is in flight, so retargeting an effect
/// is just calling `start` again. The step closure receives the frame
/// timestamp and returns `ControlFlow::Break(())` to stop.
#[derive(Clone, Default)]
pub struct FrameLoop {
    inner: Rc<Inner>,
}

#[derive(Default)]
struct Inner {
    handle: Cell<Option<i32>>,
    generation: Cell<u64>,
    active: RefCell<Option<FrameCallback>>,
    // Superseded callbacks may still be on the stack; drop them next frame
    retired: RefCell<Vec<FrameCallback>>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F>(&self, mut step: F)
    where
        F: FnMut(f64) -> ControlFlow<()> + 'static,
    {
        self.cancel();
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);

        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let callback = Closure::<dyn FnMut(f64)>::new(move |time: f64| {
            let Some(inner) = weak.upgrade() else { return };
            inner.handle.set(None);
            inner.retired.borrow_mut().clear();

            let flow = step(time);
            // `step` may have restarted or cancelled the loop
            if flow.is_continue() && inner.generation.get() == generation {
                inner.schedule();
            }
        });

        if let Some(previous) = self.inner.active.borrow_mut().replace(callback) {
            self.inner.retired.borrow_mut().push(previous);
        }
        self.inner.schedule();
    }

    /// Drop the pending frame. Safe to call when idle.
    pub fn cancel(&self) {
        self.inner.generation.set(self.inner.generation.get().wrapping_add(1));
        if let Some(id) = self.inner.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.handle.get().is_some()
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        // The browser must not call into a freed closure
        if let (Some(id), Some(window)) = (self.handle.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

impl Inner {
    fn schedule(&self) {
        let Some(window) = web_sys::window() else { return };
        if let Some(callback) = self.active.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                self.handle.set(Some(id));
            }
        }
    }
}
