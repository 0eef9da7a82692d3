//! Top nav: scrolled state, mobile menu, in-page anchor scrolling

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::fx::scroll::{anchor_scroll_top, fragment_target, is_scrolled};

use super::{
    add_class, document, listen, page_y_offset, query, query_all, query_all_in, rect_of,
    remove_class, set_body_overflow, set_class, window,
};

/// Mobile menu parts; any of them may be missing from the markup
struct MobileMenu {
    toggle: Option<HtmlElement>,
    links: Option<HtmlElement>,
    overlay: Option<HtmlElement>,
}

impl MobileMenu {
    fn parts(&self) -> impl Iterator<Item = &HtmlElement> {
        [&self.toggle, &self.links, &self.overlay].into_iter().flatten()
    }

    fn is_open(&self) -> bool {
        self.links
            .as_ref()
            .is_some_and(|links| links.class_list().contains("active"))
    }

    fn open(&self) {
        self.parts().for_each(|el| add_class(el, "active"));
        set_body_overflow("hidden");
    }

    fn close(&self) {
        self.parts().for_each(|el| remove_class(el, "active"));
        set_body_overflow("");
    }

    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

fn create_overlay() -> Option<HtmlElement> {
    let document = document()?;
    let overlay: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    add_class(&overlay, "mobile-menu-overlay");
    document.body()?.append_child(&overlay).ok()?;
    Some(overlay)
}

pub fn init_navigation() {
    let nav = query(".nav");
    let menu = Rc::new(MobileMenu {
        toggle: query(".mobile-toggle"),
        links: query(".nav-links"),
        overlay: create_overlay(),
    });

    let Some(window) = window() else { return };
    listen(&window, "scroll", move |_: Event| {
        if let Some(nav) = &nav {
            set_class(nav, "scrolled", is_scrolled(page_y_offset()));
        }
    });

    if let Some(toggle) = &menu.toggle {
        let menu = menu.clone();
        listen(toggle, "click", move |_: MouseEvent| menu.toggle());
    }

    if let Some(links) = &menu.links {
        for link in query_all_in(links, "a") {
            let menu = menu.clone();
            listen(&link, "click", move |_: MouseEvent| menu.close());
        }
    }

    if let Some(overlay) = &menu.overlay {
        let menu = menu.clone();
        listen(overlay, "click", move |_: MouseEvent| menu.close());
    }

    if let Some(document) = document() {
        listen(&document, "keydown", move |event: KeyboardEvent| {
            if event.key() == "Escape" && menu.is_open() {
                menu.close();
            }
        });
    }
}

/// Smooth-scroll `a[href^="#"]` links to their target, clearing the fixed nav
pub fn init_smooth_scroll() {
    for anchor in query_all("a[href^=\"#\"]") {
        let link = anchor.clone();
        listen(&anchor, "click", move |event: MouseEvent| {
            let Some(href) = link.get_attribute("href") else { return };
            let Some(selector) = fragment_target(&href) else { return };

            event.prevent_default();
            let Some(target) = query(selector) else { return };
            let nav_height = query(".nav").map(|nav| nav.offset_height() as f64).unwrap_or(0.0);
            let top = anchor_scroll_top(rect_of(&target).top, page_y_offset(), nav_height);

            if let Some(window) = window() {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        });
    }
}
