//! Background-effects button and its lazily created stylesheet link

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, HtmlElement, MouseEvent};

use crate::fx::EffectsSwitch;
use crate::platform::LocalStore;

use super::{add_class, document, listen, query, query_in, remove_class, set_style};

const BUTTON_ID: &str = "effectsToggle";
const STYLESHEET_ID: &str = "effects-stylesheet";

pub struct EffectsToggle {
    button: HtmlElement,
    href: String,
    stylesheet: Option<Element>,
    switch: EffectsSwitch,
    store: LocalStore,
}

impl EffectsToggle {
    /// Restore the saved preference and wire the button. No-op without `#effectsToggle`.
    pub fn init(href: &str) -> Option<Rc<RefCell<Self>>> {
        let button = query(&format!("#{BUTTON_ID}"))?;
        let toggle = Rc::new(RefCell::new(Self {
            button: button.clone(),
            href: href.to_string(),
            stylesheet: None,
            switch: EffectsSwitch::new(),
            store: LocalStore::open(),
        }));

        {
            let toggle = toggle.clone();
            listen(&button, "click", move |_: MouseEvent| toggle.borrow_mut().toggle());
        }

        {
            let mut this = toggle.borrow_mut();
            let Self { switch, store, .. } = &mut *this;
            if switch.restore(store) {
                this.render();
            }
        }
        Some(toggle)
    }

    pub fn toggle(&mut self) {
        self.switch.toggle(&mut self.store);
        self.render();
        log::debug!("Background effects: {}", self.switch.is_active());
    }

    fn render(&mut self) {
        let active = self.switch.is_active();
        if active {
            self.attach_stylesheet();
            add_class(&self.button, "active");
        } else {
            if let Some(link) = &self.stylesheet {
                link.remove();
            }
            remove_class(&self.button, "active");
        }

        if let Some(on) = query_in(&self.button, ".effects-on") {
            set_style(&on, "display", if active { "none" } else { "block" });
        }
        if let Some(off) = query_in(&self.button, ".effects-off") {
            set_style(&off, "display", if active { "block" } else { "none" });
        }
    }

    fn attach_stylesheet(&mut self) {
        let Some(document) = document() else { return };
        if self.stylesheet.is_none() {
            let Ok(link) = document.create_element("link") else { return };
            let _ = link.set_attribute("rel", "stylesheet");
            let _ = link.set_attribute("href", &self.href);
            link.set_id(STYLESHEET_ID);
            self.stylesheet = Some(link);
        }
        if let (Some(head), Some(link)) = (document.head(), &self.stylesheet) {
            let _ = head.append_child(link);
        }
    }
}
