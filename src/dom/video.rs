//! Click-to-load video embed

use web_sys::{Element, HtmlElement, MouseEvent};

use super::{document, listen, query};

const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";
const IFRAME_STYLE: &str = "position: absolute; inset: 0; width: 100%; height: 100%;";

fn embed(src: &str) -> Option<Element> {
    let iframe = document()?.create_element("iframe").ok()?;
    for (name, value) in [
        ("src", src),
        ("frameborder", "0"),
        ("allow", IFRAME_ALLOW),
        ("allowfullscreen", ""),
        ("style", IFRAME_STYLE),
    ] {
        let _ = iframe.set_attribute(name, value);
    }
    Some(iframe)
}

/// Swap `.video-placeholder` for an autoplaying iframe on first click
pub fn init(embed_url: &str) {
    let Some(placeholder) = query(".video-placeholder") else { return };
    let target: HtmlElement = placeholder.clone();
    let url = embed_url.to_string();
    listen(&placeholder, "click", move |_: MouseEvent| {
        if query_iframe(&target) {
            return;
        }
        let Some(iframe) = embed(&url) else { return };
        target.set_inner_html("");
        let _ = target.append_child(&iframe);
        log::debug!("Video embed loaded");
    });
}

fn query_iframe(el: &HtmlElement) -> bool {
    matches!(el.query_selector("iframe"), Ok(Some(_)))
}
