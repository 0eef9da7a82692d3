//! Scroll-position effects: nav state, anchors, parallax, progress, sticky CTA

use super::attr::parse_float_prefix;
use super::pointer::Rect;

/// Nav gains the `scrolled` class past this offset
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
/// Breathing room left above an anchor target
pub const ANCHOR_MARGIN: f64 = 20.0;
/// Sticky CTA appears this far before the hero's bottom edge
pub const STICKY_CTA_LEAD: f64 = 200.0;
/// Parallax speed when `data-parallax` is empty, zero or unparsable
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.1;

pub fn is_scrolled(page_y: f64) -> bool {
    page_y > NAV_SCROLLED_THRESHOLD
}

/// Selector for an in-page link, or `None` for a bare `#`
pub fn fragment_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

/// Document offset to scroll to so the target clears the fixed nav
pub fn anchor_scroll_top(target_top: f64, page_y: f64, nav_height: f64) -> f64 {
    target_top + page_y - nav_height - ANCHOR_MARGIN
}

pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(parse_float_prefix)
        .filter(|&speed| speed != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

/// Vertical shift proportional to the element's distance from viewport centre
pub fn parallax_offset(rect: Rect, viewport_height: f64, speed: f64) -> f64 {
    (rect.center().y - viewport_height / 2.0) * speed
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({offset}px)")
}

/// Document scroll progress in percent, clamped to [0, 100]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn sticky_cta_visible(page_y: f64, hero_top: f64, hero_height: f64) -> bool {
    page_y > hero_top + hero_height - STICKY_CTA_LEAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#pricing"), Some("#pricing"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/about"), None);
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_scroll_top(300.0, 1000.0, 80.0), 1200.0);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_speed(Some("0.3")), 0.3);
        assert_eq!(parallax_speed(Some("0")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(Some("")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(None), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(Some("-0.2")), -0.2);

        let rect = Rect::new(0.0, 500.0, 100.0, 200.0);
        assert_eq!(parallax_offset(rect, 800.0, 0.5), 100.0);
        assert_eq!(parallax_transform(-12.5), "translateY(-12.5px)");
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn test_sticky_cta() {
        assert!(!sticky_cta_visible(600.0, 100.0, 700.0));
        assert!(sticky_cta_visible(601.0, 100.0, 700.0));
    }
}
