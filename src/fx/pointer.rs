//! Pointer-driven transforms: magnetic buttons, 3D tilt, card spotlight, ripples

/// Fraction of the pointer's offset from centre that magnetic text follows
pub const MAGNETIC_STRENGTH: f64 = 0.3;
/// Maximum tilt at a card's edge, in degrees
pub const TILT_MAX_DEG: f64 = 6.0;
pub const TILT_TRANSITION: &str = "transform 0.1s ease-out";
pub const TILT_LEAVE_TRANSITION: &str = "transform 0.25s ease-out";
pub const TILT_LEAVE_MS: i32 = 250;
pub const TILT_RESET_TRANSFORM: &str =
    "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)";
pub const MAGNETIC_RESET_TRANSFORM: &str = "translate(0, 0)";

/// Client-space bounding box, as from `getBoundingClientRect`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Pointer position relative to the rect's top-left corner
    pub fn local(&self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }
}

/// Client-space pointer position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Translation for a magnetic button's label
pub fn magnetic_offset(rect: Rect, pointer: Point) -> Point {
    let center = rect.center();
    Point::new(
        (pointer.x - center.x) * MAGNETIC_STRENGTH,
        (pointer.y - center.y) * MAGNETIC_STRENGTH,
    )
}

pub fn magnetic_transform(offset: Point) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

/// `(rotateX, rotateY)` in degrees. The top edge tips toward the viewer.
pub fn tilt_angles(rect: Rect, pointer: Point) -> (f64, f64) {
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return (0.0, 0.0);
    }
    let local = rect.local(pointer);
    let rotate_x = ((local.y - half_h) / half_h) * -TILT_MAX_DEG;
    let rotate_y = ((local.x - half_w) / half_w) * TILT_MAX_DEG;
    (rotate_x, rotate_y)
}

pub fn tilt_transform((rotate_x, rotate_y): (f64, f64)) -> String {
    format!(
        "perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) scale3d(1.01, 1.01, 1.01)"
    )
}

/// Pointer position as a percentage of the card, for `--mouse-x` / `--mouse-y`
pub fn pointer_percent(rect: Rect, pointer: Point) -> Option<(f64, f64)> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let local = rect.local(pointer);
    Some((local.x / rect.width * 100.0, local.y / rect.height * 100.0))
}

/// Square ripple centred on the click, big enough to cover the button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

pub fn ripple_geometry(rect: Rect, pointer: Point) -> Ripple {
    let size = rect.width.max(rect.height);
    let local = rect.local(pointer);
    Ripple {
        size,
        left: local.x - size / 2.0,
        top: local.y - size / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_magnetic_follows_pointer() {
        let off = magnetic_offset(CARD, Point::new(250.0, 100.0));
        assert!((off.x - 15.0).abs() < 1e-9);
        assert!(off.y.abs() < 1e-9);
        assert_eq!(magnetic_transform(Point::new(3.0, -1.5)), "translate(3px, -1.5px)");
    }

    #[test]
    fn test_tilt_corners() {
        // Top-left corner: tip top edge up, rotate left
        let (rx, ry) = tilt_angles(CARD, Point::new(100.0, 50.0));
        assert_eq!((rx, ry), (6.0, -6.0));
        // Centre: flat
        let (rx, ry) = tilt_angles(CARD, CARD.center());
        assert_eq!((rx.abs(), ry.abs()), (0.0, 0.0));
        assert_eq!(tilt_angles(Rect::default(), Point::new(1.0, 1.0)), (0.0, 0.0));
        assert_eq!(
            tilt_transform((1.0, -2.5)),
            "perspective(1000px) rotateX(1deg) rotateY(-2.5deg) scale3d(1.01, 1.01, 1.01)"
        );
    }

    #[test]
    fn test_pointer_percent() {
        assert_eq!(pointer_percent(CARD, Point::new(150.0, 75.0)), Some((25.0, 25.0)));
        assert_eq!(pointer_percent(Rect::default(), Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_ripple_centred_on_click() {
        let ripple = ripple_geometry(CARD, Point::new(110.0, 60.0));
        assert_eq!(ripple.size, 200.0);
        assert_eq!(ripple.left, -90.0);
        assert_eq!(ripple.top, -90.0);
    }
}
