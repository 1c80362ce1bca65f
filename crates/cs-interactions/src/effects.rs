//! Geometry for the cosmetic pointer and scroll effects.

/// A bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

pub fn parallax_transform(scroll_y: f64, rate: f64) -> String {
    format!("translate3d(0, {}px, 0)", parallax_offset(scroll_y, rate))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CardTilt {
    pub const LIFT: &'static str = "translateY(-5px) scale(1.02)";
    pub const REST: &'static str = "translateY(0) scale(1)";

    pub fn transform(&self) -> String {
        format!(
            "{} rotateX({}deg) rotateY({}deg)",
            Self::LIFT,
            self.rotate_x,
            self.rotate_y
        )
    }
}

/// Tilt for a pointer at client coordinates inside `rect`: 1 degree per 10px
/// away from the centre, leaning towards the pointer.
pub fn card_tilt(rect: Rect, client_x: f64, client_y: f64) -> CardTilt {
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    CardTilt {
        rotate_x: (y - rect.height / 2.0) / 10.0,
        rotate_y: (rect.width / 2.0 - x) / 10.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub const LIFETIME_MS: u32 = 600;

    pub fn css_text(&self) -> String {
        format!(
            "position: absolute; border-radius: 50%; background: rgba(255, 255, 255, 0.3); \
             width: {size}px; height: {size}px; left: {left}px; top: {top}px; \
             pointer-events: none; animation: ripple 0.6s ease-out;",
            size = self.size,
            left = self.left,
            top = self.top,
        )
    }
}

/// A circle covering the host's longer side, centred on the click.
pub fn ripple_geometry(rect: Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = rect.width.max(rect.height);
    RippleGeometry {
        size,
        left: client_x - rect.left - size / 2.0,
        top: client_y - rect.top - size / 2.0,
    }
}

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple {\n    from { opacity: 1; transform: scale(0); }\n    to { opacity: 0; transform: scale(2); }\n}";

pub fn is_mobile(viewport_width: f64, breakpoint_px: u32) -> bool {
    viewport_width <= f64::from(breakpoint_px)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 100.0,
        top: 200.0,
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(400.0, -0.5), -200.0);
        assert_eq!(parallax_transform(0.0, 0.5), "translate3d(0, 0px, 0)");
        assert_eq!(parallax_transform(10.0, -0.5), "translate3d(0, -5px, 0)");
    }

    #[test]
    fn centred_pointer_has_no_tilt() {
        let tilt = card_tilt(CARD, 250.0, 300.0);
        assert_eq!(tilt, CardTilt { rotate_x: 0.0, rotate_y: 0.0 });
    }

    #[test]
    fn corner_pointer_tilts_both_axes() {
        let tilt = card_tilt(CARD, 100.0, 200.0);
        assert_eq!(tilt.rotate_x, -10.0);
        assert_eq!(tilt.rotate_y, 15.0);
        assert_eq!(
            tilt.transform(),
            "translateY(-5px) scale(1.02) rotateX(-10deg) rotateY(15deg)"
        );
    }

    #[test]
    fn ripple_is_centred_on_click() {
        let ripple = ripple_geometry(CARD, 150.0, 250.0);
        assert_eq!(ripple.size, 300.0);
        assert_eq!(ripple.left, -100.0);
        assert_eq!(ripple.top, -100.0);
        assert!(ripple.css_text().contains("width: 300px"));
        assert!(ripple.css_text().contains("left: -100px"));
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile(768.0, 768));
        assert!(is_mobile(375.0, 768));
        assert!(!is_mobile(769.0, 768));
    }
}
