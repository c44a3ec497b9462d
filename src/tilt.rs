use crate::style::StylePatch;

const PERSPECTIVE: &str = "perspective(1000px)";
const CODE_WINDOW_GLOW: &str = "0 0 60px rgba(0, 245, 255, 0.1)";
const CODE_WINDOW_RESTING_SHADOW: &str = "0 0 30px rgba(0, 245, 255, 0.1)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn local_point(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.left, client_y - self.top)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAngles {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Pointer below center tips the element back (positive X); pointer right of
/// center turns it right (negative Y).
pub fn tilt_angles(rect: Rect, client_x: f64, client_y: f64, sensitivity: f64) -> TiltAngles {
    let (x, y) = rect.local_point(client_x, client_y);
    let center_x = rect.width / 2.0;
    let center_y = rect.height / 2.0;

    TiltAngles {
        rotate_x: (y - center_y) / sensitivity,
        rotate_y: (center_x - x) / sensitivity,
    }
}

pub fn card_tilt(angles: TiltAngles) -> StylePatch {
    StylePatch::new().set(
        "transform",
        format!(
            "{PERSPECTIVE} rotateX({:.2}deg) rotateY({:.2}deg) scale3d(1.02, 1.02, 1.02)",
            angles.rotate_x, angles.rotate_y
        ),
    )
}

pub fn card_rest() -> StylePatch {
    StylePatch::new().set(
        "transform",
        format!("{PERSPECTIVE} rotateX(0) rotateY(0) scale3d(1, 1, 1)"),
    )
}

pub fn code_window_tilt(angles: TiltAngles) -> StylePatch {
    StylePatch::new()
        .set(
            "transform",
            format!(
                "{PERSPECTIVE} rotateX({:.2}deg) rotateY({:.2}deg) translateZ(20px)",
                angles.rotate_x, angles.rotate_y
            ),
        )
        .set(
            "box-shadow",
            format!(
                "{:.2}px {:.2}px 30px rgba(0, 245, 255, 0.2), {CODE_WINDOW_GLOW}",
                angles.rotate_y * 2.0,
                angles.rotate_x * 2.0
            ),
        )
}

pub fn code_window_rest() -> StylePatch {
    StylePatch::new()
        .set(
            "transform",
            format!("{PERSPECTIVE} rotateX(0) rotateY(0) translateZ(0)"),
        )
        .set("box-shadow", CODE_WINDOW_RESTING_SHADOW)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 120.0,
    };

    #[test]
    fn center_of_element_has_no_rotation() {
        let angles = tilt_angles(RECT, 200.0, 110.0, 20.0);

        assert_eq!(angles.rotate_x, 0.0);
        assert_eq!(angles.rotate_y, 0.0);
    }

    #[test]
    fn bottom_right_pointer_tips_back_and_turns_right() {
        let angles = tilt_angles(RECT, 300.0, 170.0, 20.0);

        assert_eq!(angles.rotate_x, 3.0);
        assert_eq!(angles.rotate_y, -5.0);
    }

    #[test]
    fn top_left_pointer_mirrors_the_signs() {
        let angles = tilt_angles(RECT, 100.0, 50.0, 15.0);

        assert_eq!(angles.rotate_x, -4.0);
        assert!((angles.rotate_y - 100.0 / 15.0).abs() < 1e-12);
    }

    #[test]
    fn card_transform_scales_up_while_tilted_and_resets_to_neutral() {
        let tilted = card_tilt(TiltAngles {
            rotate_x: 3.0,
            rotate_y: -5.0,
        });
        assert_eq!(
            tilted.get("transform"),
            Some("perspective(1000px) rotateX(3.00deg) rotateY(-5.00deg) scale3d(1.02, 1.02, 1.02)")
        );

        assert_eq!(
            card_rest().get("transform"),
            Some("perspective(1000px) rotateX(0) rotateY(0) scale3d(1, 1, 1)")
        );
    }

    #[test]
    fn code_window_shadow_follows_the_rotation() {
        let patch = code_window_tilt(TiltAngles {
            rotate_x: 2.0,
            rotate_y: -1.5,
        });

        assert_eq!(
            patch.get("box-shadow"),
            Some("-3.00px 4.00px 30px rgba(0, 245, 255, 0.2), 0 0 60px rgba(0, 245, 255, 0.1)")
        );

        let rest = code_window_rest();
        assert_eq!(
            rest.get("transform"),
            Some("perspective(1000px) rotateX(0) rotateY(0) translateZ(0)")
        );
        assert_eq!(rest.get("box-shadow"), Some("0 0 30px rgba(0, 245, 255, 0.1)"));
    }
}
