use crate::style::StylePatch;
use crate::tilt::Rect;

/// Offset of the background layer for a pointer at `(client_x, client_y)` in a
/// `width` x `height` viewport. Zero at the viewport center.
pub fn background_offset(
    client_x: f64,
    client_y: f64,
    viewport: (f64, f64),
    strength: f64,
) -> (f64, f64) {
    let (width, height) = viewport;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }

    (
        (client_x / width - 0.5) * strength,
        (client_y / height - 0.5) * strength,
    )
}

pub fn background_shift(offset: (f64, f64)) -> StylePatch {
    StylePatch::new().set(
        "transform",
        format!("translate({:.2}px, {:.2}px)", offset.0, offset.1),
    )
}

pub fn hero_background(scroll_y: f64, factor: f64) -> StylePatch {
    StylePatch::new().set(
        "background-position-y",
        format!("{:.2}px", scroll_y * factor),
    )
}

pub fn glow_position(rect: Rect, client_x: f64, client_y: f64) -> StylePatch {
    let (x, y) = rect.local_point(client_x, client_y);
    StylePatch::new()
        .set("--x", format!("{x:.2}px"))
        .set("--y", format!("{y:.2}px"))
}
