// viewport.rs - Letterbox fit for square cells
//
// Pure math, no state, no allocation. Maps a logical grid onto an
// arbitrary container: one uniform scale so cells stay square, centering
// offsets, and the logical thickness that lands on one device pixel.
// Callers reject zero-sized containers before coming here.

pub struct Viewport {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Logical thickness that becomes one CSS pixel after scaling
    pub hairline: f64,
}

pub fn fit(display_w: f64, display_h: f64, logical_w: f64, logical_h: f64) -> Viewport {
    let scale = (display_w / logical_w).min(display_h / logical_h);
    Viewport {
        scale,
        offset_x: (display_w - logical_w * scale) / 2.0,
        offset_y: (display_h - logical_h * scale) / 2.0,
        hairline: 1.0 / scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_fit_has_no_offsets() {
        let vp = fit(200.0, 100.0, 100.0, 50.0);
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.offset_x, 0.0);
        assert_eq!(vp.offset_y, 0.0);
        assert_eq!(vp.hairline, 0.5);
    }

    #[test]
    fn wide_container_letterboxes_horizontally() {
        let vp = fit(300.0, 100.0, 100.0, 50.0);
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.offset_x, 50.0);
        assert_eq!(vp.offset_y, 0.0);
    }

    #[test]
    fn tall_container_letterboxes_vertically() {
        let vp = fit(100.0, 120.0, 100.0, 50.0);
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset_x, 0.0);
        assert_eq!(vp.offset_y, 35.0);
    }
}
