//! Camera math for the plan canvas.
//!
//! The camera maps canvas (world) units into viewport pixels with a
//! translate-then-scale transform: `view = offset + world * scale`.

use kurbo::{Point, Rect, Size, Vec2};

use crate::types::{
    Board, InitialCamera, DEFAULT_INITIAL_SCALE, DEFAULT_INITIAL_X, DEFAULT_INITIAL_Y,
};

/// Smallest zoom factor the camera will accept.
pub const MIN_SCALE: f64 = 0.4;
/// Largest zoom factor the camera will accept.
pub const MAX_SCALE: f64 = 2.2;
/// Multiplier for one wheel step towards the user.
pub const ZOOM_IN_FACTOR: f64 = 1.07;
/// Multiplier for one wheel step away from the user.
pub const ZOOM_OUT_FACTOR: f64 = 0.93;
/// Total viewport allowance (both sides) kept free when fitting content.
pub const FIT_PADDING: f64 = 80.0;

/// Pan offset plus uniform zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }
}

impl Camera {
    pub fn new(offset: Vec2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Seed from a boards file's `canvas.initial`, filling gaps with defaults.
    pub fn from_initial(initial: Option<&InitialCamera>) -> Self {
        let x = initial.and_then(|i| i.x).filter(|v| v.is_finite());
        let y = initial.and_then(|i| i.y).filter(|v| v.is_finite());
        let scale = initial
            .and_then(|i| i.scale)
            .filter(|s| s.is_finite() && *s > 0.0);
        Self {
            offset: Vec2::new(x.unwrap_or(DEFAULT_INITIAL_X), y.unwrap_or(DEFAULT_INITIAL_Y)),
            scale: scale.unwrap_or(DEFAULT_INITIAL_SCALE),
        }
    }

    /// Zoom step for a wheel event. Only the sign of `delta_y` matters;
    /// a negative delta (wheel pushed away) zooms in.
    pub fn wheel_factor(delta_y: f64) -> f64 {
        if -delta_y > 0.0 {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        }
    }

    /// Zoom by `factor` while keeping the viewport point `anchor` fixed.
    ///
    /// The new scale is clamped into `[MIN_SCALE, MAX_SCALE]` before the
    /// offset is recomputed.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;
        let anchor = anchor.to_vec2();
        self.offset = anchor - (anchor - self.offset) * ratio;
        self.scale = new_scale;
    }

    /// Camera that centers `bounds` inside a viewport of `viewport` size.
    ///
    /// The fitted scale never exceeds 1 so sparse layouts are not blown up.
    pub fn fit(bounds: Rect, viewport: Size) -> Self {
        let content_width = bounds.width();
        let content_height = bounds.height();
        let scale_x = (viewport.width - FIT_PADDING) / content_width;
        let scale_y = (viewport.height - FIT_PADDING) / content_height;
        let scale = scale_x.min(scale_y).min(1.0);

        let center = bounds.center();
        Self {
            offset: Vec2::new(
                viewport.width / 2.0 - center.x * scale,
                viewport.height / 2.0 - center.y * scale,
            ),
            scale,
        }
    }

    pub fn world_to_view(&self, world: Point) -> Point {
        (world.to_vec2() * self.scale + self.offset).to_point()
    }

    pub fn view_to_world(&self, view: Point) -> Point {
        ((view.to_vec2() - self.offset) / self.scale).to_point()
    }

    /// CSS transform for the canvas layer, translate first then scale.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, self.scale
        )
    }
}

/// Axis-aligned bounding box of every board, `None` when there are none.
pub fn board_bounds(boards: &[Board]) -> Option<Rect> {
    let first = boards.first()?;
    let mut bounds = Rect::new(first.x, first.y, first.right(), first.bottom());
    for b in &boards[1..] {
        bounds = bounds.union(Rect::new(b.x, b.y, b.right(), b.bottom()));
    }
    Some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn board(id: &str, x: f64, y: f64, w: f64, h: f64) -> Board {
        Board {
            id: id.to_string(),
            title: id.to_string(),
            subtitle: String::new(),
            doc: format!("plan/{id}.md"),
            x,
            y,
            w,
            h,
            tone: Default::default(),
        }
    }

    #[test]
    fn test_initial_defaults() {
        let cam = Camera::from_initial(None);
        assert_eq!(cam.offset, Vec2::new(-200.0, -150.0));
        assert_eq!(cam.scale, 1.0);

        let partial = InitialCamera {
            x: Some(10.0),
            y: None,
            scale: Some(0.5),
        };
        let cam = Camera::from_initial(Some(&partial));
        assert_eq!(cam.offset, Vec2::new(10.0, -150.0));
        assert_eq!(cam.scale, 0.5);
    }

    #[test]
    fn test_initial_ignores_unusable_scale() {
        let bad = InitialCamera {
            x: None,
            y: None,
            scale: Some(0.0),
        };
        assert_eq!(Camera::from_initial(Some(&bad)).scale, 1.0);
    }

    #[test]
    fn test_wheel_factor_uses_direction_only() {
        assert_eq!(Camera::wheel_factor(-1.0), ZOOM_IN_FACTOR);
        assert_eq!(Camera::wheel_factor(-480.0), ZOOM_IN_FACTOR);
        assert_eq!(Camera::wheel_factor(3.0), ZOOM_OUT_FACTOR);
        assert_eq!(Camera::wheel_factor(0.0), ZOOM_OUT_FACTOR);
    }

    #[test]
    fn test_cursor_centered_zoom() {
        let mut cam = Camera::default();
        cam.zoom_about(Point::new(100.0, 100.0), ZOOM_IN_FACTOR);
        assert!((cam.scale - 1.07).abs() < EPS);
        assert!((cam.offset.x - -7.0).abs() < EPS);
        assert!((cam.offset.y - -7.0).abs() < EPS);
    }

    #[test]
    fn test_zoom_keeps_point_under_cursor() {
        let mut cam = Camera::new(Vec2::new(35.0, -12.0), 1.3);
        let anchor = Point::new(240.0, 90.0);
        let world_before = cam.view_to_world(anchor);
        cam.zoom_about(anchor, ZOOM_OUT_FACTOR);
        let view_after = cam.world_to_view(world_before);
        assert!((view_after.x - anchor.x).abs() < 1e-6);
        assert!((view_after.y - anchor.y).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_at_limit_leaves_offset() {
        let mut cam = Camera::new(Vec2::new(5.0, 6.0), MAX_SCALE);
        cam.zoom_about(Point::new(300.0, 200.0), ZOOM_IN_FACTOR);
        assert_eq!(cam.scale, MAX_SCALE);
        assert!((cam.offset.x - 5.0).abs() < EPS);
        assert!((cam.offset.y - 6.0).abs() < EPS);
    }

    #[test]
    fn test_fit_scales_down_to_viewport() {
        let cam = Camera::fit(Rect::new(0.0, 0.0, 1000.0, 500.0), Size::new(800.0, 600.0));
        assert!((cam.scale - 0.72).abs() < EPS);
        assert!((cam.offset.x - 40.0).abs() < EPS);
        assert!((cam.offset.y - 120.0).abs() < EPS);
    }

    #[test]
    fn test_fit_never_zooms_past_one() {
        let cam = Camera::fit(Rect::new(100.0, 100.0, 200.0, 150.0), Size::new(1200.0, 900.0));
        assert_eq!(cam.scale, 1.0);
        // Box center (150, 125) lands on viewport center (600, 450).
        assert_eq!(cam.world_to_view(Point::new(150.0, 125.0)), Point::new(600.0, 450.0));
    }

    #[test]
    fn test_board_bounds() {
        assert_eq!(board_bounds(&[]), None);
        let boards = vec![
            board("a", -50.0, 20.0, 100.0, 100.0),
            board("b", 400.0, -10.0, 200.0, 50.0),
        ];
        assert_eq!(
            board_bounds(&boards),
            Some(Rect::new(-50.0, -10.0, 600.0, 120.0))
        );
    }

    #[test]
    fn test_css_transform_order() {
        let cam = Camera::new(Vec2::new(-7.5, 12.0), 1.25);
        assert_eq!(cam.css_transform(), "translate(-7.5px, 12px) scale(1.25)");
    }

    proptest! {
        #[test]
        fn scale_stays_clamped(
            steps in proptest::collection::vec((-500.0f64..500.0, 0.0f64..2000.0, 0.0f64..2000.0), 0..200)
        ) {
            let mut cam = Camera::default();
            for (delta_y, x, y) in steps {
                cam.zoom_about(Point::new(x, y), Camera::wheel_factor(delta_y));
                prop_assert!(cam.scale >= MIN_SCALE && cam.scale <= MAX_SCALE);
            }
        }
    }
}
