use crate::models::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

pub(crate) const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 1200.0,
    height: 800.0,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Viewport {
    pub width: f64,
    pub height: f64,
}

pub(crate) trait ViewportSource: Send + Sync {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// `window.innerWidth` / `window.innerHeight`, or 1200×800 outside a browser window.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    fn viewport(&self) -> Viewport {
        let Some(win) = web_sys::window() else {
            return FALLBACK_VIEWPORT;
        };
        let width = win.inner_width().ok().and_then(|v| v.as_f64());
        let height = win.inner_height().ok().and_then(|v| v.as_f64());
        match (width, height) {
            (Some(width), Some(height)) => Viewport { width, height },
            _ => FALLBACK_VIEWPORT,
        }
    }
}

/// Keeps a `width`×`height` window fully inside the viewport.
///
/// When the window is larger than the viewport it pins to the top-left edge.
pub(crate) fn clamp_position(p: Point, width: f64, height: f64, viewport: Viewport) -> Point {
    let max_x = (viewport.width - width).max(0.0);
    let max_y = (viewport.height - height).max(0.0);
    Point {
        x: p.x.clamp(0.0, max_x),
        y: p.y.clamp(0.0, max_y),
    }
}

pub(crate) fn clamp_size(width: f64, height: f64) -> (f64, f64) {
    (width.max(MIN_WINDOW_WIDTH), height.max(MIN_WINDOW_HEIGHT))
}

/// Uniform position for a new window, `rand` yielding values in `[0, 1)`.
pub(crate) fn random_position(
    width: f64,
    height: f64,
    viewport: Viewport,
    mut rand: impl FnMut() -> f64,
) -> Point {
    let x = rand() * (viewport.width - width).max(0.0);
    let y = rand() * (viewport.height - height).max(0.0);
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 1000.0,
        height: 700.0,
    };

    #[test]
    fn test_clamp_position_inside_is_unchanged() {
        let p = clamp_position(Point::new(100.0, 50.0), 400.0, 300.0, VP);
        assert_eq!(p, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_clamp_position_out_of_range() {
        for (x, y) in [(-50.0, -1.0), (5000.0, 5000.0), (-1e9, 1e9), (601.0, 401.0)] {
            let p = clamp_position(Point::new(x, y), 400.0, 300.0, VP);
            assert!((0.0..=600.0).contains(&p.x), "x={}", p.x);
            assert!((0.0..=400.0).contains(&p.y), "y={}", p.y);
        }
    }

    #[test]
    fn test_clamp_position_window_larger_than_viewport() {
        let p = clamp_position(Point::new(30.0, 30.0), 2000.0, 2000.0, VP);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_clamp_size_floors_at_minimum() {
        assert_eq!(clamp_size(10.0, -5.0), (300.0, 200.0));
        assert_eq!(clamp_size(299.9, 199.9), (300.0, 200.0));
        assert_eq!(clamp_size(500.0, 250.0), (500.0, 250.0));
    }

    #[test]
    fn test_random_position_stays_in_bounds() {
        let hi = random_position(400.0, 300.0, VP, || 0.999_999);
        assert!(hi.x <= 600.0 && hi.y <= 400.0);
        let lo = random_position(400.0, 300.0, VP, || 0.0);
        assert_eq!(lo, Point::new(0.0, 0.0));
    }
}
