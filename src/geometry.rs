use egui::{Pos2, Rect, Vec2};

/// Where the ring sits inside the widget, in widget-local coordinates.
///
/// Center, radius and oval are always produced together by [`Geometry::resolve`],
/// so a partially updated geometry can't be observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    center: Pos2,
    radius: f32,
    oval: Rect,
}

impl Geometry {
    /// `radius = min(w, h) / 2 - stroke_width`, centered in the bounds.
    ///
    /// A radius of zero or below is kept as is; the arcs drawn on it just
    /// degenerate.
    pub fn resolve(width: f32, height: f32, stroke_width: f32) -> Self {
        let radius = width.min(height) / 2.0 - stroke_width;
        let center = Pos2::new(width / 2.0, height / 2.0);
        let oval = Rect::from_min_max(
            Pos2::new(center.x - radius, center.y - radius),
            Pos2::new(center.x + radius, center.y + radius),
        );

        Geometry {
            center,
            radius,
            oval,
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn oval(&self) -> Rect {
        self.oval
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.center.x * 2.0, self.center.y * 2.0)
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Geometry::resolve(0.0, 0.0, 0.0)
    }
}
