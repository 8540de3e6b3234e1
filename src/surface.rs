use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::utils::{arc_points, point_on_circle, FULL_TURN};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
}

/// Stroke settings for a single arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcStroke {
    pub width: f32,
    pub color: Color32,
    pub cap: LineCap,
    pub join: LineJoin,
}

/// What the chart needs from whatever it draws onto.
///
/// Angles are degrees, 0 at three o'clock, clockwise positive.
pub trait Surface {
    /// Strokes the part of the circle inscribed in `oval` from `start_angle`
    /// through `sweep_angle`.
    fn draw_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, stroke: &ArcStroke);

    /// Draws `text` horizontally centered on `baseline.x`, sitting on `baseline.y`.
    fn draw_text(&mut self, text: &str, baseline: Pos2, font_size: f32, color: Color32);
}

/// Draws onto an egui painter. Chart coordinates are local to the widget, so
/// everything is shifted by `origin`.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        PainterSurface {
            painter,
            origin: origin.to_vec2(),
        }
    }
}

impl<'a> Surface for PainterSurface<'a> {
    fn draw_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, stroke: &ArcStroke) {
        let radius = oval.width().min(oval.height()) / 2.0;
        if radius <= 0.0 || sweep_angle == 0.0 {
            return;
        }
        if !start_angle.is_finite() || !sweep_angle.is_finite() {
            log::trace!("skipping arc with non-finite angles {} / {}", start_angle, sweep_angle);
            return;
        }
        let sweep_angle = sweep_angle.clamp(-FULL_TURN, FULL_TURN);
        let center = oval.center() + self.origin;

        let points = arc_points(center, radius, start_angle, sweep_angle);
        self.painter
            .add(Shape::line(points, Stroke::new(stroke.width, stroke.color)));

        if stroke.cap == LineCap::Round {
            let cap_radius = stroke.width / 2.0;
            for angle in [start_angle, start_angle + sweep_angle] {
                self.painter
                    .circle_filled(point_on_circle(center, radius, angle), cap_radius, stroke.color);
            }
        }
    }

    fn draw_text(&mut self, text: &str, baseline: Pos2, font_size: f32, color: Color32) {
        self.painter.text(
            baseline + self.origin,
            Align2::CENTER_BOTTOM,
            text,
            FontId::proportional(font_size),
            color,
        );
    }
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Arc {
        oval: Rect,
        start_angle: f32,
        sweep_angle: f32,
        stroke: ArcStroke,
    },
    Text {
        text: String,
        baseline: Pos2,
        font_size: f32,
        color: Color32,
    },
}

/// Keeps every draw call in order instead of drawing. Used for headless
/// rendering and in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// `(start_angle, sweep_angle, color)` of each arc, in draw order.
    pub fn arcs(&self) -> Vec<(f32, f32, Color32)> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Arc {
                    start_angle,
                    sweep_angle,
                    stroke,
                    ..
                } => Some((*start_angle, *sweep_angle, stroke.color)),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Arc { .. } => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn draw_arc(&mut self, oval: Rect, start_angle: f32, sweep_angle: f32, stroke: &ArcStroke) {
        self.commands.push(DrawCommand::Arc {
            oval,
            start_angle,
            sweep_angle,
            stroke: *stroke,
        });
    }

    fn draw_text(&mut self, text: &str, baseline: Pos2, font_size: f32, color: Color32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            baseline,
            font_size,
            color,
        });
    }
}
