use egui::{Color32, Pos2};
use serde::Deserialize;

use crate::{
    geometry::Geometry,
    style::Style,
    surface::{ArcStroke, LineCap, LineJoin, Surface},
    values::{sweep_angle, DataSeries},
};

/// Segments start at twelve o'clock.
pub const START_ANGLE: f32 = -90.0;

/// Sweep of the closing arc under [`ClosingArc::FirstColorTinyGap`] at full progress.
pub const TINY_GAP_SWEEP: f32 = 1.0;

/// How the arc drawn after the last segment is colored and sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClosingArc {
    /// 1° in the first palette color, scaled by progress. Repaints the start
    /// of the first segment over the round cap of the last one.
    #[default]
    FirstColorTinyGap,
    /// Whatever is left of the circle, in the last segment's color, not
    /// scaled by progress.
    LastColorFullGap,
}

/// Everything one redraw needs.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub geometry: &'a Geometry,
    pub series: &'a DataSeries,
    /// One color per value in `series`; the lengths must match. Overflow
    /// colors come from [`crate::ColorAssigner::assign`], never from the palette.
    pub colors: &'a [Color32],
    pub progress: f32,
}

pub struct Renderer<'a> {
    style: &'a Style,
}

impl<'a> Renderer<'a> {
    pub fn new(style: &'a Style) -> Self {
        Renderer { style }
    }

    pub fn draw(&self, frame: &Frame, surface: &mut dyn Surface) {
        if frame.series.is_empty() {
            return;
        }

        debug_assert_eq!(
            frame.colors.len(),
            frame.series.len(),
            "one color per series value"
        );

        let oval = frame.geometry.oval();
        let mut start_angle = START_ANGLE;
        let mut last_color = self.style.palette.first();

        for (index, angle) in frame.series.iter().map(sweep_angle).enumerate() {
            // a missing overflow color leaves the segment invisible rather
            // than repeating a palette slot
            let color = frame
                .colors
                .get(index)
                .copied()
                .or_else(|| self.style.palette.get(index))
                .unwrap_or(Color32::TRANSPARENT);
            surface.draw_arc(oval, start_angle, angle * frame.progress, &self.stroke(color));

            // the next segment starts after the full angle, whatever the progress
            start_angle += angle;
            last_color = color;
        }

        let (color, sweep) = match self.style.closing_arc {
            ClosingArc::FirstColorTinyGap => {
                (self.style.palette.first(), TINY_GAP_SWEEP * frame.progress)
            }
            ClosingArc::LastColorFullGap => {
                let drawn = start_angle - START_ANGLE;
                (last_color, (360.0 - drawn).max(0.0))
            }
        };
        surface.draw_arc(oval, start_angle, sweep, &self.stroke(color));

        let center = frame.geometry.center();
        surface.draw_text(
            &frame.series.percent_text(),
            Pos2::new(center.x, center.y + self.style.font_size / 4.0),
            self.style.font_size,
            self.style.text_color,
        );
    }

    fn stroke(&self, color: Color32) -> ArcStroke {
        ArcStroke {
            width: self.style.stroke_width,
            color,
            cap: LineCap::Round,
            join: LineJoin::Miter,
        }
    }
}
