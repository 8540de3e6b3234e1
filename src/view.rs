use egui::{Color32, Sense, Vec2, Widget};

use crate::{
    animation::{Animator, RunId, Tick},
    colors::{ColorAssigner, ColorSource},
    geometry::Geometry,
    renderer::{Frame, Renderer},
    style::Style,
    surface::{PainterSurface, Surface},
    values::DataSeries,
};

/// The host side of a redraw request.
pub trait Invalidate {
    fn request_redraw(&self);
}

impl Invalidate for egui::Context {
    fn request_redraw(&self) {
        self.request_repaint();
    }
}

/// Animated ring chart of a [`DataSeries`].
///
/// Geometry only changes through [`StatsView::on_bounds_changed`] and progress
/// only through the animator; drawing reads both.
pub struct StatsView {
    style: Style,
    colors: ColorAssigner,
    series: DataSeries,
    series_colors: Vec<Color32>,
    geometry: Geometry,
    bounds: Option<Vec2>,
    animator: Animator,
    desired_size: Option<Vec2>,
}

impl StatsView {
    pub fn new(style: Style, source: Box<dyn ColorSource>) -> Self {
        let colors = ColorAssigner::new(style.palette, source);

        StatsView {
            style,
            colors,
            series: DataSeries::default(),
            series_colors: Vec::new(),
            geometry: Geometry::default(),
            bounds: None,
            animator: Animator::new(),
            desired_size: None,
        }
    }

    /// Fixed widget size. Without one the view takes all available space.
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.desired_size = Some(size);
        self
    }

    /// Replaces the series and restarts the reveal from zero. Ticks for the
    /// previous run are ignored from here on.
    pub fn set_data(&mut self, series: DataSeries, now: f64, host: &dyn Invalidate) -> RunId {
        self.series = series;
        self.series_colors = self.colors.assign(self.series.len());
        log::debug!(
            "data set: {} values, {}",
            self.series.len(),
            self.series.percent_text()
        );

        let run = self.animator.restart(now);
        host.request_redraw();
        run
    }

    pub fn on_bounds_changed(&mut self, width: f32, height: f32, host: &dyn Invalidate) {
        self.geometry = Geometry::resolve(width, height, self.style.stroke_width);
        self.bounds = Some(Vec2::new(width, height));
        log::debug!(
            "bounds changed to {}x{}, radius {}",
            width,
            height,
            self.geometry.radius()
        );
        host.request_redraw();
    }

    pub fn tick(&mut self, run: RunId, now: f64, host: &dyn Invalidate) -> Tick {
        let tick = self.animator.tick(run, now);
        if tick.needs_redraw() {
            host.request_redraw();
        }
        tick
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        let frame = Frame {
            geometry: &self.geometry,
            series: &self.series,
            colors: &self.series_colors,
            progress: self.animator.progress(),
        };
        Renderer::new(&self.style).draw(&frame, surface);
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn series(&self) -> &DataSeries {
        &self.series
    }

    pub fn series_colors(&self) -> &[Color32] {
        &self.series_colors
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    pub fn current_run(&self) -> Option<RunId> {
        self.animator.current_run()
    }
}

impl Widget for &mut StatsView {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let desired_size = self.desired_size.unwrap_or_else(|| ui.available_size());

        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::hover());

        if self.bounds != Some(rect.size()) {
            self.on_bounds_changed(rect.width(), rect.height(), ui.ctx());
        }

        if let Some(run) = self.current_run() {
            let now = ui.input().time;
            self.tick(run, now, ui.ctx());
        }

        if ui.is_rect_visible(rect) {
            let mut surface = PainterSurface::new(ui.painter(), rect.min);
            self.draw(&mut surface);
        }

        response
    }
}
