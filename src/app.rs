use std::time::Duration;

use chrono::{DateTime, Local};
use eframe::egui;
use egui::{CentralPanel, TopBottomPanel};

use statsview::{DataSeries, StatsView};

/// Window hosting a single [`StatsView`]. The data is pushed once, after
/// `delay` has passed since the first frame.
pub struct App {
    view: StatsView,
    pending: Option<DataSeries>,
    delay: Duration,
    first_frame: Option<f64>,
    started_at: DateTime<Local>,
    pushed_at: Option<DateTime<Local>>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = ctx.input().time;
        self.push_when_due(ctx, now);

        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Stats");
            match self.pushed_at {
                Some(pushed_at) => {
                    let waited = pushed_at.signed_duration_since(self.started_at);
                    ui.label(format!(
                        "Data pushed at {} (after {} ms)",
                        pushed_at.format("%a %b %e %T %Y"),
                        waited.num_milliseconds()
                    ));
                }
                None => {
                    ui.label("Waiting for data...");
                }
            }
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut self.view);
        });
    }
}

impl App {
    pub fn run(view: StatsView, series: DataSeries, delay: Duration) -> ! {
        let options = eframe::NativeOptions {
            initial_window_size: Some(egui::vec2(480.0, 540.0)),
            ..Default::default()
        };
        let app = App {
            view,
            pending: Some(series),
            delay,
            first_frame: None,
            started_at: Local::now(),
            pushed_at: None,
        };

        eframe::run_native(
            "Stats",
            options,
            Box::new(|cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
                Box::new(app)
            }),
        );
    }

    fn push_when_due(&mut self, ctx: &egui::Context, now: f64) {
        let first_frame = *self.first_frame.get_or_insert(now);
        if self.pending.is_none() {
            return;
        }

        if now - first_frame < self.delay.as_secs_f64() {
            // keep frames coming until the delay is over
            ctx.request_repaint();
            return;
        }

        if let Some(series) = self.pending.take() {
            log::info!("pushing {} values", series.len());
            self.view.set_data(series, now, ctx);
            self.pushed_at = Some(Local::now());
        }
    }
}
