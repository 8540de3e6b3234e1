use std::time::Duration;

use colored::*;
use statsview::{
    ColorSource, ConfigError, DataSeries, Invalidate, RandomColors, RecordingSurface, StatsView,
    StyleConfig, ANIMATION_DURATION,
};

use crate::{app::App, cli::Args};

mod app;
mod cli;
mod report;

/// Nothing to repaint when rendering without a window.
struct Headless;

impl Invalidate for Headless {
    fn request_redraw(&self) {}
}

fn main() {
    env_logger::init();

    if let Err(err) = run(cli::get_args()) {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ConfigError> {
    let series: DataSeries = args.data.parse()?;

    let mut source: Box<dyn ColorSource> = match args.seed {
        Some(seed) => Box::new(RandomColors::seeded(seed)),
        None => Box::new(RandomColors::new()),
    };
    let style = StyleConfig::load_or_default(args.config.as_deref())?.into_style(source.as_mut())?;
    let view = StatsView::new(style, source);

    if args.dump {
        dump(view, series, args.size);
        return Ok(());
    }

    App::run(view, series, Duration::from_millis(args.delay))
}

/// Renders the fully revealed frame on a square of `size` pixels.
fn dump(mut view: StatsView, series: DataSeries, size: f32) {
    view.on_bounds_changed(size, size, &Headless);
    let run = view.set_data(series, 0.0, &Headless);
    view.tick(run, ANIMATION_DURATION.as_secs_f64(), &Headless);

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);
    report::print_commands(&surface);
}
