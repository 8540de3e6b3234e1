use std::cell::Cell;

use egui::{Color32, Pos2};
use statsview::{
    ClosingArc, DataSeries, DrawCommand, Invalidate, Palette, RecordingSurface, StatsView, Style, Tick,
};

#[derive(Default)]
struct Redraws(Cell<usize>);

impl Redraws {
    fn count(&self) -> usize {
        self.0.get()
    }
}

impl Invalidate for Redraws {
    fn request_redraw(&self) {
        self.0.set(self.0.get() + 1);
    }
}

const PALETTE: [Color32; 4] = [Color32::RED, Color32::GREEN, Color32::BLUE, Color32::YELLOW];

fn style(closing_arc: ClosingArc) -> Style {
    Style {
        stroke_width: 5.0,
        font_size: 40.0,
        palette: Palette::new(PALETTE),
        closing_arc,
        text_color: Color32::BLACK,
    }
}

fn view(closing_arc: ClosingArc) -> StatsView {
    let mut overflow = [Color32::from_rgb(10, 10, 10), Color32::from_rgb(20, 20, 20)]
        .into_iter()
        .cycle();
    StatsView::new(style(closing_arc), Box::new(move || overflow.next().unwrap()))
}

/// Ticks at 60 fps until the run stops asking for frames.
fn run_to_completion(view: &mut StatsView, start: f64, host: &Redraws) -> usize {
    let mut frames = 0;
    let mut now = start;
    while let Some(run) = view.current_run() {
        now += 1.0 / 60.0;
        view.tick(run, now, host);
        frames += 1;
        assert!(frames < 1000, "animation never finished");
    }
    frames
}

#[test]
fn four_quarters_on_a_square_widget() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::LastColorFullGap);

    view.on_bounds_changed(400.0, 400.0, &host);
    assert_eq!(view.geometry().radius(), 195.0);
    assert_eq!(view.geometry().center(), Pos2::new(200.0, 200.0));

    view.set_data(DataSeries::new(vec![500.0, 500.0, 500.0, 500.0]), 0.0, &host);
    assert_eq!(view.progress(), 0.0);

    let frames = run_to_completion(&mut view, 0.0, &host);
    assert!((59..=61).contains(&frames));
    assert_eq!(view.progress(), 1.0);
    assert!(!view.is_animating());

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);

    assert_eq!(
        surface.arcs(),
        vec![
            (-90.0, 90.0, Color32::RED),
            (0.0, 90.0, Color32::GREEN),
            (90.0, 90.0, Color32::BLUE),
            (180.0, 90.0, Color32::YELLOW),
            (270.0, 0.0, Color32::YELLOW),
        ]
    );

    match surface.commands().last() {
        Some(DrawCommand::Text { text, baseline, .. }) => {
            assert_eq!(text, "100.00%");
            assert_eq!(*baseline, Pos2::new(200.0, 210.0));
        }
        other => panic!("expected the percentage label last, got {:?}", other),
    }
}

#[test]
fn default_closing_arc_is_a_tiny_first_color_arc() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(400.0, 400.0, &host);
    view.set_data(DataSeries::new(vec![500.0; 4]), 0.0, &host);
    run_to_completion(&mut view, 0.0, &host);

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);

    assert_eq!(surface.arcs().last(), Some(&(270.0, 1.0, Color32::RED)));
}

#[test]
fn every_tick_requests_a_redraw() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.set_data(DataSeries::new(vec![1000.0]), 0.0, &host);
    let after_set = host.count();
    let frames = run_to_completion(&mut view, 0.0, &host);

    assert_eq!(host.count(), after_set + frames);
}

#[test]
fn reassigning_mid_animation_detaches_the_old_run() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    let first = view.set_data(DataSeries::new(vec![2000.0]), 0.0, &host);
    assert!(matches!(view.tick(first, 0.5, &host), Tick::Advanced(p) if p == 0.5));

    let second = view.set_data(DataSeries::new(vec![1000.0]), 0.6, &host);
    assert_eq!(view.progress(), 0.0);

    // a tick scheduled for the first run arrives late
    let redraws = host.count();
    assert_eq!(view.tick(first, 0.9, &host), Tick::Ignored);
    assert_eq!(view.progress(), 0.0);
    assert_eq!(host.count(), redraws);

    assert!(matches!(view.tick(second, 0.85, &host), Tick::Advanced(p) if (p - 0.25).abs() < 1e-6));
    assert_eq!(view.tick(second, 1.6, &host), Tick::Finished);
    assert_eq!(view.tick(first, 1.7, &host), Tick::Ignored);
    assert_eq!(view.progress(), 1.0);
}

#[test]
fn partial_reveal_keeps_segment_starts() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(200.0, 200.0, &host);
    let run = view.set_data(DataSeries::new(vec![500.0, 1000.0, 500.0]), 0.0, &host);
    view.tick(run, 0.5, &host);

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);

    let arcs = surface.arcs();
    assert_eq!(arcs[0], (-90.0, 45.0, Color32::RED));
    assert_eq!(arcs[1], (0.0, 90.0, Color32::GREEN));
    assert_eq!(arcs[2], (180.0, 45.0, Color32::BLUE));
    assert_eq!(arcs[3], (270.0, 0.5, Color32::RED));
}

#[test]
fn overflow_colors_stay_put_across_redraws() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(300.0, 300.0, &host);
    view.set_data(DataSeries::new(vec![100.0; 6]), 0.0, &host);

    let mut first = RecordingSurface::new();
    view.draw(&mut first);
    let mut second = RecordingSurface::new();
    view.draw(&mut second);

    assert_eq!(first.arcs(), second.arcs());
    assert_eq!(first.arcs()[4].2, Color32::from_rgb(10, 10, 10));
    assert_eq!(first.arcs()[5].2, Color32::from_rgb(20, 20, 20));
}

#[test]
fn empty_series_draws_nothing() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(300.0, 300.0, &host);
    view.set_data(DataSeries::default(), 0.0, &host);
    run_to_completion(&mut view, 0.0, &host);

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);
    assert!(surface.is_empty());
}

#[test]
fn same_bounds_twice_same_geometry() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(320.0, 240.0, &host);
    let first = *view.geometry();
    view.on_bounds_changed(320.0, 240.0, &host);

    assert_eq!(*view.geometry(), first);
}

#[test]
fn tiny_widget_degrades_without_failing() {
    let host = Redraws::default();
    let mut view = view(ClosingArc::default());

    view.on_bounds_changed(4.0, 4.0, &host);
    assert!(view.geometry().radius() < 0.0);

    view.set_data(DataSeries::new(vec![500.0]), 0.0, &host);
    run_to_completion(&mut view, 0.0, &host);

    let mut surface = RecordingSurface::new();
    view.draw(&mut surface);
    assert_eq!(surface.texts(), vec!["25.00%"]);
}
