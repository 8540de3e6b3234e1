use colored::*;
use egui::Color32;

use statsview::{DrawCommand, RecordingSurface};

fn swatch(color: Color32) -> ColoredString {
    "■".truecolor(color.r(), color.g(), color.b())
}

fn hex(color: Color32) -> String {
    format!("#{:02X}{:02X}{:02X}{:02X}", color.a(), color.r(), color.g(), color.b())
}

/// Prints recorded draw calls, one per line.
pub fn print_commands(surface: &RecordingSurface) {
    for command in surface.commands() {
        match command {
            DrawCommand::Arc {
                oval,
                start_angle,
                sweep_angle,
                stroke,
            } => {
                println!(
                    "{} {} start {:>8.2}° sweep {:>8.2}° radius {:.1} width {:.1} {}",
                    "arc ".bright_white(),
                    swatch(stroke.color),
                    start_angle,
                    sweep_angle,
                    oval.width() / 2.0,
                    stroke.width,
                    hex(stroke.color).dimmed()
                );
            }
            DrawCommand::Text {
                text,
                baseline,
                font_size,
                ..
            } => {
                println!(
                    "{} {} at ({:.1}, {:.1}) size {:.1}",
                    "text".bright_white(),
                    text.bold(),
                    baseline.x,
                    baseline.y,
                    font_size
                );
            }
        }
    }
}
