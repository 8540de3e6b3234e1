//! Animated segmented ring chart for egui.
//!
//! A [`StatsView`] takes a series of non-negative values, maps them onto a
//! ring where 2000 units make a full circle, and reveals the segments over
//! one second every time new data is assigned.

pub mod animation;
pub mod colors;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod style;
pub mod surface;
mod utils;
pub mod values;
pub mod view;

pub use animation::{Animator, RunId, Tick, ANIMATION_DURATION};
pub use colors::{ColorAssigner, ColorSource, Palette, RandomColors};
pub use error::ConfigError;
pub use geometry::Geometry;
pub use renderer::{ClosingArc, Frame, Renderer};
pub use style::{Style, StyleConfig};
pub use surface::{ArcStroke, DrawCommand, LineCap, LineJoin, PainterSurface, RecordingSurface, Surface};
pub use values::DataSeries;
pub use view::{Invalidate, StatsView};
