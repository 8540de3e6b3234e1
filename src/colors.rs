use egui::Color32;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::ConfigError;

/// Number of configurable colors. Indices past this get generated colors.
pub const PALETTE_SLOTS: usize = 4;

/// Supplies fallback colors for unset palette slots and overflow indices.
pub trait ColorSource {
    fn next_color(&mut self) -> Color32;
}

impl<F> ColorSource for F
where
    F: FnMut() -> Color32,
{
    fn next_color(&mut self) -> Color32 {
        self()
    }
}

/// Opaque colors with uniformly random RGB channels.
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn new() -> Self {
        RandomColors {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomColors {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        RandomColors::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color32 {
        Color32::from_rgb(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }
}

/// The four configured segment colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    slots: [Color32; PALETTE_SLOTS],
}

impl Palette {
    pub fn new(slots: [Color32; PALETTE_SLOTS]) -> Self {
        Palette { slots }
    }

    /// Takes the configured slots and generates a color for every gap.
    pub fn fill(configured: [Option<Color32>; PALETTE_SLOTS], source: &mut dyn ColorSource) -> Self {
        let mut slots = [Color32::BLACK; PALETTE_SLOTS];
        for (slot, color) in slots.iter_mut().zip(configured) {
            *slot = match color {
                Some(color) => color,
                None => source.next_color(),
            };
        }
        Palette { slots }
    }

    pub fn get(&self, index: usize) -> Option<Color32> {
        self.slots.get(index).copied()
    }

    pub fn first(&self) -> Color32 {
        self.slots[0]
    }

    pub fn slots(&self) -> &[Color32; PALETTE_SLOTS] {
        &self.slots
    }
}

/// Resolves the color of each data index.
pub struct ColorAssigner {
    palette: Palette,
    source: Box<dyn ColorSource>,
}

impl ColorAssigner {
    pub fn new(palette: Palette, source: Box<dyn ColorSource>) -> Self {
        ColorAssigner { palette, source }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Palette color for the first four indices. Anything past that is a
    /// freshly generated color on every call; the palette never wraps.
    pub fn color_for(&mut self, index: usize) -> Color32 {
        match self.palette.get(index) {
            Some(color) => color,
            None => self.source.next_color(),
        }
    }

    /// One color per index, resolved once so a series keeps its colors
    /// across redraws.
    pub fn assign(&mut self, count: usize) -> Vec<Color32> {
        (0..count).map(|index| self.color_for(index)).collect()
    }
}

/// `#RRGGBB` or `#AARRGGBB`.
pub fn parse_hex_color(text: &str) -> Result<Color32, ConfigError> {
    let invalid = || ConfigError::InvalidColor(text.to_string());

    let hex = text.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let packed = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
    let [a, r, g, b] = packed.to_be_bytes();

    match hex.len() {
        6 => Ok(Color32::from_rgb(r, g, b)),
        8 if a == u8::MAX => Ok(Color32::from_rgb(r, g, b)),
        8 => Ok(Color32::from_rgba_unmultiplied(r, g, b, a)),
        _ => Err(invalid()),
    }
}
