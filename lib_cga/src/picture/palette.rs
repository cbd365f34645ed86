use std::collections::HashMap;

use crate::constants::PALETTE_CAP;

/// An 8-bit RGBA color. Two colors are equal iff all four channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xff)
    }

    // The four CGA palette-1 base colors, pre-resolved by the encoder in
    // this order so they always occupy indices 0..=3.
    pub const BLACK: Rgba = Rgba::opaque(0x00, 0x00, 0x00);
    pub const CYAN: Rgba = Rgba::opaque(0x55, 0xff, 0xff);
    pub const MAGENTA: Rgba = Rgba::opaque(0xff, 0x55, 0xff);
    pub const WHITE: Rgba = Rgba::opaque(0xff, 0xff, 0xff);
}

/// Assigns palette indices to colors in strict first-appearance order.
///
/// The palette is run-scoped: created empty when an encode run starts and
/// discarded with it.
pub struct Palette {
    lookup: HashMap<Rgba, u8>,
    next: usize,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            lookup: HashMap::new(),
            next: 0,
        }
    }

    /// Resolves `color` to its palette index.
    ///
    /// A color seen before keeps its index (resolution is idempotent); a
    /// new color takes the next free slot. Once all 256 slots are taken,
    /// every further distinct color silently aliases onto index 0 — the
    /// caller cannot tell an aliased index from a real one, so palettes
    /// that may overflow should be checked with [`Palette::len`].
    ///
    /// Returns `(index, newly_assigned)`; the caller records the color's
    /// channel bytes into the PLTE/tRNS regions when `newly_assigned`.
    pub fn resolve(&mut self, color: Rgba) -> (u8, bool) {
        if let Some(&index) = self.lookup.get(&color) {
            return (index, false);
        }
        if self.next == PALETTE_CAP {
            return (0, false);
        }

        let index = self.next as u8;
        self.lookup.insert(color, index);
        self.next += 1;
        (index, true)
    }

    /// Number of distinct colors assigned so far.
    pub fn len(&self) -> usize {
        self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == 0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
