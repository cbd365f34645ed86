use log::debug;

use crate::constants::{LOGICAL_HEIGHT, LOGICAL_WIDTH, STORED_BLOCK_CAP, STORED_HEADER_SIZE};
use crate::picture::layout::Layout;
use crate::picture::palette::{Palette, Rgba};

/// Run-scoped drawing surface handed to the drawing callback.
///
/// Owns the file buffer and palette for exactly one encode run; the
/// encoder builds it, the callback draws on it, finalization consumes it.
/// Nothing is shared across runs, so concurrent runs never alias.
pub struct Canvas {
    pub(crate) layout: Layout,
    pub(crate) buffer: Vec<u8>,
    pub(crate) palette: Palette,
}

impl Canvas {
    /// Allocates the zero-filled file buffer and writes the fixed chunk
    /// and zlib-envelope skeleton. Everything written here is independent
    /// of what gets drawn later.
    pub(crate) fn new(scale: u32) -> Self {
        let layout = Layout::new(scale);
        let mut buffer = vec![0u8; layout.buffer_size];

        // Chunk lengths and type tags
        write_chunk_intro(&mut buffer, layout.ihdr_offs, layout.ihdr_size, b"IHDR");
        write_chunk_intro(&mut buffer, layout.plte_offs, layout.plte_size, b"PLTE");
        write_chunk_intro(&mut buffer, layout.trns_offs, layout.trns_size, b"tRNS");
        write_chunk_intro(&mut buffer, layout.idat_offs, layout.idat_size, b"IDAT");
        write_chunk_intro(&mut buffer, layout.iend_offs, layout.iend_size, b"IEND");

        // IHDR payload: dimensions, bit depth 8, color type 3 (indexed);
        // compression, filter and interlace stay zero
        let ihdr = layout.ihdr_offs + 8;
        buffer[ihdr..ihdr + 4].copy_from_slice(&layout.width.to_be_bytes());
        buffer[ihdr + 4..ihdr + 8].copy_from_slice(&layout.height.to_be_bytes());
        buffer[ihdr + 8] = 8;
        buffer[ihdr + 9] = 3;

        // zlib header: deflate, 32K window, max-compression flag, with
        // the FCHECK bits fixed up to make the pair a multiple of 31
        let mut header = ((8u32 | (7 << 4)) << 8) | (3 << 6);
        header += 31 - header % 31;
        let zlib = layout.idat_offs + 8;
        buffer[zlib..zlib + 2].copy_from_slice(&(header as u16).to_be_bytes());

        // Stored-block headers at their fixed positions in the envelope
        for block in 0..layout.stored_blocks {
            let payload_start = block * STORED_BLOCK_CAP;
            let len = (layout.pix_size - payload_start).min(STORED_BLOCK_CAP) as u16;
            let offs = zlib + 2 + block * (STORED_BLOCK_CAP + STORED_HEADER_SIZE);

            buffer[offs] = (block + 1 == layout.stored_blocks) as u8;
            buffer[offs + 1..offs + 3].copy_from_slice(&len.to_le_bytes());
            buffer[offs + 3..offs + 5].copy_from_slice(&(!len).to_le_bytes());
        }

        debug!(
            "Canvas skeleton written: {}x{} physical, {} stored blocks, {} bytes",
            layout.width, layout.height, layout.stored_blocks, layout.buffer_size
        );

        Self {
            layout,
            buffer,
            palette: Palette::new(),
        }
    }

    /// Resolves `color` to its palette index, recording its channel bytes
    /// into the PLTE and tRNS regions on first appearance. Once the
    /// palette is full, further distinct colors alias to index 0.
    pub fn resolve(&mut self, color: Rgba) -> u8 {
        let (index, newly_assigned) = self.palette.resolve(color);
        if newly_assigned {
            let ndx = self.layout.plte_offs + 8 + 3 * index as usize;
            self.buffer[ndx] = color.r;
            self.buffer[ndx + 1] = color.g;
            self.buffer[ndx + 2] = color.b;
            self.buffer[self.layout.trns_offs + 8 + index as usize] = color.a;
        }
        index
    }

    /// Plots one logical pixel as an SxS block of physical pixels.
    ///
    /// Coordinates outside the 320x200 logical canvas are clipped: the
    /// call is a no-op, not an error.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || x >= LOGICAL_WIDTH as i32 || y < 0 || y >= LOGICAL_HEIGHT as i32 {
            return;
        }

        let index = self.resolve(color);
        let scale = self.layout.scale as i32;
        for dy in 0..scale {
            for dx in 0..scale {
                let offs = self
                    .layout
                    .offset_of(scale * x + dx, (scale * y + dy) as u32);
                self.buffer[offs] = index;
            }
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of distinct colors resolved so far.
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }
}

fn write_chunk_intro(buffer: &mut [u8], offs: usize, size: usize, tag: &[u8; 4]) {
    // Chunk length counts data only, not length/tag/CRC
    let data_len = (size - 12) as u32;
    buffer[offs..offs + 4].copy_from_slice(&data_len.to_be_bytes());
    buffer[offs + 4..offs + 8].copy_from_slice(tag);
}
