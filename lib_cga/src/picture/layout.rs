use crate::constants::{
    LOGICAL_HEIGHT, LOGICAL_WIDTH, PALETTE_CAP, STORED_BLOCK_CAP, STORED_HEADER_SIZE,
};

/// Byte layout of the whole output file, computed once per run from the
/// upscale factor. Offsets never change afterwards; only the contents of
/// the regions they describe are mutated.
///
/// Chunk order is fixed: IHDR, PLTE, tRNS, IDAT, IEND. Every `_size`
/// field covers the full chunk: 4-byte length, 4-byte type tag, data,
/// 4-byte CRC.
#[derive(Debug, Clone)]
pub struct Layout {
    pub scale: u32,
    /// Physical width in pixels (logical width times scale).
    pub width: u32,
    /// Physical height in pixels (logical height times scale).
    pub height: u32,

    /// Length of the logical pixel-data stream: one filter byte plus
    /// `width` index bytes per row.
    pub pix_size: usize,
    /// Number of zlib stored blocks wrapping the pixel-data stream.
    pub stored_blocks: usize,
    /// IDAT payload length: 2-byte zlib header, stored blocks with their
    /// 5-byte headers, 4-byte Adler-32 trailer.
    pub data_size: usize,

    pub ihdr_offs: usize,
    pub ihdr_size: usize,
    pub plte_offs: usize,
    pub plte_size: usize,
    pub trns_offs: usize,
    pub trns_size: usize,
    pub idat_offs: usize,
    pub idat_size: usize,
    pub iend_offs: usize,
    pub iend_size: usize,

    /// Total file length, excluding the 8-byte PNG signature.
    pub buffer_size: usize,
}

impl Layout {
    pub fn new(scale: u32) -> Self {
        let width = LOGICAL_WIDTH * scale;
        let height = LOGICAL_HEIGHT * scale;

        let pix_size = height as usize * (width as usize + 1);
        let stored_blocks = pix_size.div_ceil(STORED_BLOCK_CAP);
        let data_size = 2 + pix_size + STORED_HEADER_SIZE * stored_blocks + 4;

        let ihdr_offs = 0;
        let ihdr_size = 4 + 4 + 13 + 4;
        let plte_offs = ihdr_offs + ihdr_size;
        let plte_size = 4 + 4 + 3 * PALETTE_CAP + 4;
        let trns_offs = plte_offs + plte_size;
        let trns_size = 4 + 4 + PALETTE_CAP + 4;
        let idat_offs = trns_offs + trns_size;
        let idat_size = 4 + 4 + data_size + 4;
        let iend_offs = idat_offs + idat_size;
        let iend_size = 4 + 4 + 4;

        Self {
            scale,
            width,
            height,
            pix_size,
            stored_blocks,
            data_size,
            ihdr_offs,
            ihdr_size,
            plte_offs,
            plte_size,
            trns_offs,
            trns_size,
            idat_offs,
            idat_size,
            iend_offs,
            iend_size,
            buffer_size: iend_offs + iend_size,
        }
    }

    /// Maps a physical coordinate to its byte offset inside the buffer.
    ///
    /// `px == -1` addresses the row's filter byte; otherwise `px` must be
    /// in `[0, width)` and `py` in `[0, height)`. The mapping accounts
    /// for the 2-byte zlib header and for every 5-byte stored-block
    /// header inserted before this byte — an off-by-one here would land
    /// bytes inside a block header and corrupt the stream.
    pub fn offset_of(&self, px: i32, py: u32) -> usize {
        debug_assert!(px >= -1 && (px as i64) < self.width as i64);
        debug_assert!(py < self.height);

        let i = py as usize * (self.width as usize + 1) + (px + 1) as usize;
        let headers = i / STORED_BLOCK_CAP + 1;

        self.idat_offs + 8 + 2 + STORED_HEADER_SIZE * headers + i
    }

    /// The five chunk regions in file order, as `(offset, size)` pairs.
    pub fn chunks(&self) -> [(usize, usize); 5] {
        [
            (self.ihdr_offs, self.ihdr_size),
            (self.plte_offs, self.plte_size),
            (self.trns_offs, self.trns_size),
            (self.idat_offs, self.idat_size),
            (self.iend_offs, self.iend_size),
        ]
    }
}
