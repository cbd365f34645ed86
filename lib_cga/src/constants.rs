/// Logical canvas width in CGA pixels.
pub const LOGICAL_WIDTH: u32 = 320;
/// Logical canvas height in CGA pixels.
pub const LOGICAL_HEIGHT: u32 = 200;

/// Default upscale factor: every logical pixel becomes a 3x3 block.
pub const DEFAULT_SCALE: u32 = 3;

/// Maximum number of distinct palette entries (8-bit indexed color).
pub const PALETTE_CAP: usize = 256;

pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Payload capacity of one zlib stored block.
pub const STORED_BLOCK_CAP: usize = 0xffff;
/// Size of a stored block header: one final-block flag byte, LEN, NLEN.
pub const STORED_HEADER_SIZE: usize = 5;

/// Largest prime smaller than 65536.
pub const ADLER_BASE: u32 = 65521;
/// Largest n such that 255n(n+1)/2 + (n+1)(ADLER_BASE-1) <= 2^32-1.
pub const ADLER_NMAX: usize = 5552;
