#![allow(dead_code)]

use lib_cga::constants::PNG_SIGNATURE;

/// One chunk of a produced file, parsed back out for verification.
pub struct Chunk {
    pub tag: [u8; 4],
    pub data: Vec<u8>,
    pub crc: u32,
}

/// Walks the byte stream after the signature and parses every chunk.
/// Panics on any structural violation, so tests fail loudly on corrupt
/// output.
pub fn parse_chunks(png: &[u8]) -> Vec<Chunk> {
    assert_eq!(&png[..8], &PNG_SIGNATURE, "missing PNG signature");

    let mut chunks = Vec::new();
    let mut cursor = 8;
    while cursor < png.len() {
        let len = u32::from_be_bytes(png[cursor..cursor + 4].try_into().unwrap()) as usize;
        let tag: [u8; 4] = png[cursor + 4..cursor + 8].try_into().unwrap();
        let data = png[cursor + 8..cursor + 8 + len].to_vec();
        let crc = u32::from_be_bytes(png[cursor + 8 + len..cursor + 12 + len].try_into().unwrap());
        chunks.push(Chunk { tag, data, crc });
        cursor += 12 + len;
    }
    assert_eq!(cursor, png.len(), "trailing bytes after last chunk");
    chunks
}

pub fn chunk<'a>(chunks: &'a [Chunk], tag: &[u8; 4]) -> &'a Chunk {
    chunks
        .iter()
        .find(|c| &c.tag == tag)
        .unwrap_or_else(|| panic!("chunk {:?} not found", String::from_utf8_lossy(tag)))
}

/// Bit-at-a-time reference CRC-32, deliberately not table-driven so it
/// cross-checks the library's table construction.
pub fn crc32_reference(data: &[u8]) -> u32 {
    let mut crc = 0xffff_ffffu32;
    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = 0xEDB8_8320 ^ (crc >> 1);
            } else {
                crc >>= 1;
            }
        }
    }
    crc ^ 0xffff_ffff
}

/// Inflates the IDAT payload through miniz_oxide, which also verifies the
/// zlib header and the Adler-32 trailer; returns the logical pixel-data
/// stream (filter bytes included).
pub fn inflate_pixels(png: &[u8]) -> Vec<u8> {
    let chunks = parse_chunks(png);
    let idat = chunk(&chunks, b"IDAT");
    miniz_oxide::inflate::decompress_to_vec_zlib(&idat.data)
        .expect("IDAT zlib stream should inflate cleanly")
}

/// Palette index of the physical pixel at `(px, py)` in an inflated
/// stream with rows of `1 + width` bytes.
pub fn pixel_index(raw: &[u8], width: usize, px: usize, py: usize) -> u8 {
    raw[py * (width + 1) + 1 + px]
}

/// RGBA of the physical pixel at `(px, py)`, resolved through the PLTE
/// and tRNS chunks the way a conformant decoder would.
pub fn decoded_color(png: &[u8], raw: &[u8], width: usize, px: usize, py: usize) -> [u8; 4] {
    let chunks = parse_chunks(png);
    let index = pixel_index(raw, width, px, py) as usize;

    let plte = &chunk(&chunks, b"PLTE").data;
    let trns = &chunk(&chunks, b"tRNS").data;
    [
        plte[3 * index],
        plte[3 * index + 1],
        plte[3 * index + 2],
        trns[index],
    ]
}
