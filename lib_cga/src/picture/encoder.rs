use log::{debug, error, info};
use thiserror::Error;

use crate::checksum::{crc32, Adler32};
use crate::constants::PNG_SIGNATURE;
use crate::picture::canvas::Canvas;
use crate::picture::palette::Rgba;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("invalid scale factor: 0 (must be at least 1)")]
    InvalidScale,
    #[error("drawing callback failed: {0}")]
    DrawFailed(String),
}

/// Palette indices of the four base colors, resolved before the drawing
/// callback runs. Resolution order is fixed, so callers may rely on
/// black occupying index 0 (the value every unset pixel byte defaults to).
#[derive(Debug, Clone, Copy)]
pub struct BaseColors {
    pub black: u8,
    pub cyan: u8,
    pub magenta: u8,
    pub white: u8,
}

/// Encodes one picture: builds a fresh canvas, runs `draw` against it and
/// returns the finished PNG byte stream.
///
/// An error returned by `draw` aborts the run; the partially built buffer
/// is dropped, never exposed.
pub fn encode<F>(scale: u32, draw: F) -> Result<Vec<u8>, EncodingError>
where
    F: FnOnce(&mut Canvas, &BaseColors) -> Result<(), EncodingError>,
{
    if scale == 0 {
        error!("Rejecting encode with scale factor 0");
        return Err(EncodingError::InvalidScale);
    }
    info!("Starting encoding with scale factor {}", scale);

    let mut canvas = Canvas::new(scale);

    // Base colors take the first four palette slots, black first so that
    // the zero-initialized pixel bytes decode to opaque black
    let base = BaseColors {
        black: canvas.resolve(Rgba::BLACK),
        cyan: canvas.resolve(Rgba::CYAN),
        magenta: canvas.resolve(Rgba::MAGENTA),
        white: canvas.resolve(Rgba::WHITE),
    };

    draw(&mut canvas, &base)?;
    debug!(
        "Drawing callback finished with {} palette entries",
        canvas.palette_len()
    );

    let png = finalize(canvas);
    info!("Encoding process completed successfully");
    Ok(png)
}

/// [`encode`] for drawing callbacks that cannot fail.
pub fn encode_with<F>(scale: u32, draw: F) -> Result<Vec<u8>, EncodingError>
where
    F: FnOnce(&mut Canvas, &BaseColors),
{
    encode(scale, |canvas, base| {
        draw(canvas, base);
        Ok(())
    })
}

/// Writes the Adler-32 and CRC-32 trailers and prepends the signature.
fn finalize(canvas: Canvas) -> Vec<u8> {
    let Canvas {
        layout, mut buffer, ..
    } = canvas;

    // Adler-32 runs over the logical stream (filter byte, then the row's
    // index bytes) in row order, not over the physical buffer
    let mut adler = Adler32::new();
    for py in 0..layout.height {
        for px in -1..layout.width as i32 {
            adler.push(buffer[layout.offset_of(px, py)]);
        }
    }
    let trailer = layout.idat_offs + layout.idat_size - 8;
    buffer[trailer..trailer + 4].copy_from_slice(&adler.finish().to_be_bytes());
    debug!("Adler-32 trailer written");

    for (offs, size) in layout.chunks() {
        crc32::seal_chunk(&mut buffer, offs, size);
    }
    debug!("Chunk CRCs sealed");

    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + buffer.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    png.extend_from_slice(&buffer);
    png
}
