use log::info;

use lib_cga::{encode_with, BaseColors, Canvas, Rgba};

const OUTPUT: &str = "picture.png";

/// Plain CGA test card: frame, color bars and a diagonal.
fn draw_test_card(canvas: &mut Canvas, _base: &BaseColors) {
    for x in 0..320 {
        canvas.set_pixel(x, 0, Rgba::WHITE);
        canvas.set_pixel(x, 199, Rgba::WHITE);
    }
    for y in 0..200 {
        canvas.set_pixel(0, y, Rgba::WHITE);
        canvas.set_pixel(319, y, Rgba::WHITE);
    }

    for y in 40..160 {
        for x in 40..130 {
            canvas.set_pixel(x, y, Rgba::CYAN);
        }
        for x in 130..220 {
            canvas.set_pixel(x, y, Rgba::MAGENTA);
        }
        for x in 220..280 {
            canvas.set_pixel(x, y, Rgba::opaque(0xaa, 0xaa, 0xaa));
        }
    }

    for i in 0..200 {
        canvas.set_pixel(i + 60, i, Rgba::WHITE);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    lib_cga::init_logging();

    let png = encode_with(lib_cga::constants::DEFAULT_SCALE, draw_test_card)?;
    std::fs::write(OUTPUT, &png)?;

    info!("Wrote {} ({} bytes)", OUTPUT, png.len());
    println!("Wrote {} ({} bytes)", OUTPUT, png.len());
    Ok(())
}
