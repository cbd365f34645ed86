pub mod canvas;
pub mod encoder;
pub mod layout;
pub mod palette;

pub use canvas::Canvas;
pub use encoder::{encode, encode_with, BaseColors, EncodingError};
pub use layout::Layout;
pub use palette::{Palette, Rgba};
