pub mod adler32;
pub mod crc32;

pub use adler32::Adler32;
