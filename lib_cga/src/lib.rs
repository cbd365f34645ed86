pub mod checksum;
pub mod constants;
pub mod picture;

use log::*;
use std::fs::File;
use std::io::Write;

pub use crate::picture::{encode, encode_with, BaseColors, Canvas, EncodingError, Layout, Rgba};

pub fn init_logging() {
    let target = Box::new(File::create("log.txt").expect("Can't create file"));

    env_logger::Builder::new()
        .target(env_logger::Target::Pipe(target))
        .filter(Some("lib_cga"), LevelFilter::Debug)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
