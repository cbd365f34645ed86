use crate::constants::{ADLER_BASE, ADLER_NMAX};

/// Running Adler-32 state over the logical pixel-data byte stream.
///
/// Sums are reduced modulo `ADLER_BASE` every `ADLER_NMAX` bytes, the
/// largest interval that cannot overflow a u32 before reduction.
pub struct Adler32 {
    s1: u32,
    s2: u32,
    pending: usize,
}

impl Adler32 {
    pub fn new() -> Self {
        Self {
            s1: 1,
            s2: 0,
            pending: ADLER_NMAX,
        }
    }

    pub fn push(&mut self, byte: u8) {
        self.s1 += byte as u32;
        self.s2 += self.s1;
        self.pending -= 1;
        if self.pending == 0 {
            self.s1 %= ADLER_BASE;
            self.s2 %= ADLER_BASE;
            self.pending = ADLER_NMAX;
        }
    }

    pub fn finish(mut self) -> u32 {
        self.s1 %= ADLER_BASE;
        self.s2 %= ADLER_BASE;
        (self.s2 << 16) | self.s1
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the Adler-32 of a complete byte slice.
pub fn checksum(data: &[u8]) -> u32 {
    let mut adler = Adler32::new();
    for &byte in data {
        adler.push(byte);
    }
    adler.finish()
}
