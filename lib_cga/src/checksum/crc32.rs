use std::sync::OnceLock;

/// Reflected CRC-32 polynomial used by PNG chunk checksums.
const POLYNOMIAL: u32 = 0xEDB8_8320;

static TABLE: OnceLock<[u32; 256]> = OnceLock::new();

fn table() -> &'static [u32; 256] {
    TABLE.get_or_init(|| {
        let mut table = [0u32; 256];
        for (i, entry) in table.iter_mut().enumerate() {
            let mut c = i as u32;
            for _ in 0..8 {
                if c & 1 != 0 {
                    c = POLYNOMIAL ^ (c >> 1);
                } else {
                    c >>= 1;
                }
            }
            *entry = c;
        }
        table
    })
}

/// Computes the CRC-32 of `data` (initial value and final result
/// complemented, per the PNG specification).
pub fn checksum(data: &[u8]) -> u32 {
    let table = table();
    let mut crc = 0xffff_ffffu32;
    for &byte in data {
        crc = table[((crc ^ byte as u32) & 0xff) as usize] ^ (crc >> 8);
    }
    crc ^ 0xffff_ffff
}

/// Seals the chunk at `offs..offs + size` inside `buffer`: computes the
/// CRC over its type tag and data (the 4-byte length prefix and the CRC
/// field itself are excluded) and writes it big-endian into the trailing
/// 4 bytes.
pub fn seal_chunk(buffer: &mut [u8], offs: usize, size: usize) {
    let crc = checksum(&buffer[offs + 4..offs + size - 4]);
    buffer[offs + size - 4..offs + size].copy_from_slice(&crc.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crc_empty() {
        assert_eq!(checksum(b""), 0);
    }

    #[test]
    fn test_crc_check_value() {
        // Standard check value for CRC-32/ISO-HDLC
        assert_eq!(checksum(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn test_crc_iend_tag() {
        // CRC of an empty IEND chunk, as found in every PNG file
        assert_eq!(checksum(b"IEND"), 0xAE42_6082);
    }

    #[test]
    fn test_seal_chunk_writes_trailer() {
        // 4-byte length, 4-byte tag, no data, 4-byte CRC
        let mut buffer = vec![0u8; 12];
        buffer[4..8].copy_from_slice(b"IEND");

        seal_chunk(&mut buffer, 0, 12);
        assert_eq!(&buffer[8..12], &0xAE42_6082u32.to_be_bytes());
    }
}
