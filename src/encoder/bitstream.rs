//! Data codeword assembly: segment headers, packed payloads, terminator
//! and pad bytes.
use crate::encoder::segment::{Mode, Segment, alphanumeric_value};
use crate::encoder::version;
use crate::error::Error;
use crate::models::{ECLevel, Version};

/// Standard pad codewords, alternated to fill unused capacity
const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// MSB-first bit accumulator backed by whole bytes
#[derive(Debug, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            let bit = (value >> i) & 1 == 1;
            if self.bit_len % 8 == 0 {
                self.bytes.push(0);
            }
            if bit {
                let last = self.bytes.len() - 1;
                self.bytes[last] |= 1 << (7 - self.bit_len % 8);
            }
            self.bit_len += 1;
        }
    }

    /// Consume the writer, returning whole bytes (zero-padded at the tail)
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Pack segments into the exact data codeword stream for (version, level):
/// per-segment mode indicator, count indicator and payload, then a
/// terminator of up to 4 zero bits, zero padding to a byte boundary, and
/// alternating pad bytes up to capacity.
pub fn build_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, Error> {
    let capacity_bits = version::data_codewords(version, ec_level)? * 8;
    let mut writer = BitWriter::new();

    for seg in segments {
        writer.push_bits(seg.mode.indicator() as u32, 4);
        writer.push_bits(seg.char_count() as u32, seg.mode.count_bits(version));
        match seg.mode {
            Mode::Numeric => push_numeric(&mut writer, &seg.payload)?,
            Mode::Alphanumeric => push_alphanumeric(&mut writer, &seg.payload)?,
            Mode::Byte => {
                for &b in &seg.payload {
                    writer.push_bits(b as u32, 8);
                }
            }
        }
    }

    if writer.bit_len() > capacity_bits {
        return Err(Error::InternalConsistency(
            "segment bits exceed selected version capacity",
        ));
    }

    // Terminator, truncated when fewer than 4 bits remain
    let terminator = (capacity_bits - writer.bit_len()).min(4);
    writer.push_bits(0, terminator);

    // Pad to a byte boundary
    let partial = writer.bit_len() % 8;
    if partial != 0 {
        writer.push_bits(0, 8 - partial);
    }

    let mut codewords = writer.into_bytes();
    let mut pad = 0usize;
    while codewords.len() * 8 < capacity_bits {
        codewords.push(PAD_BYTES[pad % 2]);
        pad += 1;
    }

    if codewords.len() * 8 != capacity_bits {
        return Err(Error::InternalConsistency("data codeword length mismatch"));
    }
    Ok(codewords)
}

fn push_numeric(writer: &mut BitWriter, payload: &[u8]) -> Result<(), Error> {
    for chunk in payload.chunks(3) {
        let mut value = 0u32;
        for &b in chunk {
            if !b.is_ascii_digit() {
                return Err(Error::InternalConsistency("non-digit in numeric segment"));
            }
            value = value * 10 + (b - b'0') as u32;
        }
        writer.push_bits(value, [0, 4, 7, 10][chunk.len()]);
    }
    Ok(())
}

fn push_alphanumeric(writer: &mut BitWriter, payload: &[u8]) -> Result<(), Error> {
    for chunk in payload.chunks(2) {
        let values: Vec<u16> = chunk
            .iter()
            .map(|&b| alphanumeric_value(b))
            .collect::<Option<_>>()
            .ok_or(Error::InternalConsistency(
                "byte outside alphanumeric charset",
            ))?;
        if values.len() == 2 {
            writer.push_bits(values[0] as u32 * 45 + values[1] as u32, 11);
        } else {
            writer.push_bits(values[0] as u32, 6);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::segment::classify;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_bit_writer_msb_first() {
        let mut w = BitWriter::new();
        w.push_bits(0b0001, 4);
        w.push_bits(0b0000001000, 10);
        assert_eq!(w.bit_len(), 14);
        let bytes = w.into_bytes();
        assert_eq!(bytes, vec![0b0001_0000, 0b0010_0000]);
    }

    #[test]
    fn test_numeric_example_1m() {
        // "01234567" at version 1-M is the specification's worked example
        let segs = classify(b"01234567").unwrap();
        let codewords = build_codewords(&segs, v(1), ECLevel::M).unwrap();
        assert_eq!(
            codewords,
            vec![
                0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC,
                0x11, 0xEC, 0x11
            ]
        );
    }

    #[test]
    fn test_alphanumeric_example_1m() {
        let segs = classify(b"HELLO WORLD").unwrap();
        let codewords = build_codewords(&segs, v(1), ECLevel::M).unwrap();
        assert_eq!(
            codewords,
            vec![
                0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC,
                0x11, 0xEC, 0x11
            ]
        );
    }

    #[test]
    fn test_stream_always_fills_capacity() {
        for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            let segs = classify(b"99 BOTTLES").unwrap();
            let version = crate::encoder::version::select_version(&segs, level).unwrap();
            let codewords = build_codewords(&segs, version, level).unwrap();
            assert_eq!(
                codewords.len(),
                crate::encoder::version::data_codewords(version, level).unwrap()
            );
        }
    }

    #[test]
    fn test_truncated_terminator_at_exact_fit() {
        // 2953 bytes leave exactly 4 bits at version 40-L; terminator fills them
        let content = vec![b'x'; 2953];
        let segs = classify(&content).unwrap();
        let codewords = build_codewords(&segs, v(40), ECLevel::L).unwrap();
        assert_eq!(codewords.len(), 2956);
        // No room for pad bytes: last codeword is payload plus terminator
        assert_eq!(*codewords.last().unwrap(), b'x' << 4 & 0xF0);
    }
}
