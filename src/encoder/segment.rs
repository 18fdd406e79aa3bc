//! Content classification into mode-tagged segments
use crate::error::Error;
use crate::models::Version;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
/// Index in this table is the character's alphanumeric value.
static ALPHANUMERIC_CHARSET: [u8; 45] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'A', b'B', b'C', b'D', b'E',
    b'F', b'G', b'H', b'I', b'J', b'K', b'L', b'M', b'N', b'O', b'P', b'Q', b'R', b'S', b'T',
    b'U', b'V', b'W', b'X', b'Y', b'Z', b' ', b'$', b'%', b'*', b'+', b'-', b'.', b'/', b':',
];

/// Value of a byte in the alphanumeric table, if it has one
pub fn alphanumeric_value(byte: u8) -> Option<u16> {
    ALPHANUMERIC_CHARSET
        .iter()
        .position(|&c| c == byte)
        .map(|i| i as u16)
}

/// QR data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Digits 0-9, packed 3 per 10 bits
    Numeric,
    /// The 45-character alphanumeric set, packed 2 per 11 bits
    Alphanumeric,
    /// Arbitrary 8-bit data
    Byte,
}

impl Mode {
    /// 4-bit mode indicator placed before each segment
    pub fn indicator(&self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count indicator for a given version
    pub fn count_bits(&self, version: Version) -> usize {
        match self {
            Mode::Numeric => [10, 12, 14][version.tier()],
            Mode::Alphanumeric => [9, 11, 13][version.tier()],
            Mode::Byte => [8, 16, 16][version.tier()],
        }
    }

    /// Narrowest mode that can losslessly represent `byte`
    fn of_byte(byte: u8) -> Mode {
        if byte.is_ascii_digit() {
            Mode::Numeric
        } else if alphanumeric_value(byte).is_some() {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }
}

/// A contiguous run of content bytes sharing one encoding mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Encoding mode for this run
    pub mode: Mode,
    /// The raw content bytes of the run
    pub payload: Vec<u8>,
}

impl Segment {
    /// Number of characters the count indicator must express
    pub fn char_count(&self) -> usize {
        self.payload.len()
    }

    /// Packed payload size in bits (excluding mode and count indicators)
    pub fn payload_bits(&self) -> usize {
        let n = self.payload.len();
        match self.mode {
            Mode::Numeric => (n / 3) * 10 + [0, 4, 7][n % 3],
            Mode::Alphanumeric => (n / 2) * 11 + (n % 2) * 6,
            Mode::Byte => n * 8,
        }
    }

    /// Total bits this segment occupies at `version`, headers included
    pub fn total_bits(&self, version: Version) -> usize {
        4 + self.mode.count_bits(version) + self.payload_bits()
    }
}

/// Partition content into contiguous segments, each in the narrowest
/// lossless mode. Concatenated payloads reconstruct the input exactly.
pub fn classify(content: &[u8]) -> Result<Vec<Segment>, Error> {
    if content.is_empty() {
        return Err(Error::InvalidContent);
    }

    let mut segments: Vec<Segment> = Vec::new();
    for &byte in content {
        let mode = Mode::of_byte(byte);
        match segments.last_mut() {
            Some(seg) if seg.mode == mode => seg.payload.push(byte),
            _ => segments.push(Segment {
                mode,
                payload: vec![byte],
            }),
        }
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_rejected() {
        assert_eq!(classify(&[]), Err(Error::InvalidContent));
    }

    #[test]
    fn test_single_mode_runs() {
        let segs = classify(b"12345").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode, Mode::Numeric);

        let segs = classify(b"HELLO WORLD").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode, Mode::Alphanumeric);

        let segs = classify(b"hello\x00").unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].mode, Mode::Byte);
    }

    #[test]
    fn test_mixed_content_splits_on_mode_boundaries() {
        let segs = classify(b"ABC123xyz").unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].mode, Mode::Alphanumeric);
        assert_eq!(segs[1].mode, Mode::Numeric);
        assert_eq!(segs[2].mode, Mode::Byte);
    }

    #[test]
    fn test_payloads_reconstruct_input() {
        let content = b"https://example.com/?q=42&x=HELLO world";
        let segs = classify(content).unwrap();
        let joined: Vec<u8> = segs.iter().flat_map(|s| s.payload.clone()).collect();
        assert_eq!(joined, content);
    }

    #[test]
    fn test_payload_bits() {
        // 3 digits per 10 bits, remainders 2 digits/7 bits and 1 digit/4 bits
        let seg = |mode, len: usize| Segment {
            mode,
            payload: vec![b'0'; len],
        };
        assert_eq!(seg(Mode::Numeric, 8).payload_bits(), 20 + 7);
        assert_eq!(seg(Mode::Numeric, 7).payload_bits(), 20 + 4);
        assert_eq!(seg(Mode::Numeric, 6).payload_bits(), 20);
        // Pairs per 11 bits, odd remainder 6 bits
        assert_eq!(seg(Mode::Alphanumeric, 11).payload_bits(), 55 + 6);
        assert_eq!(seg(Mode::Alphanumeric, 10).payload_bits(), 55);
        assert_eq!(seg(Mode::Byte, 5).payload_bits(), 40);
    }

    #[test]
    fn test_alphanumeric_values() {
        assert_eq!(alphanumeric_value(b'0'), Some(0));
        assert_eq!(alphanumeric_value(b'A'), Some(10));
        assert_eq!(alphanumeric_value(b' '), Some(36));
        assert_eq!(alphanumeric_value(b':'), Some(44));
        assert_eq!(alphanumeric_value(b'a'), None);
        assert_eq!(alphanumeric_value(b'@'), None);
    }
}
