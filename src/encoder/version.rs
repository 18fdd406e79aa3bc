//! Symbol capacity and version selection
use crate::encoder::segment::Segment;
use crate::encoder::tables;
use crate::error::Error;
use crate::models::{ECLevel, Version};

/// Number of modules available for codeword bits, after subtracting all
/// function patterns (finders, separators, timing, alignment, format and
/// version information, dark module).
pub fn raw_data_modules(version: Version) -> usize {
    let ver = version.number() as usize;
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + error correction) the symbol carries
pub fn total_codewords(version: Version) -> usize {
    raw_data_modules(version) / 8
}

/// Data codeword capacity for a version and error correction level
pub fn data_codewords(version: Version, ec_level: ECLevel) -> Result<usize, Error> {
    let info = tables::ec_block_info(version, ec_level)?;
    Ok(total_codewords(version) - info.num_blocks * info.ecc_per_block)
}

/// Bits the segments occupy at `version`, headers included.
/// None if a segment's length overflows the count indicator width.
fn required_bits(segments: &[Segment], version: Version) -> Option<usize> {
    let mut total = 0usize;
    for seg in segments {
        let count_bits = seg.mode.count_bits(version);
        if seg.char_count() >= (1 << count_bits) {
            return None;
        }
        total += seg.total_bits(version);
    }
    Some(total)
}

/// Pick the smallest version whose data capacity holds the segments at
/// the requested level. The terminator is not counted: it shrinks to fit
/// when fewer than 4 bits remain.
pub fn select_version(segments: &[Segment], ec_level: ECLevel) -> Result<Version, Error> {
    for number in 1..=40u8 {
        let version = Version::new(number).ok_or(Error::InternalConsistency("version range"))?;
        let Some(needed) = required_bits(segments, version) else {
            continue;
        };
        if needed <= data_codewords(version, ec_level)? * 8 {
            return Ok(version);
        }
    }
    Err(Error::ContentTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::segment::classify;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_data_modules_known_values() {
        assert_eq!(raw_data_modules(v(1)), 208);
        assert_eq!(raw_data_modules(v(2)), 359);
        assert_eq!(raw_data_modules(v(7)), 1568);
        assert_eq!(raw_data_modules(v(40)), 29648);
    }

    #[test]
    fn test_data_codewords_known_values() {
        assert_eq!(data_codewords(v(1), ECLevel::M).unwrap(), 16);
        assert_eq!(data_codewords(v(1), ECLevel::Q).unwrap(), 13);
        assert_eq!(data_codewords(v(1), ECLevel::H).unwrap(), 9);
        assert_eq!(data_codewords(v(40), ECLevel::L).unwrap(), 2956);
    }

    #[test]
    fn test_select_smallest_version() {
        let segs = classify(b"HELLO WORLD").unwrap();
        assert_eq!(select_version(&segs, ECLevel::Q).unwrap(), v(1));
        // 74 payload bits exceed the 72-bit capacity of version 1 at High
        assert_eq!(select_version(&segs, ECLevel::H).unwrap(), v(2));
    }

    #[test]
    fn test_byte_capacity_boundary_at_version_40() {
        // Byte mode at v40-L: 4 + 16 header bits + 8 per byte within 2956*8
        let max = (2956 * 8 - 20) / 8;
        assert_eq!(max, 2953);

        let content = vec![0u8; max];
        let segs = classify(&content).unwrap();
        assert_eq!(select_version(&segs, ECLevel::L).unwrap(), v(40));

        let content = vec![0u8; max + 1];
        let segs = classify(&content).unwrap();
        assert_eq!(
            select_version(&segs, ECLevel::L),
            Err(Error::ContentTooLarge)
        );
    }

    #[test]
    fn test_count_indicator_overflow_forces_larger_version() {
        // 300 bytes cannot be described by the 8-bit count indicator of
        // versions 1-9, so the selector must skip to the 16-bit tier.
        let content = vec![0u8; 300];
        let segs = classify(&content).unwrap();
        let version = select_version(&segs, ECLevel::L).unwrap();
        assert!(version.number() >= 10);
    }
}
