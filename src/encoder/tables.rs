//! QR specification tables (Model 2): error correction block structure
//! and alignment pattern coordinates.
use crate::error::Error;
use crate::models::{ECLevel, Version};

/// Error correction block structure for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Total number of blocks the data stream is split into
    pub num_blocks: usize,
    /// EC codewords appended to every block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version], version 0 unused.
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block structure lookup for a version and error correction level
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> Result<EcBlockInfo, Error> {
    let idx = ec_level.index();
    let ver = version.number() as usize;
    let ecc = ECC_CODEWORDS_PER_BLOCK[idx][ver];
    let blocks = NUM_ERROR_CORRECTION_BLOCKS[idx][ver];
    if ecc <= 0 || blocks <= 0 {
        return Err(Error::InternalConsistency("ec table entry out of range"));
    }
    Ok(EcBlockInfo {
        num_blocks: blocks as usize,
        ecc_per_block: ecc as usize,
    })
}

/// Alignment pattern center coordinates for a given version.
///
/// Returned ascending; patterns are placed at every (row, col) pair of
/// these coordinates except the three finder corners. Version 1 has none.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = version.number() as usize;
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let size = version.size();
    let step = if ver == 32 {
        26
    } else {
        ((ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2)) * 2
    };

    let mut positions = vec![6usize];
    let mut pos = size - 7;
    for _ in 1..num_align {
        positions.push(pos);
        // The subtraction after the last push is unused; saturate so it
        // cannot underflow (e.g. versions 36 and 39).
        pos = pos.saturating_sub(step);
    }
    positions[1..].reverse();
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_ec_block_info_known_entries() {
        let info = ec_block_info(v(1), ECLevel::M).unwrap();
        assert_eq!(info.num_blocks, 1);
        assert_eq!(info.ecc_per_block, 10);

        let info = ec_block_info(v(5), ECLevel::Q).unwrap();
        assert_eq!(info.num_blocks, 4);
        assert_eq!(info.ecc_per_block, 18);

        let info = ec_block_info(v(40), ECLevel::H).unwrap();
        assert_eq!(info.num_blocks, 81);
        assert_eq!(info.ecc_per_block, 30);
    }

    #[test]
    fn test_alignment_positions_known_versions() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(32)), vec![6, 34, 60, 86, 112, 138]);
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_alignment_positions_shape() {
        for ver in 2..=40u8 {
            let positions = alignment_pattern_positions(v(ver));
            assert_eq!(positions.len(), ver as usize / 7 + 2);
            assert_eq!(positions[0], 6);
            assert_eq!(*positions.last().unwrap(), v(ver).size() - 7);
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
