//! Format and version information words and their protected placement.
//!
//! Format info is 15 bits (5 data + 10 BCH) written in two copies around
//! the finder patterns. Version info (versions 7-40) is 18 bits
//! (6 data + 12 BCH) written in two copies near the opposite corners.
use crate::models::{ECLevel, MaskPattern, Matrix, Version};

/// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// Fixed XOR mask applied to the finished format word
const FORMAT_MASK: u32 = 0x5412;
/// BCH(18,6) generator polynomial: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// The 15-bit format word for an error correction level and mask id
pub fn format_info_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.id() as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ (((rem >> 9) & 1) * FORMAT_GENERATOR);
    }
    (((data << 10) | rem) ^ FORMAT_MASK) as u16
}

/// The 18-bit version word for versions 7-40
pub fn version_info_bits(version: Version) -> u32 {
    let data = version.number() as u32;
    let mut rem = data;
    for _ in 0..12 {
        rem = (rem << 1) ^ (((rem >> 11) & 1) * VERSION_GENERATOR);
    }
    (data << 12) | rem
}

fn bit(word: u32, i: usize) -> bool {
    (word >> i) & 1 == 1
}

/// Write the format word into both reserved locations and set the fixed
/// dark module. Cells are marked as function patterns. Also used with an
/// all-zero word to reserve the area before data placement.
pub fn write_format(matrix: &mut Matrix, word: u16) {
    let bits = word as u32;
    let size = matrix.size();

    // First copy, around the top-left finder
    for i in 0..=5 {
        matrix.set_function(8, i, bit(bits, i));
    }
    matrix.set_function(8, 7, bit(bits, 6));
    matrix.set_function(8, 8, bit(bits, 7));
    matrix.set_function(7, 8, bit(bits, 8));
    for i in 9..15 {
        matrix.set_function(14 - i, 8, bit(bits, i));
    }

    // Second copy, split between the top-right and bottom-left finders
    for i in 0..8 {
        matrix.set_function(size - 1 - i, 8, bit(bits, i));
    }
    for i in 8..15 {
        matrix.set_function(8, size - 15 + i, bit(bits, i));
    }

    // The one module that is always dark
    matrix.set_function(8, size - 8, true);
}

/// Write the version word into both reserved 3x6 blocks (versions 7-40)
pub fn write_version(matrix: &mut Matrix, version: Version) {
    if version.number() < 7 {
        return;
    }
    let bits = version_info_bits(version);
    let size = matrix.size();
    for i in 0..18 {
        let value = bit(bits, i);
        let a = size - 11 + i % 3;
        let b = i / 3;
        matrix.set_function(a, b, value);
        matrix.set_function(b, a, value);
    }
}
