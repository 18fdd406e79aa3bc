//! Reed-Solomon error correction codeword generation.
//!
//! QR codes use RS over GF(256) with primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D).
use crate::encoder::tables;
use crate::encoder::version;
use crate::error::Error;
use crate::models::{ECLevel, Version};

/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Field multiplication
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// alpha^n for the generator element alpha = 2
    pub fn pow_alpha(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }
}

/// Generator polynomial for `degree` EC codewords: the product of
/// (x - alpha^0)(x - alpha^1)...(x - alpha^(degree-1)).
///
/// Coefficients are returned for x^(degree-1) down to x^0; the leading
/// x^degree coefficient is an implicit 1.
pub fn generator_poly(degree: usize) -> Vec<u8> {
    let mut result = vec![0u8; degree];
    if degree == 0 {
        return result;
    }
    result[degree - 1] = 1;

    let mut root = 1u8;
    for _ in 0..degree {
        for i in 0..degree {
            result[i] = Gf256::mul(result[i], root);
            if i + 1 < degree {
                result[i] ^= result[i + 1];
            }
        }
        root = Gf256::mul(root, 0x02);
    }
    result
}

/// Remainder of `data` (as polynomial coefficients, highest power first)
/// divided by the generator polynomial. The remainder is the block's EC
/// codewords.
pub fn ec_codewords(data: &[u8], generator: &[u8]) -> Vec<u8> {
    let mut remainder = vec![0u8; generator.len()];
    for &byte in data {
        let factor = byte ^ remainder[0];
        remainder.rotate_left(1);
        if let Some(last) = remainder.last_mut() {
            *last = 0;
        }
        for (r, &g) in remainder.iter_mut().zip(generator.iter()) {
            *r ^= Gf256::mul(g, factor);
        }
    }
    remainder
}

/// How the data codeword stream splits into blocks for one (version, level)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    /// Total number of blocks
    pub num_blocks: usize,
    /// EC codewords per block (same for every block)
    pub ecc_per_block: usize,
    /// Data codewords in each short block
    pub short_data_len: usize,
    /// Leading blocks that are short; the rest carry one extra codeword
    pub num_short_blocks: usize,
}

/// Derive the block layout from the specification tables
pub fn block_layout(version: Version, ec_level: ECLevel) -> Result<BlockLayout, Error> {
    let info = tables::ec_block_info(version, ec_level)?;
    let data_total = version::data_codewords(version, ec_level)?;
    let short_data_len = data_total / info.num_blocks;
    let num_long_blocks = data_total % info.num_blocks;
    Ok(BlockLayout {
        num_blocks: info.num_blocks,
        ecc_per_block: info.ecc_per_block,
        short_data_len,
        num_short_blocks: info.num_blocks - num_long_blocks,
    })
}

/// Split data codewords into blocks, append Reed-Solomon EC codewords to
/// each, and produce the final transmission sequence: all blocks' data
/// codewords interleaved round-robin, then all EC codewords the same way.
pub fn encode_interleaved(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>, Error> {
    if data.len() != version::data_codewords(version, ec_level)? {
        return Err(Error::InternalConsistency("data codeword count mismatch"));
    }

    let layout = block_layout(version, ec_level)?;
    let generator = generator_poly(layout.ecc_per_block);

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(layout.num_blocks);
    let mut offset = 0;
    for i in 0..layout.num_blocks {
        let len = if i < layout.num_short_blocks {
            layout.short_data_len
        } else {
            layout.short_data_len + 1
        };
        blocks.push(&data[offset..offset + len]);
        offset += len;
    }
    if offset != data.len() {
        return Err(Error::InternalConsistency("block split length mismatch"));
    }

    let ecc: Vec<Vec<u8>> = blocks
        .iter()
        .map(|block| ec_codewords(block, &generator))
        .collect();

    let mut sequence = Vec::with_capacity(version::total_codewords(version));
    let longest = layout.short_data_len + 1;
    for i in 0..longest {
        for block in &blocks {
            if let Some(&cw) = block.get(i) {
                sequence.push(cw);
            }
        }
    }
    for i in 0..layout.ecc_per_block {
        for block_ecc in &ecc {
            sequence.push(block_ecc[i]);
        }
    }

    if sequence.len() != version::total_codewords(version) {
        return Err(Error::InternalConsistency(
            "interleaved codeword count mismatch",
        ));
    }
    Ok(sequence)
}
