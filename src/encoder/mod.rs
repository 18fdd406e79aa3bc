//! QR code symbol construction.
//!
//! The pipeline runs content through classification, version selection,
//! data codeword packing, Reed-Solomon error correction, matrix layout
//! and mask optimization:
//! content -> segments -> version -> data codewords -> interleaved
//! stream -> matrix -> masked symbol.

/// Data codeword packing (headers, terminator, padding)
pub mod bitstream;
/// Format and version information words (BCH protected)
pub mod format;
/// Mask evaluation and penalty scoring
pub mod mask;
/// Function patterns and zigzag codeword placement
pub mod matrix_builder;
/// Reed-Solomon EC codewords over GF(256) and block interleaving
pub mod reed_solomon;
/// Content classification into mode-tagged segments
pub mod segment;
/// Specification tables (EC blocks, alignment coordinates)
pub mod tables;
/// Capacity computation and version selection
pub mod version;

use crate::error::Error;
use crate::models::{ECLevel, QrCode};

/// Run the full encoding pipeline for `content` at `ec_level`.
pub fn encode(content: &[u8], ec_level: ECLevel) -> Result<QrCode, Error> {
    let segments = segment::classify(content)?;
    let version = version::select_version(&segments, ec_level)?;
    let data = bitstream::build_codewords(&segments, version, ec_level)?;
    let sequence = reed_solomon::encode_interleaved(&data, version, ec_level)?;
    let matrix = matrix_builder::build(version, &sequence)?;
    let (matrix, mask) = mask::select(&matrix, ec_level)?;
    Ok(QrCode::from_parts(version, ec_level, mask, matrix))
}
