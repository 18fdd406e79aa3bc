//! qrgen - QR code symbol construction and rendering library
//!
//! A pure Rust QR Code Model 2 encoder covering versions 1-40 and all
//! four error correction levels, with PNG and text-art rendering.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Symbol construction (segmentation, codewords, matrix, masking)
pub mod encoder;
/// Core data structures (QrCode, Matrix, BitMatrix, etc.)
pub mod models;
/// Output rendering (PNG raster, text art)
pub mod render;

mod error;

pub use error::Error;
pub use models::{BitMatrix, ECLevel, MaskPattern, Matrix, QrCode, Version};
pub use render::RenderOptions;

/// Encode `content` into a QR code symbol.
///
/// Picks the narrowest lossless encoding mode for each run of the
/// content and the smallest version that fits, then selects the mask
/// with the lowest penalty score. The result is deterministic for a
/// given `(content, ec_level)` pair.
///
/// # Example
/// ```
/// use qrgen::{encode, ECLevel};
///
/// let qr = encode(b"HELLO WORLD", ECLevel::Q).unwrap();
/// assert_eq!(qr.version().number(), 1);
/// assert_eq!(qr.size(), 21);
/// ```
pub fn encode(content: &[u8], ec_level: ECLevel) -> Result<QrCode, Error> {
    encoder::encode(content, ec_level)
}
