//! Core data structures shared across the encoding pipeline.

/// Bit matrices and the module grid with function-cell tagging
pub mod matrix;
/// Symbol value types and the public `QrCode` handle
pub mod qr_code;

pub use matrix::{BitMatrix, Matrix};
pub use qr_code::{ECLevel, MaskPattern, QrCode, Version};
