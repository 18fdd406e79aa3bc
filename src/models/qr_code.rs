use super::Matrix;
use crate::error::Error;
use crate::render::{self, RenderOptions};

/// QR Code version (size class 1-40 for Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21 modules)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177 modules)
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> Option<Self> {
        if (1..=40).contains(&number) {
            Some(Version(number))
        } else {
            None
        }
    }

    /// Get the version number (1-40)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Count-indicator tier: 0 for v1-9, 1 for v10-26, 2 for v27-40
    pub(crate) fn tier(&self) -> usize {
        match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        }
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Index into the specification tables (L=0, M=1, Q=2, H=3)
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    /// Two-bit encoding used in format information (L=01, M=00, Q=11, H=10)
    pub(crate) fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight candidate patterns in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x07 {
            0 => Some(MaskPattern::Pattern0),
            1 => Some(MaskPattern::Pattern1),
            2 => Some(MaskPattern::Pattern2),
            3 => Some(MaskPattern::Pattern3),
            4 => Some(MaskPattern::Pattern4),
            5 => Some(MaskPattern::Pattern5),
            6 => Some(MaskPattern::Pattern6),
            7 => Some(MaskPattern::Pattern7),
            _ => None,
        }
    }

    /// Numeric id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at (i=row, j=column) should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A finished QR code symbol.
///
/// Immutable once constructed; may be rendered any number of times in
/// either output format without re-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrCode {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    matrix: Matrix,
}

impl QrCode {
    /// Encode `content` into a symbol at the given error correction level.
    ///
    /// Picks the narrowest lossless mode per content run and the smallest
    /// version that holds the data, then applies the optimal mask.
    ///
    /// # Errors
    /// [`Error::InvalidContent`] if `content` is empty,
    /// [`Error::ContentTooLarge`] if it exceeds version 40 capacity.
    pub fn new(content: &[u8], ec_level: ECLevel) -> Result<Self, Error> {
        crate::encoder::encode(content, ec_level)
    }

    pub(crate) fn from_parts(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        matrix: Matrix,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask,
            matrix,
        }
    }

    /// Symbol version (1-40)
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level the symbol was built with
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// The mask pattern selected by penalty scoring
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    /// Module color at (x, y); true = dark
    pub fn module(&self, x: usize, y: usize) -> bool {
        self.matrix.get(x, y)
    }

    /// The finished module matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Render to an RGBA image of roughly `target_size` pixels per side.
    ///
    /// Each module is scaled to `floor(target_size / canvas_side)` pixels
    /// (at least 1), so the output may be smaller than requested.
    ///
    /// # Errors
    /// [`Error::InvalidSize`] if `target_size` is not positive.
    pub fn to_image(
        &self,
        target_size: i32,
        options: &RenderOptions,
    ) -> Result<image::RgbaImage, Error> {
        render::raster::to_image(self, target_size, options)
    }

    /// Render to PNG-encoded bytes.
    ///
    /// # Errors
    /// [`Error::InvalidSize`] if `target_size` is not positive.
    pub fn to_png(&self, target_size: i32, options: &RenderOptions) -> Result<Vec<u8>, Error> {
        render::raster::to_png(self, target_size, options)
    }

    /// Render as two-tone text art, one line per module row.
    ///
    /// `invert` swaps which marker represents dark modules.
    pub fn to_text(&self, options: &RenderOptions, invert: bool) -> String {
        render::text::to_text(self, options, invert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::new(40).unwrap().size(), 177);
        assert!(Version::new(0).is_none());
        assert!(Version::new(41).is_none());
    }

    #[test]
    fn test_version_tiers() {
        assert_eq!(Version::new(9).unwrap().tier(), 0);
        assert_eq!(Version::new(10).unwrap().tier(), 1);
        assert_eq!(Version::new(26).unwrap().tier(), 1);
        assert_eq!(Version::new(27).unwrap().tier(), 2);
    }

    #[test]
    fn test_ec_level_format_bits() {
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!(ECLevel::M.format_bits(), 0b00);
        assert_eq!(ECLevel::Q.format_bits(), 0b11);
        assert_eq!(ECLevel::H.format_bits(), 0b10);
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        for (id, pattern) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(pattern.id() as usize, id);
            assert_eq!(MaskPattern::from_bits(id as u8), Some(*pattern));
        }
    }
}
