//! Rendering of finished symbols to raster images or text art.
//!
//! Rendering never mutates the symbol; all output choices travel in a
//! [`RenderOptions`] value passed into each call.

/// Raster (PNG) rendering
pub mod raster;
/// Two-tone text-art rendering
pub mod text;

use image::Rgba;

/// Width of the quiet zone in modules, when enabled
pub const QUIET_ZONE: usize = 4;

/// Per-call rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Include the 4-module quiet zone on all sides
    pub border: bool,
    /// Color of dark modules
    pub foreground: Rgba<u8>,
    /// Color of light modules and the quiet zone
    pub background: Rgba<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            border: true,
            foreground: Rgba([0, 0, 0, 255]),
            background: Rgba([255, 255, 255, 255]),
        }
    }
}

impl RenderOptions {
    /// Swap foreground and background colors
    pub fn inverted(mut self) -> Self {
        std::mem::swap(&mut self.foreground, &mut self.background);
        self
    }

    /// Disable the quiet zone
    pub fn without_border(mut self) -> Self {
        self.border = false;
        self
    }

    /// Logical canvas side for a symbol of `size` modules
    pub(crate) fn canvas_side(&self, size: usize) -> usize {
        if self.border {
            size + 2 * QUIET_ZONE
        } else {
            size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_side() {
        let options = RenderOptions::default();
        assert_eq!(options.canvas_side(21), 29);
        assert_eq!(options.without_border().canvas_side(21), 21);
    }

    #[test]
    fn test_inverted_swaps_colors() {
        let options = RenderOptions::default().inverted();
        assert_eq!(options.foreground, Rgba([255, 255, 255, 255]));
        assert_eq!(options.background, Rgba([0, 0, 0, 255]));
    }
}
