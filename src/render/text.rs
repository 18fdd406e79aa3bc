//! Text-art rendering: one line per module row, two markers per module.
use super::RenderOptions;
use crate::models::QrCode;

/// Marker for dark modules (double-width for square aspect)
const DARK: &str = "██";
/// Marker for light modules
const LIGHT: &str = "  ";

/// Render the symbol as two-tone text art.
///
/// `invert` swaps which marker represents dark; the output is the exact
/// marker-swap of the non-inverted rendering at every module position.
/// The quiet zone is included when `options.border` is set.
pub fn to_text(qr: &QrCode, options: &RenderOptions, invert: bool) -> String {
    let (dark, light) = if invert { (LIGHT, DARK) } else { (DARK, LIGHT) };
    let size = qr.size();
    let canvas = options.canvas_side(size);
    let margin = (canvas - size) / 2;

    let mut art = String::with_capacity(canvas * (canvas * 2 + 1));
    for row in 0..canvas {
        for col in 0..canvas {
            let in_symbol = row >= margin && row < margin + size && col >= margin
                && col < margin + size;
            let is_dark = in_symbol && qr.module(col - margin, row - margin);
            art.push_str(if is_dark { dark } else { light });
        }
        art.push('\n');
    }
    art
}
