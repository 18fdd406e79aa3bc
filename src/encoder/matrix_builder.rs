//! Module matrix construction: function patterns and codeword placement.
use crate::encoder::format;
use crate::encoder::tables;
use crate::encoder::version;
use crate::error::Error;
use crate::models::{Matrix, Version};

/// Lay out all function patterns for a version and thread the interleaved
/// codeword bits through the remaining data cells.
///
/// Format information cells are reserved (written light) so that data
/// placement skips them; the mask selector writes the real word later.
pub fn build(version: Version, codewords: &[u8]) -> Result<Matrix, Error> {
    if codewords.len() != version::total_codewords(version) {
        return Err(Error::InternalConsistency(
            "interleaved stream length mismatch",
        ));
    }
    let mut matrix = draw_function_patterns(version);
    place_codewords(&mut matrix, version, codewords)?;
    Ok(matrix)
}

/// Build the fixed per-version scaffolding: finders with separators,
/// timing patterns, alignment patterns, reserved format area, version
/// information (v7+) and the dark module.
pub fn draw_function_patterns(version: Version) -> Matrix {
    let size = version.size();
    let mut matrix = Matrix::new(size);

    // Timing patterns first; finders overwrite their ends
    for i in 0..size {
        matrix.set_function(i, 6, i % 2 == 0);
        matrix.set_function(6, i, i % 2 == 0);
    }

    // Three finder patterns with their light separators
    draw_finder(&mut matrix, 3, 3);
    draw_finder(&mut matrix, size - 4, 3);
    draw_finder(&mut matrix, 3, size - 4);

    // Alignment patterns everywhere except the three finder corners
    let positions = tables::alignment_pattern_positions(version);
    let last = positions.len().saturating_sub(1);
    for (yi, &cy) in positions.iter().enumerate() {
        for (xi, &cx) in positions.iter().enumerate() {
            let in_finder =
                (xi == 0 && yi == 0) || (xi == last && yi == 0) || (xi == 0 && yi == last);
            if !in_finder {
                draw_alignment(&mut matrix, cx, cy);
            }
        }
    }

    // Reserve the format area and set the dark module
    format::write_format(&mut matrix, 0);
    format::write_version(&mut matrix, version);

    matrix
}

/// 7x7 finder centered at (cx, cy), plus the light separator ring,
/// clipped to the grid
fn draw_finder(matrix: &mut Matrix, cx: usize, cy: usize) {
    let size = matrix.size() as i32;
    for dy in -4i32..=4 {
        for dx in -4i32..=4 {
            let x = cx as i32 + dx;
            let y = cy as i32 + dy;
            if x < 0 || y < 0 || x >= size || y >= size {
                continue;
            }
            let dist = dx.abs().max(dy.abs());
            matrix.set_function(x as usize, y as usize, dist != 2 && dist != 4);
        }
    }
}

/// 5x5 alignment pattern centered at (cx, cy)
fn draw_alignment(matrix: &mut Matrix, cx: usize, cy: usize) {
    for dy in -2i32..=2 {
        for dx in -2i32..=2 {
            let dist = dx.abs().max(dy.abs());
            matrix.set_function(
                (cx as i32 + dx) as usize,
                (cy as i32 + dy) as usize,
                dist != 1,
            );
        }
    }
}

/// Lazy coordinate sequence for the standard two-column zigzag sweep.
///
/// Yields every cell of the grid (except the vertical timing column) in
/// placement order: column pairs right to left, alternating bottom-to-top
/// and top-to-bottom. Callers skip function cells. Restartable by
/// constructing a new scan.
pub struct ZigzagScan {
    size: usize,
    right: i32,
    vert: usize,
    pair: usize,
}

impl ZigzagScan {
    /// Start a fresh sweep over a `size` x `size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            right: size as i32 - 1,
            vert: 0,
            pair: 0,
        }
    }
}

impl Iterator for ZigzagScan {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.right == 6 {
            // The vertical timing column is skipped entirely
            self.right = 5;
        }
        if self.right < 1 {
            return None;
        }

        let x = (self.right as usize) - self.pair;
        let upward = (self.right + 1) & 2 == 0;
        let y = if upward {
            self.size - 1 - self.vert
        } else {
            self.vert
        };

        self.pair += 1;
        if self.pair == 2 {
            self.pair = 0;
            self.vert += 1;
            if self.vert == self.size {
                self.vert = 0;
                self.right -= 2;
            }
        }

        Some((x, y))
    }
}

/// Place interleaved codeword bits MSB-first into data cells following
/// the zigzag scan. Leftover remainder cells (fewer than 8) stay light.
fn place_codewords(matrix: &mut Matrix, version: Version, codewords: &[u8]) -> Result<(), Error> {
    let total_bits = codewords.len() * 8;
    let mut placed = 0usize;
    let mut leftover = 0usize;

    for (x, y) in ZigzagScan::new(matrix.size()) {
        if matrix.is_function(x, y) {
            continue;
        }
        if placed < total_bits {
            let bit = (codewords[placed >> 3] >> (7 - (placed & 7))) & 1 == 1;
            matrix.set(x, y, bit);
            placed += 1;
        } else {
            leftover += 1;
        }
    }

    if placed != total_bits || placed + leftover != version::raw_data_modules(version) {
        return Err(Error::InternalConsistency(
            "data cell count does not match codeword bits",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::version::raw_data_modules;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_data_cell_count_matches_formula_for_all_versions() {
        for ver in 1..=40u8 {
            let matrix = draw_function_patterns(v(ver));
            assert_eq!(
                matrix.data_module_count(),
                raw_data_modules(v(ver)),
                "version {}",
                ver
            );
        }
    }

    #[test]
    fn test_finder_pattern_shape() {
        let matrix = draw_function_patterns(v(1));
        // Center and outer ring of the top-left finder are dark
        assert!(matrix.get(3, 3));
        assert!(matrix.get(0, 0));
        assert!(matrix.get(6, 6));
        // Inner ring light, separator light
        assert!(!matrix.get(1, 1));
        assert!(!matrix.get(7, 7));
        assert!(matrix.is_function(7, 7));
    }

    #[test]
    fn test_timing_patterns_alternate() {
        let matrix = draw_function_patterns(v(2));
        for i in 8..matrix.size() - 8 {
            assert_eq!(matrix.get(i, 6), i % 2 == 0);
            assert_eq!(matrix.get(6, i), i % 2 == 0);
        }
    }

    #[test]
    fn test_version_info_present_from_v7() {
        let matrix = draw_function_patterns(v(7));
        let size = matrix.size();
        // Both 3x6 reserved blocks are function cells
        assert!(matrix.is_function(size - 11, 0));
        assert!(matrix.is_function(0, size - 11));

        let matrix = draw_function_patterns(v(6));
        let size = matrix.size();
        assert!(!matrix.is_function(size - 11, 0));
    }

    #[test]
    fn test_zigzag_visits_every_non_timing_cell_once() {
        let size = 21;
        let mut seen = vec![false; size * size];
        for (x, y) in ZigzagScan::new(size) {
            assert!(x != 6, "timing column must be skipped");
            assert!(!seen[y * size + x], "cell ({}, {}) visited twice", x, y);
            seen[y * size + x] = true;
        }
        let visited = seen.iter().filter(|&&s| s).count();
        assert_eq!(visited, size * size - size);
    }

    #[test]
    fn test_zigzag_starts_bottom_right_upward() {
        let size = 21;
        let mut scan = ZigzagScan::new(size);
        assert_eq!(scan.next(), Some((20, 20)));
        assert_eq!(scan.next(), Some((19, 20)));
        assert_eq!(scan.next(), Some((20, 19)));
        assert_eq!(scan.next(), Some((19, 19)));
    }

    #[test]
    fn test_place_codewords_fills_exactly() {
        let codewords = vec![0xA5u8; version::total_codewords(v(1))];
        let matrix = build(v(1), &codewords).unwrap();
        // v1 has 208 data modules = 26 codewords, no remainder bits
        assert_eq!(matrix.data_module_count(), 208);
    }

    #[test]
    fn test_wrong_stream_length_is_internal_error() {
        let codewords = vec![0u8; 10];
        assert!(matches!(
            build(v(1), &codewords),
            Err(Error::InternalConsistency(_))
        ));
    }
}
