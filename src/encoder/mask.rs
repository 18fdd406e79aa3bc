//! Mask pattern evaluation and selection.
//!
//! All eight candidates are scored with the four standard penalty rules;
//! the candidate with the strictly lowest (penalty, id) wins, so ties
//! resolve to the lowest id regardless of evaluation order.
use rayon::prelude::*;

use crate::encoder::format;
use crate::error::Error;
use crate::models::{ECLevel, MaskPattern, Matrix};

const PENALTY_N1: i32 = 3;
const PENALTY_N2: i32 = 3;
const PENALTY_N3: i32 = 40;
const PENALTY_N4: i32 = 10;

struct Candidate {
    mask: MaskPattern,
    penalty: i32,
    matrix: Matrix,
}

/// Evaluate all eight masks against the data-filled matrix and return the
/// winning grid (mask applied, format word written) and its mask id.
pub fn select(matrix: &Matrix, ec_level: ECLevel) -> Result<(Matrix, MaskPattern), Error> {
    let winner = MaskPattern::ALL
        .into_par_iter()
        .map(|mask| {
            let mut candidate = matrix.clone();
            apply(&mut candidate, mask);
            format::write_format(&mut candidate, format::format_info_bits(ec_level, mask));
            Candidate {
                mask,
                penalty: penalty_score(&candidate),
                matrix: candidate,
            }
        })
        .min_by_key(|c| (c.penalty, c.mask.id()))
        .ok_or(Error::InternalConsistency("no mask candidates evaluated"))?;

    Ok((winner.matrix, winner.mask))
}

/// XOR the mask formula over data cells only; function cells untouched
pub fn apply(matrix: &mut Matrix, mask: MaskPattern) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if !matrix.is_function(x, y) && mask.is_masked(y, x) {
                matrix.flip(x, y);
            }
        }
    }
}

/// Total penalty of a finished grid under the four standard rules
pub fn penalty_score(matrix: &Matrix) -> i32 {
    let size = matrix.size();
    let mut result = 0i32;

    // Rule 1: runs of 5+ same-color cells, and rule 3: finder-like
    // 1:1:3:1:1 sequences flanked by 4 light cells, per row
    for y in 0..size {
        let mut run_color = false;
        let mut run_len = 0i32;
        let mut history = FinderPenalty::new(size);
        for x in 0..size {
            if matrix.get(x, y) == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    // Same two rules per column
    for x in 0..size {
        let mut run_color = false;
        let mut run_len = 0i32;
        let mut history = FinderPenalty::new(size);
        for y in 0..size {
            if matrix.get(x, y) == run_color {
                run_len += 1;
                if run_len == 5 {
                    result += PENALTY_N1;
                } else if run_len > 5 {
                    result += 1;
                }
            } else {
                history.add_history(run_len);
                if !run_color {
                    result += history.count_patterns() * PENALTY_N3;
                }
                run_color = matrix.get(x, y);
                run_len = 1;
            }
        }
        result += history.terminate_and_count(run_color, run_len) * PENALTY_N3;
    }

    // Rule 2: 2x2 blocks of uniform color
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = matrix.get(x, y);
            if color == matrix.get(x + 1, y)
                && color == matrix.get(x, y + 1)
                && color == matrix.get(x + 1, y + 1)
            {
                result += PENALTY_N2;
            }
        }
    }

    // Rule 4: deviation of the dark-cell share from 50%, in 5% steps
    let dark = matrix.count_dark() as i32;
    let total = (size * size) as i32;
    let k = ((dark * 20 - total * 10).abs() + total - 1) / total - 1;
    result += k * PENALTY_N4;

    result
}

/// Sliding window of the last run lengths in one row or column, used to
/// spot the finder-like 1:1:3:1:1 ratio with a 4-module light flank.
/// Edges count as light padding.
struct FinderPenalty {
    grid_size: i32,
    run_history: [i32; 7],
}

impl FinderPenalty {
    fn new(size: usize) -> Self {
        Self {
            grid_size: size as i32,
            run_history: [0; 7],
        }
    }

    fn add_history(&mut self, mut current_run: i32) {
        if self.run_history[0] == 0 {
            // Leading edge behaves like an unbounded light run
            current_run += self.grid_size;
        }
        self.run_history.copy_within(0..6, 1);
        self.run_history[0] = current_run;
    }

    fn count_patterns(&self) -> i32 {
        let rh = &self.run_history;
        let n = rh[1];
        let found = n > 0
            && rh[2] == n
            && rh[3] == n * 3
            && rh[4] == n
            && rh[5] == n
            && (rh[0] >= n * 4 || rh[6] >= n * 4);
        i32::from(found)
    }

    fn terminate_and_count(mut self, current_color: bool, mut current_run: i32) -> i32 {
        if current_color {
            self.add_history(current_run);
            current_run = 0;
        }
        current_run += self.grid_size;
        self.add_history(current_run);
        self.count_patterns()
    }
}
