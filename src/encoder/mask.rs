/// Mask pattern evaluation and selection
use crate::encoder::matrix_builder::MatrixBuilder;
use crate::error::QrError;
use crate::models::{BitMatrix, MaskPattern};
use log::trace;
use rayon::prelude::*;

// Finder-like run 1:1:3:1:1
const FINDER_LIKE: [bool; 7] = [true, false, true, true, true, false, true];

/// Penalty of one candidate grid, split by rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyScore {
    /// Modules with more than five same-colour neighbours
    pub adjacent: u32,
    /// Uniform 2x2 blocks
    pub blocks: u32,
    /// 1011101 runs in rows and columns
    pub finder_like: u32,
    /// Deviation of the dark ratio from 50%
    pub balance: u32,
}

impl PenaltyScore {
    /// Score a resolved square matrix (lower is better)
    pub fn of(matrix: &BitMatrix) -> Self {
        let n = matrix.width();
        Self {
            adjacent: adjacent_penalty(matrix, n),
            blocks: block_penalty(matrix, n),
            finder_like: finder_like_penalty(matrix, n),
            balance: balance_penalty(matrix, n),
        }
    }

    /// Sum of all four rules
    pub fn total(&self) -> u32 {
        self.adjacent + self.blocks + self.finder_like + self.balance
    }
}

fn adjacent_penalty(m: &BitMatrix, n: usize) -> u32 {
    let mut penalty = 0;
    for row in 0..n {
        for col in 0..n {
            let dark = m.get(col, row);
            let mut same = 0;
            for r in row.saturating_sub(1)..=(row + 1).min(n - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(n - 1) {
                    if (r, c) != (row, col) && m.get(c, r) == dark {
                        same += 1;
                    }
                }
            }
            if same > 5 {
                penalty += 3 + same - 5;
            }
        }
    }
    penalty
}

fn block_penalty(m: &BitMatrix, n: usize) -> u32 {
    let mut penalty = 0;
    for row in 0..n.saturating_sub(1) {
        for col in 0..n.saturating_sub(1) {
            let dark = m.get(col, row);
            if m.get(col + 1, row) == dark
                && m.get(col, row + 1) == dark
                && m.get(col + 1, row + 1) == dark
            {
                penalty += 3;
            }
        }
    }
    penalty
}

fn finder_like_penalty(m: &BitMatrix, n: usize) -> u32 {
    let mut penalty = 0;
    for line in 0..n {
        for start in 0..n.saturating_sub(6) {
            if (0..7).all(|k| m.get(start + k, line) == FINDER_LIKE[k]) {
                penalty += 40;
            }
            if (0..7).all(|k| m.get(line, start + k) == FINDER_LIKE[k]) {
                penalty += 40;
            }
        }
    }
    penalty
}

fn balance_penalty(m: &BitMatrix, n: usize) -> u32 {
    if n == 0 {
        return 0;
    }
    // 10 points per full 5% step away from 50%, on the exact ratio
    let area = n * n;
    ((100 * m.count_ones()).abs_diff(50 * area) / (5 * area) * 10) as u32
}

/// Picks the mask with the lowest penalty
pub struct MaskEvaluator;

impl MaskEvaluator {
    /// Score all eight masks on test-mode grids and return the winner with every score.
    ///
    /// Ties go to the lowest mask index, so the parallel and sequential paths agree.
    pub fn select(
        builder: &MatrixBuilder<'_>,
        parallel: bool,
    ) -> Result<(MaskPattern, [PenaltyScore; 8]), QrError> {
        let score = |mask: MaskPattern| -> Result<PenaltyScore, QrError> {
            let matrix = builder.build_resolved(mask, true)?;
            let score = PenaltyScore::of(&matrix);
            trace!("mask {} penalty {} ({:?})", mask.index(), score.total(), score);
            Ok(score)
        };

        let scored: Vec<PenaltyScore> = if parallel {
            MaskPattern::ALL
                .par_iter()
                .map(|&mask| score(mask))
                .collect::<Result<_, _>>()?
        } else {
            MaskPattern::ALL
                .iter()
                .map(|&mask| score(mask))
                .collect::<Result<_, _>>()?
        };

        let mut scores = [PenaltyScore::default(); 8];
        scores.copy_from_slice(&scored);

        let best = MaskPattern::ALL
            .iter()
            .zip(scores.iter())
            .min_by_key(|(mask, score)| (score.total(), mask.index()))
            .map(|(&mask, _)| mask)
            .unwrap_or(MaskPattern::Pattern0);

        Ok((best, scores))
    }
}
