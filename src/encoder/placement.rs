/// Codeword placement into the QR code matrix
use crate::models::{MaskPattern, ModuleGrid};

/// Writes codeword bits into the unclaimed modules following the zigzag pattern
pub struct DataPlacer;

impl DataPlacer {
    /// Fill every unset module of `grid` with `codewords` (MSB first), XORed with `mask`.
    ///
    /// Columns are walked in pairs from the right edge, alternating upward and
    /// downward; the vertical timing column is skipped. Modules left over once
    /// the codewords run out (remainder bits) are written as light before masking.
    pub fn place(grid: &mut ModuleGrid, codewords: &[u8], mask: MaskPattern) {
        let dimension = grid.size();
        let mut bits = codewords
            .iter()
            .flat_map(|&byte| (0..8).rev().map(move |bit| (byte >> bit) & 1 == 1));

        let mut upward = true;
        let mut col = dimension as i32 - 1;

        while col > 0 {
            if col == 6 {
                col -= 1;
                continue;
            }

            for step in 0..dimension {
                let row = if upward { dimension - 1 - step } else { step };
                for c in [col as usize, col as usize - 1] {
                    if grid.is_unset(row, c) {
                        let dark = bits.next().unwrap_or(false);
                        grid.set(row, c, dark ^ mask.is_masked(row, c));
                    }
                }
            }

            upward = !upward;
            col -= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::models::{ECLevel, Version};

    fn v1_grid() -> ModuleGrid {
        let mut grid = FunctionPatterns::template(Version::new(1).unwrap());
        FunctionPatterns::place_format_info(&mut grid, ECLevel::M, MaskPattern::Pattern0, true);
        grid
    }

    #[test]
    fn test_place_fills_all_modules() {
        let mut grid = v1_grid();
        DataPlacer::place(&mut grid, &[0xFF; 26], MaskPattern::Pattern1);
        assert_eq!(grid.unset_count(), 0);
    }

    #[test]
    fn test_first_byte_starts_bottom_right() {
        // 0b1010_0000: bits 7..0 land at (20,20) (20,19) (19,20) (19,19) ...
        let mut grid = v1_grid();
        let mut codewords = vec![0u8; 26];
        codewords[0] = 0b1010_0000;

        // Mask 2 (col % 3 == 0) leaves columns 19 and 20 alone
        DataPlacer::place(&mut grid, &codewords, MaskPattern::Pattern2);
        assert_eq!(grid.get(20, 20), Some(true));
        assert_eq!(grid.get(20, 19), Some(false));
        assert_eq!(grid.get(19, 20), Some(true));
        assert_eq!(grid.get(19, 19), Some(false));
        assert_eq!(grid.get(18, 20), Some(false));
    }

    #[test]
    fn test_mask_applies_to_data_only() {
        let mut masked = v1_grid();
        let mut other = v1_grid();
        DataPlacer::place(&mut masked, &[0u8; 26], MaskPattern::Pattern0);
        DataPlacer::place(&mut other, &[0u8; 26], MaskPattern::Pattern1);

        // All-zero data under a mask is exactly the mask itself on data modules
        assert_eq!(masked.get(20, 20), Some(true));
        assert_eq!(masked.get(20, 19), Some(false));
        assert_eq!(other.get(19, 20), Some(false));
        // Function modules untouched by either mask
        for (row, col) in [(0, 0), (1, 1), (6, 10), (7, 7)] {
            assert_eq!(masked.get(row, col), other.get(row, col));
        }
    }
}
