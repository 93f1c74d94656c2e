use crate::encoder::bch::BchEncoder;
use crate::encoder::tables::alignment_pattern_positions;
use crate::models::{ECLevel, MaskPattern, ModuleGrid, Version};

/// Stamps the function patterns (everything that is not data) onto a grid
pub struct FunctionPatterns;

impl FunctionPatterns {
    /// Grid with finder, separator, alignment and timing patterns placed.
    ///
    /// These depend only on the version, so one template serves every mask trial.
    pub fn template(version: Version) -> ModuleGrid {
        let size = version.size();
        let mut grid = ModuleGrid::new(size);

        Self::place_finder(&mut grid, 0, 0);
        Self::place_finder(&mut grid, size - 7, 0);
        Self::place_finder(&mut grid, 0, size - 7);
        Self::place_alignment(&mut grid, version);
        Self::place_timing(&mut grid);

        grid
    }

    /// 7x7 finder at (`row`, `col`) plus its one-module light separator, clipped to bounds
    fn place_finder(grid: &mut ModuleGrid, row: usize, col: usize) {
        let size = grid.size() as isize;
        for r in -1..=7isize {
            let y = row as isize + r;
            if y < 0 || y >= size {
                continue;
            }
            for c in -1..=7isize {
                let x = col as isize + c;
                if x < 0 || x >= size {
                    continue;
                }
                let ring = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6));
                let core = (2..=4).contains(&r) && (2..=4).contains(&c);
                grid.set(y as usize, x as usize, ring || core);
            }
        }
    }

    fn place_alignment(grid: &mut ModuleGrid, version: Version) {
        let positions = alignment_pattern_positions(version);
        for &row in positions {
            for &col in positions {
                // Centers inside a finder area are already claimed
                if !grid.is_unset(row, col) {
                    continue;
                }
                for r in -2..=2isize {
                    for c in -2..=2isize {
                        let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                        grid.set(
                            (row as isize + r) as usize,
                            (col as isize + c) as usize,
                            dark,
                        );
                    }
                }
            }
        }
    }

    fn place_timing(grid: &mut ModuleGrid) {
        let size = grid.size();
        for i in 8..size - 8 {
            if grid.is_unset(i, 6) {
                grid.set(i, 6, i % 2 == 0);
            }
            if grid.is_unset(6, i) {
                grid.set(6, i, i % 2 == 0);
            }
        }
    }

    /// Both copies of the 15-bit format information plus the fixed dark module.
    ///
    /// In `test` mode every bit (and the dark module) is written light.
    pub fn place_format_info(
        grid: &mut ModuleGrid,
        ec_level: ECLevel,
        mask: MaskPattern,
        test: bool,
    ) {
        let size = grid.size();
        let bits = BchEncoder::format_bits(ec_level, mask);

        for i in 0..15 {
            let dark = !test && (bits >> i) & 1 == 1;

            // Column 8: top edge down to the separator, then the bottom-left run
            let row = match i {
                0..=5 => i,
                6..=7 => i + 1,
                _ => size - 15 + i,
            };
            grid.set(row, 8, dark);

            // Row 8: top-right run, then leftwards past the timing column
            let col = match i {
                0..=7 => size - i - 1,
                8 => 15 - i,
                _ => 15 - i - 1,
            };
            grid.set(8, col, dark);
        }

        grid.set(size - 8, 8, !test);
    }

    /// Two 6x3 copies of the 18-bit version information (versions 7+)
    pub fn place_version_info(grid: &mut ModuleGrid, version: Version, test: bool) {
        if !version.has_version_info() {
            return;
        }
        let size = grid.size();
        let bits = BchEncoder::version_bits(version);

        for i in 0..18 {
            let dark = !test && (bits >> i) & 1 == 1;
            let (a, b) = (i / 3, i % 3 + size - 11);
            grid.set(a, b, dark);
            grid.set(b, a, dark);
        }
    }
}
