use crate::error::QrError;

/// Compact bit matrix for the finished module grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y)
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set bit at (x, y)
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Get raw data as bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Square grid of tri-state modules used while a symbol is under construction.
///
/// `None` marks a module no pattern has claimed yet; only data placement may
/// fill those. Indexed `(row, col)`; out-of-range access panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    cells: Vec<Option<bool>>,
}

impl ModuleGrid {
    /// All-unset grid of `size` x `size`
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Width and height
    pub fn size(&self) -> usize {
        self.size
    }

    /// Module state at (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells[self.index(row, col)]
    }

    /// Claim the module at (`row`, `col`)
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        let index = self.index(row, col);
        self.cells[index] = Some(dark);
    }

    /// Whether nothing has claimed (`row`, `col`) yet
    pub fn is_unset(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_none()
    }

    /// Count of modules still unset
    pub fn unset_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Resolve into a boolean matrix, failing on the first unset module
    pub fn resolve(&self) -> Result<BitMatrix, QrError> {
        let mut matrix = BitMatrix::new(self.size, self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                match self.get(row, col) {
                    Some(dark) => matrix.set(col, row, dark),
                    None => return Err(QrError::UnsetModule { row, col }),
                }
            }
        }
        Ok(matrix)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "module ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}
