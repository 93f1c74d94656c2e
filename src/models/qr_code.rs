use super::BitMatrix;
use crate::error::QrError;
use std::fmt;
use std::str::FromStr;

/// QR code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol (21x21)
    pub const MIN: Version = Version(1);
    /// Largest symbol (177x177)
    pub const MAX: Version = Version(40);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(QrError::InvalidVersion(number as u32))
        }
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Versions 7 and up carry two version information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// All versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl TryFrom<u32> for Version {
    type Error = QrError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        u8::try_from(number)
            .map_err(|_| QrError::InvalidVersion(number))
            .and_then(Version::new)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    #[default]
    H,
}

impl ECLevel {
    /// All levels in table order
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Get error correction level from format bits (01=L, 00=M, 11=Q, 10=H)
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits & 0x03 {
            0b01 => Some(ECLevel::L),
            0b00 => Some(ECLevel::M),
            0b11 => Some(ECLevel::Q),
            0b10 => Some(ECLevel::H),
            _ => None,
        }
    }

    /// 2-bit code written into the format information
    pub fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Row offset into the RS block table
    pub(crate) fn table_index(&self) -> usize {
        match self {
            ECLevel::L => 0,
            ECLevel::M => 1,
            ECLevel::Q => 2,
            ECLevel::H => 3,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    /// Parse `l`, `m`, `q` or `h` (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "l" | "L" => Ok(ECLevel::L),
            "m" | "M" => Ok(ECLevel::M),
            "q" | "Q" => Ok(ECLevel::Q),
            "h" | "H" => Ok(ECLevel::H),
            other => Err(QrError::InvalidLevel(other.to_string())),
        }
    }
}

/// Segment encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9, three per 10 bits
    Numeric,
    /// 45-symbol set, two per 11 bits
    Alphanumeric,
    /// Raw 8-bit bytes
    Byte,
}

impl Mode {
    /// 4-bit mode indicator
    pub fn indicator(&self) -> u8 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
        }
    }

    /// Width of the character count field for `version`
    pub fn count_bits(&self, version: Version) -> usize {
        let band = match version.number() {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        match self {
            Mode::Numeric => [10, 12, 14][band],
            Mode::Alphanumeric => [9, 11, 13][band],
            Mode::Byte => [8, 16, 16][band],
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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
    /// ((i*j)%3 + (i+j)%2) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All patterns in index order
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

    /// Get mask pattern from bits
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get((bits & 0x07) as usize).copied()
    }

    /// Validated constructor for a caller-supplied index
    pub fn new(index: u8) -> Result<Self, QrError> {
        if index < 8 {
            Ok(Self::ALL[index as usize])
        } else {
            Err(QrError::InvalidMask(index))
        }
    }

    /// Pattern index (0-7)
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be inverted
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i * j) % 3) + ((i + j) % 2)) % 2 == 0,
        }
    }
}

/// Encoded QR code
///
/// Immutable once built. Renderers read the grid through [`QRCode::is_dark`],
/// [`QRCode::rows`] or [`QRCode::modules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QRCode {
    data: Vec<u8>,
    version: Version,
    error_correction: ECLevel,
    mask_pattern: MaskPattern,
    mode: Mode,
    modules: BitMatrix,
}

impl QRCode {
    pub(crate) fn new(
        data: Vec<u8>,
        version: Version,
        error_correction: ECLevel,
        mask_pattern: MaskPattern,
        mode: Mode,
        modules: BitMatrix,
    ) -> Self {
        Self {
            data,
            version,
            error_correction,
            mask_pattern,
            mode,
            modules,
        }
    }

    /// Raw input bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Resolved version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level
    pub fn error_correction(&self) -> ECLevel {
        self.error_correction
    }

    /// Mask pattern applied to the data modules
    pub fn mask_pattern(&self) -> MaskPattern {
        self.mask_pattern
    }

    /// Segment mode used for the payload
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Width and height in modules
    pub fn module_count(&self) -> usize {
        self.modules.width()
    }

    /// Module matrix (true = dark), indexed `(x = col, y = row)`
    pub fn modules(&self) -> &BitMatrix {
        &self.modules
    }

    /// Whether the module at (`row`, `col`) is dark
    pub fn is_dark(&self, row: usize, col: usize) -> Result<bool, QrError> {
        let size = self.module_count();
        if row >= size || col >= size {
            return Err(QrError::OutOfRange { row, col, size });
        }
        Ok(self.modules.get(col, row))
    }

    /// Iterate rows top to bottom, each row left to right
    pub fn rows(&self) -> impl Iterator<Item = Vec<bool>> + '_ {
        let size = self.module_count();
        (0..size).map(move |row| (0..size).map(|col| self.modules.get(col, row)).collect())
    }

    /// Text rendering with custom dark/light symbols, one line per row
    pub fn to_string_with(&self, dark: &str, light: &str) -> String {
        self.rows()
            .map(|row| {
                row.into_iter()
                    .map(|d| if d { dark } else { light })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for QRCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with("x", " "))
    }
}
