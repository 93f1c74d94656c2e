use crate::models::{ECLevel, Mode};
use thiserror::Error;

/// Errors produced while encoding a QR code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QrError {
    /// Version outside 1..=40
    #[error("invalid version {0}: expected 1..=40")]
    InvalidVersion(u32),
    /// Unknown error correction level token
    #[error("invalid error correction level `{0}`: expected one of l, m, q, h")]
    InvalidLevel(String),
    /// Mask pattern index outside 0..=7
    #[error("invalid mask pattern {0}: expected 0..=7")]
    InvalidMask(u8),
    /// Input byte not representable in the requested segment mode
    #[error("byte 0x{byte:02X} at position {position} is not valid {mode:?} data")]
    InvalidData {
        /// Requested mode
        mode: Mode,
        /// Offset of the first offending byte
        position: usize,
        /// Offending byte
        byte: u8,
    },
    /// Polynomial built from an empty coefficient list
    #[error("polynomial needs at least one coefficient")]
    EmptyPolynomial,
    /// Discrete log requested for zero
    #[error("log(0) is undefined in GF(256)")]
    LogOfZero,
    /// Encoded bit stream does not fit the chosen version and level
    #[error("code length overflow ({needed} > {capacity} bits)")]
    CapacityExceeded {
        /// Bits written by the segments
        needed: usize,
        /// Data capacity of the symbol in bits
        capacity: usize,
    },
    /// No version up to 40 can hold the data at this level
    #[error("data too long for any version at level {level:?} ({needed} bits)")]
    DataTooLong {
        /// Requested level
        level: ECLevel,
        /// Bits needed at version 40
        needed: usize,
    },
    /// Module query outside the matrix
    #[error("module ({row}, {col}) is outside the {size}x{size} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Matrix dimension
        size: usize,
    },
    /// The embedded Reed-Solomon block table has no row for this symbol
    #[error("no RS block table entry for version {version} level {level:?}")]
    MissingBlockTable {
        /// Version number
        version: u8,
        /// Level
        level: ECLevel,
    },
    /// A module was never claimed by a pattern or by data placement
    #[error("module ({row}, {col}) was left unset")]
    UnsetModule {
        /// Row of the unset module
        row: usize,
        /// Column of the unset module
        col: usize,
    },
}

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input
    Argument,
    /// Data does not fit
    Capacity,
    /// Matrix query out of bounds
    Range,
    /// Broken internal table or construction invariant
    Internal,
}

impl QrError {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::InvalidVersion(_)
            | QrError::InvalidLevel(_)
            | QrError::InvalidMask(_)
            | QrError::InvalidData { .. }
            | QrError::EmptyPolynomial
            | QrError::LogOfZero => ErrorKind::Argument,
            QrError::CapacityExceeded { .. } | QrError::DataTooLong { .. } => ErrorKind::Capacity,
            QrError::OutOfRange { .. } => ErrorKind::Range,
            QrError::MissingBlockTable { .. } | QrError::UnsetModule { .. } => ErrorKind::Internal,
        }
    }
}
