//! rust_qrencode - QR code encoding engine
//!
//! A pure Rust QR code (Model 2, versions 1-40) encoder: data segments,
//! Reed-Solomon error correction, matrix construction and mask selection.
//! Rendering is left to the caller; the result is a plain module matrix.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (data modes, error correction, matrix, masking)
pub mod encoder;
/// Error type shared by every encoding step
pub mod error;
/// Core data structures (QRCode, BitMatrix, Version, etc.)
pub mod models;

pub use encoder::modes::DataSegment;
pub use encoder::qr_encoder::EncodeOptions;
pub use error::{ErrorKind, QrError};
pub use models::{BitMatrix, ECLevel, MaskPattern, Mode, QRCode, Version};

use encoder::qr_encoder::QrEncoder;

/// Encode data at level H with automatic version, mode and mask
///
/// # Arguments
/// * `data` - Raw bytes (or a `&str`)
///
/// # Returns
/// The encoded symbol, or the first error hit along the pipeline
pub fn encode(data: impl AsRef<[u8]>) -> Result<QRCode, QrError> {
    QrEncoder::encode(data.as_ref(), &EncodeOptions::default())
}

/// Encode data with explicit options
pub fn encode_with(data: impl AsRef<[u8]>, options: &EncodeOptions) -> Result<QRCode, QrError> {
    QrEncoder::encode(data.as_ref(), options)
}

/// Encode several segments (possibly in different modes) into one symbol
pub fn encode_segments(
    segments: &[DataSegment],
    options: &EncodeOptions,
) -> Result<QRCode, QrError> {
    QrEncoder::encode_segments(segments, options)
}

/// Encoder with configuration options
///
/// ```
/// use rust_qrencode::{ECLevel, Encoder, Version};
///
/// let code = Encoder::new()
///     .level(ECLevel::M)
///     .version(Version::new(2).unwrap())
///     .encode("hello")
///     .unwrap();
/// assert_eq!(code.module_count(), 25);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create a new encoder with default settings (level H, everything automatic)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error correction level
    pub fn level(mut self, level: ECLevel) -> Self {
        self.options.level = level;
        self
    }

    /// Fix the version instead of picking the smallest that fits
    pub fn version(mut self, version: Version) -> Self {
        self.options.version = Some(version);
        self
    }

    /// Force a segment mode
    pub fn mode(mut self, mode: Mode) -> Self {
        self.options.mode = Some(mode);
        self
    }

    /// Force a mask pattern instead of scoring all eight
    pub fn mask(mut self, mask: MaskPattern) -> Self {
        self.options.mask = Some(mask);
        self
    }

    /// Current options
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode data with the configured options
    pub fn encode(&self, data: impl AsRef<[u8]>) -> Result<QRCode, QrError> {
        encode_with(data, &self.options)
    }
}
