//! QR code data segments
//!
//! A segment is a run of input in one encoding mode:
//! - Numeric: digits only, the densest mode
//! - Alphanumeric: upper-case letters, digits, and nine symbols
//! - Byte: anything else (UTF-8, binary, etc.)

/// Alphanumeric mode (45-symbol set, 11 bits per pair)
pub mod alphanumeric;
/// Byte mode (8 bits per byte)
pub mod byte;
/// Numeric mode (10 bits per three digits)
pub mod numeric;

use crate::encoder::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::models::{Mode, Version};
use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use numeric::NumericEncoder;

/// One mode-tagged run of payload.
///
/// Only the validating constructors build a segment, so its bytes always fit its mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment(Payload);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Payload {
    Numeric(Vec<u8>),
    Alphanumeric(Vec<u8>),
    Byte(Vec<u8>),
}

impl DataSegment {
    /// Numeric segment; fails on any non-digit byte
    pub fn numeric(data: impl Into<Vec<u8>>) -> Result<Self, QrError> {
        let data = data.into();
        NumericEncoder::validate(&data)?;
        Ok(Self(Payload::Numeric(data)))
    }

    /// Alphanumeric segment; fails on bytes outside the character set
    pub fn alphanumeric(data: impl Into<Vec<u8>>) -> Result<Self, QrError> {
        let data = data.into();
        AlphanumericEncoder::validate(&data)?;
        Ok(Self(Payload::Alphanumeric(data)))
    }

    /// Byte segment; accepts anything
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Self(Payload::Byte(data.into()))
    }

    /// Segment in the requested mode
    pub fn with_mode(data: impl Into<Vec<u8>>, mode: Mode) -> Result<Self, QrError> {
        match mode {
            Mode::Numeric => Self::numeric(data),
            Mode::Alphanumeric => Self::alphanumeric(data),
            Mode::Byte => Ok(Self::bytes(data)),
        }
    }

    /// Densest single mode that can represent `data`
    pub fn auto(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let payload = if data.is_empty() {
            Payload::Byte(data)
        } else if NumericEncoder::first_invalid(&data).is_none() {
            Payload::Numeric(data)
        } else if AlphanumericEncoder::first_invalid(&data).is_none() {
            Payload::Alphanumeric(data)
        } else {
            Payload::Byte(data)
        };
        Self(payload)
    }

    /// Encoding mode of this segment
    pub fn mode(&self) -> Mode {
        match self.0 {
            Payload::Numeric(_) => Mode::Numeric,
            Payload::Alphanumeric(_) => Mode::Alphanumeric,
            Payload::Byte(_) => Mode::Byte,
        }
    }

    /// Raw input bytes
    pub fn data(&self) -> &[u8] {
        match &self.0 {
            Payload::Numeric(d) | Payload::Alphanumeric(d) | Payload::Byte(d) => d,
        }
    }

    /// 4-bit mode indicator
    pub fn mode_indicator(&self) -> u8 {
        self.mode().indicator()
    }

    /// Value written into the character count field
    pub fn character_count(&self) -> usize {
        self.data().len()
    }

    /// Width of the character count field at `version`
    pub fn count_bits(&self, version: Version) -> usize {
        self.mode().count_bits(version)
    }

    /// Payload length in bits, without the header
    pub fn payload_bits(&self) -> usize {
        let count = self.character_count();
        match self.0 {
            Payload::Numeric(_) => NumericEncoder::payload_bits(count),
            Payload::Alphanumeric(_) => AlphanumericEncoder::payload_bits(count),
            Payload::Byte(_) => ByteEncoder::payload_bits(count),
        }
    }

    /// Header plus payload length at `version`
    pub fn encoded_len(&self, version: Version) -> usize {
        4 + self.count_bits(version) + self.payload_bits()
    }

    /// Write the payload (no header)
    pub fn write(&self, buffer: &mut BitBuffer) -> Result<(), QrError> {
        match &self.0 {
            Payload::Numeric(d) => NumericEncoder::encode(d, buffer),
            Payload::Alphanumeric(d) => AlphanumericEncoder::encode(d, buffer),
            Payload::Byte(d) => {
                ByteEncoder::encode(d, buffer);
                Ok(())
            }
        }
    }

    /// Write mode indicator, character count and payload
    pub fn write_with_header(
        &self,
        buffer: &mut BitBuffer,
        version: Version,
    ) -> Result<(), QrError> {
        buffer.put(self.mode_indicator() as u32, 4);
        buffer.put(self.character_count() as u32, self.count_bits(version));
        self.write(buffer)
    }
}
