/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::models::Mode;

/// Packs ASCII digits into 10/7/4-bit groups
pub struct NumericEncoder;

impl NumericEncoder {
    /// Position of the first non-digit byte, if any
    pub fn first_invalid(data: &[u8]) -> Option<usize> {
        data.iter().position(|b| !b.is_ascii_digit())
    }

    /// Fails with `InvalidData` on the first non-digit byte
    pub fn validate(data: &[u8]) -> Result<(), QrError> {
        match Self::first_invalid(data) {
            Some(position) => Err(QrError::InvalidData {
                mode: Mode::Numeric,
                position,
                byte: data[position],
            }),
            None => Ok(()),
        }
    }

    /// Payload length in bits for `digits` digits
    pub fn payload_bits(digits: usize) -> usize {
        let tail = match digits % 3 {
            0 => 0,
            1 => 4,
            _ => 7,
        };
        digits / 3 * 10 + tail
    }

    /// Write digit groups. Nothing is written if `data` holds a non-digit.
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) -> Result<(), QrError> {
        Self::validate(data)?;
        for group in data.chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            let width = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buffer.put(value, width);
        }
        Ok(())
    }
}
