/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::models::Mode;

const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const NOT_IN_SET: u8 = u8::MAX;

// Byte -> table value, NOT_IN_SET outside the character set
static VALUES: [u8; 256] = build_values();

const fn build_values() -> [u8; 256] {
    let mut values = [NOT_IN_SET; 256];
    let mut i = 0;
    while i < ALPHANUMERIC_TABLE.len() {
        values[ALPHANUMERIC_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    values
}

/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Table value of `byte`, if it belongs to the character set
    pub fn value_of(byte: u8) -> Option<u32> {
        match VALUES[byte as usize] {
            NOT_IN_SET => None,
            value => Some(u32::from(value)),
        }
    }

    /// Position of the first byte outside the character set, if any
    pub fn first_invalid(data: &[u8]) -> Option<usize> {
        data.iter().position(|&b| Self::value_of(b).is_none())
    }

    /// Fails with `InvalidData` on the first byte outside the character set
    pub fn validate(data: &[u8]) -> Result<(), QrError> {
        match Self::first_invalid(data) {
            Some(position) => Err(QrError::InvalidData {
                mode: Mode::Alphanumeric,
                position,
                byte: data[position],
            }),
            None => Ok(()),
        }
    }

    /// Payload length in bits for `chars` characters
    pub fn payload_bits(chars: usize) -> usize {
        chars / 2 * 11 + chars % 2 * 6
    }

    /// Write character pairs. Nothing is written if `data` leaves the character set.
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) -> Result<(), QrError> {
        Self::validate(data)?;
        let value = |b: u8| u32::from(VALUES[b as usize]);
        let mut pairs = data.chunks_exact(2);
        for pair in &mut pairs {
            buffer.put(value(pair[0]) * 45 + value(pair[1]), 11);
        }
        if let [single] = *pairs.remainder() {
            buffer.put(value(single), 6);
        }
        Ok(())
    }
}
