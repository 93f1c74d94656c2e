/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bit_buffer::BitBuffer;

/// Writes each input byte as one 8-bit field
pub struct ByteEncoder;

impl ByteEncoder {
    /// Payload length in bits for `bytes` bytes
    pub fn payload_bits(bytes: usize) -> usize {
        bytes * 8
    }

    /// Write every byte; any value is valid
    pub fn encode(data: &[u8], buffer: &mut BitBuffer) {
        for &byte in data {
            buffer.put(byte as u32, 8);
        }
    }
}
