/// Growable MSB-first bit sink for the encoded data stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bits.div_ceil(8)),
            length: 0,
        }
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, width: usize) {
        debug_assert!(width <= 32, "field wider than 32 bits");
        for i in (0..width).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    /// Append one bit
    pub fn put_bit(&mut self, bit: bool) {
        if self.length % 8 == 0 {
            self.buffer.push(0);
        }
        if bit {
            let last = self.buffer.len() - 1;
            self.buffer[last] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    /// Bit at `index` (0 = MSB of the first byte)
    pub fn get(&self, index: usize) -> bool {
        (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Length in bits
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether no bits were written
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Packed bytes; the last one is zero-filled past `len()`
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume into the packed bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}
