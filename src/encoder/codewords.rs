use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::modes::DataSegment;
use crate::encoder::polynomial::Polynomial;
use crate::encoder::tables::{EcBlock, ec_blocks};
use crate::error::QrError;
use crate::models::{ECLevel, Version};
use log::{debug, trace};

const PAD_BYTES: [u32; 2] = [0xEC, 0x11];

/// Turns segments into the final interleaved codeword sequence for one symbol
#[derive(Debug, Clone)]
pub struct CodewordAssembler {
    version: Version,
    ec_level: ECLevel,
    blocks: Vec<EcBlock>,
}

impl CodewordAssembler {
    /// Assembler for the block layout of `version` at `ec_level`
    pub fn new(version: Version, ec_level: ECLevel) -> Result<Self, QrError> {
        Ok(Self {
            version,
            ec_level,
            blocks: ec_blocks(version, ec_level)?,
        })
    }

    /// Total data bits available
    pub fn capacity_bits(&self) -> usize {
        self.blocks.iter().map(|b| b.data_count * 8).sum()
    }

    /// Block layout in placement order
    pub fn blocks(&self) -> &[EcBlock] {
        &self.blocks
    }

    /// Segments, terminator and padding as exactly `capacity_bits() / 8` bytes
    pub fn data_codewords(&self, segments: &[DataSegment]) -> Result<Vec<u8>, QrError> {
        let capacity = self.capacity_bits();
        let mut buffer = BitBuffer::with_capacity(capacity);
        for segment in segments {
            segment.write_with_header(&mut buffer, self.version)?;
        }

        if buffer.len() > capacity {
            return Err(QrError::CapacityExceeded {
                needed: buffer.len(),
                capacity,
            });
        }
        debug!(
            "version {} level {:?}: {} of {} data bits used",
            self.version,
            self.ec_level,
            buffer.len(),
            capacity
        );

        Self::pad(&mut buffer, capacity);
        Ok(buffer.into_bytes())
    }

    /// Terminator (when it fits), zero fill to a byte boundary, then alternating pad bytes
    fn pad(buffer: &mut BitBuffer, capacity: usize) {
        if buffer.len() + 4 <= capacity {
            buffer.put(0, 4);
        }
        while buffer.len() % 8 != 0 {
            buffer.put_bit(false);
        }
        for pad in PAD_BYTES.iter().cycle() {
            if buffer.len() >= capacity {
                break;
            }
            buffer.put(*pad, 8);
        }
    }

    /// Full codeword sequence: interleaved data followed by interleaved error correction
    pub fn assemble(&self, segments: &[DataSegment]) -> Result<Vec<u8>, QrError> {
        let data = self.data_codewords(segments)?;

        let mut offset = 0;
        let mut data_blocks = Vec::with_capacity(self.blocks.len());
        let mut check_blocks = Vec::with_capacity(self.blocks.len());
        for (index, block) in self.blocks.iter().enumerate() {
            let chunk = &data[offset..offset + block.data_count];
            offset += block.data_count;
            trace!(
                "block {index}: {} data + {} ec codewords",
                block.data_count,
                block.ec_count()
            );
            check_blocks.push(ec_codewords(chunk, block.ec_count())?);
            data_blocks.push(chunk);
        }

        let total: usize = self.blocks.iter().map(|b| b.total_count).sum();
        let mut codewords = Vec::with_capacity(total);
        interleave(&data_blocks, &mut codewords);
        interleave(&check_blocks, &mut codewords);
        Ok(codewords)
    }
}

/// Reed-Solomon remainder of `data` with `ec_count` check bytes.
///
/// A remainder shorter than `ec_count` is left-padded with zeros.
pub fn ec_codewords(data: &[u8], ec_count: usize) -> Result<Vec<u8>, QrError> {
    let generator = Polynomial::generator(ec_count);
    let remainder = Polynomial::new(data, ec_count)?.modulo(&generator)?;
    let lead = ec_count.saturating_sub(remainder.len());
    Ok((0..ec_count)
        .map(|i| {
            if i < lead {
                0
            } else {
                remainder.get(i - lead)
            }
        })
        .collect())
}

/// Column-wise merge: byte i of every block, skipping blocks already exhausted
fn interleave<B: AsRef<[u8]>>(blocks: &[B], out: &mut Vec<u8>) {
    let longest = blocks.iter().map(|b| b.as_ref().len()).max().unwrap_or(0);
    for i in 0..longest {
        out.extend(blocks.iter().filter_map(|b| b.as_ref().get(i)));
    }
}
