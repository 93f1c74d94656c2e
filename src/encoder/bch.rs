/// BCH codes for QR code format and version info
use crate::models::{ECLevel, MaskPattern, Version};

// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
// Fixed XOR so the format info is never all zeros
const FORMAT_MASK: u32 = 0x5412;
// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Format and version info codewords
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format information for `ec_level` and `mask`
    pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
        let codeword = (data << 10) | Self::remainder(data << 10, FORMAT_GENERATOR);
        (codeword ^ FORMAT_MASK) as u16
    }

    /// 18-bit version information (meaningful for versions 7+)
    pub fn version_bits(version: Version) -> u32 {
        let data = version.number() as u32;
        (data << 12) | Self::remainder(data << 12, VERSION_GENERATOR)
    }

    /// Whether `codeword` is a multiple of `generator`
    pub fn is_codeword(codeword: u32, generator: u32) -> bool {
        Self::remainder(codeword, generator) == 0
    }

    /// Whether 15 masked format bits form a valid codeword
    pub fn check_format(bits: u16) -> bool {
        Self::is_codeword((bits as u32) ^ FORMAT_MASK, FORMAT_GENERATOR)
    }

    /// Whether 18 version bits form a valid codeword
    pub fn check_version(bits: u32) -> bool {
        Self::is_codeword(bits, VERSION_GENERATOR)
    }

    fn remainder(mut value: u32, generator: u32) -> u32 {
        let degree = bit_length(generator);
        while bit_length(value) >= degree {
            value ^= generator << (bit_length(value) - degree);
        }
        value
    }
}

fn bit_length(value: u32) -> u32 {
    u32::BITS - value.leading_zeros()
}
