//! Reference reader used by the integration tests
//!
//! Reads a finished symbol back the way a scanner would once the grid is
//! sampled: format info, function mask, unmask, zigzag extraction,
//! de-interleaving, Reed-Solomon syndrome check and segment parsing.

#![allow(dead_code)]

use rust_qrencode::{BitMatrix, ECLevel, MaskPattern, Mode, QRCode, Version};

// The reader keeps its own copy of every constant so that a wrong entry in the
// encoder's tables shows up as a read failure instead of cancelling out.

const ALPHANUMERIC: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

const FORMAT_GENERATOR: u32 = 0x537;
const FORMAT_MASK: u16 = 0x5412;
const VERSION_GENERATOR: u32 = 0x1F25;

// Error correction codewords per block, [L, M, Q, H][version - 1]
const EC_PER_BLOCK: [[u8; 40]; 4] = [
    [
        7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28,
        28, 28, 30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26,
        26, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ],
    [
        13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30,
        28, 30, 30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
    [
        17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28,
        30, 24, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ],
];

// Reed-Solomon blocks per symbol, [L, M, Q, H][version - 1]
const BLOCK_COUNT: [[u8; 40]; 4] = [
    [
        1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8,
        8, 9, 9, 10, 12, 12, 12, 13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ],
    [
        1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16,
        17, 17, 18, 20, 21, 23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ],
    [
        1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20,
        23, 23, 25, 27, 29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ],
    [
        1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25,
        25, 34, 30, 32, 35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ],
];

/// Everything recovered from a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub version: Version,
    pub level: ECLevel,
    pub mask: MaskPattern,
    pub segments: Vec<(Mode, Vec<u8>)>,
}

impl Decoded {
    pub fn data(&self) -> Vec<u8> {
        self.segments.iter().flat_map(|(_, d)| d.clone()).collect()
    }
}

pub fn read(code: &QRCode) -> Result<Decoded, String> {
    let matrix = code.modules();
    let size = matrix.width();
    if size < 21 || (size - 17) % 4 != 0 {
        return Err(format!("bad dimension {size}"));
    }
    let version =
        Version::new(((size - 17) / 4) as u8).map_err(|e| format!("version: {e}"))?;

    let (level, mask) = read_format(matrix)?;
    if version.number() >= 7 {
        read_version(matrix, version)?;
    }

    let func = function_mask(version);
    let bits = extract(matrix, &func, mask);

    let blocks = block_layout(version, level);
    let total: usize = blocks.iter().map(|(data, ec)| data + ec).sum();
    let codewords: Vec<u8> = bits
        .chunks(8)
        .take(total)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect();
    if codewords.len() != total {
        return Err(format!("{} codewords, expected {total}", codewords.len()));
    }

    // De-interleave
    let mut per_block: Vec<Vec<u8>> = vec![Vec::new(); blocks.len()];
    let mut it = codewords.iter();
    let longest_data = blocks.iter().map(|&(data, _)| data).max().unwrap_or(0);
    for i in 0..longest_data {
        for (k, &(data_count, _)) in blocks.iter().enumerate() {
            if i < data_count {
                per_block[k].push(*it.next().ok_or("short data")?);
            }
        }
    }
    let longest_ec = blocks.iter().map(|&(_, ec)| ec).max().unwrap_or(0);
    for i in 0..longest_ec {
        for (k, &(_, ec_count)) in blocks.iter().enumerate() {
            if i < ec_count {
                per_block[k].push(*it.next().ok_or("short ec")?);
            }
        }
    }

    let mut data = Vec::new();
    for (k, (block, &(data_count, ec_count))) in per_block.iter().zip(blocks.iter()).enumerate() {
        for i in 0..ec_count {
            if syndrome(block, i) != 0 {
                return Err(format!("block {k} syndrome {i} non-zero"));
            }
        }
        data.extend_from_slice(&block[..data_count]);
    }

    let segments = parse_segments(&data, version)?;
    Ok(Decoded {
        version,
        level,
        mask,
        segments,
    })
}

fn read_format(matrix: &BitMatrix) -> Result<(ECLevel, MaskPattern), String> {
    let size = matrix.width();
    let (mut vertical, mut horizontal) = (0u16, 0u16);
    for i in 0..15 {
        let row = match i {
            0..=5 => i,
            6..=7 => i + 1,
            _ => size - 15 + i,
        };
        let col = match i {
            0..=7 => size - i - 1,
            8 => 7,
            _ => 14 - i,
        };
        vertical |= (matrix.get(8, row) as u16) << i;
        horizontal |= (matrix.get(col, 8) as u16) << i;
    }
    if vertical != horizontal {
        return Err(format!("format copies differ: {vertical:015b} {horizontal:015b}"));
    }
    if bch_remainder(u32::from(vertical ^ FORMAT_MASK), FORMAT_GENERATOR) != 0 {
        return Err(format!("bad format BCH {vertical:015b}"));
    }
    if !matrix.get(8, size - 8) {
        return Err("dark module is light".to_string());
    }
    let info = (vertical ^ FORMAT_MASK) >> 10;
    let level = ECLevel::from_bits((info >> 3) as u8).ok_or("level")?;
    let mask = MaskPattern::from_bits((info & 7) as u8).ok_or("mask")?;
    Ok((level, mask))
}

fn read_version(matrix: &BitMatrix, version: Version) -> Result<(), String> {
    let size = matrix.width();
    let (mut right, mut bottom) = (0u32, 0u32);
    for i in 0..18 {
        right |= (matrix.get(i % 3 + size - 11, i / 3) as u32) << i;
        bottom |= (matrix.get(i / 3, i % 3 + size - 11) as u32) << i;
    }
    if right != bottom || bch_remainder(right, VERSION_GENERATOR) != 0 {
        return Err(format!("bad version info {right:018b} {bottom:018b}"));
    }
    if (right >> 12) as u8 != version.number() {
        return Err(format!("version info says {}", right >> 12));
    }
    Ok(())
}

/// true = function module, indexed (x = col, y = row)
fn function_mask(version: Version) -> BitMatrix {
    let size = version.size();
    let mut mask = BitMatrix::new(size, size);

    // Finder patterns + separators (the format strips next to them are covered below)
    for (x0, y0) in [(0, 0), (size - 8, 0), (0, size - 8)] {
        for y in y0..y0 + 8 {
            for x in x0..x0 + 8 {
                mask.set(x, y, true);
            }
        }
    }

    for i in 0..size {
        mask.set(6, i, true);
        mask.set(i, 6, true);
    }

    let align = alignment_centers(version);
    for &cx in &align {
        for &cy in &align {
            let in_tl = cx <= 8 && cy <= 8;
            let in_tr = cx >= size - 9 && cy <= 8;
            let in_bl = cx <= 8 && cy >= size - 9;
            if in_tl || in_tr || in_bl {
                continue;
            }
            for dy in 0..5 {
                for dx in 0..5 {
                    mask.set(cx - 2 + dx, cy - 2 + dy, true);
                }
            }
        }
    }

    // Format areas and dark module
    for i in 0..9 {
        mask.set(8, i, true);
        mask.set(i, 8, true);
    }
    for i in 0..8 {
        mask.set(size - 1 - i, 8, true);
        mask.set(8, size - 1 - i, true);
    }

    if version.number() >= 7 {
        for dy in 0..6 {
            for dx in 0..3 {
                mask.set(size - 11 + dx, dy, true);
                mask.set(dy, size - 11 + dx, true);
            }
        }
    }
    mask
}

/// Zigzag read of the data modules with the mask removed
fn extract(matrix: &BitMatrix, func: &BitMatrix, mask: MaskPattern) -> Vec<bool> {
    let dimension = matrix.width();
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = dimension as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for step in 0..dimension {
            let row = if upward { dimension - 1 - step } else { step };
            for c in [col as usize, col as usize - 1] {
                if !func.get(c, row) {
                    bits.push(matrix.get(c, row) ^ mask.is_masked(row, c));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }
    bits
}

/// Block polynomial evaluated at a^i
fn syndrome(block: &[u8], i: usize) -> u8 {
    let x = (0..i).fold(1u8, |acc, _| gf_mul(acc, 2));
    block.iter().fold(0u8, |acc, &c| gf_mul(acc, x) ^ c)
}

/// Shift-and-add product modulo x^8 + x^4 + x^3 + x^2 + 1
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 == 1 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

fn bch_remainder(mut value: u32, generator: u32) -> u32 {
    let degree = 31 - generator.leading_zeros();
    while value != 0 && 31 - value.leading_zeros() >= degree {
        value ^= generator << (31 - value.leading_zeros() - degree);
    }
    value
}

/// Codewords in the data area of `v`, remainder bits excluded
fn total_codewords(v: usize) -> usize {
    let mut modules = (16 * v + 128) * v + 64;
    if v >= 2 {
        let align = v / 7 + 2;
        modules -= (25 * align - 10) * align - 55;
        if v >= 7 {
            modules -= 36;
        }
    }
    modules / 8
}

/// (data, ec) codewords per block, short blocks first
fn block_layout(version: Version, level: ECLevel) -> Vec<(usize, usize)> {
    let v = version.number() as usize;
    let row = match level {
        ECLevel::L => 0,
        ECLevel::M => 1,
        ECLevel::Q => 2,
        ECLevel::H => 3,
    };
    let ec = EC_PER_BLOCK[row][v - 1] as usize;
    let count = BLOCK_COUNT[row][v - 1] as usize;
    let total = total_codewords(v);
    let short = count - total % count;
    let short_len = total / count;
    (0..count)
        .map(|i| (short_len - ec + usize::from(i >= short), ec))
        .collect()
}

/// Alignment centers from the spacing rule rather than a lookup table
fn alignment_centers(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let count = v / 7 + 2;
    let step = if v == 32 {
        26
    } else {
        (v * 4 + count * 2 + 1) / (count * 2 - 2) * 2
    };
    let size = 4 * v + 17;
    let mut centers: Vec<usize> = (0..count - 1).map(|i| size - 7 - i * step).collect();
    centers.push(6);
    centers.reverse();
    centers
}

fn count_bits(mode: Mode, version: Version) -> usize {
    let band = match version.number() {
        1..=9 => 0,
        10..=26 => 1,
        _ => 2,
    };
    match mode {
        Mode::Numeric => [10, 12, 14][band],
        Mode::Alphanumeric => [9, 11, 13][band],
        Mode::Byte => [8, 16, 16][band],
    }
}

struct BitReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl BitReader<'_> {
    fn remaining(&self) -> usize {
        self.data.len() * 8 - self.pos
    }

    fn read(&mut self, width: usize) -> Result<u32, String> {
        if width > self.remaining() {
            return Err(format!("need {width} bits, {} left", self.remaining()));
        }
        let mut value = 0u32;
        for _ in 0..width {
            let bit = (self.data[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u32;
            self.pos += 1;
        }
        Ok(value)
    }
}

fn parse_segments(data: &[u8], version: Version) -> Result<Vec<(Mode, Vec<u8>)>, String> {
    let mut reader = BitReader { data, pos: 0 };
    let mut segments = Vec::new();

    while reader.remaining() >= 4 {
        let mode = match reader.read(4)? {
            0 => break,
            1 => Mode::Numeric,
            2 => Mode::Alphanumeric,
            4 => Mode::Byte,
            other => return Err(format!("unsupported mode indicator {other}")),
        };
        let count = reader.read(count_bits(mode, version))? as usize;
        let mut out = Vec::with_capacity(count);
        match mode {
            Mode::Numeric => {
                let mut left = count;
                while left > 0 {
                    let (digits, width) = match left {
                        1 => (1, 4),
                        2 => (2, 7),
                        _ => (3, 10),
                    };
                    let value = reader.read(width)?;
                    out.extend(format!("{:0width$}", value, width = digits).bytes());
                    left -= digits;
                }
            }
            Mode::Alphanumeric => {
                let mut left = count;
                while left > 0 {
                    if left >= 2 {
                        let value = reader.read(11)? as usize;
                        out.push(ALPHANUMERIC[value / 45]);
                        out.push(ALPHANUMERIC[value % 45]);
                        left -= 2;
                    } else {
                        out.push(ALPHANUMERIC[reader.read(6)? as usize]);
                        left -= 1;
                    }
                }
            }
            Mode::Byte => {
                for _ in 0..count {
                    out.push(reader.read(8)? as u8);
                }
            }
        }
        segments.push((mode, out));
    }
    Ok(segments)
}

/// Fixture text ('#' dark, '.' light) to rows of booleans
pub fn parse_fixture(text: &str) -> Vec<Vec<bool>> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().map(|c| c == '#').collect())
        .collect()
}
