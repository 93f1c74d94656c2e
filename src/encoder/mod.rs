//! QR code encoding modules
//!
//! This module contains all the logic for turning input data into a module matrix:
//! - Data modes and bit packing (numeric, alphanumeric, byte)
//! - Error correction (Reed-Solomon over GF(256), BCH for format/version info)
//! - Block layout, interleaving and version selection
//! - Matrix construction and mask selection

/// BCH codes for format and version info
pub mod bch;
/// MSB-first bit buffer
pub mod bit_buffer;
/// Data codewords, padding and Reed-Solomon interleaving
pub mod codewords;
/// Process-wide tuning read from the environment
pub(crate) mod config;
/// Finder, alignment, timing, format and version patterns
pub mod function_patterns;
/// GF(256) arithmetic tables
pub mod gf256;
/// Mask penalty scoring and selection
pub mod mask;
/// Per-symbol module grid construction
pub mod matrix_builder;
/// Data segment modes (numeric, alphanumeric, byte)
pub mod modes;
/// Zigzag codeword placement
pub mod placement;
/// Polynomials over GF(256)
pub mod polynomial;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// QR standard tables (RS blocks, alignment positions)
pub mod tables;
/// Smallest-version selection
pub mod version;
