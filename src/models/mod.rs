/// Bit matrix and the tri-state construction grid
pub mod matrix;
/// QR code result and its parameter types
pub mod qr_code;

pub use matrix::{BitMatrix, ModuleGrid};
pub use qr_code::{ECLevel, MaskPattern, Mode, QRCode, Version};
