/// GF(256) arithmetic for QR Reed-Solomon coding
/// Primitive polynomial x^8 + x^4 + x^3 + x^2 + 1, generator alpha = 2
use crate::error::QrError;

/// GF(256) field operations using log/exp tables
pub struct Gf256;

const fn build_exp_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 8 {
        table[i] = 1 << i;
        i += 1;
    }
    while i < 256 {
        table[i] = table[i - 4] ^ table[i - 5] ^ table[i - 6] ^ table[i - 8];
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

static EXP_TABLE: [u8; 256] = build_exp_table();
static LOG_TABLE: [u8; 256] = build_log_table();

impl Gf256 {
    /// alpha^n, with n wrapped into [0, 255)
    pub fn exp(n: i32) -> u8 {
        EXP_TABLE[n.rem_euclid(255) as usize]
    }

    /// Discrete log of `n`; undefined for zero
    pub fn log(n: u8) -> Result<u8, QrError> {
        if n == 0 {
            return Err(QrError::LogOfZero);
        }
        Ok(LOG_TABLE[n as usize])
    }

    /// Product of `a` and `b`
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// Quotient `a / b`; fails when `b` is zero
    pub fn div(a: u8, b: u8) -> Result<u8, QrError> {
        let log_b = Self::log(b)? as i32;
        if a == 0 {
            return Ok(0);
        }
        let log_a = LOG_TABLE[a as usize] as i32;
        Ok(Self::exp(log_a - log_b))
    }
}
