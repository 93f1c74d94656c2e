use super::gf256::Gf256;
use crate::error::QrError;

/// Polynomial over GF(256), coefficients highest degree first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<u8>,
}

impl Polynomial {
    /// Build from `coefficients` multiplied by x^`shift`.
    ///
    /// Leading zeros are stripped first; an all-zero input becomes the
    /// single-term zero polynomial.
    pub fn new(coefficients: &[u8], shift: usize) -> Result<Self, QrError> {
        if coefficients.is_empty() {
            return Err(QrError::EmptyPolynomial);
        }
        let Some(offset) = coefficients.iter().position(|&c| c != 0) else {
            return Ok(Self {
                coefficients: vec![0],
            });
        };
        let mut stripped = Vec::with_capacity(coefficients.len() - offset + shift);
        stripped.extend_from_slice(&coefficients[offset..]);
        stripped.resize(coefficients.len() - offset + shift, 0);
        Ok(Self {
            coefficients: stripped,
        })
    }

    /// Generator polynomial (x - a^0)(x - a^1)...(x - a^(degree-1))
    pub fn generator(degree: usize) -> Self {
        let mut poly = Self {
            coefficients: vec![1],
        };
        for i in 0..degree {
            let factor = Self {
                coefficients: vec![1, Gf256::exp(i as i32)],
            };
            poly = poly.multiply(&factor);
        }
        poly
    }

    /// Coefficients, highest degree first
    pub fn coefficients(&self) -> &[u8] {
        &self.coefficients
    }

    /// Number of coefficients (degree + 1)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Never true for a constructed polynomial
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Coefficient at `index`, counting from the highest degree
    pub fn get(&self, index: usize) -> u8 {
        self.coefficients[index]
    }

    /// Whether every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|&c| c == 0)
    }

    /// Product in GF(256)[x]
    pub fn multiply(&self, other: &Polynomial) -> Polynomial {
        let mut product = vec![0u8; self.len() + other.len() - 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                product[i + j] ^= Gf256::mul(a, b);
            }
        }
        strip(product)
    }

    /// Remainder of `self` divided by `divisor`
    pub fn modulo(&self, divisor: &Polynomial) -> Result<Polynomial, QrError> {
        let divisor_lead = Gf256::log(divisor.get(0))? as i32;
        let mut remainder = self.coefficients.clone();

        while remainder.len() >= divisor.len() && remainder[0] != 0 {
            let ratio = Gf256::log(remainder[0])? as i32 - divisor_lead;
            let factor = Gf256::exp(ratio);
            for (r, &d) in remainder.iter_mut().zip(divisor.coefficients.iter()) {
                *r ^= Gf256::mul(d, factor);
            }
            remainder = strip(remainder).coefficients;
        }

        Ok(strip(remainder))
    }
}

fn strip(coefficients: Vec<u8>) -> Polynomial {
    match coefficients.iter().position(|&c| c != 0) {
        Some(0) => Polynomial { coefficients },
        Some(offset) => Polynomial {
            coefficients: coefficients[offset..].to_vec(),
        },
        None => Polynomial {
            coefficients: vec![0],
        },
    }
}
