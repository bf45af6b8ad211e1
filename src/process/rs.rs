//! Reed-Solomon error correction over one superframe.
//!
//! Fixed code geometry for the DAB+ subchannel profile: byte-oriented
//! RS(120,110) over GF(256) with field generator polynomial 0x11D,
//! shortened from RS(255,245). Each codeword corrects up to 5 byte errors.
//!
//! A superframe of `sf_len` bytes holds `sf_len / 120` codewords,
//! byte-interleaved at depth `sf_len / 120`: codeword `i` consists of the
//! bytes at positions `{0k+i, 1k+i, .., 119k+i}`.

use log::debug;

use crate::utils::errors::RsError;

/// Reed-Solomon codeword length in bytes.
pub const CODEWORD_LEN: usize = 120;

/// Data bytes per codeword.
pub const DATA_LEN: usize = 110;

/// Parity bytes per codeword (number of code roots).
pub const PARITY_LEN: usize = CODEWORD_LEN - DATA_LEN;

/// Symbol count of the unshortened code.
const NN: usize = 255;

/// Location offset between reported locators and codeword byte positions.
const PAD: usize = NN - CODEWORD_LEN;

/// GF(256) field generator polynomial.
const GF_POLY: u16 = 0x11D;

/// Maximum correctable byte errors per codeword.
const MAX_ERRORS: usize = PARITY_LEN / 2;

#[inline(always)]
const fn gf_tables() -> ([u8; NN], [u8; 256]) {
    let mut alpha_to = [0u8; NN];
    let mut index_of = [0u8; 256];

    let mut x: u16 = 1;
    let mut i = 0;
    while i < NN {
        alpha_to[i] = x as u8;
        index_of[x as usize] = i as u8;

        x <<= 1;
        if x & 0x100 != 0 {
            x ^= GF_POLY;
        }
        i += 1;
    }

    (alpha_to, index_of)
}

/// Correction outcome for one superframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionReport {
    /// Total corrected symbols across all codewords, including locators
    /// discarded as location offset artifacts.
    pub corrected: usize,

    /// At least one codeword exceeded the correction capability. The
    /// buffer is still usable beyond that codeword.
    pub uncorrectable: bool,
}

/// Corrected locators of one codeword, in the unshortened frame
/// convention. Mapping to a byte position requires subtracting [`PAD`];
/// locators below it fall outside the shortened window.
#[derive(Debug, Clone, Copy, Default)]
struct Corrections {
    locators: [u8; MAX_ERRORS],
    count: usize,
}

/// Byte-interleaved Reed-Solomon decoder with fixed code geometry.
#[derive(Debug)]
pub struct RsDecoder {
    alpha_to: [u8; NN],
    index_of: [u8; 256],
}

impl Default for RsDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RsDecoder {
    pub const fn new() -> Self {
        let (alpha_to, index_of) = gf_tables();

        Self { alpha_to, index_of }
    }

    #[inline(always)]
    fn mul(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }

        let log = self.index_of[a as usize] as usize + self.index_of[b as usize] as usize;
        self.alpha_to[log % NN]
    }

    #[inline(always)]
    fn div(&self, a: u8, b: u8) -> u8 {
        if a == 0 {
            return 0;
        }

        let log =
            NN + self.index_of[a as usize] as usize - self.index_of[b as usize] as usize;
        self.alpha_to[log % NN]
    }

    /// Evaluates a polynomial (ascending coefficients) at `x`.
    #[inline(always)]
    fn eval(&self, poly: &[u8], x: u8) -> u8 {
        poly.iter()
            .rev()
            .fold(0, |acc, &c| self.mul(acc, x) ^ c)
    }

    /// Corrects all interleaved codewords of a superframe in place.
    ///
    /// Correction is best-effort: codewords beyond the correction
    /// capability are flagged and left untouched, and the buffer is meant
    /// to be used as-is afterwards, degraded or not.
    pub fn decode_superframe(&self, sf: &mut [u8]) -> CorrectionReport {
        debug_assert_eq!(sf.len() % CODEWORD_LEN, 0);

        let depth = sf.len() / CODEWORD_LEN;
        let mut report = CorrectionReport::default();
        let mut codeword = [0u8; CODEWORD_LEN];

        for i in 0..depth {
            for (pos, byte) in codeword.iter_mut().enumerate() {
                *byte = sf[pos * depth + i];
            }

            match self.decode_codeword(&mut codeword) {
                Ok(corrections) => {
                    report.corrected += corrections.count;

                    for &locator in &corrections.locators[..corrections.count] {
                        // Locators below the offset lie outside the
                        // shortened codeword and carry no byte to write
                        // back.
                        let Some(pos) = (locator as usize).checked_sub(PAD) else {
                            continue;
                        };

                        sf[pos * depth + i] = codeword[pos];
                    }
                }
                Err(RsError::Uncorrectable) => report.uncorrectable = true,
            }
        }

        if report.corrected > 0 || report.uncorrectable {
            debug!(
                "corrected {} byte(s){}",
                report.corrected,
                if report.uncorrectable {
                    ", uncorrectable codeword(s) remain"
                } else {
                    ""
                }
            );
        }

        report
    }

    /// Decodes a single shortened codeword in place.
    ///
    /// Returns the corrected locators, or [`RsError::Uncorrectable`] when
    /// the error pattern exceeds the code's capability. Errors-only
    /// decoding: no erasure information is used.
    fn decode_codeword(&self, codeword: &mut [u8; CODEWORD_LEN]) -> Result<Corrections, RsError> {
        // Syndromes S_i = r(alpha^i), first consecutive root at alpha^0.
        let mut syndromes = [0u8; PARITY_LEN];
        let mut has_errors = false;
        for (i, syndrome) in syndromes.iter_mut().enumerate() {
            let root = self.alpha_to[i];
            let mut acc = 0u8;
            for &byte in codeword.iter() {
                acc = self.mul(acc, root) ^ byte;
            }

            *syndrome = acc;
            has_errors |= acc != 0;
        }

        if !has_errors {
            return Ok(Corrections::default());
        }

        // Berlekamp-Massey: error locator polynomial lambda.
        let mut lambda = [0u8; PARITY_LEN + 1];
        let mut prev = [0u8; PARITY_LEN + 1];
        lambda[0] = 1;
        prev[0] = 1;

        let mut errors = 0usize;
        let mut gap = 1usize;
        let mut last_discrepancy = 1u8;

        for n in 0..PARITY_LEN {
            let mut discrepancy = 0u8;
            for i in 0..=errors.min(n) {
                discrepancy ^= self.mul(lambda[i], syndromes[n - i]);
            }

            if discrepancy == 0 {
                gap += 1;
            } else if 2 * errors <= n {
                let snapshot = lambda;
                let coefficient = self.div(discrepancy, last_discrepancy);
                for i in gap..=PARITY_LEN {
                    lambda[i] ^= self.mul(coefficient, prev[i - gap]);
                }

                errors = n + 1 - errors;
                prev = snapshot;
                last_discrepancy = discrepancy;
                gap = 1;
            } else {
                let coefficient = self.div(discrepancy, last_discrepancy);
                for i in gap..=PARITY_LEN {
                    lambda[i] ^= self.mul(coefficient, prev[i - gap]);
                }

                gap += 1;
            }
        }

        if errors > MAX_ERRORS {
            return Err(RsError::Uncorrectable);
        }

        // Chien search for the error degrees: lambda(alpha^-degree) == 0.
        let mut degrees = [0usize; MAX_ERRORS];
        let mut roots = 0usize;
        for degree in 0..NN {
            let x_inv = self.alpha_to[(NN - degree) % NN];
            if self.eval(&lambda[..=errors], x_inv) != 0 {
                continue;
            }

            if roots == MAX_ERRORS {
                return Err(RsError::Uncorrectable);
            }

            degrees[roots] = degree;
            roots += 1;
        }

        if roots != errors {
            return Err(RsError::Uncorrectable);
        }

        // Error evaluator omega = S(x) * lambda(x) mod x^errors; the key
        // equation keeps its degree below the error count.
        let mut omega = [0u8; MAX_ERRORS];
        for (i, coefficient) in omega.iter_mut().take(errors).enumerate() {
            let mut acc = 0u8;
            for j in 0..=i.min(errors) {
                acc ^= self.mul(lambda[j], syndromes[i - j]);
            }

            *coefficient = acc;
        }

        // Forney: magnitude at X = alpha^degree is
        // X * omega(X^-1) / lambda'(X^-1).
        let mut corrections = Corrections::default();
        for &degree in &degrees[..roots] {
            let x_inv = self.alpha_to[(NN - degree) % NN];

            let mut denominator = 0u8;
            for i in (1..=errors).step_by(2) {
                let mut term = lambda[i];
                for _ in 0..i - 1 {
                    term = self.mul(term, x_inv);
                }
                denominator ^= term;
            }

            if denominator == 0 {
                return Err(RsError::Uncorrectable);
            }

            let numerator = self.mul(self.alpha_to[degree % NN], self.eval(&omega[..errors], x_inv));
            let magnitude = self.div(numerator, denominator);

            if degree < CODEWORD_LEN {
                codeword[CODEWORD_LEN - 1 - degree] ^= magnitude;
            }

            corrections.locators[corrections.count] = (NN - 1 - degree) as u8;
            corrections.count += 1;
        }

        Ok(corrections)
    }
}
