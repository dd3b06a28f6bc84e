//! Ring-SIS: a lattice-based algebraic hash in `Z_p[X]/(X^d+1)`. The digest
//! of a message `m`, decomposed into polynomials `mᵢ` with small
//! coefficients, is `∑ᵢ Aᵢ·mᵢ mod (X^d+1)` for a public random matrix `A`.
use crate::errors::{PcsError, Result};
use crate::fft::Domain;
use num_bigint::BigUint;
use opal_algebra::prelude::*;
use sha2::{Digest, Sha512};

/// A Ring-SIS hasher instance.
///
/// The matrix `A` and its precomputed coset evaluations are immutable after
/// construction and can be shared across threads; the byte buffer is
/// per-session state, so one instance must not be hashed into concurrently.
#[derive(Debug)]
pub struct RSis<F> {
    /// Buffer storing the data to hash.
    buffer: Vec<u8>,

    /// The public polynomials of the instance; `a[i]` is the i-th one.
    pub a: Vec<Vec<F>>,

    /// The evaluation form of the polynomials of `a` on the coset
    /// `√g·⟨g⟩`, whose points are the roots of `X^d+1`.
    pub a_fft_coset: Vec<Vec<F>>,

    /// Infinity-norm bound of the vectors to hash: each coefficient of the
    /// decomposed input is below `2^log_two_bound`.
    pub log_two_bound: usize,

    /// Maximal number of bytes one hash consumes.
    pub nb_bytes_to_sum: usize,

    /// Domain for the polynomial multiplication, carrying the coset shift.
    domain: Domain<F>,

    /// The degree `d` of `X^d+1`.
    pub degree: usize,
}

/// Deterministically sample one matrix entry from the instance seed.
fn gen_random<F: Scalar>(seed: u64, i: u64, j: u64) -> F {
    let mut hasher = Sha512::new();
    hasher.update(b"SIS");
    hasher.update(seed.to_be_bytes());
    hasher.update(i.to_be_bytes());
    hasher.update(j.to_be_bytes());
    F::from_hash(hasher)
}

/// Schoolbook product in `Z_p[X]/(X²+1)`.
fn mul_mod_2<F: Scalar>(p: &[F], q: &[F]) -> [F; 2] {
    let c0 = p[0].mul(&q[0]).sub(&p[1].mul(&q[1]));
    let c1 = p[0].mul(&q[1]).add(&p[1].mul(&q[0]));
    [c0, c1]
}

impl<F: Scalar> RSis<F> {
    /// Create an instance of the hasher.
    /// * `seed` seeds the sampling of the random matrix `A`.
    /// * `log_two_degree` fixes the ring `Z_p[X]/(X^d+1)` with
    ///   `d = 2^log_two_degree`; the ring needs `d ≥ 2`.
    /// * `log_two_bound` is the bit size of the coefficients the input is
    ///   decomposed into.
    /// * `key_size` is the number of polynomials in `A`.
    pub fn new(
        seed: u64,
        log_two_degree: usize,
        log_two_bound: usize,
        key_size: usize,
    ) -> Result<RSis<F>> {
        if log_two_degree == 0 {
            return Err(PcsError::NotAPowerOfTwo);
        }
        if log_two_bound == 0 || log_two_bound / 8 + 1 >= F::bytes_len() {
            return Err(PcsError::Parameter(
                "the coefficient bound must fit well inside a field element".to_string(),
            ));
        }
        if key_size == 0 {
            return Err(PcsError::Parameter(
                "the key must hold at least one polynomial".to_string(),
            ));
        }

        let degree = 1 << log_two_degree;

        // the coset shift is the 2d-th root of unity √g, which realizes
        // the reduction modulo X^d+1
        let domain = Domain::new_coset(degree)?;

        let mut a = Vec::with_capacity(key_size);
        let mut a_fft_coset = Vec::with_capacity(key_size);
        for i in 0..key_size {
            let mut poly = Vec::with_capacity(degree);
            for j in 0..degree {
                poly.push(gen_random::<F>(seed, i as u64, j as u64));
            }
            a_fft_coset.push(domain.coset_fft(&poly));
            a.push(poly);
        }

        let nb_bytes_to_sum = log_two_bound * degree * key_size / 8;

        Ok(RSis {
            buffer: Vec::new(),
            a,
            a_fft_coset,
            log_two_bound,
            nb_bytes_to_sum,
            domain,
            degree,
        })
    }

    /// Buffer `p` for hashing.
    pub fn write(&mut self, p: &[u8]) {
        self.buffer.extend_from_slice(p);
    }

    /// Reset the hasher to its initial state.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// Return the number of bytes [`Self::sum`] returns.
    pub fn size(&self) -> usize {
        self.degree * F::bytes_len()
    }

    /// The hasher accepts writes of any length.
    pub fn block_size(&self) -> usize {
        0
    }

    /// Hash the buffered bytes.
    ///
    /// The buffer is read as a stream of big-endian `log_two_bound`-bit
    /// coefficients (missing bits are zero), packed into `key_size·d`
    /// field elements; the digest is the canonical encoding of
    /// `∑ᵢ Aᵢ·mᵢ mod (X^d+1)`. The buffer state is left untouched.
    pub fn sum(&self) -> Vec<u8> {
        let nb_bits_written = self.buffer.len() * 8;
        let bit_at = |i: usize| -> u8 {
            let k = i / 8;
            if k >= self.buffer.len() {
                return 0;
            }
            (self.buffer[k] >> (7 - i % 8)) & 1
        };

        // decompose the buffer into coefficients of log_two_bound bits;
        // each coefficient is read big-endian from the stream and lands in
        // a little-endian field element
        let nb_bits_per_coeff = self.log_two_bound;
        let nb_full_bytes_per_coeff = (nb_bits_per_coeff - (nb_bits_per_coeff % 8)) / 8;
        let first_byte_size = nb_bits_per_coeff % 8;
        let size_m = self.degree * self.a.len();

        let mut m = vec![F::zero(); size_m];
        let mut not_zero = vec![false; self.a.len()];

        let mut coeff_bytes = vec![0u8; nb_full_bytes_per_coeff + 1];
        for i in 0..size_m {
            let start = i * nb_bits_per_coeff;
            if start >= nb_bits_written {
                // the rest of m stays zero
                break;
            }

            for byte in coeff_bytes.iter_mut() {
                *byte = 0;
            }
            for j in 0..first_byte_size {
                coeff_bytes[0] |= bit_at(start + j) << (first_byte_size - 1 - j);
            }
            for j in 0..nb_full_bytes_per_coeff {
                for k in 0..8 {
                    coeff_bytes[j + 1] |= bit_at(start + first_byte_size + 8 * j + k) << (7 - k);
                }
            }

            if coeff_bytes.iter().all(|byte| *byte == 0) {
                continue;
            }
            not_zero[i / self.degree] = true;
            m[i] = F::from(&BigUint::from_bytes_le(&coeff_bytes));
        }

        let res = if self.degree > 3 {
            // evaluate each non-zero chunk on the coset, accumulate the
            // pointwise products, interpolate back: the coset points are
            // the roots of X^d+1, so this is the reduced product
            let mut acc = vec![F::zero(); self.degree];
            for (i, a_fft) in self.a_fft_coset.iter().enumerate() {
                if !not_zero[i] {
                    // m[i*degree..(i+1)*degree] is all zeroes
                    continue;
                }
                let chunk = self
                    .domain
                    .coset_fft(&m[i * self.degree..(i + 1) * self.degree]);
                for j in 0..self.degree {
                    acc[j].add_assign(&chunk[j].mul(&a_fft[j]));
                }
            }
            self.domain.coset_ifft(&acc)
        } else {
            // degree 2: schoolbook product with X² = -1
            let mut acc = vec![F::zero(); self.degree];
            for (i, a) in self.a.iter().enumerate() {
                let t = mul_mod_2(&m[i * self.degree..(i + 1) * self.degree], a);
                acc[0].add_assign(&t[0]);
                acc[1].add_assign(&t[1]);
            }
            acc
        };

        let mut out = Vec::with_capacity(self.size());
        for value in res.iter() {
            out.extend_from_slice(&value.to_bytes());
        }
        out
    }
}
