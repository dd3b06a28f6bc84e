use crate::errors::{PcsError, Result};
use num_bigint::BigUint;
use opal_algebra::prelude::*;

/// A radix-2 evaluation domain: the subgroup of the field generated by a
/// primitive `size`-th root of unity, optionally shifted onto the coset
/// `√g·⟨g⟩` (the points of which are exactly the roots of `X^size + 1`).
#[derive(Clone, Debug)]
pub struct Domain<F> {
    size: usize,
    generator: F,
    generator_inv: F,
    size_inv: F,
    shift: F,
    shift_inv: F,
}

impl<F: Scalar> Domain<F> {
    /// Build the evaluation domain of the given power-of-two size.
    pub fn new(size: usize) -> Result<Domain<F>> {
        Self::build(size, false)
    }

    /// Build the evaluation domain of the given power-of-two size, shifted
    /// by a primitive `2·size`-th root of unity.
    pub fn new_coset(size: usize) -> Result<Domain<F>> {
        Self::build(size, true)
    }

    fn build(size: usize, coset: bool) -> Result<Domain<F>> {
        if size == 0 || !size.is_power_of_two() {
            return Err(PcsError::NotAPowerOfTwo);
        }
        let generator =
            primitive_nth_root_of_unity::<F>(size).ok_or(PcsError::RootOfUnityNotFound)?;
        let generator_inv = generator.inv()?;
        let size_inv = F::from(size as u64).inv()?;
        let (shift, shift_inv) = if coset {
            let shift =
                primitive_nth_root_of_unity::<F>(2 * size).ok_or(PcsError::RootOfUnityNotFound)?;
            (shift, shift.inv()?)
        } else {
            (F::one(), F::one())
        };
        Ok(Domain {
            size,
            generator,
            generator_inv,
            size_inv,
            shift,
            shift_inv,
        })
    }

    /// Return the cardinality of the domain.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the generator of the domain subgroup.
    pub fn generator(&self) -> F {
        self.generator
    }

    /// Return the inverse of the generator.
    pub fn generator_inv(&self) -> F {
        self.generator_inv
    }

    /// Evaluate the polynomial on the domain. The result is in canonical
    /// order: `[f(g⁰), f(g¹), …, f(gⁿ⁻¹)]`. Coefficients beyond the domain
    /// size are ignored; shorter inputs are zero-padded.
    pub fn fft(&self, coefs: &[F]) -> Vec<F> {
        let mut padded = coefs[..coefs.len().min(self.size)].to_vec();
        padded.resize(self.size, F::zero());
        recursive_fft(&padded, &self.generator)
    }

    /// Interpolate the polynomial from its evaluations on the domain.
    pub fn ifft(&self, evals: &[F]) -> Vec<F> {
        let mut coefs = recursive_fft(evals, &self.generator_inv);
        for coef in coefs.iter_mut() {
            coef.mul_assign(&self.size_inv);
        }
        coefs
    }

    /// Evaluate the polynomial on the coset `shift·⟨g⟩`, by evaluating
    /// `f(shift·X)` on the subgroup.
    pub fn coset_fft(&self, coefs: &[F]) -> Vec<F> {
        let mut scaled = coefs[..coefs.len().min(self.size)].to_vec();
        scaled.resize(self.size, F::zero());
        mul_var(&mut scaled, &self.shift);
        recursive_fft(&scaled, &self.generator)
    }

    /// Interpolate the polynomial from its evaluations on the coset.
    pub fn coset_ifft(&self, evals: &[F]) -> Vec<F> {
        let mut coefs = self.ifft(evals);
        mul_var(&mut coefs, &self.shift_inv);
        coefs
    }
}

/// Substitute `X -> k·X`, i.e. multiply the i-th coefficient by `kⁱ`.
fn mul_var<F: Scalar>(coefs: &mut [F], k: &F) {
    let mut power = F::one();
    for coef in coefs.iter_mut() {
        coef.mul_assign(&power);
        power.mul_assign(k);
    }
}

/// Given the coefficients of a polynomial and a primitive n-th root of unity
/// of the field, compute its DFT. n must be a power of two.
fn recursive_fft<F: Scalar>(coefs: &[F], root: &F) -> Vec<F> {
    let n = coefs.len();
    if n == 1 {
        return vec![coefs[0]];
    }
    let root_sq = root.square();
    let even: Vec<F> = coefs.iter().step_by(2).copied().collect();
    let odd: Vec<F> = coefs.iter().skip(1).step_by(2).copied().collect();

    let y_even = recursive_fft(&even, &root_sq);
    let y_odd = recursive_fft(&odd, &root_sq);

    let mut omega = F::one();
    let mut dft = vec![F::zero(); n];
    for (i, (e, o)) in y_even.iter().zip(y_odd.iter()).enumerate() {
        let omega_o = omega.mul(o);
        dft[i] = e.add(&omega_o);
        dft[n / 2 + i] = e.sub(&omega_o);
        omega.mul_assign(root);
    }
    dft
}

/// Return a primitive `num_points`-th root of unity, if the multiplicative
/// group order is divisible by `num_points`.
pub fn primitive_nth_root_of_unity<F: Scalar>(num_points: usize) -> Option<F> {
    let q_minus_one = F::get_field_size_biguint() - BigUint::from(1u64);
    let n = BigUint::from(num_points as u64);
    if &q_minus_one % &n != BigUint::from(0u64) {
        return None;
    }
    let exp = q_minus_one / n;
    let g = F::multiplicative_generator();
    Some(g.pow(&exp.to_u64_digits()))
}
