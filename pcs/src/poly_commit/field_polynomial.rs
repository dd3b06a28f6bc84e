use opal_algebra::prelude::*;
use serde::{Deserialize, Serialize};

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order coefficient first.
    pub(crate) coefs: Vec<F>,
}

impl<F> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the constant zero polynomial.
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial.
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient
    /// first. High-order zero coefficients are trimmed.
    /// # Example
    /// ```
    /// use opal_pcs::poly_commit::field_polynomial::FpPolynomial;
    /// use opal_algebra::bn254::BN254Scalar;
    /// use opal_algebra::{One, Zero};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero]);
    /// assert_eq!(poly.degree(), 2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build the monic polynomial whose roots are exactly `zeroes`.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        Self::from_coefs(vanishing_poly(zeroes))
    }

    /// Return a polynomial with `degree + 1` uniformly random coefficients.
    /// With probability 1/q a coefficient is zero, so the degree can come
    /// out lower than `degree`.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let mut coefs = Vec::with_capacity(degree + 1);
        for _ in 0..degree + 1 {
            coefs.push(F::random(prng));
        }
        Self::from_coefs(coefs)
    }

    /// Remove high-degree zero coefficients.
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().unwrap().is_zero() {
            // safe unwrap
            self.coefs.pop().unwrap();
        }
    }

    /// Return the degree of the polynomial.
    pub fn degree(&self) -> usize {
        if self.coefs.is_empty() {
            0
        } else {
            self.coefs.len() - 1
        }
    }

    /// Test if the polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate the polynomial at a point.
    /// # Example
    /// ```
    /// use opal_pcs::poly_commit::field_polynomial::FpPolynomial;
    /// use opal_algebra::bn254::BN254Scalar;
    /// use opal_algebra::ops::*;
    /// use opal_algebra::{One, Zero};
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// // 1 + X + X^2
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let seven = two.mul(&two).add(&two).add(&one);
    /// assert_eq!(poly.eval(&two), seven);
    /// ```
    pub fn eval(&self, point: &F) -> F {
        eval_at(&self.coefs, point)
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtract another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            for other_coef in other.coefs[n..].iter() {
                self.coefs.push(other_coef.neg());
            }
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Multiply the polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply the polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Divide the polynomial, producing a quotient and a remainder.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return (Self::zero(), self.clone());
        }
        let divisor_coefs = &divisor.coefs[..];
        let bl_inv = divisor_coefs.last().unwrap().inv().unwrap(); // nonzero by trimming
        let mut rem = self.coefs.clone();
        let mut quo: Vec<F> = (0..k - l + 1).map(|_| F::zero()).collect();
        for i in (0..(k - l + 1)).rev() {
            let mut qi = bl_inv;
            qi.mul_assign(&rem[i + l - 1]);
            for j in 0..l {
                let mut a = qi;
                a.mul_assign(&divisor_coefs[j]);
                rem[i + j].sub_assign(&a);
            }
            quo[i] = qi;
        }
        for _ in 0..k - l + 1 {
            rem.pop();
        }
        if rem.is_empty() {
            rem.push(F::zero());
        }
        (FpPolynomial::from_coefs(quo), FpPolynomial::from_coefs(rem))
    }
}

/// Evaluate `f` at `x` with a high-to-low Horner pass.
pub(crate) fn eval_at<F: Scalar>(f: &[F], x: &F) -> F {
    let mut y = F::zero();
    for coef in f.iter().rev() {
        y.mul_assign(x);
        y.add_assign(coef);
    }
    y
}

/// Multiply every coefficient of `f` by `k`, in place.
pub(crate) fn scale_in_place<F: Scalar>(f: &mut [F], k: &F) {
    for coef in f.iter_mut() {
        coef.mul_assign(k);
    }
}

/// Set every coefficient of `f` to zero.
pub(crate) fn set_zero<F: Scalar>(f: &mut [F]) {
    for coef in f.iter_mut() {
        *coef = F::zero();
    }
}

/// Compute `(X - a)·f`, reusing and growing `f`'s buffer.
/// The result is one entry longer than the input.
pub(crate) fn mul_linear_factor<F: Scalar>(mut f: Vec<F>, a: &F) -> Vec<F> {
    let s = f.len();
    f.push(f[s - 1]);
    for i in (1..s).rev() {
        let tmp = f[i].mul(a);
        f[i] = f[i - 1].sub(&tmp);
    }
    f[0] = f[0].mul(a).neg();
    f
}

/// Build `∏ᵢ(X - xᵢ)` by iterated linear-factor multiplication. The output
/// is monic of length `|points| + 1`. Repeated points yield a repeated root;
/// callers needing distinctness must check it themselves.
pub(crate) fn vanishing_poly<F: Scalar>(points: &[F]) -> Vec<F> {
    let mut res = Vec::with_capacity(points.len() + 1);
    res.push(F::one());
    for point in points {
        res = mul_linear_factor(res, point);
    }
    res
}

/// Schoolbook product of `f` and `g`, written into `buf` (resized if too
/// small, then zeroed). `buf` must alias neither input. Intended for
/// `|g| ≪ |f|`, where an FFT would not pay off.
pub(crate) fn mul_into<F: Scalar>(f: &[F], g: &[F], buf: &mut Vec<F>) {
    let size_res = f.len() + g.len() - 1;
    if buf.len() < size_res {
        buf.resize(size_res, F::zero());
    }
    set_zero(buf);

    for (i, gi) in g.iter().enumerate() {
        for (j, fj) in f.iter().enumerate() {
            let tmp = fj.mul(gi);
            buf[i + j].add_assign(&tmp);
        }
    }
}

/// Exact division `f / g` for a monic `g` dividing `f`, by in-place
/// synthetic division on `f`'s buffer; the quotient is the returned tail.
/// If the preconditions do not hold the output is garbage, not an error:
/// this is an internal primitive only invoked where divisibility is
/// guaranteed.
pub(crate) fn div_exact<F: Scalar>(mut f: Vec<F>, g: &[F]) -> Vec<F> {
    let size_f = f.len();
    let size_g = g.len();
    for i in (size_g - 1..size_f - 1).rev() {
        for j in 0..size_g - 1 {
            let t = f[i + 1].mul(&g[size_g - 2 - j]);
            f[i - j] = f[i - j].sub(&t);
        }
    }
    f.split_off(size_g - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_algebra::bn254::BN254Scalar;
    use rand_chacha::ChaChaRng;

    type F = BN254Scalar;

    #[test]
    fn eval_matches_power_sum() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let f: Vec<F> = (0..10).map(|_| F::random(&mut prng)).collect();
        let x = F::random(&mut prng);

        let mut expected = F::zero();
        let mut power = F::one();
        for coef in f.iter() {
            expected.add_assign(&power.mul(coef));
            power.mul_assign(&x);
        }
        assert_eq!(eval_at(&f, &x), expected);

        assert_eq!(eval_at(&[], &x), F::zero());
    }

    #[test]
    fn linear_factor_has_the_root() {
        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let f: Vec<F> = (0..7).map(|_| F::random(&mut prng)).collect();
        let a = F::random(&mut prng);

        let g = mul_linear_factor(f.clone(), &a);
        assert_eq!(g.len(), f.len() + 1);
        assert_eq!(g[g.len() - 1], f[f.len() - 1]);
        assert_eq!(eval_at(&g, &a), F::zero());

        // g equals (X - a)·f at a random point
        let x = F::random(&mut prng);
        let expected = x.sub(&a).mul(&eval_at(&f, &x));
        assert_eq!(eval_at(&g, &x), expected);
    }

    #[test]
    fn vanishing_poly_is_monic_and_vanishes() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);
        let points: Vec<F> = (0..6).map(|_| F::random(&mut prng)).collect();

        let z = vanishing_poly(&points);
        assert_eq!(z.len(), points.len() + 1);
        assert_eq!(z[z.len() - 1], F::one());
        for point in points.iter() {
            assert_eq!(eval_at(&z, point), F::zero());
        }
    }

    #[test]
    fn mul_then_div_round_trips() {
        let mut prng = ChaChaRng::from_seed([3u8; 32]);
        let f: Vec<F> = (0..16).map(|_| F::random(&mut prng)).collect();
        let points: Vec<F> = (0..4).map(|_| F::random(&mut prng)).collect();
        let g = vanishing_poly(&points);

        let mut product = vec![];
        mul_into(&f, &g, &mut product);
        assert_eq!(product.len(), f.len() + g.len() - 1);

        let quotient = div_exact(product, &g);
        assert_eq!(quotient, f);
    }

    #[test]
    fn scale_in_place_scales() {
        let mut prng = ChaChaRng::from_seed([4u8; 32]);
        let mut f: Vec<F> = (0..5).map(|_| F::random(&mut prng)).collect();
        let original = f.clone();
        let k = F::random(&mut prng);
        let x = F::random(&mut prng);

        scale_in_place(&mut f, &k);
        assert_eq!(eval_at(&f, &x), k.mul(&eval_at(&original, &x)));
    }

    #[test]
    fn from_zeroes() {
        let n = 10;
        let mut zeroes = vec![];
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        for _ in 0..n {
            zeroes.push(F::random(&mut prng));
        }
        let poly = FpPolynomial::from_zeroes(&zeroes[..]);
        assert_eq!(poly.degree(), n);
        for root in zeroes.iter() {
            assert_eq!(F::zero(), poly.eval(root));
        }
    }

    #[test]
    fn div_rem() {
        let mut prng = ChaChaRng::from_seed([5u8; 32]);
        let poly = FpPolynomial::<F>::random(&mut prng, 12);
        let divisor = FpPolynomial::<F>::random(&mut prng, 3);

        let (q, r) = poly.div_rem(&divisor);
        assert!(r.degree() < divisor.degree());

        // q·divisor + r == poly, checked at a random point
        let x = F::random(&mut prng);
        let recomposed = q.eval(&x).mul(&divisor.eval(&x)).add(&r.eval(&x));
        assert_eq!(recomposed, poly.eval(&x));
    }

    #[test]
    fn add_sub() {
        let mut prng = ChaChaRng::from_seed([6u8; 32]);
        let p1 = FpPolynomial::<F>::random(&mut prng, 4);
        let p2 = FpPolynomial::<F>::random(&mut prng, 9);

        let sum = p1.add(&p2);
        let diff = sum.sub(&p2);
        assert_eq!(diff, p1);

        let zero = p1.sub(&p1);
        assert!(zero.is_zero());
    }
}
