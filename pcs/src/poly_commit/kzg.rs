use crate::errors::{PcsError, Result};
use crate::poly_commit::field_polynomial::FpPolynomial;
use opal_algebra::prelude::*;
use opal_algebra::traits::Pairing;
use serde::{Deserialize, Serialize};

/// KZG commitment: a G1 point committing to a polynomial under a structured
/// reference string.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> KZGCommitment<G> {
    /// Return the canonical bytes of the commitment.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

/// KZG commitment scheme over a pairing engine.
///
/// The full scheme, with the whole G1 power series, acts as the proving
/// key; [`Self::shrink_to_verifier_only`] keeps just the three elements a
/// verifier needs.
#[derive(Debug)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// Powers of the secret scalar in G1: `g1, s·g1, s²·g1, …`.
    pub public_parameter_group_1: Vec<P::G1>,
    /// The pair `g2, s·g2`.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Sample a structured reference string supporting polynomials up to
    /// `max_degree`. The secret scalar is dropped on return; real
    /// deployments load the parameters of a trusted setup instead.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::new();
        let mut elem_g1 = P::G1::get_base();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let elem_g2 = P::G2::get_base();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(&s)];

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Return the maximal supported degree.
    pub fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len() - 1
    }

    /// Commit to the polynomial.
    pub fn commit(&self, polynomial: &FpPolynomial<P::ScalarField>) -> Result<KZGCommitment<P::G1>> {
        let coefs = polynomial.get_coefs_ref();
        let degree = polynomial.degree();

        if degree + 1 > self.public_parameter_group_1.len() {
            return Err(PcsError::Degree);
        }

        let coefs_ref: Vec<&P::ScalarField> = coefs.iter().collect();
        let params_ref: Vec<&P::G1> = self.public_parameter_group_1[0..degree + 1].iter().collect();

        let commitment_value = P::G1::multi_exp(&coefs_ref[..], &params_ref[..]);

        Ok(KZGCommitment(commitment_value))
    }

    /// Prove the evaluation of the polynomial at `point` by committing to
    /// the quotient `(f(X) - f(point)) / (X - point)`.
    pub fn prove(
        &self,
        polynomial: &FpPolynomial<P::ScalarField>,
        point: &P::ScalarField,
        max_degree: usize,
    ) -> Result<KZGCommitment<P::G1>> {
        if polynomial.degree() > max_degree {
            return Err(PcsError::Degree);
        }

        let eval = polynomial.eval(point);

        // f(X) - f(point)
        let nominator = polynomial.sub(&FpPolynomial::from_coefs(vec![eval]));

        // X - point
        let vanishing_poly =
            FpPolynomial::from_coefs(vec![point.neg(), P::ScalarField::one()]);
        let (q_poly, r_poly) = nominator.div_rem(&vanishing_poly);

        if !r_poly.is_zero() {
            return Err(PcsError::PCSProveEval);
        }

        self.commit(&q_poly)
    }

    /// Verify an evaluation proof against a commitment:
    /// `e(C - value·g1, g2) == e(proof, s·g2 - point·g2)`.
    pub fn verify(
        &self,
        commitment: &KZGCommitment<P::G1>,
        point: &P::ScalarField,
        value: &P::ScalarField,
        proof: &KZGCommitment<P::G1>,
    ) -> Result<()> {
        let g1_0 = self.public_parameter_group_1[0];
        let g2_0 = self.public_parameter_group_2[0];
        let g2_1 = self.public_parameter_group_2[1];

        let x_minus_point_group_2 = g2_1.sub(&g2_0.mul(point));

        let left_pairing_eval = if value.is_zero() {
            P::pairing(&commitment.0, &g2_0)
        } else {
            P::pairing(&commitment.0.sub(&g1_0.mul(value)), &g2_0)
        };
        let right_pairing_eval = P::pairing(&proof.0, &x_minus_point_group_2);

        if left_pairing_eval == right_pairing_eval {
            Ok(())
        } else {
            Err(PcsError::PCSProveEval)
        }
    }

    /// Keep only the parameters a verifier needs: the G1 generator and the
    /// two G2 elements.
    pub fn shrink_to_verifier_only(&self) -> Self {
        Self {
            public_parameter_group_1: vec![self.public_parameter_group_1[0]],
            public_parameter_group_2: vec![
                self.public_parameter_group_2[0],
                self.public_parameter_group_2[1],
            ],
        }
    }
}
