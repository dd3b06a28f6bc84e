//! Batched opening of several committed polynomials at distinct points,
//! after the scheme of Boneh, Drake, Fisch, Gabizon and Williamson
//! (<https://eprint.iacr.org/2020/081.pdf>).
use crate::errors::{PcsError, Result};
use crate::poly_commit::field_polynomial::{
    div_exact, eval_at, mul_into, scale_in_place, set_zero, vanishing_poly, FpPolynomial,
};
use crate::poly_commit::kzg::{KZGCommitment, KZGCommitmentScheme};
use crate::poly_commit::transcript::LabeledTranscript;
use opal_algebra::prelude::*;
use opal_algebra::traits::Pairing;
use serde::{Deserialize, Serialize};

/// Opening proof for a batch of polynomials `(fᵢ)` at distinct points
/// `(xᵢ)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningProof<G, F> {
    /// Commitment to `W = ∑ᵢ γⁱ·Z_{T∖xᵢ}·(fᵢ(X) - fᵢ(xᵢ)) / Z_T`, where
    /// `Z_T` is the vanishing polynomial on the `(xᵢ)`.
    pub w: KZGCommitment<G>,

    /// Commitment to `L(X)/(X-z)` where
    /// `L(X) = ∑ᵢ γⁱ·Z_{T∖xᵢ}(z)·(fᵢ(X) - rᵢ) - Z_T(z)·W(X)`.
    pub w_prime: KZGCommitment<G>,

    /// The claimed evaluations `(fᵢ(xᵢ))`.
    pub claimed_values: Vec<F>,
}

fn transcript() -> LabeledTranscript {
    LabeledTranscript::new(vec![b"gamma".to_vec(), b"z".to_vec()])
}

/// Derive a challenge bound, in this order, to the points, the digests and
/// the extra data blobs.
fn derive_challenge<G: Group>(
    name: &[u8],
    points: &[G::ScalarType],
    digests: &[KZGCommitment<G>],
    transcript: &mut LabeledTranscript,
    data_transcript: &[&[u8]],
) -> Result<G::ScalarType> {
    for point in points {
        transcript.bind(name, &point.to_bytes())?;
    }
    for digest in digests {
        transcript.bind(name, &digest.to_bytes())?;
    }
    for data in data_transcript {
        transcript.bind(name, data)?;
    }
    transcript.challenge_scalar(name)
}

/// Open `polynomials` at `points`: the i-th polynomial is opened at the
/// i-th point. `digests` are the KZG commitments of the polynomials, and
/// `data_transcript` is extra data a caller may bind into the challenge
/// derivation.
pub fn batch_open<P: Pairing>(
    polynomials: &[FpPolynomial<P::ScalarField>],
    digests: &[KZGCommitment<P::G1>],
    points: &[P::ScalarField],
    pk: &KZGCommitmentScheme<P>,
    data_transcript: &[&[u8]],
) -> Result<OpeningProof<P::G1, P::ScalarField>> {
    let nb_instances = polynomials.len();
    if polynomials.len() != points.len() {
        return Err(PcsError::InvalidNumberOfPoints);
    }

    let mut fs = transcript();

    // derive γ
    let gamma = derive_challenge(b"gamma", points, digests, &mut fs, data_transcript)?;

    // `max_size + nb_instances - 1` bounds the degree-plus-one of the
    // polynomials Z_{T∖xᵢ}·fᵢ
    let max_size_polys = polynomials
        .iter()
        .map(|p| p.get_coefs_ref().len())
        .max()
        .ok_or(PcsError::InvalidNumberOfPoints)?;
    let total_size = max_size_polys + nb_instances - 1;

    let mut buf_total_size = vec![P::ScalarField::zero(); total_size];
    let mut buf_max_size_polynomials = vec![P::ScalarField::zero(); max_size_polys];
    let mut f = vec![P::ScalarField::zero(); total_size];
    let mut buf_points = Vec::with_capacity(nb_instances - 1);
    let mut zt_minus_xi: Vec<Vec<P::ScalarField>> = Vec::with_capacity(nb_instances);
    let mut claimed_values = Vec::with_capacity(nb_instances);
    let mut acc_gamma = P::ScalarField::one();

    for i in 0..nb_instances {
        claimed_values.push(eval_at(polynomials[i].get_coefs_ref(), &points[i]));

        buf_points.clear();
        buf_points.extend_from_slice(&points[..i]);
        buf_points.extend_from_slice(&points[i + 1..]);
        zt_minus_xi.push(vanishing_poly(&buf_points));

        let coefs = polynomials[i].get_coefs_ref();
        buf_max_size_polynomials[..coefs.len()].copy_from_slice(coefs);
        buf_max_size_polynomials[0].sub_assign(&claimed_values[i]);

        mul_into(&buf_max_size_polynomials, &zt_minus_xi[i], &mut buf_total_size);
        scale_in_place(&mut buf_total_size, &acc_gamma);
        for j in 0..total_size {
            f[j].add_assign(&buf_total_size[j]);
        }

        acc_gamma.mul_assign(&gamma);
        set_zero(&mut buf_max_size_polynomials);
    }

    // W = f̂ / Z_T; the division is exact since every summand of f̂ vanishes
    // on the whole of T
    let zt = vanishing_poly(points);
    let w = div_exact(f, &zt);
    let w_commitment = pk.commit(&FpPolynomial::from_coefs(w.clone()))?;

    // derive z, bound to W only
    let z = derive_challenge(b"z", &[], &[w_commitment.clone()], &mut fs, &[])?;

    // L = ∑ᵢ γⁱ·Z_{T∖xᵢ}(z)·(fᵢ - rᵢ) - Z_T(z)·W
    let mut l = vec![P::ScalarField::zero(); total_size];
    acc_gamma = P::ScalarField::one();
    for i in 0..nb_instances {
        let zi = eval_at(&zt_minus_xi[i], &z);
        let gamma_i_zt_minus_xi = acc_gamma.mul(&zi);

        let coefs = polynomials[i].get_coefs_ref();
        buf_max_size_polynomials[..coefs.len()].copy_from_slice(coefs);
        buf_max_size_polynomials[0].sub_assign(&claimed_values[i]);
        scale_in_place(&mut buf_max_size_polynomials, &gamma_i_zt_minus_xi);
        for j in 0..max_size_polys {
            l[j].add_assign(&buf_max_size_polynomials[j]);
        }

        set_zero(&mut buf_max_size_polynomials);
        acc_gamma.mul_assign(&gamma);
    }
    let ztz = eval_at(&zt, &z);
    set_zero(&mut buf_total_size);
    buf_total_size[..w.len()].copy_from_slice(&w);
    scale_in_place(&mut buf_total_size, &ztz);
    for j in 0..total_size {
        l[j].sub_assign(&buf_total_size[j]);
    }

    // L vanishes at z by construction
    let x_minus_z = vanishing_poly(&[z]);
    let w_prime = div_exact(l, &x_minus_z);
    let w_prime_commitment = pk.commit(&FpPolynomial::from_coefs(w_prime))?;

    Ok(OpeningProof {
        w: w_commitment,
        w_prime: w_prime_commitment,
        claimed_values,
    })
}

/// Check that the commitments open to `proof.claimed_values` at `points`.
/// The order matters: the proof validates that the i-th commitment opens at
/// the i-th point. `data_transcript` must repeat the extra data the prover
/// bound.
pub fn batch_verify<P: Pairing>(
    proof: &OpeningProof<P::G1, P::ScalarField>,
    digests: &[KZGCommitment<P::G1>],
    points: &[P::ScalarField],
    vk: &KZGCommitmentScheme<P>,
    data_transcript: &[&[u8]],
) -> Result<()> {
    if digests.len() != proof.claimed_values.len() {
        return Err(PcsError::InvalidNumberOfPoints);
    }
    if digests.len() != points.len() || points.is_empty() {
        return Err(PcsError::InvalidNumberOfPoints);
    }

    let mut fs = transcript();

    // re-derive γ and z exactly as the prover did; z depends on W only
    let gamma = derive_challenge(b"gamma", points, digests, &mut fs, data_transcript)?;
    let z: P::ScalarField = derive_challenge(b"z", &[], &[proof.w.clone()], &mut fs, &[])?;

    // the scalars γⁱ·Z_{T∖xᵢ}(z), and ∑ᵢ γⁱ·Z_{T∖xᵢ}(z)·rᵢ
    let nb_instances = points.len();
    let mut gamma_i_zt_minus_xi_z = Vec::with_capacity(nb_instances);
    let mut sum_gamma_i_zt_minus_xi_ri = P::ScalarField::zero();
    let mut acc_gamma = P::ScalarField::one();
    let mut buf_points = Vec::with_capacity(nb_instances - 1);
    for i in 0..nb_instances {
        buf_points.clear();
        buf_points.extend_from_slice(&points[..i]);
        buf_points.extend_from_slice(&points[i + 1..]);

        let zt_minus_xi = vanishing_poly(&buf_points);
        let zi = acc_gamma.mul(&eval_at(&zt_minus_xi, &z));
        gamma_i_zt_minus_xi_z.push(zi);

        sum_gamma_i_zt_minus_xi_ri.add_assign(&zi.mul(&proof.claimed_values[i]));

        acc_gamma.mul_assign(&gamma);
    }

    // F = ∑ᵢ γⁱ·Z_{T∖xᵢ}(z)·[Comᵢ] - [∑ᵢ γⁱ·Z_{T∖xᵢ}(z)·rᵢ]·G₁ - Z_T(z)·[W]
    let scalars_ref: Vec<&P::ScalarField> = gamma_i_zt_minus_xi_z.iter().collect();
    let digests_ref: Vec<&P::G1> = digests.iter().map(|d| &d.0).collect();
    let sum_gamma_zi_com = P::G1::multi_exp(&scalars_ref[..], &digests_ref[..]);

    let g1 = vk.public_parameter_group_1[0];
    let zt = vanishing_poly(points);
    let ztz = eval_at(&zt, &z);

    let mut f = sum_gamma_zi_com.sub(&g1.mul(&sum_gamma_i_zt_minus_xi_ri));
    f.sub_assign(&proof.w.0.mul(&ztz));

    // e(-(F + z·W'), [1]₂) · e(W', [s]₂) == 1
    f.add_assign(&proof.w_prime.0.mul(&z));
    let f = f.neg();

    let check = P::product_of_pairings(
        &[f, proof.w_prime.0],
        &[vk.public_parameter_group_2[0], vk.public_parameter_group_2[1]],
    );

    if check != P::Gt::get_identity() {
        return Err(PcsError::VerifyOpeningProof);
    }

    Ok(())
}
