//! Radix-2 FRI: an interactive oracle proof of proximity, made
//! non-interactive with a Fiat-Shamir transcript, attesting that a
//! committed function is close to a low-degree polynomial. The compression
//! map is `x -> x²` on a power-of-two subgroup of the field.
use crate::errors::{PcsError, Result};
use crate::fft::Domain;
use crate::poly_commit::field_polynomial::FpPolynomial;
use crate::poly_commit::transcript::LabeledTranscript;
use digest::Digest;
use num_bigint::BigUint;
use opal_accumulators::merkle_tree::{verify_proof, MerkleTree};
use opal_algebra::prelude::*;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// The blow-up factor: ratio between the size of the evaluation domain and
/// the size of the polynomial.
pub const RHO: usize = 2;

/// Merkle data of one opened position. At each step two contiguous values
/// of the evaluation vector are opened. One carries the full Merkle path;
/// for its fiber neighbor the path would be identical past the first node,
/// so its proof set holds only the raw neighbor leaf and the hash of the
/// first leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialMerkleProof {
    /// Merkle root.
    merkle_root: Vec<u8>,

    /// `[leaf ∥ node_1 ∥ … ∥ node_k]`, the leaf unhashed.
    proof_set: Vec<Vec<u8>>,

    /// Number of leaves of the tree.
    num_leaves: u64,
}

/// Opening proof of a committed polynomial at `gⁱ`, where `i` is a
/// caller-chosen position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningProof<F> {
    merkle_root: Vec<u8>,
    proof_set: Vec<Vec<u8>>,
    num_leaves: u64,
    index: u64,

    /// Value of the opened leaf. This field is exported because protocols
    /// built on top of the commitment verify algebraic relations on it.
    pub claimed_value: F,
}

/// Data of a single round of interactions: one pair of Merkle proofs per
/// folding step, plus the fully folded evaluation vector of size ρ.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round<F> {
    interactions: Vec<[PartialMerkleProof; 2]>,
    evaluation: Vec<F>,
}

/// Proof of proximity, attesting that a function is close to a low-degree
/// polynomial. It carries one [`Round`] per repetition of the protocol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofOfProximity<F> {
    /// Identifier tag of the proof, for protocols that bind proofs of
    /// proximity into a larger Fiat-Shamir transcript.
    pub id: Vec<u8>,
    rounds: Vec<Round<F>>,
}

/// The radix-2 FRI engine for polynomials of the given size.
pub struct RadixTwoFri<F, D> {
    /// Number of folding steps, `log₂(next_pow2(size))`.
    nb_steps: usize,

    /// Number of repetitions of the proximity protocol, driving soundness.
    nb_rounds: usize,

    /// Evaluation domain of cardinality `ρ·next_pow2(size)`.
    domain: Domain<F>,

    _hash: PhantomData<D>,
}

/// Reorder canonical-order evaluations so that the two preimages of each
/// squared point are contiguous:
/// `[q(g⁰), q(g^{n/2}), q(g¹), q(g^{1+n/2}), …]`.
/// One Merkle path then authenticates a whole fiber.
fn sort_by_fibers<F: Scalar>(evaluations: &[F]) -> Vec<F> {
    let n = evaluations.len() / 2;
    let mut q = Vec::with_capacity(evaluations.len());
    for i in 0..n {
        q.push(evaluations[i]);
        q.push(evaluations[i + n]);
    }
    q
}

/// Convert an index of the canonical order to the fiber-sorted order.
fn convert_canonical_sorted(i: usize, n: usize) -> usize {
    if i < n / 2 {
        2 * i
    } else {
        let l = 2 * (n - (i + 1));
        n - l - 1
    }
}

/// Convert an index of the fiber-sorted order back to the canonical order.
fn convert_sorted_canonical(i: usize, n: usize) -> usize {
    if i % 2 == 0 {
        i / 2
    } else {
        let l = (n - 1 - i) / 2;
        n - 1 - l
    }
}

/// Fold a polynomial expressed in the fiber-sorted Lagrange basis.
///
/// Writing `P(X) = P₀(X²) + X·P₁(X²)`, each fiber pair solves to
/// `P₀(g²ⁱ) = (P(gⁱ) + P(-gⁱ))/2` and `P₁(g²ⁱ) = (P(gⁱ) - P(-gⁱ))·g⁻ⁱ/2`,
/// and the output is the Lagrange form of `P₀ + x·P₁` on the squared
/// subgroup, in canonical order.
fn fold_in_lagrange_basis<F: Scalar>(p_sorted: &[F], g_inv: &F, x: &F, two_inv: &F) -> Vec<F> {
    let s = p_sorted.len();
    let mut res = Vec::with_capacity(s / 2);
    let mut acc = F::one();

    for i in 0..s / 2 {
        let p1 = p_sorted[2 * i].add(&p_sorted[2 * i + 1]);
        let p2 = p_sorted[2 * i].sub(&p_sorted[2 * i + 1]).mul(&acc);
        res.push(p2.mul(x).add(&p1).mul(two_inv));
        acc.mul_assign(g_inv);
    }

    res
}

impl<F: Scalar, D: Digest> RadixTwoFri<F, D> {
    /// Create an engine able to handle polynomials of degree below `size`,
    /// with `nb_rounds` repetitions of the proximity protocol.
    pub fn new(size: u64, nb_rounds: usize) -> Result<RadixTwoFri<F, D>> {
        if size < 2 {
            return Err(PcsError::Parameter(
                "the polynomial size must be at least 2".to_string(),
            ));
        }
        if nb_rounds == 0 {
            return Err(PcsError::Parameter(
                "the number of rounds must be at least 1".to_string(),
            ));
        }

        let n = size.next_power_of_two() as usize;
        let nb_steps = n.trailing_zeros() as usize;
        let domain = Domain::new(n * RHO)?;

        Ok(RadixTwoFri {
            nb_steps,
            nb_rounds,
            domain,
            _hash: PhantomData,
        })
    }

    /// Return the cardinality of the evaluation domain.
    pub fn domain_size(&self) -> usize {
        self.domain.size()
    }

    /// The transcript labels of one round: one challenge per folding step,
    /// then the query seed.
    fn challenge_labels(&self) -> Vec<Vec<u8>> {
        let mut labels: Vec<Vec<u8>> = (0..self.nb_steps)
            .map(|i| format!("x{}", i).into_bytes())
            .collect();
        labels.push(b"s0".to_vec());
        labels
    }

    /// Interpret a challenge as a position, reducing modulo the domain
    /// cardinality.
    fn derive_position(&self, seed: &[u8]) -> usize {
        let cardinality = BigUint::from(self.domain.size() as u64);
        let pos = BigUint::from_bytes_be(seed) % cardinality;
        let digits = pos.to_u64_digits();
        if digits.is_empty() {
            0
        } else {
            digits[0] as usize
        }
    }

    /// Derive the sorted-order indices the verifier queries at each step:
    /// the position is halved and carried through the canonical/sorted
    /// conversion as the domain shrinks.
    fn derive_queries_positions(&self, pos: usize) -> Vec<usize> {
        let mut size = self.domain.size() / 2;
        let mut res = vec![0usize; self.nb_steps];
        res[0] = pos;
        for i in 1..self.nb_steps {
            let t = (res[i - 1] - (res[i - 1] % 2)) / 2;
            res[i] = convert_canonical_sorted(t, size);
            size /= 2;
        }
        res
    }

    /// Generate a single round of the proof that the function is close to
    /// a polynomial of degree below the engine size.
    fn build_round(&self, salt: F, p: &FpPolynomial<F>) -> Result<Round<F>> {
        let labels = self.challenge_labels();
        let mut fs = LabeledTranscript::new(labels.clone());

        // the salt is bound to the first challenge, so the challenges
        // differ from one round to the next
        fs.bind(&labels[0], &salt.to_bytes())?;

        let two_inv = F::from(2u32).inv()?;

        // evaluate p on the domain; evaluations stay fiber-sorted per step
        let mut current = self.domain.fft(p.get_coefs_ref());
        let mut evals_at_step: Vec<Vec<F>> = Vec::with_capacity(self.nb_steps);
        let mut g_inv = self.domain.generator_inv();

        for i in 0..self.nb_steps {
            let sorted = sort_by_fibers(&current);

            let mut tree = MerkleTree::<D>::new();
            for value in sorted.iter() {
                tree.push(&value.to_bytes());
            }
            fs.bind(&labels[i], &tree.root())?;
            let xi: F = fs.challenge_scalar(&labels[i])?;

            current = fold_in_lagrange_basis(&sorted, &g_inv, &xi, &two_inv);
            g_inv = g_inv.square();
            evals_at_step.push(sorted);
        }

        // the fully folded vector has length ρ
        let evaluation = current;

        // bind the folded evaluations, then derive the query positions
        let s0 = labels[self.nb_steps].clone();
        for value in evaluation.iter() {
            fs.bind(&s0, &value.to_bytes())?;
        }
        let seed = fs.compute_challenge(&s0)?;
        let positions = self.derive_queries_positions(self.derive_position(&seed));

        // one pair of Merkle proofs per step: the queried leaf with its
        // full path, and its fiber neighbor as [raw leaf, hash of the
        // queried leaf]
        let mut interactions = Vec::with_capacity(self.nb_steps);
        for i in 0..self.nb_steps {
            let pos = positions[i];

            let mut tree = MerkleTree::<D>::new();
            tree.set_index(pos as u64)?;
            for value in evals_at_step[i].iter() {
                tree.push(&value.to_bytes());
            }
            let (merkle_root, proof_set, _, num_leaves) = tree.prove()?;

            let c = pos % 2;
            let neighbor = evals_at_step[i][pos + 1 - 2 * c].to_bytes();
            let queried_leaf_hash = D::digest(&proof_set[0]).to_vec();

            let full = PartialMerkleProof {
                merkle_root: merkle_root.clone(),
                proof_set,
                num_leaves,
            };
            let partial = PartialMerkleProof {
                merkle_root,
                proof_set: vec![neighbor, queried_leaf_hash],
                num_leaves,
            };
            interactions.push(if c == 0 { [full, partial] } else { [partial, full] });
        }

        Ok(Round {
            interactions,
            evaluation,
        })
    }

    /// Generate a proof that the function, seen as an oracle by the
    /// verifier, is close to a polynomial of degree below the engine size.
    pub fn build_proof_of_proximity(&self, p: &FpPolynomial<F>) -> Result<ProofOfProximity<F>> {
        let mut rounds = Vec::with_capacity(self.nb_rounds);
        let one = F::one();
        let mut salt = F::zero();
        for _ in 0..self.nb_rounds {
            rounds.push(self.build_round(salt, p)?);
            salt.add_assign(&one);
        }
        Ok(ProofOfProximity {
            id: b"fri-radix2".to_vec(),
            rounds,
        })
    }

    /// Verify a single round of a proof of proximity.
    fn verify_round(&self, salt: F, round: &Round<F>) -> Result<()> {
        if round.interactions.len() != self.nb_steps {
            return Err(PcsError::ProximityTestFolding);
        }
        if round.evaluation.len() != RHO {
            return Err(PcsError::OddSize);
        }

        // re-derive the folding challenges with the same salt
        let labels = self.challenge_labels();
        let mut fs = LabeledTranscript::new(labels.clone());
        fs.bind(&labels[0], &salt.to_bytes())?;

        let mut xis: Vec<F> = Vec::with_capacity(self.nb_steps);
        for i in 0..self.nb_steps {
            fs.bind(&labels[i], &round.interactions[i][0].merkle_root)?;
            xis.push(fs.challenge_scalar(&labels[i])?);
        }
        let s0 = labels[self.nb_steps].clone();
        for value in round.evaluation.iter() {
            fs.bind(&s0, &value.to_bytes())?;
        }
        let seed = fs.compute_challenge(&s0)?;
        let positions = self.derive_queries_positions(self.derive_position(&seed));

        let two_inv = F::from(2u32).inv()?;
        let mut acc_g_inv = self.domain.generator_inv();

        for i in 0..self.nb_steps {
            let pos = positions[i];
            let c = pos % 2;
            let interaction = &round.interactions[i];

            if interaction[c].proof_set.len() < 2 || interaction[1 - c].proof_set.len() < 2 {
                return Err(PcsError::MerklePath);
            }

            // the queried leaf, under its full path
            if !verify_proof::<D>(
                &interaction[c].merkle_root,
                &interaction[c].proof_set,
                pos as u64,
                interaction[c].num_leaves,
            ) {
                return Err(PcsError::MerklePath);
            }

            // the neighbor leaf: its path equals the full one except for
            // the leaf and the first node, which the partial proof carries
            let mut proof_set = interaction[c].proof_set.clone();
            proof_set[0] = interaction[1 - c].proof_set[0].clone();
            proof_set[1] = interaction[1 - c].proof_set[1].clone();
            if !verify_proof::<D>(
                &interaction[1 - c].merkle_root,
                &proof_set,
                (pos + 1 - 2 * c) as u64,
                interaction[1 - c].num_leaves,
            ) {
                return Err(PcsError::MerklePath);
            }

            // consistency of the folding with the next step's opened leaf
            if i < self.nb_steps - 1 {
                let l = F::from_bytes(&interaction[0].proof_set[0])?;
                let r = F::from_bytes(&interaction[1].proof_set[0])?;

                let g_inv_pow = acc_g_inv.pow(&[(pos / 2) as u64]);
                let fe = l.add(&r);
                let fo = l.sub(&r).mul(&g_inv_pow);
                let predicted = fo.mul(&xis[i]).add(&fe).mul(&two_inv);

                let next = &round.interactions[i + 1][positions[i + 1] % 2];
                if next.proof_set.is_empty() {
                    return Err(PcsError::MerklePath);
                }
                let next_value = F::from_bytes(&next.proof_set[0])?;
                if predicted != next_value {
                    return Err(PcsError::ProximityTestFolding);
                }

                acc_g_inv = acc_g_inv.square();
            }
        }

        // the last fold lands on the evaluation vector
        let pos = positions[self.nb_steps - 1];
        let interaction = &round.interactions[self.nb_steps - 1];
        let l = F::from_bytes(&interaction[0].proof_set[0])?;
        let r = F::from_bytes(&interaction[1].proof_set[0])?;

        let g_inv_pow = acc_g_inv.pow(&[(pos / 2) as u64]);
        let fe = l.add(&r);
        let fo = l.sub(&r).mul(&g_inv_pow);
        let predicted = fo.mul(&xis[self.nb_steps - 1]).add(&fe).mul(&two_inv);

        // the choice of the entry does not matter, their equality is
        // checked right after
        if predicted != round.evaluation[0] {
            return Err(PcsError::ProximityTestFolding);
        }

        // a polynomial folded down to size ρ must be constant
        for value in round.evaluation[1..].iter() {
            if value != &round.evaluation[0] {
                return Err(PcsError::LowDegree);
            }
        }

        Ok(())
    }

    /// Verify a proof of proximity, one round after the other.
    pub fn verify_proof_of_proximity(&self, proof: &ProofOfProximity<F>) -> Result<()> {
        if proof.rounds.len() != self.nb_rounds {
            return Err(PcsError::ProximityTestFolding);
        }
        let one = F::one();
        let mut salt = F::zero();
        for round in proof.rounds.iter() {
            self.verify_round(salt, round)?;
            salt.add_assign(&one);
        }
        Ok(())
    }

    /// Open the polynomial at `gⁱ`, where `i = position`.
    pub fn open(&self, p: &FpPolynomial<F>, position: u64) -> Result<OpeningProof<F>> {
        if position >= self.domain.size() as u64 {
            return Err(PcsError::RangePosition);
        }

        let evaluations = self.domain.fft(p.get_coefs_ref());
        let sorted = sort_by_fibers(&evaluations);

        // one Merkle path serves both entries of a fiber, so the position
        // is converted to the sorted indexation
        let pos = convert_canonical_sorted(position as usize, sorted.len());

        let mut tree = MerkleTree::<D>::new();
        tree.set_index(pos as u64)?;
        for value in sorted.iter() {
            tree.push(&value.to_bytes());
        }
        let (merkle_root, proof_set, index, num_leaves) = tree.prove()?;

        // the claimed value is the first entry of the proof set
        let claimed_value = F::from_bytes(&proof_set[0])?;

        Ok(OpeningProof {
            merkle_root,
            proof_set,
            num_leaves,
            index,
            claimed_value,
        })
    }

    /// Verify the opening of a polynomial at `gⁱ`, where `i = position`.
    /// The proof of proximity vouches that the committed values come from a
    /// polynomial, so the opening's root must match the root of its first
    /// interaction before the Merkle path is checked.
    pub fn verify_opening(
        &self,
        position: u64,
        opening: &OpeningProof<F>,
        proof: &ProofOfProximity<F>,
    ) -> Result<()> {
        if position >= self.domain.size() as u64 {
            return Err(PcsError::RangePosition);
        }

        let first = proof
            .rounds
            .first()
            .and_then(|round| round.interactions.first())
            .ok_or(PcsError::MerkleRoot)?;

        // the full path sits on the side with the longer proof set
        let full = if first[0].proof_set.len() > first[1].proof_set.len() {
            0
        } else {
            1
        };

        if opening.merkle_root != first[full].merkle_root {
            return Err(PcsError::MerkleRoot);
        }

        let pos = convert_canonical_sorted(position as usize, self.domain.size());
        if !verify_proof::<D>(
            &opening.merkle_root,
            &opening.proof_set,
            pos as u64,
            opening.num_leaves,
        ) {
            return Err(PcsError::MerklePath);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opal_algebra::bn254::BN254Scalar;
    use rand_chacha::ChaChaRng;
    use sha2::Sha256;

    type F = BN254Scalar;
    type Fri = RadixTwoFri<F, Sha256>;

    #[test]
    fn sorted_canonical_conversions_invert_each_other() {
        for n in [4usize, 8, 32, 64] {
            for i in 0..n {
                assert_eq!(convert_sorted_canonical(convert_canonical_sorted(i, n), n), i);
                assert_eq!(convert_canonical_sorted(convert_sorted_canonical(i, n), n), i);
            }
        }
    }

    #[test]
    fn sort_pairs_fibers() {
        // on a domain of size 8 the fiber of g²ⁱ is {gⁱ, g^{i+4}}
        let evals: Vec<F> = (0..8).map(|i| F::from(i as u32)).collect();
        let sorted = sort_by_fibers(&evals);
        let expected: Vec<F> = [0u32, 4, 1, 5, 2, 6, 3, 7]
            .iter()
            .map(|i| F::from(*i))
            .collect();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn folding_halves_the_degree() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let n = 16usize;
        let domain = Domain::<F>::new(n).unwrap();
        let two_inv = F::from(2u32).inv().unwrap();

        let p = FpPolynomial::<F>::random(&mut prng, n - 1);
        let x = F::random(&mut prng);

        let sorted = sort_by_fibers(&domain.fft(p.get_coefs_ref()));
        let folded = fold_in_lagrange_basis(&sorted, &domain.generator_inv(), &x, &two_inv);

        // expected: P₀ + x·P₁ evaluated on the squared subgroup
        let coefs = p.get_coefs_ref();
        let mut folded_coefs = Vec::with_capacity(n / 2);
        for i in 0..n / 2 {
            folded_coefs.push(coefs[2 * i].add(&x.mul(&coefs[2 * i + 1])));
        }
        let half_domain = Domain::<F>::new(n / 2).unwrap();
        let expected = half_domain.fft(&folded_coefs);
        assert_eq!(folded, expected);
    }

    #[test]
    fn refolding_the_final_evaluation_is_stable() {
        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let fri = Fri::new(16, 1).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);

        let proof = fri.build_proof_of_proximity(&p).unwrap();
        let evaluation = &proof.rounds[0].evaluation;
        assert_eq!(evaluation.len(), RHO);

        let two_inv = F::from(2u32).inv().unwrap();
        let x = F::random(&mut prng);
        let refolded = fold_in_lagrange_basis(evaluation, &F::one(), &x, &two_inv);
        assert_eq!(refolded[0], evaluation[0]);
    }

    #[test]
    fn completeness() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);

        // polynomial of size 16: domain of cardinality 32, 4 folding steps
        let fri = Fri::new(16, 1).unwrap();
        assert_eq!(fri.domain_size(), 32);

        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let proof = fri.build_proof_of_proximity(&p).unwrap();
        fri.verify_proof_of_proximity(&proof).unwrap();

        // several rounds, and a polynomial of degree well below the bound
        let fri = Fri::new(16, 3).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 9);
        let proof = fri.build_proof_of_proximity(&p).unwrap();
        fri.verify_proof_of_proximity(&proof).unwrap();
    }

    #[test]
    fn high_degree_is_rejected() {
        let mut prng = ChaChaRng::from_seed([3u8; 32]);
        let fri = Fri::new(16, 1).unwrap();

        // degree 31 fills the whole evaluation domain; the final fold is a
        // degree-1 polynomial on ρ points, so its entries cannot all agree:
        // depending on where the query lands this surfaces as the constant
        // check or as the last fold comparison
        let p = FpPolynomial::<F>::random(&mut prng, 31);
        let proof = fri.build_proof_of_proximity(&p).unwrap();
        let err = fri.verify_proof_of_proximity(&proof).unwrap_err();
        assert!(err == PcsError::LowDegree || err == PcsError::ProximityTestFolding);
    }

    #[test]
    fn tampered_root_is_rejected() {
        let mut prng = ChaChaRng::from_seed([4u8; 32]);
        let fri = Fri::new(16, 1).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let proof = fri.build_proof_of_proximity(&p).unwrap();

        let mut tampered = proof.clone();
        tampered.rounds[0].interactions[0][0].merkle_root[0] ^= 1;
        let err = fri.verify_proof_of_proximity(&tampered).unwrap_err();
        assert!(err == PcsError::MerklePath || err == PcsError::ProximityTestFolding);
    }

    #[test]
    fn tampered_leaf_is_rejected() {
        let mut prng = ChaChaRng::from_seed([5u8; 32]);
        let fri = Fri::new(16, 1).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let proof = fri.build_proof_of_proximity(&p).unwrap();

        let mut tampered = proof.clone();
        let c = usize::from(tampered.rounds[0].interactions[0][0].proof_set.len() == 2);
        tampered.rounds[0].interactions[0][c].proof_set[0] =
            F::random(&mut prng).to_bytes();
        let err = fri.verify_proof_of_proximity(&tampered).unwrap_err();
        assert!(err == PcsError::MerklePath || err == PcsError::ProximityTestFolding);
    }

    #[test]
    fn tampered_evaluation_is_rejected() {
        let mut prng = ChaChaRng::from_seed([6u8; 32]);
        let fri = Fri::new(16, 1).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let proof = fri.build_proof_of_proximity(&p).unwrap();

        let mut tampered = proof.clone();
        tampered.rounds[0].evaluation[1] = F::random(&mut prng);
        let err = fri.verify_proof_of_proximity(&tampered).unwrap_err();
        assert!(
            err == PcsError::LowDegree
                || err == PcsError::ProximityTestFolding
                || err == PcsError::MerklePath
        );
    }

    #[test]
    fn open_and_verify() {
        let mut prng = ChaChaRng::from_seed([7u8; 32]);
        let fri = Fri::new(16, 1).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let proof = fri.build_proof_of_proximity(&p).unwrap();

        let opening = fri.open(&p, 7).unwrap();
        fri.verify_opening(7, &opening, &proof).unwrap();

        // the claimed value is the evaluation of p at g⁷
        let g = fri.domain.generator();
        assert_eq!(opening.claimed_value, p.eval(&g.pow(&[7])));

        // out of range: the domain has cardinality 32
        assert_eq!(fri.open(&p, 32).unwrap_err(), PcsError::RangePosition);

        // opening against a foreign proof of proximity fails on the root
        let other = FpPolynomial::<F>::random(&mut prng, 15);
        let other_proof = fri.build_proof_of_proximity(&other).unwrap();
        assert_eq!(
            fri.verify_opening(7, &opening, &other_proof).unwrap_err(),
            PcsError::MerkleRoot
        );
    }

    #[test]
    fn wrong_round_count_is_rejected() {
        let mut prng = ChaChaRng::from_seed([8u8; 32]);
        let fri = Fri::new(16, 2).unwrap();
        let p = FpPolynomial::<F>::random(&mut prng, 15);
        let mut proof = fri.build_proof_of_proximity(&p).unwrap();

        proof.rounds.pop();
        assert!(fri.verify_proof_of_proximity(&proof).is_err());
    }
}
