use opal_algebra::bn254::{BN254PairingEngine, BN254Scalar};
use opal_algebra::prelude::*;
use opal_pcs::errors::PcsError;
use opal_pcs::fri::RadixTwoFri;
use opal_pcs::poly_commit::field_polynomial::FpPolynomial;
use opal_pcs::poly_commit::kzg::KZGCommitmentScheme;
use opal_pcs::shplonk;
use opal_pcs::sis::RSis;
use rand_chacha::ChaChaRng;
use sha2::Sha256;

type F = BN254Scalar;

#[test]
fn shplonk_batch_opening() {
    let mut prng = ChaChaRng::from_seed([11u8; 32]);
    let pk = KZGCommitmentScheme::<BN254PairingEngine>::new(32, &mut prng);
    let vk = pk.shrink_to_verifier_only();

    let mut polynomials = vec![];
    let mut digests = vec![];
    let mut points = vec![];
    for _ in 0..4 {
        let f = FpPolynomial::<F>::random(&mut prng, 20);
        digests.push(pk.commit(&f).unwrap());
        polynomials.push(f);
        points.push(F::random(&mut prng));
    }

    let proof =
        shplonk::batch_open::<BN254PairingEngine>(&polynomials, &digests, &points, &pk, &[])
            .unwrap();
    shplonk::batch_verify::<BN254PairingEngine>(&proof, &digests, &points, &vk, &[]).unwrap();

    // the proof is bound to the order of the instances
    let swapped_points = [points[1], points[0], points[2], points[3]];
    assert_eq!(
        shplonk::batch_verify::<BN254PairingEngine>(&proof, &digests, &swapped_points, &vk, &[])
            .unwrap_err(),
        PcsError::VerifyOpeningProof
    );
}

#[test]
fn fri_commit_open_verify() {
    let mut prng = ChaChaRng::from_seed([12u8; 32]);
    let fri = RadixTwoFri::<F, Sha256>::new(16, 2).unwrap();
    let p = FpPolynomial::<F>::random(&mut prng, 15);

    let proof = fri.build_proof_of_proximity(&p).unwrap();
    fri.verify_proof_of_proximity(&proof).unwrap();

    for position in [0u64, 7, 13, 31] {
        let opening = fri.open(&p, position).unwrap();
        fri.verify_opening(position, &opening, &proof).unwrap();
    }
}

#[test]
fn sis_hash_session() {
    let mut hasher = RSis::<F>::new(5, 5, 8, 4).unwrap();

    hasher.write(b"written in");
    hasher.write(b" two parts");
    let digest = hasher.sum();
    assert_eq!(digest.len(), hasher.size());

    // writes split differently produce the same digest
    let mut other = RSis::<F>::new(5, 5, 8, 4).unwrap();
    other.write(b"written in two parts");
    assert_eq!(digest, other.sum());

    // the buffer survives sum and is dropped by reset
    assert_eq!(hasher.sum(), digest);
    hasher.reset();
    assert_ne!(hasher.sum(), digest);
    assert_eq!(hasher.sum(), vec![0u8; hasher.size()]);
}
