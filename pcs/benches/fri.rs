use opal_algebra::bn254::BN254Scalar;
use opal_algebra::prelude::*;
use opal_pcs::fri::RadixTwoFri;
use opal_pcs::poly_commit::field_polynomial::FpPolynomial;
use sha2::Sha256;
use std::time::Instant;

fn main() {
    let mut prng = test_rng();
    let size = 1 << 12;

    let fri = RadixTwoFri::<BN254Scalar, Sha256>::new(size, 1).unwrap();
    let p = FpPolynomial::<BN254Scalar>::random(&mut prng, (size - 1) as usize);

    let start = Instant::now();
    let rounds = 10;
    for _ in 0..rounds {
        let proof = fri.build_proof_of_proximity(&p).unwrap();
        fri.verify_proof_of_proximity(&proof).unwrap();
    }
    println!(
        "fri prove+verify, size {}: {} s",
        size,
        start.elapsed().as_secs_f32() / rounds as f32
    );
}
