/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

mod g2;
pub use g2::*;

mod gt;
pub use gt::*;

mod pairing;
pub use pairing::*;

#[cfg(test)]
mod bn254_groups_test {
    use crate::traits::Group;
    use crate::{
        bn254::{BN254Gt, BN254PairingEngine, BN254Scalar, BN254G1, BN254G2},
        prelude::*,
        traits::{
            group_tests::{test_scalar_operations, test_scalar_serialization},
            Pairing,
        },
    };

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
    }

    #[test]
    fn hard_coded_group_elements() {
        let base_gt = BN254Gt::get_base();
        let expected_base = BN254PairingEngine::pairing(&BN254G1::get_base(), &BN254G2::get_base());
        assert_eq!(base_gt, expected_base);
    }

    #[test]
    fn bilinear_properties() {
        let identity_g1 = BN254G1::get_identity();
        let identity_g2 = BN254G2::get_identity();
        let identity_gt_computed = BN254PairingEngine::pairing(&identity_g1, &identity_g2);
        let identity_gt = BN254Gt::get_identity();
        assert_eq!(identity_gt, identity_gt_computed);

        let mut prng = test_rng();

        let s1 = BN254Scalar::from(50 + prng.next_u32() % 50);
        let s2 = BN254Scalar::from(50 + prng.next_u32() % 50);

        let base_g1 = BN254G1::get_base();
        let base_g2 = BN254G2::get_base();

        let s1_base_g1 = base_g1.mul(&s1);
        let s2_base_g2 = base_g2.mul(&s2);

        let gt_mapped_element = BN254PairingEngine::pairing(&s1_base_g1, &s2_base_g2);

        let gt_base_computed = BN254PairingEngine::pairing(&base_g1, &base_g2);
        let base_gt = BN254Gt::get_base();
        assert_eq!(base_gt, gt_base_computed);

        assert_eq!(
            gt_mapped_element,
            BN254PairingEngine::pairing(&base_g1, &s2_base_g2).mul(&s1)
        );
        assert_eq!(
            gt_mapped_element,
            BN254PairingEngine::pairing(&s1_base_g1, &base_g2).mul(&s2)
        );

        assert_eq!(gt_mapped_element, gt_base_computed.mul(&s1).mul(&s2));
        assert_eq!(gt_mapped_element, gt_base_computed.mul(&s2).mul(&s1));
    }

    #[test]
    fn test_product_of_pairings() {
        let mut prng = test_rng();

        // e(aP, Q) * e(-P, aQ) = 1
        let a = BN254Scalar::random(&mut prng);
        let p = BN254G1::random(&mut prng);
        let q = BN254G2::random(&mut prng);

        let lhs = BN254PairingEngine::product_of_pairings(&[p.mul(&a), p.neg()], &[q, q.mul(&a)]);
        assert_eq!(lhs, BN254Gt::get_identity());
    }

    #[test]
    fn test_serialization_of_points() {
        let mut prng = test_rng();

        let g1 = BN254G1::random(&mut prng);
        let g1_bytes = g1.to_compressed_bytes();
        let g1_recovered = BN254G1::from_compressed_bytes(&g1_bytes).unwrap();
        assert_eq!(g1, g1_recovered);

        let g2 = BN254G2::random(&mut prng);
        let g2_bytes = g2.to_compressed_bytes();
        let g2_recovered = BN254G2::from_compressed_bytes(&g2_bytes).unwrap();
        assert_eq!(g2, g2_recovered);

        let gt = BN254Gt::random(&mut prng);
        let gt_bytes = gt.to_compressed_bytes();
        let gt_recovered = BN254Gt::from_compressed_bytes(&gt_bytes).unwrap();
        assert_eq!(gt, gt_recovered);
    }

    #[test]
    fn test_multiexp() {
        let mut prng = test_rng();

        let g = BN254G1::multi_exp(&[], &[]);
        assert_eq!(g, BN254G1::get_identity());

        let g1 = BN254G1::get_base();
        let g2 = g1.add(&g1);
        let g3 = g1.mul(&BN254Scalar::from(500u32));
        let thousand = BN254Scalar::from(1000u32);
        let two = BN254Scalar::from(2u32);
        let three = BN254Scalar::from(3u32);
        let g = BN254G1::multi_exp(&[&thousand, &two, &three], &[&g1, &g2, &g3]);
        let expected = BN254G1::get_base().mul(&BN254Scalar::from((1000 + 4 + 1500) as u32));
        assert_eq!(g, expected);

        let r = BN254Scalar::random(&mut prng);
        let s = BN254Scalar::random(&mut prng);
        let p = BN254G1::random(&mut prng);
        let q = BN254G1::random(&mut prng);
        let g = BN254G1::multi_exp(&[&r, &s], &[&p, &q]);
        assert_eq!(g, p.mul(&r).add(&q.mul(&s)));
    }
}
