//! Property-based tests for the BLS12-381 field tower, groups and pairing

use bls381_algorithms::bls12_381::{
    hash_to_g1, hash_to_g2, pairing, Fp, G1Affine, G1Projective, G2Affine, G2Projective, Gt,
    Scalar,
};
use bls381_api::Serialize;
use proptest::prelude::*;

/// Uniform scalar from 64 random bytes
fn scalar() -> impl Strategy<Value = Scalar> {
    prop::collection::vec(any::<u8>(), 64).prop_map(|v| {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&v);
        Scalar::from_bytes_wide(&wide)
    })
}

/// Uniform base field element from 64 random bytes
fn fp() -> impl Strategy<Value = Fp> {
    prop::collection::vec(any::<u8>(), 64).prop_map(|v| {
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&v);
        Fp::from_bytes_wide(&wide)
    })
}

fn small_scalar() -> impl Strategy<Value = u64> {
    1u64..1_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fp_field_laws(a in fp(), b in fp(), c in fp()) {
        prop_assert_eq!((a + b) * c, a * c + b * c);
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a - a, Fp::zero());
        prop_assert_eq!(a.square(), a * a);
        if !bool::from(a.is_zero()) {
            prop_assert_eq!(a * a.invert(), Fp::one());
        }
    }

    #[test]
    fn fp_bytes_round_trip(a in fp()) {
        let bytes = a.to_bytes();
        prop_assert_eq!(Option::<Fp>::from(Fp::from_bytes(&bytes)), Some(a));
    }

    #[test]
    fn fp_sqrt_of_square(a in fp()) {
        let s = a.square();
        let root = Option::<Fp>::from(s.sqrt());
        prop_assert!(root.is_some());
        let root = root.unwrap();
        prop_assert!(root == a || root == -a);
    }

    #[test]
    fn scalar_field_laws(a in scalar(), b in scalar()) {
        prop_assert_eq!(a * b, b * a);
        prop_assert_eq!(a + b - b, a);
        if !bool::from(a.is_zero()) {
            prop_assert_eq!(a * a.invert(), Scalar::one());
        }
        let bytes = a.to_bytes();
        prop_assert_eq!(Option::<Scalar>::from(Scalar::from_bytes(&bytes)), Some(a));
    }

    #[test]
    fn scalar_rejects_unreduced_bytes(mut bytes in prop::collection::vec(any::<u8>(), 32)) {
        // Leading byte 0xff puts the value above r
        bytes[0] = 0xff;
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        prop_assert!(bool::from(Scalar::from_bytes(&array).is_none()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn g1_distributive(a in scalar(), b in scalar()) {
        let g = G1Projective::generator();
        prop_assert_eq!(g * (a + b), g * a + g * b);
    }

    #[test]
    fn g1_codec_round_trip(k in scalar()) {
        let p = G1Affine::from(G1Projective::generator() * k);
        prop_assert_eq!(G1Affine::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(G1Affine::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
        prop_assert_eq!(<G1Affine as Serialize>::from_bytes(&Serialize::to_bytes(&p)).unwrap(), p);
    }

    #[test]
    fn g1_decoding_never_yields_invalid_points(bytes in prop::collection::vec(any::<u8>(), 48)) {
        let mut array = [0u8; 48];
        array.copy_from_slice(&bytes);
        if let Ok(p) = G1Affine::from_compressed(&array) {
            prop_assert!(bool::from(p.is_on_g1()));
            prop_assert_eq!(p.to_compressed(), array);
        }
    }

    #[test]
    fn hash_to_g1_lands_in_subgroup(msg in prop::collection::vec(any::<u8>(), 0..128)) {
        let p = hash_to_g1(&msg, b"BLS381-PROPTEST").unwrap();
        prop_assert!(bool::from(p.is_on_g1()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn g2_codec_round_trip(k in scalar()) {
        let p = G2Affine::from(G2Projective::generator() * k);
        prop_assert_eq!(G2Affine::from_compressed(&p.to_compressed()).unwrap(), p);
        prop_assert_eq!(G2Affine::from_uncompressed(&p.to_uncompressed()).unwrap(), p);
    }

    #[test]
    fn hash_to_g2_lands_in_subgroup(msg in prop::collection::vec(any::<u8>(), 0..64)) {
        let p = hash_to_g2(&msg, b"BLS381-PROPTEST").unwrap();
        prop_assert!(bool::from(p.is_on_g2()));
    }

    #[test]
    fn pairing_bilinearity(a in small_scalar(), b in small_scalar()) {
        let (a, b) = (Scalar::from(a), Scalar::from(b));
        let p = G1Affine::from(G1Projective::generator() * a);
        let q = G2Affine::from(G2Projective::generator() * b);
        prop_assert_eq!(pairing(&p, &q), Gt::generator() * (a * b));
    }

    #[test]
    fn gt_codec_round_trip(k in scalar()) {
        let g = Gt::generator() * k;
        prop_assert_eq!(Gt::from_bytes(&g.to_bytes()).unwrap(), g);
    }
}
