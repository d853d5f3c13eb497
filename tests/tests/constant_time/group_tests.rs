// tests/constant_time/group_tests.rs
// Timing tests for G1 and G2 scalar multiplication and point decoding

use super::{assert_constant_time, TestConfig};
use bls381_algorithms::bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective};
use bls381_tests::{dense_scalar, sparse_scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

#[test]
fn test_g1_scalar_mul_constant_time() {
    let config = TestConfig::for_scalar_mul();
    let p = G1Projective::generator();
    let sparse = sparse_scalar();
    let dense = dense_scalar();

    assert_constant_time(
        "G1 scalar multiplication",
        &config,
        || {
            black_box(black_box(p) * black_box(sparse));
        },
        || {
            black_box(black_box(p) * black_box(dense));
        },
    );
}

#[test]
fn test_g2_scalar_mul_constant_time() {
    let config = TestConfig::for_scalar_mul().with_samples_and_iterations(10, 2);
    let p = G2Projective::generator();
    let sparse = sparse_scalar();
    let dense = dense_scalar();

    assert_constant_time(
        "G2 scalar multiplication",
        &config,
        || {
            black_box(black_box(p) * black_box(sparse));
        },
        || {
            black_box(black_box(p) * black_box(dense));
        },
    );
}

#[test]
fn test_g1_identity_vs_point_mul_constant_time() {
    let config = TestConfig::for_scalar_mul();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let identity = G1Projective::identity();
    let point = G1Projective::random(&mut rng);
    let k = dense_scalar();

    assert_constant_time(
        "G1 multiplication of the identity",
        &config,
        || {
            black_box(black_box(identity) * black_box(k));
        },
        || {
            black_box(black_box(point) * black_box(k));
        },
    );
}

#[test]
fn test_g1_decompression_constant_time() {
    let config = TestConfig::for_scalar_mul();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let a = G1Affine::from(G1Projective::random(&mut rng)).to_compressed();
    let b = G1Affine::from(G1Projective::random(&mut rng)).to_compressed();

    assert_constant_time(
        "G1 decompression",
        &config,
        || {
            let _ = black_box(G1Affine::from_compressed(black_box(&a)));
        },
        || {
            let _ = black_box(G1Affine::from_compressed(black_box(&b)));
        },
    );
}

#[test]
fn test_g2_decompression_constant_time() {
    let config = TestConfig::for_scalar_mul().with_samples_and_iterations(10, 2);
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let a = G2Affine::from(G2Projective::random(&mut rng)).to_compressed();
    let b = G2Affine::from(G2Projective::random(&mut rng)).to_compressed();

    assert_constant_time(
        "G2 decompression",
        &config,
        || {
            let _ = black_box(G2Affine::from_compressed(black_box(&a)));
        },
        || {
            let _ = black_box(G2Affine::from_compressed(black_box(&b)));
        },
    );
}
