// tests/constant_time/pairing_tests.rs
// Timing tests for the pairing and target group exponentiation

use super::{assert_constant_time, TestConfig};
use bls381_algorithms::bls12_381::{pairing, G1Affine, G1Projective, G2Affine, Gt};
use bls381_tests::{dense_scalar, sparse_scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;

#[test]
fn test_gt_pow_constant_time() {
    let config = TestConfig::for_pairing();
    let g = Gt::generator();
    let sparse = sparse_scalar();
    let dense = dense_scalar();

    assert_constant_time(
        "Gt exponentiation",
        &config,
        || {
            black_box(black_box(&g).pow(black_box(&sparse)));
        },
        || {
            black_box(black_box(&g).pow(black_box(&dense)));
        },
    );
}

#[test]
fn test_pairing_input_independence() {
    let config = TestConfig::for_pairing();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let q = G2Affine::generator();
    let generator = G1Affine::generator();
    let random = G1Affine::from(G1Projective::random(&mut rng));

    assert_constant_time(
        "Pairing",
        &config,
        || {
            black_box(pairing(black_box(&generator), black_box(&q)));
        },
        || {
            black_box(pairing(black_box(&random), black_box(&q)));
        },
    );
}
