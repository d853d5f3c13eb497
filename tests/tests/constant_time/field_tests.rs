// tests/constant_time/field_tests.rs
// Timing tests for base and scalar field arithmetic

use super::{assert_constant_time, TestConfig};
use bls381_algorithms::bls12_381::{Fp, Scalar};
use bls381_tests::{dense_scalar, sparse_scalar};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::hint::black_box;
use subtle::ConstantTimeEq;

#[test]
fn test_fp_invert_constant_time() {
    let config = TestConfig::for_field();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let one = Fp::one();
    let random = Fp::random(&mut rng);

    assert_constant_time(
        "Fp inversion",
        &config,
        || {
            black_box(black_box(&one).invert());
        },
        || {
            black_box(black_box(&random).invert());
        },
    );
}

#[test]
fn test_fp_sqrt_constant_time() {
    let config = TestConfig::for_field();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let square = Fp::random(&mut rng).square();

    // -1 has no square root since p ≡ 3 (mod 4)
    let non_square = -Fp::one();

    assert_constant_time(
        "Fp square root",
        &config,
        || {
            black_box(black_box(&square).sqrt());
        },
        || {
            black_box(black_box(&non_square).sqrt());
        },
    );
}

#[test]
fn test_fp_ct_eq_constant_time() {
    let config = TestConfig::for_comparison();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let a = Fp::random(&mut rng);
    let same = a;

    // Differs in the first limb compared
    let first = a + Fp::one();

    assert_constant_time(
        "Fp equality",
        &config,
        || {
            black_box(black_box(&a).ct_eq(black_box(&same)));
        },
        || {
            black_box(black_box(&a).ct_eq(black_box(&first)));
        },
    );
}

#[test]
fn test_scalar_invert_constant_time() {
    let config = TestConfig::for_field();
    let sparse = sparse_scalar();
    let dense = dense_scalar();

    assert_constant_time(
        "Scalar inversion",
        &config,
        || {
            black_box(black_box(&sparse).invert());
        },
        || {
            black_box(black_box(&dense).invert());
        },
    );
}

#[test]
fn test_scalar_mul_constant_time() {
    let config = TestConfig::for_comparison();
    let sparse = sparse_scalar();
    let dense = dense_scalar();
    let x = Scalar::from(0x1234_5678u64);

    assert_constant_time(
        "Scalar multiplication",
        &config,
        || {
            black_box(black_box(sparse) * black_box(x));
        },
        || {
            black_box(black_box(dense) * black_box(x));
        },
    );
}
