//! G₂ group implementation for BLS12-381: the order-r subgroup of the sextic
//! twist `y² = x³ + 4(1 + u)` over Fp2.

use alloc::vec::Vec;

use subtle::{Choice, ConstantTimeEq};

use super::curve::{Affine, CurveParams, Projective};
use super::field::fp::Fp;
use super::field::fp2::Fp2;
use crate::error::Result;

/// Curve constants for G₂
#[derive(Copy, Clone, Debug)]
pub struct G2Params;

/// G₂ affine point representation.
pub type G2Affine = Affine<G2Params>;

/// G₂ projective point representation.
pub type G2Projective = Projective<G2Params>;

/// 4 in Montgomery form
const FOUR: Fp = Fp::from_raw_unchecked([
    0xaa27_0000_000c_fff3,
    0x53cc_0032_fc34_000a,
    0x478f_e97a_6b0a_807f,
    0xb1d3_7ebe_e6ba_24d7,
    0x8ec9_733b_bf78_ab2f,
    0x09d6_4551_3d83_de7e,
]);

/// b = 4(1 + u)
const B: Fp2 = Fp2 { c0: FOUR, c1: FOUR };

/// 3b
const B3: Fp2 = Fp2::add(&Fp2::add(&B, &B), &B);

/// 1 / ξ^((p−1)/3), the x-coefficient of ψ
const PSI_COEFF_X: Fp2 = Fp2 {
    c0: Fp::zero(),
    c1: Fp::from_raw_unchecked([
        0x890d_c9e4_8675_45c3,
        0x2af3_2253_3285_a5d5,
        0x5088_0866_309b_7e2c,
        0xa20d_1b8c_7e88_1024,
        0x14e4_f04f_e2db_9068,
        0x14e5_6d3f_1564_853a,
    ]),
};

/// 1 / ξ^((p−1)/2), the y-coefficient of ψ
const PSI_COEFF_Y: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0x3e2f_585d_a55c_9ad1,
        0x4294_213d_86c1_8183,
        0x3828_44c8_8b62_3732,
        0x92ad_2afd_1910_3e18,
        0x1d79_4e4f_ac7c_f0b9,
        0x0bd5_92fc_7d82_5ec8,
    ]),
    c1: Fp::from_raw_unchecked([
        0x7bcf_a7a2_5aa3_0fda,
        0xdc17_dec1_2a92_7e7c,
        0x2f08_8dd8_6b4e_bef1,
        0xd1ca_2087_da74_d4a7,
        0x2da2_5966_96ce_bc1d,
        0x0e2b_7eed_bbfd_87d2,
    ]),
};

/// 1 / 2^((p−1)/3), the x-coefficient of ψ²
const PSI2_COEFF_X: Fp2 = Fp2 {
    c0: Fp::from_raw_unchecked([
        0xcd03_c9e4_8671_f071,
        0x5dab_2246_1fcd_a5d2,
        0x5870_42af_d385_1b95,
        0x8eb6_0ebe_01ba_cb9e,
        0x03f9_7d6e_83d0_50d2,
        0x18f0_2065_5463_8741,
    ]),
    c1: Fp::zero(),
};

impl CurveParams for G2Params {
    type Base = Fp2;

    const NAME: &'static str = "G2";

    const B: Fp2 = B;

    const GENERATOR_X: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
            0xf5f2_8fa2_0294_0a10,
            0xb3f5_fb26_87b4_961a,
            0xa1a8_93b5_3e2a_e580,
            0x9894_999d_1a3c_aee9,
            0x6f67_b763_1863_366b,
            0x0581_9192_4350_bcd7,
        ]),
        c1: Fp::from_raw_unchecked([
            0xa5a9_c075_9e23_f606,
            0xaaa0_c59d_bccd_60c3,
            0x3bb1_7e18_e286_7806,
            0x1b1a_b6cc_8541_b367,
            0xc2b6_ed0e_f215_8547,
            0x1192_2a09_7360_edf3,
        ]),
    };

    const GENERATOR_Y: Fp2 = Fp2 {
        c0: Fp::from_raw_unchecked([
            0x4c73_0af8_6049_4c4a,
            0x597c_fa1f_5e36_9c5a,
            0xe7e6_856c_aa0a_635a,
            0xbbef_b5e9_6e0d_495f,
            0x07d3_a975_f0ef_25a2,
            0x0083_fd8e_7e80_dae5,
        ]),
        c1: Fp::from_raw_unchecked([
            0xadc0_fc92_df64_b05d,
            0x18aa_270a_2b14_61dc,
            0x86ad_ac6a_3be4_eba0,
            0x7949_5c4e_c93d_a33a,
            0xe717_5850_a43c_caed,
            0x0b2b_c2a1_63de_1bf2,
        ]),
    };

    #[inline]
    fn mul_by_3b(a: &Fp2) -> Fp2 {
        a * B3
    }

    fn is_torsion_free(p: &G2Affine) -> Choice {
        // Section 4 of https://eprint.iacr.org/2021/1130:
        // P is in the subgroup iff ψ(P) == [x]P
        let p = G2Projective::from(p);
        psi(&p).ct_eq(&p.mul_by_x())
    }

    fn clear_cofactor(p: &G2Projective) -> G2Projective {
        // Budroni–Pintore: ψ²(2P) + [x² − x − 1]P + [x − 1]ψ(P)
        let t1 = p.mul_by_x(); // [x]P
        let t2 = psi(p); // ψ(P)

        psi2(&p.double()) // ψ²(2P)
            + (t1 + t2).mul_by_x() // + [x²]P + [x]ψ(P)
            - t1 // + [x² − x]P
            - t2 // + [x − 1]ψ(P)
            - p // + [x² − x − 1]P
    }
}

/// The untwist-Frobenius-twist endomorphism ψ
fn psi(p: &G2Projective) -> G2Projective {
    Projective {
        // x = frobenius(x) / ξ^((p−1)/3)
        x: p.x.frobenius_map() * PSI_COEFF_X,
        // y = frobenius(y) / ξ^((p−1)/2)
        y: p.y.frobenius_map() * PSI_COEFF_Y,
        // z = frobenius(z)
        z: p.z.frobenius_map(),
    }
}

/// ψ², which needs no Frobenius map
fn psi2(p: &G2Projective) -> G2Projective {
    Projective {
        x: p.x * PSI2_COEFF_X,
        y: -p.y,
        z: p.z,
    }
}

impl G2Affine {
    /// Serialize to 96 compressed bytes.
    pub fn to_compressed(&self) -> [u8; 96] {
        let mut res = [0u8; 96];
        self.write_compressed(&mut res);
        res
    }

    /// Serialize to 192 uncompressed bytes (x ‖ y).
    pub fn to_uncompressed(&self) -> [u8; 192] {
        let mut res = [0u8; 192];
        self.write_uncompressed(&mut res);
        res
    }

    /// Deserialize compressed bytes, checking subgroup membership.
    pub fn from_compressed(bytes: &[u8; 96]) -> Result<Self> {
        Self::read_compressed(bytes)
    }

    /// Deserialize compressed bytes without the subgroup check.
    pub fn from_compressed_unchecked(bytes: &[u8; 96]) -> Result<Self> {
        Self::read_compressed_unchecked(bytes)
    }

    /// Deserialize uncompressed bytes, checking curve and subgroup membership.
    pub fn from_uncompressed(bytes: &[u8; 192]) -> Result<Self> {
        Self::read_uncompressed(bytes)
    }

    /// Deserialize uncompressed bytes without any validity check.
    pub fn from_uncompressed_unchecked(bytes: &[u8; 192]) -> Result<Self> {
        Self::read_uncompressed_unchecked(bytes)
    }

    /// On the curve and in the order-r subgroup
    pub fn is_on_g2(&self) -> Choice {
        self.is_valid()
    }
}

impl G2Projective {
    /// On the curve and in the order-r subgroup
    pub fn is_on_g2(&self) -> Choice {
        self.is_valid()
    }
}

impl bls381_api::Serialize for G2Affine {
    fn from_bytes(bytes: &[u8]) -> bls381_api::Result<Self> {
        G2Affine::read_compressed(bytes).map_err(Into::into)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.to_compressed().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::bls12_381::Scalar;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    #[test]
    fn test_b3() {
        assert_eq!(B3, B + B + B);
        let a = Fp2 {
            c0: Fp::from(3u64),
            c1: Fp::from(5u64),
        };
        assert_eq!(G2Params::mul_by_3b(&a), a * B + a * B + a * B);
    }

    #[test]
    fn test_psi() {
        let generator = G2Projective::generator();

        // ψ acts as [x] on the subgroup
        let psi_g = psi(&generator);
        assert!(bool::from(psi_g.is_on_curve()));
        assert_eq!(psi_g, generator.mul_by_x());

        // ψ² agrees with ψ∘ψ
        assert_eq!(psi2(&generator), psi(&psi_g));

        let point = generator * Scalar::from(123u64);
        assert_eq!(psi2(&point), psi(&psi(&point)));
    }

    #[test]
    fn test_mul_by_x() {
        // x = -0xd201000000010000
        let generator = G2Projective::generator();
        let x = -Scalar::from(0xd201_0000_0001_0000);
        assert_eq!(generator.mul_by_x(), generator * x);

        let point = generator * Scalar::from(42u64);
        assert_eq!(point.mul_by_x(), point * x);
    }

    #[test]
    fn test_clear_cofactor_on_subgroup_point() {
        // On the subgroup ψ = [x], so the map is [4x² − 2x − 1]
        let generator = G2Projective::generator();
        let x = -Scalar::from(0xd201_0000_0001_0000);
        let h_eff = x * x * Scalar::from(4u64) - x * Scalar::from(2u64) - Scalar::one();
        assert_eq!(generator.clear_cofactor(), generator * h_eff);
    }

    #[test]
    fn test_torsion_checks_agree() {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        for _ in 0..2 {
            let p = G2Affine::from(G2Projective::random(&mut rng));
            assert!(bool::from(p.is_torsion_free()));
            assert!(bool::from(p.is_r_torsion()));
            assert!(bool::from(p.is_on_g2()));
        }
        assert!(bool::from(G2Affine::identity().is_torsion_free()));
    }

    #[test]
    fn test_non_subgroup_point_rejected() {
        // Lift x = 1, 2, ... until a curve point appears; the cofactor is huge
        // so it lies outside the subgroup
        let mut x = Fp2::one();
        let p = loop {
            if let Some(y) = Option::<Fp2>::from((x.square() * x + B).sqrt()) {
                break G2Affine {
                    x,
                    y,
                    infinity: Choice::from(0u8),
                };
            }
            x += Fp2::one();
        };

        assert!(bool::from(p.is_on_curve()));
        assert!(!bool::from(p.is_torsion_free()));
        assert!(!bool::from(p.is_r_torsion()));
        assert!(G2Affine::from_uncompressed(&p.to_uncompressed()).is_err());
        assert!(G2Affine::from_compressed(&p.to_compressed()).is_err());
        assert_eq!(
            G2Affine::from_uncompressed_unchecked(&p.to_uncompressed()).unwrap(),
            p
        );

        let cleared = G2Affine::from(G2Projective::from(p).clear_cofactor());
        assert!(bool::from(cleared.is_torsion_free()));
        assert!(bool::from(cleared.is_on_g2()));
    }
}
