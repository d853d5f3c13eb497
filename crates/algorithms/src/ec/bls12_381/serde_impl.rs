//! serde support through the canonical byte encodings.
//!
//! Points use the compressed form; every decode runs the same validation as
//! the byte-level API.

use alloc::vec::Vec;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Fp, G1Affine, G2Affine, Gt, Scalar};

macro_rules! impl_serde_via_bytes {
    ($t:ident, $name:literal) => {
        impl Serialize for $t {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_bytes(&bls381_api::Serialize::to_bytes(self))
            }
        }

        impl<'de> Deserialize<'de> for $t {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let bytes: Vec<u8> = Deserialize::deserialize(deserializer)?;
                <$t as bls381_api::Serialize>::from_bytes(&bytes)
                    .map_err(|_| DeError::custom(concat!("invalid ", $name)))
            }
        }
    };
}

impl_serde_via_bytes!(Fp, "Fp element");
impl_serde_via_bytes!(Scalar, "scalar");
impl_serde_via_bytes!(G1Affine, "G1 point");
impl_serde_via_bytes!(G2Affine, "G2 point");
impl_serde_via_bytes!(Gt, "Gt element");
