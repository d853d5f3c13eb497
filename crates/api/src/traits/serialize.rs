//! Traits for byte serialization of curve and field elements.

use crate::Result;
use alloc::vec::Vec;
use zeroize::Zeroizing;

/// A trait for public types that can be serialized to and from bytes.
pub trait Serialize: Sized {
    /// Creates an object from a byte slice, rejecting any non-canonical input.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to its canonical byte encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// A trait for secret types, such as private scalars, that can be serialized.
pub trait SerializeSecret: Sized {
    /// Creates an object from a byte slice. Input should be zeroized after use.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// Converts the object to a byte vector that is zeroized on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
