//! Traits shared by the element types of the library

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
