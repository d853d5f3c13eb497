//! Message expansion: `expand_message_xmd` over SHA-256 and
//! `expand_message_xof` over SHAKE256.

use alloc::vec::Vec;

use sha2::{Digest, Sha256};
use sha3::Shake256;

use crate::error::{Error, Result};

/// Prefix hashed in front of domain separation tags longer than 255 bytes
const OVERSIZE_DST_PREFIX: &[u8] = b"H2C-OVERSIZE-DST-";

/// Longest DST used verbatim
const MAX_DST_LEN: usize = 255;

/// Longest output representable in the two-byte length prefix
const MAX_OUTPUT_LEN: usize = 65535;

/// SHA-256 output and block sizes
const XMD_B_IN_BYTES: usize = 32;
const XMD_R_IN_BYTES: usize = 64;

/// Security level k of the SHAKE256 expander, in bits
const XOF_SECURITY_BITS: usize = 256;

/// Length of a hashed oversize DST: ⌈2k / 8⌉
const XOF_OVERSIZE_DST_LEN: usize = (2 * XOF_SECURITY_BITS + 7) / 8;

/// Expands a message and a domain separation tag into uniform bytes.
pub trait ExpandMessage {
    /// Produce `len_in_bytes` pseudo-random bytes bound to `msg` and `dst`.
    fn expand_message(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>;
}

/// `expand_message_xmd` with SHA-256
#[derive(Debug, Clone, Copy)]
pub struct ExpandMsgXmd;

/// `expand_message_xof` with SHAKE256
#[derive(Debug, Clone, Copy)]
pub struct ExpandMsgXof;

impl ExpandMessage for ExpandMsgXmd {
    fn expand_message(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
        expand_message_xmd(msg, dst, len_in_bytes)
    }
}

impl ExpandMessage for ExpandMsgXof {
    fn expand_message(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
        expand_message_xof(msg, dst, len_in_bytes)
    }
}

fn check_output_len(len_in_bytes: usize) -> Result<()> {
    if len_in_bytes == 0 || len_in_bytes > MAX_OUTPUT_LEN {
        log::debug!("expand_message: output length {} out of range", len_in_bytes);
        return Err(Error::param("len_in_bytes", "output length must be in 1..=65535"));
    }
    Ok(())
}

/// Stores a DST, hashing it down first when it is longer than 255 bytes.
struct DstPrime {
    bytes: [u8; MAX_DST_LEN],
    len: usize,
}

impl DstPrime {
    fn new(dst: &[u8], oversize: impl FnOnce(&mut [u8; MAX_DST_LEN]) -> usize) -> Self {
        let mut bytes = [0u8; MAX_DST_LEN];
        let len = if dst.len() > MAX_DST_LEN {
            oversize(&mut bytes)
        } else {
            bytes[..dst.len()].copy_from_slice(dst);
            dst.len()
        };
        DstPrime { bytes, len }
    }

    fn tag(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// I2OSP(len(DST), 1)
    fn len_byte(&self) -> [u8; 1] {
        [self.len as u8]
    }
}

/// `expand_message_xmd` instantiated with SHA-256.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
    check_output_len(len_in_bytes)?;
    let ell = (len_in_bytes + XMD_B_IN_BYTES - 1) / XMD_B_IN_BYTES;
    if ell > 255 {
        log::debug!("expand_message_xmd: {} blocks requested", ell);
        return Err(Error::param("len_in_bytes", "more than 255 hash blocks requested"));
    }

    let dst = DstPrime::new(dst, |out| {
        let mut h = Sha256::new();
        h.update(OVERSIZE_DST_PREFIX);
        h.update(dst);
        out[..XMD_B_IN_BYTES].copy_from_slice(&h.finalize());
        XMD_B_IN_BYTES
    });

    // b_0 = H(Z_pad ‖ msg ‖ l_i_b_str ‖ 0 ‖ DST')
    let mut h = Sha256::new();
    h.update([0u8; XMD_R_IN_BYTES]);
    h.update(msg);
    h.update((len_in_bytes as u16).to_be_bytes());
    h.update([0u8]);
    h.update(dst.tag());
    h.update(dst.len_byte());
    let b_0 = h.finalize();

    // b_1 = H(b_0 ‖ 1 ‖ DST')
    let mut h = Sha256::new();
    h.update(&b_0);
    h.update([1u8]);
    h.update(dst.tag());
    h.update(dst.len_byte());
    let mut b_i = h.finalize();

    let mut uniform_bytes = Vec::with_capacity(ell * XMD_B_IN_BYTES);
    uniform_bytes.extend_from_slice(&b_i);

    // b_i = H((b_0 ⊕ b_(i−1)) ‖ i ‖ DST')
    for i in 2..=ell {
        let mut xored = [0u8; XMD_B_IN_BYTES];
        for (x, (a, b)) in xored.iter_mut().zip(b_0.iter().zip(b_i.iter())) {
            *x = a ^ b;
        }

        let mut h = Sha256::new();
        h.update(xored);
        h.update([i as u8]);
        h.update(dst.tag());
        h.update(dst.len_byte());
        b_i = h.finalize();
        uniform_bytes.extend_from_slice(&b_i);
    }

    uniform_bytes.truncate(len_in_bytes);
    Ok(uniform_bytes)
}

/// `expand_message_xof` instantiated with SHAKE256.
pub fn expand_message_xof(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>> {
    use sha3::digest::{ExtendableOutput, Update, XofReader};

    check_output_len(len_in_bytes)?;

    let dst = DstPrime::new(dst, |out| {
        let mut h = Shake256::default();
        Update::update(&mut h, OVERSIZE_DST_PREFIX);
        Update::update(&mut h, dst);
        h.finalize_xof().read(&mut out[..XOF_OVERSIZE_DST_LEN]);
        XOF_OVERSIZE_DST_LEN
    });

    // msg ‖ I2OSP(len_in_bytes, 2) ‖ DST ‖ I2OSP(len(DST), 1)
    let mut h = Shake256::default();
    Update::update(&mut h, msg);
    Update::update(&mut h, &(len_in_bytes as u16).to_be_bytes());
    Update::update(&mut h, dst.tag());
    Update::update(&mut h, &dst.len_byte());

    let mut uniform_bytes = alloc::vec![0u8; len_in_bytes];
    h.finalize_xof().read(&mut uniform_bytes);
    Ok(uniform_bytes)
}
