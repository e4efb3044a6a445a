//! Hash and extendable-output function (XOF) adapters.
//!
//! Wraps the SHA-3 family as the KEM uses it:
//!
//! | Role  | Primitive | Function       |
//! |-------|-----------|----------------|
//! | **H** | SHA3-256  | [`hash_h`]     |
//! | **G** | SHA3-512  | [`hash_g`]     |
//! | **PRF** | SHAKE-256 | [`prf`]      |
//! | **XOF** | SHAKE-128 | [`xof_absorb`] |
//! | **J** | SHAKE-256 | [`rkprf`]      |
//!
//! Inputs are plain concatenations with no length prefix.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{Digest, Sha3_256, Sha3_512, Shake128, Shake256};

use crate::params::{SSBYTES, SYMBYTES};

/// H(input) = SHA3-256(input) → 32 bytes.
#[inline]
#[must_use]
pub fn hash_h(input: &[u8]) -> [u8; SYMBYTES] {
    Sha3_256::digest(input).into()
}

/// G(input) = SHA3-512(input) → 64 bytes, split 32 + 32 by callers.
#[inline]
#[must_use]
pub fn hash_g(input: &[u8]) -> [u8; 2 * SYMBYTES] {
    Sha3_512::digest(input).into()
}

/// PRF(σ, nonce) = SHAKE-256(σ ‖ nonce), squeezed to fill `output`.
pub fn prf(seed: &[u8; SYMBYTES], nonce: u8, output: &mut [u8]) {
    let mut h = Shake256::default();
    h.update(seed);
    h.update(&[nonce]);
    h.finalize_xof().read(output);
}

/// XOF(ρ, j, i) = SHAKE-128(ρ ‖ j ‖ i), returned as a squeezable reader.
///
/// The column index j is absorbed before the row index i.
#[must_use]
pub fn xof_absorb(seed: &[u8; SYMBYTES], j: u8, i: u8) -> impl XofReader {
    let mut h = Shake128::default();
    h.update(seed);
    h.update(&[j, i]);
    h.finalize_xof()
}

/// J(z, ct) = SHAKE-256(z ‖ ct) → 32 bytes, the implicit-rejection PRF.
#[must_use]
pub fn rkprf(z: &[u8; SYMBYTES], ct: &[u8]) -> [u8; SSBYTES] {
    let mut h = Shake256::default();
    h.update(z);
    h.update(ct);
    let mut out = [0u8; SSBYTES];
    h.finalize_xof().read(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths() {
        assert_eq!(hash_h(b"abc").len(), 32);
        assert_eq!(hash_g(b"abc").len(), 64);
    }

    #[test]
    fn prf_nonce_separates_streams() {
        let seed = [9u8; SYMBYTES];
        let mut a = [0u8; 64];
        let mut b = [0u8; 64];
        prf(&seed, 0, &mut a);
        prf(&seed, 1, &mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn rkprf_depends_on_both_inputs() {
        let z = [1u8; SYMBYTES];
        let z2 = [2u8; SYMBYTES];
        let ct = [3u8; 16];
        let ct2 = [4u8; 16];
        assert_ne!(rkprf(&z, &ct), rkprf(&z2, &ct));
        assert_ne!(rkprf(&z, &ct), rkprf(&z, &ct2));
    }
}
