//! The IND-CCA2 key encapsulation mechanism: Fujisaki–Okamoto transform over
//! the inner PKE, with re-encryption and implicit rejection.
//!
//! Decapsulation never reports failure: a ciphertext that does not re-encrypt
//! to itself yields the pseudorandom key `J(z ‖ c)` instead, selected with a
//! constant-time compare and move.

use zeroize::Zeroize;

use crate::ct;
use crate::hash;
use crate::params::{ByteStorage, ParameterSet, SSBYTES, SYMBYTES};
use crate::pke;
use crate::types::{Ciphertext, PublicKey, SecretKey, SharedSecret};

/// Largest ciphertext across the three parameter sets (Kyber-1024).
const MAX_CT: usize = 1568;

/// Deterministic key generation from the seeds d (PKE keypair) and z
/// (implicit-rejection secret).
///
/// The decapsulation key layout is `dk_pke ‖ ek ‖ H(ek) ‖ z`.
#[must_use]
pub fn keypair_derand<P: ParameterSet>(
    d: &[u8; SYMBYTES],
    z: &[u8; SYMBYTES],
) -> (PublicKey<P>, SecretKey<P>) {
    let mut ek = P::EkArray::new_zeroed();
    let mut dk = P::DkArray::new_zeroed();

    {
        let ek_mut = ek.as_mut_slice();
        let dk_mut = dk.as_mut_slice();

        pke::indcpa_keypair_derand::<P>(ek_mut, &mut dk_mut[..P::PKE_SK_BYTES], d);

        dk_mut[P::PKE_SK_BYTES..P::PKE_SK_BYTES + P::EK_BYTES].copy_from_slice(ek_mut);

        let h_ek = hash::hash_h(ek_mut);
        dk_mut[P::DK_BYTES - 2 * SYMBYTES..P::DK_BYTES - SYMBYTES].copy_from_slice(&h_ek);
        dk_mut[P::DK_BYTES - SYMBYTES..].copy_from_slice(z);
    }

    (PublicKey::from_array(ek), SecretKey::from_bytes(dk))
}

/// Key generation with caller-supplied randomness.
pub fn keypair<P: ParameterSet>(
    rng: &mut impl rand_core::CryptoRng,
) -> (PublicKey<P>, SecretKey<P>) {
    let mut d = [0u8; SYMBYTES];
    let mut z = [0u8; SYMBYTES];
    rng.fill_bytes(&mut d);
    rng.fill_bytes(&mut z);
    let pair = keypair_derand::<P>(&d, &z);
    d.zeroize();
    z.zeroize();
    pair
}

/// Deterministic encapsulation with a caller-supplied uniform 32-byte m.
///
/// `(K̄, r) := G(m ‖ H(ek))`; the ciphertext encrypts m under r and K̄ is
/// the shared secret.
#[must_use]
pub fn encapsulate_derand<P: ParameterSet>(
    pk: &PublicKey<P>,
    m: &[u8; SYMBYTES],
) -> (Ciphertext<P>, SharedSecret) {
    let mut ct = P::CtArray::new_zeroed();

    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(m);
    buf[SYMBYTES..].copy_from_slice(&hash::hash_h(pk.as_bytes()));

    let mut kr = hash::hash_g(&buf);
    let mut r: [u8; SYMBYTES] = kr[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");

    pke::indcpa_enc::<P>(ct.as_mut_slice(), m, pk.as_bytes(), &r);

    let mut ss = [0u8; SSBYTES];
    ss.copy_from_slice(&kr[..SYMBYTES]);

    buf.zeroize();
    kr.zeroize();
    r.zeroize();

    (Ciphertext::from_bytes(ct), SharedSecret::new(ss))
}

/// Encapsulation with caller-supplied randomness for m.
pub fn encapsulate<P: ParameterSet>(
    pk: &PublicKey<P>,
    rng: &mut impl rand_core::CryptoRng,
) -> (Ciphertext<P>, SharedSecret) {
    let mut m = [0u8; SYMBYTES];
    rng.fill_bytes(&mut m);
    let out = encapsulate_derand::<P>(pk, &m);
    m.zeroize();
    out
}

/// Decapsulation with implicit rejection.
///
/// Recovers m′, re-derives (K̄′, r′), re-encrypts, and returns K̄′ when the
/// re-encryption matches the ciphertext — `J(z ‖ c)` otherwise. The choice
/// is made with a constant-time compare and a masked move; no secret ever
/// steers a branch.
#[must_use]
pub fn decapsulate<P: ParameterSet>(ct: &Ciphertext<P>, sk: &SecretKey<P>) -> SharedSecret {
    let dk = sk.as_bytes();
    let ct_bytes = ct.as_bytes();

    // dk = (dk_pke || ek || H(ek) || z)
    let dk_pke = &dk[..P::PKE_SK_BYTES];
    let ek = &dk[P::PKE_SK_BYTES..P::PKE_SK_BYTES + P::EK_BYTES];
    let h_ek = &dk[P::DK_BYTES - 2 * SYMBYTES..P::DK_BYTES - SYMBYTES];
    let z: &[u8; SYMBYTES] = dk[P::DK_BYTES - SYMBYTES..]
        .try_into()
        .expect("infallible: dk layout guarantees SYMBYTES");

    let mut m_prime = [0u8; SYMBYTES];
    pke::indcpa_dec::<P>(&mut m_prime, ct_bytes, dk_pke);

    let mut buf = [0u8; 2 * SYMBYTES];
    buf[..SYMBYTES].copy_from_slice(&m_prime);
    buf[SYMBYTES..].copy_from_slice(h_ek);

    // (K̄' || r') = G(m' || H(ek))
    let mut kr = hash::hash_g(&buf);
    let mut r_prime: [u8; SYMBYTES] = kr[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");

    let mut cmp = [0u8; MAX_CT];
    pke::indcpa_enc::<P>(&mut cmp[..P::CT_BYTES], &m_prime, ek, &r_prime);

    let reject = ct::diff_mask(ct_bytes, &cmp[..P::CT_BYTES]);

    // Start from the rejection value and take K̄' only when the
    // re-encryption matched.
    let mut ss = hash::rkprf(z, ct_bytes);
    ct::select(&mut ss, &kr[..SSBYTES], !reject);

    m_prime.zeroize();
    buf.zeroize();
    kr.zeroize();
    r_prime.zeroize();
    cmp.zeroize();

    SharedSecret::new(ss)
}
