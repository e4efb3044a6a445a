//! The inner IND-CPA public-key encryption scheme.
//!
//! Not exposed directly; called by [`crate::kem`]. Byte layouts:
//! `pk = Encode₁₂(t̂) ‖ ρ`, `sk = Encode₁₂(ŝ)`,
//! `ct = Encode_du(Compress_du(u)) ‖ Encode_dv(Compress_dv(v))`.

use zeroize::Zeroize;

use crate::hash;
use crate::math::poly::Polynomial;
use crate::math::polyvec::{NttMatrix, NttVector, Vector};
use crate::math::sample::{self, CbdWidth};
use crate::params::{ParameterSet, SYMBYTES};

/// Sample the K×K public matrix Â from seed ρ, directly in the NTT domain.
///
/// Element (i, j) rejection-samples `XOF(ρ ‖ j ‖ i)`; with `transposed` the
/// indices swap, producing Âᵀ for encryption.
fn gen_matrix<const K: usize>(seed: &[u8; SYMBYTES], transposed: bool) -> NttMatrix<K> {
    let mut a = NttMatrix::<K>::zero();
    for (i, row) in a.rows_mut().iter_mut().enumerate() {
        for (j, poly) in row.polys.iter_mut().enumerate() {
            let (x, y) = if transposed {
                (i as u8, j as u8)
            } else {
                (j as u8, i as u8)
            };
            let mut xof = hash::xof_absorb(seed, x, y);
            sample::rej_uniform(poly.coeffs_mut(), &mut xof);
        }
    }
    a
}

/// Sample one noise polynomial from `PRF(seed, nonce)` and bump the nonce.
fn sample_noise_poly<Eta: CbdWidth>(seed: &[u8; SYMBYTES], nonce: &mut u8) -> Polynomial {
    let mut buf = [0u8; 192]; // max CBD buffer: eta = 3 -> 192 bytes
    hash::prf(seed, *nonce, &mut buf[..Eta::BUF_BYTES]);
    *nonce += 1;
    let p = Polynomial::sample_cbd::<Eta>(&buf[..Eta::BUF_BYTES]);
    buf.zeroize();
    p
}

/// Sample a rank-K noise vector, consuming K consecutive nonces.
fn sample_noise_vec<Eta: CbdWidth, const K: usize>(
    seed: &[u8; SYMBYTES],
    nonce: &mut u8,
) -> Vector<K> {
    let mut v = Vector::<K>::zero();
    for p in v.polys_mut() {
        *p = sample_noise_poly::<Eta>(seed, nonce);
    }
    v
}

// ---------------------------------------------------------------------------
// IND-CPA key generation
// ---------------------------------------------------------------------------

/// Deterministic IND-CPA keypair from the 32-byte seed d.
///
/// Writes `Encode₁₂(t̂) ‖ ρ` to `pk_bytes` and `Encode₁₂(ŝ)` to `sk_bytes`.
pub(crate) fn indcpa_keypair_derand<P: ParameterSet>(
    pk_bytes: &mut [u8],
    sk_bytes: &mut [u8],
    d: &[u8; SYMBYTES],
) {
    match P::K {
        2 => indcpa_keypair_inner::<P, 2>(pk_bytes, sk_bytes, d),
        3 => indcpa_keypair_inner::<P, 3>(pk_bytes, sk_bytes, d),
        4 => indcpa_keypair_inner::<P, 4>(pk_bytes, sk_bytes, d),
        _ => unreachable!(),
    }
}

fn indcpa_keypair_inner<P: ParameterSet, const K: usize>(
    pk_bytes: &mut [u8],
    sk_bytes: &mut [u8],
    d: &[u8; SYMBYTES],
) {
    // G(d) -> (rho || sigma)
    let mut g = hash::hash_g(d);
    let rho: [u8; SYMBYTES] = g[..SYMBYTES]
        .try_into()
        .expect("infallible: 64-byte hash split");
    let mut sigma: [u8; SYMBYTES] = g[SYMBYTES..]
        .try_into()
        .expect("infallible: 64-byte hash split");

    let a = gen_matrix::<K>(&rho, false);

    let mut nonce = 0u8;
    let s = sample_noise_vec::<P::Eta1, K>(&sigma, &mut nonce);
    let e = sample_noise_vec::<P::Eta1, K>(&sigma, &mut nonce);

    let mut s_hat = s.ntt();
    let mut e_hat = e.ntt();

    // t = A * s + e (all NTT domain)
    let mut t_hat = a.mul_vec(&s_hat);
    t_hat += &e_hat;

    t_hat.to_bytes(&mut pk_bytes[..P::POLYVEC_BYTES]);
    pk_bytes[P::POLYVEC_BYTES..P::EK_BYTES].copy_from_slice(&rho);
    s_hat.to_bytes(&mut sk_bytes[..P::PKE_SK_BYTES]);

    s_hat.zeroize();
    e_hat.zeroize();
    sigma.zeroize();
    g.zeroize();
}

// ---------------------------------------------------------------------------
// IND-CPA encryption
// ---------------------------------------------------------------------------

/// Encrypt the 32-byte message m under `pk_bytes` with randomness `coins`.
pub(crate) fn indcpa_enc<P: ParameterSet>(
    ct_bytes: &mut [u8],
    m: &[u8; SYMBYTES],
    pk_bytes: &[u8],
    coins: &[u8; SYMBYTES],
) {
    match P::K {
        2 => indcpa_enc_inner::<P, 2>(ct_bytes, m, pk_bytes, coins),
        3 => indcpa_enc_inner::<P, 3>(ct_bytes, m, pk_bytes, coins),
        4 => indcpa_enc_inner::<P, 4>(ct_bytes, m, pk_bytes, coins),
        _ => unreachable!(),
    }
}

fn indcpa_enc_inner<P: ParameterSet, const K: usize>(
    ct_bytes: &mut [u8],
    m: &[u8; SYMBYTES],
    pk_bytes: &[u8],
    coins: &[u8; SYMBYTES],
) {
    let t_hat = NttVector::<K>::from_bytes(&pk_bytes[..P::POLYVEC_BYTES]);
    let rho: [u8; SYMBYTES] = pk_bytes[P::POLYVEC_BYTES..P::EK_BYTES]
        .try_into()
        .expect("infallible: pk layout guarantees SYMBYTES");

    let a_t = gen_matrix::<K>(&rho, true);

    let mut nonce = 0u8;
    let r = sample_noise_vec::<P::Eta1, K>(coins, &mut nonce);
    let mut e1 = sample_noise_vec::<P::Eta2, K>(coins, &mut nonce);
    let mut e2 = sample_noise_poly::<P::Eta2>(coins, &mut nonce);

    let mut r_hat = r.ntt();

    // u = invNTT(A^T * r) + e1
    let mut u = a_t.mul_vec(&r_hat).ntt_inverse();
    u += &e1;

    // v = invNTT(t^T * r) + e2 + Decompress_1(m)
    let mut v = t_hat.inner_product(&r_hat).ntt_inverse();
    v += &e2;
    let mut m_poly = Polynomial::from_message(m);
    v += &m_poly;

    u.compress(&mut ct_bytes[..P::POLYVEC_COMPRESSED_BYTES], P::DU);
    v.compress(
        &mut ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::CT_BYTES],
        P::DV,
    );

    r_hat.zeroize();
    e1.zeroize();
    e2.zeroize();
    m_poly.zeroize();
    v.zeroize();
}

// ---------------------------------------------------------------------------
// IND-CPA decryption
// ---------------------------------------------------------------------------

/// Decrypt `ct_bytes` with the inner secret key, producing the 32-byte m.
pub(crate) fn indcpa_dec<P: ParameterSet>(
    m: &mut [u8; SYMBYTES],
    ct_bytes: &[u8],
    sk_bytes: &[u8],
) {
    match P::K {
        2 => indcpa_dec_inner::<P, 2>(m, ct_bytes, sk_bytes),
        3 => indcpa_dec_inner::<P, 3>(m, ct_bytes, sk_bytes),
        4 => indcpa_dec_inner::<P, 4>(m, ct_bytes, sk_bytes),
        _ => unreachable!(),
    }
}

fn indcpa_dec_inner<P: ParameterSet, const K: usize>(
    m: &mut [u8; SYMBYTES],
    ct_bytes: &[u8],
    sk_bytes: &[u8],
) {
    let u = Vector::<K>::decompress(&ct_bytes[..P::POLYVEC_COMPRESSED_BYTES], P::DU);
    let v = Polynomial::decompress(
        &ct_bytes[P::POLYVEC_COMPRESSED_BYTES..P::CT_BYTES],
        P::DV,
    );
    let mut s_hat = NttVector::<K>::from_bytes(&sk_bytes[..P::PKE_SK_BYTES]);

    // w = v - invNTT(s^T * NTT(u))
    let mut su = s_hat.inner_product(&u.ntt()).ntt_inverse();
    let mut w = &v - &su;
    *m = w.to_message();

    s_hat.zeroize();
    su.zeroize();
    w.zeroize();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Kyber512, Kyber768, Kyber1024};

    fn indcpa_roundtrip<P: ParameterSet>() {
        let seed = [42u8; SYMBYTES];
        let mut pk = vec![0u8; P::EK_BYTES];
        let mut sk = vec![0u8; P::PKE_SK_BYTES];
        indcpa_keypair_derand::<P>(&mut pk, &mut sk, &seed);

        let msg = [0xAB; SYMBYTES];
        let coins = [7u8; SYMBYTES];
        let mut ct = vec![0u8; P::CT_BYTES];
        indcpa_enc::<P>(&mut ct, &msg, &pk, &coins);

        let mut recovered = [0u8; SYMBYTES];
        indcpa_dec::<P>(&mut recovered, &ct, &sk);
        assert_eq!(msg, recovered, "IND-CPA roundtrip failed");
    }

    #[test]
    fn indcpa_roundtrip_512() {
        indcpa_roundtrip::<Kyber512>();
    }

    #[test]
    fn indcpa_roundtrip_768() {
        indcpa_roundtrip::<Kyber768>();
    }

    #[test]
    fn indcpa_roundtrip_1024() {
        indcpa_roundtrip::<Kyber1024>();
    }

    #[test]
    fn matrix_transpose_swaps_off_diagonal() {
        let seed = [3u8; SYMBYTES];
        let a = gen_matrix::<2>(&seed, false);
        let a_t = gen_matrix::<2>(&seed, true);
        assert_eq!(a.rows[0].polys[1].coeffs(), a_t.rows[1].polys[0].coeffs());
        assert_eq!(a.rows[1].polys[0].coeffs(), a_t.rows[0].polys[1].coeffs());
        assert_eq!(a.rows[0].polys[0].coeffs(), a_t.rows[0].polys[0].coeffs());
    }
}
