//! Ring elements of `R_q = F_q[X]/(X²⁵⁶ + 1)`, with the basis tagged in the
//! type.
//!
//! [`Polynomial`] holds coefficients in the standard basis; [`NttPolynomial`]
//! holds evaluations on the 256 primitive roots. The two share the same
//! storage but are distinct types: the forward transform consumes one and
//! produces the other, so mixing domains is a compile-time error rather than
//! a silent algebra bug.

use core::ops;

use zeroize::Zeroize;

use super::{ntt, pack, sample::CbdWidth};
use crate::field;
use crate::params::{N, SYMBYTES};

/// Polynomial in the standard (coefficient) basis. Coefficients canonical.
#[derive(Clone, Copy, Zeroize)]
pub struct Polynomial(pub(crate) [u16; N]);

/// Polynomial in the NTT (evaluation, bit-reversed) basis.
#[derive(Clone, Copy, Zeroize)]
pub struct NttPolynomial(pub(crate) [u16; N]);

impl Polynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Consuming forward NTT transform.
    #[must_use]
    pub fn ntt(mut self) -> NttPolynomial {
        ntt::forward_ntt(&mut self.0);
        NttPolynomial(self.0)
    }

    /// Compress to `d` bits (d = 4 or 5) and write to buffer.
    pub fn compress(&self, r: &mut [u8], d: u32) {
        match d {
            4 => pack::poly_compress_d4(r, &self.0),
            5 => pack::poly_compress_d5(r, &self.0),
            _ => unreachable!("unsupported compression width d={d}"),
        }
    }

    /// Decompress from a buffer of `d`-bit values (d = 4 or 5).
    #[must_use]
    pub fn decompress(a: &[u8], d: u32) -> Self {
        let mut p = Self::zero();
        match d {
            4 => pack::poly_decompress_d4(&mut p.0, a),
            5 => pack::poly_decompress_d5(&mut p.0, a),
            _ => unreachable!("unsupported compression width d={d}"),
        }
        p
    }

    /// Decode a 32-byte message into a polynomial (1 bit per coefficient).
    #[must_use]
    pub fn from_message(msg: &[u8; SYMBYTES]) -> Self {
        let mut p = Self::zero();
        pack::poly_frommsg(&mut p.0, msg);
        p
    }

    /// Encode the polynomial as a 32-byte message.
    #[must_use]
    pub fn to_message(&self) -> [u8; SYMBYTES] {
        let mut msg = [0u8; SYMBYTES];
        pack::poly_tomsg(&mut msg, &self.0);
        msg
    }

    /// Sample a noise polynomial from 64·η PRF bytes.
    #[must_use]
    pub fn sample_cbd<Eta: CbdWidth>(buf: &[u8]) -> Self {
        let mut p = Self::zero();
        Eta::sample(&mut p.0, buf);
        p
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }
}

impl NttPolynomial {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u16; N])
    }

    /// Consuming inverse NTT transform.
    #[must_use]
    pub fn ntt_inverse(mut self) -> Polynomial {
        ntt::inverse_ntt(&mut self.0);
        Polynomial(self.0)
    }

    /// Pointwise multiplication: 128 degree-1 products mod X² − γᵢ.
    #[must_use]
    pub fn basemul(&self, other: &Self) -> Self {
        let mut r = Self::zero();
        for i in 0..N / 2 {
            ntt::basemul(
                &mut r.0[2 * i..2 * i + 2],
                &self.0[2 * i..2 * i + 2],
                &other.0[2 * i..2 * i + 2],
                ntt::GAMMAS[i],
            );
        }
        r
    }

    /// Serialize to 384 bytes (12-bit packing).
    pub fn to_bytes(&self, r: &mut [u8]) {
        pack::poly_tobytes(r, &self.0);
    }

    /// Deserialize from 384 bytes (12-bit unpacking, reduced on read).
    #[must_use]
    pub fn from_bytes(a: &[u8]) -> Self {
        let mut p = Self::zero();
        pack::poly_frombytes(&mut p.0, a);
        p
    }

    #[must_use]
    pub const fn coeffs(&self) -> &[u16; N] {
        &self.0
    }

    #[must_use]
    pub fn coeffs_mut(&mut self) -> &mut [u16; N] {
        &mut self.0
    }
}

impl Default for Polynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl Default for NttPolynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl core::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Polynomial")
            .field("coeffs[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

impl core::fmt::Debug for NttPolynomial {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NttPolynomial")
            .field("coeffs[..4]", &&self.0[..4])
            .finish_non_exhaustive()
    }
}

impl<'b> ops::Add<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn add(self, rhs: &'b Polynomial) -> Polynomial {
        let mut r = Polynomial::zero();
        for i in 0..N {
            r.0[i] = field::add(self.0[i], rhs.0[i]);
        }
        r
    }
}

impl<'b> ops::Sub<&'b Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline]
    fn sub(self, rhs: &'b Polynomial) -> Polynomial {
        let mut r = Polynomial::zero();
        for i in 0..N {
            r.0[i] = field::sub(self.0[i], rhs.0[i]);
        }
        r
    }
}

impl ops::AddAssign<&Self> for Polynomial {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..N {
            self.0[i] = field::add(self.0[i], rhs.0[i]);
        }
    }
}

impl ops::AddAssign<&Self> for NttPolynomial {
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..N {
            self.0[i] = field::add(self.0[i], rhs.0[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Q;
    use crate::params::POLYBYTES;

    #[test]
    fn add_sub_inverse() {
        let mut a = Polynomial::zero();
        let mut b = Polynomial::zero();
        for i in 0..N {
            a.0[i] = (i % Q as usize) as u16;
            b.0[i] = ((N - i) % Q as usize) as u16;
        }
        let sum = &a + &b;
        let recovered = &sum - &b;
        assert_eq!(a.0, recovered.0);
    }

    #[test]
    fn ntt_roundtrip_through_types() {
        let mut p = Polynomial::zero();
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = (i % 13) as u16;
        }
        let original = p.0;
        let recovered = p.ntt().ntt_inverse();
        assert_eq!(recovered.0, original);
    }

    #[test]
    fn tobytes_frombytes_roundtrip() {
        let mut p = NttPolynomial::zero();
        for i in 0..N {
            p.0[i] = ((i * 13) % Q as usize) as u16;
        }
        let mut buf = [0u8; POLYBYTES];
        p.to_bytes(&mut buf);
        let q = NttPolynomial::from_bytes(&buf);
        assert_eq!(p.0, q.0);
    }

    #[test]
    fn msg_roundtrip() {
        let msg: [u8; SYMBYTES] = core::array::from_fn(|i| (i * 37) as u8);
        let p = Polynomial::from_message(&msg);
        assert_eq!(p.to_message(), msg);
    }

    #[test]
    fn basemul_with_one_is_identity() {
        // The multiplicative identity in the NTT domain is NTT(1): the
        // constant polynomial 1 evaluates to 1 everywhere.
        let mut one = Polynomial::zero();
        one.0[0] = 1;
        let one_hat = one.ntt();

        let mut p = Polynomial::zero();
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = ((i * 31 + 2) % Q as usize) as u16;
        }
        let p_hat = p.ntt();
        let prod = p_hat.basemul(&one_hat);
        assert_eq!(prod.ntt_inverse().0, p.0);
    }
}
