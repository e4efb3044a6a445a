//! Vectors and matrices of ring elements, const-generic over the rank K.
//!
//! The basis tagging carries over from the polynomial types: [`Vector`]
//! holds standard-basis polynomials, [`NttVector`] evaluation-basis ones,
//! and [`NttMatrix`] is the K×K public matrix Â (always NTT-domain).

use core::ops;

use zeroize::Zeroize;

use super::poly::{NttPolynomial, Polynomial};
use crate::params::POLYBYTES;

/// A vector of `K` polynomials in the standard basis (K = 2, 3, or 4).
#[derive(Clone, Zeroize)]
pub struct Vector<const K: usize> {
    pub(crate) polys: [Polynomial; K],
}

/// A vector of `K` polynomials in the NTT basis.
#[derive(Clone, Zeroize)]
pub struct NttVector<const K: usize> {
    pub(crate) polys: [NttPolynomial; K],
}

/// K × K matrix of NTT-domain polynomials.
pub struct NttMatrix<const K: usize> {
    pub(crate) rows: [NttVector<K>; K],
}

impl<const K: usize> Vector<K> {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            polys: [Polynomial::zero(); K],
        }
    }

    /// Forward NTT on every element.
    #[must_use]
    pub fn ntt(self) -> NttVector<K> {
        NttVector {
            polys: self.polys.map(Polynomial::ntt),
        }
    }

    /// Compress every element with `d_u` bits and pack contiguously.
    pub fn compress(&self, r: &mut [u8], d_u: u32) {
        let bytes_per_poly = 32 * d_u as usize;
        for (i, p) in self.polys.iter().enumerate() {
            let slice = &mut r[i * bytes_per_poly..(i + 1) * bytes_per_poly];
            match d_u {
                10 => super::pack::poly_compress_d10(slice, p.coeffs()),
                11 => super::pack::poly_compress_d11(slice, p.coeffs()),
                _ => unreachable!("unsupported vector compression width d_u={d_u}"),
            }
        }
    }

    /// Decompress a packed vector of `d_u`-bit coefficients.
    #[must_use]
    pub fn decompress(a: &[u8], d_u: u32) -> Self {
        let bytes_per_poly = 32 * d_u as usize;
        let mut v = Self::zero();
        for (i, p) in v.polys.iter_mut().enumerate() {
            let slice = &a[i * bytes_per_poly..(i + 1) * bytes_per_poly];
            match d_u {
                10 => super::pack::poly_decompress_d10(&mut p.0, slice),
                11 => super::pack::poly_decompress_d11(&mut p.0, slice),
                _ => unreachable!("unsupported vector compression width d_u={d_u}"),
            }
        }
        v
    }

    #[must_use]
    pub const fn polys(&self) -> &[Polynomial; K] {
        &self.polys
    }

    #[must_use]
    pub fn polys_mut(&mut self) -> &mut [Polynomial; K] {
        &mut self.polys
    }
}

impl<const K: usize> NttVector<K> {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            polys: [NttPolynomial::zero(); K],
        }
    }

    /// Inverse NTT on every element.
    #[must_use]
    pub fn ntt_inverse(self) -> Vector<K> {
        Vector {
            polys: self.polys.map(NttPolynomial::ntt_inverse),
        }
    }

    /// Inner product `Σᵢ self[i] · other[i]` in the NTT domain.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> NttPolynomial {
        let mut acc = self.polys[0].basemul(&other.polys[0]);
        for i in 1..K {
            acc += &self.polys[i].basemul(&other.polys[i]);
        }
        acc
    }

    /// Serialize to `K × 384` bytes (12-bit packing).
    pub fn to_bytes(&self, r: &mut [u8]) {
        for (i, p) in self.polys.iter().enumerate() {
            p.to_bytes(&mut r[i * POLYBYTES..(i + 1) * POLYBYTES]);
        }
    }

    /// Deserialize from `K × 384` bytes.
    #[must_use]
    pub fn from_bytes(a: &[u8]) -> Self {
        let mut v = Self::zero();
        for (i, p) in v.polys.iter_mut().enumerate() {
            *p = NttPolynomial::from_bytes(&a[i * POLYBYTES..(i + 1) * POLYBYTES]);
        }
        v
    }

    #[must_use]
    pub const fn polys(&self) -> &[NttPolynomial; K] {
        &self.polys
    }
}

impl<const K: usize> NttMatrix<K> {
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self {
            rows: core::array::from_fn(|_| NttVector::zero()),
        }
    }

    /// Matrix-vector product `Â · v̂`, row by row.
    #[must_use]
    pub fn mul_vec(&self, v: &NttVector<K>) -> NttVector<K> {
        let mut result = NttVector::zero();
        for (r_poly, a_row) in result.polys.iter_mut().zip(self.rows.iter()) {
            *r_poly = a_row.inner_product(v);
        }
        result
    }

    #[must_use]
    pub fn rows_mut(&mut self) -> &mut [NttVector<K>; K] {
        &mut self.rows
    }
}

impl<'b, const K: usize> ops::Add<&'b Vector<K>> for &Vector<K> {
    type Output = Vector<K>;

    fn add(self, rhs: &'b Vector<K>) -> Vector<K> {
        let mut r = Vector::zero();
        for i in 0..K {
            r.polys[i] = &self.polys[i] + &rhs.polys[i];
        }
        r
    }
}

impl<const K: usize> ops::AddAssign<&Self> for Vector<K> {
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..K {
            self.polys[i] += &rhs.polys[i];
        }
    }
}

impl<const K: usize> ops::AddAssign<&Self> for NttVector<K> {
    fn add_assign(&mut self, rhs: &Self) {
        for i in 0..K {
            self.polys[i] += &rhs.polys[i];
        }
    }
}

impl<const K: usize> Default for Vector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const K: usize> Default for NttVector<K> {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Q;
    use crate::params::N;

    #[test]
    fn tobytes_frombytes_roundtrip() {
        let mut v = NttVector::<3>::zero();
        for k in 0..3 {
            for i in 0..N {
                v.polys[k].0[i] = (((k * N + i) * 7) % Q as usize) as u16;
            }
        }
        let mut buf = [0u8; 3 * POLYBYTES];
        v.to_bytes(&mut buf);
        let v2 = NttVector::<3>::from_bytes(&buf);
        for k in 0..3 {
            assert_eq!(v.polys[k].0, v2.polys[k].0, "poly {k} mismatch");
        }
    }

    #[test]
    fn add_zero_identity() {
        let mut v = Vector::<2>::zero();
        v.polys[0].0[0] = 42;
        v.polys[1].0[255] = 100;
        let zero = Vector::<2>::zero();
        let result = &v + &zero;
        assert_eq!(result.polys[0].0[0], 42);
        assert_eq!(result.polys[1].0[255], 100);
    }

    #[test]
    fn inner_product_linearity() {
        // <a, b> + <a, c> = <a, b + c> in the NTT domain.
        let mut a = Vector::<2>::zero();
        let mut b = Vector::<2>::zero();
        let mut c = Vector::<2>::zero();
        for i in 0..N {
            a.polys[0].0[i] = ((i * 3 + 1) % Q as usize) as u16;
            a.polys[1].0[i] = ((i * 5 + 2) % Q as usize) as u16;
            b.polys[0].0[i] = ((i * 7 + 3) % Q as usize) as u16;
            b.polys[1].0[i] = ((i * 11 + 4) % Q as usize) as u16;
            c.polys[0].0[i] = ((i * 13 + 5) % Q as usize) as u16;
            c.polys[1].0[i] = ((i * 17 + 6) % Q as usize) as u16;
        }
        let bc = &b + &c;

        let a_hat = a.ntt();
        let b_hat = b.ntt();
        let c_hat = c.ntt();
        let bc_hat = bc.ntt();

        let mut lhs = a_hat.inner_product(&b_hat);
        lhs += &a_hat.inner_product(&c_hat);
        let rhs = a_hat.inner_product(&bc_hat);
        assert_eq!(lhs.0, rhs.0);
    }

    #[test]
    fn compress_decompress_vector_error_bound() {
        let mut v = Vector::<2>::zero();
        for k in 0..2 {
            for i in 0..N {
                v.polys[k].0[i] = (((k * 1000 + i) * 9) % Q as usize) as u16;
            }
        }
        let mut buf = [0u8; 2 * 320];
        v.compress(&mut buf, 10);
        let v2 = Vector::<2>::decompress(&buf, 10);

        let max_err = (Q as i32) / (1 << 10) + 1;
        for k in 0..2 {
            for i in 0..N {
                let diff = (v.polys[k].0[i] as i32 - v2.polys[k].0[i] as i32).rem_euclid(Q as i32);
                let diff = diff.min(Q as i32 - diff);
                assert!(diff <= max_err, "poly {k} coeff {i}");
            }
        }
    }
}
