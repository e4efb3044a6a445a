//! Kyber parameter sets.
//!
//! The sealed [`ParameterSet`] trait binds every parameter-set constant
//! (k, η₁, η₂, d_u, d_v and all derived byte sizes) at the type level, so the
//! three standard sets are three monomorphized instantiations rather than
//! runtime dispatch.

use zeroize::Zeroize;

pub use crate::field::Q;
use crate::math::sample::{self, CbdWidth};

/// Ring degree.
pub const N: usize = 256;

/// Size in bytes of seeds and hash outputs.
pub const SYMBYTES: usize = 32;

/// Size in bytes of the shared secret.
pub const SSBYTES: usize = 32;

/// Size in bytes of a 12-bit-encoded polynomial.
pub const POLYBYTES: usize = 32 * 12;

/// Fixed-length byte storage backing keys and ciphertexts.
///
/// Stable Rust cannot name `[u8; Self::EK_BYTES]` as an associated type, so
/// each parameter set carries concrete array types constrained by this
/// trait. Arrays are the only implementors.
pub trait ByteStorage: Clone + Zeroize + Send + Sync + 'static {
    /// Length in bytes, recoverable without a value in hand.
    const SIZE: usize;

    /// All-zero storage, ready to be written in place.
    fn new_zeroed() -> Self;

    /// Copy from a slice whose length was already validated.
    fn copy_from(bytes: &[u8]) -> Self;

    /// The stored bytes.
    fn as_slice(&self) -> &[u8];

    /// Mutable view for in-place construction.
    fn as_mut_slice(&mut self) -> &mut [u8];
}

impl<const SIZE: usize> ByteStorage for [u8; SIZE] {
    const SIZE: usize = SIZE;

    #[inline]
    fn new_zeroed() -> Self {
        [0u8; SIZE]
    }

    fn copy_from(bytes: &[u8]) -> Self {
        let mut arr = [0u8; SIZE];
        arr.copy_from_slice(bytes);
        arr
    }

    #[inline]
    fn as_slice(&self) -> &[u8] {
        self
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        self
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Kyber parameter set. Sealed — implemented only for [`Kyber512`],
/// [`Kyber768`], and [`Kyber1024`].
pub trait ParameterSet: sealed::Sealed + 'static {
    /// Module rank: dimension of vectors, side length of Â.
    const K: usize;

    /// Noise width for secrets (s, e, r).
    type Eta1: CbdWidth;
    /// Noise width for ciphertext errors (e₁, e₂).
    type Eta2: CbdWidth;

    /// Ciphertext compression width for the vector component u.
    const DU: u32;
    /// Ciphertext compression width for the scalar component v.
    const DV: u32;

    /// 12-bit encoding of a rank-K vector: `384·K`.
    const POLYVEC_BYTES: usize;
    /// Compressed v component: `32·d_v`.
    const POLY_COMPRESSED_BYTES: usize;
    /// Compressed u component: `32·d_u·K`.
    const POLYVEC_COMPRESSED_BYTES: usize;
    /// Encapsulation key: `384·K + 32`.
    const EK_BYTES: usize;
    /// Inner-PKE decryption key: `384·K`.
    const PKE_SK_BYTES: usize;
    /// Decapsulation key: `768·K + 96`.
    const DK_BYTES: usize;
    /// Ciphertext: `32·(d_u·K + d_v)`.
    const CT_BYTES: usize;

    type EkArray: ByteStorage;
    type DkArray: ByteStorage;
    type CtArray: ByteStorage;
}

macro_rules! impl_parameter_set {
    (
        $name:ident, K = $K:literal,
        Eta1 = $Eta1:ty, Eta2 = $Eta2:ty,
        DU = $du:literal, DV = $dv:literal,
        EK_BYTES = $ekb:literal, DK_BYTES = $dkb:literal, CT_BYTES = $ctb:literal
    ) => {
        impl sealed::Sealed for $name {}

        impl ParameterSet for $name {
            const K: usize = $K;
            type Eta1 = $Eta1;
            type Eta2 = $Eta2;
            const DU: u32 = $du;
            const DV: u32 = $dv;

            const POLYVEC_BYTES: usize = $K * POLYBYTES;
            const POLY_COMPRESSED_BYTES: usize = 32 * $dv;
            const POLYVEC_COMPRESSED_BYTES: usize = 32 * $du * $K;
            const EK_BYTES: usize = $ekb;
            const PKE_SK_BYTES: usize = $K * POLYBYTES;
            const DK_BYTES: usize = $dkb;
            const CT_BYTES: usize = $ctb;

            type EkArray = [u8; $ekb];
            type DkArray = [u8; $dkb];
            type CtArray = [u8; $ctb];
        }
    };
}

/// Kyber-512 (k = 2, NIST security category 1).
#[derive(Debug, Clone, Copy)]
pub struct Kyber512;

/// Kyber-768 (k = 3, NIST security category 3).
#[derive(Debug, Clone, Copy)]
pub struct Kyber768;

/// Kyber-1024 (k = 4, NIST security category 5).
#[derive(Debug, Clone, Copy)]
pub struct Kyber1024;

impl_parameter_set!(
    Kyber512,
    K = 2,
    Eta1 = sample::Eta3,
    Eta2 = sample::Eta2,
    DU = 10,
    DV = 4,
    EK_BYTES = 800,
    DK_BYTES = 1632,
    CT_BYTES = 768
);

impl_parameter_set!(
    Kyber768,
    K = 3,
    Eta1 = sample::Eta2,
    Eta2 = sample::Eta2,
    DU = 10,
    DV = 4,
    EK_BYTES = 1184,
    DK_BYTES = 2400,
    CT_BYTES = 1088
);

impl_parameter_set!(
    Kyber1024,
    K = 4,
    Eta1 = sample::Eta2,
    Eta2 = sample::Eta2,
    DU = 11,
    DV = 5,
    EK_BYTES = 1568,
    DK_BYTES = 3168,
    CT_BYTES = 1568
);

const _: () = {
    macro_rules! check_params {
        ($t:ty) => {
            assert!(<$t>::POLYVEC_BYTES == <$t>::K * POLYBYTES);
            assert!(<$t>::EK_BYTES == <$t>::POLYVEC_BYTES + SYMBYTES);
            assert!(<$t>::PKE_SK_BYTES == <$t>::POLYVEC_BYTES);
            assert!(<$t>::DK_BYTES == <$t>::PKE_SK_BYTES + <$t>::EK_BYTES + 2 * SYMBYTES);
            assert!(
                <$t>::CT_BYTES
                    == <$t>::POLYVEC_COMPRESSED_BYTES + <$t>::POLY_COMPRESSED_BYTES
            );
        };
    }
    check_params!(Kyber512);
    check_params!(Kyber768);
    check_params!(Kyber1024);

    assert!(Kyber512::EK_BYTES == 800);
    assert!(Kyber512::DK_BYTES == 1632);
    assert!(Kyber512::CT_BYTES == 768);
    assert!(Kyber768::EK_BYTES == 1184);
    assert!(Kyber768::DK_BYTES == 2400);
    assert!(Kyber768::CT_BYTES == 1088);
    assert!(Kyber1024::EK_BYTES == 1568);
    assert!(Kyber1024::DK_BYTES == 3168);
    assert!(Kyber1024::CT_BYTES == 1568);
};
