//! Key, ciphertext, and shared-secret types.
//!
//! Each wrapper owns fixed-size storage picked by its parameter set. Bytes
//! the crate generated itself enter through infallible constructors;
//! anything from outside goes through `try_from_bytes`, where the validation
//! policy lives with the type it protects: an encapsulation key must have
//! the right length and carry only canonical 12-bit coefficients, while
//! decapsulation keys and ciphertexts are checked for length alone — a
//! mangled ciphertext is absorbed by implicit rejection, and a corrupted
//! decapsulation key cannot be told apart from a foreign one.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KemError;
use crate::math::pack;
use crate::params::{ByteStorage, ParameterSet, POLYBYTES, SSBYTES};

/// Encapsulation (public) key: `Encode₁₂(t̂) ‖ ρ`.
pub struct PublicKey<P: ParameterSet> {
    pub(crate) bytes: P::EkArray,
}

/// Decapsulation (secret) key: `dk_pke ‖ ek ‖ H(ek) ‖ z`.
///
/// Wiped on drop, embedded ek copy and implicit-rejection secret included.
pub struct SecretKey<P: ParameterSet> {
    pub(crate) bytes: P::DkArray,
}

/// KEM ciphertext: the compressed (u, v) pair.
pub struct Ciphertext<P: ParameterSet> {
    pub(crate) bytes: P::CtArray,
}

/// Slice-view and clone plumbing, identical for every sized wrapper; the
/// per-type code below is only what differs: construction and validation.
macro_rules! bytes_view {
    ($($name:ident),*) => {
        $(
            impl<P: ParameterSet> $name<P> {
                /// View the raw bytes.
                #[inline]
                pub fn as_bytes(&self) -> &[u8] {
                    self.bytes.as_slice()
                }
            }

            impl<P: ParameterSet> AsRef<[u8]> for $name<P> {
                #[inline]
                fn as_ref(&self) -> &[u8] {
                    self.bytes.as_slice()
                }
            }

            impl<P: ParameterSet> Clone for $name<P> {
                fn clone(&self) -> Self {
                    Self {
                        bytes: self.bytes.clone(),
                    }
                }
            }
        )*
    };
}

bytes_view!(PublicKey, SecretKey, Ciphertext);

impl<P: ParameterSet> PublicKey<P> {
    /// Wrap bytes produced by key generation; canonical by construction.
    #[inline]
    pub(crate) fn from_array(bytes: P::EkArray) -> Self {
        Self { bytes }
    }

    /// Parse an untrusted encapsulation key.
    ///
    /// Applies the modulus check: a wrong length or any 12-bit coefficient
    /// at or above q rejects the key.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, KemError> {
        if bytes.len() != P::EK_BYTES {
            return Err(KemError::InvalidPublicKey);
        }
        let in_range = bytes[..P::POLYVEC_BYTES]
            .chunks_exact(POLYBYTES)
            .all(pack::coeffs_in_range);
        if !in_range {
            return Err(KemError::InvalidPublicKey);
        }
        Ok(Self {
            bytes: P::EkArray::copy_from(bytes),
        })
    }

    /// Consume the wrapper and return the inner byte array.
    #[inline]
    pub fn into_bytes(self) -> P::EkArray {
        self.bytes
    }
}

impl<P: ParameterSet> SecretKey<P> {
    /// Wrap an owned key array; the layout is trusted.
    #[inline]
    pub fn from_bytes(bytes: P::DkArray) -> Self {
        Self { bytes }
    }

    /// Parse a decapsulation key, checking the length.
    ///
    /// Nothing past the length can be verified here: any byte pattern of the
    /// right size decapsulates, worst case into implicit rejection.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, KemError> {
        if bytes.len() != P::DK_BYTES {
            return Err(KemError::InvalidInput {
                expected: P::DK_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: P::DkArray::copy_from(bytes),
        })
    }
}

impl<P: ParameterSet> Zeroize for SecretKey<P> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
    }
}

impl<P: ParameterSet> Drop for SecretKey<P> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: ParameterSet> Ciphertext<P> {
    /// Wrap an owned ciphertext array; the length is carried by the type.
    #[inline]
    pub fn from_bytes(bytes: P::CtArray) -> Self {
        Self { bytes }
    }

    /// Parse a ciphertext, checking the length.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, KemError> {
        if bytes.len() != P::CT_BYTES {
            return Err(KemError::InvalidInput {
                expected: P::CT_BYTES,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            bytes: P::CtArray::copy_from(bytes),
        })
    }

    /// Consume the wrapper and return the inner byte array.
    #[inline]
    pub fn into_bytes(self) -> P::CtArray {
        self.bytes
    }
}

impl<P: ParameterSet> core::fmt::Debug for PublicKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PublicKey<k={}>({} bytes)", P::K, P::EK_BYTES)
    }
}

impl<P: ParameterSet> core::fmt::Debug for SecretKey<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretKey<k={}>(contents withheld)", P::K)
    }
}

impl<P: ParameterSet> core::fmt::Debug for Ciphertext<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Ciphertext<k={}>({} bytes)", P::K, P::CT_BYTES)
    }
}

/// The agreed 32-byte secret. Wiped on drop.
///
/// Hand the bytes to a symmetric primitive and let the wrapper fall out of
/// scope; bit-for-bit agreement with the peer's value is what the KEM
/// establishes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(pub(crate) [u8; SSBYTES]);

impl SharedSecret {
    #[inline]
    pub(crate) fn new(bytes: [u8; SSBYTES]) -> Self {
        Self(bytes)
    }

    /// View the secret bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SharedSecret {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SharedSecret(contents withheld)")
    }
}
