//! Error kinds for key and ciphertext parsing.
//!
//! Decapsulation failure is deliberately absent: a mismatched ciphertext is
//! absorbed by implicit rejection and never surfaces as an error.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KemError {
    /// Encapsulation key failed validation: wrong length, or a 12-bit
    /// coefficient at or above the modulus.
    #[error("malformed public key")]
    InvalidPublicKey,

    /// Secret key or ciphertext with the wrong length.
    #[error("invalid input length: expected {expected} bytes, got {actual}")]
    InvalidInput { expected: usize, actual: usize },
}
