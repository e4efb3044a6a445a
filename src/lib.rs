//! CRYSTALS-Kyber key encapsulation for the three standard parameter sets:
//! Kyber-512, Kyber-768, and Kyber-1024.
//!
//! Two parties agree on a 32-byte shared secret over an authenticated public
//! channel, assuming hardness of Module-LWE. The crate covers the full
//! cryptographic core: prime-field arithmetic over F_q (q = 3329), the
//! negacyclic NTT in `F_q[X]/(X²⁵⁶ + 1)`, the inner IND-CPA encryption
//! scheme, and the Fujisaki–Okamoto KEM wrapper with implicit rejection.
//!
//! # Design principles
//!
//! - **No `unsafe`** — enforced by `#![deny(unsafe_code)]`.
//! - **Seeds in, never entropy out** — the core consumes 32-byte seeds; the
//!   randomized entry points take a caller-supplied [`rand_core::CryptoRng`].
//! - **Basis-tagged polynomials** — NTT-domain and coefficient-domain values
//!   are distinct types, so domain mixups fail to compile.
//! - **RAII zeroization** of secret material via the `zeroize` crate, plus
//!   explicit wiping of intermediate secrets.
//! - **Constant-time** comparison and selection wherever a secret decides.
//!
//! # Example
//!
//! ```
//! use kyber_kem::{decapsulate, encapsulate_derand, keypair_derand, Kyber768};
//!
//! let d = [1u8; 32];
//! let z = [2u8; 32];
//! let m = [3u8; 32];
//!
//! let (pk, sk) = keypair_derand::<Kyber768>(&d, &z);
//! let (ct, ss_sender) = encapsulate_derand::<Kyber768>(&pk, &m);
//! let ss_receiver = decapsulate::<Kyber768>(&ct, &sk);
//! assert_eq!(ss_sender.as_bytes(), ss_receiver.as_bytes());
//! ```

#![deny(unsafe_code)]

pub mod ct;
mod error;
pub mod field;
pub mod hash;
pub mod kem;
pub mod math;
pub mod params;
mod pke;
pub mod types;

pub use error::KemError;
pub use kem::{decapsulate, encapsulate, encapsulate_derand, keypair, keypair_derand};
pub use params::{Kyber512, Kyber768, Kyber1024, ParameterSet};
pub use types::{Ciphertext, PublicKey, SecretKey, SharedSecret};
