//! BN254 pairing arithmetic
//!
//! This crate implements the arithmetic stack for the BN254 curve (also
//! known as BN128 or alt_bn128): the field tower Fp ⊂ Fp2 ⊂ Fp6 ⊂ Fp12,
//! the curve groups G1 and G2, and the optimal ate pairing
//! e: G1 × G2 → Gt. These are the building blocks of zkSNARK proof
//! verification and signature aggregation, and the curve served by
//! Ethereum's EIP-196/EIP-197 precompiles.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.
//!
//! # Overview
//!
//! - `Fp`, `Fp2`, `Fp6`, `Fp12`: the extension-field tower over the
//!   254-bit base prime, with exact, interoperable coefficient ordering.
//! - `Scalar`: the prime-order scalar field Fr.
//! - `G1Affine`, `G2Affine`: affine curve points with validated
//!   construction and fixed-width wire encodings.
//! - `pairing`, `pairing_check`, `Gt`: single pairings and the batched
//!   multi-pairing check used by aggregate verifiers.
//!
//! All values are immutable `Copy` types; every operation returns a new
//! value and never mutates its operands, so independent inputs may be
//! used concurrently from any number of threads. Randomness is supplied
//! by the caller through [`rand_core::RngCore`].
//!
//! # Examples
//!
//! ```rust
//! use bnpair::ec::bn254::{pairing, pairing_check, G1Affine, G2Affine};
//!
//! let p = G1Affine::generator();
//! let q = G2Affine::generator();
//!
//! let e = pairing(&p, &q);
//! assert!(!bool::from(e.is_identity()));
//!
//! // e(P, Q) · e(−P, Q) = 1
//! assert!(pairing_check(&[(p, q), (-p, q)]));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve primitives
pub mod ec;
pub use ec::bn254::{
    pairing, pairing_check, G1Affine, G2Affine, Gt, Scalar as Bn254Scalar,
};
