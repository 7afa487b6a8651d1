//! Elliptic Curve Primitives
//!
//! This module provides the BN254 (alt_bn128) pairing-friendly curve:
//! the extension-field tower, the G1 and G2 groups, scalar arithmetic,
//! and the optimal ate pairing with its batched verification check.

pub mod bn254;

// Re-export types with consistent naming scheme.
pub use bn254::{
    pairing, pairing_check, G1Affine as Bn254G1, G2Affine as Bn254G2, Gt as Bn254Gt,
    Scalar as Bn254Scalar,
};
