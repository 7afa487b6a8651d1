//! Test suite for the BN254 curve stack
//!
//! Split by concern, mirroring the public surface:
//! - `field`: tower arithmetic across all four levels
//! - `groups`: G1/G2 group law and scalar multiplication
//! - `pairings`: bilinearity, degeneracy and the batched check
//! - `serialization`: the fixed-width wire encodings

mod field;
mod serialization;
