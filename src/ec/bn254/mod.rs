//! BN254 (alt_bn128) pairing-friendly elliptic curve implementation.
//!
//! **Warning:** Unaudited implementation. Use at your own risk.

// Module declarations
pub mod field;
mod g1;
mod g2;
mod pairings;
mod scalar;

#[cfg(test)]
mod tests;

// Public API exports
pub use g1::{hash_to_g1_insecure, G1Affine};
pub use g2::G2Affine;
pub use pairings::{
    final_exponentiation, miller_loop, multi_miller_loop, pairing, pairing_check,
    verify_pairing_check, Gt,
};
pub use scalar::Scalar;

// BN curve seed t, with 6t + 2 driving the Miller loop
/// Curve seed t = 4965661367192848881
pub const BN_U: u64 = 4_965_661_367_192_848_881;
/// Miller-loop parameter 6t + 2; a fixed literal of the public
/// contract, never re-derived at runtime
pub const SIX_U_PLUS_2: u128 = 0x1_9d79_7039_be76_3ba8;
