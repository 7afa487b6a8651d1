//! Optimal ate pairing e: G₁ × G₂ → Gt over BN254

use core::fmt;
use core::ops::{Mul, MulAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{Error, Result};

use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::field::fp6::Fp6;
use super::field::fp12::Fp12;
use super::g1::G1Affine;
use super::g2::G2Affine;
use super::{Scalar, SIX_U_PLUS_2};

/// Hard part of the final exponentiation: (p⁴ − p² + 1)/r, 761 bits,
/// little-endian limbs
const HARD_PART_EXP: [u64; 12] = [
    0xe81b_b482_ccdf_42b1,
    0x5abf_5cc4_f49c_36d4,
    0xf115_4e7e_1da0_14fd,
    0xdcc7_b44c_87cd_bacf,
    0xaaa4_41e3_954b_cf8a,
    0x6b88_7d56_d509_5f23,
    0x7958_1e16_f3fd_90c6,
    0x3b1b_1355_d189_227d,
    0x4e52_9a58_6187_6f6b,
    0x6c0e_b522_d5b1_2278,
    0x331e_c151_8317_7faf,
    0x01ba_aa71_0b07_59ad,
];

// ============================================================================
// Line Functions
// ============================================================================

// A line through points of the untwisted curve, evaluated at a G1 point,
// is sparse in the Fp12 basis: only the constant, w and v·w slots are
// populated. ψ(x, y) = (x·v, y·vw) carries twist points to the curve
// over Fp12, and a line of twist-slope λ through ψ(R) evaluated at P is
// (up to a factor in Fp6, which the final exponentiation kills)
//     y_P − (λ·x_P)·w + (λ·x_R − y_R)·v·w.

fn sparse_line(c: Fp2, w: Fp2, vw: Fp2) -> Fp12 {
    Fp12::new(
        Fp6::new(c, Fp2::zero(), Fp2::zero()),
        Fp6::new(w, vw, Fp2::zero()),
    )
}

/// Evaluate the tangent line at the Miller-loop point R on the fixed G₁
/// input. Returns the multiplicative identity if R is infinity.
fn line_double(r: &G2Affine, p: &G1Affine) -> Fp12 {
    if bool::from(r.is_identity()) {
        return Fp12::one();
    }

    // λ = 3x_R² / 2y_R
    let x2 = r.x.square();
    let lambda = (x2 + x2.double()) * r.y.double().invert();
    let c = lambda * r.x - r.y;

    sparse_line(Fp2::new(p.y, Fp::zero()), lambda.neg().scale(&p.x), c)
}

/// Evaluate the chord line through R and the fixed G₂ input Q on the
/// fixed G₁ input. Returns the multiplicative identity if either G₂
/// point is infinity.
fn line_add(r: &G2Affine, q: &G2Affine, p: &G1Affine) -> Fp12 {
    if bool::from(r.is_identity()) || bool::from(q.is_identity()) {
        return Fp12::one();
    }

    // λ = (y_Q − y_R) / (x_Q − x_R)
    let lambda = (q.y - r.y) * (q.x - r.x).invert();
    let c = lambda * r.x - r.y;

    sparse_line(Fp2::new(p.y, Fp::zero()), lambda.neg().scale(&p.x), c)
}

// ============================================================================
// Miller Loop and Final Exponentiation
// ============================================================================

/// The Miller loop for the optimal ate pairing.
///
/// Scans the loop parameter 6t + 2 from its second-most-significant bit
/// down to bit 0, accumulating line evaluations while the running point
/// doubles through [6t+2]Q, then closes with the two fixed Frobenius
/// steps Q₁ = π(Q) and Q₂ = −π²(Q). Either input at infinity
/// short-circuits to the multiplicative identity.
pub fn miller_loop(p: &G1Affine, q: &G2Affine) -> Fp12 {
    if bool::from(p.is_identity()) || bool::from(q.is_identity()) {
        return Fp12::one();
    }

    let mut r = *q;
    let mut f = Fp12::one();

    let mut i = 128 - (SIX_U_PLUS_2.leading_zeros() as i32) - 2;
    while i >= 0 {
        f = f.square();
        f = f.mul(&line_double(&r, p));
        r = r.double();

        if (SIX_U_PLUS_2 >> i) & 1 == 1 {
            f = f.mul(&line_add(&r, q, p));
            r = r.add(q);
        }

        i -= 1;
    }

    let q1 = q.frobenius();
    let q2 = -q1.frobenius();

    f = f.mul(&line_add(&r, &q1, p));
    r = r.add(&q1);
    f = f.mul(&line_add(&r, &q2, p));

    f
}

/// Raise the Miller-loop output to (p¹² − 1)/r.
///
/// Easy part: t = conj(f)·f⁻¹ = f^(p⁶−1), then m = t^(p²)·t. Hard part:
/// m^((p⁴−p²+1)/r) as one direct exponentiation of the transcribed
/// exponent; an addition chain may replace it only with bit-identical
/// results.
pub fn final_exponentiation(f: &Fp12) -> Fp12 {
    let t = f.conjugate().mul(&f.invert());
    let m = t.frobenius_p2().mul(&t);
    m.exp(&HARD_PART_EXP)
}

/// Compute the optimal ate pairing e(P, Q)
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
    Gt(final_exponentiation(&miller_loop(p, q)))
}

/// Multiply the Miller loops of every pair, deferring the final
/// exponentiation
pub fn multi_miller_loop(pairs: &[(G1Affine, G2Affine)]) -> Fp12 {
    let mut acc = Fp12::one();
    for (p, q) in pairs {
        acc = acc.mul(&miller_loop(p, q));
    }
    acc
}

/// Check whether e(P₁, Q₁) · e(P₂, Q₂) · … = 1.
///
/// The Miller loops are accumulated without intermediate final
/// exponentiations and a single final exponentiation is applied to the
/// product, the standard multi-pairing idiom of aggregate signature and
/// proof verifiers.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    bool::from(final_exponentiation(&multi_miller_loop(pairs)).is_one())
}

/// [`pairing_check`] for callers that want a failure value instead of a
/// boolean
pub fn verify_pairing_check(pairs: &[(G1Affine, G2Affine)]) -> Result<()> {
    if pairing_check(pairs) {
        Ok(())
    } else {
        Err(Error::InvalidPairing)
    }
}

// ============================================================================
// Target Group
// ============================================================================

/// Element of the target group Gt, the order-r subgroup of Fp12*.
///
/// Values are produced by [`pairing`] (or products of such values);
/// membership in the subgroup is an invariant established by
/// construction and not re-checked per operation.
#[derive(Copy, Clone)]
pub struct Gt(pub(crate) Fp12);

impl Gt {
    /// Multiplicative identity
    pub const fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// e(G₁ generator, G₂ generator)
    pub fn generator() -> Gt {
        pairing(&G1Affine::generator(), &G2Affine::generator())
    }

    /// Check if this is the identity
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Multiplicative inverse.
    ///
    /// Gt elements are unitary, so conjugation inverts; the generic
    /// Fp12 inversion is used to keep the operation total on the raw
    /// wrapper.
    pub fn invert(&self) -> Gt {
        Gt(self.0.invert())
    }

    /// Exponentiation by a scalar
    pub fn pow(&self, by: &Scalar) -> Gt {
        Gt(self.0.exp(&by.to_canonical()))
    }

    /// Encode as 384 bytes: the six Fp2 components, 64 bytes each, in
    /// order c0.c0, c0.c1, c0.c2, c1.c0, c1.c1, c1.c2
    pub fn to_bytes(&self) -> [u8; 384] {
        let mut res = [0u8; 384];
        let coeffs = [
            self.0.c0.c0,
            self.0.c0.c1,
            self.0.c0.c2,
            self.0.c1.c0,
            self.0.c1.c1,
            self.0.c1.c2,
        ];
        for (i, c) in coeffs.iter().enumerate() {
            let at = i * 64;
            res[at..at + 32].copy_from_slice(&c.c0.to_bytes());
            res[at + 32..at + 64].copy_from_slice(&c.c1.to_bytes());
        }
        res
    }

    /// Decode from the 384-byte layout, validating length and
    /// canonicality of every coefficient
    pub fn from_bytes(bytes: &[u8]) -> Result<Gt> {
        crate::error::validate::length("Gt element", bytes.len(), 384)?;

        let mut coeffs = [Fp2::zero(); 6];
        for (i, c) in coeffs.iter_mut().enumerate() {
            let at = i * 64;
            let c0 = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[at..at + 32]).unwrap());
            let c1 =
                Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[at + 32..at + 64]).unwrap());
            let c0 = Option::<Fp>::from(c0).ok_or(Error::InvalidPoint { group: "Gt" })?;
            let c1 = Option::<Fp>::from(c1).ok_or(Error::InvalidPoint { group: "Gt" })?;
            *c = Fp2::new(c0, c1);
        }

        Ok(Gt(Fp12::new(
            Fp6::new(coeffs[0], coeffs[1], coeffs[2]),
            Fp6::new(coeffs[3], coeffs[4], coeffs[5]),
        )))
    }
}

impl fmt::Debug for Gt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Gt({:?})", self.0)
    }
}

impl Default for Gt {
    fn default() -> Gt {
        Gt::identity()
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, 'b> Mul<&'b Gt> for &'a Gt {
    type Output = Gt;
    #[inline]
    fn mul(self, rhs: &'b Gt) -> Gt {
        Gt(self.0.mul(&rhs.0))
    }
}

impl Mul<Gt> for Gt {
    type Output = Gt;
    #[inline]
    fn mul(self, rhs: Gt) -> Gt {
        &self * &rhs
    }
}

impl MulAssign<Gt> for Gt {
    #[inline]
    fn mul_assign(&mut self, rhs: Gt) {
        *self = &*self * &rhs;
    }
}
