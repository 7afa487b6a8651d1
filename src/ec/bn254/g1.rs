//! G₁ group: affine points on y² = x³ + 3 over the base field

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{validate, Error, Result};

use super::field::fp::Fp;
use super::Scalar;

/// Curve coefficient b = 3
const B: Fp = Fp::from_raw_unchecked([
    0x7a17_caa9_50ad_28d7,
    0x1f6a_c17a_e155_21b9,
    0x334b_ea4e_696b_d284,
    0x2a1f_6744_ce17_9d8e,
]);

/// G₁ affine point.
///
/// The point at infinity is the sentinel x = y = 0, which never satisfies
/// the curve equation (0 ≠ 3) and is therefore unambiguous.
#[derive(Copy, Clone)]
pub struct G1Affine {
    pub(crate) x: Fp,
    pub(crate) y: Fp,
}

impl G1Affine {
    /// Point at infinity
    #[inline]
    pub const fn identity() -> G1Affine {
        G1Affine {
            x: Fp::zero(),
            y: Fp::zero(),
        }
    }

    /// Fixed generator (1, 2)
    pub const fn generator() -> G1Affine {
        G1Affine {
            x: Fp::from_raw_unchecked([
                0xd35d_438d_c58f_0d9d,
                0x0a78_eb28_f5c7_0b3d,
                0x666e_a36f_7879_462c,
                0x0e0a_77c1_9a07_df2f,
            ]),
            y: Fp::from_raw_unchecked([
                0xa6ba_871b_8b1e_1b3a,
                0x14f1_d651_eb8e_167b,
                0xccdd_46de_f0f2_8c58,
                0x1c14_ef83_340f_be5e,
            ]),
        }
    }

    /// Construct a point from coordinates, validating the curve equation.
    ///
    /// The infinity sentinel (0, 0) is accepted as the identity.
    pub fn new(x: Fp, y: Fp) -> Result<G1Affine> {
        let p = G1Affine { x, y };
        validate::point(bool::from(p.is_on_curve()), "G1")?;
        Ok(p)
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.is_zero()
    }

    /// Curve membership check: y² = x³ + 3, with infinity admitted
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - self.x.square() * self.x).ct_eq(&B) | self.is_identity()
    }

    /// Add two points using the affine chord-and-tangent formulas.
    ///
    /// Infinity short-circuits; equal x dispatches to doubling when the
    /// y-coordinates also match and to infinity otherwise (the operands
    /// are mutual negations).
    pub fn add(&self, rhs: &G1Affine) -> G1Affine {
        if bool::from(self.is_identity()) {
            return *rhs;
        }
        if bool::from(rhs.is_identity()) {
            return *self;
        }

        if self.x == rhs.x {
            if self.y == rhs.y {
                return self.double();
            }
            return G1Affine::identity();
        }

        // λ = (y2 − y1) / (x2 − x1)
        let lambda = (rhs.y - self.y) * (rhs.x - self.x).invert();

        let x3 = lambda.square() - self.x - rhs.x;
        let y3 = lambda * (self.x - x3) - self.y;

        G1Affine { x: x3, y: y3 }
    }

    /// Double this point via the tangent slope λ = 3x² / 2y
    pub fn double(&self) -> G1Affine {
        if bool::from(self.is_identity()) {
            return G1Affine::identity();
        }

        let x2 = self.x.square();
        let lambda = (x2 + x2.double()) * self.y.double().invert();

        let x3 = lambda.square() - self.x.double();
        let y3 = lambda * (self.x - x3) - self.y;

        G1Affine { x: x3, y: y3 }
    }

    /// Scalar multiplication by double-and-add, scanning the scalar's
    /// bits from least-significant upward: add the running base into the
    /// accumulator on a set bit, then double the base. A zero scalar or
    /// infinity input yields infinity.
    pub fn mul(&self, scalar: &Scalar) -> G1Affine {
        let mut acc = G1Affine::identity();
        let mut base = *self;

        for limb in scalar.to_canonical().iter() {
            let mut e = *limb;
            for _ in 0..64 {
                if e & 1 == 1 {
                    acc = acc.add(&base);
                }
                base = base.double();
                e >>= 1;
            }
        }

        acc
    }

    /// Uniformly random group element from the supplied randomness source
    pub fn random(rng: impl RngCore) -> G1Affine {
        G1Affine::generator().mul(&Scalar::random(rng))
    }

    /// Encode as 64 bytes: X(32) ‖ Y(32) big-endian; infinity is all zero
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut res = [0u8; 64];
        res[0..32].copy_from_slice(&self.x.to_bytes());
        res[32..64].copy_from_slice(&self.y.to_bytes());
        res
    }

    /// Decode from the 64-byte layout, validating length and curve
    /// membership
    pub fn from_bytes(bytes: &[u8]) -> Result<G1Affine> {
        validate::length("G1 point", bytes.len(), 64)?;

        let x = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[0..32]).unwrap());
        let y = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[32..64]).unwrap());

        let x = Option::<Fp>::from(x).ok_or(Error::InvalidPoint { group: "G1" })?;
        let y = Option::<Fp>::from(y).ok_or(Error::InvalidPoint { group: "G1" })?;

        G1Affine::new(x, y)
    }
}

/// Map arbitrary bytes to a G₁ point by reducing them to a scalar and
/// multiplying the generator.
///
/// **This is NOT a secure hash-to-curve construction**: the output is
/// a point of known discrete logarithm. It exists for fixtures and
/// interop shims only; production protocols need a domain-separated
/// hash-to-curve.
pub fn hash_to_g1_insecure(data: &[u8]) -> G1Affine {
    // Big-endian base-2^(8·k) Horner fold of the input, all mod r
    let mut acc = Scalar::zero();
    for chunk in data.chunks(32) {
        let mut buf = [0u8; 64];
        buf[64 - chunk.len()..].copy_from_slice(chunk);

        let shift = if chunk.len() == 32 {
            two_to_256()
        } else {
            let bit = 8 * chunk.len();
            let mut limbs = [0u64; 4];
            limbs[bit / 64] = 1u64 << (bit % 64);
            Scalar::from_raw(limbs)
        };
        acc = acc * shift + Scalar::from_bytes_wide(&buf);
    }

    if bool::from(acc.is_zero()) {
        acc = Scalar::one();
    }

    G1Affine::generator().mul(&acc)
}

// 2^256 mod r as a scalar
fn two_to_256() -> Scalar {
    let half = Scalar::from_raw([0, 0, 1, 0]); // 2^128
    half * half
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for G1Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if bool::from(self.is_identity()) {
            write!(f, "G1(infinity)")
        } else {
            write!(f, "G1({:?}, {:?})", self.x, self.y)
        }
    }
}

impl Default for G1Affine {
    fn default() -> G1Affine {
        G1Affine::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G1Affine {}

impl ConstantTimeEq for G1Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for G1Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G1Affine {
            x: Fp::conditional_select(&a.x, &b.x, choice),
            y: Fp::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Eq for G1Affine {}
impl PartialEq for G1Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G1Affine {
    type Output = G1Affine;

    /// Negation flips y to p − y; the sentinel negates to itself since
    /// −0 = 0.
    #[inline]
    fn neg(self) -> G1Affine {
        G1Affine {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Neg for G1Affine {
    type Output = G1Affine;
    #[inline]
    fn neg(self) -> G1Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G1Affine> for &'a G1Affine {
    type Output = G1Affine;
    #[inline]
    fn add(self, rhs: &'b G1Affine) -> G1Affine {
        self.add(rhs)
    }
}

impl Add<G1Affine> for G1Affine {
    type Output = G1Affine;
    #[inline]
    fn add(self, rhs: G1Affine) -> G1Affine {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b G1Affine> for &'a G1Affine {
    type Output = G1Affine;
    #[inline]
    fn sub(self, rhs: &'b G1Affine) -> G1Affine {
        self + &(-rhs)
    }
}

impl Sub<G1Affine> for G1Affine {
    type Output = G1Affine;
    #[inline]
    fn sub(self, rhs: G1Affine) -> G1Affine {
        &self - &rhs
    }
}

impl AddAssign<G1Affine> for G1Affine {
    #[inline]
    fn add_assign(&mut self, rhs: G1Affine) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<G1Affine> for G1Affine {
    #[inline]
    fn sub_assign(&mut self, rhs: G1Affine) {
        *self = &*self - &rhs;
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G1Affine {
    type Output = G1Affine;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G1Affine {
        self.mul(rhs)
    }
}

impl Mul<Scalar> for G1Affine {
    type Output = G1Affine;
    #[inline]
    fn mul(self, rhs: Scalar) -> G1Affine {
        &self * &rhs
    }
}

impl Mul<G1Affine> for Scalar {
    type Output = G1Affine;
    #[inline]
    fn mul(self, rhs: G1Affine) -> G1Affine {
        &rhs * &self
    }
}

impl MulAssign<Scalar> for G1Affine {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}
