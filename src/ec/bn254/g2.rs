//! G₂ group: affine points on the twist y² = x³ + 3/(9 + u) over Fp2

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::error::{validate, Error, Result};

use super::field::fp::Fp;
use super::field::fp2::Fp2;
use super::Scalar;

/// Twist coefficient b′ = 3/(9 + u)
const B: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0x3bf9_38e3_77b8_02a8,
        0x020b_1b27_3633_535d,
        0x26b7_edf0_4975_5260,
        0x2514_c632_4384_a86d,
    ]),
    Fp::from_raw_unchecked([
        0x38e7_eccc_d1dc_ff67,
        0x65f0_b37d_93ce_0d3e,
        0xd749_d0dd_22ac_00aa,
        0x0141_b9ce_4a68_8d4d,
    ]),
);

/// ξ^((p−1)/3), scaling the x-coordinate under the G₂ Frobenius map
const GAMMA12: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0xb577_3b10_4563_ab30,
        0x347f_91c8_a9aa_6454,
        0x7a00_7127_242e_0991,
        0x1956_bcd8_1182_14ec,
    ]),
    Fp::from_raw_unchecked([
        0x6e84_9f1e_a0aa_4757,
        0xaa1c_7b6d_89f8_9141,
        0xb6e7_13cd_fae0_ca3a,
        0x2669_4fbb_4e82_ebc3,
    ]),
);

/// ξ^((p−1)/2), scaling the y-coordinate under the G₂ Frobenius map
const GAMMA13: Fp2 = Fp2::new(
    Fp::from_raw_unchecked([
        0xe4bb_dd0c_2936_b629,
        0xbb30_f162_e133_bacb,
        0x31a9_d1b6_f964_5366,
        0x2535_70be_a500_f8dd,
    ]),
    Fp::from_raw_unchecked([
        0xa1d7_7ce4_5ffe_77c7,
        0x07af_fd11_7826_d1db,
        0x6d16_bd27_bb7e_dc6b,
        0x2c87_2002_85de_fecc,
    ]),
);

/// G₂ affine point.
///
/// The point at infinity is the sentinel x = y = 0 in Fp2.
#[derive(Copy, Clone)]
pub struct G2Affine {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
}

impl G2Affine {
    /// Point at infinity
    #[inline]
    pub const fn identity() -> G2Affine {
        G2Affine {
            x: Fp2::zero(),
            y: Fp2::zero(),
        }
    }

    /// Fixed generator
    pub const fn generator() -> G2Affine {
        G2Affine {
            x: Fp2::new(
                Fp::from_raw_unchecked([
                    0x8e83_b5d1_02bc_2026,
                    0xdceb_1935_497b_0172,
                    0xfbb8_2647_9781_1adf,
                    0x1957_3841_af96_503b,
                ]),
                Fp::from_raw_unchecked([
                    0xafb4_737d_a84c_6140,
                    0x6043_dd5a_5802_d8c4,
                    0x09e9_50fc_52a0_2f86,
                    0x14fe_f083_3aea_7b6b,
                ]),
            ),
            y: Fp2::new(
                Fp::from_raw_unchecked([
                    0x619d_fa9d_886b_e9f6,
                    0xfe7f_d297_f59e_9b78,
                    0xff9e_1a62_231b_7dfe,
                    0x28fd_7eeb_ae9e_4206,
                ]),
                Fp::from_raw_unchecked([
                    0x6409_5b56_c718_56ee,
                    0xdc57_f922_327d_3cbb,
                    0x55f9_35be_3335_1076,
                    0x0da4_a0e6_93fd_6482,
                ]),
            ),
        }
    }

    /// Construct a point from coordinates, validating the twist equation.
    ///
    /// The infinity sentinel (0, 0) is accepted as the identity.
    pub fn new(x: Fp2, y: Fp2) -> Result<G2Affine> {
        let p = G2Affine { x, y };
        validate::point(bool::from(p.is_on_curve()), "G2")?;
        Ok(p)
    }

    /// Check if point at infinity
    #[inline]
    pub fn is_identity(&self) -> Choice {
        self.x.is_zero() & self.y.is_zero()
    }

    /// Curve membership check: y² = x³ + b′, with infinity admitted
    pub fn is_on_curve(&self) -> Choice {
        (self.y.square() - self.x.square() * self.x).ct_eq(&B) | self.is_identity()
    }

    /// Add two points; same dispatch as G₁ with Fp2 arithmetic
    pub fn add(&self, rhs: &G2Affine) -> G2Affine {
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
            return G2Affine::identity();
        }

        let lambda = (rhs.y - self.y) * (rhs.x - self.x).invert();

        let x3 = lambda.square() - self.x - rhs.x;
        let y3 = lambda * (self.x - x3) - self.y;

        G2Affine { x: x3, y: y3 }
    }

    /// Double this point via the tangent slope λ = 3x² / 2y
    pub fn double(&self) -> G2Affine {
        if bool::from(self.is_identity()) {
            return G2Affine::identity();
        }

        let x2 = self.x.square();
        let lambda = (x2 + x2.double()) * self.y.double().invert();

        let x3 = lambda.square() - self.x - self.x;
        let y3 = lambda * (self.x - x3) - self.y;

        G2Affine { x: x3, y: y3 }
    }

    /// Scalar multiplication by double-and-add, least-significant bit
    /// first, as in G₁
    pub fn mul(&self, scalar: &Scalar) -> G2Affine {
        let mut acc = G2Affine::identity();
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
    pub fn random(rng: impl RngCore) -> G2Affine {
        G2Affine::generator().mul(&Scalar::random(rng))
    }

    /// Untwisted p-power Frobenius: (x, y) ↦ (x̄·γ₁₂, ȳ·γ₁₃).
    ///
    /// On the order-r subgroup this acts as multiplication by p; the
    /// pairing engine uses it for the closing Miller-loop steps.
    pub(crate) fn frobenius(&self) -> G2Affine {
        G2Affine {
            x: self.x.conjugate().mul(&GAMMA12),
            y: self.y.conjugate().mul(&GAMMA13),
        }
    }

    /// Encode as 128 bytes: Xc0 ‖ Xc1 ‖ Yc0 ‖ Yc1, each 32 bytes
    /// big-endian; infinity is all zero
    pub fn to_bytes(&self) -> [u8; 128] {
        let mut res = [0u8; 128];
        res[0..32].copy_from_slice(&self.x.c0.to_bytes());
        res[32..64].copy_from_slice(&self.x.c1.to_bytes());
        res[64..96].copy_from_slice(&self.y.c0.to_bytes());
        res[96..128].copy_from_slice(&self.y.c1.to_bytes());
        res
    }

    /// Decode from the 128-byte layout, validating length and curve
    /// membership
    pub fn from_bytes(bytes: &[u8]) -> Result<G2Affine> {
        validate::length("G2 point", bytes.len(), 128)?;

        let coord = |range: core::ops::Range<usize>| -> Result<Fp> {
            let fe = Fp::from_bytes(<&[u8; 32]>::try_from(&bytes[range]).unwrap());
            Option::<Fp>::from(fe).ok_or(Error::InvalidPoint { group: "G2" })
        };

        let x = Fp2::new(coord(0..32)?, coord(32..64)?);
        let y = Fp2::new(coord(64..96)?, coord(96..128)?);

        G2Affine::new(x, y)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for G2Affine {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if bool::from(self.is_identity()) {
            write!(f, "G2(infinity)")
        } else {
            write!(f, "G2({:?}, {:?})", self.x, self.y)
        }
    }
}

impl Default for G2Affine {
    fn default() -> G2Affine {
        G2Affine::identity()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for G2Affine {}

impl ConstantTimeEq for G2Affine {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y)
    }
}

impl ConditionallySelectable for G2Affine {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        G2Affine {
            x: Fp2::conditional_select(&a.x, &b.x, choice),
            y: Fp2::conditional_select(&a.y, &b.y, choice),
        }
    }
}

impl Eq for G2Affine {}
impl PartialEq for G2Affine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a> Neg for &'a G2Affine {
    type Output = G2Affine;
    #[inline]
    fn neg(self) -> G2Affine {
        G2Affine {
            x: self.x,
            y: -self.y,
        }
    }
}

impl Neg for G2Affine {
    type Output = G2Affine;
    #[inline]
    fn neg(self) -> G2Affine {
        -&self
    }
}

impl<'a, 'b> Add<&'b G2Affine> for &'a G2Affine {
    type Output = G2Affine;
    #[inline]
    fn add(self, rhs: &'b G2Affine) -> G2Affine {
        self.add(rhs)
    }
}

impl Add<G2Affine> for G2Affine {
    type Output = G2Affine;
    #[inline]
    fn add(self, rhs: G2Affine) -> G2Affine {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b G2Affine> for &'a G2Affine {
    type Output = G2Affine;
    #[inline]
    fn sub(self, rhs: &'b G2Affine) -> G2Affine {
        self + &(-rhs)
    }
}

impl Sub<G2Affine> for G2Affine {
    type Output = G2Affine;
    #[inline]
    fn sub(self, rhs: G2Affine) -> G2Affine {
        &self - &rhs
    }
}

impl AddAssign<G2Affine> for G2Affine {
    #[inline]
    fn add_assign(&mut self, rhs: G2Affine) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<G2Affine> for G2Affine {
    #[inline]
    fn sub_assign(&mut self, rhs: G2Affine) {
        *self = &*self - &rhs;
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a G2Affine {
    type Output = G2Affine;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> G2Affine {
        self.mul(rhs)
    }
}

impl Mul<Scalar> for G2Affine {
    type Output = G2Affine;
    #[inline]
    fn mul(self, rhs: Scalar) -> G2Affine {
        &self * &rhs
    }
}

impl Mul<G2Affine> for Scalar {
    type Output = G2Affine;
    #[inline]
    fn mul(self, rhs: G2Affine) -> G2Affine {
        &rhs * &self
    }
}

impl MulAssign<Scalar> for G2Affine {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}
