//! Dodecic extension `Fp12 = Fp6[w]/(w² − v)`

use core::fmt;
use core::ops::{Mul, MulAssign, Neg};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;
use super::fp6::Fp6;

// ============================================================================
// Frobenius Constants
// ============================================================================

// γ₂ᵢ = ξ^(i(p²−1)/6) for i = 1..5. All five land in Fp; the p²-power
// map fixes Fp2 coefficients and scales the tower basis elements
// w, v, vw, v², v²w by γ₂₁..γ₂₅ respectively.

/// ξ^((p²−1)/6) = 21888242871839275220042445260109153167277707414472061641714758635765020556617
const GAMMA21: Fp = Fp::from_raw_unchecked([
    0xca8d_8005_00fa_1bf2,
    0xf0c5_d614_68b3_9769,
    0x0e20_1271_ad0d_4418,
    0x0429_0f65_bad8_56e6,
]);

/// ξ^(2(p²−1)/6) = 21888242871839275220042445260109153167277707414472061641714758635765020556616
const GAMMA22: Fp = Fp::from_raw_unchecked([
    0x3350_c88e_13e8_0b9c,
    0x7dce_557c_db5e_56b9,
    0x6001_b4b8_b615_564a,
    0x2682_e617_0202_17e0,
]);

/// ξ^(3(p²−1)/6) = p − 1
const GAMMA23: Fp = Fp::from_raw_unchecked([
    0x68c3_4889_12ed_efaa,
    0x8d08_7f68_72aa_bf4f,
    0x51e1_a247_0908_1231,
    0x2259_d6b1_4729_c0fa,
]);

/// ξ^(4(p²−1)/6) = 2203960485148121921418603742825762020974279258880205651966
const GAMMA24: Fp = Fp::from_raw_unchecked([
    0x7193_0c11_d782_e155,
    0xa6bb_947c_ffbe_3323,
    0xaa30_3344_d474_1444,
    0x2c3b_3f0d_2659_4943,
]);

/// ξ^(5(p²−1)/6) = 2203960485148121921418603742825762020974279258880205651967
const GAMMA25: Fp = Fp::from_raw_unchecked([
    0x08cf_c388_c494_f1ab,
    0x19b3_1514_8d13_73d4,
    0x584e_90fd_cb6c_0213,
    0x09e1_685b_df2f_8849,
]);

// ============================================================================
// Element Type
// ============================================================================

/// Element c0 + c1·w of Fp12, with w² = v
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp6,
    /// Coefficient of w
    pub c1: Fp6,
}

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp6::zero(),
            c1: Fp6::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp6::one(),
            c1: Fp6::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp6, c1: Fp6) -> Fp12 {
        Fp12 { c0, c1 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Check if element is the multiplicative identity
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// Karatsuba product over the quadratic layer.
    ///
    /// (a + bw)(c + dw) = (ac + v·bd) + ((a+b)(c+d) − ac − bd)w,
    /// where ×v rotates Fp6 coefficients through the non-residue.
    pub const fn mul(&self, rhs: &Fp12) -> Fp12 {
        let ac = self.c0.mul(&rhs.c0);
        let bd = self.c1.mul(&rhs.c1);

        let c0 = ac.add(&bd.mul_by_nonresidue());
        let c1 = (&self.c0.add(&self.c1))
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&ac)
            .sub(&bd);

        Fp12 { c0, c1 }
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp12 {
        self.mul(self)
    }

    /// Conjugate: a + bw ↦ a − bw (the p⁶-power map)
    #[inline]
    pub const fn conjugate(&self) -> Fp12 {
        Fp12 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// Multiplicative inverse: (a − bw)/(a² − v·b²). Zero inverts to zero.
    pub fn invert(&self) -> Fp12 {
        let norm = self
            .c0
            .square()
            .sub(&self.c1.square().mul_by_nonresidue());
        let norm_inv = norm.invert();

        Fp12 {
            c0: self.c0.mul(&norm_inv),
            c1: self.c1.neg().mul(&norm_inv),
        }
    }

    /// Exponentiation scanning the exponent least-significant bit first.
    ///
    /// The accumulator starts at one and the running base at self; for
    /// each bit position from 0 upward the accumulator is multiplied by
    /// the base when the bit is set, and the base is squared afterwards.
    /// Limbs are little-endian.
    pub fn exp(&self, by: &[u64]) -> Fp12 {
        let mut acc = Fp12::one();
        let mut base = *self;
        for limb in by.iter() {
            let mut e = *limb;
            for _ in 0..64 {
                if e & 1 == 1 {
                    acc = acc.mul(&base);
                }
                base = base.square();
                e >>= 1;
            }
        }
        acc
    }

    /// The p²-power Frobenius map.
    ///
    /// Fp2 coefficients are fixed; basis elements pick up the fixed
    /// scalars γ₂ᵢ (v ↦ γ₂₂v, v² ↦ γ₂₄v², w ↦ γ₂₁w, vw ↦ γ₂₃vw,
    /// v²w ↦ γ₂₅v²w).
    pub fn frobenius_p2(&self) -> Fp12 {
        Fp12 {
            c0: Fp6::new(
                self.c0.c0,
                self.c0.c1.scale(&GAMMA22),
                self.c0.c2.scale(&GAMMA24),
            ),
            c1: Fp6::new(
                self.c1.c0.scale(&GAMMA21),
                self.c1.c1.scale(&GAMMA23),
                self.c1.c2.scale(&GAMMA25),
            ),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*w", self.c0, self.c1)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp12 {}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp6::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp6::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn neg(self) -> Fp12 {
        Fp12 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }
}

impl Neg for Fp12 {
    type Output = Fp12;
    #[inline]
    fn neg(self) -> Fp12 {
        -&self
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        self.mul(rhs)
    }
}

impl Mul<Fp12> for Fp12 {
    type Output = Fp12;
    #[inline]
    fn mul(self, rhs: Fp12) -> Fp12 {
        &self * &rhs
    }
}

impl MulAssign<Fp12> for Fp12 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp12) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Fp12> for Fp12 {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Fp12) {
        *self = &*self * rhs;
    }
}
