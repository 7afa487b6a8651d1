//! BN254 scalar field `GF(r)`, the prime order of G1, G2 and Gt

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::field::fp::{adc, mac, sbb};

// ============================================================================
// Field Constants
// ============================================================================

/// Group order r
const MODULUS: [u64; 4] = [
    0x43e1_f593_f000_0001,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

/// Montgomery parameter INV = -(r^{-1} mod 2^64) mod 2^64
const INV: u64 = 0xc2e1_f593_efff_ffff;

/// Montgomery R = 2^256 mod r
const R: Scalar = Scalar([
    0xac96_341c_4fff_fffb,
    0x36fc_7695_9f60_cd29,
    0x666e_a36f_7879_462e,
    0x0e0a_77c1_9a07_df2f,
]);

/// Montgomery R^2 = 2^512 mod r
const R2: Scalar = Scalar([
    0x1bb8_e645_ae21_6da7,
    0x53fe_3ab1_e35c_59e3,
    0x8c49_833d_53bb_8085,
    0x0216_d0b1_7f4e_44a5,
]);

/// Montgomery R^3 = 2^768 mod r
const R3: Scalar = Scalar([
    0x5e94_d8e1_b4bf_0040,
    0x2a48_9cbe_1cfb_b6b8,
    0x893c_c664_a19f_cfed,
    0x0cf8_594b_7fcc_657c,
]);

/// Exponent r - 2 for Fermat inversion
const R_MINUS_2: [u64; 4] = [
    0x43e1_f593_efff_ffff,
    0x2833_e848_79b9_7091,
    0xb850_45b6_8181_585d,
    0x3064_4e72_e131_a029,
];

// ============================================================================
// Scalar Type
// ============================================================================

/// Scalar in Montgomery form: Scalar(a) = aR mod r, with R = 2^256
#[derive(Copy, Clone)]
pub struct Scalar(pub(crate) [u64; 4]);

impl Scalar {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Scalar {
        Scalar([0, 0, 0, 0])
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Scalar {
        R
    }

    /// Check if scalar is zero
    pub fn is_zero(&self) -> Choice {
        self.ct_eq(&Scalar::zero())
    }

    /// Convert canonical little-endian limbs into a scalar
    pub const fn from_raw(val: [u64; 4]) -> Self {
        (&Scalar(val)).mul(&R2)
    }

    /// Add another scalar
    #[inline]
    pub const fn add(&self, rhs: &Scalar) -> Scalar {
        let (d0, carry) = adc(self.0[0], rhs.0[0], 0);
        let (d1, carry) = adc(self.0[1], rhs.0[1], carry);
        let (d2, carry) = adc(self.0[2], rhs.0[2], carry);
        let (d3, _) = adc(self.0[3], rhs.0[3], carry);

        (&Scalar([d0, d1, d2, d3])).subtract_r()
    }

    /// Double this scalar
    #[inline]
    pub const fn double(&self) -> Scalar {
        self.add(self)
    }

    /// Subtract another scalar
    #[inline]
    pub const fn sub(&self, rhs: &Scalar) -> Scalar {
        (&rhs.neg()).add(self)
    }

    /// Negate this scalar
    #[inline]
    pub const fn neg(&self) -> Scalar {
        let (d0, borrow) = sbb(MODULUS[0], self.0[0], 0);
        let (d1, borrow) = sbb(MODULUS[1], self.0[1], borrow);
        let (d2, borrow) = sbb(MODULUS[2], self.0[2], borrow);
        let (d3, _) = sbb(MODULUS[3], self.0[3], borrow);

        let mask =
            (((self.0[0] | self.0[1] | self.0[2] | self.0[3]) == 0) as u64).wrapping_sub(1);

        Scalar([d0 & mask, d1 & mask, d2 & mask, d3 & mask])
    }

    /// Reduce below the modulus after addition
    #[inline]
    const fn subtract_r(&self) -> Scalar {
        let (r0, borrow) = sbb(self.0[0], MODULUS[0], 0);
        let (r1, borrow) = sbb(self.0[1], MODULUS[1], borrow);
        let (r2, borrow) = sbb(self.0[2], MODULUS[2], borrow);
        let (r3, borrow) = sbb(self.0[3], MODULUS[3], borrow);

        let r0 = (self.0[0] & borrow) | (r0 & !borrow);
        let r1 = (self.0[1] & borrow) | (r1 & !borrow);
        let r2 = (self.0[2] & borrow) | (r2 & !borrow);
        let r3 = (self.0[3] & borrow) | (r3 & !borrow);

        Scalar([r0, r1, r2, r3])
    }

    /// Multiply two scalars
    #[inline]
    pub const fn mul(&self, rhs: &Scalar) -> Scalar {
        let (t0, carry) = mac(0, self.0[0], rhs.0[0], 0);
        let (t1, carry) = mac(0, self.0[0], rhs.0[1], carry);
        let (t2, carry) = mac(0, self.0[0], rhs.0[2], carry);
        let (t3, t4) = mac(0, self.0[0], rhs.0[3], carry);

        let (t1, carry) = mac(t1, self.0[1], rhs.0[0], 0);
        let (t2, carry) = mac(t2, self.0[1], rhs.0[1], carry);
        let (t3, carry) = mac(t3, self.0[1], rhs.0[2], carry);
        let (t4, t5) = mac(t4, self.0[1], rhs.0[3], carry);

        let (t2, carry) = mac(t2, self.0[2], rhs.0[0], 0);
        let (t3, carry) = mac(t3, self.0[2], rhs.0[1], carry);
        let (t4, carry) = mac(t4, self.0[2], rhs.0[2], carry);
        let (t5, t6) = mac(t5, self.0[2], rhs.0[3], carry);

        let (t3, carry) = mac(t3, self.0[3], rhs.0[0], 0);
        let (t4, carry) = mac(t4, self.0[3], rhs.0[1], carry);
        let (t5, carry) = mac(t5, self.0[3], rhs.0[2], carry);
        let (t6, t7) = mac(t6, self.0[3], rhs.0[3], carry);

        Scalar::montgomery_reduce(t0, t1, t2, t3, t4, t5, t6, t7)
    }

    /// Square this scalar
    #[inline]
    pub const fn square(&self) -> Scalar {
        self.mul(self)
    }

    /// Montgomery reduction algorithm
    #[inline(always)]
    const fn montgomery_reduce(
        t0: u64,
        t1: u64,
        t2: u64,
        t3: u64,
        t4: u64,
        t5: u64,
        t6: u64,
        t7: u64,
    ) -> Self {
        let k = t0.wrapping_mul(INV);
        let (_, carry) = mac(t0, k, MODULUS[0], 0);
        let (r1, carry) = mac(t1, k, MODULUS[1], carry);
        let (r2, carry) = mac(t2, k, MODULUS[2], carry);
        let (r3, carry) = mac(t3, k, MODULUS[3], carry);
        let (r4, carry2) = adc(t4, 0, carry);

        let k = r1.wrapping_mul(INV);
        let (_, carry) = mac(r1, k, MODULUS[0], 0);
        let (r2, carry) = mac(r2, k, MODULUS[1], carry);
        let (r3, carry) = mac(r3, k, MODULUS[2], carry);
        let (r4, carry) = mac(r4, k, MODULUS[3], carry);
        let (r5, carry2) = adc(t5, carry2, carry);

        let k = r2.wrapping_mul(INV);
        let (_, carry) = mac(r2, k, MODULUS[0], 0);
        let (r3, carry) = mac(r3, k, MODULUS[1], carry);
        let (r4, carry) = mac(r4, k, MODULUS[2], carry);
        let (r5, carry) = mac(r5, k, MODULUS[3], carry);
        let (r6, carry2) = adc(t6, carry2, carry);

        let k = r3.wrapping_mul(INV);
        let (_, carry) = mac(r3, k, MODULUS[0], 0);
        let (r4, carry) = mac(r4, k, MODULUS[1], carry);
        let (r5, carry) = mac(r5, k, MODULUS[2], carry);
        let (r6, carry) = mac(r6, k, MODULUS[3], carry);
        let (r7, _) = adc(t7, carry2, carry);

        (&Scalar([r4, r5, r6, r7])).subtract_r()
    }

    /// Variable-time exponentiation
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                res = res.square();
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                }
            }
        }
        res
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(r-2).
    ///
    /// The inverse of zero is zero by convention, matching the tower
    /// fields.
    #[inline]
    pub fn invert(&self) -> Self {
        self.pow_vartime(&R_MINUS_2)
    }

    /// Canonical little-endian limbs of the scalar, out of Montgomery form
    pub(crate) const fn to_canonical(self) -> [u64; 4] {
        Scalar::montgomery_reduce(self.0[0], self.0[1], self.0[2], self.0[3], 0, 0, 0, 0).0
    }

    /// Decode from 32 big-endian bytes, rejecting non-canonical values
    pub fn from_bytes(bytes: &[u8; 32]) -> CtOption<Scalar> {
        let mut tmp = Scalar([0, 0, 0, 0]);

        tmp.0[3] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[0..8]).unwrap());
        tmp.0[2] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[8..16]).unwrap());
        tmp.0[1] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[16..24]).unwrap());
        tmp.0[0] = u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[24..32]).unwrap());

        let (_, borrow) = sbb(tmp.0[0], MODULUS[0], 0);
        let (_, borrow) = sbb(tmp.0[1], MODULUS[1], borrow);
        let (_, borrow) = sbb(tmp.0[2], MODULUS[2], borrow);
        let (_, borrow) = sbb(tmp.0[3], MODULUS[3], borrow);

        let is_some = (borrow as u8) & 1;

        tmp *= &R2;

        CtOption::new(tmp, Choice::from(is_some))
    }

    /// Encode to 32 big-endian bytes of the canonical representative
    pub fn to_bytes(self) -> [u8; 32] {
        let tmp = self.to_canonical();

        let mut res = [0; 32];
        res[0..8].copy_from_slice(&tmp[3].to_be_bytes());
        res[8..16].copy_from_slice(&tmp[2].to_be_bytes());
        res[16..24].copy_from_slice(&tmp[1].to_be_bytes());
        res[24..32].copy_from_slice(&tmp[0].to_be_bytes());

        res
    }

    /// Reduce a 512-bit big-endian sample modulo r
    pub fn from_bytes_wide(bytes: &[u8; 64]) -> Scalar {
        let limb = |range: core::ops::Range<usize>| {
            u64::from_be_bytes(<[u8; 8]>::try_from(&bytes[range]).unwrap())
        };
        let d1 = Scalar([limb(24..32), limb(16..24), limb(8..16), limb(0..8)]);
        let d0 = Scalar([limb(56..64), limb(48..56), limb(40..48), limb(32..40)]);
        d0 * R2 + d1 * R3
    }

    /// Create uniformly random scalar from the supplied randomness source
    pub fn random(mut rng: impl RngCore) -> Scalar {
        let mut bytes = [0u8; 64];
        rng.fill_bytes(&mut bytes);
        Scalar::from_bytes_wide(&bytes)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tmp = self.to_bytes();
        write!(f, "0x")?;
        for &b in tmp.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Scalar {}

impl From<u64> for Scalar {
    fn from(val: u64) -> Scalar {
        Scalar::from_raw([val, 0, 0, 0])
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[0].ct_eq(&other.0[0])
            & self.0[1].ct_eq(&other.0[1])
            & self.0[2].ct_eq(&other.0[2])
            & self.0[3].ct_eq(&other.0[3])
    }
}

impl Eq for Scalar {}
impl PartialEq for Scalar {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Scalar {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Scalar([
            u64::conditional_select(&a.0[0], &b.0[0], choice),
            u64::conditional_select(&a.0[1], &b.0[1], choice),
            u64::conditional_select(&a.0[2], &b.0[2], choice),
            u64::conditional_select(&a.0[3], &b.0[3], choice),
        ])
    }
}

impl<'a> Neg for &'a Scalar {
    type Output = Scalar;
    #[inline]
    fn neg(self) -> Scalar {
        self.neg()
    }
}

impl Neg for Scalar {
    type Output = Scalar;
    #[inline]
    fn neg(self) -> Scalar {
        -&self
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    #[inline]
    fn add(self, rhs: &'b Scalar) -> Scalar {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    #[inline]
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        self.mul(rhs)
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;
    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        &self + &rhs
    }
}

impl Sub<Scalar> for Scalar {
    type Output = Scalar;
    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        &self - &rhs
    }
}

impl Mul<Scalar> for Scalar {
    type Output = Scalar;
    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        &self * &rhs
    }
}

impl AddAssign<Scalar> for Scalar {
    #[inline]
    fn add_assign(&mut self, rhs: Scalar) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<Scalar> for Scalar {
    #[inline]
    fn sub_assign(&mut self, rhs: Scalar) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<Scalar> for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: Scalar) {
        *self = &*self * &rhs;
    }
}

impl<'b> MulAssign<&'b Scalar> for Scalar {
    #[inline]
    fn mul_assign(&mut self, rhs: &'b Scalar) {
        *self = &*self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Scalar::from(8) * Scalar::from(9), Scalar::from(72));
        assert_eq!(Scalar::from(5) - Scalar::from(3), Scalar::from(2));
        assert_eq!(Scalar::from(3) - Scalar::from(5), -Scalar::from(2));
        assert_eq!(Scalar::from(7).square(), Scalar::from(49));
        assert_eq!(-Scalar::zero(), Scalar::zero());
    }

    #[test]
    fn test_modulus_wraps_to_zero() {
        assert_eq!(Scalar::from_raw(MODULUS), Scalar::zero());
        let mut plus_one = MODULUS;
        plus_one[0] += 1;
        assert_eq!(Scalar::from_raw(plus_one), Scalar::one());
    }

    #[test]
    fn test_inversion() {
        assert_eq!(Scalar::zero().invert(), Scalar::zero());
        let x = Scalar::from(42);
        assert_eq!(x * x.invert(), Scalar::one());
    }

    #[test]
    fn test_bytes_round_trip() {
        let x = Scalar::from(0xdead_beef_u64).pow_vartime(&[3, 0, 0, 0]);
        assert_eq!(Scalar::from_bytes(&x.to_bytes()).unwrap(), x);

        // r itself must be rejected
        let mut r_bytes = [0u8; 32];
        let limbs = MODULUS;
        r_bytes[0..8].copy_from_slice(&limbs[3].to_be_bytes());
        r_bytes[8..16].copy_from_slice(&limbs[2].to_be_bytes());
        r_bytes[16..24].copy_from_slice(&limbs[1].to_be_bytes());
        r_bytes[24..32].copy_from_slice(&limbs[0].to_be_bytes());
        assert!(bool::from(Scalar::from_bytes(&r_bytes).is_none()));
    }

    #[test]
    fn test_from_bytes_wide_reduces() {
        // 2^512 - 1 = (2^256 - 1) * 2^256 + (2^256 - 1)
        let x = Scalar::from_bytes_wide(&[0xff; 64]);
        let lo = {
            let mut bytes = [0u8; 64];
            bytes[32..].copy_from_slice(&[0xff; 32]);
            Scalar::from_bytes_wide(&bytes)
        };
        let shift = lo + Scalar::one(); // 2^256 mod r
        assert_eq!(x, lo * shift + lo);
    }

    #[test]
    fn test_canonical_limbs() {
        assert_eq!(Scalar::from(5).to_canonical(), [5, 0, 0, 0]);
        assert_eq!(Scalar::one().to_canonical(), [1, 0, 0, 0]);
    }
}
