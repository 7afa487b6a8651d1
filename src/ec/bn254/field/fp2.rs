//! Quadratic extension `Fp2 = Fp[u]/(u² + 1)`

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp::Fp;

/// Element c0 + c1·u of Fp2, with u² = −1
#[derive(Copy, Clone)]
pub struct Fp2 {
    /// Real coefficient
    pub c0: Fp,
    /// Coefficient of u
    pub c1: Fp,
}

impl Fp2 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp2 {
        Fp2 {
            c0: Fp::zero(),
            c1: Fp::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp2 {
        Fp2 {
            c0: Fp::one(),
            c1: Fp::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp, c1: Fp) -> Fp2 {
        Fp2 { c0, c1 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero()
    }

    /// Component-wise addition
    #[inline]
    pub const fn add(self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
        }
    }

    /// Component-wise subtraction
    #[inline]
    pub const fn sub(self, rhs: &Fp2) -> Fp2 {
        Fp2 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
        }
    }

    /// Component-wise negation
    #[inline]
    pub const fn neg(self) -> Fp2 {
        Fp2 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
        }
    }

    /// Double this element
    #[inline]
    pub const fn double(&self) -> Fp2 {
        (*self).add(self)
    }

    /// Karatsuba multiplication with three base-field products.
    ///
    /// For (a + bu)(c + du): compute ac and bd, recover the cross term as
    /// (a + b)(c + d) − ac − bd, and fold u² = −1 into the real part.
    #[inline]
    pub const fn mul(self, rhs: &Fp2) -> Fp2 {
        let ac = self.c0.mul(&rhs.c0);
        let bd = self.c1.mul(&rhs.c1);
        let cross = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&ac)
            .sub(&bd);

        Fp2 {
            c0: ac.sub(&bd),
            c1: cross,
        }
    }

    /// Squaring with two base-field products: ((a+b)(a−b), 2ab)
    #[inline]
    pub const fn square(&self) -> Fp2 {
        let ab = self.c0.mul(&self.c1);

        Fp2 {
            c0: self.c0.add(&self.c1).mul(&self.c0.sub(&self.c1)),
            c1: ab.add(&ab),
        }
    }

    /// Scale by a base-field element
    #[inline]
    pub const fn scale(&self, s: &Fp) -> Fp2 {
        Fp2 {
            c0: self.c0.mul(s),
            c1: self.c1.mul(s),
        }
    }

    /// Conjugate: a + bu ↦ a − bu
    #[inline]
    pub const fn conjugate(&self) -> Fp2 {
        Fp2 {
            c0: self.c0,
            c1: self.c1.neg(),
        }
    }

    /// The p-power Frobenius, which on Fp2 is conjugation
    #[inline]
    pub const fn frobenius_map(&self) -> Fp2 {
        self.conjugate()
    }

    /// Multiply by the sextic non-residue ξ = 9 + u:
    /// (a + bu)(9 + u) = (9a − b) + (a + 9b)u.
    ///
    /// This is the single non-residue multiplication used throughout the
    /// Fp6/Fp12 tower; ×9 is computed as three doublings plus the input.
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp2 {
        let a9 = self.c0.double().double().double().add(&self.c0);
        let b9 = self.c1.double().double().double().add(&self.c1);

        Fp2 {
            c0: a9.sub(&self.c1),
            c1: self.c0.add(&b9),
        }
    }

    /// Multiplicative inverse: (a − bu)/(a² + b²).
    ///
    /// The inverse of zero is (0, 0) by convention, matching the
    /// base-field rule.
    pub fn invert(&self) -> Fp2 {
        let norm = self.c0.square().add(&self.c1.square());
        let norm_inv = norm.invert();

        Fp2 {
            c0: self.c0.mul(&norm_inv),
            c1: self.c1.neg().mul(&norm_inv),
        }
    }

    /// Create random element
    pub fn random(mut rng: impl RngCore) -> Fp2 {
        Fp2 {
            c0: Fp::random(&mut rng),
            c1: Fp::random(&mut rng),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} + {:?}*u", self.c0, self.c1)
    }
}

impl Default for Fp2 {
    fn default() -> Self {
        Fp2::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp2 {}

impl ConstantTimeEq for Fp2 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
    }
}

impl Eq for Fp2 {}
impl PartialEq for Fp2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp2 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp2 {
            c0: Fp::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp::conditional_select(&a.c1, &b.c1, choice),
        }
    }
}

impl<'a> Neg for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        (*self).neg()
    }
}

impl Neg for Fp2 {
    type Output = Fp2;
    #[inline]
    fn neg(self) -> Fp2 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: &'b Fp2) -> Fp2 {
        (*self).add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: &'b Fp2) -> Fp2 {
        (*self).sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp2> for &'a Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: &'b Fp2) -> Fp2 {
        (*self).mul(rhs)
    }
}

impl Add<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn add(self, rhs: Fp2) -> Fp2 {
        &self + &rhs
    }
}

impl Sub<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn sub(self, rhs: Fp2) -> Fp2 {
        &self - &rhs
    }
}

impl Mul<Fp2> for Fp2 {
    type Output = Fp2;
    #[inline]
    fn mul(self, rhs: Fp2) -> Fp2 {
        &self * &rhs
    }
}

impl AddAssign<Fp2> for Fp2 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp2) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<Fp2> for Fp2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp2) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<Fp2> for Fp2 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp2) {
        *self = &*self * &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fp(n: u64) -> Fp {
        let mut acc = Fp::zero();
        let mut bit = Fp::one();
        let mut n = n;
        while n != 0 {
            if n & 1 == 1 {
                acc += bit;
            }
            bit = bit.double();
            n >>= 1;
        }
        acc
    }

    #[test]
    fn test_small_product() {
        // (3 + 4u)(5 + 6u) = 15 + 38u + 24u² = −9 + 38u
        let a = Fp2::new(fp(3), fp(4));
        let b = Fp2::new(fp(5), fp(6));
        let prod = a * b;
        assert_eq!(prod, Fp2::new(-fp(9), fp(38)));
    }

    #[test]
    fn test_square_matches_mul() {
        let a = Fp2::new(fp(3), fp(4));
        assert_eq!(a.square(), a * a);
        let b = Fp2::new(fp(123456789), fp(987654321));
        assert_eq!(b.square(), b * b);
    }

    #[test]
    fn test_inverse() {
        let a = Fp2::new(fp(3), fp(4));
        assert_eq!(a * a.invert(), Fp2::one());
        assert_eq!(Fp2::zero().invert(), Fp2::zero());
    }

    #[test]
    fn test_u_squared_is_minus_one() {
        let u = Fp2::new(Fp::zero(), Fp::one());
        assert_eq!(u.square(), -Fp2::one());
    }

    #[test]
    fn test_mul_by_nonresidue() {
        // Multiplying by ξ = 9 + u must agree with the generic product
        let xi = Fp2::new(fp(9), fp(1));
        let a = Fp2::new(fp(7), fp(11));
        assert_eq!(a.mul_by_nonresidue(), a * xi);
    }

    #[test]
    fn test_conjugate() {
        let a = Fp2::new(fp(3), fp(4));
        assert_eq!(a.conjugate(), Fp2::new(fp(3), -fp(4)));
        // a · conj(a) is the norm, a real element
        let n = a * a.conjugate();
        assert_eq!(n.c1, Fp::zero());
    }
}
