//! Sextic extension `Fp6 = Fp2[v]/(v³ − ξ)` with ξ = 9 + u

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use super::fp2::Fp2;

/// Element c0 + c1·v + c2·v² of Fp6
#[derive(Copy, Clone)]
pub struct Fp6 {
    /// Constant coefficient
    pub c0: Fp2,
    /// Coefficient of v
    pub c1: Fp2,
    /// Coefficient of v²
    pub c2: Fp2,
}

impl Fp6 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp6 {
        Fp6 {
            c0: Fp2::zero(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp6 {
        Fp6 {
            c0: Fp2::one(),
            c1: Fp2::zero(),
            c2: Fp2::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp2, c1: Fp2, c2: Fp2) -> Fp6 {
        Fp6 { c0, c1, c2 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Component-wise addition
    #[inline]
    pub const fn add(self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.add(&rhs.c0),
            c1: self.c1.add(&rhs.c1),
            c2: self.c2.add(&rhs.c2),
        }
    }

    /// Component-wise subtraction
    #[inline]
    pub const fn sub(self, rhs: &Fp6) -> Fp6 {
        Fp6 {
            c0: self.c0.sub(&rhs.c0),
            c1: self.c1.sub(&rhs.c1),
            c2: self.c2.sub(&rhs.c2),
        }
    }

    /// Component-wise negation
    #[inline]
    pub const fn neg(self) -> Fp6 {
        Fp6 {
            c0: self.c0.neg(),
            c1: self.c1.neg(),
            c2: self.c2.neg(),
        }
    }

    /// Toom/Karatsuba three-coefficient product.
    ///
    /// With a = a0·b0, b = a1·b1, c = a2·b2:
    ///   r0 = a + ξ((a1+a2)(b1+b2) − b − c)
    ///   r1 = (a0+a1)(b0+b1) − a − b + ξc
    ///   r2 = (a0+a2)(b0+b2) − a − c + b
    pub const fn mul(self, rhs: &Fp6) -> Fp6 {
        let a = self.c0.mul(&rhs.c0);
        let b = self.c1.mul(&rhs.c1);
        let c = self.c2.mul(&rhs.c2);

        let t0 = self
            .c1
            .add(&self.c2)
            .mul(&rhs.c1.add(&rhs.c2))
            .sub(&b)
            .sub(&c)
            .mul_by_nonresidue();
        let r0 = a.add(&t0);

        let t1 = self
            .c0
            .add(&self.c1)
            .mul(&rhs.c0.add(&rhs.c1))
            .sub(&a)
            .sub(&b);
        let r1 = c.mul_by_nonresidue().add(&t1);

        let t2 = self
            .c0
            .add(&self.c2)
            .mul(&rhs.c0.add(&rhs.c2))
            .sub(&a)
            .sub(&c)
            .add(&b);

        Fp6 {
            c0: r0,
            c1: r1,
            c2: t2,
        }
    }

    /// Square this element
    #[inline]
    pub const fn square(&self) -> Fp6 {
        (*self).mul(self)
    }

    /// Multiply by v: coefficient rotation (ξ·c2, c0, c1)
    #[inline]
    pub const fn mul_by_nonresidue(&self) -> Fp6 {
        Fp6 {
            c0: self.c2.mul_by_nonresidue(),
            c1: self.c0,
            c2: self.c1,
        }
    }

    /// Scale every coefficient by an Fp2 element
    #[inline]
    pub const fn scale(&self, s: &Fp2) -> Fp6 {
        Fp6 {
            c0: self.c0.mul(s),
            c1: self.c1.mul(s),
            c2: self.c2.mul(s),
        }
    }

    /// Multiplicative inverse via the cubic-norm cofactor formula.
    ///
    /// Cofactors t0 = c0² − ξc1c2, t1 = ξc2² − c0c1, t2 = c1² − c0c2;
    /// the norm c0·t0 + ξ(c2·t1) + ξ(c1·t2) is inverted in Fp2 and the
    /// cofactors are scaled by it. Zero inverts to zero.
    pub fn invert(&self) -> Fp6 {
        let t0 = self.c0.square().sub(&self.c1.mul(&self.c2).mul_by_nonresidue());
        let t1 = self.c2.square().mul_by_nonresidue().sub(&self.c0.mul(&self.c1));
        let t2 = self.c1.square().sub(&self.c0.mul(&self.c2));

        let norm = self
            .c0
            .mul(&t0)
            .add(&self.c2.mul(&t1).mul_by_nonresidue())
            .add(&self.c1.mul(&t2).mul_by_nonresidue());
        let norm_inv = norm.invert();

        Fp6 {
            c0: t0.mul(&norm_inv),
            c1: t1.mul(&norm_inv),
            c2: t2.mul(&norm_inv),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl fmt::Debug for Fp6 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*v + ({:?})*v^2", self.c0, self.c1, self.c2)
    }
}

impl Default for Fp6 {
    fn default() -> Self {
        Fp6::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Fp6 {}

impl ConstantTimeEq for Fp6 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp6 {}
impl PartialEq for Fp6 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp6 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp6 {
            c0: Fp2::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp2::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp2::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl<'a> Neg for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn neg(self) -> Fp6 {
        (*self).neg()
    }
}

impl Neg for Fp6 {
    type Output = Fp6;
    #[inline]
    fn neg(self) -> Fp6 {
        -&self
    }
}

impl<'a, 'b> Add<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: &'b Fp6) -> Fp6 {
        self.add(rhs)
    }
}

impl<'a, 'b> Sub<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: &'b Fp6) -> Fp6 {
        self.sub(rhs)
    }
}

impl<'a, 'b> Mul<&'b Fp6> for &'a Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: &'b Fp6) -> Fp6 {
        self.mul(rhs)
    }
}

impl Add<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn add(self, rhs: Fp6) -> Fp6 {
        &self + &rhs
    }
}

impl Sub<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn sub(self, rhs: Fp6) -> Fp6 {
        &self - &rhs
    }
}

impl Mul<Fp6> for Fp6 {
    type Output = Fp6;
    #[inline]
    fn mul(self, rhs: Fp6) -> Fp6 {
        &self * &rhs
    }
}

impl AddAssign<Fp6> for Fp6 {
    #[inline]
    fn add_assign(&mut self, rhs: Fp6) {
        *self = &*self + &rhs;
    }
}

impl SubAssign<Fp6> for Fp6 {
    #[inline]
    fn sub_assign(&mut self, rhs: Fp6) {
        *self = &*self - &rhs;
    }
}

impl MulAssign<Fp6> for Fp6 {
    #[inline]
    fn mul_assign(&mut self, rhs: Fp6) {
        *self = &*self * &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_core::SeedableRng;

    fn sample(rng: &mut impl rand_core::RngCore) -> Fp6 {
        Fp6::new(Fp2::random(&mut *rng), Fp2::random(&mut *rng), Fp2::random(&mut *rng))
    }

    #[test]
    fn test_v_cubed_is_xi() {
        let v = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());
        let xi = Fp6::new(Fp2::one().mul_by_nonresidue(), Fp2::zero(), Fp2::zero());
        assert_eq!(v * v * v, xi);
    }

    #[test]
    fn test_mul_by_nonresidue_matches_mul_by_v() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(6);
        let v = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());
        for _ in 0..10 {
            let a = sample(&mut rng);
            assert_eq!(a.mul_by_nonresidue(), a * v);
        }
    }

    #[test]
    fn test_ring_axioms_on_random_samples() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10 {
            let a = sample(&mut rng);
            let b = sample(&mut rng);
            let c = sample(&mut rng);
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!((a * b) * c, a * (b * c));
            assert_eq!(a * (b + c), a * b + a * c);
        }
    }

    #[test]
    fn test_inverse() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(8);
        for _ in 0..10 {
            let a = sample(&mut rng);
            assert_eq!(a * a.invert(), Fp6::one());
        }
        assert_eq!(Fp6::zero().invert(), Fp6::zero());
    }

    #[test]
    fn test_square_matches_mul() {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
        let a = sample(&mut rng);
        assert_eq!(a.square(), a * a);
    }
}
