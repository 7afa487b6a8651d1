//! Field tower tests across all four levels

use rand_core::SeedableRng;

use super::super::field::fp::Fp;
use super::super::field::fp12::Fp12;
use super::super::field::fp2::Fp2;
use super::super::field::fp6::Fp6;

fn rng() -> rand_chacha::ChaCha8Rng {
    rand_chacha::ChaCha8Rng::seed_from_u64(0x424e_3235_34)
}

fn fp6(rng: &mut impl rand_core::RngCore) -> Fp6 {
    Fp6::new(
        Fp2::random(&mut *rng),
        Fp2::random(&mut *rng),
        Fp2::random(&mut *rng),
    )
}

fn fp12(rng: &mut impl rand_core::RngCore) -> Fp12 {
    Fp12::new(fp6(rng), fp6(rng))
}

// ============================================================================
// Inverse Across the Tower
// ============================================================================

#[test]
fn test_nonzero_inverse_all_levels() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp::random(&mut rng);
        if bool::from(a.is_zero()) {
            continue;
        }
        assert_eq!(a * a.invert(), Fp::one());

        let b = Fp2::random(&mut rng);
        assert_eq!(b * b.invert(), Fp2::one());

        let c = fp6(&mut rng);
        assert_eq!(c * c.invert(), Fp6::one());

        let d = fp12(&mut rng);
        assert_eq!(d * d.invert(), Fp12::one());
    }
}

#[test]
fn test_zero_inverse_all_levels() {
    // Inverse(0) = 0 by convention on every tower level
    assert_eq!(Fp::zero().invert(), Fp::zero());
    assert_eq!(Fp2::zero().invert(), Fp2::zero());
    assert_eq!(Fp6::zero().invert(), Fp6::zero());
    assert_eq!(Fp12::zero().invert(), Fp12::zero());
}

// ============================================================================
// Field Axioms on Random Samples
// ============================================================================

#[test]
fn test_fp_axioms() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp::random(&mut rng);
        let b = Fp::random(&mut rng);
        let c = Fp::random(&mut rng);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a.square(), a * a);
    }
}

#[test]
fn test_fp2_axioms() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp2::random(&mut rng);
        let b = Fp2::random(&mut rng);
        let c = Fp2::random(&mut rng);
        assert_eq!(a + b, b + a);
        assert_eq!(a * b, b * a);
        assert_eq!((a + b) + c, a + (b + c));
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a.square(), a * a);
    }
}

#[test]
fn test_fp6_axioms() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = fp6(&mut rng);
        let b = fp6(&mut rng);
        let c = fp6(&mut rng);
        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
    }
}

#[test]
fn test_fp12_axioms() {
    let mut rng = rng();
    for _ in 0..6 {
        let a = fp12(&mut rng);
        let b = fp12(&mut rng);
        let c = fp12(&mut rng);
        assert_eq!(a * b, b * a);
        assert_eq!((a * b) * c, a * (b * c));
    }
}

// ============================================================================
// Tower Structure
// ============================================================================

#[test]
fn test_tower_relations() {
    // u² = −1, v³ = ξ = 9 + u, w² = v
    let u = Fp2::new(Fp::zero(), Fp::one());
    assert_eq!(u * u, -Fp2::one());

    let v = Fp6::new(Fp2::zero(), Fp2::one(), Fp2::zero());
    let xi = Fp6::new(Fp2::one().mul_by_nonresidue(), Fp2::zero(), Fp2::zero());
    assert_eq!(v * v * v, xi);

    let w = Fp12::new(Fp6::zero(), Fp6::one());
    assert_eq!(w * w, Fp12::new(v, Fp6::zero()));
}

#[test]
fn test_embedding_is_homomorphic() {
    // Fp2 products commute with the embedding into Fp12
    let mut rng = rng();
    let a = Fp2::random(&mut rng);
    let b = Fp2::random(&mut rng);

    let lift = |x: Fp2| Fp12::new(Fp6::new(x, Fp2::zero(), Fp2::zero()), Fp6::zero());
    assert_eq!(lift(a) * lift(b), lift(a * b));
}
