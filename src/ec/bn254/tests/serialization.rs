//! Wire-encoding tests for the fixed-width G1/G2/Gt layouts

use rand_core::OsRng;

use super::super::{pairing, G1Affine, G2Affine, Gt, Scalar};
use crate::error::Error;

// ============================================================================
// G1: 64 bytes
// ============================================================================

#[test]
fn test_g1_round_trip() {
    let points = [
        G1Affine::generator(),
        G1Affine::generator().double(),
        G1Affine::random(OsRng),
    ];
    for p in points {
        let bytes = p.to_bytes();
        assert_eq!(G1Affine::from_bytes(&bytes).unwrap(), p);
    }
}

#[test]
fn test_g1_infinity_encoding() {
    let o = G1Affine::identity();
    assert_eq!(o.to_bytes(), [0u8; 64]);
    let decoded = G1Affine::from_bytes(&[0u8; 64]).unwrap();
    assert!(bool::from(decoded.is_identity()));
}

#[test]
fn test_g1_generator_bytes_layout() {
    // X = 1 and Y = 2, big-endian zero-padded
    let bytes = G1Affine::generator().to_bytes();
    assert_eq!(bytes.len(), 64);
    assert!(bytes[0..31].iter().all(|&b| b == 0));
    assert_eq!(bytes[31], 1);
    assert!(bytes[32..63].iter().all(|&b| b == 0));
    assert_eq!(bytes[63], 2);
}

#[test]
fn test_g1_wrong_length_rejected() {
    assert_eq!(
        G1Affine::from_bytes(&[0u8; 63]),
        Err(Error::InvalidEncoding {
            context: "G1 point",
            expected: 64,
            actual: 63,
        })
    );
    assert!(G1Affine::from_bytes(&[0u8; 65]).is_err());
}

#[test]
fn test_g1_off_curve_bytes_rejected() {
    let mut bytes = [0u8; 64];
    bytes[31] = 1;
    bytes[63] = 3; // (1, 3) is not on the curve
    assert_eq!(
        G1Affine::from_bytes(&bytes),
        Err(Error::InvalidPoint { group: "G1" })
    );
}

#[test]
fn test_g1_non_canonical_coordinate_rejected() {
    // X = p is not a canonical field element
    let mut bytes = [0u8; 64];
    let p_be = [
        0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81,
        0x81, 0x58, 0x5d, 0x97, 0x81, 0x6a, 0x91, 0x68, 0x71, 0xca, 0x8d, 0x3c, 0x20,
        0x8c, 0x16, 0xd8, 0x7c, 0xfd, 0x47,
    ];
    bytes[0..32].copy_from_slice(&p_be);
    bytes[63] = 2;
    assert!(G1Affine::from_bytes(&bytes).is_err());
}

// ============================================================================
// G2: 128 bytes
// ============================================================================

#[test]
fn test_g2_round_trip() {
    let points = [
        G2Affine::generator(),
        G2Affine::generator().double(),
        G2Affine::random(OsRng),
    ];
    for p in points {
        let bytes = p.to_bytes();
        assert_eq!(G2Affine::from_bytes(&bytes).unwrap(), p);
    }
}

#[test]
fn test_g2_infinity_encoding() {
    let o = G2Affine::identity();
    assert_eq!(o.to_bytes(), [0u8; 128]);
    let decoded = G2Affine::from_bytes(&[0u8; 128]).unwrap();
    assert!(bool::from(decoded.is_identity()));
}

#[test]
fn test_g2_wrong_length_rejected() {
    assert_eq!(
        G2Affine::from_bytes(&[0u8; 64]),
        Err(Error::InvalidEncoding {
            context: "G2 point",
            expected: 128,
            actual: 64,
        })
    );
}

#[test]
fn test_g2_off_curve_bytes_rejected() {
    let mut bytes = [0u8; 128];
    bytes[31] = 1; // x = (1, 0), y = (0, 0) is not on the twist
    assert_eq!(
        G2Affine::from_bytes(&bytes),
        Err(Error::InvalidPoint { group: "G2" })
    );
}

// ============================================================================
// Gt: 384 bytes
// ============================================================================

#[test]
fn test_gt_round_trip() {
    let e = pairing(&G1Affine::generator(), &G2Affine::generator());
    let bytes = e.to_bytes();
    assert_eq!(bytes.len(), 384);
    assert_eq!(Gt::from_bytes(&bytes).unwrap(), e);

    let f = e.pow(&Scalar::from(12345));
    assert_eq!(Gt::from_bytes(&f.to_bytes()).unwrap(), f);
}

#[test]
fn test_gt_identity_encoding() {
    let one = Gt::identity();
    let bytes = one.to_bytes();
    // 1 + 0·u + 0·v + … : a single 1 byte at the end of the first
    // 32-byte coefficient
    assert_eq!(bytes[31], 1);
    assert!(bytes[0..31].iter().all(|&b| b == 0));
    assert!(bytes[32..].iter().all(|&b| b == 0));

    assert_eq!(Gt::from_bytes(&bytes).unwrap(), one);
}

#[test]
fn test_gt_wrong_length_rejected() {
    assert_eq!(
        Gt::from_bytes(&[0u8; 383]),
        Err(Error::InvalidEncoding {
            context: "Gt element",
            expected: 384,
            actual: 383,
        })
    );
}

#[test]
fn test_gt_non_canonical_coefficient_rejected() {
    let mut bytes = [0xffu8; 384];
    bytes[0] = 0xff; // every coefficient ≥ p
    assert!(Gt::from_bytes(&bytes).is_err());
}
