use super::*;
use crate::hash::{Sha256, Sha512};

#[test]
fn zero_length_mask_is_empty() {
    assert!(Mgf1::<Sha256>::derive(b"seed", 0).unwrap().is_empty());
    assert!(Mgf1::<Sha512>::derive(b"", 0).unwrap().is_empty());
}

#[test]
fn mask_length_is_exact() {
    for len in [1usize, 31, 32, 33, 64, 65, 200] {
        assert_eq!(Mgf1::<Sha256>::derive(b"seed", len).unwrap().len(), len);
        assert_eq!(Mgf1::<Sha512>::derive(b"seed", len).unwrap().len(), len);
    }
}

#[test]
fn known_sha256_vector() {
    // Public MGF1-SHA256 vector for seed "bar", 50 bytes
    let expected = "382576a7841021cc28fc4c0948753fb8312090cea942ea4c4e735d10dc724b15\
                    5f9f6069f289d61daca0cb814502ef04eae1";
    let mask = Mgf1::<Sha256>::derive(b"bar", 50).unwrap();
    assert_eq!(hex::encode(mask), expected);
}

#[test]
fn longer_mask_extends_shorter_one() {
    // Truncation property: MGF1(seed, a) is a prefix of MGF1(seed, b) for a < b
    let short = Mgf1::<Sha256>::derive(b"prefix", 20).unwrap();
    let long = Mgf1::<Sha256>::derive(b"prefix", 100).unwrap();
    assert_eq!(&long[..20], &short[..]);
}

#[test]
fn different_seeds_differ() {
    let a = Mgf1::<Sha256>::derive(b"seed a", 32).unwrap();
    let b = Mgf1::<Sha256>::derive(b"seed b", 32).unwrap();
    assert_ne!(a, b);
}
