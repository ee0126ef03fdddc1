use super::*;
use crate::rsa::keys::RsaKeyPair;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use veil_algorithms::hash::{Sha256, Sha512};

fn pair_1024() -> RsaKeyPair {
    let mut rng = ChaCha20Rng::seed_from_u64(0xA0A0);
    RsaKeyPair::generate(1024, &mut rng).unwrap()
}

#[test]
fn round_trip_single_block() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let msg = b"attack at dawn";
    let ct = Oaep::<Sha256>::encrypt(&pair.public, msg, b"", &mut rng).unwrap();
    assert_eq!(ct.len(), pair.public.modulus_size());
    assert_eq!(Oaep::<Sha256>::decrypt(&pair.private, &ct, b"").unwrap(), msg);
}

#[test]
fn round_trip_empty_message() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let ct = Oaep::<Sha256>::encrypt(&pair.public, b"", b"", &mut rng).unwrap();
    assert_eq!(ct.len(), pair.public.modulus_size());
    let pt = Oaep::<Sha256>::decrypt(&pair.private, &ct, b"").unwrap();
    assert!(pt.is_empty());
}

#[test]
fn long_message_spans_blocks() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    let capacity = Oaep::<Sha256>::max_message_len(&pair.public).unwrap();
    // 128 - 2*32 - 2 = 62 bytes per block for SHA-256 under a 1024-bit key
    assert_eq!(capacity, 62);

    let msg: Vec<u8> = (0..200u32).map(|i| i as u8).collect();
    let ct = Oaep::<Sha256>::encrypt(&pair.public, &msg, b"ctx", &mut rng).unwrap();
    assert_eq!(ct.len(), 4 * pair.public.modulus_size());
    assert_eq!(
        Oaep::<Sha256>::decrypt(&pair.private, &ct, b"ctx").unwrap(),
        msg
    );
}

#[test]
fn exact_capacity_fills_one_block() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let capacity = Oaep::<Sha256>::max_message_len(&pair.public).unwrap();
    let msg = vec![0x5Au8; capacity];
    let ct = Oaep::<Sha256>::encrypt(&pair.public, &msg, b"", &mut rng).unwrap();
    assert_eq!(ct.len(), pair.public.modulus_size());
    assert_eq!(Oaep::<Sha256>::decrypt(&pair.private, &ct, b"").unwrap(), msg);
}

#[test]
fn wrong_label_fails() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let ct = Oaep::<Sha256>::encrypt(&pair.public, b"secret", b"label-a", &mut rng).unwrap();
    assert!(Oaep::<Sha256>::decrypt(&pair.private, &ct, b"label-b").is_none());
    assert!(Oaep::<Sha256>::decrypt(&pair.private, &ct, b"label-a").is_some());
}

#[test]
fn corrupted_block_fails() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(6);
    let mut ct = Oaep::<Sha256>::encrypt(&pair.public, b"secret", b"", &mut rng).unwrap();
    ct[10] ^= 0x01;
    assert!(Oaep::<Sha256>::decrypt(&pair.private, &ct, b"").is_none());
}

#[test]
fn ragged_ciphertext_length_fails() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let ct = Oaep::<Sha256>::encrypt(&pair.public, b"secret", b"", &mut rng).unwrap();
    assert!(Oaep::<Sha256>::decrypt(&pair.private, &ct[..ct.len() - 1], b"").is_none());
    assert!(Oaep::<Sha256>::decrypt(&pair.private, &[], b"").is_none());
}

#[test]
fn encryption_is_randomized() {
    let pair = pair_1024();
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let a = Oaep::<Sha256>::encrypt(&pair.public, b"same", b"", &mut rng).unwrap();
    let b = Oaep::<Sha256>::encrypt(&pair.public, b"same", b"", &mut rng).unwrap();
    assert_ne!(a, b);
}

#[test]
fn sha512_needs_a_wider_modulus() {
    // 1024-bit modulus: 128 - 2*64 - 2 < 0, no room under SHA-512
    let pair = pair_1024();
    assert!(Oaep::<Sha512>::max_message_len(&pair.public).is_none());
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    assert!(Oaep::<Sha512>::encrypt(&pair.public, b"x", b"", &mut rng).is_none());
}
