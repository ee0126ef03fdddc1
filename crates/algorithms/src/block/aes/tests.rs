use super::*;
use crate::block::BlockCipher;
use crate::types::SecretBytes;

// FIPS-197 Appendix C vectors: the same plaintext under the three
// sequential example keys.
const PLAINTEXT: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

fn sequential_key<const N: usize>() -> SecretBytes<N> {
    let mut key = [0u8; N];
    for (i, byte) in key.iter_mut().enumerate() {
        *byte = i as u8;
    }
    SecretBytes::new(key)
}

#[test]
fn aes128_fips197_vector() {
    let cipher = Aes128::new(&sequential_key::<16>());
    let mut block = PLAINTEXT;
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "69c4e0d86a7b0430d8cdb78070b4c55a");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, PLAINTEXT);
}

#[test]
fn aes192_fips197_vector() {
    let cipher = Aes192::new(&sequential_key::<24>());
    let mut block = PLAINTEXT;
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "dda97ca4864cdfe06eaf70a0ec0d7191");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, PLAINTEXT);
}

#[test]
fn aes256_fips197_vector() {
    let cipher = Aes256::new(&sequential_key::<32>());
    let mut block = PLAINTEXT;
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "8ea2b7ca516745bfeafc49904b496089");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, PLAINTEXT);
}

#[test]
fn aes128_appendix_b_vector() {
    // FIPS-197 Appendix B worked example
    let key = SecretBytes::new([
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ]);
    let cipher = Aes128::new(&key);
    let mut block = [
        0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37, 0x07,
        0x34,
    ];
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(block), "3925841d02dc09fbdc118597196a0b32");
}

#[test]
fn short_slice_key_is_zero_padded() {
    let padded = Aes128::new_from_slice(b"short");
    let mut key = [0u8; 16];
    key[..5].copy_from_slice(b"short");
    let explicit = Aes128::new(&SecretBytes::new(key));

    let mut a = PLAINTEXT;
    let mut b = PLAINTEXT;
    padded.encrypt_block(&mut a).unwrap();
    explicit.encrypt_block(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn wrong_block_length_is_rejected() {
    let cipher = Aes128::new(&sequential_key::<16>());
    let mut short = [0u8; 15];
    assert!(cipher.encrypt_block(&mut short).is_err());
    assert!(cipher.decrypt_block(&mut short).is_err());
}

#[test]
fn random_key_round_trip() {
    use rand::SeedableRng;
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(7);

    let key = Aes256::generate_key(&mut rng);
    let cipher = Aes256::new(&key);
    let mut block = PLAINTEXT;
    cipher.encrypt_block(&mut block).unwrap();
    assert_ne!(block, PLAINTEXT);
    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(block, PLAINTEXT);
}
