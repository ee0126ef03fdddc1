//! End-to-end scenarios across the facade crate

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use veil::prelude::*;

#[test]
fn hashes_are_reachable_through_the_facade() {
    let digest = Sha256::digest(b"abc").unwrap();
    assert_eq!(
        digest.to_hex(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(Sha512::digest(b"").unwrap().as_ref().len(), 64);
}

#[test]
fn hybrid_envelope_round_trip() {
    // AES key wrapped with OAEP, payload encrypted with CBC, the whole
    // thing signed with PSS. The receiving side unwinds it in reverse.
    let mut rng = ChaCha20Rng::seed_from_u64(0xE0E0);
    let cipher_pair = RsaKeyPair::generate(1024, &mut rng).unwrap();
    let signing_pair = RsaKeyPair::generate(1024, &mut rng).unwrap();

    let payload = b"meet me where the river bends, bring the ledgers".to_vec();

    // Sender
    let session_key = Aes128::generate_key(&mut rng);
    let iv = {
        let mut iv = [0u8; 16];
        rand::RngCore::fill_bytes(&mut rng, &mut iv);
        iv
    };
    let cbc = Cbc::new(Aes128::new(&session_key), iv).unwrap();
    let body = cbc.encrypt_keep_size(&payload).unwrap();
    let wrapped_key = Oaep::<Sha256>::encrypt(
        &cipher_pair.public,
        session_key.as_ref(),
        b"session",
        &mut rng,
    )
    .unwrap();
    let signature = Pss::<Sha256>::sign(&signing_pair.private, &body, &mut rng).unwrap();

    // Receiver
    assert!(Pss::<Sha256>::verify(&signing_pair.public, &body, &signature));
    let key_bytes =
        Oaep::<Sha256>::decrypt(&cipher_pair.private, &wrapped_key, b"session").unwrap();
    let session_key = SecretBytes::<16>::from_slice_padded(&key_bytes);
    let cbc = Cbc::new(Aes128::new(&session_key), iv).unwrap();
    assert_eq!(cbc.decrypt_keep_size(&body).unwrap(), payload);
}

#[test]
fn key_bundle_travels_as_text() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xE1E1);
    let cipher_pair = RsaKeyPair::generate(512, &mut rng).unwrap();
    let signing_pair = RsaKeyPair::generate(512, &mut rng).unwrap();

    let bundle = KeyBundle {
        cipher: KeyComponents::from(&cipher_pair.public),
        signature: KeyComponents::from(&signing_pair.public),
    };
    let text = bundle.render();

    let parsed = KeyBundle::parse(&text).unwrap();
    let public = parsed.cipher.into_public().unwrap();
    assert_eq!(&public, &cipher_pair.public);

    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let ct = Oaep::<Sha256>::encrypt(&public, b"hello", b"", &mut rng).unwrap();
    assert_eq!(
        Oaep::<Sha256>::decrypt(&cipher_pair.private, &ct, b"").unwrap(),
        b"hello"
    );
}

#[test]
fn zero_iv_mode_is_deterministic_across_instances() {
    let key = SecretBytes::<32>::new([0x42u8; 32]);
    let a = Cbc::with_zero_iv(Aes256::new(&key)).unwrap();
    let b = Cbc::with_zero_iv(Aes256::new(&key)).unwrap();
    let msg = b"determinism check";
    assert_eq!(a.encrypt(msg).unwrap(), b.encrypt(msg).unwrap());
}
