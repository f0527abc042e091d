//! End-to-end RFC 6979 checks through the facade crate

use dnonce::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256, Sha384};

#[test]
fn test_p256_sample_through_free_function() {
    // RFC 6979, Appendix A.2.5
    let key = hex::decode("C9AFA9D845BA75166B5C215767B1D6934E50C3DB36E89B127B8A622B120F6721").unwrap();
    let hmac = HmacSha256::new();

    let k = derive_nonce(
        &Sha256::digest(b"sample"),
        &key[..],
        &NIST_P256,
        &hmac,
        &DeriveOptions::default(),
    )
    .unwrap();

    assert_eq!(
        hex::encode_upper(k.as_bytes()),
        "A6E3C57DD01ABE90086538398355DD4C3B17AA873382B0F24D6129493D8AAD60"
    );
}

#[test]
fn test_p384_integer_key() {
    // RFC 6979, Appendix A.2.6, key supplied as an integer
    let key = BigUint::parse_bytes(
        b"6B9D3DAD2E1B8C1C05B19875B6659F4DE23C3B667BF297BA9AA47740787137D896D5724E4C70A825F872C9EA60D2EDF5",
        16,
    )
    .unwrap();
    let hmac = HmacSha384::new();

    let k = NonceDeriver::new(&NIST_P384)
        .with_hmac(&hmac)
        .derive(&Sha384::digest(b"test"), &key)
        .unwrap();

    let expected = BigUint::parse_bytes(
        b"015EE46A5BF88773ED9123A5AB0807962D193719503C527B031B4C2D225092ADA71F4A459BC0DA98ADB95837DB8312EA",
        16,
    )
    .unwrap();
    assert_eq!(k.to_biguint(), expected);
}

#[test]
fn test_custom_group_matches_named_group() {
    let custom = GroupParams::from_order("k1-copy", SECP256K1.order()).unwrap();
    let hmac = HmacSha256::new();
    let digest = Sha256::digest(b"Satoshi Nakamoto");
    let key = "0000000000000000000000000000000000000000000000000000000000000001";

    let named = NonceDeriver::new(&SECP256K1).with_hmac(&hmac).derive(&digest, key).unwrap();
    let copied = NonceDeriver::new(&custom).with_hmac(&hmac).derive(&digest, key).unwrap();

    assert_eq!(named, copied);
    assert_eq!(
        hex::encode_upper(named.as_bytes()),
        "8F8A276C19F4149656B280621E358CCE24F5F52542772691EE69063B74F15D15"
    );
}

#[test]
fn test_hedged_nonce_with_seeded_rng() {
    let hmac = HmacSha256::new();
    let key = [0x5Au8; 32];
    let digest = Sha256::digest(b"hedged signing");
    let options = DeriveOptions::default().with_extra_entropy(ExtraEntropy::Generate);

    let mut rng_a = ChaCha20Rng::seed_from_u64(42);
    let mut rng_b = ChaCha20Rng::seed_from_u64(42);
    let mut rng_c = ChaCha20Rng::seed_from_u64(43);

    let a = derive_nonce_with_rng(&digest, &key, &SECP256K1, &hmac, &options, &mut rng_a).unwrap();
    let b = derive_nonce_with_rng(&digest, &key, &SECP256K1, &hmac, &options, &mut rng_b).unwrap();
    let c = derive_nonce_with_rng(&digest, &key, &SECP256K1, &hmac, &options, &mut rng_c).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let plain = derive_nonce(&digest, &key, &SECP256K1, &hmac, &DeriveOptions::default()).unwrap();
    assert_ne!(a, plain);
}

#[test]
fn test_os_entropy_differs_between_calls() {
    let hmac = HmacSha256::new();
    let deriver = NonceDeriver::new(&NIST_P256)
        .with_hmac(&hmac)
        .with_options(DeriveOptions::default().with_extra_entropy(true));
    let key = [0x33u8; 32];
    let digest = [0x44u8; 32];

    assert_ne!(deriver.derive(&digest, &key).unwrap(), deriver.derive(&digest, &key).unwrap());
}

#[test]
fn test_error_reporting() {
    let hmac = HmacSha256::new();
    let err = NonceDeriver::new(&SECP256K1)
        .with_hmac(&hmac)
        .derive(&[0u8; 32], &[0u8; 32])
        .unwrap_err();

    assert!(matches!(err, Error::InvalidPrivateKey { .. }));
    assert_eq!(err.context(), "PrivateKey");
    assert_eq!(
        err.to_string(),
        "Invalid private key: PrivateKey: private key must satisfy 0 < x < N"
    );

    let err = NonceDeriver::new(&SECP256K1)
        .derive(&[0u8; 32], &[1u8; 32])
        .unwrap_err();
    assert_eq!(err.to_string(), "Missing primitive: HMAC is not available");
}

#[test]
fn test_concurrent_derivations_are_independent() {
    let hmac = HmacSha256::new();
    let deriver = NonceDeriver::new(&SECP256K1).with_hmac(&hmac);
    let key = [0x21u8; 32];

    let expected: Vec<Nonce> = (0u8..4)
        .map(|i| deriver.derive(&[i; 32], &key).unwrap())
        .collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0u8..4)
            .map(|i| {
                scope.spawn(move || {
                    let hmac = HmacSha256::new();
                    NonceDeriver::new(&SECP256K1)
                        .with_hmac(&hmac)
                        .derive(&[i; 32], &key)
                        .unwrap()
                })
            })
            .collect();

        for (handle, expected) in handles.into_iter().zip(&expected) {
            assert_eq!(&handle.join().unwrap(), expected);
        }
    });
}
