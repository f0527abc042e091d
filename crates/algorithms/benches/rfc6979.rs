//! Benchmarks for RFC 6979 nonce derivation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dnonce_algorithms::mac::{HmacSha256, HmacSha512};
use dnonce_algorithms::rfc6979::{DeriveOptions, NonceDeriver};
use dnonce_api::{GroupParameters, HmacPrimitive};
use dnonce_params::{GroupParams, NIST_P521, SECP256K1};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256, Sha512};

/// Private key with the top byte cleared so it is below the order of every curve
fn bench_key(group: &GroupParams, rng: &mut ChaCha20Rng) -> Vec<u8> {
    let mut key = vec![0u8; group.scalar_len()];
    rng.fill_bytes(&mut key);
    key[0] = 0;
    key[1] |= 1;
    key
}

fn bench_curve(
    c: &mut Criterion,
    label: &str,
    group: &'static GroupParams,
    hmac: &dyn HmacPrimitive,
    digest: &[u8],
) {
    let mut rng = ChaCha20Rng::seed_from_u64(6979);
    let key = bench_key(group, &mut rng);
    let mut bench_group = c.benchmark_group(label);

    let deterministic = NonceDeriver::new(group).with_hmac(hmac);
    bench_group.bench_function("deterministic", |bench| {
        bench.iter(|| {
            deterministic
                .derive(black_box(digest), black_box(&key[..]))
                .expect("derivation should succeed")
        });
    });

    let hedged = deterministic
        .clone()
        .with_options(DeriveOptions::default().with_extra_entropy(true));
    bench_group.bench_function("hedged", |bench| {
        bench.iter(|| {
            hedged
                .derive_with_rng(black_box(digest), black_box(&key[..]), &mut rng)
                .expect("derivation should succeed")
        });
    });

    for size in [32usize, 1024] {
        let entropy = vec![0xA5u8; size];
        let explicit = deterministic
            .clone()
            .with_options(DeriveOptions::default().with_extra_entropy(entropy));
        bench_group.bench_with_input(BenchmarkId::new("explicit_entropy", size), &size, |bench, _| {
            bench.iter(|| {
                explicit
                    .derive(black_box(digest), black_box(&key[..]))
                    .expect("derivation should succeed")
            });
        });
    }

    bench_group.finish();
}

fn bench_secp256k1(c: &mut Criterion) {
    let hmac = HmacSha256::new();
    let digest = Sha256::digest(b"benchmark message");
    bench_curve(c, "rfc6979_secp256k1", &SECP256K1, &hmac, &digest);
}

fn bench_p521(c: &mut Criterion) {
    let hmac = HmacSha512::new();
    let digest = Sha512::digest(b"benchmark message");
    bench_curve(c, "rfc6979_p521", &NIST_P521, &hmac, &digest);
}

criterion_group!(benches, bench_secp256k1, bench_p521);
criterion_main!(benches);
