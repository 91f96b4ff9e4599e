use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use kuz_core::{decrypt_block, encrypt_block, expand_key, MasterKey};

fn bench_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule");
    group.bench_function("expand_key", |b| {
        let key = MasterKey::from([0u8; 32]);
        b.iter(|| expand_key(&key));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key_bytes = [0u8; 32];
    rng.fill_bytes(&mut key_bytes);
    let round_keys = expand_key(&MasterKey::from(key_bytes));

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys));
    });
    group.bench_function("decrypt_block", |b| {
        b.iter(|| decrypt_block(&block, &round_keys));
    });
    group.finish();
}

criterion_group!(benches, bench_schedule, bench_block);
criterion_main!(benches);
