// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use kdf::{HmacSha1, HmacSha256, HmacSha512, Pbkdf2};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_derive(c: &mut Criterion) {
    c.bench_function("derive one hmac-sha1 block", |b| {
        let kdf = Pbkdf2::new(HmacSha1::prf()).unwrap();
        let mut buf = [0; 20];
        b.iter(|| {
            kdf.derive(&mut buf, black_box(b"password"), black_box(b"salt"), 1_000)
                .unwrap();
        });
    });

    c.bench_function("derive one hmac-sha256 block", |b| {
        let kdf = Pbkdf2::new(HmacSha256::prf()).unwrap();
        let mut buf = [0; 32];
        b.iter(|| {
            kdf.derive(&mut buf, black_box(b"password"), black_box(b"salt"), 1_000)
                .unwrap();
        });
    });

    c.bench_function("derive one hmac-sha512 block", |b| {
        let kdf = Pbkdf2::new(HmacSha512::prf()).unwrap();
        let mut buf = [0; 64];
        b.iter(|| {
            kdf.derive(&mut buf, black_box(b"password"), black_box(b"salt"), 1_000)
                .unwrap();
        });
    });
}

fn bench_derive_batch(c: &mut Criterion) {
    c.bench_function("derive eight blocks sequentially", |b| {
        let kdf = Pbkdf2::new(HmacSha256::prf()).unwrap();
        let mut buf = [0; 256];
        b.iter(|| {
            kdf.derive(&mut buf, black_box(b"password"), black_box(b"salt"), 1_000)
                .unwrap();
        });
    });

    c.bench_function("derive eight blocks as a batch", |b| {
        let kdf = Pbkdf2::new(HmacSha256::prf()).unwrap();
        let mut buf = [0; 256];
        b.iter(|| {
            kdf.derive_parallel(&mut buf, black_box(b"password"), black_box(b"salt"), 1_000)
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_derive, bench_derive_batch);
criterion_main!(benches);
