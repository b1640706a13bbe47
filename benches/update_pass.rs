//! Benchmark of the per-frame animation pass.
//!
//! The pass recomputes and rewrites every star position; at 100k stars it
//! has to fit comfortably inside a 60 Hz frame on the CPU.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orbitfield::{GalaxyConfig, StarField};

fn bench_update(c: &mut Criterion) {
    let config = GalaxyConfig {
        seed: Some(0),
        ..GalaxyConfig::default()
    };
    let mut field = StarField::generate(&config).unwrap();

    let mut t = 0.0_f32;
    c.bench_function("update_100k", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            field.update(black_box(t));
        })
    });

    let small = GalaxyConfig {
        num_particles: 10_000,
        seed: Some(0),
        ..GalaxyConfig::default()
    };
    let mut small_field = StarField::generate(&small).unwrap();
    c.bench_function("update_10k", |b| {
        b.iter(|| {
            t += 1.0 / 60.0;
            small_field.update(black_box(t));
        })
    });
}

criterion_group!(benches, bench_update);
criterion_main!(benches);
