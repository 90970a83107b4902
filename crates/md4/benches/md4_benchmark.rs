//! crates/md4/benches/md4_benchmark.rs
//!
//! Benchmarks for MD4 digest computation performance.
//!
//! Run with: `cargo bench -p md4`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::Rng;

use md4::Md4;

/// Generate random data of the specified size.
fn generate_random_data(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let mut data = vec![0u8; size];
    rng.fill(&mut data[..]);
    data
}

/// Benchmark one-shot digest computation for different input sizes.
fn bench_md4_one_shot(c: &mut Criterion) {
    let mut group = c.benchmark_group("md4_one_shot");

    for size in [64, 512, 1024, 4096, 8192, 32768, 131072] {
        let data = generate_random_data(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("digest", size), &data, |b, data| {
            b.iter(|| black_box(Md4::digest(black_box(data))));
        });
    }

    group.finish();
}

/// Benchmark streaming absorption across chunk sizes for a fixed input.
fn bench_md4_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("md4_streaming");

    let data = generate_random_data(64 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk_size in [64, 512, 4096, 32768] {
        group.bench_with_input(
            BenchmarkId::new("update", chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| {
                    let mut hasher = Md4::new();
                    for chunk in data.chunks(chunk_size) {
                        hasher.update(black_box(chunk));
                    }
                    black_box(hasher.finalize())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_md4_one_shot, bench_md4_streaming);
criterion_main!(benches);
