use criterion::{BatchSize, BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use chainmac::bench::driver::run_with;
use chainmac::chain::engine::sign;
use chainmac::chain::row::RowStore;
use chainmac::mac::hmac_sha2::HmacSha2;
use chainmac::mac::hmac_sha3::HmacSha3;
use chainmac::mac::keyed_blake3::KeyedBlake3;
use chainmac::mac::primitive::MacPrimitive;

const SECRET: [u8; 32] = [0u8; 32];

// Benchmark a single MAC call per primitive.
fn benchmark_single_mac(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Single MAC");
    let message: &[u8; 6] = b"123456";

    group.bench_function(HmacSha2::NAME, |b| b.iter(|| HmacSha2.mac(black_box(&SECRET), black_box(message))));
    group.bench_function(HmacSha3::NAME, |b| b.iter(|| HmacSha3.mac(black_box(&SECRET), black_box(message))));
    group.bench_function(KeyedBlake3::NAME, |b| b.iter(|| KeyedBlake3.mac(black_box(&SECRET), black_box(message))));
    group.finish();
}

fn bench_sign<M: MacPrimitive>(group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>, primitive: &M, rows: usize) {
    group.bench_with_input(BenchmarkId::new(M::NAME, rows), &rows, |b, &rows| {
        // Seeding stays outside the measured routine.
        b.iter_batched(
            || RowStore::seed(rows),
            |mut store: RowStore| sign(&mut store, primitive, &SECRET),
            BatchSize::LargeInput,
        )
    });
}

fn bench_round_trip<M: MacPrimitive>(group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>, primitive: &M, rows: usize) {
    group.bench_with_input(BenchmarkId::new(M::NAME, rows), &rows, |b, &rows| {
        b.iter_batched(
            || RowStore::seed(rows),
            |mut store: RowStore| run_with(primitive, &mut store, &SECRET),
            BatchSize::LargeInput,
        )
    });
}

// Benchmark signing a chain of rows.
fn benchmark_sign(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Chain Sign");

    for rows in [1_000usize, 10_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));
        bench_sign(&mut group, &HmacSha2, *rows);
        bench_sign(&mut group, &HmacSha3, *rows);
        bench_sign(&mut group, &KeyedBlake3, *rows);
    }
    group.finish();
}

// Benchmark the full sign+verify pass the driver times.
fn benchmark_round_trip(c: &mut Criterion) {
    let mut group: BenchmarkGroup<'_, criterion::measurement::WallTime> = c.benchmark_group("Chain Sign+Verify");

    for rows in [1_000usize, 10_000].iter() {
        group.throughput(Throughput::Elements(*rows as u64));
        bench_round_trip(&mut group, &HmacSha2, *rows);
        bench_round_trip(&mut group, &HmacSha3, *rows);
        bench_round_trip(&mut group, &KeyedBlake3, *rows);
    }
    group.finish();
}

criterion_group!(benches, benchmark_single_mac, benchmark_sign, benchmark_round_trip);
criterion_main!(benches);
