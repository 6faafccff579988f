//! Benchmarks for the C11 chain and its primitives

use c11_core::{Algorithm, C11_STAGES, Chain, chain11, chain11_batch};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn bench_chain(c: &mut Criterion) {
    let header = [0x5au8; 80];

    c.bench_function("c11_header", |b| b.iter(|| chain11(black_box(&header))));

    let chain = Chain::new(C11_STAGES);
    c.bench_function("c11_chain_struct", |b| {
        b.iter(|| chain.digest(black_box(&header)))
    });
}

fn bench_chain_varying_nonce(c: &mut Criterion) {
    c.bench_function("c11_varying_nonce", |b| {
        let mut header = [0u8; 80];
        let mut nonce: u32 = 0;
        b.iter(|| {
            header[76..].copy_from_slice(&nonce.to_le_bytes());
            nonce = nonce.wrapping_add(1);
            chain11(black_box(&header))
        })
    });
}

fn bench_primitives(c: &mut Criterion) {
    let input = [0xa5u8; 64];
    let mut group = c.benchmark_group("primitive_64b");
    group.throughput(Throughput::Bytes(input.len() as u64));
    for alg in Algorithm::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(alg), &input, |b, input| {
            b.iter(|| alg.hash512(black_box(input)))
        });
    }
    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let headers: Vec<[u8; 80]> = (0u32..256)
        .map(|i| {
            let mut h = [0u8; 80];
            h[76..].copy_from_slice(&i.to_le_bytes());
            h
        })
        .collect();
    let mut group = c.benchmark_group("c11_batch");
    group.throughput(Throughput::Elements(headers.len() as u64));
    group.bench_function("256_headers", |b| {
        b.iter(|| chain11_batch(black_box(&headers)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_chain,
    bench_chain_varying_nonce,
    bench_primitives,
    bench_batch
);
criterion_main!(benches);
