use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rawsockets::{build_address, protocols, registry};

/// Constant resolution after the table is built; this is on the path of
/// every option call made by name.
fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    // warm the table so population is not measured
    registry::resolve("AF_INET").unwrap();

    for name in ["AF_INET", "SO_RCVTIMEO", "IPV6_HDRINCL", "NOT_DEFINED"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| registry::resolve(black_box(name)))
        });
    }
    group.finish();
}

fn benchmark_build_address(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_address");
    let v4 = [192u8, 168, 0, 1];
    let v6 = [0xfeu8; 16];
    group.bench_function("ipv4", |b| b.iter(|| build_address(black_box(&v4))));
    group.bench_function("ipv6", |b| b.iter(|| build_address(black_box(&v6))));
    group.finish();
}

/// Full database walk under the global lock.
fn benchmark_list_all(c: &mut Criterion) {
    rawsockets::init().unwrap();
    c.bench_function("protocols_list_all", |b| b.iter(protocols::list_all));
    rawsockets::finalize();
}

criterion_group!(
    benches,
    benchmark_resolve,
    benchmark_build_address,
    benchmark_list_all
);
criterion_main!(benches);
