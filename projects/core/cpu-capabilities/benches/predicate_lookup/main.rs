use core::hint::black_box;
use cpu_capabilities::{CapabilityOracle, CpuidSource, HardwareCpuid, CPUID_LEAF, CPUID_SUB_LEAF};
use criterion::{criterion_group, criterion_main, Criterion};

#[cfg(any(target_os = "linux", target_os = "macos"))]
use pprof::criterion::{Output, PProfProfiler};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("AVX2 Detection");

    // Warm the process-wide snapshot so only the cached path is measured.
    black_box(cpu_capabilities::snapshot());

    group.bench_function("cpu_capabilities::has_avx2", |b| {
        b.iter(|| black_box(cpu_capabilities::has_avx2()))
    });

    group.bench_function("std::is_x86_feature_detected", |b| {
        b.iter(|| black_box(std::is_x86_feature_detected!("avx2")))
    });

    cpufeatures::new!(cpuid_avx2, "avx2");
    group.bench_function("cpufeatures", |b| b.iter(|| black_box(cpuid_avx2::get())));

    // Cost of the cold path: one fresh oracle per iteration.
    group.bench_function("cold oracle", |b| {
        b.iter(|| {
            let oracle = CapabilityOracle::new(HardwareCpuid);
            black_box(oracle.has_avx2())
        })
    });

    group.bench_function("raw cpuid", |b| {
        b.iter(|| black_box(HardwareCpuid.query(CPUID_LEAF, CPUID_SUB_LEAF)))
    });

    group.finish();
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
