//! Cost of variant transitions per policy, against a plain enum.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tessera_variant::prelude::*;

type Alternatives = (u64, String);

#[allow(dead_code)]
enum Plain {
    Int(u64),
    Text(String),
}

// ============================================================================
// TYPE-CHANGING EMPLACE
// ============================================================================

fn bench_type_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_change");

    group.bench_function(BenchmarkId::new("strong", "u64<->String"), |b| {
        let mut v = Variant::<Alternatives>::new(0_u64);
        b.iter(|| {
            v.emplace(black_box(String::from("tessera")));
            v.emplace(black_box(7_u64));
        });
    });

    group.bench_function(BenchmarkId::new("empty_on_failure", "u64<->String"), |b| {
        let mut v = NullableVariant::<Alternatives>::new(0_u64);
        b.iter(|| {
            v.emplace(black_box(String::from("tessera")));
            v.emplace(black_box(7_u64));
        });
    });

    group.bench_function(BenchmarkId::new("fallback", "u64<->String"), |b| {
        let mut v = FallbackVariant::<Alternatives>::new(0_u64);
        b.iter(|| {
            v.emplace(black_box(String::from("tessera")));
            v.emplace(black_box(7_u64));
        });
    });

    group.bench_function(BenchmarkId::new("enum", "u64<->String"), |b| {
        let mut v = Plain::Int(0);
        b.iter(|| {
            v = Plain::Text(black_box(String::from("tessera")));
            black_box(&v);
            v = Plain::Int(black_box(7));
            black_box(&v);
        });
    });

    group.finish();
}

// ============================================================================
// ACCESS AND VISITATION
// ============================================================================

struct Len;

impl Visitor for Len {
    type Output = usize;
    fn visit_empty(&mut self) -> usize {
        0
    }
}

impl Visit<u64> for Len {
    fn visit(&mut self, _: &u64) -> usize {
        8
    }
}

impl Visit<String> for Len {
    fn visit(&mut self, value: &String) -> usize {
        value.len()
    }
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");
    let v = Variant::<Alternatives>::new(String::from("tessera"));

    group.bench_function("get", |b| {
        b.iter(|| black_box(&v).get::<String, _>().map(String::len));
    });

    group.bench_function("visit", |b| {
        b.iter(|| black_box(&v).visit(&mut Len));
    });

    group.bench_function("optional_map", |b| {
        b.iter(|| Optional::some(black_box(21_u64)).map(|x| x * 2).value_or(0));
    });

    group.finish();
}

criterion_group!(benches, bench_type_change, bench_access);
criterion_main!(benches);
