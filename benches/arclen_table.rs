// Copyright 2026 the Cubic Arclen Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks of arc-length table building and sampling.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use cubic_arclen::{
    sample_equal_s, sample_equal_t, ArclenTable, CubicBez, ParamCurveArclen, QuadratureRule,
};

fn s_curve() -> CubicBez {
    CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
}

fn bench_build(cc: &mut Criterion) {
    let c = s_curve();
    for (name, rule) in [
        ("trapezoid", QuadratureRule::Trapezoid),
        ("simpson", QuadratureRule::Simpson),
        ("gauss-legendre", QuadratureRule::GaussLegendre),
    ] {
        cc.bench_function(&format!("table build 100 {name}"), |bb| {
            bb.iter(|| ArclenTable::build(black_box(&c), 100, rule));
        });
    }
    cc.bench_function("table build 1000 trapezoid", |bb| {
        bb.iter(|| ArclenTable::build(black_box(&c), 1000, QuadratureRule::Trapezoid));
    });
}

fn bench_lookup(cc: &mut Criterion) {
    let c = s_curve();
    let table = ArclenTable::build(&c, 100, QuadratureRule::Trapezoid);
    cc.bench_function("table inverse", |bb| {
        bb.iter(|| table.inv_arclen_normalized(black_box(0.37)));
    });
    cc.bench_function("bisection inverse 1e-6", |bb| {
        let total = c.arclen(1e-9);
        bb.iter(|| black_box(c).inv_arclen(0.37 * total, 1e-6));
    });
}

fn bench_sample(cc: &mut Criterion) {
    let c = s_curve();
    let table = ArclenTable::build(&c, 100, QuadratureRule::Trapezoid);
    cc.bench_function("sample equal-t 10", |bb| {
        bb.iter(|| sample_equal_t(black_box(&c), 10));
    });
    cc.bench_function("sample equal-s 10", |bb| {
        bb.iter(|| sample_equal_s(black_box(&table), &c, 10));
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_sample);
criterion_main!(benches);
