//! Schoolbook vs. FFT multiplication throughput (spec §4.6 "crossover
//! tuning"), grounded in the teacher's own `benches/` harness style:
//! one `criterion_group` per algorithmic path. `Real::mul` dispatches on
//! `min(prec_elem)` against
//! [`mp_core::config::thresholds::SCHOOLBOOK_LIMB_MAX`], so each bench
//! clamps `prec_elem` to land clearly on one side of the crossover.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mp_core::config::thresholds;
use mp_core::precision::CorePrecision;
use mp_core::real::Real;

fn operand(digits10: i32, seed: u64) -> Real {
    let mut s = String::new();
    let mut x = seed;
    for _ in 0..digits10 {
        s.push((b'1' + (x % 9) as u8) as char);
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    }
    Real::parse(&s).unwrap()
}

fn bench_schoolbook(c: &mut Criterion) {
    CorePrecision::configure(4_000, 4).ok();
    let p = thresholds::SCHOOLBOOK_LIMB_MAX - 8;
    let mut a = operand(2_000, 12345);
    let mut b = operand(2_000, 54321);
    a.set_prec_elem(p);
    b.set_prec_elem(p);

    c.bench_function("schoolbook_multiply_below_crossover", |bch| {
        bch.iter(|| black_box(&a).mul(black_box(&b)))
    });
}

fn bench_fft(c: &mut Criterion) {
    CorePrecision::configure(4_000, 4).ok();
    let p = thresholds::SCHOOLBOOK_LIMB_MAX * 2;
    let mut a = operand(2_000, 98765);
    let mut b = operand(2_000, 13579);
    a.set_prec_elem(p.min(a.data().len()));
    b.set_prec_elem(p.min(b.data().len()));

    c.bench_function("fft_multiply_above_crossover", |bch| {
        bch.iter(|| black_box(&a).mul(black_box(&b)))
    });
}

criterion_group!(benches, bench_schoolbook, bench_fft);
criterion_main!(benches);
