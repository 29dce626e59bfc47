// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use extent_core::math::interval::Interval1D;
use extent_core::math::order::{
    IntervalOrder, LengthOrder, MaxEndpointOrder, MinEndpointOrder, sort_intervals,
};
use extent_core::math::rect::Interval2D;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn random_intervals(n: usize, seed: u64) -> Vec<Interval1D> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let a: f64 = rng.random_range(-1_000.0..1_000.0);
            let b: f64 = rng.random_range(-1_000.0..1_000.0);
            Interval1D::new(a.min(b), a.max(b)).expect("sampled endpoints are finite")
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_intervals");
    let orders: [&dyn IntervalOrder<f64>; 3] =
        [&MinEndpointOrder, &MaxEndpointOrder, &LengthOrder];

    for &n in &[1_000usize, 10_000, 100_000] {
        let input = random_intervals(n, 42);
        group.throughput(Throughput::Elements(n as u64));
        for order in orders {
            group.bench_with_input(BenchmarkId::new(order.name(), n), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        sort_intervals(&mut data, order);
                        black_box(data)
                    },
                    criterion::BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_intersects(c: &mut Criterion) {
    let xs = random_intervals(2_048, 7);
    let ys = random_intervals(2_048, 8);
    let boxes: Vec<Interval2D> = xs
        .iter()
        .zip(&ys)
        .map(|(&x, &y)| Interval2D::new(x, y))
        .collect();

    let mut group = c.benchmark_group("intersects");
    group.throughput(Throughput::Elements((xs.len() * xs.len()) as u64));
    group.bench_function("interval_1d_all_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for a in &xs {
                for other in &xs {
                    hits += a.intersects(black_box(other)) as usize;
                }
            }
            black_box(hits)
        })
    });
    group.bench_function("interval_2d_all_pairs", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for a in &boxes {
                for other in &boxes {
                    hits += a.intersects(black_box(other)) as usize;
                }
            }
            black_box(hits)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sort, bench_intersects);
criterion_main!(benches);
