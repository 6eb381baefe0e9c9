// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};

use boundstack::BoundedStack;

const SIZES: &[usize] = &[1024, 2048, 4096, 8192, 16384, 32768, 65536, 131_072];

#[derive(Clone, Copy)]
struct BigLumpOfUsize([usize; 64]);

impl Default for BigLumpOfUsize {
    fn default() -> Self {
        Self([0; 64])
    }
}

pub fn fill<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || Vec::with_capacity(size),
                |vec| {
                    for _ in 0..size {
                        vec.push(A::default());
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("bounded", size), size, |b, &size| {
            b.iter_batched_ref(
                || BoundedStack::<A>::new(size).unwrap(),
                |stack| {
                    for _ in 0..size {
                        black_box(stack.push(A::default())).ok();
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

pub fn drain<A: Default>(name: &str, c: &mut Criterion) {
    let mut group = c.benchmark_group(name);
    for size in SIZES {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("vec", size), size, |b, &size| {
            b.iter_batched_ref(
                || (0..size).map(|_| A::default()).collect::<Vec<_>>(),
                |vec| {
                    while let Some(value) = vec.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("bounded", size), size, |b, &size| {
            b.iter_batched_ref(
                || {
                    let cells = (0..size).map(|_| Some(A::default())).collect();
                    BoundedStack::from_raw(cells, size).unwrap()
                },
                |stack| {
                    while let Ok(value) = stack.pop() {
                        black_box(value);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn fill_usize(c: &mut Criterion) {
    fill::<usize>("fill/usize", c)
}

fn drain_usize(c: &mut Criterion) {
    drain::<usize>("drain/usize", c)
}

fn fill_64x_usize(c: &mut Criterion) {
    fill::<BigLumpOfUsize>("fill/64xusize", c)
}

fn drain_64x_usize(c: &mut Criterion) {
    drain::<BigLumpOfUsize>("drain/64xusize", c)
}

criterion_group!(
    boundstack,
    fill_usize,
    drain_usize,
    fill_64x_usize,
    drain_64x_usize
);
criterion_main!(boundstack);
