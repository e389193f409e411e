//! Benchmark for the containers and synchronous Try adapters.
//!
//! Compares bind chains and `query!` against each other and measures the
//! cost of the `catch_unwind` boundary with and without a panic.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fun::control::{Opt, Or3, Outcome};
use fun::query;
use std::hint::black_box;

fn step(value: i32) -> Outcome<i32> {
    if value < 0 {
        Outcome::fail("negative")
    } else {
        Outcome::value(value + 1)
    }
}

// =============================================================================
// Bind Chains
// =============================================================================

fn benchmark_bind_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bind_chain");

    for length in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::new("outcome", length), &length, |bencher, &length| {
            bencher.iter(|| {
                let mut outcome = Outcome::value(black_box(0));
                for _ in 0..length {
                    outcome = outcome.bind(step);
                }
                black_box(outcome)
            });
        });
    }

    group.bench_function("opt_four_steps", |bencher| {
        bencher.iter(|| {
            let result = Opt::some(black_box(1))
                .bind(|x| Opt::some(x + 1))
                .bind(|x| Opt::some(x * 2))
                .map(|x| x - 1);
            black_box(result)
        });
    });

    group.bench_function("query_four_steps", |bencher| {
        bencher.iter(|| {
            let result = query! {
                w <= step(black_box(1));
                x <= step(w);
                y <= step(x);
                z <= step(y);
                yield w + x + y + z
            };
            black_box(result)
        });
    });

    group.finish();
}

// =============================================================================
// Try Adapters
// =============================================================================

fn benchmark_try_value(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("try_value");

    group.bench_function("no_panic", |bencher| {
        bencher.iter(|| black_box(Outcome::try_value(|| black_box(21) * 2)));
    });

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    group.bench_function("captured_panic", |bencher| {
        bencher.iter(|| {
            black_box(Outcome::<i32>::try_value(|| panic!("benchmark panic")))
        });
    });
    std::panic::set_hook(previous_hook);

    group.finish();
}

// =============================================================================
// Or
// =============================================================================

fn benchmark_or_fold(criterion: &mut Criterion) {
    let values: Vec<Or3<i32, String, bool>> = (0..1000)
        .map(|index| match index % 3 {
            0 => Or3::of_option1(index),
            1 => Or3::of_option2(index.to_string()),
            _ => Or3::of_option3(index % 2 == 0),
        })
        .collect();

    criterion.bench_function("or3_fold", |bencher| {
        bencher.iter(|| {
            let total: usize = values
                .iter()
                .cloned()
                .map(|value| value.fold(|n| usize::try_from(n).unwrap_or(0), |s| s.len(), usize::from))
                .sum();
            black_box(total)
        });
    });
}

criterion_group!(
    benches,
    benchmark_bind_chain,
    benchmark_try_value,
    benchmark_or_fold
);
criterion_main!(benches);
