use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use permutest::{Execution, Mean, PermutationConfig, permutation_test};
use rand::SeedableRng;
use rand::prelude::Distribution;
use rand::rngs::StdRng;
use statrs::distribution::Normal;

const SEED: u64 = 123;

fn sample_data(n: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let dist = Normal::new(0.0, 1.0).unwrap();
    let sample: Vec<f64> = dist.sample_iter(&mut rng).take(n).collect();

    sample
}

fn config(iterations: usize) -> PermutationConfig<f64> {
    PermutationConfig {
        iterations,
        seed: Some(SEED),
        ..PermutationConfig::default()
    }
}

fn two_sample(c: &mut Criterion) {
    let data1 = sample_data(100);
    let data2: Vec<f64> = sample_data(100).iter().map(|x| x + 0.3).collect();
    let config = config(10_000);

    c.bench_function("two_sample_10k", |b| {
        b.iter(|| {
            permutation_test(
                black_box(data1.as_slice()),
                Some(black_box(data2.as_slice())),
                &Mean,
                &config,
            )
        });
    });
}

fn one_sample(c: &mut Criterion) {
    let data1 = sample_data(100);
    let config = config(10_000);

    c.bench_function("one_sample_10k", |b| {
        b.iter(|| permutation_test(black_box(data1.as_slice()), None, &Mean, &config));
    });
}

fn paired(c: &mut Criterion) {
    let data1 = sample_data(100);
    let data2: Vec<f64> = data1.iter().map(|x| x + 0.2).collect();
    let config = PermutationConfig {
        paired: true,
        ..config(10_000)
    };

    c.bench_function("paired_10k", |b| {
        b.iter(|| {
            permutation_test(
                black_box(data1.as_slice()),
                Some(black_box(data2.as_slice())),
                &Mean,
                &config,
            )
        });
    });
}

#[cfg(feature = "parallel")]
fn two_sample_parallel(c: &mut Criterion) {
    let data1 = sample_data(100);
    let data2: Vec<f64> = sample_data(100).iter().map(|x| x + 0.3).collect();
    let config = PermutationConfig {
        execution: Execution::Parallel,
        ..config(10_000)
    };

    c.bench_function("two_sample_10k_parallel", |b| {
        b.iter(|| {
            permutation_test(
                black_box(data1.as_slice()),
                Some(black_box(data2.as_slice())),
                &Mean,
                &config,
            )
        });
    });
}

#[cfg(feature = "parallel")]
criterion_group!(benches, two_sample, one_sample, paired, two_sample_parallel);
#[cfg(not(feature = "parallel"))]
criterion_group!(benches, two_sample, one_sample, paired);

criterion_main!(benches);
