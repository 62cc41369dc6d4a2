use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use making_change::{
    solve, BottomUpTabulation, DenominationSet, MemoizedRecursion, NaiveRecursion, SlotScan,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_denominations(rng: &mut StdRng, len: usize) -> DenominationSet {
    let mut values: Vec<i64> = (0..len).map(|_| rng.gen_range(2..100)).collect();
    values.push(1);
    values.sort_unstable();
    values.dedup();
    DenominationSet::new(values).unwrap()
}

fn bench_fast_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let coins = random_denominations(&mut rng, 8);
    let mut group = c.benchmark_group("coin_change");
    for &amount in &[100i64, 1_000, 2_000] {
        group.bench_with_input(BenchmarkId::new("bottom_up", amount), &amount, |b, &n| {
            b.iter(|| solve(&BottomUpTabulation::default(), black_box(&coins), n))
        });
        group.bench_with_input(
            BenchmarkId::new("bottom_up_exhaustive", amount),
            &amount,
            |b, &n| {
                b.iter(|| {
                    solve(
                        &BottomUpTabulation::new(SlotScan::Exhaustive),
                        black_box(&coins),
                        n,
                    )
                })
            },
        );
        group.bench_with_input(BenchmarkId::new("memoized", amount), &amount, |b, &n| {
            b.iter(|| solve(&MemoizedRecursion::default(), black_box(&coins), n))
        });
    }
    group.finish();
}

fn bench_naive(c: &mut Criterion) {
    let coins = DenominationSet::new([1, 5, 10, 25]).unwrap();
    let mut group = c.benchmark_group("coin_change_naive");
    for &amount in &[8i64, 12, 16] {
        group.bench_with_input(BenchmarkId::new("naive", amount), &amount, |b, &n| {
            b.iter(|| solve(&NaiveRecursion::default(), black_box(&coins), n))
        });
        group.bench_with_input(BenchmarkId::new("memoized", amount), &amount, |b, &n| {
            b.iter(|| solve(&MemoizedRecursion::default(), black_box(&coins), n))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fast_strategies, bench_naive);
criterion_main!(benches);
