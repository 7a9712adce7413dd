//! Criterion benchmarks for rigcheck_core analysis
//!
//! Run with: cargo bench -p rigcheck_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rigcheck_core::aggregate::aggregate_metrics;
use rigcheck_core::config::AnalysisBuilder;
use rigcheck_core::model::{AnalysisInput, BudgetBucket, GameProfile, Resolution};
use rigcheck_core::{Catalog, analyze_builtin};

const ALL_GAMES: [&str; 8] = [
    "valorant",
    "cs2",
    "fortnite",
    "warzone",
    "cyberpunk",
    "rdr2",
    "msfs2020",
    "minecraft",
];

fn create_input(games: &[&str], budget: BudgetBucket) -> AnalysisInput {
    AnalysisBuilder::new()
        .cpu("i5-12400")
        .gpu("rtx3060")
        .resolution(Resolution::Qhd)
        .refresh(165)
        .games(games.iter().copied())
        .budget(budget)
        .build()
}

fn bench_single_game(c: &mut Criterion) {
    let input = create_input(&["cyberpunk"], BudgetBucket::UpTo700);

    c.bench_function("analyze_single_game", |b| {
        b.iter(|| analyze_builtin(black_box(&input)))
    });
}

fn bench_game_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("game_count");

    for count in [1usize, 4, 8].iter() {
        let input = create_input(&ALL_GAMES[..*count], BudgetBucket::UpTo700);
        group.bench_with_input(BenchmarkId::new("games", count), count, |b, _| {
            b.iter(|| analyze_builtin(black_box(&input)))
        });
    }

    group.finish();
}

fn bench_budget_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("budget_pool");

    // Larger budgets widen the GPU candidate pool
    for bucket in [BudgetBucket::UpTo250, BudgetBucket::UpTo700, BudgetBucket::Over2500] {
        let input = create_input(&ALL_GAMES, bucket);
        group.bench_with_input(
            BenchmarkId::new("bucket", bucket.label()),
            &bucket,
            |b, _| b.iter(|| analyze_builtin(black_box(&input))),
        );
    }

    group.finish();
}

fn bench_aggregate_only(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let input = create_input(&ALL_GAMES, BudgetBucket::UpTo700);
    let cpu = catalog.default_cpu();
    let gpu = catalog.default_gpu();
    let games: Vec<&GameProfile> = ALL_GAMES.iter().filter_map(|id| catalog.game(id)).collect();

    c.bench_function("aggregate_8_games", |b| {
        b.iter(|| {
            aggregate_metrics(
                black_box(catalog),
                black_box(cpu),
                black_box(gpu),
                black_box(&input),
                black_box(&games),
                None,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_single_game,
    bench_game_count,
    bench_budget_pool,
    bench_aggregate_only,
);
criterion_main!(benches);
