//! Tests for the GPU gain monotonic clamp
//!
//! No candidate may report a smaller gain than any strictly weaker candidate,
//! whatever mix of measured, interpolated and modeled fps the pool draws on.

use crate::Catalog;
use crate::aggregate::aggregate_metrics;
use crate::candidates::{GpuEvaluation, SearchContext, evaluate_gpu_candidates};
use crate::config::AnalysisBuilder;
use crate::model::{AnalysisInput, BudgetBucket, GameProfile, Resolution};

fn with_evaluations(catalog: &Catalog, input: &AnalysisInput, check: impl FnOnce(&[GpuEvaluation<'_>])) {
    let cpu = catalog.cpu(&input.cpu_id).unwrap();
    let gpu = catalog.gpu(&input.gpu_id).unwrap();
    let games: Vec<&GameProfile> = input
        .games
        .iter()
        .filter_map(|id| catalog.game(id))
        .collect();
    let baseline = aggregate_metrics(catalog, cpu, gpu, input, &games, None);
    let references = baseline.reference_map();
    let ctx = SearchContext {
        catalog,
        input,
        cpu,
        gpu,
        games: &games,
        baseline: &baseline,
        references: &references,
    };
    check(&evaluate_gpu_candidates(&ctx));
}

fn assert_monotonic(evaluations: &[GpuEvaluation<'_>]) {
    for (i, stronger) in evaluations.iter().enumerate() {
        for weaker in &evaluations[..i] {
            if weaker.perf_index < stronger.perf_index {
                assert!(
                    stronger.avg_gain >= weaker.avg_gain,
                    "{} ({}%) reports less than weaker {} ({}%)",
                    stronger.gpu.id,
                    stronger.avg_gain,
                    weaker.gpu.id,
                    weaker.avg_gain
                );
            }
        }
    }
}

#[test]
fn test_gains_non_decreasing_in_perf_index() {
    let catalog = Catalog::builtin();
    for resolution in [Resolution::Fhd, Resolution::Qhd, Resolution::Uhd] {
        let input = AnalysisBuilder::new()
            .cpu("i7-13700k")
            .gpu("gtx1650")
            .ram(32, "DDR5-6000")
            .resolution(resolution)
            .refresh(144)
            .games(["cyberpunk", "valorant", "eldenring", "minecraft"])
            .budget(BudgetBucket::Over2500)
            .build();
        with_evaluations(catalog, &input, |evaluations| {
            assert!(evaluations.len() > 10, "pool too small at {resolution}");
            assert!(
                evaluations
                    .windows(2)
                    .all(|w| w[0].perf_index <= w[1].perf_index)
            );
            assert_monotonic(evaluations);
        });
    }
}

#[test]
fn test_candidates_exclude_current_and_slower_cards() {
    let catalog = Catalog::builtin();
    let input = AnalysisBuilder::new()
        .cpu("i7-13700k")
        .gpu("rtx4070")
        .ram(32, "DDR5-6000")
        .resolution(Resolution::Qhd)
        .refresh(165)
        .games(["cyberpunk", "warzone"])
        .budget(BudgetBucket::Over2500)
        .build();

    let current = catalog.gpu("rtx4070").unwrap();
    let current_index = catalog.gpu_perf_index(current, Resolution::Qhd);
    with_evaluations(catalog, &input, |evaluations| {
        assert!(evaluations.iter().all(|e| e.gpu.id != "rtx4070"));
        // Without curated overlap the perf index decides
        for e in evaluations.iter().filter(|e| !catalog.curated().has_gpu(&e.gpu.id)) {
            assert!(e.perf_index > current_index, "{} is slower", e.gpu.id);
        }
        assert_monotonic(evaluations);
    });
}
