//! The `analyze` entry point: one input record in, one result record out

use crate::aggregate::aggregate_metrics;
use crate::candidates::{SearchContext, search_all};
use crate::catalog::Catalog;
use crate::error::{AnalysisError, Result};
use crate::model::{AnalysisInput, AnalysisResult, GameProfile};
use crate::recommend::{Composer, upgrade_priorities};
use crate::verdict::{build_verdict, resolve_verdict};

/// Run the full pipeline against `catalog`.
///
/// Unknown CPU or GPU ids fall back to the first catalog entry and add a
/// warning. Unknown game ids are skipped; if none remain the analysis fails.
pub fn analyze(catalog: &Catalog, input: &AnalysisInput) -> Result<AnalysisResult> {
    let mut fallbacks = Vec::new();
    let cpu = catalog.cpu(&input.cpu_id).unwrap_or_else(|| {
        tracing::warn!(cpu_id = %input.cpu_id, "unknown CPU, using default");
        fallbacks.push("Selected CPU not found; used nearest default.".to_string());
        catalog.default_cpu()
    });
    let gpu = catalog.gpu(&input.gpu_id).unwrap_or_else(|| {
        tracing::warn!(gpu_id = %input.gpu_id, "unknown GPU, using default");
        fallbacks.push("Selected GPU not found; used nearest default.".to_string());
        catalog.default_gpu()
    });

    let games: Vec<&GameProfile> = input
        .games
        .iter()
        .filter_map(|id| catalog.game(id))
        .collect();
    if games.is_empty() {
        return Err(AnalysisError::NoKnownGames {
            requested: input.games.clone(),
        });
    }

    let baseline = aggregate_metrics(catalog, cpu, gpu, input, &games, None);
    tracing::debug!(
        cpu = %cpu.id,
        gpu = %gpu.id,
        games = games.len(),
        headroom_ratio = baseline.headroom_ratio,
        bound = ?baseline.bound_type,
        "baseline aggregate"
    );

    let references = baseline.reference_map();
    let state = resolve_verdict(catalog, cpu, gpu, input, &games, &baseline, &references);

    let ctx = SearchContext {
        catalog,
        input,
        cpu,
        gpu,
        games: &games,
        baseline: &baseline,
        references: &references,
    };
    let recommended_parts = search_all(&ctx);

    let composer = Composer {
        input,
        cpu,
        gpu,
        games: &games,
        baseline: &baseline,
        verdict: state.bound_type,
        parts: &recommended_parts,
    };
    let priorities = upgrade_priorities(input, &baseline);
    let upgrade_path = composer.upgrade_path(&priorities);
    let best_value = composer.best_value(&upgrade_path);
    let warnings = composer.warnings(&fallbacks);

    tracing::debug!(
        verdict = ?state.bound_type,
        path = upgrade_path.len(),
        best_value = ?best_value.category,
        warnings = warnings.len(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        verdict: build_verdict(&state, &baseline, input),
        best_value,
        upgrade_path,
        recommended_parts,
        warnings,
    })
}

/// [`analyze`] against the built-in catalog
pub fn analyze_builtin(input: &AnalysisInput) -> Result<AnalysisResult> {
    analyze(Catalog::builtin(), input)
}
