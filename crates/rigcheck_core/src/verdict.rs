//! System verdict: bound type, confidence and the reasons shown with it

use crate::aggregate::{AggregateMetrics, ReferenceMap, aggregate_metrics};
use crate::catalog::Catalog;
use crate::model::{AnalysisInput, BoundType, Cpu, GameProfile, GameVerdict, Gpu, Resolution, Verdict};

/// Refresh rate at which a display-target verdict becomes possible
pub const TARGET_LIMITED_MIN_REFRESH: u32 = 144;
/// Share of target-limited titles that forces the display-target verdict
pub const TARGET_LIMITED_SHARE: f64 = 0.6;
/// Fraction of the refresh target the best affordable GPU must reach
pub const TARGET_REACH: f64 = 0.85;

const MAX_REASONS: usize = 3;

/// Bound type and confidence after the display-target override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictState {
    pub bound_type: BoundType,
    pub confidence: f64,
    /// Mean fps with the strongest affordable GPU swapped in
    pub potential_fps: f64,
}

/// Highest-scoring GPU at the resolution within budget; first in catalog order on ties
#[must_use]
pub fn best_affordable_gpu<'a>(catalog: &'a Catalog, input: &AnalysisInput) -> Option<&'a Gpu> {
    let resolution = input.resolution;
    catalog
        .gpus()
        .iter()
        .filter(|g| g.price <= input.budget_ceiling())
        .fold(None, |best: Option<&Gpu>, gpu| match best {
            Some(b) if b.score(resolution) >= gpu.score(resolution) => Some(b),
            _ => Some(gpu),
        })
}

/// Apply the display-target override to the baseline classification.
///
/// A CPU-bound baseline keeps its verdict: the limiter is still a component
/// the user can replace.
#[must_use]
pub fn resolve_verdict(
    catalog: &Catalog,
    cpu: &Cpu,
    gpu: &Gpu,
    input: &AnalysisInput,
    games: &[&GameProfile],
    baseline: &AggregateMetrics<'_>,
    references: &ReferenceMap,
) -> VerdictState {
    let best_gpu = best_affordable_gpu(catalog, input).unwrap_or(gpu);
    let potential = aggregate_metrics(catalog, cpu, best_gpu, input, games, Some(references));
    let refresh = input.refresh();

    let target_limited = input.refresh_rate >= TARGET_LIMITED_MIN_REFRESH
        // CPU-bound baselines are exempt: they keep CpuBound even when the
        // refresh target is out of reach
        && baseline.bound_type != BoundType::CpuBound
        && (baseline.target_limited_share >= TARGET_LIMITED_SHARE
            || potential.fps_avg < refresh * TARGET_REACH);

    tracing::debug!(
        best_gpu = %best_gpu.id,
        potential_fps = potential.fps_avg,
        target_limited,
        "display target check"
    );

    if target_limited {
        let reach = (potential.fps_avg / refresh.max(1.0)).min(1.0);
        VerdictState {
            bound_type: BoundType::TargetLimited,
            confidence: (0.65 + 0.25 * (1.0 - reach)).clamp(0.65, 0.9),
            potential_fps: potential.fps_avg,
        }
    } else {
        VerdictState {
            bound_type: baseline.bound_type,
            confidence: baseline.confidence,
            potential_fps: potential.fps_avg,
        }
    }
}

/// Human-readable explanation of the verdict, at most three lines
#[must_use]
pub fn verdict_reasons(
    state: &VerdictState,
    baseline: &AggregateMetrics<'_>,
    input: &AnalysisInput,
) -> Vec<String> {
    let mut reasons = Vec::new();
    let resolution = input.resolution;
    match state.bound_type {
        BoundType::TargetLimited => {
            reasons.push(format!(
                "Your {}Hz target is above expected FPS for most selected titles at {resolution}.",
                input.refresh_rate
            ));
            reasons.push(
                "Even with top-tier GPUs, reaching that refresh in these games is unlikely."
                    .to_string(),
            );
            reasons.push("Expect diminishing returns at this display target.".to_string());
        }
        BoundType::CpuBound => {
            reasons.push("Your CPU is the limiting factor for the selected titles.".to_string());
            if input.refresh_rate >= TARGET_LIMITED_MIN_REFRESH {
                reasons.push(format!(
                    "High refresh ({}Hz) increases CPU demand.",
                    input.refresh_rate
                ));
            } else {
                reasons.push(
                    "Upgrading the CPU should improve FPS until the GPU becomes limiting."
                        .to_string(),
                );
            }
        }
        BoundType::GpuBound => {
            reasons.push(format!("Your GPU is the limiting factor at {resolution}."));
            if resolution == Resolution::Fhd {
                reasons.push("Upgrading the GPU should significantly increase FPS.".to_string());
            } else {
                reasons.push(format!("{resolution} shifts more work to the GPU."));
            }
        }
        BoundType::Mixed => {
            reasons.push("CPU and GPU headroom are closely matched.".to_string());
            reasons.push("Both upgrades yield smaller, incremental gains.".to_string());
            reasons.push("Resolution and refresh tradeoffs balance the load.".to_string());
        }
    }

    let total = baseline.game_count();
    if baseline.measured_count == 0 {
        reasons.push(
            "Benchmark coverage: no direct benchmarks; estimates derived from similar GPUs."
                .to_string(),
        );
    } else if baseline.measured_count < total {
        reasons.push(format!(
            "Benchmark coverage: {}/{total} curated, {}/{total} estimated",
            baseline.measured_count, baseline.estimated_count
        ));
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Assemble the verdict record with figures rounded for display
#[must_use]
pub fn build_verdict(
    state: &VerdictState,
    baseline: &AggregateMetrics<'_>,
    input: &AnalysisInput,
) -> Verdict {
    Verdict {
        bound_type: state.bound_type,
        confidence: round2(state.confidence),
        headroom_ratio: round2(baseline.headroom_ratio),
        reasons: verdict_reasons(state, baseline, input),
        games: baseline
            .per_game
            .iter()
            .map(|g| GameVerdict {
                id: g.game.id.clone(),
                name: g.game.name.clone(),
                bound_type: g.bound_type,
                headroom_ratio: round2(g.headroom_ratio),
            })
            .collect(),
    }
}

/// Round to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.245_6), 0.25);
        assert_eq!(round2(22.904), 22.9);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_best_affordable_gpu_respects_budget() {
        let catalog = Catalog::builtin();
        let input = crate::config::AnalysisBuilder::new()
            .budget(crate::model::BudgetBucket::UpTo400)
            .build();
        let best = best_affordable_gpu(catalog, &input).unwrap();
        assert!(best.price <= 400.0);
        for gpu in catalog.gpus().iter().filter(|g| g.price <= 400.0) {
            assert!(gpu.score(input.resolution) <= best.score(input.resolution));
        }
    }
}
