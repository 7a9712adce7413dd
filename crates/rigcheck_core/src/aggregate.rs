//! Aggregate engine: folds per-game metrics into one system-level reading

use rustc_hash::FxHashMap;

use crate::catalog::Catalog;
use crate::fps::FpsReference;
use crate::metrics::{GameMetrics, classify_headroom, compute_game_metrics, log_distance};
use crate::model::{AnalysisInput, BoundType, Cpu, GameProfile, Gpu};

/// Per-title references keyed by game id
pub type ReferenceMap = FxHashMap<String, FpsReference>;

#[derive(Debug, Clone, PartialEq)]
pub struct AggregateMetrics<'a> {
    pub per_game: Vec<GameMetrics<'a>>,
    pub headroom_ratio: f64,
    pub bound_type: BoundType,
    pub confidence: f64,
    pub fps_avg: f64,
    pub effective_fps_avg: f64,
    pub stutter_risk_avg: f64,
    pub vram_pressure_avg: f64,
    pub target_limited_share: f64,
    pub measured_count: usize,
    pub estimated_count: usize,
    /// Share of titles backed by an exact curated sample
    pub benchmark_coverage: f64,
}

impl<'a> AggregateMetrics<'a> {
    /// Fold already-computed per-game metrics
    #[must_use]
    pub fn from_games(per_game: Vec<GameMetrics<'a>>) -> Self {
        let count = per_game.len();

        let cpu_eff = harmonic_mean(per_game.iter().map(|g| g.cpu_throughput));
        let gpu_eff = harmonic_mean(per_game.iter().map(|g| g.gpu_throughput));
        let headroom_ratio = if cpu_eff > 0.0 && gpu_eff > 0.0 {
            cpu_eff / gpu_eff
        } else {
            1.0
        };
        let bound_type = classify_headroom(headroom_ratio);

        let agreement = share(&per_game, |g| g.bound_type == bound_type);
        let confidence = aggregate_confidence(headroom_ratio, agreement);

        let measured_count = per_game.iter().filter(|g| g.raw_fps.is_measured()).count();

        Self {
            headroom_ratio,
            bound_type,
            confidence,
            fps_avg: mean(per_game.iter().map(|g| g.fps)),
            effective_fps_avg: mean(per_game.iter().map(|g| g.effective_fps)),
            stutter_risk_avg: mean(per_game.iter().map(|g| g.stutter_risk)),
            vram_pressure_avg: mean(per_game.iter().map(|g| g.vram_pressure)),
            target_limited_share: share(&per_game, |g| g.target_limited),
            measured_count,
            estimated_count: count - measured_count,
            benchmark_coverage: if count > 0 {
                measured_count as f64 / count as f64
            } else {
                0.0
            },
            per_game,
        }
    }

    /// References for evaluating candidate GPUs against this baseline
    #[must_use]
    pub fn reference_map(&self) -> ReferenceMap {
        self.per_game
            .iter()
            .map(|g| (g.game.id.clone(), g.reference()))
            .collect()
    }

    #[must_use]
    pub fn game_count(&self) -> usize {
        self.per_game.len()
    }
}

/// Run the per-game calculator over every title and fold the results
#[must_use]
pub fn aggregate_metrics<'a>(
    catalog: &Catalog,
    cpu: &Cpu,
    gpu: &Gpu,
    input: &AnalysisInput,
    games: &[&'a GameProfile],
    references: Option<&ReferenceMap>,
) -> AggregateMetrics<'a> {
    let per_game = games
        .iter()
        .map(|&game| {
            let reference = references.and_then(|map| map.get(&game.id));
            compute_game_metrics(catalog, cpu, gpu, input, game, reference)
        })
        .collect();
    AggregateMetrics::from_games(per_game)
}

/// System confidence from the ratio and the share of titles that agree.
///
/// The distance term is not capped before the agreement bonus is added; only
/// the final value is clamped.
#[must_use]
pub fn aggregate_confidence(ratio: f64, agreement: f64) -> f64 {
    (0.55 + 0.35 * log_distance(ratio) + 0.08 * agreement).clamp(0.55, 0.95)
}

/// Harmonic mean of the positive values, or 0 when there are none
#[must_use]
pub fn harmonic_mean(values: impl IntoIterator<Item = f64>) -> f64 {
    let (count, denom) = values
        .into_iter()
        .filter(|v| *v > 0.0)
        .fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + 1.0 / v));
    if count == 0 || denom <= 0.0 {
        0.0
    } else {
        count as f64 / denom
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (count, sum) = values.fold((0usize, 0.0), |(n, sum), v| (n + 1, sum + v));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn share(games: &[GameMetrics<'_>], predicate: impl Fn(&GameMetrics<'_>) -> bool) -> f64 {
    if games.is_empty() {
        return 0.0;
    }
    games.iter().filter(|g| predicate(g)).count() as f64 / games.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonic_mean() {
        assert_eq!(harmonic_mean([]), 0.0);
        assert_eq!(harmonic_mean([0.0, -1.0]), 0.0);
        assert!((harmonic_mean([2.0, 2.0]) - 2.0).abs() < 1e-12);
        // 2 / (1/1 + 1/4) = 1.6
        assert!((harmonic_mean([1.0, 4.0]) - 1.6).abs() < 1e-12);
        // Non-positive values are ignored
        assert!((harmonic_mean([1.0, 0.0, 4.0]) - 1.6).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_mean_pulls_towards_low_outlier() {
        let values = [1.0, 1.0, 0.1];
        let arithmetic = values.iter().sum::<f64>() / 3.0;
        assert!(harmonic_mean(values) < arithmetic);
    }

    #[test]
    fn test_aggregate_confidence_distance_is_uncapped() {
        assert_eq!(aggregate_confidence(1.0, 0.0), 0.55);
        // |ln r| = 1.2: 0.55 + 0.42 would exceed the ceiling either way
        assert_eq!(aggregate_confidence(1.2f64.exp(), 0.0), 0.95);
        // |ln r| = 1.1 with no agreement: 0.55 + 0.385 = 0.935, above the 0.90
        // a capped distance term would give
        let far = aggregate_confidence((-1.1f64).exp(), 0.0);
        assert!((far - 0.935).abs() < 1e-9);
        // Agreement adds up to 0.08
        let near = aggregate_confidence(1.1, 0.0);
        assert!((aggregate_confidence(1.1, 1.0) - near - 0.08).abs() < 1e-12);
    }

    #[test]
    fn test_mean_and_share_handle_empty() {
        assert_eq!(mean(std::iter::empty()), 0.0);
        assert_eq!(share(&[], |_| true), 0.0);
    }
}
