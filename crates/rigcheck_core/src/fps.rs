//! FPS estimation engine
//!
//! Frame rates are resolved in tiers: an exact curated sample, an
//! interpolation from the nearest curated GPU for the same title, or the
//! formula model. The tier travels with the number so callers can report
//! benchmark coverage without guessing.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, QualityPreset};
use crate::index::gpu_index;
use crate::model::{GameProfile, Gpu, Resolution};

/// Bounds on the target/anchor index ratio before exponentiation
pub const ESTIMATE_RATIO_MIN: f64 = 0.55;
pub const ESTIMATE_RATIO_MAX: f64 = 2.2;
pub const ESTIMATE_RATIO_EXP: f64 = 0.92;

const MIN_INDEX: f64 = 1e-6;

/// An fps figure tagged with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "fps", rename_all = "snake_case")]
pub enum FpsEstimate {
    /// Exact curated benchmark sample
    Measured(f64),
    /// Scaled from a measured neighbour (or from a baseline that was)
    Interpolated(f64),
    /// Formula model only
    Modeled(f64),
}

impl FpsEstimate {
    #[must_use]
    pub fn fps(&self) -> f64 {
        match *self {
            FpsEstimate::Measured(fps)
            | FpsEstimate::Interpolated(fps)
            | FpsEstimate::Modeled(fps) => fps,
        }
    }

    #[must_use]
    pub fn is_measured(&self) -> bool {
        matches!(self, FpsEstimate::Measured(_))
    }

    #[must_use]
    pub fn is_modeled(&self) -> bool {
        matches!(self, FpsEstimate::Modeled(_))
    }
}

/// The user's current GPU result for one title, reused when evaluating candidates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsReference {
    pub estimate: FpsEstimate,
    pub perf_index: f64,
}

/// Tier 2: scale the nearest measured GPU (in log perf-index space)
#[must_use]
pub fn interpolate_from_anchors(
    catalog: &Catalog,
    gpu: &Gpu,
    game_id: &str,
    resolution: Resolution,
    quality: QualityPreset,
) -> Option<f64> {
    let anchors = catalog.curated().anchors(game_id, resolution, quality);
    let target = catalog.gpu_perf_index(gpu, resolution);
    if !target.is_finite() || target <= 0.0 {
        return None;
    }

    let distance = |index: f64| (target / index.max(MIN_INDEX)).ln().abs();
    let best = anchors
        .iter()
        .filter(|a| a.perf_index.is_finite() && a.perf_index > 0.0)
        .fold(None, |best: Option<(&crate::catalog::Anchor, f64)>, anchor| {
            let diff = distance(anchor.perf_index);
            match best {
                Some((_, best_diff)) if best_diff <= diff => best,
                _ => Some((anchor, diff)),
            }
        })?
        .0;

    let ratio = (target / best.perf_index.max(MIN_INDEX)).clamp(ESTIMATE_RATIO_MIN, ESTIMATE_RATIO_MAX);
    Some(best.fps * ratio.powf(ESTIMATE_RATIO_EXP))
}

/// Tiers 1 and 2 only
#[must_use]
pub fn lookup_sample(
    catalog: &Catalog,
    gpu: &Gpu,
    game: &GameProfile,
    resolution: Resolution,
) -> Option<FpsEstimate> {
    let quality = QualityPreset::for_category(game.category);
    if let Some(fps) = catalog
        .curated()
        .lookup(&gpu.id, &game.id, resolution, quality)
    {
        return Some(FpsEstimate::Measured(fps));
    }
    interpolate_from_anchors(catalog, gpu, &game.id, resolution, quality)
        .map(FpsEstimate::Interpolated)
}

/// Tier 3: category base fps scaled by resolution and GPU index
#[must_use]
pub fn modeled_fps(gpu: &Gpu, game: &GameProfile, resolution: Resolution) -> f64 {
    game.category.base_fps() * resolution.fps_scale() * gpu_index(gpu.score(resolution))
}

/// Resolve the raw (GPU-side) fps for a title.
///
/// `reference` is the current GPU's result for the same title; when neither a
/// curated nor an interpolated figure exists it replaces the formula model so
/// candidate estimates stay consistent with the baseline.
#[must_use]
pub fn estimate_fps(
    catalog: &Catalog,
    gpu: &Gpu,
    game: &GameProfile,
    resolution: Resolution,
    reference: Option<&FpsReference>,
) -> FpsEstimate {
    if let Some(sample) = lookup_sample(catalog, gpu, game, resolution) {
        return sample;
    }

    if let Some(reference) = reference.filter(|r| r.perf_index > 0.0 && r.estimate.fps().is_finite()) {
        let ratio = catalog.gpu_perf_index(gpu, resolution) / reference.perf_index;
        let fps = reference.estimate.fps() * ratio;
        return if reference.estimate.is_modeled() {
            FpsEstimate::Modeled(fps)
        } else {
            FpsEstimate::Interpolated(fps)
        };
    }

    FpsEstimate::Modeled(modeled_fps(gpu, game, resolution))
}
