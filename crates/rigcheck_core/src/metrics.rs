//! Per-game metrics
//!
//! Combines CPU throughput, GPU throughput, refresh-rate demand and the engine
//! soft ceiling into a bottleneck classification and an effective fps figure
//! for one title.

use crate::catalog::Catalog;
use crate::fps::{FpsEstimate, FpsReference, estimate_fps};
use crate::index::{cpu_ceiling_scale, cpu_index};
use crate::model::{
    AnalysisInput, BoundType, Cpu, GameCategory, GameProfile, Gpu, Heaviness, Resolution,
    StorageType, TargetFps, TypicalBound,
};

/// Headroom ratio at or above which a title is GPU-bound
pub const GPU_BOUND_RATIO: f64 = 1.12;
/// Headroom ratio at or below which a title is CPU-bound
pub const CPU_BOUND_RATIO: f64 = 0.88;

const HEAVY_PENALTY: f64 = 1.08;
const REFRESH_CAP_SLACK: f64 = 1.05;
const TARGET_LIMITED_MIN_REFRESH: u32 = 144;

/// Everything the pipeline knows about one title on one CPU/GPU pairing
#[derive(Debug, Clone, PartialEq)]
pub struct GameMetrics<'a> {
    pub game: &'a GameProfile,
    pub typical_bound: TypicalBound,
    pub headroom_ratio: f64,
    pub bound_type: BoundType,
    pub confidence: f64,
    pub cpu_throughput: f64,
    pub gpu_throughput: f64,
    /// Unadjusted perf index of the GPU at the requested resolution
    pub gpu_perf_index: f64,
    /// GPU-side fps before CPU scaling and the soft cap
    pub raw_fps: FpsEstimate,
    pub fps: f64,
    pub effective_fps: f64,
    pub engine_ceiling: f64,
    pub target_limited: bool,
    pub vram_pressure: f64,
    pub stutter_risk: f64,
}

impl GameMetrics<'_> {
    /// Reference used when the same title is evaluated on a candidate GPU
    #[must_use]
    pub fn reference(&self) -> FpsReference {
        FpsReference {
            estimate: self.raw_fps,
            perf_index: self.gpu_perf_index,
        }
    }
}

#[must_use]
pub fn classify_headroom(ratio: f64) -> BoundType {
    if ratio >= GPU_BOUND_RATIO {
        BoundType::GpuBound
    } else if ratio <= CPU_BOUND_RATIO {
        BoundType::CpuBound
    } else {
        BoundType::Mixed
    }
}

/// Distance of the ratio from parity, plus a bonus when the title's declared
/// hint agrees with the classification.
#[must_use]
pub fn bottleneck_confidence(ratio: f64, hint: TypicalBound, bound: BoundType) -> f64 {
    let distance = log_distance(ratio);
    let hint_match = matches!(
        (bound, hint),
        (BoundType::GpuBound, TypicalBound::GpuHeavy) | (BoundType::CpuBound, TypicalBound::CpuHeavy)
    );
    let bonus = if hint_match { 0.06 } else { 0.0 };
    (0.55 + (0.35 * distance).min(0.35) + bonus).clamp(0.55, 0.95)
}

/// `|ln ratio|`, treating a degenerate ratio as parity
pub(crate) fn log_distance(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio.ln().abs()
    } else {
        0.0
    }
}

/// Extra CPU work per frame demanded by a refresh target
#[must_use]
pub fn refresh_demand(refresh: u32) -> f64 {
    match refresh {
        720.. => 2.35,
        540.. => 2.05,
        480.. => 1.9,
        360.. => 1.7,
        240.. => 1.5,
        165.. => 1.28,
        144.. => 1.18,
        120.. => 1.1,
        _ => 1.0,
    }
}

/// How strongly the refresh demand applies, in `[0, 1]`.
///
/// Only matters once the GPU can get near the target, and only for titles
/// whose players chase frame rate.
#[must_use]
pub fn refresh_influence(refresh: u32, gpu_fps: f64, category: GameCategory, target: TargetFps) -> f64 {
    if !gpu_fps.is_finite() || refresh <= 60 {
        return 0.0;
    }
    let ratio = gpu_fps / f64::from(refresh.max(1));
    let normalized = ((ratio - 0.7) / 0.5).clamp(0.0, 1.0);
    let focus = match (category, target) {
        (GameCategory::Esports, _) | (_, TargetFps::High) => 1.0,
        (_, TargetFps::Medium) => 0.5,
        (_, TargetFps::Low) => 0.25,
    };
    normalized * focus
}

/// Exponential saturation towards `ceiling`
#[must_use]
pub fn apply_soft_cap(fps: f64, ceiling: f64) -> f64 {
    if !fps.is_finite() || !ceiling.is_finite() || ceiling <= 0.0 {
        return fps;
    }
    ceiling * (1.0 - (-fps / ceiling).exp())
}

/// 0-100 heuristic for running out of video memory
#[must_use]
pub fn vram_pressure(vram: u32, resolution: Resolution, heaviness: Heaviness) -> f64 {
    let tier = match vram {
        16.. => 4,
        12.. => 3,
        8.. => 2,
        6.. => 1,
        _ => 0,
    };
    let table: [f64; 5] = match heaviness {
        Heaviness::Low => [55.0, 35.0, 18.0, 8.0, 5.0],
        Heaviness::Med => [70.0, 50.0, 30.0, 15.0, 8.0],
        Heaviness::High => [85.0, 65.0, 40.0, 22.0, 12.0],
    };
    let scale = match resolution {
        Resolution::Fhd => 1.0,
        Resolution::Qhd => 1.1,
        Resolution::Uhd => 1.25,
    };
    (table[tier] * scale).round().clamp(0.0, 100.0)
}

/// 0-100 heuristic for traversal hitching from asset streaming
#[must_use]
pub fn stutter_risk(storage: StorageType, ram_gb: u32, streaming: Heaviness) -> f64 {
    let base: f64 = match storage {
        StorageType::Hdd => 72.0,
        StorageType::SataSsd => 42.0,
        StorageType::Nvme => 28.0,
    };
    let factor = match streaming {
        Heaviness::High => 1.25,
        Heaviness::Med => 1.0,
        Heaviness::Low => 0.75,
    };
    let ram_penalty = match ram_gb {
        0..12 => 22.0,
        12..16 => 12.0,
        16..32 => 0.0,
        _ => -6.0,
    };
    (base * factor + ram_penalty).round().clamp(0.0, 100.0)
}

/// Run the full per-title calculation for one CPU/GPU pairing.
///
/// `reference` is only supplied when `gpu` is a candidate rather than the
/// user's own card.
#[must_use]
pub fn compute_game_metrics<'a>(
    catalog: &Catalog,
    cpu: &Cpu,
    gpu: &Gpu,
    input: &AnalysisInput,
    game: &'a GameProfile,
    reference: Option<&FpsReference>,
) -> GameMetrics<'a> {
    let category = game.category;
    let typical_bound = game.resolved_bound();
    let weights = game.weights();
    let resolution = input.resolution;

    let gpu_perf_index = catalog.gpu_perf_index(gpu, resolution);
    let gpu_heavy = if typical_bound == TypicalBound::GpuHeavy {
        HEAVY_PENALTY
    } else {
        1.0
    };
    let gpu_throughput = gpu_perf_index / (resolution.demand() * (0.6 + weights.gpu) * gpu_heavy);

    let raw_fps = estimate_fps(catalog, gpu, game, resolution, reference);
    let gpu_fps = raw_fps.fps();

    let influence = refresh_influence(input.refresh_rate, gpu_fps, category, game.target_fps);
    let refresh_penalty = 1.0 + (refresh_demand(input.refresh_rate) - 1.0) * influence;

    let cpu_heavy = if typical_bound == TypicalBound::CpuHeavy {
        HEAVY_PENALTY
    } else {
        1.0
    };
    let cpu_throughput = cpu_index(cpu.score) * category.cpu_tune()
        / ((0.6 + weights.cpu) * cpu_heavy)
        / refresh_penalty;

    let headroom_ratio = if gpu_throughput > 0.0 {
        cpu_throughput / gpu_throughput
    } else {
        1.0
    };
    let bound_type = classify_headroom(headroom_ratio);
    let confidence = bottleneck_confidence(headroom_ratio, typical_bound, bound_type);

    let engine_ceiling = category.engine_ceiling() * cpu_ceiling_scale(cpu.score);
    let throttled = if headroom_ratio < 1.0 {
        gpu_fps * headroom_ratio
    } else {
        gpu_fps
    };
    let fps = apply_soft_cap(throttled, engine_ceiling);
    let effective_fps = if input.refresh_rate > 0 {
        fps.min(input.refresh() * REFRESH_CAP_SLACK)
    } else {
        fps
    };
    let target_limited = input.refresh_rate >= TARGET_LIMITED_MIN_REFRESH
        && engine_ceiling < input.refresh() * 0.9;

    GameMetrics {
        game,
        typical_bound,
        headroom_ratio,
        bound_type,
        confidence,
        cpu_throughput,
        gpu_throughput,
        gpu_perf_index,
        raw_fps,
        fps,
        effective_fps,
        engine_ceiling,
        target_limited,
        vram_pressure: vram_pressure(gpu.vram, resolution, game.resolved_vram_heaviness()),
        stutter_risk: stutter_risk(
            input.storage_type,
            input.ram_amount,
            game.resolved_streaming_heaviness(),
        ),
    }
}
