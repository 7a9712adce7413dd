//! Upgrade candidate search
//!
//! Each category filters the catalog by budget and compatibility and, for CPU
//! and GPU, re-runs the aggregate engine with the candidate substituted.

mod cpu;
mod gpu;
mod monitor;
mod ram;
mod storage;

pub use cpu::suggest_cpus;
pub use gpu::{GpuEvaluation, evaluate_gpu_candidates, suggest_gpus};
pub use monitor::{monitor_refresh_ceiling, suggest_monitors};
pub use ram::{ram_target_capacity, resolve_memory_type, suggest_ram};
pub use storage::suggest_storage;

use crate::aggregate::{AggregateMetrics, ReferenceMap};
use crate::catalog::Catalog;
use crate::model::{AnalysisInput, Cpu, GameProfile, Gpu, PartCategory, PartGroup};

/// Baseline gains below this fps are measured against this floor instead
pub const GAIN_BASE_FLOOR: f64 = 45.0;

/// Everything a category search needs about the current build
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub catalog: &'a Catalog,
    pub input: &'a AnalysisInput,
    pub cpu: &'a Cpu,
    pub gpu: &'a Gpu,
    pub games: &'a [&'a GameProfile],
    pub baseline: &'a AggregateMetrics<'a>,
    pub references: &'a ReferenceMap,
}

impl SearchContext<'_> {
    #[must_use]
    pub fn budget(&self) -> f64 {
        self.input.budget_ceiling()
    }

    #[must_use]
    pub fn within_budget(&self, price: f64) -> bool {
        price <= self.budget()
    }
}

/// Average fps gain of `candidate` over `baseline`, in percent
#[must_use]
pub fn avg_fps_gain_pct(baseline: &AggregateMetrics<'_>, candidate: &AggregateMetrics<'_>) -> f64 {
    let base = baseline.fps_avg;
    if base <= 0.0 {
        return 0.0;
    }
    (candidate.fps_avg - base) / base.max(GAIN_BASE_FLOOR) * 100.0
}

/// Whole-percent gain, never negative
pub(crate) fn rounded_gain(baseline: &AggregateMetrics<'_>, candidate: &AggregateMetrics<'_>) -> i32 {
    avg_fps_gain_pct(baseline, candidate).round().max(0.0) as i32
}

/// Run every category search, in result order
#[must_use]
pub fn search_all(ctx: &SearchContext<'_>) -> Vec<PartGroup> {
    PartCategory::ALL
        .into_iter()
        .map(|category| {
            let items = match category {
                PartCategory::Cpu => suggest_cpus(ctx),
                PartCategory::Gpu => suggest_gpus(ctx),
                PartCategory::Ram => suggest_ram(ctx),
                PartCategory::Storage => suggest_storage(ctx),
                PartCategory::Monitor => suggest_monitors(ctx),
            };
            tracing::debug!(category = %category, picks = items.len(), "candidate search");
            PartGroup { category, items }
        })
        .collect()
}
