use crate::aggregate::aggregate_metrics;
use crate::model::{BoundType, PartCategory, PartPick, PickConfidence, TypicalBound};

use super::{SearchContext, rounded_gain};

/// Minimum score lead over the current CPU
pub const CPU_MIN_SCORE_GAIN: f64 = 6.0;
const MAX_PICKS: usize = 3;

/// Drop-in CPU upgrades: same socket and memory type, ranked by score gain per dollar
#[must_use]
pub fn suggest_cpus(ctx: &SearchContext<'_>) -> Vec<PartPick> {
    let current = ctx.cpu;
    let mut candidates: Vec<_> = ctx
        .catalog
        .cpus()
        .iter()
        .filter(|c| c.score >= current.score + CPU_MIN_SCORE_GAIN)
        .filter(|c| c.socket == current.socket && c.memory_type == current.memory_type)
        .collect();

    let value = |score: f64, price: f64| (score - current.score) / price.max(1.0);
    candidates.sort_by(|a, b| value(b.score, b.price).total_cmp(&value(a.score, a.price)));

    let cpu_heavy = ctx
        .games
        .iter()
        .any(|g| g.resolved_bound() == TypicalBound::CpuHeavy);

    candidates
        .into_iter()
        .filter(|c| ctx.within_budget(c.price))
        .take(MAX_PICKS)
        .map(|cpu| {
            let aggregate = aggregate_metrics(
                ctx.catalog,
                cpu,
                ctx.gpu,
                ctx.input,
                ctx.games,
                None,
            );

            let mut bullets = Vec::new();
            if ctx.baseline.bound_type == BoundType::CpuBound {
                bullets.push("Largest gains when CPU-limited.".to_string());
            }
            if ctx.input.is_high_refresh() {
                bullets.push(format!(
                    "Better headroom for {}Hz targets.",
                    ctx.input.refresh_rate
                ));
            }
            if cpu_heavy {
                bullets.push("Improves frame pacing in CPU-heavy titles.".to_string());
            }
            if bullets.is_empty() {
                bullets.push("Balanced CPU uplift for mixed workloads.".to_string());
            }
            bullets.truncate(2);

            PartPick {
                id: cpu.id.clone(),
                category: PartCategory::Cpu,
                name: cpu.name.clone(),
                price: cpu.price,
                avg_fps_gain_pct: Some(rounded_gain(ctx.baseline, &aggregate)),
                labels: Vec::new(),
                confidence: Some(PickConfidence::from_coverage(
                    aggregate.measured_count,
                    aggregate.game_count(),
                )),
                qualitative_bullets: bullets,
                compatibility_notes: Vec::new(),
            }
        })
        .collect()
}
