//! GPU candidate evaluation and labeled picks

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::aggregate::{AggregateMetrics, aggregate_metrics};
use crate::catalog::QualityPreset;
use crate::model::{
    BoundType, Gpu, PartCategory, PartPick, PickConfidence, PickLabel, Resolution, TypicalBound,
};

use super::{SearchContext, rounded_gain};

/// A candidate GPU after the full what-if evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct GpuEvaluation<'a> {
    pub gpu: &'a Gpu,
    /// Position in the catalog's GPU list, the final tie-break everywhere
    pub catalog_order: usize,
    pub perf_index: f64,
    /// Whole-percent average fps gain, after the monotonic clamp
    pub avg_gain: i32,
    pub confidence: PickConfidence,
    pub effective_fps_avg: f64,
}

impl GpuEvaluation<'_> {
    fn price(&self) -> f64 {
        self.gpu.price.max(1.0)
    }

    fn value_score(&self) -> f64 {
        f64::from(self.avg_gain) / self.price()
    }

    fn balance_score(&self) -> f64 {
        f64::from(self.avg_gain) / self.price().sqrt()
    }
}

/// Evaluate every affordable GPU other than the current one.
///
/// Candidates that are not actually faster than the current card are dropped.
/// The survivors are returned ascending by perf index with gains clamped so
/// no candidate reports less than a weaker one.
#[must_use]
pub fn evaluate_gpu_candidates<'a>(ctx: &SearchContext<'a>) -> Vec<GpuEvaluation<'a>> {
    let resolution = ctx.input.resolution;
    let pool: Vec<(usize, &'a Gpu)> = ctx
        .catalog
        .gpus()
        .iter()
        .enumerate()
        .filter(|(_, g)| g.id != ctx.gpu.id && ctx.within_budget(g.price))
        .collect();

    #[cfg(feature = "parallel")]
    let evaluated: Vec<Option<GpuEvaluation<'a>>> =
        pool.par_iter().map(|&(order, gpu)| evaluate(ctx, order, gpu)).collect();

    #[cfg(not(feature = "parallel"))]
    let evaluated: Vec<Option<GpuEvaluation<'a>>> =
        pool.iter().map(|&(order, gpu)| evaluate(ctx, order, gpu)).collect();

    let mut candidates: Vec<GpuEvaluation<'a>> = evaluated.into_iter().flatten().collect();
    tracing::debug!(
        pool = pool.len(),
        faster = candidates.len(),
        resolution = %resolution,
        "evaluated GPU candidates"
    );

    candidates.sort_by(|a, b| {
        a.perf_index
            .total_cmp(&b.perf_index)
            .then(a.catalog_order.cmp(&b.catalog_order))
    });
    let mut running_max = 0;
    for candidate in &mut candidates {
        running_max = running_max.max(candidate.avg_gain);
        candidate.avg_gain = running_max;
    }
    candidates
}

fn evaluate<'a>(
    ctx: &SearchContext<'a>,
    catalog_order: usize,
    gpu: &'a Gpu,
) -> Option<GpuEvaluation<'a>> {
    let perf_index = ctx.catalog.gpu_perf_index(gpu, ctx.input.resolution);
    if !is_faster(ctx, gpu, perf_index) {
        return None;
    }

    let aggregate: AggregateMetrics<'_> = aggregate_metrics(
        ctx.catalog,
        ctx.cpu,
        gpu,
        ctx.input,
        ctx.games,
        Some(ctx.references),
    );

    Some(GpuEvaluation {
        gpu,
        catalog_order,
        perf_index,
        avg_gain: rounded_gain(ctx.baseline, &aggregate),
        confidence: PickConfidence::from_coverage(aggregate.measured_count, aggregate.game_count()),
        effective_fps_avg: aggregate.effective_fps_avg,
    })
}

/// Slower-than-baseline guard: curated overlap when there is one, perf index otherwise
fn is_faster(ctx: &SearchContext<'_>, candidate: &Gpu, perf_index: f64) -> bool {
    let resolution = ctx.input.resolution;
    let curated = ctx.catalog.curated();

    let (count, current_sum, candidate_sum) = ctx
        .games
        .iter()
        .filter_map(|game| {
            let quality = QualityPreset::for_category(game.category);
            let current = curated.lookup(&ctx.gpu.id, &game.id, resolution, quality)?;
            let next = curated.lookup(&candidate.id, &game.id, resolution, quality)?;
            Some((current, next))
        })
        .fold((0usize, 0.0, 0.0), |(n, cur, next), (c, x)| {
            (n + 1, cur + c, next + x)
        });

    if count > 0 {
        candidate_sum / count as f64 > current_sum / count as f64
    } else {
        perf_index > ctx.catalog.gpu_perf_index(ctx.gpu, resolution)
    }
}

/// Up to three labeled GPU picks ordered value, performance, balanced
#[must_use]
pub fn suggest_gpus(ctx: &SearchContext<'_>) -> Vec<PartPick> {
    let improving: Vec<GpuEvaluation<'_>> = evaluate_gpu_candidates(ctx)
        .into_iter()
        .filter(|c| c.avg_gain > 0)
        .collect();
    if improving.is_empty() {
        return Vec::new();
    }

    let mut by_perf: Vec<usize> = (0..improving.len()).collect();
    by_perf.sort_by(|&a, &b| {
        let (a, b) = (&improving[a], &improving[b]);
        b.perf_index
            .total_cmp(&a.perf_index)
            .then(b.avg_gain.cmp(&a.avg_gain))
            .then(a.catalog_order.cmp(&b.catalog_order))
    });
    let by_value = rank_descending(&improving, |c| c.value_score());
    let by_balance = rank_descending(&improving, |c| c.balance_score());

    let mut picks: Vec<(usize, Vec<PickLabel>)> = Vec::new();
    let mut add_pick = |label: PickLabel, order: &[usize]| {
        let index = order
            .iter()
            .copied()
            .find(|i| !picks.iter().any(|(used, _)| used == i))
            .unwrap_or(order[0]);
        match picks.iter_mut().find(|(used, _)| *used == index) {
            Some((_, labels)) => labels.push(label),
            None => picks.push((index, vec![label])),
        }
    };
    add_pick(PickLabel::BestPerformance, &by_perf);
    add_pick(PickLabel::BestValue, &by_value);
    add_pick(PickLabel::Balanced, &by_balance);

    for (_, labels) in &mut picks {
        labels.sort();
    }
    picks.sort_by_key(|(_, labels)| labels[0]);

    picks
        .into_iter()
        .map(|(index, labels)| gpu_pick(ctx, &improving[index], labels))
        .collect()
}

/// Indices into `items`, highest key first; ties keep catalog order
fn rank_descending(items: &[GpuEvaluation<'_>], key: impl Fn(&GpuEvaluation<'_>) -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| {
        key(&items[b])
            .total_cmp(&key(&items[a]))
            .then(items[a].catalog_order.cmp(&items[b].catalog_order))
    });
    order
}

fn gpu_pick(ctx: &SearchContext<'_>, candidate: &GpuEvaluation<'_>, labels: Vec<PickLabel>) -> PartPick {
    let gpu = candidate.gpu;
    let input = ctx.input;
    let unvalidated = !ctx.catalog.curated().has_gpu(&gpu.id);
    let gpu_heavy = ctx
        .games
        .iter()
        .any(|g| g.resolved_bound() == TypicalBound::GpuHeavy);

    let mut bullets = Vec::new();
    if candidate.confidence != PickConfidence::Confirmed || unvalidated {
        bullets.push("Estimated performance based on nearby GPUs.".to_string());
    }
    if ctx.baseline.bound_type == BoundType::GpuBound {
        bullets.push("Largest FPS gains for your selection.".to_string());
    }
    if gpu.vram > ctx.gpu.vram {
        bullets.push("More VRAM headroom for high textures.".to_string());
    }
    if input.resolution != Resolution::Fhd {
        bullets.push(format!("Better suited for {} gaming.", input.resolution));
    }
    if gpu_heavy {
        bullets.push("Stronger GPU headroom for visually demanding titles.".to_string());
    }
    if ctx.baseline.target_limited_share > 0.5 && input.is_high_refresh() {
        bullets.push("Refresh target likely exceeds achievable FPS in these titles.".to_string());
    }
    if candidate.effective_fps_avg >= input.refresh() * 0.98 {
        bullets.push(
            "Diminishing returns at current refresh; higher resolution benefits more.".to_string(),
        );
    }
    if bullets.is_empty() {
        bullets.push("Balanced GPU uplift for mixed workloads.".to_string());
    }
    bullets.truncate(2);

    PartPick {
        id: gpu.id.clone(),
        category: PartCategory::Gpu,
        name: gpu.name.clone(),
        price: gpu.price,
        avg_fps_gain_pct: Some(candidate.avg_gain),
        labels,
        confidence: Some(candidate.confidence),
        qualitative_bullets: bullets,
        compatibility_notes: Vec::new(),
    }
}
