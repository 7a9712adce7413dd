//! Recommendation composer
//!
//! Turns the verdict and the per-category picks into an ordered upgrade path,
//! one best-value recommendation and the warnings list.

use crate::aggregate::AggregateMetrics;
use crate::model::{
    AnalysisInput, BestValue, BoundType, BudgetBucket, Cpu, GameProfile, Gpu, GpuOption,
    Heaviness, MemoryType, PartCategory, PartGroup, PartPick, PickConfidence, PickLabel, Resolution,
    StorageType, UpgradeStep,
};
use crate::verdict::round2;

/// Priority a category must exceed to appear in the upgrade path
pub const PATH_MIN_PRIORITY: f64 = 6.0;
/// Smallest average fps gain worth recommending a CPU or GPU for
pub const MEANINGFUL_GAIN_PCT: i32 = 8;

const MAX_REASONS: usize = 3;
const VRAM_WARNING: &str =
    "Some modern games can exceed 6GB VRAM at high textures; 8GB helps at 1080p.";

/// Inputs shared by every composer step
#[derive(Debug, Clone, Copy)]
pub struct Composer<'a> {
    pub input: &'a AnalysisInput,
    pub cpu: &'a Cpu,
    pub gpu: &'a Gpu,
    pub games: &'a [&'a GameProfile],
    pub baseline: &'a AggregateMetrics<'a>,
    pub verdict: BoundType,
    pub parts: &'a [PartGroup],
}

/// RAM need score from installed capacity
#[must_use]
pub fn ram_need(installed_gb: u32) -> f64 {
    match installed_gb {
        0..12 => 32.0,
        12..16 => 22.0,
        16..32 => 10.0,
        _ => 0.0,
    }
}

/// Per-category priorities, scaled by budget realism and sorted descending.
///
/// Equal priorities keep CPU, GPU, RAM, Storage order.
#[must_use]
pub fn upgrade_priorities(
    input: &AnalysisInput,
    baseline: &AggregateMetrics<'_>,
) -> Vec<(PartCategory, f64)> {
    let ratio = baseline.headroom_ratio;
    let cpu_deficit = if ratio < 1.0 && ratio > 0.0 {
        (1.0 / ratio - 1.0) * 100.0
    } else {
        0.0
    };
    let gpu_deficit = if ratio > 1.0 { (ratio - 1.0) * 100.0 } else { 0.0 };
    let scale = input.budget_bucket.realism_scale();

    let mut priorities = vec![
        (PartCategory::Cpu, cpu_deficit * scale),
        (PartCategory::Gpu, gpu_deficit * scale),
        (PartCategory::Ram, ram_need(input.ram_amount) * scale),
        (PartCategory::Storage, baseline.stutter_risk_avg * 0.6 * scale),
    ];
    priorities.sort_by(|a, b| b.1.total_cmp(&a.1));
    priorities
}

/// `~+a-b%` from the two largest positive gains, or `~+a%` from one
#[must_use]
pub fn gain_range(items: &[PartPick]) -> Option<String> {
    let mut gains: Vec<i32> = items
        .iter()
        .filter_map(|p| p.avg_fps_gain_pct)
        .filter(|g| *g > 0)
        .collect();
    gains.sort_unstable_by(|a, b| b.cmp(a));
    match gains.as_slice() {
        [] => None,
        [top, next, ..] if next != top => Some(format!("~+{next}-{top}%")),
        [top, ..] => Some(format!("~+{top}%")),
    }
}

fn max_gain(items: &[PartPick]) -> i32 {
    items
        .iter()
        .filter_map(|p| p.avg_fps_gain_pct)
        .max()
        .unwrap_or(0)
}

fn has_meaningful_gain(items: &[PartPick]) -> bool {
    max_gain(items) >= MEANINGFUL_GAIN_PCT
}

impl<'a> Composer<'a> {
    fn picks(&self, category: PartCategory) -> &'a [PartPick] {
        self.parts
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.items.as_slice())
            .unwrap_or_default()
    }

    fn cpu_impact(&self) -> String {
        if self.verdict == BoundType::CpuBound {
            "Modest avg FPS gains in CPU-limited titles".to_string()
        } else {
            "Better high-refresh headroom; modest avg FPS change".to_string()
        }
    }

    fn gpu_impact(&self) -> String {
        match gain_range(self.picks(PartCategory::Gpu)) {
            Some(range) => format!("Estimated avg FPS gain: {range}"),
            None => "Estimated avg FPS gain varies by title.".to_string(),
        }
    }

    /// Ordered upgrade path; storage never appears here
    #[must_use]
    pub fn upgrade_path(&self, priorities: &[(PartCategory, f64)]) -> Vec<UpgradeStep> {
        priorities
            .iter()
            .filter(|(category, priority)| {
                *priority > PATH_MIN_PRIORITY && *category != PartCategory::Storage
            })
            .map(|&(category, priority)| {
                let mut reasons = Vec::new();
                let impact_summary = match category {
                    PartCategory::Cpu => {
                        reasons.push("CPU headroom trails GPU throughput.".to_string());
                        if self.input.is_high_refresh() {
                            reasons.push("High refresh targets benefit from faster CPU.".to_string());
                        }
                        self.cpu_impact()
                    }
                    PartCategory::Gpu => {
                        reasons.push(if self.verdict == BoundType::TargetLimited {
                            "GPU upgrades help, but refresh targets are above expected FPS."
                                .to_string()
                        } else {
                            "GPU is the dominant limiter for your selection.".to_string()
                        });
                        let vram_heavy = self
                            .games
                            .iter()
                            .any(|g| g.resolved_vram_heaviness() == Heaviness::High);
                        if vram_heavy && self.gpu.vram < 8 {
                            reasons.push(VRAM_WARNING.to_string());
                        }
                        self.gpu_impact()
                    }
                    PartCategory::Ram => {
                        reasons.push(if self.input.ram_amount < 16 {
                            "16GB is the current baseline for modern titles.".to_string()
                        } else {
                            "More RAM reduces paging in heavy scenes.".to_string()
                        });
                        "Improves stability in modern titles; small avg FPS change".to_string()
                    }
                    PartCategory::Storage | PartCategory::Monitor => String::new(),
                };
                UpgradeStep {
                    category,
                    priority: round2(priority),
                    impact_summary,
                    reasons,
                }
            })
            .collect()
    }

    /// Category the single best-value recommendation comes from, if any
    #[must_use]
    pub fn best_value_category(&self, path: &[UpgradeStep]) -> Option<PartCategory> {
        let actionable = |category: PartCategory| {
            let items = self.picks(category);
            match category {
                PartCategory::Cpu | PartCategory::Gpu => has_meaningful_gain(items),
                _ => !items.is_empty(),
            }
        };

        let bound_category = match self.verdict {
            BoundType::GpuBound => Some(PartCategory::Gpu),
            BoundType::CpuBound => Some(PartCategory::Cpu),
            _ => None,
        };
        if let Some(category) = bound_category.filter(|&c| actionable(c)) {
            return Some(category);
        }
        if let Some(step) = path.iter().find(|step| actionable(step.category)) {
            return Some(step.category);
        }
        if self.input.ram_amount < 16 && !self.picks(PartCategory::Ram).is_empty() {
            return Some(PartCategory::Ram);
        }
        if !self.picks(PartCategory::Storage).is_empty() {
            return Some(PartCategory::Storage);
        }
        None
    }

    /// The single recommendation with the best return for the money
    #[must_use]
    pub fn best_value(&self, path: &[UpgradeStep]) -> BestValue {
        let Some(category) = self.best_value_category(path) else {
            return BestValue::no_upgrade();
        };
        let items = self.picks(category);

        let top = match category {
            PartCategory::Gpu => items
                .iter()
                .find(|p| p.has_label(PickLabel::BestValue))
                .or_else(|| items.iter().max_by_key(|p| p.avg_fps_gain_pct.unwrap_or(0))),
            _ => items.first(),
        };
        let Some(top) = top else {
            return BestValue::no_upgrade();
        };

        let mut reasons = vec![format!("Best pick in budget: {} (${})", top.name, top.price)];
        let impact_summary = match category {
            PartCategory::Gpu => {
                reasons.push(
                    match (self.verdict, self.baseline.bound_type) {
                        (BoundType::TargetLimited, _) => {
                            "Performance is capped by your display target in these titles."
                        }
                        (_, BoundType::GpuBound) => "GPU is the main limiter for your selected games.",
                        _ => "GPU gains are strong while CPU headroom remains.",
                    }
                    .to_string(),
                );
                if top
                    .confidence
                    .is_some_and(|c| c != PickConfidence::Confirmed)
                {
                    reasons.push("Estimated performance based on nearby GPUs.".to_string());
                }
                if let Some(bullet) = top.qualitative_bullets.first() {
                    reasons.push(bullet.clone());
                }
                self.gpu_impact()
            }
            PartCategory::Cpu => {
                reasons.push(
                    "CPU upgrades help most when targeting high refresh or esports titles."
                        .to_string(),
                );
                self.cpu_impact()
            }
            PartCategory::Ram => {
                reasons.push("More RAM reduces paging in memory-heavy scenes.".to_string());
                "Improves stability in modern titles; small avg FPS change".to_string()
            }
            PartCategory::Storage => {
                reasons.push(
                    "SSD upgrades are the most noticeable quality-of-life change.".to_string(),
                );
                "Faster loads + less traversal hitching".to_string()
            }
            PartCategory::Monitor => {
                reasons.push("Higher refresh only helps when FPS can sustain it.".to_string());
                "Matches estimated FPS ceiling for consistent output".to_string()
            }
        };
        reasons.truncate(MAX_REASONS);

        let options = if category == PartCategory::Gpu {
            gpu_options(items)
        } else {
            Vec::new()
        };

        BestValue {
            category: Some(category),
            title: format!("{category} upgrade"),
            impact_summary,
            reasons,
            options,
        }
    }

    /// Warnings independent of the recommendations
    #[must_use]
    pub fn warnings(&self, fallbacks: &[String]) -> Vec<String> {
        let input = self.input;
        let baseline = self.baseline;
        let mut warnings: Vec<String> = fallbacks.to_vec();

        if baseline.vram_pressure_avg >= 60.0 {
            warnings.push(VRAM_WARNING.to_string());
        }
        if baseline.stutter_risk_avg > 60.0 && input.storage_type == StorageType::Hdd {
            warnings.push(
                "HDDs increase traversal stutter in streaming-heavy games; SSD recommended."
                    .to_string(),
            );
        }
        if let Some(declared) = MemoryType::from_speed(&input.ram_speed) {
            if declared != self.cpu.memory_type {
                warnings.push(format!(
                    "RAM speed suggests {declared}, but the {} uses {}; check the memory type.",
                    self.cpu.name, self.cpu.memory_type
                ));
            }
        }
        if input.ram_amount <= 8 {
            warnings.push("8GB RAM is below recommended; expect stutter in modern titles.".to_string());
        }
        if input.resolution == Resolution::Uhd && self.gpu.score(Resolution::Uhd) < 70.0 {
            warnings.push(
                "4K gaming is demanding; consider 1440p for more consistent frame rates."
                    .to_string(),
            );
        }
        if self.verdict == BoundType::TargetLimited {
            warnings.push(
                "Your refresh target exceeds expected FPS; consider a lower refresh or resolution for consistency."
                    .to_string(),
            );
        }
        if input.budget_bucket == BudgetBucket::UpTo100 {
            warnings.push("Under $100: focus on RAM/SSD or save for a larger jump.".to_string());
        }
        warnings
    }
}

fn gpu_options(items: &[PartPick]) -> Vec<GpuOption> {
    items
        .iter()
        .map(|item| {
            let impact_summary = match (item.avg_fps_gain_pct, item.confidence) {
                (Some(gain), Some(PickConfidence::Speculative)) if gain > 0 => {
                    format!("Speculative ~+{gain}% avg FPS (no benchmarks)")
                }
                (Some(gain), _) if gain > 0 => format!(
                    "{}~+{gain}% avg FPS",
                    if item.is_estimated() { "Estimated " } else { "" }
                ),
                _ => "Estimated impact (limited data)".to_string(),
            };
            GpuOption {
                label: item
                    .labels
                    .iter()
                    .map(PickLabel::label)
                    .collect::<Vec<_>>()
                    .join(" + "),
                name: item.name.clone(),
                price: item.price,
                impact_summary,
                confidence: item.confidence,
            }
        })
        .collect()
}
