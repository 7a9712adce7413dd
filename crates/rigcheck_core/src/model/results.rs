//! Analysis result records returned to the presentation layer

use serde::{Deserialize, Serialize};

/// Which component limits frame rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoundType {
    CpuBound,
    GpuBound,
    Mixed,
    /// The display target exceeds achievable fps regardless of component
    TargetLimited,
}

impl BoundType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BoundType::CpuBound => "CPU-bound",
            BoundType::GpuBound => "GPU-bound",
            BoundType::Mixed => "Balanced",
            BoundType::TargetLimited => "Display-target limited",
        }
    }
}

/// Upgradeable part categories, in result order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PartCategory {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "GPU")]
    Gpu,
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    Monitor,
}

impl PartCategory {
    pub const ALL: [PartCategory; 5] = [
        PartCategory::Cpu,
        PartCategory::Gpu,
        PartCategory::Ram,
        PartCategory::Storage,
        PartCategory::Monitor,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PartCategory::Cpu => "CPU",
            PartCategory::Gpu => "GPU",
            PartCategory::Ram => "RAM",
            PartCategory::Storage => "Storage",
            PartCategory::Monitor => "Monitor",
        }
    }
}

impl std::fmt::Display for PartCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label attached to a ranked GPU pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickLabel {
    BestValue,
    BestPerformance,
    Balanced,
}

impl PickLabel {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PickLabel::BestValue => "Best value",
            PickLabel::BestPerformance => "Best performance",
            PickLabel::Balanced => "Balanced",
        }
    }
}

/// How much of a pick's estimate rests on measured benchmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickConfidence {
    /// Every selected game has a curated sample
    Confirmed,
    /// Some games have curated samples
    Estimated,
    /// No curated samples at all
    Speculative,
}

impl PickConfidence {
    #[must_use]
    pub fn from_coverage(measured: usize, total: usize) -> Self {
        if total > 0 && measured == total {
            PickConfidence::Confirmed
        } else if measured > 0 {
            PickConfidence::Estimated
        } else {
            PickConfidence::Speculative
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartPick {
    pub id: String,
    pub category: PartCategory,
    pub name: String,
    pub price: f64,
    /// Average fps gain over the current build, in whole percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_fps_gain_pct: Option<i32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<PickLabel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<PickConfidence>,
    pub qualitative_bullets: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compatibility_notes: Vec<String>,
}

impl PartPick {
    #[must_use]
    pub fn has_label(&self, label: PickLabel) -> bool {
        self.labels.contains(&label)
    }

    #[must_use]
    pub fn is_estimated(&self) -> bool {
        !matches!(self.confidence, Some(PickConfidence::Confirmed) | None)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartGroup {
    pub category: PartCategory,
    pub items: Vec<PartPick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameVerdict {
    pub id: String,
    pub name: String,
    pub bound_type: BoundType,
    pub headroom_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub bound_type: BoundType,
    /// 0..1, rounded to two decimals
    pub confidence: f64,
    /// CPU throughput over GPU throughput, rounded to two decimals
    pub headroom_ratio: f64,
    pub reasons: Vec<String>,
    pub games: Vec<GameVerdict>,
}

/// One labeled GPU choice shown alongside a GPU best-value recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuOption {
    pub label: String,
    pub name: String,
    pub price: f64,
    pub impact_summary: String,
    pub confidence: Option<PickConfidence>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestValue {
    /// `None` when no cost-effective upgrade exists
    pub category: Option<PartCategory>,
    pub title: String,
    pub impact_summary: String,
    pub reasons: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<GpuOption>,
}

impl BestValue {
    #[must_use]
    pub fn no_upgrade() -> Self {
        Self {
            category: None,
            title: "No major upgrade needed".to_string(),
            impact_summary: "System balanced for chosen titles".to_string(),
            reasons: vec![
                "Adjusting settings may yield better returns than new hardware".to_string(),
            ],
            options: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeStep {
    pub category: PartCategory,
    pub priority: f64,
    pub impact_summary: String,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub best_value: BestValue,
    pub upgrade_path: Vec<UpgradeStep>,
    pub recommended_parts: Vec<PartGroup>,
    pub warnings: Vec<String>,
}

impl AnalysisResult {
    /// Picks for one category (empty when none qualified)
    #[must_use]
    pub fn parts(&self, category: PartCategory) -> &[PartPick] {
        self.recommended_parts
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.items.as_slice())
            .unwrap_or_default()
    }

    /// Every pick across all categories
    pub fn all_parts(&self) -> impl Iterator<Item = &PartPick> {
        self.recommended_parts
            .iter()
            .flat_map(|group| group.items.iter())
    }
}
