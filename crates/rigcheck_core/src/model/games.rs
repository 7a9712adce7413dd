//! Game workload profiles

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameCategory {
    Esports,
    Aaa,
    /// Engine-heavy AAA (Unreal Engine 5 class)
    #[serde(rename = "UE5_AAA")]
    Ue5Aaa,
    Sim,
    Indie,
}

impl GameCategory {
    /// Fps at 1080p for a reference-class GPU, used by the formula model
    #[must_use]
    pub fn base_fps(&self) -> f64 {
        match self {
            GameCategory::Esports => 420.0,
            GameCategory::Aaa => 140.0,
            GameCategory::Ue5Aaa => 110.0,
            GameCategory::Sim => 130.0,
            GameCategory::Indie => 180.0,
        }
    }

    /// CPU throughput tuning per engine class
    #[must_use]
    pub fn cpu_tune(&self) -> f64 {
        match self {
            GameCategory::Esports => 1.12,
            GameCategory::Aaa => 1.0,
            GameCategory::Ue5Aaa => 0.95,
            GameCategory::Sim => 1.0,
            GameCategory::Indie => 1.05,
        }
    }

    /// Asymptotic fps cap before CPU scaling
    #[must_use]
    pub fn engine_ceiling(&self) -> f64 {
        match self {
            GameCategory::Esports => 600.0,
            GameCategory::Aaa => 220.0,
            GameCategory::Ue5Aaa => 180.0,
            GameCategory::Sim => 200.0,
            GameCategory::Indie => 300.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypicalBound {
    CpuHeavy,
    GpuHeavy,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Heaviness {
    Low,
    Med,
    High,
}

/// How much the player cares about high frame rates in this title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFps {
    Low,
    Medium,
    High,
}

const WEIGHT_MIN: f64 = 0.2;
const WEIGHT_MAX: f64 = 0.8;
const DEFAULT_WEIGHT: f64 = 0.5;
const BOUND_DELTA: f64 = 0.12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameProfile {
    pub id: String,
    pub name: String,
    pub category: GameCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_bound: Option<TypicalBound>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_weight: Option<f64>,
    pub target_fps: TargetFps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_heaviness: Option<Heaviness>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streaming_heaviness: Option<Heaviness>,
}

/// Clamped CPU/GPU workload weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub cpu: f64,
    pub gpu: f64,
}

impl GameProfile {
    #[must_use]
    pub fn weights(&self) -> Weights {
        Weights {
            cpu: self
                .cpu_weight
                .unwrap_or(DEFAULT_WEIGHT)
                .clamp(WEIGHT_MIN, WEIGHT_MAX),
            gpu: self
                .gpu_weight
                .unwrap_or(DEFAULT_WEIGHT)
                .clamp(WEIGHT_MIN, WEIGHT_MAX),
        }
    }

    /// Declared bound hint, or one derived from the weight delta
    #[must_use]
    pub fn resolved_bound(&self) -> TypicalBound {
        if let Some(bound) = self.typical_bound {
            return bound;
        }
        let weights = self.weights();
        let delta = weights.cpu - weights.gpu;
        if delta >= BOUND_DELTA {
            TypicalBound::CpuHeavy
        } else if delta <= -BOUND_DELTA {
            TypicalBound::GpuHeavy
        } else {
            TypicalBound::Mixed
        }
    }

    #[must_use]
    pub fn resolved_vram_heaviness(&self) -> Heaviness {
        self.vram_heaviness.unwrap_or(Heaviness::Med)
    }

    #[must_use]
    pub fn resolved_streaming_heaviness(&self) -> Heaviness {
        self.streaming_heaviness.unwrap_or(match self.category {
            GameCategory::Esports => Heaviness::Low,
            _ => Heaviness::Med,
        })
    }

    #[must_use]
    pub fn is_esports(&self) -> bool {
        self.category == GameCategory::Esports
    }
}
