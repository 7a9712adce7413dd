//! The per-request analysis input record

use serde::{Deserialize, Serialize};

use super::{Resolution, StorageType};

/// Ordered price-range buckets offered to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BudgetBucket {
    #[serde(rename = "$0-100")]
    UpTo100,
    #[serde(rename = "$100-250")]
    UpTo250,
    #[serde(rename = "$250-400")]
    UpTo400,
    #[serde(rename = "$400-700")]
    UpTo700,
    #[serde(rename = "$700-1200")]
    UpTo1200,
    #[serde(rename = "$1200-1600")]
    UpTo1600,
    #[serde(rename = "$1600-2000")]
    UpTo2000,
    #[serde(rename = "$2000-2500")]
    UpTo2500,
    #[serde(rename = "$2500+")]
    Over2500,
}

impl BudgetBucket {
    pub const ALL: [BudgetBucket; 9] = [
        BudgetBucket::UpTo100,
        BudgetBucket::UpTo250,
        BudgetBucket::UpTo400,
        BudgetBucket::UpTo700,
        BudgetBucket::UpTo1200,
        BudgetBucket::UpTo1600,
        BudgetBucket::UpTo2000,
        BudgetBucket::UpTo2500,
        BudgetBucket::Over2500,
    ];

    /// Upper price ceiling used for candidate filtering
    #[must_use]
    pub fn ceiling(&self) -> f64 {
        match self {
            BudgetBucket::UpTo100 => 100.0,
            BudgetBucket::UpTo250 => 250.0,
            BudgetBucket::UpTo400 => 400.0,
            BudgetBucket::UpTo700 => 700.0,
            BudgetBucket::UpTo1200 => 1200.0,
            BudgetBucket::UpTo1600 => 1600.0,
            BudgetBucket::UpTo2000 => 2000.0,
            BudgetBucket::UpTo2500 => 2500.0,
            BudgetBucket::Over2500 => 4000.0,
        }
    }

    /// Priority multiplier: small budgets make sweeping upgrades unrealistic
    #[must_use]
    pub fn realism_scale(&self) -> f64 {
        match self {
            BudgetBucket::UpTo100 => 0.6,
            BudgetBucket::UpTo250 => 0.8,
            BudgetBucket::UpTo400 => 1.0,
            BudgetBucket::UpTo700 => 1.1,
            BudgetBucket::UpTo1200 => 1.2,
            BudgetBucket::UpTo1600 => 1.25,
            BudgetBucket::UpTo2000 => 1.3,
            BudgetBucket::UpTo2500 => 1.35,
            BudgetBucket::Over2500 => 1.4,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BudgetBucket::UpTo100 => "$0-100",
            BudgetBucket::UpTo250 => "$100-250",
            BudgetBucket::UpTo400 => "$250-400",
            BudgetBucket::UpTo700 => "$400-700",
            BudgetBucket::UpTo1200 => "$700-1200",
            BudgetBucket::UpTo1600 => "$1200-1600",
            BudgetBucket::UpTo2000 => "$1600-2000",
            BudgetBucket::UpTo2500 => "$2000-2500",
            BudgetBucket::Over2500 => "$2500+",
        }
    }
}

/// A validated description of the user's current build and goals.
///
/// The core assumes the caller has already checked that `ram_amount` and
/// `refresh_rate` are positive and that `games` is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    pub cpu_id: String,
    pub gpu_id: String,
    /// Installed RAM in GB
    pub ram_amount: u32,
    /// Free-form speed string, e.g. `"3200MHz"` or `"DDR5-6000"`
    pub ram_speed: String,
    pub storage_type: StorageType,
    pub resolution: Resolution,
    pub refresh_rate: u32,
    pub games: Vec<String>,
    pub budget_bucket: BudgetBucket,
}

impl AnalysisInput {
    #[must_use]
    pub fn budget_ceiling(&self) -> f64 {
        self.budget_bucket.ceiling()
    }

    #[must_use]
    pub fn refresh(&self) -> f64 {
        f64::from(self.refresh_rate)
    }

    #[must_use]
    pub fn is_high_refresh(&self) -> bool {
        self.refresh_rate >= 144
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_ceilings_are_ordered() {
        let ceilings: Vec<f64> = BudgetBucket::ALL.iter().map(BudgetBucket::ceiling).collect();
        assert!(ceilings.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(BudgetBucket::Over2500.ceiling(), 4000.0);
    }

    #[test]
    fn test_realism_scale_grows_with_budget() {
        let scales: Vec<f64> = BudgetBucket::ALL
            .iter()
            .map(BudgetBucket::realism_scale)
            .collect();
        assert!(scales.windows(2).all(|w| w[0] < w[1]));
    }
}
