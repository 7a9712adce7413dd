use crate::model::{AnalysisInput, BudgetBucket, Resolution, StorageType};

/// Fluent builder for [`AnalysisInput`].
///
/// Defaults describe a common mid-range build: 16 GB DDR4-3200, NVMe,
/// 1080p at 144 Hz and a `$400-700` budget.
#[derive(Debug, Clone)]
pub struct AnalysisBuilder {
    input: AnalysisInput,
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            input: AnalysisInput {
                cpu_id: String::new(),
                gpu_id: String::new(),
                ram_amount: 16,
                ram_speed: "3200MHz".to_string(),
                storage_type: StorageType::Nvme,
                resolution: Resolution::Fhd,
                refresh_rate: 144,
                games: Vec::new(),
                budget_bucket: BudgetBucket::UpTo700,
            },
        }
    }

    #[must_use]
    pub fn cpu(mut self, id: impl Into<String>) -> Self {
        self.input.cpu_id = id.into();
        self
    }

    #[must_use]
    pub fn gpu(mut self, id: impl Into<String>) -> Self {
        self.input.gpu_id = id.into();
        self
    }

    /// Installed RAM in GB and its speed string
    #[must_use]
    pub fn ram(mut self, amount_gb: u32, speed: impl Into<String>) -> Self {
        self.input.ram_amount = amount_gb;
        self.input.ram_speed = speed.into();
        self
    }

    #[must_use]
    pub fn storage(mut self, storage: StorageType) -> Self {
        self.input.storage_type = storage;
        self
    }

    #[must_use]
    pub fn resolution(mut self, resolution: Resolution) -> Self {
        self.input.resolution = resolution;
        self
    }

    #[must_use]
    pub fn refresh(mut self, hz: u32) -> Self {
        self.input.refresh_rate = hz;
        self
    }

    #[must_use]
    pub fn game(mut self, id: impl Into<String>) -> Self {
        self.input.games.push(id.into());
        self
    }

    #[must_use]
    pub fn games<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input.games.extend(ids.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn budget(mut self, bucket: BudgetBucket) -> Self {
        self.input.budget_bucket = bucket;
        self
    }

    #[must_use]
    pub fn build(self) -> AnalysisInput {
        self.input
    }
}
