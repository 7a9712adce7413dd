//! Curated benchmark samples and the anchor index used for interpolation

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{GameCategory, Resolution};

/// Graphics preset a curated sample was measured at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreset {
    Low,
    Ultra,
}

impl QualityPreset {
    /// Esports titles are benchmarked at competitive settings, everything else at ultra
    #[must_use]
    pub fn for_category(category: GameCategory) -> Self {
        match category {
            GameCategory::Esports => QualityPreset::Low,
            _ => QualityPreset::Ultra,
        }
    }
}

/// One measured average fps figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratedSample {
    pub quality: QualityPreset,
    pub resolution: Resolution,
    pub gpu: String,
    pub game: String,
    pub fps: f64,
}

/// A measured sample positioned in perf-index space
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    pub gpu_id: String,
    pub fps: f64,
    pub perf_index: f64,
}

type Bucket = (QualityPreset, Resolution);

/// Sparse (quality, resolution, gpu, game) -> fps table with a per-title anchor list
#[derive(Debug, Clone, Default)]
pub struct CuratedTable {
    samples: FxHashMap<Bucket, FxHashMap<String, FxHashMap<String, f64>>>,
    anchors: FxHashMap<Bucket, FxHashMap<String, Vec<Anchor>>>,
    gpus: Vec<String>,
}

impl CuratedTable {
    /// Build the table. `perf_index` maps a GPU id and resolution to its perf index.
    pub(crate) fn build(
        samples: &[CuratedSample],
        perf_index: impl Fn(&str, Resolution) -> f64,
    ) -> Self {
        let mut table = CuratedTable::default();

        for sample in samples {
            let bucket = (sample.quality, sample.resolution);
            table
                .samples
                .entry(bucket)
                .or_default()
                .entry(sample.gpu.clone())
                .or_default()
                .insert(sample.game.clone(), sample.fps);

            if !table.gpus.contains(&sample.gpu) {
                table.gpus.push(sample.gpu.clone());
            }

            let index_value = perf_index(&sample.gpu, sample.resolution);
            if !index_value.is_finite() || index_value <= 0.0 {
                continue;
            }
            let anchors = table
                .anchors
                .entry(bucket)
                .or_default()
                .entry(sample.game.clone())
                .or_default();
            // Later duplicates replace earlier ones, matching the sample map
            anchors.retain(|a| a.gpu_id != sample.gpu);
            anchors.push(Anchor {
                gpu_id: sample.gpu.clone(),
                fps: sample.fps,
                perf_index: index_value,
            });
        }

        for games in table.anchors.values_mut() {
            for list in games.values_mut() {
                list.sort_by(|a, b| a.perf_index.total_cmp(&b.perf_index));
            }
        }

        table
    }

    /// Exact measured fps, if any
    #[must_use]
    pub fn lookup(
        &self,
        gpu_id: &str,
        game_id: &str,
        resolution: Resolution,
        quality: QualityPreset,
    ) -> Option<f64> {
        self.samples
            .get(&(quality, resolution))?
            .get(gpu_id)?
            .get(game_id)
            .copied()
    }

    /// Measured samples for a title, ascending by perf index
    #[must_use]
    pub fn anchors(&self, game_id: &str, resolution: Resolution, quality: QualityPreset) -> &[Anchor] {
        self.anchors
            .get(&(quality, resolution))
            .and_then(|games| games.get(game_id))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether a GPU has at least one curated sample anywhere
    #[must_use]
    pub fn has_gpu(&self, gpu_id: &str) -> bool {
        self.gpus.iter().any(|id| id == gpu_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
