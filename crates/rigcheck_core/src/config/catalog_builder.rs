use crate::catalog::{Catalog, CatalogData, CuratedSample, PerfMultiplier, PerfOverrides, QualityPreset};
use crate::error::CatalogError;
use crate::model::{
    Cpu, GameCategory, GameProfile, Gpu, Heaviness, MemoryType, Monitor, RamKit, Resolution,
    StorageKit, StorageType, TargetFps, TypicalBound,
};

const DEFAULT_SOCKET: &str = "AM5";
const DEFAULT_VRAM: u32 = 8;

/// Fluent builder for a [`GameProfile`]
#[derive(Debug, Clone)]
pub struct GameBuilder {
    profile: GameProfile,
}

impl GameBuilder {
    #[must_use]
    pub fn new(id: impl Into<String>, category: GameCategory) -> Self {
        let id = id.into();
        Self {
            profile: GameProfile {
                name: id.clone(),
                id,
                category,
                typical_bound: None,
                cpu_weight: None,
                gpu_weight: None,
                target_fps: TargetFps::Medium,
                vram_heaviness: None,
                streaming_heaviness: None,
            },
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.profile.name = name.into();
        self
    }

    #[must_use]
    pub fn bound(mut self, bound: TypicalBound) -> Self {
        self.profile.typical_bound = Some(bound);
        self
    }

    #[must_use]
    pub fn weights(mut self, cpu: f64, gpu: f64) -> Self {
        self.profile.cpu_weight = Some(cpu);
        self.profile.gpu_weight = Some(gpu);
        self
    }

    #[must_use]
    pub fn target_fps(mut self, target: TargetFps) -> Self {
        self.profile.target_fps = target;
        self
    }

    #[must_use]
    pub fn vram(mut self, heaviness: Heaviness) -> Self {
        self.profile.vram_heaviness = Some(heaviness);
        self
    }

    #[must_use]
    pub fn streaming(mut self, heaviness: Heaviness) -> Self {
        self.profile.streaming_heaviness = Some(heaviness);
        self
    }

    #[must_use]
    pub fn build(self) -> GameProfile {
        self.profile
    }
}

#[derive(Debug, Clone)]
struct PendingSample {
    gpu: String,
    game: String,
    resolution: Resolution,
    fps: f64,
}

/// Fluent builder for small, synthetic catalogs.
///
/// Shorthand methods fill in plausible defaults (AM5/DDR5 CPUs, 8 GB GPUs with
/// the same score at every resolution); the `*_with` variants take full records.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    data: CatalogData,
    samples: Vec<PendingSample>,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing catalog's collections
    #[must_use]
    pub fn from_data(data: CatalogData) -> Self {
        Self {
            data,
            samples: Vec::new(),
        }
    }

    #[must_use]
    pub fn cpu(self, id: impl Into<String>, score: f64, price: f64) -> Self {
        let id = id.into();
        self.cpu_with(Cpu {
            name: id.clone(),
            id,
            brand: String::new(),
            score,
            price,
            socket: DEFAULT_SOCKET.to_string(),
            memory_type: MemoryType::Ddr5,
        })
    }

    #[must_use]
    pub fn cpu_with(mut self, cpu: Cpu) -> Self {
        self.data.cpus.push(cpu);
        self
    }

    #[must_use]
    pub fn gpu(self, id: impl Into<String>, score: f64, price: f64) -> Self {
        let id = id.into();
        self.gpu_with(Gpu {
            name: id.clone(),
            id,
            vram: DEFAULT_VRAM,
            score_1080: score,
            score_1440: score,
            score_4k: score,
            price,
        })
    }

    #[must_use]
    pub fn gpu_with(mut self, gpu: Gpu) -> Self {
        self.data.gpus.push(gpu);
        self
    }

    /// A game with default weights and heaviness for its category
    #[must_use]
    pub fn game(self, id: impl Into<String>, category: GameCategory) -> Self {
        self.game_with(GameBuilder::new(id, category))
    }

    #[must_use]
    pub fn game_with(mut self, builder: GameBuilder) -> Self {
        self.data.games.push(builder.build());
        self
    }

    #[must_use]
    pub fn monitor(
        mut self,
        id: impl Into<String>,
        resolution: Resolution,
        refresh: u32,
        price: f64,
    ) -> Self {
        let id = id.into();
        self.data.monitors.push(Monitor {
            name: id.clone(),
            id,
            resolution,
            refresh,
            price,
            notes: None,
        });
        self
    }

    #[must_use]
    pub fn ram_kit(
        mut self,
        id: impl Into<String>,
        capacity: u32,
        memory_type: MemoryType,
        price: f64,
    ) -> Self {
        let id = id.into();
        self.data.ram_kits.push(RamKit {
            name: id.clone(),
            id,
            price,
            capacity,
            memory_type,
        });
        self
    }

    #[must_use]
    pub fn storage_kit(mut self, id: impl Into<String>, storage_type: StorageType, price: f64) -> Self {
        let id = id.into();
        self.data.storage_kits.push(StorageKit {
            name: id.clone(),
            id,
            price,
            storage_type,
        });
        self
    }

    /// A curated sample; the quality preset follows the game's category
    #[must_use]
    pub fn sample(
        mut self,
        gpu: impl Into<String>,
        game: impl Into<String>,
        resolution: Resolution,
        fps: f64,
    ) -> Self {
        self.samples.push(PendingSample {
            gpu: gpu.into(),
            game: game.into(),
            resolution,
            fps,
        });
        self
    }

    /// Pin `gpu`'s perf index to `multiplier` times the reference GPU's
    #[must_use]
    pub fn perf_override(mut self, reference: impl Into<String>, gpu: impl Into<String>, multiplier: f64) -> Self {
        let reference = reference.into();
        let overrides = self.data.perf_overrides.get_or_insert_with(|| PerfOverrides {
            reference_gpu: reference.clone(),
            multipliers: Vec::new(),
        });
        overrides.reference_gpu = reference;
        overrides.multipliers.push(PerfMultiplier {
            gpu: gpu.into(),
            multiplier,
        });
        self
    }

    /// Raw collections, without validation
    #[must_use]
    pub fn build_data(self) -> CatalogData {
        let mut data = self.data;
        for sample in self.samples {
            let quality = data
                .games
                .iter()
                .find(|g| g.id == sample.game)
                .map_or(QualityPreset::Ultra, |g| QualityPreset::for_category(g.category));
            data.curated.push(CuratedSample {
                quality,
                resolution: sample.resolution,
                gpu: sample.gpu,
                game: sample.game,
                fps: sample.fps,
            });
        }
        data
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.build_data())
    }
}
