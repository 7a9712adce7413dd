mod games;
mod hardware;
mod input;
mod results;

pub use games::{GameCategory, GameProfile, Heaviness, TargetFps, TypicalBound, Weights};
pub use hardware::{Cpu, Gpu, MemoryType, Monitor, RamKit, Resolution, StorageKit, StorageType};
pub use input::{AnalysisInput, BudgetBucket};
pub use results::{
    AnalysisResult, BestValue, BoundType, GameVerdict, GpuOption, PartCategory, PartGroup,
    PartPick, PickConfidence, PickLabel, UpgradeStep, Verdict,
};
