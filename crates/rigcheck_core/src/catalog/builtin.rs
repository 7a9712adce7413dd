// Built-in component catalog and curated benchmark table.
// Scores are 0-100 gaming ratings; prices are typical street prices in USD.

use crate::model::{
    Cpu, GameCategory, GameProfile, Gpu, Heaviness, MemoryType, Monitor, RamKit, Resolution,
    StorageKit, StorageType, TargetFps, TypicalBound,
};

use super::{CatalogData, CuratedSample, PerfMultiplier, PerfOverrides, QualityPreset};

use GameCategory::{Aaa, Esports, Indie, Sim, Ue5Aaa};
use Heaviness::{High, Low, Med};
use MemoryType::{Ddr4, Ddr5};
use Resolution::{Fhd, Qhd, Uhd};

// id, name, brand, score, price, socket, memory
type CpuRow = (&'static str, &'static str, &'static str, f64, f64, &'static str, MemoryType);

const CPUS: &[CpuRow] = &[
    ("i3-10100", "Intel Core i3-10100", "Intel", 52.0, 85.0, "LGA1200", Ddr4),
    ("i5-10400", "Intel Core i5-10400", "Intel", 58.0, 110.0, "LGA1200", Ddr4),
    ("i5-11400", "Intel Core i5-11400", "Intel", 62.0, 120.0, "LGA1200", Ddr4),
    ("i7-10700k", "Intel Core i7-10700K", "Intel", 66.0, 190.0, "LGA1200", Ddr4),
    ("i9-11900k", "Intel Core i9-11900K", "Intel", 72.0, 260.0, "LGA1200", Ddr4),
    ("i3-12100f", "Intel Core i3-12100F", "Intel", 60.0, 95.0, "LGA1700", Ddr4),
    ("i5-12400", "Intel Core i5-12400", "Intel", 70.0, 140.0, "LGA1700", Ddr4),
    ("i5-12600k", "Intel Core i5-12600K", "Intel", 78.0, 190.0, "LGA1700", Ddr4),
    ("i7-12700k", "Intel Core i7-12700K", "Intel", 83.0, 260.0, "LGA1700", Ddr4),
    ("i5-13600k", "Intel Core i5-13600K", "Intel", 87.0, 280.0, "LGA1700", Ddr5),
    ("i5-14600k", "Intel Core i5-14600K", "Intel", 88.0, 300.0, "LGA1700", Ddr5),
    ("i7-13700k", "Intel Core i7-13700K", "Intel", 91.0, 360.0, "LGA1700", Ddr5),
    ("i9-14900k", "Intel Core i9-14900K", "Intel", 95.0, 520.0, "LGA1700", Ddr5),
    ("r5-3600", "AMD Ryzen 5 3600", "AMD", 55.0, 80.0, "AM4", Ddr4),
    ("r5-5600", "AMD Ryzen 5 5600", "AMD", 68.0, 120.0, "AM4", Ddr4),
    ("r7-5700x", "AMD Ryzen 7 5700X", "AMD", 72.0, 160.0, "AM4", Ddr4),
    ("r7-5800x3d", "AMD Ryzen 7 5800X3D", "AMD", 86.0, 300.0, "AM4", Ddr4),
    ("r5-7600", "AMD Ryzen 5 7600", "AMD", 82.0, 200.0, "AM5", Ddr5),
    ("r7-7800x3d", "AMD Ryzen 7 7800X3D", "AMD", 97.0, 400.0, "AM5", Ddr5),
    ("r9-7950x3d", "AMD Ryzen 9 7950X3D", "AMD", 98.0, 600.0, "AM5", Ddr5),
    ("r7-9800x3d", "AMD Ryzen 7 9800X3D", "AMD", 100.0, 480.0, "AM5", Ddr5),
];

// id, name, vram, 1080p, 1440p, 4K, price
type GpuRow = (&'static str, &'static str, u32, f64, f64, f64, f64);

const GPUS: &[GpuRow] = &[
    ("gtx1650", "NVIDIA GeForce GTX 1650", 4, 30.0, 24.0, 16.0, 150.0),
    ("gtx1660s", "NVIDIA GeForce GTX 1660 Super", 6, 38.0, 31.0, 22.0, 200.0),
    ("rtx3050", "NVIDIA GeForce RTX 3050", 8, 40.0, 33.0, 24.0, 190.0),
    ("rtx2060", "NVIDIA GeForce RTX 2060", 6, 45.0, 38.0, 28.0, 220.0),
    ("rx6600", "AMD Radeon RX 6600", 8, 48.0, 40.0, 29.0, 200.0),
    ("rtx3060", "NVIDIA GeForce RTX 3060", 12, 52.0, 45.0, 34.0, 280.0),
    ("arc-a770", "Intel Arc A770", 16, 54.0, 49.0, 38.0, 280.0),
    ("rx7600", "AMD Radeon RX 7600", 8, 55.0, 47.0, 34.0, 260.0),
    ("rtx4060", "NVIDIA GeForce RTX 4060", 8, 56.0, 48.0, 35.0, 290.0),
    ("rtx3060ti", "NVIDIA GeForce RTX 3060 Ti", 8, 60.0, 53.0, 41.0, 330.0),
    ("rtx4060ti", "NVIDIA GeForce RTX 4060 Ti", 8, 63.0, 55.0, 42.0, 380.0),
    ("rx6700xt", "AMD Radeon RX 6700 XT", 12, 64.0, 57.0, 44.0, 330.0),
    ("rtx3070", "NVIDIA GeForce RTX 3070", 8, 67.0, 60.0, 47.0, 380.0),
    ("rx7700xt", "AMD Radeon RX 7700 XT", 12, 70.0, 63.0, 50.0, 420.0),
    ("rtx4070", "NVIDIA GeForce RTX 4070", 12, 76.0, 70.0, 57.0, 550.0),
    ("rx7800xt", "AMD Radeon RX 7800 XT", 16, 77.0, 72.0, 60.0, 500.0),
    ("rtx3080", "NVIDIA GeForce RTX 3080", 10, 79.0, 74.0, 63.0, 550.0),
    ("rx7900gre", "AMD Radeon RX 7900 GRE", 16, 81.0, 76.0, 64.0, 550.0),
    ("rtx4070super", "NVIDIA GeForce RTX 4070 Super", 12, 82.0, 77.0, 65.0, 600.0),
    ("rtx4070tisuper", "NVIDIA GeForce RTX 4070 Ti Super", 16, 86.0, 82.0, 72.0, 800.0),
    ("rx7900xt", "AMD Radeon RX 7900 XT", 20, 87.0, 83.0, 74.0, 700.0),
    ("rtx4080super", "NVIDIA GeForce RTX 4080 Super", 16, 92.0, 90.0, 84.0, 1000.0),
    ("rx7900xtx", "AMD Radeon RX 7900 XTX", 24, 93.0, 91.0, 86.0, 950.0),
    ("rtx4090", "NVIDIA GeForce RTX 4090", 24, 98.0, 98.0, 97.0, 1800.0),
    ("rtx5090", "NVIDIA GeForce RTX 5090", 32, 100.0, 100.0, 100.0, 2000.0),
];

/// Cards whose measured standing differs from their score, relative to the RTX 4070
const PERF_REFERENCE_GPU: &str = "rtx4070";
const PERF_MULTIPLIERS: &[(&str, f64)] = &[("arc-a770", 0.52), ("rx7800xt", 1.06)];

struct GameRow {
    id: &'static str,
    name: &'static str,
    category: GameCategory,
    bound: Option<TypicalBound>,
    cpu: f64,
    gpu: f64,
    target: TargetFps,
    vram: Heaviness,
    streaming: Heaviness,
}

const fn game(
    id: &'static str,
    name: &'static str,
    category: GameCategory,
    bound: Option<TypicalBound>,
    weights: (f64, f64),
    target: TargetFps,
    heaviness: (Heaviness, Heaviness),
) -> GameRow {
    GameRow {
        id,
        name,
        category,
        bound,
        cpu: weights.0,
        gpu: weights.1,
        target,
        vram: heaviness.0,
        streaming: heaviness.1,
    }
}

const CPU_HEAVY: Option<TypicalBound> = Some(TypicalBound::CpuHeavy);
const GPU_HEAVY: Option<TypicalBound> = Some(TypicalBound::GpuHeavy);
const DERIVED: Option<TypicalBound> = None;

const GAMES: &[GameRow] = &[
    game("valorant", "Valorant", Esports, CPU_HEAVY, (0.75, 0.3), TargetFps::High, (Low, Low)),
    game("cs2", "Counter-Strike 2", Esports, CPU_HEAVY, (0.75, 0.35), TargetFps::High, (Low, Low)),
    game("overwatch2", "Overwatch 2", Esports, DERIVED, (0.6, 0.45), TargetFps::High, (Med, Low)),
    game("fortnite", "Fortnite", Esports, DERIVED, (0.6, 0.5), TargetFps::High, (Med, Med)),
    game("apex", "Apex Legends", Esports, DERIVED, (0.55, 0.55), TargetFps::High, (Med, Med)),
    game("r6", "Rainbow Six Siege", Esports, DERIVED, (0.6, 0.45), TargetFps::High, (Low, Low)),
    game("league", "League of Legends", Esports, CPU_HEAVY, (0.7, 0.25), TargetFps::Medium, (Low, Low)),
    game("warzone", "Call of Duty: Warzone", Aaa, DERIVED, (0.55, 0.6), TargetFps::High, (High, High)),
    game("pubg", "PUBG: Battlegrounds", Aaa, DERIVED, (0.55, 0.55), TargetFps::Medium, (Med, Med)),
    game("cyberpunk", "Cyberpunk 2077", Aaa, GPU_HEAVY, (0.45, 0.75), TargetFps::Medium, (High, High)),
    game("rdr2", "Red Dead Redemption 2", Aaa, GPU_HEAVY, (0.4, 0.75), TargetFps::Low, (High, High)),
    game("eldenring", "Elden Ring", Aaa, DERIVED, (0.45, 0.6), TargetFps::Low, (Med, Med)),
    game("gta5", "Grand Theft Auto V", Aaa, DERIVED, (0.6, 0.45), TargetFps::Medium, (Low, Med)),
    game("bg3", "Baldur's Gate 3", Aaa, DERIVED, (0.6, 0.55), TargetFps::Low, (High, Med)),
    game("stalker2", "S.T.A.L.K.E.R. 2", Ue5Aaa, GPU_HEAVY, (0.55, 0.8), TargetFps::Low, (High, High)),
    game("blackmyth", "Black Myth: Wukong", Ue5Aaa, GPU_HEAVY, (0.4, 0.8), TargetFps::Low, (High, High)),
    game("msfs2020", "Microsoft Flight Simulator", Sim, CPU_HEAVY, (0.75, 0.6), TargetFps::Low, (High, High)),
    game("cities2", "Cities: Skylines II", Sim, CPU_HEAVY, (0.8, 0.5), TargetFps::Low, (Med, High)),
    game("minecraft", "Minecraft", Indie, CPU_HEAVY, (0.7, 0.3), TargetFps::Medium, (Low, Med)),
    game("hades2", "Hades II", Indie, DERIVED, (0.35, 0.35), TargetFps::Medium, (Low, Low)),
];

// id, name, resolution, refresh, price, notes
type MonitorRow = (&'static str, &'static str, Resolution, u32, f64, Option<&'static str>);

const MONITORS: &[MonitorRow] = &[
    ("fhd-60", "24\" 1080p 60Hz IPS", Fhd, 60, 90.0, None),
    ("fhd-144", "24\" 1080p 144Hz IPS", Fhd, 144, 130.0, None),
    ("fhd-165", "24\" 1080p 165Hz IPS", Fhd, 165, 150.0, None),
    ("fhd-240", "25\" 1080p 240Hz TN", Fhd, 240, 200.0, Some("Fast TN panel; narrower viewing angles.")),
    ("fhd-360", "25\" 1080p 360Hz IPS", Fhd, 360, 380.0, Some("Competitive-grade motion clarity.")),
    ("qhd-60", "27\" 1440p 60Hz IPS", Qhd, 60, 170.0, None),
    ("qhd-144", "27\" 1440p 144Hz IPS", Qhd, 144, 220.0, None),
    ("qhd-165", "27\" 1440p 165Hz IPS", Qhd, 165, 250.0, None),
    ("qhd-240", "27\" 1440p 240Hz OLED", Qhd, 240, 650.0, Some("OLED: near-instant pixel response.")),
    ("qhd-360", "27\" 1440p 360Hz OLED", Qhd, 360, 800.0, Some("OLED: near-instant pixel response.")),
    ("uhd-60", "27\" 4K 60Hz IPS", Uhd, 60, 250.0, None),
    ("uhd-144", "32\" 4K 144Hz IPS", Uhd, 144, 450.0, None),
    ("uhd-165", "32\" 4K 165Hz Mini-LED", Uhd, 165, 600.0, Some("Mini-LED backlight for HDR highlights.")),
    ("uhd-240", "32\" 4K 240Hz OLED", Uhd, 240, 950.0, Some("OLED: near-instant pixel response.")),
];

const RAM_KITS: &[(&str, &str, f64, u32, MemoryType)] = &[
    ("ram-16-3200", "16GB (2x8) DDR4-3200", 45.0, 16, Ddr4),
    ("ram-32-3600", "32GB (2x16) DDR4-3600", 80.0, 32, Ddr4),
    ("ram-64-3600", "64GB (2x32) DDR4-3600", 150.0, 64, Ddr4),
    ("ram-16-5600", "16GB (2x8) DDR5-5600", 60.0, 16, Ddr5),
    ("ram-32-6000", "32GB (2x16) DDR5-6000", 110.0, 32, Ddr5),
    ("ram-64-6000", "64GB (2x32) DDR5-6000", 210.0, 64, Ddr5),
];

const STORAGE_KITS: &[(&str, &str, f64, StorageType)] = &[
    ("ssd-sata-1tb", "1TB SATA SSD", 55.0, StorageType::SataSsd),
    ("ssd-nvme3-1tb", "1TB NVMe Gen3", 65.0, StorageType::Nvme),
    ("ssd-nvme4-1tb", "1TB NVMe Gen4", 85.0, StorageType::Nvme),
    ("ssd-nvme4-2tb", "2TB NVMe Gen4", 140.0, StorageType::Nvme),
];

/// Column order of the curated rows below
const CURATED_GPUS: [&str; 8] = [
    "gtx1650",
    "rx6600",
    "rtx3060",
    "rtx3060ti",
    "rtx3080",
    "rtx4070",
    "rx7900xtx",
    "rtx4090",
];

type CuratedRow = (&'static str, Resolution, [f64; 8]);

// Esports titles at competitive (low) settings
const CURATED_LOW: &[CuratedRow] = &[
    ("valorant", Fhd, [100.0, 197.0, 216.0, 247.0, 357.0, 340.0, 467.0, 483.0]),
    ("valorant", Qhd, [57.0, 113.0, 139.0, 171.0, 247.0, 234.0, 328.0, 383.0]),
    ("valorant", Uhd, [23.0, 48.0, 64.0, 79.0, 143.0, 130.0, 212.0, 259.0]),
    ("cs2", Fhd, [87.0, 169.0, 176.0, 207.0, 296.0, 306.0, 407.0, 425.0]),
    ("cs2", Qhd, [47.0, 97.0, 109.0, 129.0, 217.0, 205.0, 278.0, 293.0]),
    ("cs2", Uhd, [18.0, 40.0, 49.0, 66.0, 113.0, 105.0, 188.0, 208.0]),
    ("fortnite", Fhd, [58.0, 117.0, 119.0, 146.0, 221.0, 195.0, 268.0, 297.0]),
    ("fortnite", Qhd, [33.0, 66.0, 80.0, 99.0, 147.0, 131.0, 186.0, 210.0]),
    ("fortnite", Uhd, [13.0, 27.0, 34.0, 44.0, 84.0, 70.0, 124.0, 155.0]),
    ("apex", Fhd, [51.0, 92.0, 106.0, 136.0, 178.0, 180.0, 237.0, 254.0]),
    ("apex", Qhd, [29.0, 55.0, 63.0, 82.0, 126.0, 124.0, 178.0, 195.0]),
    ("apex", Uhd, [11.0, 25.0, 30.0, 39.0, 76.0, 66.0, 116.0, 125.0]),
    ("overwatch2", Fhd, [68.0, 136.0, 155.0, 184.0, 249.0, 261.0, 336.0, 337.0]),
    ("overwatch2", Qhd, [38.0, 82.0, 90.0, 117.0, 170.0, 174.0, 226.0, 276.0]),
    ("overwatch2", Uhd, [15.0, 33.0, 46.0, 56.0, 99.0, 90.0, 147.0, 173.0]),
];

// Everything else at ultra
const CURATED_ULTRA: &[CuratedRow] = &[
    ("cyberpunk", Fhd, [24.0, 44.0, 51.0, 63.0, 90.0, 86.0, 114.0, 121.0]),
    ("cyberpunk", Qhd, [13.0, 26.0, 33.0, 39.0, 62.0, 55.0, 79.0, 93.0]),
    ("cyberpunk", Uhd, [5.0, 13.0, 15.0, 19.0, 34.0, 30.0, 54.0, 65.0]),
    ("rdr2", Fhd, [24.0, 46.0, 47.0, 57.0, 83.0, 86.0, 104.0, 119.0]),
    ("rdr2", Qhd, [14.0, 25.0, 30.0, 40.0, 57.0, 55.0, 76.0, 89.0]),
    ("rdr2", Uhd, [5.0, 11.0, 15.0, 18.0, 34.0, 28.0, 48.0, 58.0]),
    ("warzone", Fhd, [31.0, 62.0, 63.0, 81.0, 111.0, 113.0, 138.0, 158.0]),
    ("warzone", Qhd, [16.0, 33.0, 40.0, 51.0, 77.0, 74.0, 100.0, 110.0]),
    ("warzone", Uhd, [7.0, 16.0, 19.0, 24.0, 43.0, 40.0, 65.0, 83.0]),
    ("eldenring", Fhd, [19.0, 35.0, 39.0, 49.0, 68.0, 67.0, 85.0, 88.0]),
    ("eldenring", Qhd, [10.0, 20.0, 23.0, 31.0, 46.0, 43.0, 60.0, 67.0]),
    ("eldenring", Uhd, [4.0, 9.0, 11.0, 14.0, 26.0, 22.0, 38.0, 45.0]),
    ("gta5", Fhd, [32.0, 62.0, 71.0, 88.0, 127.0, 116.0, 163.0, 170.0]),
    ("gta5", Qhd, [17.0, 38.0, 44.0, 51.0, 84.0, 81.0, 112.0, 126.0]),
    ("gta5", Uhd, [7.0, 16.0, 19.0, 27.0, 48.0, 41.0, 74.0, 84.0]),
];

fn curated_samples() -> Vec<CuratedSample> {
    let tables = [
        (QualityPreset::Low, CURATED_LOW),
        (QualityPreset::Ultra, CURATED_ULTRA),
    ];
    tables
        .into_iter()
        .flat_map(|(quality, rows)| {
            rows.iter().flat_map(move |&(game, resolution, fps)| {
                CURATED_GPUS
                    .iter()
                    .zip(fps)
                    .map(move |(gpu, fps)| CuratedSample {
                        quality,
                        resolution,
                        gpu: (*gpu).to_string(),
                        game: game.to_string(),
                        fps,
                    })
            })
        })
        .collect()
}

pub(super) fn catalog_data() -> CatalogData {
    CatalogData {
        cpus: CPUS
            .iter()
            .map(|&(id, name, brand, score, price, socket, memory_type)| Cpu {
                id: id.to_string(),
                name: name.to_string(),
                brand: brand.to_string(),
                score,
                price,
                socket: socket.to_string(),
                memory_type,
            })
            .collect(),
        gpus: GPUS
            .iter()
            .map(|&(id, name, vram, score_1080, score_1440, score_4k, price)| Gpu {
                id: id.to_string(),
                name: name.to_string(),
                vram,
                score_1080,
                score_1440,
                score_4k,
                price,
            })
            .collect(),
        games: GAMES
            .iter()
            .map(|row| GameProfile {
                id: row.id.to_string(),
                name: row.name.to_string(),
                category: row.category,
                typical_bound: row.bound,
                cpu_weight: Some(row.cpu),
                gpu_weight: Some(row.gpu),
                target_fps: row.target,
                vram_heaviness: Some(row.vram),
                streaming_heaviness: Some(row.streaming),
            })
            .collect(),
        monitors: MONITORS
            .iter()
            .map(|&(id, name, resolution, refresh, price, notes)| Monitor {
                id: id.to_string(),
                name: name.to_string(),
                resolution,
                refresh,
                price,
                notes: notes.map(str::to_string),
            })
            .collect(),
        ram_kits: RAM_KITS
            .iter()
            .map(|&(id, name, price, capacity, memory_type)| RamKit {
                id: id.to_string(),
                name: name.to_string(),
                price,
                capacity,
                memory_type,
            })
            .collect(),
        storage_kits: STORAGE_KITS
            .iter()
            .map(|&(id, name, price, storage_type)| StorageKit {
                id: id.to_string(),
                name: name.to_string(),
                price,
                storage_type,
            })
            .collect(),
        curated: curated_samples(),
        perf_overrides: Some(PerfOverrides {
            reference_gpu: PERF_REFERENCE_GPU.to_string(),
            multipliers: PERF_MULTIPLIERS
                .iter()
                .map(|&(gpu, multiplier)| PerfMultiplier {
                    gpu: gpu.to_string(),
                    multiplier,
                })
                .collect(),
        }),
    }
}
