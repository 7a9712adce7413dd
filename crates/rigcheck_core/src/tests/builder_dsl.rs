//! Tests for the Builder DSL
//!
//! These tests demonstrate and verify the fluent builders for inputs and
//! synthetic catalogs.

use crate::config::{AnalysisBuilder, CatalogBuilder, GameBuilder};
use crate::model::{
    BudgetBucket, GameCategory, MemoryType, PartCategory, PickConfidence, PickLabel, Resolution,
    StorageType, TargetFps,
};
use crate::{Catalog, FpsEstimate, analyze};

/// Test AnalysisBuilder defaults
#[test]
fn test_analysis_builder_defaults() {
    let input = AnalysisBuilder::new().build();

    assert!(input.cpu_id.is_empty());
    assert!(input.gpu_id.is_empty());
    assert_eq!(input.ram_amount, 16);
    assert_eq!(input.ram_speed, "3200MHz");
    assert_eq!(input.storage_type, StorageType::Nvme);
    assert_eq!(input.resolution, Resolution::Fhd);
    assert_eq!(input.refresh_rate, 144);
    assert!(input.games.is_empty());
    assert_eq!(input.budget_bucket, BudgetBucket::UpTo700);
}

/// Test that game ids accumulate across `game` and `games`
#[test]
fn test_analysis_builder_games_accumulate() {
    let input = AnalysisBuilder::new()
        .game("cyberpunk")
        .games(["valorant", "cs2"])
        .game(String::from("rdr2"))
        .build();
    assert_eq!(input.games, ["cyberpunk", "valorant", "cs2", "rdr2"]);
}

/// Test a small catalog exercising every candidate category
#[test]
fn test_synthetic_catalog_end_to_end() {
    let catalog = CatalogBuilder::new()
        .cpu("cpu", 80.0, 300.0)
        .gpu("slow-gpu", 50.0, 200.0)
        .gpu("fast-gpu", 85.0, 500.0)
        .gpu("halo-gpu", 99.0, 1600.0)
        .game_with(
            GameBuilder::new("arena", GameCategory::Esports)
                .name("Arena Shooter")
                .target_fps(TargetFps::High),
        )
        .sample("slow-gpu", "arena", Resolution::Fhd, 180.0)
        .sample("fast-gpu", "arena", Resolution::Fhd, 320.0)
        .monitor("fhd-60", Resolution::Fhd, 60, 90.0)
        .monitor("fhd-144", Resolution::Fhd, 144, 150.0)
        .monitor("fhd-144-cheap", Resolution::Fhd, 144, 120.0)
        .monitor("fhd-240", Resolution::Fhd, 240, 250.0)
        .monitor("qhd-165", Resolution::Qhd, 165, 300.0)
        .ram_kit("ddr4-16", 16, MemoryType::Ddr4, 40.0)
        .ram_kit("ddr5-16", 16, MemoryType::Ddr5, 55.0)
        .ram_kit("ddr5-32", 32, MemoryType::Ddr5, 100.0)
        .ram_kit("ddr5-64", 64, MemoryType::Ddr5, 200.0)
        .storage_kit("sata", StorageType::SataSsd, 50.0)
        .storage_kit("nvme", StorageType::Nvme, 70.0)
        .build()
        .unwrap();

    let input = AnalysisBuilder::new()
        .cpu("cpu")
        .gpu("slow-gpu")
        .ram(8, "DDR5-5600")
        .storage(StorageType::SataSsd)
        .resolution(Resolution::Fhd)
        .refresh(144)
        .game("arena")
        .budget(BudgetBucket::UpTo700)
        .build();

    let result = analyze(&catalog, &input).unwrap();
    assert_eq!(result.verdict.games[0].name, "Arena Shooter");

    let gpus = result.parts(PartCategory::Gpu);
    assert_eq!(gpus.len(), 1);
    assert_eq!(gpus[0].id, "fast-gpu");
    assert_eq!(gpus[0].labels.len(), 3);
    assert_eq!(gpus[0].confidence, Some(PickConfidence::Confirmed));

    let ram: Vec<&str> = result
        .parts(PartCategory::Ram)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(ram, ["ddr5-16", "ddr5-32"]);

    let storage: Vec<&str> = result
        .parts(PartCategory::Storage)
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(storage, ["nvme"]);

    let monitors = result.parts(PartCategory::Monitor);
    assert!(!monitors.is_empty() && monitors.len() <= 3);
    assert!(monitors.iter().all(|m| m.id.starts_with("fhd-")));
    assert!(monitors.iter().all(|m| m.qualitative_bullets.len() <= 3));
}

/// Test that samples added through the builder are treated as measurements
#[test]
fn test_builder_samples_are_measured() {
    let catalog = CatalogBuilder::new()
        .cpu("cpu", 80.0, 300.0)
        .gpu("gpu", 60.0, 300.0)
        .gpu("unsampled", 60.0, 300.0)
        .game("epic", GameCategory::Aaa)
        .sample("gpu", "epic", Resolution::Qhd, 72.0)
        .build()
        .unwrap();
    let game = catalog.game("epic").unwrap();

    let measured = crate::fps::estimate_fps(
        &catalog,
        catalog.gpu("gpu").unwrap(),
        game,
        Resolution::Qhd,
        None,
    );
    assert_eq!(measured, FpsEstimate::Measured(72.0));

    // Same perf index as the sampled card, so interpolation is exact
    let interpolated = crate::fps::estimate_fps(
        &catalog,
        catalog.gpu("unsampled").unwrap(),
        game,
        Resolution::Qhd,
        None,
    );
    assert!(matches!(interpolated, FpsEstimate::Interpolated(fps) if (fps - 72.0).abs() < 1e-9));

    // No anchors at 1080p
    let modeled = crate::fps::estimate_fps(
        &catalog,
        catalog.gpu("gpu").unwrap(),
        game,
        Resolution::Fhd,
        None,
    );
    assert!(modeled.is_modeled());
}

/// Test extending the built-in catalog
#[test]
fn test_builder_extends_builtin_data() {
    let catalog = CatalogBuilder::from_data(Catalog::builtin().data().clone())
        .gpu("prototype-gpu", 100.0, 650.0)
        .build()
        .unwrap();
    assert_eq!(catalog.gpus().len(), Catalog::builtin().gpus().len() + 1);

    let input = AnalysisBuilder::new()
        .cpu("i7-13700k")
        .gpu("rtx3060")
        .ram(32, "DDR5-6000")
        .resolution(Resolution::Qhd)
        .refresh(60)
        .games(["cyberpunk", "rdr2"])
        .budget(BudgetBucket::UpTo700)
        .build();
    let result = analyze(&catalog, &input).unwrap();

    // The new card is the strongest affordable option
    let gpus = result.parts(PartCategory::Gpu);
    let fastest = gpus
        .iter()
        .find(|p| p.has_label(crate::model::PickLabel::BestPerformance))
        .unwrap();
    assert_eq!(fastest.id, "prototype-gpu");
}

/// Test that equal GPU scores resolve to the card listed first in the catalog
#[test]
fn test_gpu_label_ties_follow_catalog_order() {
    // "wide" and "narrow" share price and measured fps, so their gains and
    // value scores are identical even though "narrow" has the lower index
    let catalog = CatalogBuilder::new()
        .cpu("cpu", 100.0, 500.0)
        .gpu("current", 30.0, 150.0)
        .gpu("wide", 70.0, 500.0)
        .gpu("narrow", 60.0, 500.0)
        .gpu("flagship", 90.0, 1100.0)
        .game("epic", GameCategory::Aaa)
        .sample("current", "epic", Resolution::Fhd, 50.0)
        .sample("wide", "epic", Resolution::Fhd, 100.0)
        .sample("narrow", "epic", Resolution::Fhd, 100.0)
        .build()
        .unwrap();

    let input = AnalysisBuilder::new()
        .cpu("cpu")
        .gpu("current")
        .ram(32, "DDR5-6000")
        .resolution(Resolution::Fhd)
        .refresh(60)
        .game("epic")
        .budget(BudgetBucket::UpTo1200)
        .build();
    let result = analyze(&catalog, &input).unwrap();

    let gpus = result.parts(PartCategory::Gpu);
    let gain = |id: &str| {
        gpus.iter()
            .find(|p| p.id == id)
            .and_then(|p| p.avg_fps_gain_pct)
            .unwrap()
    };
    assert_eq!(gain("wide"), gain("narrow"));

    let labeled = |label: PickLabel| {
        gpus.iter()
            .find(|p| p.has_label(label))
            .map(|p| p.id.as_str())
            .unwrap()
    };
    assert_eq!(labeled(PickLabel::BestPerformance), "flagship");
    assert_eq!(labeled(PickLabel::BestValue), "wide");
    assert_eq!(labeled(PickLabel::Balanced), "narrow");
}
