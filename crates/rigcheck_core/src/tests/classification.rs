//! Tests for system-level bound classification
//!
//! A single mixed-weight AAA title at 1080p/60Hz keeps the refresh demand and
//! the heavy-title penalties out of the picture, so the headroom ratio is
//! exactly `cpu_index(cpu) / gpu_index(gpu)`.

use crate::Catalog;
use crate::config::{AnalysisBuilder, CatalogBuilder, GameBuilder};
use crate::index::{CPU_GAMMA, GPU_GAMMA};
use crate::model::{BoundType, GameCategory, Resolution};

fn catalog_for_ratio(ratio: f64) -> Catalog {
    // Pin one side at 100 and solve the other for the requested ratio
    let (cpu_score, gpu_score) = if ratio >= 1.0 {
        (100.0, 100.0 * (1.0 / ratio).powf(1.0 / GPU_GAMMA))
    } else {
        (100.0 * ratio.powf(1.0 / CPU_GAMMA), 100.0)
    };
    CatalogBuilder::new()
        .cpu("cpu", cpu_score, 300.0)
        .gpu("gpu", gpu_score, 500.0)
        .game_with(GameBuilder::new("epic", GameCategory::Aaa).weights(0.5, 0.5))
        .build()
        .unwrap()
}

fn analyze_ratio(ratio: f64) -> crate::model::AnalysisResult {
    let catalog = catalog_for_ratio(ratio);
    let input = AnalysisBuilder::new()
        .cpu("cpu")
        .gpu("gpu")
        .ram(32, "DDR5-6000")
        .resolution(Resolution::Fhd)
        .refresh(60)
        .game("epic")
        .build();
    crate::analyze(&catalog, &input).unwrap()
}

#[test]
fn test_ratio_above_band_is_gpu_bound() {
    let result = analyze_ratio(1.20);
    assert!((result.verdict.headroom_ratio - 1.2).abs() < 1e-9);
    assert_eq!(result.verdict.bound_type, BoundType::GpuBound);
    assert_eq!(result.verdict.games[0].bound_type, BoundType::GpuBound);
}

#[test]
fn test_ratio_below_band_is_cpu_bound() {
    let result = analyze_ratio(0.80);
    assert!((result.verdict.headroom_ratio - 0.8).abs() < 1e-9);
    assert_eq!(result.verdict.bound_type, BoundType::CpuBound);
}

#[test]
fn test_parity_is_mixed_with_floor_confidence() {
    let result = analyze_ratio(1.00);
    assert_eq!(result.verdict.bound_type, BoundType::Mixed);
    // Zero log distance plus full agreement
    assert_eq!(result.verdict.confidence, 0.63);
}

#[test]
fn test_confidence_stays_in_range() {
    for ratio in [0.2, 0.5, 0.9, 1.0, 1.1, 2.0, 5.0] {
        let confidence = analyze_ratio(ratio).verdict.confidence;
        assert!(
            (0.55..=0.95).contains(&confidence),
            "ratio {ratio} gave confidence {confidence}"
        );
    }
}
