//! Tests for fallbacks and rejected inputs
//!
//! These tests verify:
//! - Unknown CPU/GPU ids fall back to the catalog defaults with a warning
//! - Unknown game ids are skipped, and an empty selection is an error
//! - Invalid catalogs are rejected before any analysis runs

use crate::config::{AnalysisBuilder, CatalogBuilder};
use crate::error::{AnalysisError, CatalogError, CatalogSection};
use crate::model::{GameCategory, PartCategory};
use crate::{Catalog, analyze, analyze_builtin};

#[test]
fn test_unknown_cpu_and_gpu_fall_back_with_warnings() {
    let input = AnalysisBuilder::new()
        .cpu("not-a-cpu")
        .gpu("not-a-gpu")
        .games(["cyberpunk"])
        .build();
    let result = analyze_builtin(&input).unwrap();

    assert_eq!(
        result.warnings[..2],
        [
            "Selected CPU not found; used nearest default.".to_string(),
            "Selected GPU not found; used nearest default.".to_string(),
        ]
    );

    // Same outcome as naming the defaults explicitly, minus the warnings
    let catalog = Catalog::builtin();
    let explicit = AnalysisBuilder::new()
        .cpu(&catalog.default_cpu().id)
        .gpu(&catalog.default_gpu().id)
        .games(["cyberpunk"])
        .build();
    let expected = analyze_builtin(&explicit).unwrap();
    assert_eq!(result.verdict, expected.verdict);
    assert_eq!(result.warnings[2..], expected.warnings[..]);
}

#[test]
fn test_unknown_games_are_skipped() {
    let input = AnalysisBuilder::new()
        .cpu("i5-12400")
        .gpu("rtx3060")
        .games(["cyberpunk", "pong", "valorant"])
        .build();
    let result = analyze_builtin(&input).unwrap();
    let ids: Vec<&str> = result.verdict.games.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["cyberpunk", "valorant"]);
}

#[test]
fn test_no_known_games_is_an_error() {
    let input = AnalysisBuilder::new()
        .cpu("i5-12400")
        .gpu("rtx3060")
        .games(["pong", "tetris"])
        .build();
    let err = analyze_builtin(&input).unwrap_err();
    assert_eq!(
        err,
        AnalysisError::NoKnownGames {
            requested: vec!["pong".into(), "tetris".into()]
        }
    );
    assert!(err.to_string().contains("pong, tetris"));

    let empty = AnalysisBuilder::new().build();
    assert_eq!(
        analyze_builtin(&empty).unwrap_err().to_string(),
        "select at least one game"
    );
}

#[test]
fn test_invalid_catalogs_are_rejected() {
    let no_gpus = CatalogBuilder::new()
        .cpu("cpu", 70.0, 200.0)
        .game("epic", GameCategory::Aaa)
        .build();
    assert_eq!(no_gpus.unwrap_err(), CatalogError::Empty(CatalogSection::Gpus));

    let duplicate = CatalogBuilder::new()
        .cpu("cpu", 70.0, 200.0)
        .cpu("cpu", 80.0, 300.0)
        .gpu("gpu", 70.0, 400.0)
        .game("epic", GameCategory::Aaa)
        .build();
    assert_eq!(
        duplicate.unwrap_err(),
        CatalogError::DuplicateId {
            section: CatalogSection::Cpus,
            id: "cpu".into()
        }
    );

    let out_of_range = CatalogBuilder::new()
        .cpu("cpu", 70.0, 200.0)
        .gpu("gpu", 120.0, 400.0)
        .game("epic", GameCategory::Aaa)
        .build();
    assert!(matches!(
        out_of_range.unwrap_err(),
        CatalogError::OutOfRange {
            section: CatalogSection::Gpus,
            ..
        }
    ));
}

#[test]
fn test_minimal_catalog_analyzes_without_optional_sections() {
    let catalog = CatalogBuilder::new()
        .cpu("cpu", 70.0, 200.0)
        .gpu("gpu", 70.0, 400.0)
        .game("epic", GameCategory::Aaa)
        .build()
        .unwrap();
    let input = AnalysisBuilder::new()
        .cpu("cpu")
        .gpu("gpu")
        .refresh(60)
        .game("epic")
        .build();
    let result = analyze(&catalog, &input).unwrap();

    for category in PartCategory::ALL {
        assert!(result.parts(category).is_empty());
    }
    // The only estimate is the formula model
    assert!(
        result
            .verdict
            .reasons
            .iter()
            .any(|r| r.contains("no direct benchmarks"))
    );
}
