//! Tests for budget enforcement
//!
//! Every pick in every category must fit under the selected bucket's ceiling.

use crate::analyze_builtin;
use crate::config::AnalysisBuilder;
use crate::model::{BudgetBucket, PartCategory, Resolution, StorageType};

const BUCKETS: [BudgetBucket; 9] = [
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

#[test]
fn test_no_pick_exceeds_budget() {
    for bucket in BUCKETS {
        for resolution in [Resolution::Fhd, Resolution::Uhd] {
            let input = AnalysisBuilder::new()
                .cpu("r5-3600")
                .gpu("gtx1650")
                .ram(8, "3200MHz")
                .storage(StorageType::Hdd)
                .resolution(resolution)
                .refresh(165)
                .games(["cyberpunk", "cs2", "fortnite"])
                .budget(bucket)
                .build();
            let result = analyze_builtin(&input).unwrap();
            let ceiling = bucket.ceiling();
            for pick in result.all_parts() {
                assert!(
                    pick.price <= ceiling,
                    "{} at ${} exceeds {}",
                    pick.id,
                    pick.price,
                    bucket.label()
                );
            }
            for option in &result.best_value.options {
                assert!(option.price <= ceiling);
            }
        }
    }
}

#[test]
fn test_result_groups_always_in_category_order() {
    let input = AnalysisBuilder::new()
        .cpu("i5-12400")
        .gpu("rtx3060")
        .games(["cyberpunk"])
        .budget(BudgetBucket::UpTo100)
        .build();
    let result = analyze_builtin(&input).unwrap();
    let categories: Vec<PartCategory> = result
        .recommended_parts
        .iter()
        .map(|group| group.category)
        .collect();
    assert_eq!(categories, PartCategory::ALL);
    assert!(result.warnings.iter().any(|w| w.starts_with("Under $100")));
}

#[test]
fn test_gpu_labels_assigned_once_per_bucket() {
    for bucket in BUCKETS {
        let input = AnalysisBuilder::new()
            .cpu("i7-13700k")
            .gpu("gtx1650")
            .ram(32, "DDR5-6000")
            .games(["cyberpunk", "warzone"])
            .budget(bucket)
            .build();
        let result = analyze_builtin(&input).unwrap();
        let gpus = result.parts(PartCategory::Gpu);
        assert!(gpus.len() <= 3);
        // Each label is handed out exactly once
        let labels: usize = gpus.iter().map(|p| p.labels.len()).sum();
        assert!(gpus.is_empty() || labels == 3);
    }
}
