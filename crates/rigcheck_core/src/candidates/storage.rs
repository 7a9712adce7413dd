use crate::model::{PartCategory, PartPick, StorageType};

use super::SearchContext;

const MAX_PICKS: usize = 2;

/// Only offered as a step up from a slower tier
#[must_use]
pub fn suggest_storage(ctx: &SearchContext<'_>) -> Vec<PartPick> {
    let current = ctx.input.storage_type;
    let upgrade = |target: StorageType| match current {
        StorageType::Hdd => true,
        StorageType::SataSsd => target == StorageType::Nvme,
        StorageType::Nvme => false,
    };

    ctx.catalog
        .storage_kits()
        .iter()
        .filter(|k| upgrade(k.storage_type))
        .filter(|k| ctx.within_budget(k.price))
        .take(MAX_PICKS)
        .map(|kit| {
            let bullets = if current == StorageType::Hdd {
                [
                    "Much faster load times in large games.",
                    "Less traversal hitching in streaming-heavy titles.",
                ]
            } else {
                [
                    "Slightly faster loads and installs.",
                    "Average FPS usually unchanged.",
                ]
            };
            PartPick {
                id: kit.id.clone(),
                category: PartCategory::Storage,
                name: kit.name.clone(),
                price: kit.price,
                avg_fps_gain_pct: None,
                labels: Vec::new(),
                confidence: None,
                qualitative_bullets: Vec::from(bullets.map(String::from)),
                compatibility_notes: Vec::new(),
            }
        })
        .collect()
}
