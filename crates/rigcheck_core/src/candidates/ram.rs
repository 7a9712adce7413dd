use crate::model::{AnalysisInput, Cpu, MemoryType, PartCategory, PartPick};

use super::SearchContext;

const MAX_PICKS: usize = 2;

/// Memory generation of the installed RAM; the speed string wins over the CPU
#[must_use]
pub fn resolve_memory_type(input: &AnalysisInput, cpu: &Cpu) -> MemoryType {
    MemoryType::from_speed(&input.ram_speed).unwrap_or(cpu.memory_type)
}

/// Next meaningful capacity tier, or `None` once at 32 GB
#[must_use]
pub fn ram_target_capacity(installed_gb: u32) -> Option<u32> {
    match installed_gb {
        0..16 => Some(16),
        16..32 => Some(32),
        _ => None,
    }
}

#[must_use]
pub fn suggest_ram(ctx: &SearchContext<'_>) -> Vec<PartPick> {
    let installed = ctx.input.ram_amount;
    let Some(target) = ram_target_capacity(installed) else {
        return Vec::new();
    };
    let memory_type = resolve_memory_type(ctx.input, ctx.cpu);

    ctx.catalog
        .ram_kits()
        .iter()
        .filter(|k| k.capacity >= target && k.memory_type == memory_type)
        .filter(|k| ctx.within_budget(k.price))
        .take(MAX_PICKS)
        .map(|kit| {
            let mut bullets = Vec::new();
            if installed < 16 && kit.capacity >= 16 {
                bullets.push("Reaches the 16GB baseline for modern titles.".to_string());
            }
            if installed < 32 && kit.capacity >= 32 {
                bullets.push(
                    "More headroom for large open-world games and multitasking.".to_string(),
                );
            }
            if bullets.is_empty() {
                bullets.push(
                    "Small average FPS change; improves stability in heavy scenes.".to_string(),
                );
            }
            bullets.truncate(2);

            let mut notes = Vec::new();
            if kit.memory_type != ctx.cpu.memory_type {
                notes.push(format!(
                    "{} supports {}; check your motherboard before buying {} memory.",
                    ctx.cpu.name, ctx.cpu.memory_type, kit.memory_type
                ));
            }

            PartPick {
                id: kit.id.clone(),
                category: PartCategory::Ram,
                name: kit.name.clone(),
                price: kit.price,
                avg_fps_gain_pct: None,
                labels: Vec::new(),
                confidence: None,
                qualitative_bullets: bullets,
                compatibility_notes: notes,
            }
        })
        .collect()
}
