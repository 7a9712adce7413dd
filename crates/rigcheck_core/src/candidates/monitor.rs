use crate::model::{PartCategory, PartPick};

use super::SearchContext;

const MAX_PICKS: usize = 3;

/// Highest refresh class the estimated fps can sustain
#[must_use]
pub fn monitor_refresh_ceiling(fps: f64) -> u32 {
    match fps {
        f if f >= 320.0 => 360,
        f if f >= 240.0 => 240,
        f if f >= 180.0 => 165,
        f if f >= 135.0 => 144,
        f if f >= 110.0 => 120,
        _ => 60,
    }
}

/// Monitors at the requested resolution whose refresh the build can feed
#[must_use]
pub fn suggest_monitors(ctx: &SearchContext<'_>) -> Vec<PartPick> {
    let esports: Vec<f64> = ctx
        .baseline
        .per_game
        .iter()
        .filter(|g| g.game.is_esports())
        .map(|g| g.effective_fps)
        .collect();
    let target_fps = if esports.is_empty() {
        ctx.baseline.effective_fps_avg
    } else {
        esports.iter().sum::<f64>() / esports.len() as f64
    };
    let max_refresh = monitor_refresh_ceiling(target_fps);

    let mut candidates: Vec<_> = ctx
        .catalog
        .monitors()
        .iter()
        .filter(|m| m.resolution == ctx.input.resolution && m.refresh <= max_refresh)
        .filter(|m| ctx.within_budget(m.price))
        .collect();
    candidates.sort_by(|a, b| {
        b.refresh
            .cmp(&a.refresh)
            .then(a.price.total_cmp(&b.price))
    });

    candidates
        .into_iter()
        .take(MAX_PICKS)
        .map(|monitor| {
            let mut bullets = vec![
                format!("Refresh target up to {max_refresh}Hz based on estimated FPS."),
                if esports.is_empty() {
                    "Balanced for your selected titles.".to_string()
                } else {
                    "Geared for esports pacing.".to_string()
                },
            ];
            if let Some(notes) = &monitor.notes {
                bullets.push(notes.clone());
            }
            PartPick {
                id: monitor.id.clone(),
                category: PartCategory::Monitor,
                name: monitor.name.clone(),
                price: monitor.price,
                avg_fps_gain_pct: None,
                labels: Vec::new(),
                confidence: None,
                qualitative_bullets: bullets,
                compatibility_notes: Vec::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_ceiling_steps() {
        assert_eq!(monitor_refresh_ceiling(400.0), 360);
        assert_eq!(monitor_refresh_ceiling(320.0), 360);
        assert_eq!(monitor_refresh_ceiling(250.0), 240);
        assert_eq!(monitor_refresh_ceiling(180.0), 165);
        assert_eq!(monitor_refresh_ceiling(140.0), 144);
        assert_eq!(monitor_refresh_ceiling(110.0), 120);
        assert_eq!(monitor_refresh_ceiling(90.0), 60);
        assert_eq!(monitor_refresh_ceiling(0.0), 60);
    }
}
