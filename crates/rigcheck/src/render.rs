//! Output rendering for analysis results and catalog listings

use std::fmt::Write;

use clap::ValueEnum;
use rigcheck_core::Catalog;
use rigcheck_core::model::{AnalysisResult, PartPick, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Cpus,
    Gpus,
    Games,
    Monitors,
}

pub fn render_result(result: &AnalysisResult, format: OutputFormat) -> color_eyre::Result<String> {
    Ok(match format {
        OutputFormat::Text => render_text(result),
        OutputFormat::Yaml => serde_saphyr::to_string(result)?,
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
    })
}

/// Format a price without cents
fn format_price(value: f64) -> String {
    format!("${}", value.round() as i64)
}

fn render_pick(out: &mut String, pick: &PartPick) {
    let mut line = format!("  - {} ({})", pick.name, format_price(pick.price));
    if let Some(gain) = pick.avg_fps_gain_pct {
        let _ = write!(line, ", ~+{gain}% avg FPS");
    }
    if !pick.labels.is_empty() {
        let labels: Vec<&str> = pick.labels.iter().map(|l| l.label()).collect();
        let _ = write!(line, " [{}]", labels.join(", "));
    }
    let _ = writeln!(out, "{line}");
    for bullet in &pick.qualitative_bullets {
        let _ = writeln!(out, "      {bullet}");
    }
    for note in &pick.compatibility_notes {
        let _ = writeln!(out, "      note: {note}");
    }
}

/// Human-readable report
#[must_use]
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();
    let verdict = &result.verdict;

    let _ = writeln!(
        out,
        "Verdict: {} (confidence {:.0}%, headroom ratio {:.2})",
        verdict.bound_type.label(),
        verdict.confidence * 100.0,
        verdict.headroom_ratio
    );
    for reason in &verdict.reasons {
        let _ = writeln!(out, "  - {reason}");
    }

    let _ = writeln!(out, "\nPer game:");
    for game in &verdict.games {
        let _ = writeln!(
            out,
            "  {:<32} {:<24} {:>6.2}",
            game.name,
            game.bound_type.label(),
            game.headroom_ratio
        );
    }

    let best = &result.best_value;
    let _ = writeln!(out, "\nBest value: {}", best.title);
    let _ = writeln!(out, "  {}", best.impact_summary);
    for reason in &best.reasons {
        let _ = writeln!(out, "  - {reason}");
    }
    for option in &best.options {
        let _ = writeln!(
            out,
            "  * {}: {} ({}) {}",
            option.label,
            option.name,
            format_price(option.price),
            option.impact_summary
        );
    }

    if !result.upgrade_path.is_empty() {
        let _ = writeln!(out, "\nUpgrade path:");
        for (i, step) in result.upgrade_path.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}: {}", i + 1, step.category, step.impact_summary);
            for reason in &step.reasons {
                let _ = writeln!(out, "     {reason}");
            }
        }
    }

    for group in result.recommended_parts.iter().filter(|g| !g.items.is_empty()) {
        let _ = writeln!(out, "\n{} picks:", group.category);
        for pick in &group.items {
            render_pick(&mut out, pick);
        }
    }

    if !result.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings:");
        for warning in &result.warnings {
            let _ = writeln!(out, "  ! {warning}");
        }
    }

    out
}

/// One line per catalog entry of the requested kind
#[must_use]
pub fn render_list(catalog: &Catalog, kind: ListKind) -> String {
    let mut out = String::new();
    match kind {
        ListKind::Cpus => {
            for cpu in catalog.cpus() {
                let _ = writeln!(
                    out,
                    "{:<14} {:<32} score {:>5.1}  {:<8} {}  {}",
                    cpu.id,
                    cpu.name,
                    cpu.score,
                    cpu.socket,
                    cpu.memory_type,
                    format_price(cpu.price)
                );
            }
        }
        ListKind::Gpus => {
            for gpu in catalog.gpus() {
                let _ = writeln!(
                    out,
                    "{:<14} {:<32} {:>2}GB  {:>5.1}/{:>5.1}/{:>5.1}  {}",
                    gpu.id,
                    gpu.name,
                    gpu.vram,
                    gpu.score(Resolution::Fhd),
                    gpu.score(Resolution::Qhd),
                    gpu.score(Resolution::Uhd),
                    format_price(gpu.price)
                );
            }
        }
        ListKind::Games => {
            for game in catalog.games() {
                let _ = writeln!(out, "{:<14} {:<32} {:?}", game.id, game.name, game.category);
            }
        }
        ListKind::Monitors => {
            for monitor in catalog.monitors() {
                let _ = writeln!(
                    out,
                    "{:<14} {:<32} {:<6} {:>3}Hz  {}",
                    monitor.id,
                    monitor.name,
                    monitor.resolution.label(),
                    monitor.refresh,
                    format_price(monitor.price)
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigcheck_core::AnalysisBuilder;
    use rigcheck_core::model::BudgetBucket;

    fn sample_result() -> AnalysisResult {
        let input = AnalysisBuilder::new()
            .cpu("i5-12400")
            .gpu("rtx3060")
            .ram(16, "3200MHz")
            .refresh(144)
            .games(["cyberpunk", "valorant"])
            .budget(BudgetBucket::UpTo700)
            .build();
        rigcheck_core::analyze_builtin(&input).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let text = render_text(&sample_result());
        assert!(text.starts_with("Verdict: "));
        assert!(text.contains("Per game:"));
        assert!(text.contains("Cyberpunk 2077"));
        assert!(text.contains("Best value: "));
    }

    #[test]
    fn test_json_output_parses_back() {
        let result = sample_result();
        let json = render_result(&result, OutputFormat::Json).unwrap();
        let parsed: AnalysisResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.verdict.bound_type, result.verdict.bound_type);
        assert_eq!(parsed.recommended_parts.len(), 5);
    }

    #[test]
    fn test_yaml_output_mentions_verdict() {
        let yaml = render_result(&sample_result(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("verdict:"));
        assert!(yaml.contains("bound_type:"));
    }

    #[test]
    fn test_list_has_one_line_per_entry() {
        let catalog = Catalog::builtin();
        assert_eq!(
            render_list(catalog, ListKind::Gpus).lines().count(),
            catalog.gpus().len()
        );
        assert_eq!(
            render_list(catalog, ListKind::Games).lines().count(),
            catalog.games().len()
        );
        assert!(render_list(catalog, ListKind::Cpus).contains("i5-12400"));
    }
}
