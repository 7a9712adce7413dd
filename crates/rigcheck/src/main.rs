use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use rigcheck::{
    ListKind, OutputFormat, init_logging, load_input, render_list, render_result, resolve_catalog,
};

#[derive(Parser, Debug)]
#[command(name = "rigcheck")]
#[command(about = "Find the bottleneck in a gaming PC and the upgrade worth buying")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the build described in a YAML input file
    Analyze {
        input: PathBuf,

        /// Catalog file replacing the built-in catalog
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List catalog entries
    List {
        #[arg(value_enum)]
        kind: ListKind,

        /// Catalog file replacing the built-in catalog
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    let output = match args.command {
        Command::Analyze {
            input,
            catalog,
            format,
        } => {
            let catalog = resolve_catalog(catalog.as_deref())
                .wrap_err("failed to load catalog")?;
            let request = load_input(&input)
                .wrap_err_with(|| format!("failed to load input {}", input.display()))?;
            let result = rigcheck_core::analyze(&catalog, &request).map_err(|err| {
                tracing::error!(%err, "analysis failed");
                err
            })?;
            tracing::info!(
                verdict = ?result.verdict.bound_type,
                warnings = result.warnings.len(),
                "analysis finished"
            );
            render_result(&result, format)?
        }
        Command::List { kind, catalog } => {
            let catalog = resolve_catalog(catalog.as_deref())
                .wrap_err("failed to load catalog")?;
            render_list(&catalog, kind)
        }
    };

    std::io::stdout().write_all(output.as_bytes())?;
    Ok(())
}
