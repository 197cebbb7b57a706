//! dirtocgen: generate and refresh README.md tables of contents across a directory tree.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::Parser;
use dirtocgen::{config, usecase};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "dirtocgen")]
#[command(about = "Keep a generated table of contents in every README.md", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Root directory
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Maximum depth of the table of contents in the root directory
    #[arg(long, value_name = "N")]
    root_toc_max_depth: Option<usize>,

    /// Maximum depth of the table of contents in each other directory
    #[arg(long, value_name = "N")]
    toc_max_depth: Option<usize>,

    /// List hidden files and directories in the tables of contents
    #[arg(long, overrides_with = "exclude_hidden")]
    include_hidden: bool,

    /// Leave hidden files and directories out, even if the settings file lists them
    #[arg(long, overrides_with = "include_hidden")]
    exclude_hidden: bool,

    /// Settings file (defaults to ./dirtocgen.toml when present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report what would change without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Log every title fallback
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "dirtocgen=debug"
    } else {
        "dirtocgen=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cfg = config::Config::load(args.config.as_deref())?;

    // Override config with command line args
    let settings = usecase::Settings {
        root_toc_max_depth: args.root_toc_max_depth.or(cfg.root_toc_max_depth),
        toc_max_depth: args.toc_max_depth.or(cfg.toc_max_depth),
        include_hidden: include_hidden(&args, &cfg),
        dry_run: args.dry_run,
    };

    let report = usecase::run(&args.path, &settings)
        .with_context(|| format!("failed to update {}", args.path.display()))?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else if settings.dry_run {
        for action in &report.actions {
            println!("{:?} {}", action.kind, action.path.display());
        }
    }

    Ok(())
}

/// Either hidden flag beats the settings file; clap keeps only the last one given.
fn include_hidden(args: &Args, cfg: &config::Config) -> bool {
    match (args.include_hidden, args.exclude_hidden) {
        (true, _) => true,
        (_, true) => false,
        _ => cfg.include_hidden,
    }
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod tests;
