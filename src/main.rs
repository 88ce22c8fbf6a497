mod config;
mod copier;
mod error;
mod locate;
mod mode;

use clap::Parser;
use config::Layout;
use error::CopyError;
use log::{error, info};
use mode::BuildMode;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding the build output layout
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the resolved paths without copying
    #[arg(long)]
    dry_run: bool,

    /// Pass `r` to copy the Release build instead of Debug
    args: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
struct CopyPlan {
    mode: BuildMode,
    source: PathBuf,
    destination: PathBuf,
}

/// Resolves the artifact for the project whose directory is `dir`.
fn plan_copy(layout: &Layout, mode: BuildMode, dir: &Path) -> Result<CopyPlan, CopyError> {
    let digit = locate::project_digit(dir, &layout.marker)?;
    // Relative build roots are taken from the working directory.
    let source = dir.join(locate::artifact_path(layout, mode, digit));
    let destination = locate::destination_path(dir, &source)?;
    Ok(CopyPlan {
        mode,
        source,
        destination,
    })
}

fn run(cli: &Cli, dir: &Path) -> Result<(), CopyError> {
    let mode = BuildMode::from_args(cli.args.as_slice());
    println!("copy {}", mode);

    let layout = config::load_layout(cli.config.as_deref())?;
    info!("Using layout: {:?}", layout);

    let plan = plan_copy(&layout, mode, dir)?;
    info!("Resolved {} build at {}", plan.mode, plan.source.display());
    if cli.dry_run {
        println!(
            "{} -> {}",
            plan.source.display(),
            plan.destination.display()
        );
        return Ok(());
    }

    let bytes = copier::copy_artifact(&plan.source, &plan.destination)?;
    info!("Copied {} bytes", bytes);
    println!(
        "{} -> {}",
        plan.source.display(),
        plan.destination.display()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(CopyError::from)
        .and_then(|dir| run(&cli, &dir));
    if let Err(e) = result {
        error!("Copy failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
