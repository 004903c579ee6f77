//! The `create-test-file` command.

use clap::Args;
use color_eyre::eyre::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use rtgen_core::discovery::{collect_sources, find_workspace_root};
use rtgen_core::{Config, LocalFileSystem, Outcome, SourceLocation, TestGenerator};

use crate::host::TerminalHost;

#[derive(Args)]
pub struct CreateArgs {
    /// Component file, or a directory to generate tests for every component in it
    pub path: PathBuf,

    /// Workspace root (defaults to the nearest directory holding a configured root marker)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Overwrite existing test files without asking
    #[arg(short, long)]
    pub force: bool,

    /// Print the generated test instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Print outcomes as JSON
    #[arg(long)]
    pub json: bool,

    /// Open the created test file with the system default application
    #[arg(long)]
    pub open: bool,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    let path = std::path::absolute(&args.path)?;
    let root = match &args.root {
        Some(root) => std::path::absolute(root)?,
        None => {
            let markers = Config::load_user()?.paths.workspace_markers();
            find_workspace_root(&path, markers.as_slice())?
        }
    };
    let config = Config::load_from(&root)?;

    let sources = if path.is_dir() {
        collect_sources(&path, &root, &config)?
    } else {
        vec![path]
    };
    if sources.is_empty() {
        println!("No component files found under {}", args.path.display());
        return Ok(());
    }

    let generator = TestGenerator::with_config(LocalFileSystem, &config);

    if args.dry_run {
        return print_plans(&generator, &root, &sources).await;
    }

    let progress = (sources.len() > 1 && !args.json).then(|| progress_bar(sources.len() as u64));
    let mut host = TerminalHost::new(args.force, args.json);
    if let Some(pb) = &progress {
        host = host.with_progress(pb.clone());
    }

    let mut outcomes = Vec::new();
    let mut failures = 0usize;
    for source in &sources {
        let location = SourceLocation::new(&root, source);
        match generator.generate(&location, &host).await {
            Ok(outcome) => outcomes.push(outcome),
            // Already reported through the host.
            Err(_) => failures += 1,
        }
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    }

    if args.open {
        for outcome in &outcomes {
            if let Outcome::Created(test) = outcome {
                open_file(&test.test_path);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} test files could not be created", failures, sources.len());
    }
    Ok(())
}

async fn print_plans(
    generator: &TestGenerator<LocalFileSystem>,
    root: &Path,
    sources: &[PathBuf],
) -> Result<()> {
    for source in sources {
        let planned = generator.plan(&SourceLocation::new(root, source)).await?;
        println!("// {}", planned.test_path.display());
        println!("{}", planned.content);
    }
    Ok(())
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {msg}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

fn open_file(path: &Path) {
    if let Err(e) = open::that(path) {
        eprintln!("Could not open {}: {}", path.display(), e);
    }
}
