use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod error;
mod query;
mod record;
mod shell;
mod store;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "teacher-registry")]
#[command(about = "Menu-driven manager for teacher records kept in a JSON file", long_about = None)]
struct Cli {
    /// JSON file holding the teacher list (created on first save).
    #[arg(short = 'f', long, default_value = "teachers.json")]
    file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    // A corrupt store is fatal: there is nothing sensible to show or save.
    let mut store = store::Store::load(&cli.file)
        .with_context(|| format!("load teachers from {}", cli.file.display()))?;
    tracing::info!(
        path = %store.path().display(),
        count = store.records().len(),
        "store ready"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::Shell::new(stdin.lock(), stdout.lock()).run(&mut store)?;

    Ok(())
}
