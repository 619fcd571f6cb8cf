//! FramePrep — packages an eyeglass frames image folder for bulk upload.
//!
//! Thin binary entry point. All logic lives in the `frameprep-core` crate.

use anyhow::Context;
use frameprep_core::config::UploadConfig;
use frameprep_core::prepare::{self, RunOutcome};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging on stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FramePrep starting");

    let config = UploadConfig::default();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = prepare::run(&config, &mut out)
        .with_context(|| format!("failed to prepare {}", config.source_dir.display()))?;

    if let RunOutcome::Archived { archive_size, .. } = outcome {
        tracing::info!("Done: {} bytes written", archive_size);
    }

    Ok(())
}
