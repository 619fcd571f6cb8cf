/// The run driver: validate → analyse/report → archive/report.
///
/// One linear pass with a single early exit when the source folder is
/// missing. That case is reported on the console and is not an error;
/// every other failure propagates to the caller.
use crate::archive::create_zip_archive;
use crate::config::UploadConfig;
use crate::error::Result;
use crate::model::FolderStructure;
use crate::report;
use crate::scanner::analyze_structure;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The source folder does not exist; nothing was analysed or written.
    SourceMissing,
    /// Analysis printed and archive written.
    Archived {
        structure: FolderStructure,
        archive_path: PathBuf,
        archive_size: u64,
    },
}

/// Run the full analyse-and-package flow, writing the report to `out`.
pub fn run(config: &UploadConfig, out: &mut impl Write) -> Result<RunOutcome> {
    if !config.source_dir.exists() {
        info!("Source folder {} is missing", config.source_dir.display());
        report::write_folder_not_found(out, &config.source_dir)?;
        return Ok(RunOutcome::SourceMissing);
    }

    report::write_analysis_header(out)?;
    let structure = analyze_structure(&config.source_dir)?;
    report::write_analysis(out, &structure)?;
    report::write_capabilities(out)?;

    report::write_archive_start(out)?;
    // Flush so the progress line is visible while the archive is written.
    out.flush()?;
    let archive_size = create_zip_archive(&config.source_dir, &config.output_zip)?;
    report::write_archive_created(out, &config.output_zip, archive_size)?;
    report::write_next_steps(out)?;
    out.flush()?;

    Ok(RunOutcome::Archived {
        structure,
        archive_path: config.output_zip.clone(),
        archive_size,
    })
}
