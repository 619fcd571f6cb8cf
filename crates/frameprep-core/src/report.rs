/// Console report blocks.
///
/// Every block writes to a caller-supplied `Write` so the driver can target
/// stdout while tests capture into a `Vec<u8>`. The capability, next-step,
/// and recommendation blocks are fixed text, not derived from the analysis.
use crate::model::size::format_mib;
use crate::model::FolderStructure;
use std::io::{self, Write};
use std::path::Path;

const RULE_WIDTH: usize = 60;

const CAPABILITIES: [&str; 5] = [
    "Branded frames (Brand → Shape → Color)",
    "Non-branded frames (Shape → Color)",
    "Contact lenses (Numbered images)",
    "Solutions (Numbered images)",
    "Sunglasses (Branded & Non-branded)",
];

const NEXT_STEPS: [&str; 4] = [
    "Upload the ZIP file using the Intelligent Bulk Upload feature",
    "The AI will automatically categorize all products",
    "Set default prices and stock quantities",
    "Review and approve the created products",
];

const RECOMMENDATIONS: [&str; 4] = [
    "Set a default price (e.g., ₱500-2000 for frames)",
    "Set default stock (e.g., 10-50 units)",
    "Review product names and descriptions after upload",
    "Update prices based on brand and quality",
];

pub fn write_folder_not_found(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "❌ Folder not found: {}", path.display())
}

pub fn write_analysis_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "🔍 Analyzing your eyeglass frames folder...")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

/// Totals followed by the per-directory breakdown.
///
/// Directories with neither images nor subdirectories are left out of the
/// breakdown; their counts are still part of the totals.
pub fn write_analysis(out: &mut impl Write, structure: &FolderStructure) -> io::Result<()> {
    writeln!(out, "📊 Analysis Results:")?;
    writeln!(out, "   Total image files: {}", structure.total_image_files)?;
    writeln!(out, "   Total directories: {}", structure.total_directories)?;
    writeln!(out)?;

    writeln!(out, "📁 Folder Structure:")?;
    for record in structure.non_empty() {
        writeln!(out, "   {}/", record.rel_path)?;
        if record.files() > 0 {
            writeln!(out, "     📸 {} image files", record.files())?;
        }
        if record.directories > 0 {
            writeln!(out, "     📁 {} subdirectories", record.directories)?;
        }
    }
    Ok(())
}

pub fn write_capabilities(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🎯 Intelligent Upload Capabilities:")?;
    for capability in CAPABILITIES {
        writeln!(out, "   ✅ {capability}")?;
    }
    Ok(())
}

pub fn write_archive_start(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📦 Creating ZIP archive for upload...")
}

pub fn write_archive_created(out: &mut impl Write, archive: &Path, size: u64) -> io::Result<()> {
    writeln!(out, "✅ ZIP file created: {}", archive.display())?;
    writeln!(out, "   Size: {}", format_mib(size))
}

/// Closing "ready for upload" and pricing/stock recommendation blocks.
pub fn write_next_steps(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "🚀 Ready for Intelligent Upload!")?;
    for step in NEXT_STEPS {
        writeln!(out, "   • {step}")?;
    }

    writeln!(out)?;
    writeln!(out, "💡 Recommendations:")?;
    for tip in RECOMMENDATIONS {
        writeln!(out, "   • {tip}")?;
    }
    Ok(())
}
