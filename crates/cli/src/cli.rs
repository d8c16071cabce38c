use std::path::PathBuf;

use clap::Parser;
use gorod_core::LabelSet;

/// Excel (.xlsx/.xlsm) → KML generator.
///
/// Converts city-service incident reports into KML, grouped into
/// okrug/district folders. Without `--excel` or `--in-dir` every workbook in
/// the `reports` directory next to the executable is converted into the
/// current directory.
#[derive(Parser, Debug)]
#[command(name = "gorod-kml", version, about)]
pub struct CliArgs {
    /// Path to a single workbook (.xlsx/.xlsm)
    #[arg(long, conflicts_with = "in_dir")]
    pub excel: Option<PathBuf>,

    /// Directory of workbooks to convert
    #[arg(long)]
    pub in_dir: Option<PathBuf>,

    /// Worksheet name (default: GOROD_SHEET or "Лист1")
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output KML file for --excel (default: gorod_YYYYMMDD_HHMMSS.kml)
    #[arg(long, conflicts_with = "in_dir")]
    pub out: Option<PathBuf>,

    /// Output directory for batch mode (default: GOROD_OUT_DIR or the current directory)
    #[arg(long, conflicts_with = "excel")]
    pub out_dir: Option<PathBuf>,

    /// Description label language: ru or en
    #[arg(long)]
    pub labels: Option<LabelSet>,
}
