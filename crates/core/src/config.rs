use std::env;
use std::path::PathBuf;

use crate::labels::LabelSet;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Directory of the running executable, falling back to the current directory.
pub fn app_base() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub const DEFAULT_SHEET: &str = "Лист1";
pub const DEFAULT_OUTPUT_PREFIX: &str = "gorod";
pub const REPORTS_DIR_NAME: &str = "reports";

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Config {
    /// Worksheet to read from every workbook.
    pub sheet_name: String,
    /// Input directory for batch mode.
    pub reports_dir: PathBuf,
    /// Output directory for batch mode; `None` means the current directory.
    pub out_dir: Option<PathBuf>,
    /// Prefix of the timestamped file name used when single-file mode has no `--out`.
    pub output_prefix: String,
    pub labels: LabelSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET.to_string(),
            reports_dir: app_base().join(REPORTS_DIR_NAME),
            out_dir: None,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            labels: LabelSet::default(),
        }
    }
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let labels = match get("GOROD_LABELS") {
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                tracing::warn!(error = %e, "ignoring GOROD_LABELS");
                defaults.labels
            }),
            None => defaults.labels,
        };

        Self {
            sheet_name: get("GOROD_SHEET").unwrap_or(defaults.sheet_name),
            reports_dir: get("GOROD_REPORTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.reports_dir),
            out_dir: get("GOROD_OUT_DIR").map(PathBuf::from),
            output_prefix: get("GOROD_OUTPUT_PREFIX").unwrap_or(defaults.output_prefix),
            labels,
        }
    }

    /// `{prefix}_{timestamp}.kml`, the single-file output name when none is given.
    pub fn timestamped_output_name(&self, timestamp: &str) -> String {
        format!("{}_{}.kml", self.output_prefix, timestamp)
    }

    pub fn log_summary(&self) {
        tracing::debug!(
            sheet = %self.sheet_name,
            reports_dir = %self.reports_dir.display(),
            out_dir = %self.out_dir.as_deref().map(|p| p.display().to_string()).unwrap_or_else(|| "(cwd)".into()),
            prefix = %self.output_prefix,
            labels = %self.labels,
            "config loaded"
        );
    }
}
