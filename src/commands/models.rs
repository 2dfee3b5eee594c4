use crate::diff::{DiffAlgorithm, Granularity};
use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Original (old) document
    pub original: PathBuf,

    /// Modified (new) document
    pub modified: PathBuf,

    /// Unit of comparison (None = config file, then default)
    pub granularity: Option<Granularity>,

    /// Sequence diff algorithm (None = config file, then default)
    pub algorithm: Option<DiffAlgorithm>,

    /// Output path for the HTML page (optional)
    pub output_html: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// TOML comparison config (optional)
    pub config: Option<PathBuf>,

    /// Report title (None = config file, then default)
    pub title: Option<String>,

    pub ignore_case: bool,

    /// Treat whitespace differences as changes
    pub strict_whitespace: bool,

    /// Never pair replaced blocks into modified blocks
    pub no_inline: bool,

    /// Print terminal summary to stdout
    pub print_summary: bool,

    /// Return an error when the documents differ
    pub fail_on_changes: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            original: PathBuf::new(),
            modified: PathBuf::new(),
            granularity: None,
            algorithm: None,
            output_html: Some(PathBuf::from("diff.html")),
            output_json: None,
            config: None,
            title: None,
            ignore_case: false,
            strict_whitespace: false,
            no_inline: false,
            print_summary: false,
            fail_on_changes: false,
        }
    }
}

/// Arguments for the convert command
#[derive(Debug, Clone, Default)]
pub struct ConvertArgs {
    pub input: PathBuf,

    /// Write converted HTML here (optional)
    pub output_html: Option<PathBuf>,

    /// Write extracted plain text here (optional)
    pub output_text: Option<PathBuf>,
}
