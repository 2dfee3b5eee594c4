//! Configuration and constants for the CLI.
//!
//! Comparison settings can come from a TOML file:
//!
//! ```toml
//! [diff]
//! granularity = "blocks"
//! algorithm = "patience"
//! ignore_case = false
//! min_similarity = 0.6
//!
//! [render]
//! title = "Contract v2 vs v3"
//! added_class = "ins"
//! ```
//!
//! Every field is optional. CLI flags override the file, defaults fill the rest.

use crate::diff::{DiffAlgorithm, Granularity};
use crate::utils::error::ConfigError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Current JSON report schema version
pub const REPORT_VERSION: &str = "1.0.0";

pub const DEFAULT_ADDED_CLASS: &str = "added";
pub const DEFAULT_REMOVED_CLASS: &str = "removed";
pub const DEFAULT_MODIFIED_CLASS: &str = "modified";

/// Minimum word similarity for two blocks to be shown as one modified block
pub const DEFAULT_MIN_SIMILARITY: f64 = 0.5;

/// Number of changed fragments listed in the terminal summary
pub const DEFAULT_TERMINAL_CHANGES: usize = 10;

pub const DEFAULT_REPORT_TITLE: &str = "Document comparison";

// Input extensions we know how to load (lowercase, no dot)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx", "html", "htm", "txt", "text", "md"];

// Elements that never carry a closing tag
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

// Elements whose text content is emitted without escaping
pub const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

/// CSS class names used to mark up diff output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssClasses {
    pub added: String,
    pub removed: String,
    pub modified: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            added: DEFAULT_ADDED_CLASS.to_string(),
            removed: DEFAULT_REMOVED_CLASS.to_string(),
            modified: DEFAULT_MODIFIED_CLASS.to_string(),
        }
    }
}

/// Complete comparison configuration as read from TOML
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompareConfig {
    /// Diff behaviour
    #[serde(default)]
    pub diff: DiffSection,

    /// Output presentation
    #[serde(default)]
    pub render: RenderSection,
}

/// `[diff]` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DiffSection {
    pub granularity: Option<Granularity>,
    pub algorithm: Option<DiffAlgorithm>,
    pub ignore_case: Option<bool>,
    pub ignore_whitespace: Option<bool>,
    pub inline_changes: Option<bool>,
    pub min_similarity: Option<f64>,
    pub timeout_ms: Option<u64>,
}

/// `[render]` table
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RenderSection {
    pub title: Option<String>,
    pub added_class: Option<String>,
    pub removed_class: Option<String>,
    pub modified_class: Option<String>,
    pub terminal_changes: Option<usize>,
}

impl CompareConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min) = self.diff.min_similarity {
            if !(0.0..=1.0).contains(&min) {
                return Err(ConfigError::Invalid(format!(
                    "diff.min_similarity must be between 0 and 1, got {}",
                    min
                )));
            }
        }

        let classes = [
            ("render.added_class", &self.render.added_class),
            ("render.removed_class", &self.render.removed_class),
            ("render.modified_class", &self.render.modified_class),
        ];
        for (field, value) in classes {
            if let Some(class) = value {
                if !is_valid_class_name(class) {
                    return Err(ConfigError::Invalid(format!(
                        "{} is not a usable CSS class name: {:?}",
                        field, class
                    )));
                }
            }
        }

        Ok(())
    }

    /// Resolve CSS classes, falling back to defaults
    pub fn classes(&self) -> CssClasses {
        let defaults = CssClasses::default();
        CssClasses {
            added: self.render.added_class.clone().unwrap_or(defaults.added),
            removed: self.render.removed_class.clone().unwrap_or(defaults.removed),
            modified: self.render.modified_class.clone().unwrap_or(defaults.modified),
        }
    }
}

/// Load a comparison config from a TOML file
///
/// # Errors
/// * `ConfigError::Io` - If file cannot be read
/// * `ConfigError::Parse` - If TOML is invalid
/// * `ConfigError::Invalid` - If a value is out of range
///
/// # Example
/// ```ignore
/// let config = load_config("doc-diff.toml")?;
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<CompareConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading config from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    let config: CompareConfig = toml::from_str(&contents)?;
    config.validate()?;

    Ok(config)
}

fn is_valid_class_name(class: &str) -> bool {
    !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: CompareConfig = toml::from_str(
            r#"
            [diff]
            granularity = "sentences"
            algorithm = "patience"
            ignore_case = true
            min_similarity = 0.75

            [render]
            title = "Draft review"
            added_class = "ins"
            "#,
        )
        .unwrap();

        assert_eq!(config.diff.granularity, Some(Granularity::Sentences));
        assert_eq!(config.diff.algorithm, Some(DiffAlgorithm::Patience));
        assert_eq!(config.diff.ignore_case, Some(true));
        assert!(config.validate().is_ok());

        let classes = config.classes();
        assert_eq!(classes.added, "ins");
        assert_eq!(classes.removed, DEFAULT_REMOVED_CLASS);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: CompareConfig = toml::from_str("").unwrap();
        assert!(config.diff.granularity.is_none());
        assert_eq!(config.classes(), CssClasses::default());
    }

    #[test]
    fn test_min_similarity_out_of_range() {
        let config: CompareConfig = toml::from_str("[diff]\nmin_similarity = 1.5\n").unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_class_name_with_quote_rejected() {
        let config: CompareConfig =
            toml::from_str("[render]\nremoved_class = \"bad\\\"class\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_granularity_is_parse_error() {
        let result: Result<CompareConfig, _> = toml::from_str("[diff]\ngranularity = \"pages\"\n");
        assert!(result.is_err());
    }
}
