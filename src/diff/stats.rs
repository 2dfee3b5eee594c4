//! Summary statistics over change runs.

use serde::{Deserialize, Serialize};

use super::schema::{Change, ChangeKind};

/// Token and character counts for a diff
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added_tokens: usize,
    pub removed_tokens: usize,
    pub unchanged_tokens: usize,

    pub added_chars: usize,
    pub removed_chars: usize,
    pub unchanged_chars: usize,

    /// Number of added or removed runs
    pub change_count: usize,

    /// `2 * unchanged / (old + new)` over characters, 1.0 for two empty inputs
    pub similarity: f64,
}

impl DiffStats {
    pub fn from_changes(changes: &[Change]) -> Self {
        let mut stats = DiffStats::default();

        for change in changes {
            let chars = change.value.chars().count();
            match change.kind {
                ChangeKind::Added => {
                    stats.added_tokens += change.count;
                    stats.added_chars += chars;
                    stats.change_count += 1;
                }
                ChangeKind::Removed => {
                    stats.removed_tokens += change.count;
                    stats.removed_chars += chars;
                    stats.change_count += 1;
                }
                ChangeKind::Unchanged => {
                    stats.unchanged_tokens += change.count;
                    stats.unchanged_chars += chars;
                }
            }
        }

        let old_chars = stats.unchanged_chars + stats.removed_chars;
        let new_chars = stats.unchanged_chars + stats.added_chars;
        stats.similarity = if old_chars + new_chars == 0 {
            1.0
        } else {
            (2 * stats.unchanged_chars) as f64 / (old_chars + new_chars) as f64
        };

        stats
    }

    pub fn has_changes(&self) -> bool {
        self.change_count > 0
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        format!(
            "+{} / -{} tokens, {} change(s), {:.1}% similar",
            self.added_tokens,
            self.removed_tokens,
            self.change_count,
            self.similarity * 100.0
        )
    }
}
