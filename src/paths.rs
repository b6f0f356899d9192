use std::path::{Path, PathBuf};

/// Location of the spreadsheet export, relative to the project root.
pub const INPUT_FILE: &str = "OKRs/OKRs_DO_NOT_EDIT_Cleaned.csv";
/// Location of the generated objectives table.
pub const OBJECTIVES_FILE: &str = "OKRs/Import_Objectives.tsv";
/// Location of the generated key-results table.
pub const KEY_RESULTS_FILE: &str = "OKRs/Import_KeyResults.tsv";

/// Resolved input and output locations for one run. The paths are fixed
/// relative to the project root; only the root itself varies.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPaths {
    pub input: PathBuf,
    pub objectives: PathBuf,
    pub key_results: PathBuf,
}

impl ImportPaths {
    /// Resolves the fixed file locations against the given project root.
    pub fn new(root: &Path) -> Self {
        Self {
            input: root.join(INPUT_FILE),
            objectives: root.join(OBJECTIVES_FILE),
            key_results: root.join(KEY_RESULTS_FILE),
        }
    }
}
