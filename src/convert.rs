use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, info, instrument};

use crate::error::{Result, ToolError};
use crate::id::{IdSource, UuidSource};
use crate::io::{csv_read, tsv_write};
use crate::model::{
    IMPORT_RATIONALE, InputRow, KEY_RESULT_COLUMNS, KeyResult, OBJECTIVE_COLUMNS, OBJECTIVE_LEVEL,
    Objective,
};
use crate::normalize::{build_status, normalize_progress, split_owner};
use crate::paths::ImportPaths;

/// The two entity collections produced from one spreadsheet export.
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    /// Objectives in first-seen order.
    pub objectives: Vec<Objective>,
    /// Key results in input row order.
    pub key_results: Vec<KeyResult>,
}

/// Converts the spreadsheet export under `root` into the two import tables
/// and returns their paths. One timestamp is captured here and stamped on
/// every record of the run.
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub fn run(root: &Path) -> Result<(PathBuf, PathBuf)> {
    let paths = ImportPaths::new(root);
    if !paths.input.exists() {
        return Err(ToolError::MissingInput(paths.input));
    }

    let rows = csv_read::read_rows(&paths.input)?;
    info!(row_count = rows.len(), "read rows from OKR export");

    let now = Utc::now().to_rfc3339();
    let mut ids = UuidSource;
    let import = build_import(&rows, &mut ids, &now);
    debug!(
        objective_count = import.objectives.len(),
        key_result_count = import.key_results.len(),
        "grouped rows into import records"
    );

    tsv_write::write_table(&paths.objectives, &OBJECTIVE_COLUMNS, &import.objectives)?;
    tsv_write::write_table(&paths.key_results, &KEY_RESULT_COLUMNS, &import.key_results)?;
    info!("wrote objectives and key results tables");

    Ok((paths.objectives, paths.key_results))
}

/// Groups the input rows into objectives and key results. Objectives are
/// deduplicated on the trimmed (title, deadline) pair: the first row that
/// introduces a pair fixes the objective's fields permanently, and later
/// rows sharing the pair only contribute additional key results. Every row
/// yields exactly one key result, in input order.
pub fn build_import(rows: &[InputRow], ids: &mut dyn IdSource, now: &str) -> Import {
    let mut seen: HashMap<(String, String), String> = HashMap::new();
    let mut objectives = Vec::new();
    let mut key_results = Vec::new();

    for row in rows {
        let title = field(row, "Objective").trim();
        let deadline = field(row, "Deadline").trim();

        let key = (title.to_string(), deadline.to_string());
        let objective_id = match seen.get(&key) {
            Some(id) => id.clone(),
            None => {
                let id = ids.next_id();
                let owner = field(row, "Owner").trim();
                let progress = normalize_progress(field(row, "Progress").trim());
                let (department, team) = split_owner(owner);
                objectives.push(Objective {
                    id: id.clone(),
                    title: title.to_string(),
                    level: OBJECTIVE_LEVEL.to_string(),
                    parent_id: String::new(),
                    owner_email: String::new(),
                    owner_name: owner.to_string(),
                    department,
                    team,
                    quarter: deadline.to_string(),
                    status: String::new(),
                    priority: String::new(),
                    impact: String::new(),
                    progress: progress.to_string(),
                    description: title.to_string(),
                    rationale: IMPORT_RATIONALE.to_string(),
                    created_at: now.to_string(),
                    updated_at: now.to_string(),
                });
                seen.insert(key, id.clone());
                id
            }
        };

        key_results.push(KeyResult {
            id: ids.next_id(),
            objective_id,
            title: field(row, "Key Results").trim().to_string(),
            metric: field(row, "Metric").trim().to_string(),
            baseline: 0,
            target: field(row, "Target").trim().to_string(),
            current: field(row, "Current").trim().to_string(),
            timeline: deadline.to_string(),
            status: build_status(field(row, "Baseline/Stretch"), field(row, "Status / Comments")),
            confidence: String::new(),
            owner_email: String::new(),
            updated_at: now.to_string(),
            created_at: now.to_string(),
        });
    }

    Import {
        objectives,
        key_results,
    }
}

fn field<'a>(row: &'a InputRow, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or("")
}
