use std::collections::HashMap;

use serde::Serialize;

/// A single row of the spreadsheet export, keyed by header label. Cells may
/// be absent entirely when the source row is shorter than the header.
pub type InputRow = HashMap<String, String>;

/// Organisational level assigned to every imported objective.
pub const OBJECTIVE_LEVEL: &str = "Executive";

/// Provenance note recorded on every imported objective.
pub const IMPORT_RATIONALE: &str = "Imported from OKRs_DO_NOT_EDIT_Cleaned.csv";

/// Column order of the objectives import table. Must match the field order
/// of [`Objective`].
pub const OBJECTIVE_COLUMNS: [&str; 17] = [
    "id",
    "title",
    "level",
    "parentId",
    "ownerEmail",
    "ownerName",
    "department",
    "team",
    "quarter",
    "status",
    "priority",
    "impact",
    "progress",
    "description",
    "rationale",
    "createdAt",
    "updatedAt",
];

/// Column order of the key-results import table. Must match the field order
/// of [`KeyResult`]. Note the import format puts `updatedAt` before
/// `createdAt` here, unlike the objectives table.
pub const KEY_RESULT_COLUMNS: [&str; 13] = [
    "id",
    "objectiveId",
    "title",
    "metric",
    "baseline",
    "target",
    "current",
    "timeline",
    "status",
    "confidence",
    "ownerEmail",
    "updatedAt",
    "createdAt",
];

/// One objective in the import table. Exactly one objective exists per
/// distinct trimmed (title, deadline) pair observed in the input; field
/// values come from the first row that introduced the pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub title: String,
    pub level: String,
    pub parent_id: String,
    pub owner_email: String,
    pub owner_name: String,
    pub department: String,
    pub team: String,
    pub quarter: String,
    pub status: String,
    pub priority: String,
    pub impact: String,
    pub progress: String,
    pub description: String,
    pub rationale: String,
    pub created_at: String,
    pub updated_at: String,
}

/// One key result in the import table. Emitted one per input row, in input
/// order, linked to its objective through `objective_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyResult {
    pub id: String,
    pub objective_id: String,
    pub title: String,
    pub metric: String,
    pub baseline: u32,
    pub target: String,
    pub current: String,
    pub timeline: String,
    pub status: String,
    pub confidence: String,
    pub owner_email: String,
    pub updated_at: String,
    pub created_at: String,
}
