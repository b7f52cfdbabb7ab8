use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Header names every dataset must carry, after trimming and lower-casing.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "item",
    "area",
    "import",
    "export",
    "production",
    "consumption",
];

/// One CSV row as read from disk, keyed by normalized header names.
/// Any column outside the required set is ignored.
#[derive(Debug, Deserialize)]
pub struct RawRow {
    pub item: Option<String>,
    pub area: Option<String>,
    pub import: Option<String>,
    pub export: Option<String>,
    pub production: Option<String>,
    pub consumption: Option<String>,
}

/// A typed (item, area) trade observation. `import` and `consumption` are
/// already clamped to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub item: String,
    pub area: String,
    pub import: f64,
    pub export: f64,
    pub production: f64,
    pub consumption: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub record: Record,
    pub demand: f64,
    pub profit_margin: f64,
    pub demand_score: f64,
    pub profit_score: f64,
    pub recommendation_score: f64,
}

/// Display/export projection of a ranked record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRow {
    pub area: String,
    pub demand: f64,
    pub profit_margin: f64,
    pub recommendation_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total_rows: usize,
    pub clamped_import: usize,
    pub clamped_consumption: usize,
    pub max_demand: f64,
    pub max_profit_margin: f64,
}

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub item: String,
    pub generated_at: DateTime<Utc>,
    pub total_rows: usize,
    pub rows: Vec<RankedRow>,
}
