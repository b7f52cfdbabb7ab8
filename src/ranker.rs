//! Top-N area selection per item.

use crate::error::{Result, TradeError};
use crate::loader::Dataset;
use crate::types::RankedRow;
use crate::util::column_title;
use std::cmp::Ordering;
use std::collections::HashSet;
use tracing::debug;

/// Value a selector shows before the user picks anything.
pub const PLACEHOLDER_ITEM: &str = "Select Item";
pub const DEFAULT_TOP_N: usize = 10;

/// Outcome of a valid query. `NoData` is informational, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    NoData,
    Ranked(Vec<RankedRow>),
}

impl RankedRow {
    pub const FIELDS: [&'static str; 4] = ["area", "demand", "profit_margin", "recommendation_score"];

    pub fn headers() -> Vec<String> {
        Self::FIELDS.iter().map(|f| column_title(f)).collect()
    }
}

pub fn is_unset(item: &str) -> bool {
    let item = item.trim();
    item.is_empty() || item == PLACEHOLDER_ITEM
}

/// Rank the areas trading `item`, best first, one row per area, at most `n`.
pub fn top_countries(dataset: Option<&Dataset>, item: &str, n: usize) -> Result<Ranking> {
    if is_unset(item) {
        return Err(TradeError::NoSelection);
    }
    let dataset = dataset.ok_or(TradeError::NoDataset)?;

    let mut matching: Vec<_> = dataset
        .records()
        .iter()
        .filter(|r| r.record.item == item)
        .collect();
    if matching.is_empty() {
        debug!(item, "no records for item");
        return Ok(Ranking::NoData);
    }

    // Stable sort keeps original row order among equal scores.
    matching.sort_by(|a, b| {
        b.recommendation_score
            .partial_cmp(&a.recommendation_score)
            .unwrap_or(Ordering::Equal)
    });

    let mut seen: HashSet<&str> = HashSet::new();
    let rows: Vec<RankedRow> = matching
        .into_iter()
        .filter(|r| seen.insert(r.record.area.as_str()))
        .take(n)
        .map(|r| RankedRow {
            area: r.record.area.clone(),
            demand: r.demand,
            profit_margin: r.profit_margin,
            recommendation_score: r.recommendation_score,
        })
        .collect();
    debug!(item, rows = rows.len(), "ranked areas");
    Ok(Ranking::Ranked(rows))
}
