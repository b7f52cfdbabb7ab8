//! Derived metrics: demand, profit margin and the weighted recommendation score.

use crate::types::{EnrichedRecord, Record};
use tracing::warn;

pub const DEMAND_WEIGHT: f64 = 0.6;
pub const PROFIT_WEIGHT: f64 = 0.4;

/// Global maxima used as normalization denominators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Maxima {
    pub demand: f64,
    pub profit_margin: f64,
}

/// Divide `value` by the dataset-wide `max`. A non-positive maximum has no
/// meaningful scale, so the score is 0.
pub fn normalize(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    let score = value / max;
    if score.is_finite() {
        score
    } else {
        0.0
    }
}

pub fn composite_score(demand_score: f64, profit_score: f64) -> f64 {
    DEMAND_WEIGHT * demand_score + PROFIT_WEIGHT * profit_score
}

/// Compute every derived column for the whole dataset in one pass.
/// Maxima are taken over all records, never per item.
pub fn enrich(records: Vec<Record>) -> (Vec<EnrichedRecord>, Maxima) {
    let partial: Vec<(Record, f64, f64)> = records
        .into_iter()
        .map(|r| {
            let demand = r.import + r.consumption;
            let profit_margin = r.export - r.production;
            (r, demand, profit_margin)
        })
        .collect();

    let maxima = Maxima {
        demand: max_of(partial.iter().map(|p| p.1)),
        profit_margin: max_of(partial.iter().map(|p| p.2)),
    };
    if !partial.is_empty() {
        if maxima.demand <= 0.0 {
            warn!(max = maxima.demand, "maximum demand is not positive; demand scores set to 0");
        }
        if maxima.profit_margin <= 0.0 {
            warn!(
                max = maxima.profit_margin,
                "maximum profit margin is not positive; profit scores set to 0"
            );
        }
    }

    let enriched = partial
        .into_iter()
        .map(|(record, demand, profit_margin)| {
            let demand_score = normalize(demand, maxima.demand);
            let profit_score = normalize(profit_margin, maxima.profit_margin);
            EnrichedRecord {
                record,
                demand,
                profit_margin,
                demand_score,
                profit_score,
                recommendation_score: composite_score(demand_score, profit_score),
            }
        })
        .collect();
    (enriched, maxima)
}

fn max_of(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(f64::max).unwrap_or(0.0)
}
