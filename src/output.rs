use crate::error::{Result, TradeError};
use crate::types::RankedRow;
use crate::util::format_number;
use serde::Serialize;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

pub fn write_csv<T: Serialize, P: AsRef<Path>>(path: P, rows: &[T]) -> Result<()> {
    let export_err = |e: csv::Error| TradeError::Export(e.to_string());
    let mut wtr = csv::Writer::from_path(path).map_err(export_err)?;
    for r in rows {
        wtr.serialize(r).map_err(export_err)?;
    }
    wtr.flush().map_err(|e| TradeError::Export(e.to_string()))?;
    Ok(())
}

pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(|e| TradeError::Export(e.to_string()))?;
    std::fs::write(path, s).map_err(|e| TradeError::Export(e.to_string()))?;
    Ok(())
}

/// Markdown table of ranked rows with title-cased headers.
pub fn render_table(rows: &[RankedRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record(RankedRow::headers());
    for r in rows {
        builder.push_record([
            r.area.clone(),
            format_number(r.demand, 2),
            format_number(r.profit_margin, 2),
            format_number(r.recommendation_score, 4),
        ]);
    }
    builder.build().with(Style::markdown()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<RankedRow> {
        vec![
            RankedRow {
                area: "B".into(),
                demand: 20.0,
                profit_margin: 7.0,
                recommendation_score: 1.0,
            },
            RankedRow {
                area: "A".into(),
                demand: 1300.0,
                profit_margin: 3.0,
                recommendation_score: 0.56142857,
            },
        ]
    }

    #[test]
    fn table_has_display_headers_and_formatted_values() {
        let table = render_table(&rows());
        assert!(table.contains("Profit Margin"));
        assert!(table.contains("Recommendation Score"));
        assert!(table.contains("1,300.00"));
        assert!(table.contains("0.5614"));
    }

    #[test]
    fn csv_export_uses_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("top.csv");
        write_csv(&path, &rows()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("area,demand,profit_margin,recommendation_score"));
        assert_eq!(lines.next(), Some("B,20.0,7.0,1.0"));
    }

    #[test]
    fn export_to_missing_directory_is_export_error() {
        let err = write_json("/definitely/not/here/out.json", &rows()).unwrap_err();
        assert!(matches!(err, TradeError::Export(_)));
    }
}
