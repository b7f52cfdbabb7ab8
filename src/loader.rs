use crate::error::{Result, TradeError};
use crate::scoring;
use crate::types::{EnrichedRecord, LoadReport, RawRow, Record, REQUIRED_COLUMNS};
use crate::util::{normalize_header, parse_number};
use csv::{ReaderBuilder, StringRecord};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// A validated, fully scored table. Built only by a successful load.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<EnrichedRecord>,
    items: Vec<String>,
    report: LoadReport,
}

impl Dataset {
    /// Records in original row order.
    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    /// Distinct non-empty item names, sorted.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let dataset = load_from_reader(file)?;
    info!(
        path = %path.display(),
        rows = dataset.len(),
        items = dataset.items.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Parse, validate and score a comma-separated table from any reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(TradeError::Parse("No columns to parse from file".to_string()));
    }
    let normalized: StringRecord = headers.iter().map(normalize_header).collect();
    check_schema(&normalized)?;
    rdr.set_headers(normalized);

    let mut report = LoadReport::default();
    let mut records: Vec<Record> = Vec::new();

    for (idx, result) in rdr.deserialize::<RawRow>().enumerate() {
        let row = result?;
        let row_no = idx + 1;
        report.total_rows += 1;

        let mut import = numeric(row_no, "import", row.import.as_deref())?;
        let export = numeric(row_no, "export", row.export.as_deref())?;
        let production = numeric(row_no, "production", row.production.as_deref())?;
        let mut consumption = numeric(row_no, "consumption", row.consumption.as_deref())?;

        if import < 0.0 {
            import = 0.0;
            report.clamped_import += 1;
        }
        if consumption < 0.0 {
            consumption = 0.0;
            report.clamped_consumption += 1;
        }

        records.push(Record {
            item: row.item.unwrap_or_default().trim().to_string(),
            area: row.area.unwrap_or_default().trim().to_string(),
            import,
            export,
            production,
            consumption,
        });
    }
    debug!(
        import = report.clamped_import,
        consumption = report.clamped_consumption,
        "negative values clamped to zero"
    );

    let items: Vec<String> = records
        .iter()
        .filter(|r| !r.item.is_empty())
        .map(|r| r.item.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let (records, maxima) = scoring::enrich(records);
    report.max_demand = maxima.demand;
    report.max_profit_margin = maxima.profit_margin;

    Ok(Dataset { records, items, report })
}

fn check_schema(headers: &StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    debug!(?missing, "required columns absent");
    Err(TradeError::Schema {
        required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
    })
}

fn numeric(row: usize, column: &str, value: Option<&str>) -> Result<f64> {
    parse_number(value).ok_or_else(|| TradeError::Numeric {
        row,
        column: column.to_string(),
        value: value.unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(csv: &str) -> Result<Dataset> {
        load_from_reader(csv.as_bytes())
    }

    #[test]
    fn normalizes_headers_and_ignores_extra_columns() {
        let ds = load(
            " Item ,AREA,Import,Export , production,Consumption,Notes\n\
             wheat,A,10,5,2,3,first\n",
        )
        .unwrap();
        assert_eq!(ds.len(), 1);
        let r = &ds.records()[0];
        assert_eq!(r.record.item, "wheat");
        assert_eq!(r.record.area, "A");
        assert_eq!(r.demand, 13.0);
        assert_eq!(r.profit_margin, 3.0);
    }

    #[test]
    fn missing_column_is_schema_error() {
        let err = load("item,area,import,export,production,notes\nwheat,A,1,2,3,x\n").unwrap_err();
        assert!(matches!(err, TradeError::Schema { ref required } if required.len() == 6));
    }

    #[test]
    fn dropping_any_required_column_fails_schema() {
        for dropped in REQUIRED_COLUMNS {
            let kept: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .copied()
                .filter(|c| *c != dropped)
                .chain(["extra"])
                .collect();
            let csv = format!("{}\n{}\n", kept.join(","), vec!["1"; kept.len()].join(","));
            match load(&csv) {
                Err(TradeError::Schema { required }) => assert_eq!(required, REQUIRED_COLUMNS),
                other => panic!("dropping {dropped}: expected schema error, got {other:?}"),
            }
        }
    }

    #[test]
    fn misplaced_comma_in_quoted_number_is_numeric_error() {
        let err = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,\"1,5\",\"1,2,3\",0,0\n",
        )
        .unwrap_err();
        assert!(matches!(err, TradeError::Numeric { row: 1, ref column, .. } if column == "import"));

        let ds = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,\"1,500\",2,0,0\n",
        )
        .unwrap();
        assert_eq!(ds.records()[0].record.import, 1500.0);
    }

    #[test]
    fn item_and_area_are_trimmed_so_padded_areas_merge() {
        let ds = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,1,2,1,1\n\
             \" wheat \",\" A \",9,9,1,9\n",
        )
        .unwrap();
        assert_eq!(ds.items(), &["wheat".to_string()]);
        assert!(ds.records().iter().all(|r| r.record.area == "A"));
        let ranking = crate::ranker::top_countries(Some(&ds), "wheat", 10).unwrap();
        match ranking {
            crate::ranker::Ranking::Ranked(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].demand, 18.0);
            }
            other => panic!("unexpected ranking: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_parse_error() {
        let err = load("").unwrap_err();
        assert!(matches!(err, TradeError::Parse(_)));
    }

    #[test]
    fn negative_import_and_consumption_are_clamped() {
        let ds = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,10,5,2,3\n\
             wheat,B,-5,8,1,20\n\
             rice,C,4,1,9,-2\n",
        )
        .unwrap();
        for r in ds.records() {
            assert!(r.record.import >= 0.0);
            assert!(r.record.consumption >= 0.0);
        }
        assert_eq!(ds.records()[1].record.import, 0.0);
        assert_eq!(ds.records()[2].record.consumption, 0.0);
        assert_eq!(ds.report().clamped_import, 1);
        assert_eq!(ds.report().clamped_consumption, 1);
        // export and production keep their sign
        assert_eq!(ds.records()[2].profit_margin, -8.0);
    }

    #[test]
    fn non_numeric_value_names_row_and_column() {
        let err = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,10,5,2,3\n\
             wheat,B,ten,8,1,20\n",
        )
        .unwrap_err();
        match err {
            TradeError::Numeric { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "import");
                assert_eq!(value, "ten");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn items_are_sorted_distinct_and_non_empty() {
        let ds = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,1,1,1,1\n\
             barley,B,1,1,1,1\n\
             ,C,1,1,1,1\n\
             wheat,D,1,1,1,1\n",
        )
        .unwrap();
        assert_eq!(ds.items(), &["barley".to_string(), "wheat".to_string()]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn header_only_file_loads_empty_dataset() {
        let ds = load("item,area,import,export,production,consumption\n").unwrap();
        assert!(ds.is_empty());
        assert!(ds.items().is_empty());
    }

    #[test]
    fn maxima_are_global_across_items() {
        let ds = load(
            "item,area,import,export,production,consumption\n\
             wheat,A,10,5,2,3\n\
             rice,B,50,30,0,50\n",
        )
        .unwrap();
        assert_eq!(ds.report().max_demand, 100.0);
        assert_eq!(ds.report().max_profit_margin, 30.0);
        assert!((ds.records()[0].demand_score - 0.13).abs() < 1e-12);
    }
}
