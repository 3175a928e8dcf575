// File: crates/scatter-core/src/data.rs
// Summary: CSV data loader; coerces metric columns to f64 and reports structural failures.

use std::path::Path;

use tracing::{debug, info};

use crate::record::Record;

/// Structural failure while loading the input dataset. A per-value parse
/// failure is not an error; it coerces to NaN.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("malformed or unreadable csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("no data rows in input")]
    Empty,
}

/// Load records from a delimited file with a header row.
///
/// Required columns: `state`, `abbr`, plus the six metric columns. Columns
/// are located by header name (case-insensitive); extra columns are ignored.
/// On success the record count is logged and each row is logged at debug
/// level for diagnostics.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Record>, DataLoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let headers = rdr.headers()?.clone();
    let col = |name: &'static str| -> Result<usize, DataLoadError> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or(DataLoadError::MissingColumn(name))
    };

    let i_state = col("state")?;
    let i_abbr = col("abbr")?;
    let i_poverty = col("poverty")?;
    let i_age = col("age")?;
    let i_income = col("income")?;
    let i_obesity = col("obesity")?;
    let i_smokes = col("smokes")?;
    let i_healthcare = col("healthcare")?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let text = |i: usize| row.get(i).unwrap_or("").to_string();
        let num = |i: usize| coerce(row.get(i).unwrap_or(""));
        records.push(Record {
            state: text(i_state),
            abbr: text(i_abbr),
            poverty: num(i_poverty),
            age: num(i_age),
            income: num(i_income),
            obesity: num(i_obesity),
            smokes: num(i_smokes),
            healthcare: num(i_healthcare),
        });
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty);
    }

    info!(records = records.len(), path = %path.as_ref().display(), "loaded dataset");
    for r in &records {
        debug!(
            abbr = %r.abbr,
            poverty = r.poverty,
            age = r.age,
            income = r.income,
            obesity = r.obesity,
            smokes = r.smokes,
            healthcare = r.healthcare,
            "record"
        );
    }

    Ok(records)
}

/// Numeric coercion: parse failures propagate as NaN, not errors.
fn coerce(s: &str) -> f64 {
    s.trim().parse().unwrap_or(f64::NAN)
}
