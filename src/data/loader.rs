//! CSV report loading.
//! Reads the adapter-content table with Polars and extracts the sample-ID and
//! percentage columns by position into typed records.

use std::path::Path;

use polars::prelude::*;
use thiserror::Error;

use super::model::{AdapterReport, SampleRecord};

/// The report must carry at least four columns: sample ID, two auxiliary
/// fields and the adapter percentage.
pub const MIN_COLUMNS: usize = 4;

const SAMPLE_ID_COL: usize = 0;
const AUX_COLS: [usize; 2] = [1, 2];
const ADAPTER_PERCENT_COL: usize = 3;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error(
        "Expected at least 4 columns \
         (sample ID in column 1, adapter percentage in column 4), found {found}"
    )]
    MissingColumns { found: usize },
    #[error("No data rows after the header")]
    NoData,
}

/// Load the report from `path`.
///
/// The first row is a header and is discarded; the remaining rows are read
/// positionally. Unparseable percentage cells become NaN rather than being
/// filtered, so degenerate input surfaces later in the density estimator.
pub fn load_report(path: &Path) -> Result<AdapterReport, LoaderError> {
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_skip_rows(1)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .collect()?;

    report_from_frame(&df)
}

fn report_from_frame(df: &DataFrame) -> Result<AdapterReport, LoaderError> {
    if df.width() < MIN_COLUMNS {
        return Err(LoaderError::MissingColumns { found: df.width() });
    }
    if df.height() == 0 {
        return Err(LoaderError::NoData);
    }

    let columns = df.get_columns();

    let ids = columns[SAMPLE_ID_COL]
        .as_materialized_series()
        .cast(&DataType::String)?;
    let ids = ids.str()?;

    let aux_a = columns[AUX_COLS[0]]
        .as_materialized_series()
        .cast(&DataType::String)?;
    let aux_a = aux_a.str()?;
    let aux_b = columns[AUX_COLS[1]]
        .as_materialized_series()
        .cast(&DataType::String)?;
    let aux_b = aux_b.str()?;

    let percents = columns[ADAPTER_PERCENT_COL]
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let percents = percents.f64()?;

    let mut samples = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        samples.push(SampleRecord {
            sample_id: ids.get(i).unwrap_or_default().to_string(),
            aux: [
                aux_a.get(i).unwrap_or_default().to_string(),
                aux_b.get(i).unwrap_or_default().to_string(),
            ],
            adapter_percent: percents.get(i).unwrap_or(f64::NAN),
        });
    }

    Ok(AdapterReport { samples })
}
