//! File loading: scan CSV/TSV, Parquet, or Arrow IPC into a collected frame.

use std::path::Path;
use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use datrep_cli::FileFormat;
use polars::prelude::*;
use tracing::info;

use crate::OpenOptions;

/// Load the file at `path` into a collected DataFrame. Format comes from
/// `options.format` when set, otherwise from the file extension; unknown
/// extensions are an error.
pub fn load_dataframe(path: &Path, options: &OpenOptions) -> Result<DataFrame> {
    let format = options
        .format
        .or_else(|| FileFormat::from_path(path))
        .ok_or_else(|| eyre!("Unsupported file type: {}", path.display()))?;

    let lf = match format {
        FileFormat::Csv => scan_delimited(path, b',', options)?,
        FileFormat::Tsv => scan_delimited(path, b'\t', options)?,
        FileFormat::Parquet => {
            let pl_path = PlPath::Local(Arc::from(path));
            LazyFrame::scan_parquet(pl_path, Default::default())?
        }
        FileFormat::Arrow => {
            let pl_path = PlPath::Local(Arc::from(path));
            LazyFrame::scan_ipc(pl_path, Default::default(), Default::default())?
        }
    };

    let df = lf.collect()?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded data file"
    );
    Ok(df)
}

fn scan_delimited(path: &Path, separator: u8, options: &OpenOptions) -> Result<LazyFrame> {
    let pl_path = PlPath::Local(Arc::from(path));
    let mut reader = LazyCsvReader::new(pl_path).with_separator(separator);
    if let Some(delimiter) = options.delimiter {
        reader = reader.with_separator(delimiter);
    }
    if let Some(has_header) = options.has_header {
        reader = reader.with_has_header(has_header);
    }
    if let Some(skip_rows) = options.skip_rows {
        reader = reader.with_skip_rows(skip_rows);
    }
    Ok(reader.finish()?)
}
