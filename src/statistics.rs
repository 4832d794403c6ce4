use color_eyre::Result;
use polars::prelude::*;

/// Minimum number of paired observations required before a Pearson
/// association is reported for a column pair.
pub const MIN_PAIRED_OBSERVATIONS: usize = 3;

/// Per-column summary shown in the Columns tab.
pub struct ColumnSummary {
    pub count: usize,
    pub null_count: usize,
    pub distinct: usize,
    pub numeric: Option<NumericSummary>,
}

/// Summary statistics for numeric columns.
pub struct NumericSummary {
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

/// Pairwise Pearson association between two numeric columns,
/// identified by their ordinal position in the source frame.
pub struct Association {
    pub left: usize,
    pub right: usize,
    pub pearson: f64,
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

pub fn summarize_column(series: &Series) -> Result<ColumnSummary> {
    let count = series.len();
    let null_count = series.null_count();
    let distinct = series.n_unique()?;

    let numeric = if is_numeric_dtype(series.dtype()) {
        Some(numeric_summary(series))
    } else {
        None
    };

    Ok(ColumnSummary {
        count,
        null_count,
        distinct,
        numeric,
    })
}

fn numeric_summary(series: &Series) -> NumericSummary {
    let mean = series.mean().unwrap_or(f64::NAN);
    let std = series.std(1).unwrap_or(f64::NAN); // Sample std (ddof=1)

    let values = numeric_values(series);
    let min = values.iter().copied().fold(f64::NAN, f64::min);
    let max = values.iter().copied().fold(f64::NAN, f64::max);

    NumericSummary {
        mean,
        std,
        min,
        max,
    }
}

// Convert a numeric series to non-null f64 values, casting integer types.
fn numeric_values(series: &Series) -> Vec<f64> {
    match series.cast(&DataType::Float64) {
        Ok(cast_series) => match cast_series.f64() {
            Ok(f64_series) => f64_series.iter().flatten().collect(),
            Err(_) => Vec::new(),
        },
        Err(_) => Vec::new(),
    }
}

/// Compute pairwise Pearson associations for every pair of numeric columns.
///
/// Rows where either side is null are dropped per pair; pairs with fewer than
/// [`MIN_PAIRED_OBSERVATIONS`] remaining rows are skipped, as are pairs whose
/// variance degenerates to zero. Results are sorted by descending |r|.
pub fn compute_associations(df: &DataFrame) -> Result<Vec<Association>> {
    let numeric_indices: Vec<usize> = df
        .get_columns()
        .iter()
        .enumerate()
        .filter(|(_, col)| is_numeric_dtype(col.dtype()))
        .map(|(i, _)| i)
        .collect();

    let mut associations = Vec::new();
    if numeric_indices.len() < 2 {
        return Ok(associations);
    }

    let columns = df.get_columns();
    for (a, &left) in numeric_indices.iter().enumerate() {
        for &right in &numeric_indices[a + 1..] {
            let left_values = paired_f64(columns[left].as_materialized_series())?;
            let right_values = paired_f64(columns[right].as_materialized_series())?;

            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for (x, y) in left_values.iter().zip(right_values.iter()) {
                if let (Some(x), Some(y)) = (x, y) {
                    xs.push(*x);
                    ys.push(*y);
                }
            }

            if xs.len() < MIN_PAIRED_OBSERVATIONS {
                continue;
            }

            if let Some(pearson) = pearson(&xs, &ys) {
                associations.push(Association {
                    left,
                    right,
                    pearson,
                });
            }
        }
    }

    associations.sort_by(|a, b| {
        b.pearson
            .abs()
            .partial_cmp(&a.pearson.abs())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Ok(associations)
}

// Nullable f64 view of a numeric series, preserving row alignment.
fn paired_f64(series: &Series) -> Result<Vec<Option<f64>>> {
    let cast_series = series.cast(&DataType::Float64)?;
    Ok(cast_series.f64()?.iter().collect())
}

fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }
    Some(cov / denom)
}
