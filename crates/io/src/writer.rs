//! CSV output: index series keyed by year and month.

use std::path::Path;

use tracing::debug;

use crate::error::IoError;

/// Write index series to a CSV file.
///
/// The header is `year,month` followed by one column per entry in
/// `columns`. Undefined values (NaN) become empty cells, mirroring how the
/// reader treats them on the way in.
pub fn write_monthly_csv(
    path: &Path,
    years: &[i32],
    months: &[u8],
    columns: &[(String, Vec<f64>)],
) -> Result<(), IoError> {
    let n = years.len();
    for (name, values) in columns {
        if values.len() != n {
            return Err(IoError::ColumnLengthMismatch {
                expected: n,
                column: name.clone(),
                got: values.len(),
            });
        }
    }

    let mut writer = csv::Writer::from_path(path)?;

    let mut header = vec!["year".to_string(), "month".to_string()];
    header.extend(columns.iter().map(|(name, _)| name.clone()));
    writer.write_record(&header)?;

    for i in 0..n {
        let mut record = vec![years[i].to_string(), months[i].to_string()];
        for (_, values) in columns {
            let v = values[i];
            record.push(if v.is_finite() {
                format!("{v:.4}")
            } else {
                String::new()
            });
        }
        writer.write_record(&record)?;
    }

    writer.flush().map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(n_rows = n, n_columns = columns.len(), path = %path.display(), "CSV written");
    Ok(())
}
