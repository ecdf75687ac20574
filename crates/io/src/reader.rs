//! CSV input: monthly observations with explicit gap handling.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::IoError;

/// One parsed CSV data row.
#[derive(Debug, Deserialize)]
struct RawRow {
    year: i32,
    month: u8,
    precip: Option<f64>,
    #[serde(default)]
    pet: Option<f64>,
}

/// Monthly observations aligned to a contiguous calendar.
///
/// Calendar gaps in the source file are materialised as NaN rows, so the
/// vectors always cover every month between the first and last period.
#[derive(Debug, Clone)]
pub struct MonthlyInput {
    years: Vec<i32>,
    months: Vec<u8>,
    precip: Vec<f64>,
    pet: Option<Vec<f64>>,
}

impl MonthlyInput {
    /// Calendar years, one per period.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Calendar months (1..=12), one per period.
    pub fn months(&self) -> &[u8] {
        &self.months
    }

    /// Precipitation values (NaN = missing).
    pub fn precip(&self) -> &[f64] {
        &self.precip
    }

    /// Potential evapotranspiration values, if the file carried them.
    pub fn pet(&self) -> Option<&[f64]> {
        self.pet.as_deref()
    }

    /// Number of periods (including materialised gaps).
    pub fn len(&self) -> usize {
        self.precip.len()
    }

    /// Returns `true` if there are no periods.
    pub fn is_empty(&self) -> bool {
        self.precip.is_empty()
    }

    /// Water balance D = precipitation − PET per period, NaN-propagating.
    ///
    /// Returns `None` when the input carried no PET column.
    pub fn water_balance(&self) -> Option<Vec<f64>> {
        let pet = self.pet.as_ref()?;
        Some(
            self.precip
                .iter()
                .zip(pet.iter())
                .map(|(&p, &e)| p - e)
                .collect(),
        )
    }
}

/// The calendar month following `(year, month)`.
fn next_period(year: i32, month: u8) -> (i32, u8) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Read monthly observations from a CSV file.
///
/// Expected columns: `year`, `month`, `precip`, and optionally `pet`.
/// Empty value cells mark missing observations. Periods must be strictly
/// increasing; skipped months are filled in as explicit NaN rows.
pub fn read_monthly_csv(path: &Path) -> Result<MonthlyInput, IoError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for required in ["year", "month", "precip"] {
        if !headers.iter().any(|h| h == required) {
            return Err(IoError::MissingColumn {
                column: required.to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    let has_pet = headers.iter().any(|h| h == "pet");

    let mut years = Vec::new();
    let mut months = Vec::new();
    let mut precip = Vec::new();
    let mut pet = Vec::new();
    let mut n_gaps = 0usize;

    for (row_idx, record) in reader.deserialize::<RawRow>().enumerate() {
        let row = record?;
        let data_row = row_idx + 1;

        if !(1..=12).contains(&row.month) {
            return Err(IoError::InvalidMonth {
                month: row.month,
                row: data_row,
            });
        }

        if let (Some(&last_year), Some(&last_month)) = (years.last(), months.last()) {
            let (mut exp_year, mut exp_month) = next_period(last_year, last_month);
            if (row.year, row.month) < (exp_year, exp_month) {
                return Err(IoError::NonMonotonic {
                    year: row.year,
                    month: row.month,
                    row: data_row,
                });
            }
            // Materialise skipped months as explicit gaps.
            while (exp_year, exp_month) < (row.year, row.month) {
                years.push(exp_year);
                months.push(exp_month);
                precip.push(f64::NAN);
                pet.push(f64::NAN);
                n_gaps += 1;
                let next = next_period(exp_year, exp_month);
                exp_year = next.0;
                exp_month = next.1;
            }
        }

        years.push(row.year);
        months.push(row.month);
        precip.push(row.precip.unwrap_or(f64::NAN));
        pet.push(row.pet.unwrap_or(f64::NAN));
    }

    if years.is_empty() {
        return Err(IoError::Empty {
            path: path.to_path_buf(),
        });
    }

    debug!(
        n_rows = years.len(),
        n_gaps,
        has_pet,
        path = %path.display(),
        "monthly CSV loaded"
    );

    Ok(MonthlyInput {
        years,
        months,
        precip,
        pet: has_pet.then_some(pet),
    })
}
