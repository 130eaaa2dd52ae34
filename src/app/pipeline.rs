//! Shared "report pipeline" logic behind the CLI front-end.
//!
//! Keeping this in one place gives the renderers a single seam:
//! dataset fetch -> derived series. Tests use `run_with_records` to exercise
//! everything downstream of the network call with fixture data.

use crate::data::CovidClient;
use crate::domain::{CountrySeries, DayRecord, RunConfig};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub records: Vec<DayRecord>,
    pub series: CountrySeries,
}

/// Fetch the configured country and derive its plot series.
pub fn run_report(config: &RunConfig) -> Result<RunOutput, AppError> {
    let client = CovidClient::new(config.timeout_secs)?;
    let records = client.fetch_country(&config.country)?;
    Ok(run_with_records(records))
}

/// Derive the plot series from pre-fetched records.
pub fn run_with_records(records: Vec<DayRecord>) -> RunOutput {
    let series = crate::series::build_series(&records);
    RunOutput { records, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn pipeline_output_is_aligned_with_input() {
        let records: Vec<DayRecord> = (1..=5)
            .map(|d| DayRecord {
                date: NaiveDate::from_ymd_opt(2020, 2, d).unwrap(),
                confirmed: d as u64 * 3,
                deaths: d as u64,
                recovered: 0,
            })
            .collect();

        let run = run_with_records(records.clone());
        assert_eq!(run.records, records);
        assert_eq!(run.series.len(), records.len());
        assert_eq!(run.series.confirmed.last(), Some(&15));
    }
}
