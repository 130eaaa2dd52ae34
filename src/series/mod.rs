//! Derived-series construction.
//!
//! The feed reports running totals only; the daily numbers are recovered by
//! differencing against the previous day, with a zero baseline before the
//! first record (so the first delta equals the first cumulative value).

use crate::domain::{CountrySeries, DayRecord};

/// Build the plot series from an ordered record list.
///
/// Single forward pass over **every** record. An empty input yields empty
/// series. Deltas are signed: a downward correction upstream shows up as a
/// negative daily value and is passed through untouched.
pub fn build_series(records: &[DayRecord]) -> CountrySeries {
    let mut series = CountrySeries::with_capacity(records.len());

    let mut prev_confirmed = 0u64;
    let mut prev_deaths = 0u64;
    let mut prev_recovered = 0u64;

    for (day, record) in records.iter().enumerate() {
        series.day_index.push(day);

        series.confirmed.push(record.confirmed);
        series.deaths.push(record.deaths);
        series.recovered.push(record.recovered);

        series
            .new_confirmed
            .push(record.confirmed as i64 - prev_confirmed as i64);
        series.new_deaths.push(record.deaths as i64 - prev_deaths as i64);
        series
            .new_recovered
            .push(record.recovered as i64 - prev_recovered as i64);

        prev_confirmed = record.confirmed;
        prev_deaths = record.deaths;
        prev_recovered = record.recovered;
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, confirmed: u64, deaths: u64, recovered: u64) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(2020, 1, day).unwrap(),
            confirmed,
            deaths,
            recovered,
        }
    }

    #[test]
    fn fixture_sequence_matches_expected_series() {
        let records = vec![record(22, 1, 0, 0), record(23, 5, 1, 2), record(24, 5, 2, 4)];
        let series = build_series(&records);

        assert_eq!(series.day_index, vec![0, 1, 2]);
        assert_eq!(series.confirmed, vec![1, 5, 5]);
        assert_eq!(series.new_confirmed, vec![1, 4, 0]);
        assert_eq!(series.new_deaths, vec![0, 1, 1]);
        assert_eq!(series.new_recovered, vec![0, 2, 2]);
    }

    #[test]
    fn all_vectors_share_one_length_and_day_index_counts_up() {
        let records: Vec<DayRecord> = (1..=9).map(|d| record(d, d as u64 * 10, d as u64, 0)).collect();
        let series = build_series(&records);

        let n = records.len();
        assert_eq!(series.len(), n);
        assert_eq!(series.confirmed.len(), n);
        assert_eq!(series.deaths.len(), n);
        assert_eq!(series.recovered.len(), n);
        assert_eq!(series.new_confirmed.len(), n);
        assert_eq!(series.new_deaths.len(), n);
        assert_eq!(series.new_recovered.len(), n);

        for (i, &day) in series.day_index.iter().enumerate() {
            assert_eq!(day, i);
        }
        for i in 1..n {
            assert_eq!(
                series.new_confirmed[i],
                series.confirmed[i] as i64 - series.confirmed[i - 1] as i64
            );
        }
    }

    #[test]
    fn first_delta_equals_first_cumulative() {
        let series = build_series(&[record(22, 7, 3, 1)]);
        assert_eq!(series.new_confirmed, vec![7]);
        assert_eq!(series.new_deaths, vec![3]);
        assert_eq!(series.new_recovered, vec![1]);
    }

    #[test]
    fn downward_correction_yields_negative_delta() {
        let records = vec![record(22, 10, 0, 0), record(23, 8, 0, 0)];
        let series = build_series(&records);
        assert_eq!(series.new_confirmed, vec![10, -2]);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        let series = build_series(&[]);
        assert!(series.is_empty());
        assert_eq!(series, CountrySeries::default());
    }
}
