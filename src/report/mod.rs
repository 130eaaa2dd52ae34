//! Formatted terminal output for a run.
//!
//! Formatting lives in one place so output changes stay localized and the
//! summary is snapshot-testable without touching the network.

use crate::domain::{CountrySeries, DayRecord, Metric};

/// Format the run summary printed above the charts.
pub fn format_summary(country: &str, records: &[DayRecord], series: &CountrySeries) -> String {
    let mut out = String::new();

    out.push_str("=== covid - Covid-19 case curves ===\n");
    out.push_str(&format!("Country: {country}\n"));

    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        out.push_str("No records in the dataset for this country.\n");
        return out;
    };

    out.push_str(&format!(
        "Days: {} ({} .. {})\n",
        records.len(),
        first.date,
        last.date
    ));

    out.push_str("Latest cumulative:");
    for metric in Metric::ALL {
        // Non-empty records imply non-empty series; still guard the lookup.
        let total = series.cumulative(metric).last().copied().unwrap_or(0);
        out.push_str(&format!(" {}={total}", metric.display_name().to_lowercase()));
    }
    out.push('\n');

    out.push_str("Latest daily:");
    for metric in Metric::ALL {
        let delta = series.daily(metric).last().copied().unwrap_or(0);
        out.push_str(&format!(" {}={delta:+}", metric.display_name().to_lowercase()));
    }
    out.push('\n');

    out
}
