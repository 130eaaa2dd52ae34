//! Shared domain types.
//!
//! These are intentionally lightweight: everything is transient, held only
//! for the duration of one run, and nothing is persisted.

use std::path::PathBuf;

use chrono::NaiveDate;

/// One day's case-count observation for a country, in feed order.
///
/// The remote feed guarantees chronological order; we rely on that ordering
/// and never re-sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    /// Cumulative confirmed infections up to and including this day.
    pub confirmed: u64,
    /// Cumulative deaths up to and including this day.
    pub deaths: u64,
    /// Cumulative recoveries up to and including this day.
    pub recovered: u64,
}

/// The three tracked case-count metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Confirmed,
    Deaths,
    Recovered,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Confirmed, Metric::Deaths, Metric::Recovered];

    /// Human-readable label for chart captions and the summary.
    pub fn display_name(self) -> &'static str {
        match self {
            Metric::Confirmed => "Confirmed",
            Metric::Deaths => "Deaths",
            Metric::Recovered => "Recovered",
        }
    }
}

/// Derived plot series for one country.
///
/// All vectors are parallel and share one length; `day_index[i] == i`.
/// Daily deltas are signed: the upstream source occasionally issues downward
/// corrections, which pass through as negative values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySeries {
    pub day_index: Vec<usize>,

    pub confirmed: Vec<u64>,
    pub deaths: Vec<u64>,
    pub recovered: Vec<u64>,

    pub new_confirmed: Vec<i64>,
    pub new_deaths: Vec<i64>,
    pub new_recovered: Vec<i64>,
}

impl CountrySeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            day_index: Vec::with_capacity(n),
            confirmed: Vec::with_capacity(n),
            deaths: Vec::with_capacity(n),
            recovered: Vec::with_capacity(n),
            new_confirmed: Vec::with_capacity(n),
            new_deaths: Vec::with_capacity(n),
            new_recovered: Vec::with_capacity(n),
        }
    }

    pub fn len(&self) -> usize {
        self.day_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day_index.is_empty()
    }

    /// Cumulative values for one metric.
    pub fn cumulative(&self, metric: Metric) -> &[u64] {
        match metric {
            Metric::Confirmed => &self.confirmed,
            Metric::Deaths => &self.deaths,
            Metric::Recovered => &self.recovered,
        }
    }

    /// Day-over-day deltas for one metric.
    pub fn daily(&self, metric: Metric) -> &[i64] {
        match metric {
            Metric::Confirmed => &self.new_confirmed,
            Metric::Deaths => &self.new_deaths,
            Metric::Recovered => &self.new_recovered,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// Derived from CLI flags (plus defaults); passed explicitly instead of
/// living in module-level state so the pipeline is testable.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub country: String,
    pub export: Option<PathBuf>,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    /// HTTP timeout in seconds for the dataset fetch.
    pub timeout_secs: u64,
}
