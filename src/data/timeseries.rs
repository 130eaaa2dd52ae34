//! Fetcher for the pomber/covid19 timeseries dataset.
//!
//! The remote document is a single JSON object mapping a country display
//! name to its chronologically ordered list of day records:
//!
//! ```json
//! { "Netherlands": [ { "date": "2020-1-22", "confirmed": 0, "deaths": 0, "recovered": 0 }, ... ] }
//! ```
//!
//! One blocking GET per run, no retries. Parsing and country lookup are free
//! functions so they can be unit-tested with fixture JSON.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::DayRecord;
use crate::error::AppError;

const DATASET_URL: &str = "https://pomber.github.io/covid19/timeseries.json";

/// A record as it appears on the wire.
///
/// Dates arrive as strings without zero padding (`"2020-1-22"`), so they are
/// converted to [`NaiveDate`] in a second step with a proper diagnostic.
#[derive(Debug, Deserialize)]
struct RawRecord {
    date: String,
    confirmed: u64,
    deaths: u64,
    recovered: u64,
}

type Document = BTreeMap<String, Vec<RawRecord>>;

pub struct CovidClient {
    client: Client,
    url: String,
}

impl CovidClient {
    pub fn new(timeout_secs: u64) -> Result<Self, AppError> {
        Self::with_url(DATASET_URL, timeout_secs)
    }

    /// Build a client against a non-default endpoint. Tests point this at a
    /// loopback server to exercise the HTTP status handling.
    fn with_url(url: impl Into<String>, timeout_secs: u64) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::data(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Fetch the full dataset and return the record list for `country`.
    pub fn fetch_country(&self, country: &str) -> Result<Vec<DayRecord>, AppError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| AppError::data(format!("Could not connect to the dataset API: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::data(format!(
                "Dataset request failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::data(format!("Failed to read dataset response: {e}")))?;

        let document = parse_document(&body)?;
        extract_country(&document, country)
    }
}

/// Parse the raw response body into the country → records map.
fn parse_document(body: &str) -> Result<Document, AppError> {
    serde_json::from_str(body)
        .map_err(|e| AppError::data(format!("Failed to parse dataset JSON: {e}")))
}

/// Pull one country's records out of the parsed document.
///
/// A missing key is an explicit error rather than a panic; when the only
/// problem is capitalization we suggest the dataset's spelling.
fn extract_country(document: &Document, country: &str) -> Result<Vec<DayRecord>, AppError> {
    let Some(raw) = document.get(country) else {
        if let Some(close) = document
            .keys()
            .find(|k| k.eq_ignore_ascii_case(country))
        {
            return Err(AppError::data(format!(
                "Country '{country}' not found in the dataset. Did you mean '{close}'?"
            )));
        }
        return Err(AppError::data(format!(
            "Country '{country}' not found in the dataset ({} countries available).",
            document.len()
        )));
    };

    let mut out = Vec::with_capacity(raw.len());
    for r in raw {
        out.push(convert_record(r)?);
    }
    Ok(out)
}

fn convert_record(raw: &RawRecord) -> Result<DayRecord, AppError> {
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d")
        .map_err(|e| AppError::data(format!("Invalid dataset date '{}': {e}", raw.date)))?;
    Ok(DayRecord {
        date,
        confirmed: raw.confirmed,
        deaths: raw.deaths,
        recovered: raw.recovered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "Netherlands": [
            { "date": "2020-1-22", "confirmed": 1, "deaths": 0, "recovered": 0 },
            { "date": "2020-1-23", "confirmed": 5, "deaths": 1, "recovered": 2 },
            { "date": "2020-1-24", "confirmed": 5, "deaths": 2, "recovered": 4 }
        ],
        "Belgium": []
    }"#;

    #[test]
    fn parses_document_and_extracts_country() {
        let document = parse_document(FIXTURE).unwrap();
        let records = extract_country(&document, "Netherlands").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].date,
            NaiveDate::from_ymd_opt(2020, 1, 22).unwrap()
        );
        assert_eq!(records[1].confirmed, 5);
        assert_eq!(records[2].deaths, 2);
        assert_eq!(records[2].recovered, 4);
    }

    #[test]
    fn empty_country_yields_empty_records() {
        let document = parse_document(FIXTURE).unwrap();
        let records = extract_country(&document, "Belgium").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn unknown_country_is_a_reported_error() {
        let document = parse_document(FIXTURE).unwrap();
        let err = extract_country(&document, "Atlantis").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("'Atlantis'"));
    }

    #[test]
    fn unknown_country_suggests_case_insensitive_match() {
        let document = parse_document(FIXTURE).unwrap();
        let err = extract_country(&document, "netherlands").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'Netherlands'?"));
    }

    #[test]
    fn malformed_date_is_a_reported_error() {
        let body = r#"{ "X": [ { "date": "not-a-date", "confirmed": 0, "deaths": 0, "recovered": 0 } ] }"#;
        let document = parse_document(body).unwrap();
        let err = extract_country(&document, "X").unwrap_err();
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn malformed_body_is_a_reported_error() {
        let err = parse_document("not json").unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn non_ok_status_is_a_reported_error() {
        use std::io::{Read, Write};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            );
        });

        let client = CovidClient::with_url(format!("http://{addr}/timeseries.json"), 5).unwrap();
        let err = client.fetch_country("Netherlands").unwrap_err();
        assert_eq!(err.exit_code(), 4);
        assert!(err.to_string().contains("500"));

        server.join().unwrap();
    }
}
