//! UK National Grid carbon-intensity API integration.

use chrono::NaiveDate;
use reqwest::blocking::Client;

use crate::domain::{DayData, PullConfig};
use crate::error::AppError;

/// Earliest date for which the API holds real data, found experimentally.
///
/// Dates at or before this boundary still answer HTTP 200 with a well-formed
/// `{"data": []}` body, so a pull can always start exactly here without
/// special-casing the horizon. Note this date falls during BST.
pub const EARLIEST_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2017, 9, 12) {
    Some(d) => d,
    None => panic!("invalid earliest supported date"),
};

/// Source of one calendar day's intensity data.
///
/// [`IntensityClient`] is the real implementation; tests substitute canned
/// responses to drive the pipeline without a network.
pub trait DaySource {
    fn fetch_day(&self, date: NaiveDate) -> Result<DayData, AppError>;
}

pub struct IntensityClient {
    client: Client,
    base_url: String,
}

impl IntensityClient {
    pub fn new(config: &PullConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::new(4, format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }
}

impl DaySource for IntensityClient {
    /// `GET {base_url}/intensity/date/{YYYY-MM-DD}`, JSON accept header, no
    /// query string. Emptiness of the returned `data` is never a failure;
    /// only transport, non-success status, and parse errors are.
    fn fetch_day(&self, date: NaiveDate) -> Result<DayData, AppError> {
        let url = format!("{}/intensity/date/{date}", self.base_url);

        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .map_err(|e| AppError::new(4, format!("Intensity request for {date} failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::new(
                4,
                format!(
                    "Intensity request for {date} failed with status {}.",
                    resp.status()
                ),
            ));
        }

        resp.json()
            .map_err(|e| AppError::new(4, format!("Invalid intensity response for {date}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earliest_date_is_the_known_horizon() {
        assert_eq!(EARLIEST_DATE, NaiveDate::from_ymd_opt(2017, 9, 12).unwrap());
    }

    #[test]
    fn day_url_uses_iso_date_path_segment() {
        // NaiveDate's Display is the ISO-8601 form the API expects.
        let date = NaiveDate::from_ymd_opt(2018, 1, 5).unwrap();
        let url = format!("{}/intensity/date/{date}", "https://example.test");
        assert_eq!(url, "https://example.test/intensity/date/2018-01-05");
    }
}
