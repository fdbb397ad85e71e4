//! Client for the dagsmart.se public holiday API.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use super::errors::HolidayError;
use super::provider::HolidayProvider;
use crate::constants::HOLIDAY_DATE_FORMAT;

const DEFAULT_BASE_URL: &str = "https://api.dagsmart.se";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Holiday provider backed by the dagsmart.se API.
#[derive(Clone)]
pub struct DagsmartProvider {
    client: Client,
    base_url: String,
}

/// One holiday item as returned by the API. The payload also carries a code
/// and bilingual names; only the date is of interest here.
#[derive(Deserialize)]
struct DagsmartItem {
    date: String,
}

impl DagsmartProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against a non-default endpoint, e.g. a test stub.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl Default for DagsmartProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HolidayProvider for DagsmartProvider {
    async fn fetch(&self, year: i32) -> Result<Vec<String>, HolidayError> {
        let url = format!("{}/holidays?weekends=false&year={}", self.base_url, year);
        debug!("fetching holidays for year {} from {}", year, url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(HolidayError::Provider(format!(
                "holiday request for {} failed with status {}",
                year,
                response.status()
            )));
        }

        let items: Vec<DagsmartItem> = response
            .json()
            .await
            .map_err(|e| HolidayError::Decode(e.to_string()))?;

        let dates: Vec<String> = items.into_iter().map(|item| item.date).collect();
        for date in &dates {
            if NaiveDate::parse_from_str(date, HOLIDAY_DATE_FORMAT).is_err() {
                return Err(HolidayError::InvalidDate(date.clone()));
            }
        }

        Ok(dates)
    }
}
