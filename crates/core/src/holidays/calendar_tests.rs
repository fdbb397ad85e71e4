//! Tests for the per-year holiday cache: memoization, retry-on-failure,
//! and at-most-once fetching.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::calendar::HolidayCalendar;
use super::errors::HolidayError;
use super::provider::HolidayProvider;

#[derive(Clone, Default)]
struct MockHolidayProvider {
    dates: Vec<String>,
    calls: Arc<Mutex<usize>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockHolidayProvider {
    fn with_dates(dates: &[&str]) -> Self {
        Self {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            ..Self::default()
        }
    }

    fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn set_fail_next(&self, fail: bool) {
        *self.fail_next.lock().unwrap() = fail;
    }
}

#[async_trait]
impl HolidayProvider for MockHolidayProvider {
    async fn fetch(&self, _year: i32) -> Result<Vec<String>, HolidayError> {
        *self.calls.lock().unwrap() += 1;
        if *self.fail_next.lock().unwrap() {
            return Err(HolidayError::Provider("upstream unavailable".into()));
        }
        Ok(self.dates.clone())
    }
}

#[tokio::test]
async fn cold_year_is_fetched_and_converted_to_a_set() {
    let provider = MockHolidayProvider::with_dates(&["2025-06-06", "2025-12-25"]);
    let calendar = HolidayCalendar::new(Arc::new(provider.clone()));

    let holidays = calendar.holidays_for(2025).await.unwrap();
    assert_eq!(holidays.len(), 2);
    assert!(holidays.contains("2025-06-06"));
    assert!(holidays.contains("2025-12-25"));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn warm_year_does_not_invoke_the_provider_again() {
    let provider = MockHolidayProvider::with_dates(&["2025-06-06"]);
    let calendar = HolidayCalendar::new(Arc::new(provider.clone()));

    calendar.holidays_for(2025).await.unwrap();
    calendar.holidays_for(2025).await.unwrap();
    calendar.holidays_for(2025).await.unwrap();

    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn each_year_is_cached_independently() {
    let provider = MockHolidayProvider::with_dates(&["2025-06-06"]);
    let calendar = HolidayCalendar::new(Arc::new(provider.clone()));

    calendar.holidays_for(2025).await.unwrap();
    calendar.holidays_for(2026).await.unwrap();
    calendar.holidays_for(2025).await.unwrap();
    calendar.holidays_for(2026).await.unwrap();

    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn failed_fetch_leaves_the_year_retryable() {
    let provider = MockHolidayProvider::with_dates(&["2025-06-06"]);
    let calendar = HolidayCalendar::new(Arc::new(provider.clone()));

    provider.set_fail_next(true);
    let err = calendar.holidays_for(2025).await.unwrap_err();
    assert!(matches!(err, HolidayError::Provider(_)));

    // The failure must not poison the cache with an empty set.
    provider.set_fail_next(false);
    let holidays = calendar.holidays_for(2025).await.unwrap();
    assert!(holidays.contains("2025-06-06"));
    assert_eq!(provider.call_count(), 2);
}

#[tokio::test]
async fn concurrent_cold_requests_fetch_at_most_once() {
    let provider = MockHolidayProvider::with_dates(&["2025-06-06"]);
    let calendar = Arc::new(HolidayCalendar::new(Arc::new(provider.clone())));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let calendar = Arc::clone(&calendar);
        handles.push(tokio::spawn(
            async move { calendar.holidays_for(2025).await },
        ));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(provider.call_count(), 1);
}
