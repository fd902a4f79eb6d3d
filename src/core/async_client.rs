//! Async facade. The HTTP round trip is the suspension point and record
//! conversion yields after every item, so other tasks on the same runtime
//! keep running while a large response is converted.

use crate::adapters::http::ReqwestTransport;
use crate::config::ClientConfig;
use crate::core::convert::convert_response_async;
use crate::core::endpoints::Endpoints;
use crate::core::source::{Resolved, VacationSource};
use crate::core::temporal::{find_current, find_next, Finder};
use crate::domain::model::Vacation;
use crate::domain::ports::AsyncTransport;
use crate::domain::state::{parse_state_code, state_codes};
use crate::domain::time::civil_now;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, FixedOffset};
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct AsyncVacationClient<T: AsyncTransport = ReqwestTransport> {
    endpoints: Endpoints,
    transport: T,
}

impl AsyncVacationClient<ReqwestTransport> {
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let endpoints = Endpoints::new(&config.base_url);
        Ok(Self {
            endpoints,
            transport: ReqwestTransport::new(config),
        })
    }
}

impl<T: AsyncTransport> AsyncVacationClient<T> {
    pub fn new(base_url: &str, transport: T) -> Self {
        Self {
            endpoints: Endpoints::new(base_url),
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn state_codes(&self) -> &'static [&'static str] {
        state_codes()
    }

    pub async fn all_vacations(&self) -> Result<Vec<Vacation>> {
        let response = self.transport.fetch_json(&self.endpoints.all()).await?;
        convert_response_async(response).await
    }

    pub async fn state_vacations<S: Display + Sync + ?Sized>(
        &self,
        state_code: &S,
        year: Option<i32>,
    ) -> Result<Vec<Vacation>> {
        let state_code = parse_state_code(state_code)?;
        let url = self.endpoints.for_state(state_code, year);
        let response = self.transport.fetch_json(&url).await?;
        let vacations = convert_response_async(response).await?;
        tracing::debug!("Fetched {} vacations for {}", vacations.len(), state_code);
        Ok(vacations)
    }

    pub async fn current_vacation<'a>(
        &self,
        source: impl Into<VacationSource<'a>>,
        at: Option<DateTime<FixedOffset>>,
    ) -> Result<Option<Vacation>> {
        self.query(source.into(), at, find_current).await
    }

    pub async fn next_vacation<'a>(
        &self,
        source: impl Into<VacationSource<'a>>,
        at: Option<DateTime<FixedOffset>>,
    ) -> Result<Option<Vacation>> {
        self.query(source.into(), at, find_next).await
    }

    async fn query(
        &self,
        source: VacationSource<'_>,
        at: Option<DateTime<FixedOffset>>,
        finder: Finder,
    ) -> Result<Option<Vacation>> {
        let resolved = source.resolve()?;
        let at = at.unwrap_or_else(civil_now);
        match resolved {
            Resolved::Use(vacations) => Ok(finder(vacations, &at).cloned()),
            Resolved::Fetch(state_code) => {
                let vacations = self.state_vacations(state_code, None).await?;
                Ok(finder(&vacations, &at).cloned())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::convert::convert_response;
    use crate::domain::time::IntoCivilTime;
    use crate::utils::error::FerienError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct StubTransport {
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl StubTransport {
        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AsyncTransport for StubTransport {
        async fn fetch_json(&self, url: &str) -> Result<Value> {
            self.requested.lock().unwrap().push(url.to_string());
            Ok(json!([
                {"start": "2017-01-29T00:00", "end": "2017-01-31T00:00", "year": 2017,
                 "stateCode": "HB", "name": "winterferien", "slug": "winterferien-2017-HB"},
                {"start": "2017-04-09T00:00", "end": "2017-04-22T00:00", "year": 2017,
                 "stateCode": "HB", "name": "osterferien", "slug": "osterferien-2017-HB"}
            ]))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<DateTime<FixedOffset>> {
        Some(NaiveDate::from_ymd_opt(y, m, d).unwrap().into_civil_time())
    }

    #[tokio::test]
    async fn test_state_vacations_by_year() {
        let transport = StubTransport::default();
        let client = AsyncVacationClient::new("http://api.test/", transport.clone());

        let vacations = client.state_vacations("HB", Some(2017)).await.unwrap();
        assert_eq!(vacations.len(), 2);
        assert_eq!(transport.requested(), vec!["http://api.test/holidays/HB/2017"]);
    }

    #[tokio::test]
    async fn test_unknown_state_is_rejected_before_request() {
        let transport = StubTransport::default();
        let client = AsyncVacationClient::new("http://api.test", transport.clone());

        let err = client.state_vacations("UKW", None).await.unwrap_err();
        assert!(matches!(err, FerienError::InvalidArgument { .. }));
        assert!(transport.requested().is_empty());
    }

    #[tokio::test]
    async fn test_current_and_next_by_state() {
        let client = AsyncVacationClient::new("http://api.test", StubTransport::default());

        let current = client.current_vacation("HB", date(2017, 1, 30)).await.unwrap();
        assert_eq!(current.unwrap().name, "winterferien");

        let next = client.next_vacation("HB", date(2017, 2, 1)).await.unwrap();
        assert_eq!(next.unwrap().name, "osterferien");

        let none = client.next_vacation("HB", date(2017, 5, 1)).await.unwrap();
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn test_current_vacation_from_list_makes_no_request() {
        let transport = StubTransport::default();
        let vacations = convert_response(transport.fetch_json("seed").await.unwrap()).unwrap();
        transport.requested.lock().unwrap().clear();
        let client = AsyncVacationClient::new("http://api.test", transport.clone());

        let current = client.current_vacation(&vacations, date(2017, 1, 30)).await.unwrap();
        assert_eq!(current.as_ref(), Some(&vacations[0]));
        let next = client.next_vacation(&vacations, date(2017, 2, 1)).await.unwrap();
        assert_eq!(next.as_ref(), Some(&vacations[1]));
        assert!(client
            .current_vacation(&vacations, date(2017, 1, 1))
            .await
            .unwrap()
            .is_none());
        assert!(transport.requested().is_empty());
    }

    #[tokio::test]
    async fn test_empty_list_falls_back_to_state() {
        let transport = StubTransport::default();
        let client = AsyncVacationClient::new("http://api.test", transport.clone());
        let source = VacationSource::Both {
            state_code: "HB",
            vacations: &[],
        };

        let next = client.next_vacation(source, date(2017, 2, 1)).await.unwrap().unwrap();
        assert_eq!(next.name, "osterferien");
        assert_eq!(transport.requested(), vec!["http://api.test/holidays/HB"]);
    }

    #[tokio::test]
    async fn test_missing_source_is_rejected() {
        let client = AsyncVacationClient::new("http://api.test", StubTransport::default());
        let err = client
            .current_vacation(VacationSource::Vacations(&[]), None)
            .await
            .unwrap_err();
        assert!(matches!(err, FerienError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_state_fetches() {
        let transport = StubTransport::default();
        let client = Arc::new(AsyncVacationClient::new("http://api.test", transport.clone()));

        let mut tasks = tokio::task::JoinSet::new();
        for code in ["HH", "SH", "BE", "BB"] {
            let client = Arc::clone(&client);
            tasks.spawn(async move { client.state_vacations(code, Some(2019)).await });
        }
        while let Some(result) = tasks.join_next().await {
            assert_eq!(result.unwrap().unwrap().len(), 2);
        }

        let mut requested = transport.requested();
        requested.sort();
        assert_eq!(requested.len(), 4);
        assert_eq!(requested[0], "http://api.test/holidays/BB/2019");
    }
}
