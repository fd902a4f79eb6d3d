//! Blocking facade: one call, one round trip, the calling thread waits.

use crate::adapters::http::ReqwestBlockingTransport;
use crate::config::ClientConfig;
use crate::core::convert::convert_response;
use crate::core::endpoints::Endpoints;
use crate::core::source::{Resolved, VacationSource};
use crate::core::temporal::{find_current, find_next, Finder};
use crate::domain::model::Vacation;
use crate::domain::ports::BlockingTransport;
use crate::domain::state::{parse_state_code, state_codes};
use crate::domain::time::civil_now;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::{DateTime, FixedOffset};
use std::fmt::Display;

#[derive(Debug, Clone)]
pub struct VacationClient<T: BlockingTransport = ReqwestBlockingTransport> {
    endpoints: Endpoints,
    transport: T,
}

impl VacationClient<ReqwestBlockingTransport> {
    /// Validates `config` and wires the reqwest blocking transport.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let endpoints = Endpoints::new(&config.base_url);
        Ok(Self {
            endpoints,
            transport: ReqwestBlockingTransport::new(config),
        })
    }
}

impl<T: BlockingTransport> VacationClient<T> {
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

    /// All vacations of all states in one request.
    pub fn all_vacations(&self) -> Result<Vec<Vacation>> {
        let response = self.transport.fetch_json(&self.endpoints.all())?;
        convert_response(response)
    }

    /// Vacations of one state, optionally restricted to `year`.
    pub fn state_vacations<S: Display + ?Sized>(
        &self,
        state_code: &S,
        year: Option<i32>,
    ) -> Result<Vec<Vacation>> {
        let state_code = parse_state_code(state_code)?;
        let url = self.endpoints.for_state(state_code, year);
        let vacations = convert_response(self.transport.fetch_json(&url)?)?;
        tracing::debug!("Fetched {} vacations for {}", vacations.len(), state_code);
        Ok(vacations)
    }

    /// The vacation active at `at` (default: now in civil time).
    pub fn current_vacation<'a>(
        &self,
        source: impl Into<VacationSource<'a>>,
        at: Option<DateTime<FixedOffset>>,
    ) -> Result<Option<Vacation>> {
        self.query(source.into(), at, find_current)
    }

    /// The first vacation starting at or after `at` (default: now in civil time).
    pub fn next_vacation<'a>(
        &self,
        source: impl Into<VacationSource<'a>>,
        at: Option<DateTime<FixedOffset>>,
    ) -> Result<Option<Vacation>> {
        self.query(source.into(), at, find_next)
    }

    fn query(
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
                let vacations = self.state_vacations(state_code, None)?;
                Ok(finder(&vacations, &at).cloned())
            }
        }
    }
}
