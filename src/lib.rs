//! Client for the ferien-api.de school vacation API.
//!
//! [`VacationClient`] blocks the calling thread for each request,
//! [`AsyncVacationClient`] runs on tokio. Both share the record conversion in
//! [`domain::model`] and the current/next lookups in [`core::temporal`].

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{ReqwestBlockingTransport, ReqwestTransport};
pub use config::ClientConfig;
pub use crate::core::{
    async_client::AsyncVacationClient,
    client::VacationClient,
    source::VacationSource,
    temporal::{find_current, find_next},
};
pub use domain::model::Vacation;
pub use domain::ports::{AsyncTransport, BlockingTransport};
pub use domain::state::{parse_state_code, state_codes, ALL_STATE_CODES};
pub use domain::time::{civil_now, IntoCivilTime, CIVIL_TIMEZONE};
pub use utils::error::{FerienError, Result};
