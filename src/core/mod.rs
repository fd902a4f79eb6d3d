pub mod async_client;
pub mod client;
pub mod convert;
pub mod endpoints;
pub mod source;
pub mod temporal;

pub use crate::domain::model::Vacation;
pub use crate::domain::ports::{AsyncTransport, BlockingTransport};
pub use crate::utils::error::Result;
