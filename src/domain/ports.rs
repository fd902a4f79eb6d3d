use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// One blocking GET returning the decoded JSON body.
///
/// Implementations must turn any non-200 answer into
/// [`FerienError::Transport`](crate::utils::error::FerienError::Transport).
pub trait BlockingTransport {
    fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Async counterpart of [`BlockingTransport`]; the round trip is a suspension point.
#[async_trait]
pub trait AsyncTransport: Send + Sync {
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

impl<T: BlockingTransport + ?Sized> BlockingTransport for &T {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        (**self).fetch_json(url)
    }
}

#[async_trait]
impl<T: AsyncTransport + ?Sized> AsyncTransport for std::sync::Arc<T> {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        (**self).fetch_json(url).await
    }
}
