use async_trait::async_trait;

use crate::Result;

/// Raw HTTP transport consumed by the fetcher. Implementations own their
/// client configuration (header profile, timeout); a non-2xx status is an
/// error, not a body.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issues one GET request and returns the response body.
    async fn get(&self, url: &str) -> Result<String>;
}
