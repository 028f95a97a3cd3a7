use async_trait::async_trait;

use super::error::ResolveError;
use crate::core::http::FetchContext;
use crate::models::media::Media;

/// Resolves an opaque provider embed URL down to final stream URLs.
///
/// Implementations are stateless apart from the injected HTTP client;
/// independent calls may run concurrently.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    fn name(&self) -> &'static str;

    fn can_handle(&self, url: &str) -> bool;

    async fn resolve(&self, url: &str, ctx: &FetchContext) -> Result<Media, ResolveError>;
}
