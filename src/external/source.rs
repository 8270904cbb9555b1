use async_trait::async_trait;

use crate::catalog::RoomCatalog;
use crate::error::AppResult;

/// Somewhere a complete snapshot of broadcasting rooms can be fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short platform name used in logs and errors
    fn platform(&self) -> &'static str;

    /// Fetch every currently broadcasting room in one request
    async fn fetch_catalog(&self) -> AppResult<RoomCatalog>;
}

/// Source serving a catalog that is already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub RoomCatalog);

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn platform(&self) -> &'static str {
        "static"
    }

    async fn fetch_catalog(&self) -> AppResult<RoomCatalog> {
        Ok(self.0.clone())
    }
}
