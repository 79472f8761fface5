use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;
use crate::search::SearchQuery;

/// Typed access to the resource store backing the server.
///
/// Implementations are supplied by the host; this crate only consumes them.
/// All calls block the caller until the store answers.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Search resources of one type. The full result set is materialized
    /// before the call returns.
    async fn search(&self, resource_type: &str, query: &SearchQuery) -> Result<Vec<Value>>;

    /// Read the current version of a resource. Fails with
    /// [`FhirError::NotFound`](crate::error::FhirError::NotFound) when the
    /// resource does not exist.
    async fn read(&self, resource_type: &str, id: &str) -> Result<Value>;

    /// Create a new resource, returning the stored content.
    async fn create(&self, content: &Value) -> Result<Value>;

    /// Replace an existing resource, returning the stored content.
    async fn update(&self, content: &Value) -> Result<Value>;
}

/// Search parameter registry of the store's indexing subsystem.
#[async_trait]
pub trait SearchParamRegistry: Send + Sync {
    /// Force the registry to reload its parameter definitions.
    async fn force_refresh(&self) -> Result<()>;
}
