use async_trait::async_trait;
use desa_core::error::Result;
use desa_core::models::{Village, VillageCentroid};

/// Port for village record storage
#[async_trait]
pub trait VillageStore: Send + Sync {
    /// Store villages, replacing any record with the same id
    async fn store_villages(&self, villages: &[Village]) -> Result<()>;

    /// Retrieve a village by id
    async fn get_village(&self, id: &str) -> Result<Option<Village>>;

    /// List all villages in insertion order
    async fn list_villages(&self) -> Result<Vec<Village>>;

    /// Recorded centroids of every village, in insertion order
    async fn centroids(&self) -> Result<Vec<VillageCentroid>>;

    /// Number of stored villages
    async fn count(&self) -> Result<usize>;
}
