//! Site database operations

use async_trait::async_trait;
use shared::models::{NewSite, Site};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait SiteRepository: Send + Sync {
    async fn create_site(&self, data: &NewSite) -> StoreResult<()>;

    async fn list_sites(&self) -> StoreResult<Vec<Site>>;

    /// Deleting a missing id is not an error
    async fn delete_site(&self, id: i64) -> StoreResult<()>;
}

#[async_trait]
impl SiteRepository for MySqlStore {
    async fn create_site(&self, data: &NewSite) -> StoreResult<()> {
        sqlx::query("INSERT INTO sites (name) VALUES (?)")
            .bind(&data.name)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn list_sites(&self) -> StoreResult<Vec<Site>> {
        let sites: Vec<Site> = sqlx::query_as("SELECT id, name FROM sites")
            .fetch_all(self.pool())
            .await?;
        Ok(sites)
    }

    async fn delete_site(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM sites WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
