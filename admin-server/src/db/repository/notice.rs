//! Notice database operations

use async_trait::async_trait;
use shared::models::{Notice, NoticeConfirmation, NoticeCreate};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait NoticeRepository: Send + Sync {
    async fn create_notice(&self, data: &NoticeCreate) -> StoreResult<()>;

    /// Newest first
    async fn list_notices(&self) -> StoreResult<Vec<Notice>>;

    /// Deleting a missing id is not an error
    async fn delete_notice(&self, id: i64) -> StoreResult<()>;

    async fn list_confirmations(&self, notice_id: i64) -> StoreResult<Vec<NoticeConfirmation>>;
}

#[async_trait]
impl NoticeRepository for MySqlStore {
    async fn create_notice(&self, data: &NoticeCreate) -> StoreResult<()> {
        sqlx::query("INSERT INTO notices (text) VALUES (?)")
            .bind(&data.text)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn list_notices(&self) -> StoreResult<Vec<Notice>> {
        let notices: Vec<Notice> =
            sqlx::query_as("SELECT id, text, timestamp FROM notices ORDER BY timestamp DESC")
                .fetch_all(self.pool())
                .await?;
        Ok(notices)
    }

    async fn delete_notice(&self, id: i64) -> StoreResult<()> {
        sqlx::query("DELETE FROM notices WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn list_confirmations(&self, notice_id: i64) -> StoreResult<Vec<NoticeConfirmation>> {
        let confirmations: Vec<NoticeConfirmation> = sqlx::query_as(
            r#"
            SELECT employee_username, confirmed_at
            FROM notice_confirmations
            WHERE notice_id = ?
            "#,
        )
        .bind(notice_id)
        .fetch_all(self.pool())
        .await?;
        Ok(confirmations)
    }
}
