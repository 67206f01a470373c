//! Holiday database operations

use async_trait::async_trait;
use shared::models::{Holiday, HolidayCreate};

use crate::db::{MySqlStore, StoreResult};

#[async_trait]
pub trait HolidayRepository: Send + Sync {
    async fn create_holiday(&self, data: &HolidayCreate) -> StoreResult<()>;

    async fn list_holidays(&self) -> StoreResult<Vec<Holiday>>;
}

#[async_trait]
impl HolidayRepository for MySqlStore {
    async fn create_holiday(&self, data: &HolidayCreate) -> StoreResult<()> {
        sqlx::query("INSERT INTO holidays (holiday_name, holiday_date) VALUES (?, ?)")
            .bind(&data.holiday_name)
            .bind(&data.holiday_date)
            .execute(self.pool())
            .await?;
        Ok(())
    }

    async fn list_holidays(&self) -> StoreResult<Vec<Holiday>> {
        let holidays: Vec<Holiday> =
            sqlx::query_as("SELECT id, holiday_name, holiday_date FROM holidays")
                .fetch_all(self.pool())
                .await?;
        Ok(holidays)
    }
}
