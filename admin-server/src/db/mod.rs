//! Data access layer
//!
//! The only code allowed to issue statements against the relational store.
//! Every operation is a single positional-parameter statement; nothing here
//! builds SQL from request data.

pub mod repository;

pub use repository::{
    AttendanceRepository, EmployeeRepository, HolidayRepository, NoticeRepository,
    SalaryRepository, SiteRepository,
};

use async_trait::async_trait;
use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use thiserror::Error;

use crate::core::config::DatabaseConfig;

/// Data access errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failure reported by the MySQL driver
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// Failure reported by any other backend
    #[error("{0}")]
    Backend(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Every repository the HTTP surface needs, behind one object
#[async_trait]
pub trait Store:
    EmployeeRepository
    + SiteRepository
    + HolidayRepository
    + NoticeRepository
    + AttendanceRepository
    + SalaryRepository
    + Send
    + Sync
{
    /// Release backend resources once the server has stopped
    async fn close(&self) {}
}

/// MySQL-backed store
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Open the connection pool and check that the server answers
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.connect_options())
            .await?;
        tracing::info!(
            host = %config.host,
            database = %config.name,
            max_connections = config.max_connections,
            "Connected to MySQL"
        );
        Ok(Self { pool })
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl Store for MySqlStore {
    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("MySQL pool closed");
    }
}
