//! Shared application state

use std::path::PathBuf;
use std::sync::Arc;

use crate::auth::SessionTokens;
use crate::db::{MySqlStore, Store};

use super::{Config, ServerError};

/// State handed to every handler
///
/// Built once at startup from [`Config`]; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: SessionTokens,
    /// Static root served under `/uploads`
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: SessionTokens, uploads_dir: PathBuf) -> Self {
        Self {
            store,
            tokens,
            uploads_dir,
        }
    }

    /// Connect to MySQL and assemble the state
    ///
    /// A failed connection is returned to the caller, which aborts startup.
    pub async fn initialize(config: &Config) -> Result<Self, ServerError> {
        let store = MySqlStore::connect(&config.database).await?;
        Ok(Self::new(
            Arc::new(store),
            SessionTokens::new(&config.jwt_secret),
            config.uploads_dir.clone(),
        ))
    }
}
