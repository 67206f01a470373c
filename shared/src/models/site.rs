//! Site Model

use serde::{Deserialize, Serialize};

use super::required::{MissingFields, RequiredFields};
use super::serde_helpers::lenient_text;

/// Work site (`sites` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Site {
    pub id: i64,
    pub name: Option<String>,
}

/// Create site payload, as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteCreate {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
}

/// Create site payload with a non-empty name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSite {
    pub name: String,
}

impl SiteCreate {
    pub fn validate(self) -> Result<NewSite, MissingFields> {
        let mut required = RequiredFields::default();
        let site = NewSite {
            name: required.text("name", self.name),
        };
        required.finish(site)
    }
}
