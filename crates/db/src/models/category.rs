//! Category entity model.

use patrika_core::locale::{localized, Lang};
use patrika_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub slug: String,
    pub name_en: String,
    pub name_ne: Option<String>,
    pub created_at: Timestamp,
}

impl Category {
    pub fn name(&self, lang: Lang) -> &str {
        localized(lang, Some(&self.name_en), self.name_ne.as_deref())
    }
}

/// The nested category projection carried by post listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRef {
    pub slug: String,
    pub name_en: String,
    pub name_ne: Option<String>,
}

impl CategoryRef {
    pub fn name(&self, lang: Lang) -> &str {
        localized(lang, Some(&self.name_en), self.name_ne.as_deref())
    }
}
