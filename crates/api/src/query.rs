//! Shared query parameter types for API handlers.

use patrika_core::locale::Lang;
use serde::Deserialize;

/// Default and maximum row counts for public listings.
pub const DEFAULT_LIST_LIMIT: i64 = 20;
pub const MAX_LIST_LIMIT: i64 = 50;

/// Language selector (`?lang=en|ne`), defaulting to English.
#[derive(Debug, Default, Deserialize)]
pub struct LangParam {
    #[serde(default)]
    pub lang: Lang,
}

/// Public listing parameters (`?lang=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub lang: Lang,
    pub limit: Option<i64>,
}

impl ListParams {
    /// Effective limit: the default when absent, clamped to the maximum.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        let default = ListParams::default();
        assert_eq!(default.limit(), DEFAULT_LIST_LIMIT);

        let oversized = ListParams {
            lang: Lang::En,
            limit: Some(500),
        };
        assert_eq!(oversized.limit(), MAX_LIST_LIMIT);

        let zero = ListParams {
            lang: Lang::En,
            limit: Some(0),
        };
        assert_eq!(zero.limit(), 1);
    }
}
