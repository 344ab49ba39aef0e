use std::sync::Arc;

use patrika_core::categories::CategoryRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: patrika_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Category route registry, built once at startup.
    pub registry: Arc<CategoryRegistry>,
}

/// State for handler tests. The pool is lazy and never connects, so only
/// code paths that stop short of a query may run against it.
#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use sqlx::postgres::PgPoolOptions;

    use crate::auth::jwt::JwtConfig;
    use crate::config::DEFAULT_MAX_UPLOAD_BYTES;

    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/patrika_test")
        .expect("lazy pool options are valid");

    AppState {
        pool,
        config: Arc::new(ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            cors_origins: Vec::new(),
            request_timeout_secs: 30,
            uploads_dir: std::path::PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            jwt: JwtConfig {
                secret: "test-secret".into(),
                access_token_expiry_mins: 15,
                refresh_token_expiry_days: 7,
            },
        }),
        registry: Arc::new(CategoryRegistry::builtin()),
    }
}
