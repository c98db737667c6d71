use leptos::prelude::ServerFnError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    #[error("not configured: {0}")]
    NotConfigured(&'static str),
}

impl AppError {
    /// Logs the error and converts it for return from a server function.
    pub fn into_server_fn_error(self) -> ServerFnError {
        tracing::error!(error = %self, "server function failed");
        ServerFnError::new(self.to_string())
    }
}
