use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sk_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sk_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] sk_auth::AuthError),

    #[error("IO error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
