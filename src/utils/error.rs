use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned error status: {status}")]
    HttpStatusError { status: reqwest::StatusCode },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    /// The single failure kind crossing the fetcher boundary. The underlying
    /// cause is logged, never carried in the message.
    #[error("Failed to load chart data. Please try again later.")]
    FetchFailed,
}

pub type Result<T> = std::result::Result<T, ChartError>;
