use thiserror::Error;

/// Message shown when the user submits a blank symbol.
pub const EMPTY_SYMBOL_MESSAGE: &str = "please enter a stock symbol";

/// Message shown when the provider could not be reached or answered garbage.
pub const NETWORK_FAILURE_MESSAGE: &str = "could not fetch stock data";

/// Local validation errors. These never reach the network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("please enter a stock symbol")]
    EmptySymbol,
}

/// Failure of a single quote or chart fetch.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The provider answered 404 with a structured error body.
    #[error("not found: {message}")]
    NotFound { message: String },

    /// The provider answered with a structured `{"error": ...}` body.
    #[error("provider error (status {status}): {message}")]
    Provider { status: u16, message: String },

    /// Transport failure, unexpected status, or a body that could not be decoded.
    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    /// Text surfaced to the user through `RequestState::error`.
    ///
    /// Provider messages are passed through verbatim; transport failures carry no
    /// structured detail worth showing, so they collapse to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { message } | Self::Provider { message, .. } => message.clone(),
            Self::Network(_) => String::from(NETWORK_FAILURE_MESSAGE),
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "fetch.not_found",
            Self::Provider { .. } => "fetch.provider",
            Self::Network(_) => "fetch.network",
        }
    }
}

/// Invalid configuration values, from the environment or the command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base url must start with http:// or https://: '{value}'")]
    InvalidBaseUrl { value: String },

    #[error("{name} must be a positive integer: '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}
