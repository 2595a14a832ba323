use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] stocksutra_core::ConfigError),

    #[error("unknown preset '{choice}', expected one of: {available}")]
    UnknownPreset { choice: String, available: String },

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::UnknownPreset { .. } => 2,
            Self::Serialization(_) => 4,
            Self::TimeFormat(_) => 4,
            Self::Io(_) => 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_share_an_exit_code() {
        let config = CliError::from(stocksutra_core::ConfigError::InvalidBaseUrl {
            value: String::from("ftp://quotes"),
        });
        let preset = CliError::UnknownPreset {
            choice: String::from("9"),
            available: String::from("RELIANCE.NS"),
        };

        assert_eq!(config.exit_code(), 2);
        assert_eq!(preset.exit_code(), 2);
    }
}
