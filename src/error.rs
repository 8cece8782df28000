//! Error types for the ghreport CLI

use std::time::Duration;
use thiserror::Error;

/// Result type alias for ghreport operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

/// API-related errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Run `ghreport init` to set up your access token.")]
    Unauthorized,

    #[error("Access denied. The token may be missing a required scope for this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("GraphQL query failed: {0}")]
    GraphQl(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `ghreport init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Access token not configured. Run `ghreport init` to set up your token.")]
    MissingToken,

    #[error("Organization not configured. Pass --org or run `ghreport init` to set a default.")]
    MissingOrg,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("ghreport init"));
    }

    #[test]
    fn test_api_error_forbidden_message() {
        let err = ApiError::Forbidden;
        assert!(err.to_string().contains("scope"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("orgs/acme/migrations/42".to_string());
        assert!(err.to_string().contains("migrations/42"));
    }

    #[test]
    fn test_api_error_rate_limit() {
        let err = ApiError::RateLimit(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("Rate limit"));
        assert!(msg.contains("30"));
    }

    #[test]
    fn test_api_error_graphql() {
        let err = ApiError::GraphQl("Field 'packages' doesn't exist".to_string());
        assert!(err.to_string().contains("packages"));
    }

    #[test]
    fn test_config_error_missing_token() {
        let err = ConfigError::MissingToken;
        assert!(err.to_string().contains("ghreport init"));
    }

    #[test]
    fn test_config_error_missing_org() {
        let err = ConfigError::MissingOrg;
        assert!(err.to_string().contains("--org"));
    }

    #[test]
    fn test_error_from_api_error() {
        let api_err = ApiError::Unauthorized;
        let err: Error = api_err.into();

        match err {
            Error::Api(ApiError::Unauthorized) => (),
            _ => panic!("Expected Error::Api(ApiError::Unauthorized)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::NotFound;
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
