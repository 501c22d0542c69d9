use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum HeadlessError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("GraphQL errors: {0}")]
    Graphql(String),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Cache purge failed: {0}")]
    PurgeError(String),
}

impl From<reqwest::Error> for HeadlessError {
    fn from(err: reqwest::Error) -> Self {
        HeadlessError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for HeadlessError {
    fn from(err: serde_json::Error) -> Self {
        HeadlessError::Transport(err.to_string())
    }
}
