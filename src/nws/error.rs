use thiserror::Error;

#[derive(Debug, Error)]
pub enum NwsError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse JSON data from {url}")]
    JsonParse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing expected field '{field}' in response from {url}")]
    MissingField { url: String, field: &'static str },

    #[error("Malformed period timestamp '{value}'")]
    BadTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
