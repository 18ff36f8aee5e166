//! Error types for query construction, transport, and extraction.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the bout query pipeline.
///
/// Construction errors are raised before any network access; extraction
/// errors abort the whole multi-page operation with no partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// Division alias not in the alias table
    #[error("'{alias}' is not recognized as a division")]
    UnknownDivision { alias: String },

    /// Rikishi filter key not in the attribute set
    #[error("'{key}' is not a recognized attribute for rikishi {slot}")]
    UnknownAttribute { slot: u8, key: String },

    /// Rikishi filter value of the wrong kind for its key
    #[error("{key} for rikishi {slot} must be {expected}")]
    AttributeType {
        slot: u8,
        key: String,
        expected: &'static str,
    },

    /// Attribute with no known wire encoding
    #[error("the {key} filter for rikishi {slot} is not supported")]
    UnsupportedAttribute { slot: u8, key: String },

    /// URL does not target the bout query endpoint
    #[error("url must target the bout query endpoint with show_form=0, got '{url}'")]
    EndpointMismatch { url: String },

    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by the transport collaborator
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),

    /// Result table row that does not match the expected shape
    #[error("bout table row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// Page past offset 0 carried no result table
    #[error("result table missing from page at offset {offset}")]
    MissingTable { offset: usize },
}
