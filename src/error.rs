//! Errors surfaced by the execution methods.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The engine rejected the rendered pattern.
    #[error("invalid pattern `{pattern}`: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// The engine failed while matching, e.g. by exceeding its backtrack limit.
    #[error("matching failed: {0}")]
    Match(#[from] fancy_regex::Error),

    /// A replacement callback returned an error.
    #[error("replacement callback failed: {0}")]
    Callback(#[source] anyhow::Error),
}
