//! Error types for query construction.
//!
//! All invalid mutation arguments are rejected at call time with
//! [`Error::Configuration`]; serialization itself never fails. Facet
//! lookup misses are recoverable via [`Error::UnknownQueryFacet`].

use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or inspecting a query
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Invalid mutation argument (bad page size, malformed coordinates, ...)
    #[error("invalid query configuration: {message}")]
    Configuration { message: String },

    /// `query_facet` lookup on a name that was never registered
    #[error("no query facet registered under name `{name}`")]
    UnknownQueryFacet { name: String },
}

impl Error {
    /// Build a configuration error from any displayable message
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }
}
