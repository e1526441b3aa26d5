//! Shell-specific error types.
//!
//! Services report failures through these variants; none of them is fatal to
//! the chrome. Failed suggestion queries degrade to an empty list and failed
//! loads surface on the page itself.

use thiserror::Error;

/// Errors produced by the chrome's background services.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShellError {
    /// A history query could not be completed.
    #[error("History query failed: {reason}")]
    HistoryQuery {
        /// Description of what went wrong.
        reason: String,
    },

    /// A search-completion query could not be completed.
    #[error("Search query failed: {reason}")]
    SearchQuery {
        /// Description of what went wrong.
        reason: String,
    },

    /// A page load failed.
    #[error("Failed to load {url}: {reason}")]
    Load {
        /// The URL that failed to load.
        url: String,
        /// Description of what went wrong.
        reason: String,
    },
}

impl ShellError {
    /// Create a history query error from any error source.
    pub fn history_query(err: impl std::fmt::Display) -> Self {
        Self::HistoryQuery {
            reason: err.to_string(),
        }
    }

    /// Create a search query error from any error source.
    pub fn search_query(err: impl std::fmt::Display) -> Self {
        Self::SearchQuery {
            reason: err.to_string(),
        }
    }

    /// Create a load error.
    pub fn load(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Load {
            url: url.into(),
            reason: err.to_string(),
        }
    }
}
