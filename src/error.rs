//! Errors raised while resolving a configuration.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    /// A content glob could not be parsed.
    #[error("invalid content pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A theme value does not have the category -> token -> [string] shape.
    #[error("malformed theme value at {}: {reason}", theme_location(.category, .token))]
    MalformedTheme { category: String, token: Option<String>, reason: String },

    /// The directory patterns are resolved against does not exist.
    #[error("content root is not a directory: {}", .root.display())]
    RootNotFound { root: PathBuf },
}

impl ResolveError {
    pub(crate) fn malformed(
        category: impl Into<String>,
        token: Option<&str>,
        reason: impl Into<String>,
    ) -> Self {
        ResolveError::MalformedTheme {
            category: category.into(),
            token: token.map(str::to_string),
            reason: reason.into(),
        }
    }
}

fn theme_location(category: &str, token: &Option<String>) -> String {
    match token {
        Some(token) => format!("{category}.{token}"),
        None => category.to_string(),
    }
}
