//! Configuration error types

/// Errors raised while validating a [`SortConfig`](crate::SortConfig).
///
/// These are developer mistakes in the sort declaration, never the result of
/// user input, so they surface when the [`Sort`](crate::Sort) is built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Attribute and direction separators are the same character.
    #[error("Attribute and direction separators must differ (both '{separator}')")]
    SameSeparators { separator: char },

    /// A declared attribute key contains one of the separators.
    #[error("Attribute key '{key}' contains separator '{separator}'")]
    SeparatorInKey { key: String, separator: char },

    /// A declared attribute key is empty.
    #[error("Attribute keys must not be empty")]
    EmptyKey,

    /// The descending tag is empty or collides with the attribute separator.
    #[error("Invalid descending tag '{tag}'")]
    InvalidDescendingTag { tag: String },

    /// The sort parameter name is empty.
    #[error("Sort parameter name must not be empty")]
    EmptySortParam,
}

impl ConfigError {
    /// Creates a new separator-in-key error.
    pub fn separator_in_key(key: impl Into<String>, separator: char) -> Self {
        Self::SeparatorInKey {
            key: key.into(),
            separator,
        }
    }

    /// Creates a new invalid descending tag error.
    pub fn invalid_descending_tag(tag: impl Into<String>) -> Self {
        Self::InvalidDescendingTag { tag: tag.into() }
    }
}
