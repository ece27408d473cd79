//! Ordering clause error types

/// Errors that can occur while translating a sort state into an ordering clause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    /// A virtual attribute is missing its ascending or descending expression.
    #[error("Virtual attribute '{attribute}' must specify both 'asc' and 'desc' expressions")]
    IncompleteVirtual { attribute: String },
}

impl OrderError {
    /// Creates a new incomplete virtual attribute error.
    pub fn incomplete_virtual(attribute: impl Into<String>) -> Self {
        Self::IncompleteVirtual {
            attribute: attribute.into(),
        }
    }

    /// Returns the attribute key the error refers to.
    pub fn attribute(&self) -> &str {
        match self {
            Self::IncompleteVirtual { attribute } => attribute,
        }
    }
}
