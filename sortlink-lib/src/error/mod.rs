//! Error types

mod config;
mod order;

pub use config::*;
pub use order::*;

/// Top-level error for sort resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The sort configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An ordering clause could not be built.
    #[error(transparent)]
    Order(#[from] OrderError),
}
