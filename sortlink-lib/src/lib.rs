//! Sort state resolution and ordering clause translation
//!
//! Turns an encoded sort request such as `?sort=created.desc-title` into a
//! validated sort state, translates that state into a backend ordering
//! clause, and generates the links that toggle or extend it. Every requested
//! attribute is checked against an allow-list before it can reach a query.

pub mod error;
pub mod model;
pub mod render;
pub mod routing;
pub mod schema;

mod config;
mod sort;

pub use config::*;
pub use sort::*;
