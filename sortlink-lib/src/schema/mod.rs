//! Schema introspection
//!
//! Provides the `Schema` trait the sort resolver consults for attribute
//! names, identifier quoting and display labels, plus an in-memory
//! implementation for tests and static configurations.

mod memory;

pub use memory::*;

/// Trait for schema introspection providers.
///
/// Implementations describe the attributes of data entities and how their
/// identifiers are quoted by the backend. The sort resolver uses them to:
/// - Allow every known attribute when no explicit allow-list is declared
/// - Quote plain attribute references in ordering clauses
/// - Look up display labels for sort links
///
/// # Example
///
/// ```
/// use sortlink_lib::schema::{QuoteStyle, Schema, StaticSchema};
///
/// let schema = StaticSchema::new(QuoteStyle::Backtick)
///     .with_entity("post", ["id", "title", "created_at"]);
///
/// assert!(schema.has_attribute("post", "title"));
/// assert_eq!(schema.quote_column("title"), "`title`");
/// assert_eq!(schema.attribute_label("post", "created_at"), "Created At");
/// ```
pub trait Schema: Send + Sync {
    /// Returns every attribute name of an entity.
    fn attribute_names(&self, entity: &str) -> Vec<String>;

    /// Returns `true` if the entity has an attribute with exactly this name.
    fn has_attribute(&self, entity: &str, name: &str) -> bool {
        self.attribute_names(entity).iter().any(|n| n == name)
    }

    /// Quotes a column identifier.
    fn quote_column(&self, name: &str) -> String;

    /// Quotes a table or relation identifier.
    fn quote_relation(&self, name: &str) -> String;

    /// Returns the display label of an attribute.
    fn attribute_label(&self, entity: &str, name: &str) -> String;
}
