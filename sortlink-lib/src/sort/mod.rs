//! Sort resolution.
//!
//! A [`Sort`] is a validated [`SortConfig`] bundled with its collaborators.
//! Resolving a request yields a [`SortState`], the immutable direction map
//! that both ordering clauses and sort links are derived from.
//!
//! # Example
//!
//! ```
//! use sortlink_lib::model::{Criteria, Direction};
//! use sortlink_lib::{Sort, SortConfig};
//!
//! let sort = Sort::new(
//!     SortConfig::default()
//!         .with_attribute("title")
//!         .with_attribute("created")
//!         .with_multi_sort(true),
//! )?;
//!
//! let state = sort.resolve_token(Some("created.desc-title-password"));
//! assert_eq!(state.direction_of("created"), Some(Direction::Desc));
//! assert_eq!(state.direction_of("password"), None);
//!
//! let mut criteria = Criteria::new().with_order("pinned DESC");
//! state.apply_order(&mut criteria)?;
//! assert_eq!(criteria.order(), "pinned DESC, created DESC, title");
//!
//! assert_eq!(state.url_for("title"), "?sort=title.desc-created.desc");
//! # Ok::<(), sortlink_lib::error::Error>(())
//! ```

mod clause;
mod link;
mod parse;

pub use parse::SortState;

use std::sync::Arc;

use crate::config::SortConfig;
use crate::error::ConfigError;
use crate::model::AttributeDefinition;
use crate::routing::QueryStringRouter;
use crate::routing::Router;
use crate::schema::Schema;

/// A validated sort declaration with its schema and routing collaborators.
#[derive(Clone)]
pub struct Sort {
    config: SortConfig,
    schema: Option<Arc<dyn Schema>>,
    router: Arc<dyn Router>,
}

impl Sort {
    /// Validates `config` and creates a sort without a schema.
    ///
    /// URLs are built by a [`QueryStringRouter`] until another router is set.
    pub fn new(config: SortConfig) -> Result<Self, ConfigError> {
        if let Err(e) = config.validate() {
            log::debug!("Rejected sort config: {}", e);
            return Err(e);
        }
        Ok(Self {
            config,
            schema: None,
            router: Arc::new(QueryStringRouter::default()),
        })
    }

    /// Sets the schema used for the allow-all sentinel, quoting and labels.
    pub fn with_schema(mut self, schema: Arc<dyn Schema>) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets the router used for sort URLs.
    pub fn with_router(mut self, router: Arc<dyn Router>) -> Self {
        self.router = router;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Returns the schema, if one is configured.
    pub fn schema(&self) -> Option<&dyn Schema> {
        self.schema.as_deref()
    }

    /// Resolves a public sort key against the allow-list.
    ///
    /// Returns `None` when the key is not sortable. Nothing that fails here
    /// may ever reach an ordering clause.
    ///
    /// - Declared keys resolve to their definition.
    /// - With an empty allow-list, or with
    ///   [`include_schema_attributes`](SortConfig::include_schema_attributes),
    ///   a literal attribute name of the configured entity resolves to itself.
    /// - Without a schema or entity, undeclared keys never resolve.
    pub fn resolve_attribute(&self, key: &str) -> Option<AttributeDefinition> {
        if let Some(definition) = self.config.attributes.get(key) {
            return Some(definition.clone());
        }
        if self.config.attributes.is_empty() || self.config.include_schema_attributes {
            return self.schema_attribute(key);
        }
        None
    }

    fn schema_attribute(&self, key: &str) -> Option<AttributeDefinition> {
        let schema = self.schema.as_deref()?;
        let entity = self.config.entity.as_deref()?;
        schema
            .has_attribute(entity, key)
            .then(|| AttributeDefinition::plain(key))
    }
}

impl std::fmt::Debug for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sort")
            .field("config", &self.config)
            .field("has_schema", &self.schema.is_some())
            .finish_non_exhaustive()
    }
}
