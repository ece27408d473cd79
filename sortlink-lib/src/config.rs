//! Sort configuration

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::model::AttributeDefinition;
use crate::model::Params;
use crate::model::VirtualAttribute;

/// Declarative configuration of what can be sorted and how sort state is
/// encoded in request URLs.
///
/// # Example
///
/// ```
/// use sortlink_lib::SortConfig;
/// use sortlink_lib::model::VirtualAttribute;
///
/// let config = SortConfig::default()
///     .with_attribute("id")
///     .with_alias("author", "author.name")
///     .with_virtual(
///         "name",
///         VirtualAttribute::new("first, last", "first DESC, last DESC").with_label("Name"),
///     )
///     .with_multi_sort(true)
///     .with_default_order("id DESC");
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Entity whose schema supplies attribute names, quoting and labels.
    pub entity: Option<String>,

    /// Allow-list of sortable keys.
    ///
    /// Empty means every attribute of `entity` known to the schema is
    /// sortable by its own name.
    pub attributes: IndexMap<String, AttributeDefinition>,

    /// Also allow schema attributes that are not declared in `attributes`.
    pub include_schema_attributes: bool,

    /// Whether several attributes can be sorted at once.
    ///
    /// Default: false
    pub multi_sort: bool,

    /// Name of the query parameter carrying the sort token.
    ///
    /// Default: "sort"
    pub sort_param: String,

    /// Tag marking an attribute as descending.
    ///
    /// Default: "desc"
    pub descending_tag: String,

    /// Separator between attributes in a sort token.
    ///
    /// Default: '-'
    pub attribute_separator: char,

    /// Separator between an attribute and its direction tag.
    ///
    /// Default: '.'
    pub direction_separator: char,

    /// Ordering clause used when no valid sort is requested.
    pub default_order: String,

    /// Route handed to the router when building sort URLs.
    pub route: String,

    /// Fixed query parameters for sort URLs.
    ///
    /// When `None`, the current request's parameters are reused.
    pub params: Option<Params>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            entity: None,
            attributes: IndexMap::new(),
            include_schema_attributes: false,
            multi_sort: false,
            sort_param: "sort".to_string(),
            descending_tag: "desc".to_string(),
            attribute_separator: '-',
            direction_separator: '.',
            default_order: String::new(),
            route: String::new(),
            params: None,
        }
    }
}

impl SortConfig {
    /// Creates a new sort config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the entity consulted in the schema.
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Allows sorting by a real attribute under its own name.
    pub fn with_attribute(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.attributes
            .insert(name.clone(), AttributeDefinition::Plain(name));
        self
    }

    /// Allows sorting by `attribute` under the public key `key`.
    pub fn with_alias(mut self, key: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.attributes
            .insert(key.into(), AttributeDefinition::plain(attribute));
        self
    }

    /// Declares a virtual sort key.
    pub fn with_virtual(mut self, key: impl Into<String>, attribute: VirtualAttribute) -> Self {
        self.attributes
            .insert(key.into(), AttributeDefinition::Virtual(attribute));
        self
    }

    /// Also allows every schema attribute next to the declared ones.
    pub fn with_schema_attributes(mut self) -> Self {
        self.include_schema_attributes = true;
        self
    }

    /// Enables or disables sorting by several attributes.
    pub fn with_multi_sort(mut self, multi_sort: bool) -> Self {
        self.multi_sort = multi_sort;
        self
    }

    /// Sets the query parameter name carrying the sort token.
    pub fn with_sort_param(mut self, name: impl Into<String>) -> Self {
        self.sort_param = name.into();
        self
    }

    /// Sets the descending tag.
    pub fn with_descending_tag(mut self, tag: impl Into<String>) -> Self {
        self.descending_tag = tag.into();
        self
    }

    /// Sets the attribute and direction separators.
    pub fn with_separators(mut self, attribute: char, direction: char) -> Self {
        self.attribute_separator = attribute;
        self.direction_separator = direction;
        self
    }

    /// Sets the fallback ordering clause.
    pub fn with_default_order(mut self, order: impl Into<String>) -> Self {
        self.default_order = order.into();
        self
    }

    /// Sets the route used for sort URLs.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Uses a fixed parameter set for sort URLs instead of the request's.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Checks the encoding invariants.
    ///
    /// Attribute keys must never contain either separator, otherwise a token
    /// could not be split back into the keys it was built from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attribute_separator == self.direction_separator {
            return Err(ConfigError::SameSeparators {
                separator: self.attribute_separator,
            });
        }
        if self.sort_param.is_empty() {
            return Err(ConfigError::EmptySortParam);
        }
        if self.descending_tag.is_empty() || self.descending_tag.contains(self.attribute_separator)
        {
            return Err(ConfigError::invalid_descending_tag(&self.descending_tag));
        }
        for key in self.attributes.keys() {
            if key.is_empty() {
                return Err(ConfigError::EmptyKey);
            }
            for separator in [self.attribute_separator, self.direction_separator] {
                if key.contains(separator) {
                    return Err(ConfigError::separator_in_key(key, separator));
                }
            }
        }
        Ok(())
    }
}
