//! In-memory schema implementation

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

use super::Schema;

/// Identifier quoting convention of a backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// ANSI SQL double quotes: `"name"`.
    #[default]
    Ansi,
    /// MySQL backticks: `` `name` ``.
    Backtick,
    /// SQL Server brackets: `[name]`.
    Bracket,
    /// Identifiers are emitted unquoted.
    None,
}

impl QuoteStyle {
    /// Quotes an identifier, doubling any embedded closing quote.
    pub fn quote(self, name: &str) -> String {
        match self {
            Self::Ansi => format!("\"{}\"", name.replace('"', "\"\"")),
            Self::Backtick => format!("`{}`", name.replace('`', "``")),
            Self::Bracket => format!("[{}]", name.replace(']', "]]")),
            Self::None => name.to_string(),
        }
    }
}

/// Attributes and labels of a single entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntitySchema {
    /// Attribute names, in declaration order.
    #[serde(default)]
    pub attributes: Vec<String>,

    /// Explicit display labels; missing ones are generated from the name.
    #[serde(default)]
    pub labels: IndexMap<String, String>,
}

/// A [`Schema`] backed by a fixed set of entity descriptions.
///
/// Deserializes from JSON such as:
///
/// ```json
/// {
///   "quote": "ansi",
///   "entities": {
///     "post": { "attributes": ["id", "title"], "labels": { "id": "ID" } }
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticSchema {
    #[serde(default)]
    pub quote: QuoteStyle,

    #[serde(default)]
    pub entities: IndexMap<String, EntitySchema>,
}

impl StaticSchema {
    /// Creates an empty schema with the given quoting convention.
    pub fn new(quote: QuoteStyle) -> Self {
        Self {
            quote,
            entities: IndexMap::new(),
        }
    }

    /// Adds an entity with the given attribute names.
    pub fn with_entity<I, S>(mut self, entity: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let schema = self.entities.entry(entity.into()).or_default();
        schema.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    /// Sets an explicit display label for an attribute.
    pub fn with_label(
        mut self,
        entity: impl Into<String>,
        attribute: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.entities
            .entry(entity.into())
            .or_default()
            .labels
            .insert(attribute.into(), label.into());
        self
    }
}

impl Schema for StaticSchema {
    fn attribute_names(&self, entity: &str) -> Vec<String> {
        self.entities
            .get(entity)
            .map(|e| e.attributes.clone())
            .unwrap_or_default()
    }

    fn has_attribute(&self, entity: &str, name: &str) -> bool {
        self.entities
            .get(entity)
            .is_some_and(|e| e.attributes.iter().any(|a| a == name))
    }

    fn quote_column(&self, name: &str) -> String {
        self.quote.quote(name)
    }

    fn quote_relation(&self, name: &str) -> String {
        self.quote.quote(name)
    }

    fn attribute_label(&self, entity: &str, name: &str) -> String {
        self.entities
            .get(entity)
            .and_then(|e| e.labels.get(name))
            .cloned()
            .unwrap_or_else(|| generate_label(name))
    }
}

/// Generates a human-readable label from an attribute name.
///
/// Underscores, dashes and dots become word breaks, camelCase humps are split
/// and every word is capitalized: `created_at` and `createdAt` both become
/// `Created At`.
pub fn generate_label(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in name.chars() {
        if matches!(c, '_' | '-' | '.' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
