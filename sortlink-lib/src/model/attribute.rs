//! Sortable attribute declarations

use serde::Deserialize;
use serde::Serialize;

use super::Direction;

/// How a public sort key maps onto something the backend can order by.
///
/// In JSON a plain string is a [`AttributeDefinition::Plain`] reference and an
/// object is a [`AttributeDefinition::Virtual`] definition:
///
/// ```
/// use sortlink_lib::model::AttributeDefinition;
///
/// let plain: AttributeDefinition = serde_json::from_str(r#""author.name""#).unwrap();
/// assert_eq!(plain, AttributeDefinition::plain("author.name"));
///
/// let virt: AttributeDefinition =
///     serde_json::from_str(r#"{"asc": "first, last", "desc": "first DESC, last DESC"}"#).unwrap();
/// assert!(virt.as_virtual().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeDefinition {
    /// The real column or attribute name, optionally `relation.column`.
    Plain(String),
    /// Explicit ascending/descending expressions.
    Virtual(VirtualAttribute),
}

impl AttributeDefinition {
    /// Creates a plain reference to a real attribute.
    pub fn plain(name: impl Into<String>) -> Self {
        Self::Plain(name.into())
    }

    /// Returns the virtual definition, if this is one.
    pub fn as_virtual(&self) -> Option<&VirtualAttribute> {
        match self {
            Self::Virtual(v) => Some(v),
            Self::Plain(_) => None,
        }
    }

    /// Returns the referenced attribute name, if this is a plain reference.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(name) => Some(name),
            Self::Virtual(_) => None,
        }
    }
}

impl From<VirtualAttribute> for AttributeDefinition {
    fn from(attribute: VirtualAttribute) -> Self {
        Self::Virtual(attribute)
    }
}

/// A sort key backed by explicit ordering expressions.
///
/// The expressions are emitted verbatim into the ordering clause, so they can
/// order by several columns or across relations. Both `asc` and `desc` are
/// required once the attribute is used for ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualAttribute {
    /// Ordering expression used for ascending requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asc: Option<String>,

    /// Ordering expression used for descending requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// Display label for sort links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Direction requested the first time the attribute is clicked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Direction>,
}

impl VirtualAttribute {
    /// Creates a virtual attribute from its ascending and descending expressions.
    pub fn new(asc: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            asc: Some(asc.into()),
            desc: Some(desc.into()),
            label: None,
            default: None,
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the direction requested when the attribute is not yet sorted.
    pub fn with_default(mut self, direction: Direction) -> Self {
        self.default = Some(direction);
        self
    }

    /// Returns the expression for the requested direction.
    ///
    /// `None` when either expression is missing: a half-declared virtual
    /// attribute is unusable in both directions.
    pub fn expression(&self, direction: Direction) -> Option<&str> {
        match (&self.asc, &self.desc, direction) {
            (Some(asc), Some(_), Direction::Asc) => Some(asc),
            (Some(_), Some(desc), Direction::Desc) => Some(desc),
            _ => None,
        }
    }
}
