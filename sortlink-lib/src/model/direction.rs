//! Sort direction and the ordered direction map.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// Sort direction for a single attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Maps a "descending" flag onto a direction.
    pub fn from_descending(descending: bool) -> Self {
        if descending { Self::Desc } else { Self::Asc }
    }

    /// Returns `true` for [`Direction::Desc`].
    pub fn is_descending(self) -> bool {
        matches!(self, Self::Desc)
    }

    /// Returns the opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// CSS class used to mark the active sort direction on a link.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Ordered mapping from attribute key to sort direction.
///
/// Insertion order is sort priority: the first entry is the primary sort key.
/// Inserting a key that is already present updates its direction but keeps
/// its original position.
///
/// # Example
///
/// ```
/// use sortlink_lib::model::{Direction, DirectionMap};
///
/// let mut map = DirectionMap::new();
/// map.insert("name", Direction::Asc);
/// map.insert("created", Direction::Desc);
/// map.insert("name", Direction::Desc);
///
/// let keys: Vec<_> = map.keys().collect();
/// assert_eq!(keys, ["name", "created"]);
/// assert_eq!(map.get("name"), Some(Direction::Desc));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectionMap {
    entries: IndexMap<String, Direction>,
}

impl DirectionMap {
    /// Creates an empty direction map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates an attribute, returning its previous direction.
    pub fn insert(&mut self, key: impl Into<String>, direction: Direction) -> Option<Direction> {
        self.entries.insert(key.into(), direction)
    }

    /// Removes an attribute, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Direction> {
        self.entries.shift_remove(key)
    }

    /// Returns the direction requested for an attribute.
    pub fn get(&self, key: &str) -> Option<Direction> {
        self.entries.get(key).copied()
    }

    /// Returns `true` if the attribute is part of the sort state.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the primary sort entry.
    pub fn first(&self) -> Option<(&str, Direction)> {
        self.entries.first().map(|(k, d)| (k.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attribute keys in priority order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, direction)` pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Direction)> {
        self.entries.iter().map(|(k, d)| (k.as_str(), *d))
    }
}

// IndexMap equality ignores order; priority order is part of a sort state.
impl PartialEq for DirectionMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for DirectionMap {}

impl<K: Into<String>> FromIterator<(K, Direction)> for DirectionMap {
    fn from_iter<I: IntoIterator<Item = (K, Direction)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, direction) in iter {
            map.insert(key, direction);
        }
        map
    }
}

impl<K: Into<String>, const N: usize> From<[(K, Direction); N]> for DirectionMap {
    fn from(entries: [(K, Direction); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl std::fmt::Display for DirectionMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (key, direction)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, direction.css_class())?;
        }
        write!(f, "}}")
    }
}
