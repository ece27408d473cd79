//! Query criteria receiving the ordering clause

/// The part of a query that the sort resolver contributes to.
///
/// Only the ordering is modelled; everything else about the query belongs to
/// the caller's persistence layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    order: String,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a pre-existing ordering.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    /// Returns the current ordering clause.
    pub fn order(&self) -> &str {
        &self.order
    }

    /// Appends an ordering clause after any existing ordering.
    pub fn append_order(&mut self, clause: &str) {
        if clause.is_empty() {
            return;
        }
        if !self.order.is_empty() {
            self.order.push_str(", ");
        }
        self.order.push_str(clause);
    }
}
