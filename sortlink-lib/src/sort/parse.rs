//! Sort token parsing.

use crate::model::Direction;
use crate::model::DirectionMap;
use crate::model::Params;

use super::Sort;

impl Sort {
    /// Parses an encoded sort token into a direction map.
    ///
    /// Attributes are split on the attribute separator; each one may carry the
    /// descending tag after the first direction separator. Any other trailing
    /// value means ascending. Attributes that do not resolve are dropped
    /// silently since the token comes straight from the request.
    ///
    /// In single-sort mode only the first accepted attribute is kept. In
    /// multi-sort mode a repeated attribute keeps its first position and
    /// takes its last direction.
    pub fn parse(&self, token: Option<&str>) -> DirectionMap {
        let mut directions = DirectionMap::new();
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return directions;
        };

        for part in token.split(self.config.attribute_separator) {
            if part.is_empty() {
                continue;
            }

            let (key, direction) = match part.split_once(self.config.direction_separator) {
                Some((key, tag)) => (
                    key,
                    Direction::from_descending(tag == self.config.descending_tag),
                ),
                None => (part, Direction::Asc),
            };

            if self.resolve_attribute(key).is_none() {
                log::debug!("Ignoring unsortable attribute '{}'", key);
                continue;
            }

            directions.insert(key, direction);
            if !self.config.multi_sort {
                break;
            }
        }

        log::trace!("Parsed sort token '{}' into {}", token, directions);
        directions
    }

    /// Resolves the sort state of a request from its query parameters.
    ///
    /// The parameters are kept so that sort links can carry them along.
    pub fn resolve(&self, request_params: &Params) -> SortState<'_> {
        let token = request_params.get(&self.config.sort_param).map(String::as_str);
        SortState {
            sort: self,
            directions: self.parse(token),
            request_params: request_params.clone(),
        }
    }

    /// Resolves the sort state from a bare token, without request parameters.
    pub fn resolve_token(&self, token: Option<&str>) -> SortState<'_> {
        SortState {
            sort: self,
            directions: self.parse(token),
            request_params: Params::new(),
        }
    }
}

/// The sort state requested by one request.
///
/// Computed once by [`Sort::resolve`] and never modified; link generation
/// derives fresh direction maps from it.
#[derive(Debug, Clone)]
pub struct SortState<'a> {
    pub(super) sort: &'a Sort,
    pub(super) directions: DirectionMap,
    pub(super) request_params: Params,
}

impl<'a> SortState<'a> {
    /// Returns the sort this state was resolved by.
    pub fn sort(&self) -> &'a Sort {
        self.sort
    }

    /// Returns the requested directions in priority order.
    pub fn directions(&self) -> &DirectionMap {
        &self.directions
    }

    /// Returns the requested direction of an attribute, if it is sorted.
    pub fn direction_of(&self, attribute: &str) -> Option<Direction> {
        self.directions.get(attribute)
    }

    /// Returns the request parameters the state was resolved from.
    pub fn request_params(&self) -> &Params {
        &self.request_params
    }
}
