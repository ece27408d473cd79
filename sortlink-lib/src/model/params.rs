//! Request query parameters

use indexmap::IndexMap;
use url::form_urlencoded;

/// Query parameters of a request, in their original order.
pub type Params = IndexMap<String, String>;

/// Parses a raw query string (without the leading `?`) into [`Params`].
///
/// Repeated keys keep their first position and their last value.
pub fn parse_query(query: &str) -> Params {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
