//! URL construction for sort links.

use crate::model::Params;

/// Trait for routing providers that turn a route and parameters into a URL.
pub trait Router: Send + Sync {
    /// Builds the URL for `route` carrying `params` as its query.
    fn build_url(&self, route: &str, params: &Params) -> String;
}

/// A [`Router`] that appends the parameters as a percent-encoded query string.
///
/// # Example
///
/// ```
/// use sortlink_lib::model::Params;
/// use sortlink_lib::routing::{QueryStringRouter, Router};
///
/// let mut params = Params::new();
/// params.insert("sort".to_string(), "name.desc".to_string());
/// params.insert("q".to_string(), "a b".to_string());
///
/// let router = QueryStringRouter::new("/app");
/// assert_eq!(router.build_url("posts", &params), "/app/posts?sort=name.desc&q=a%20b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryStringRouter {
    base_url: String,
}

impl QueryStringRouter {
    /// Creates a router that prefixes every route with `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Router for QueryStringRouter {
    fn build_url(&self, route: &str, params: &Params) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        let route = route.trim_start_matches('/');

        let mut url = match (base_url.is_empty(), route.is_empty()) {
            (true, _) => route.to_string(),
            (false, true) => base_url.to_string(),
            (false, false) => format!("{}/{}", base_url, route),
        };

        if params.is_empty() {
            return url;
        }

        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query);
        url
    }
}
