//! Sort declaration files.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use sortlink_lib::schema::StaticSchema;
use sortlink_lib::SortConfig;

/// Contents of a `--config` file.
///
/// ```json
/// {
///   "base_url": "/admin",
///   "sort": { "entity": "post", "attributes": { "title": "title" } },
///   "schema": { "entities": { "post": { "attributes": ["id", "title"] } } }
/// }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortFile {
    pub base_url: String,
    pub sort: SortConfig,
    pub schema: Option<StaticSchema>,
}

impl SortFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }
}
