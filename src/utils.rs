use url::Url;

use crate::error::{Error, Result};

/// Ordered list of query parameters for an endpoint URL.
///
/// Parameters are appended in insertion order; `None` values are skipped so
/// optional arguments can be passed straight through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Adds a comma-joined id list, skipped when `ids` is empty.
    pub fn ids(self, key: &str, ids: &[&str]) -> Self {
        if ids.is_empty() {
            return self;
        }
        self.param(key, join_ids(ids))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Builds `base` followed by `segments` with `query` appended.
///
/// Every segment is percent-encoded on its own, so an id holding `/`, `?` or
/// `#` stays inside its segment instead of changing the path or the query.
/// Empty, `.` and `..` segments are rejected.
pub fn endpoint(base: &str, segments: &[&str], query: &Query) -> Result<String> {
    if let Some(segment) = segments
        .iter()
        .find(|segment| matches!(segment.trim(), "" | "." | ".."))
    {
        return Err(Error::InvalidRequest(format!(
            "invalid path segment {segment:?}"
        )));
    }

    let mut url = Url::parse(base)
        .map_err(|e| Error::InvalidRequest(format!("invalid endpoint {base}: {e}")))?;

    url.path_segments_mut()
        .map_err(|_| Error::InvalidRequest(format!("invalid endpoint {base}: cannot be a base")))?
        .pop_if_empty()
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query.pairs());
    }

    Ok(url.into())
}

pub fn join_ids(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a track duration in milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Joins the names of a list of artists for display.
pub fn artist_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names.into_iter().collect::<Vec<_>>().join(", ")
}

/// Rejects empty id lists before a request is built.
pub fn require_ids(ids: &[&str]) -> Result<()> {
    if join_ids(ids).is_empty() {
        return Err(Error::InvalidRequest(
            "at least one id is required".to_string(),
        ));
    }
    Ok(())
}
