//! Top-level and per-resource link construction.

use crate::{Error, Result};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Query parameter carrying the page offset on paging links.
pub const PAGE_OFFSET: &str = "page[offset]";

/// Query parameter carrying the page size on paging links.
pub const PAGE_LIMIT: &str = "page[limit]";

/// Offset-based paging descriptor for a collection response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Index of the first record on the current page
    pub offset: u64,

    /// Page size. Zero disables paging links.
    pub limit: u64,

    /// Total number of records across all pages
    pub total: u64,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64, total: u64) -> Self {
        Self {
            offset,
            limit,
            total,
        }
    }

    fn prev_offset(&self) -> Option<u64> {
        (self.offset > 0).then(|| {
            self.offset
                .saturating_sub(self.limit)
                .min(self.last_offset())
        })
    }

    fn next_offset(&self) -> Option<u64> {
        let next = self.offset.saturating_add(self.limit);
        (next < self.total).then_some(next)
    }

    fn last_offset(&self) -> u64 {
        match self.total {
            0 => 0,
            total => ((total - 1) / self.limit) * self.limit,
        }
    }
}

/// Links placed at the top level of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopLevelLinks {
    #[serde(rename = "self")]
    pub self_link: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// A link with a hole for a record identifier.
///
/// Resolves to `{prefix}{id}{suffix}{query}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTemplate {
    prefix: String,
    suffix: String,
    query: String,
}

impl LinkTemplate {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
            query: String::new(),
        }
    }

    /// Appends an already encoded query string (without the leading `?`).
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns the link for the record identified by `id`.
    pub fn resolve(&self, id: &str) -> String {
        let mut link = format!("{}{}{}", self.prefix, id, self.suffix);
        if !self.query.is_empty() {
            link.push('?');
            link.push_str(&self.query);
        }
        link
    }
}

/// Builds the top-level links for a response of resource type `ty`.
///
/// `self` always preserves `query`. When `pagination` is given, `first` and
/// `last` are always emitted while `prev` and `next` only exist when there is
/// such a page. Paging links carry `query` followed by the page parameters.
pub fn build_top(
    base_url: &str,
    ty: &str,
    pagination: Option<&Pagination>,
    query: &IndexMap<String, String>,
) -> Result<TopLevelLinks> {
    let root = resource_root(base_url, ty)?;

    let mut links = TopLevelLinks {
        self_link: with_query(root.clone(), &encode_query(query)),
        ..TopLevelLinks::default()
    };

    let Some(pagination) = pagination.filter(|pagination| pagination.limit > 0) else {
        return Ok(links);
    };

    let page = |offset: u64| {
        let limit = pagination.limit.to_string();
        let offset = offset.to_string();
        let pairs = query
            .iter()
            .filter(|(key, _)| key.as_str() != PAGE_OFFSET && key.as_str() != PAGE_LIMIT)
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .chain([(PAGE_OFFSET, offset.as_str()), (PAGE_LIMIT, limit.as_str())]);

        with_query(root.clone(), &encode_pairs(pairs))
    };

    links.first = Some(page(0));
    links.prev = pagination.prev_offset().map(page);
    links.next = pagination.next_offset().map(page);
    links.last = Some(page(pagination.last_offset()));

    Ok(links)
}

/// Builds the canonical self link template, `{base_url}/{ty}/{id}`.
pub fn build_self(
    base_url: &str,
    ty: &str,
    query: &IndexMap<String, String>,
) -> Result<LinkTemplate> {
    let root = resource_root(base_url, ty)?;
    Ok(LinkTemplate::new(format!("{root}/"), "").with_query(encode_query(query)))
}

/// Form-urlencodes `query` in insertion order.
pub fn encode_query(query: &IndexMap<String, String>) -> String {
    encode_pairs(
        query
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str())),
    )
}

fn encode_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn resource_root(base_url: &str, ty: &str) -> Result<String> {
    if ty.is_empty() {
        return Err(Error::invalid_resource_type(ty));
    }

    Ok(format!("{}/{}", base_url.trim_end_matches('/'), ty))
}

fn with_query(mut link: String, query: &str) -> String {
    if !query.is_empty() {
        link.push('?');
        link.push_str(query);
    }
    link
}
