use crate::links::Pagination;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Deserializer};

/// Selects which loaded relations are mapped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RelationFilter {
    /// Every loaded relation
    #[default]
    All,

    /// No relations
    None,

    /// Only the named relations, when loaded
    Only(IndexSet<String>),
}

impl RelationFilter {
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RelationFilter::Only(names.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if relation `name` may be mapped.
    pub fn permits(&self, name: &str) -> bool {
        match self {
            RelationFilter::All => true,
            RelationFilter::None => false,
            RelationFilter::Only(names) => names.contains(name),
        }
    }
}

impl From<bool> for RelationFilter {
    fn from(value: bool) -> Self {
        if value {
            RelationFilter::All
        } else {
            RelationFilter::None
        }
    }
}

impl<'de> Deserialize<'de> for RelationFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Names(IndexSet<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => flag.into(),
            Repr::Names(names) => RelationFilter::Only(names),
        })
    }
}

/// Per-call mapping options.
///
/// Deserializes from `{"relations": ..., "includeRelations": ...,
/// "pagination": {...}, "query": {...}}`, every key optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MappingOptions {
    pub relations: RelationFilter,

    /// Deprecated alias for `relations`. Replaces it when set.
    pub include_relations: Option<RelationFilter>,

    pub pagination: Option<Pagination>,

    /// Query parameters preserved on every generated link
    pub query: IndexMap<String, String>,
}

impl MappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn relations(mut self, relations: impl Into<RelationFilter>) -> Self {
        self.relations = relations.into();
        self
    }

    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Resolves the deprecated `include_relations` alias.
    pub fn normalized_relations(&self) -> &RelationFilter {
        self.include_relations.as_ref().unwrap_or(&self.relations)
    }
}
