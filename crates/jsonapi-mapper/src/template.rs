use crate::links::{LinkTemplate, TopLevelLinks};
use crate::relation::RelationTemplate;

use indexmap::IndexMap;
use serde_json::Value;

/// Describes the document the encoder should produce for one mapping call.
///
/// Built fresh on every call and never shared between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub top_level_links: TopLevelLinks,

    /// Link template resolved with each resource's id
    pub data_links: LinkTemplate,

    /// Attribute names permitted in the document, in output order.
    ///
    /// `None` when mapping an empty collection.
    pub attributes: Option<Vec<String>>,

    /// Templates of the included relations, keyed by relation name
    pub relations: IndexMap<String, RelationTemplate>,

    /// Top-level `meta` member
    pub meta: Option<Value>,
}

impl Template {
    pub fn new(top_level_links: TopLevelLinks, data_links: LinkTemplate) -> Self {
        Self {
            top_level_links,
            data_links,
            attributes: None,
            relations: IndexMap::new(),
            meta: None,
        }
    }

    pub fn relation(&self, name: &str) -> Option<&RelationTemplate> {
        self.relations.get(name)
    }

    /// Returns a new template with `overrides` applied on top of `self`.
    ///
    /// The merge is shallow: every field set in `overrides` replaces the
    /// computed one wholesale, and each overridden relation replaces the
    /// computed template of the same name.
    pub fn merge(&self, overrides: &TemplateOverrides) -> Template {
        let mut relations = self.relations.clone();
        for (name, relation) in &overrides.relations {
            relations.insert(name.clone(), relation.clone());
        }

        Template {
            top_level_links: overrides
                .top_level_links
                .clone()
                .unwrap_or_else(|| self.top_level_links.clone()),
            data_links: overrides
                .data_links
                .clone()
                .unwrap_or_else(|| self.data_links.clone()),
            attributes: overrides
                .attributes
                .clone()
                .or_else(|| self.attributes.clone()),
            relations,
            meta: overrides.meta.clone().or_else(|| self.meta.clone()),
        }
    }
}

/// Caller-supplied replacements for computed template fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateOverrides {
    pub top_level_links: Option<TopLevelLinks>,
    pub data_links: Option<LinkTemplate>,
    pub attributes: Option<Vec<String>>,
    pub relations: IndexMap<String, RelationTemplate>,
    pub meta: Option<Value>,
}

impl TemplateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_level_links(mut self, links: TopLevelLinks) -> Self {
        self.top_level_links = Some(links);
        self
    }

    pub fn data_links(mut self, links: LinkTemplate) -> Self {
        self.data_links = Some(links);
        self
    }

    pub fn attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = Some(attributes.into_iter().map(Into::into).collect());
        self
    }

    pub fn relation(mut self, name: impl Into<String>, template: RelationTemplate) -> Self {
        self.relations.insert(name.into(), template);
        self
    }

    pub fn meta(mut self, meta: Value) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Layers `other` on top of `self`; fields set in `other` win.
    pub fn then(&self, other: &TemplateOverrides) -> TemplateOverrides {
        let mut relations = self.relations.clone();
        for (name, relation) in &other.relations {
            relations.insert(name.clone(), relation.clone());
        }

        TemplateOverrides {
            top_level_links: other
                .top_level_links
                .clone()
                .or_else(|| self.top_level_links.clone()),
            data_links: other.data_links.clone().or_else(|| self.data_links.clone()),
            attributes: other.attributes.clone().or_else(|| self.attributes.clone()),
            relations,
            meta: other.meta.clone().or_else(|| self.meta.clone()),
        }
    }
}
