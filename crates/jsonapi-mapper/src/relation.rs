use crate::links::LinkTemplate;

/// Field that identifies related records in the encoded document.
pub const REFERENCE_FIELD: &str = "id";

/// Describes how one relation of a resource is encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationTemplate {
    /// Field of the related record used as its resource identifier
    pub reference: String,

    /// Attributes of the related record
    pub attributes: Vec<String>,

    /// Links of the relationship object, resolved with the parent's id
    pub relationship_links: Option<RelationshipLinks>,

    /// Whether the related records are emitted in the `included` section
    pub included: bool,
}

/// Links of a relationship object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipLinks {
    /// `{base_url}/{type}/{id}/relationships/{relation}`
    pub self_link: LinkTemplate,

    /// `{base_url}/{type}/{id}/{relation}`
    pub related: LinkTemplate,
}

impl RelationTemplate {
    pub fn new(attributes: Vec<String>) -> Self {
        Self {
            reference: REFERENCE_FIELD.to_string(),
            attributes,
            relationship_links: None,
            included: true,
        }
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }
}

/// Builds the template for relation `relation` of resource type `ty`.
pub fn build_relation(
    base_url: &str,
    ty: &str,
    relation: &str,
    attributes: Vec<String>,
    include_links: bool,
) -> RelationTemplate {
    let mut template = RelationTemplate::new(attributes);

    if include_links {
        let prefix = format!("{}/{}/", base_url.trim_end_matches('/'), ty);

        template.relationship_links = Some(RelationshipLinks {
            self_link: LinkTemplate::new(prefix.clone(), format!("/relationships/{relation}")),
            related: LinkTemplate::new(prefix, format!("/{relation}")),
        });
    }

    template
}
