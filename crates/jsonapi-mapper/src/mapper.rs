mod builder;
pub use builder::Builder;

use crate::err;
use crate::links;
use crate::relation;
use crate::utils::{self, Shape};
use crate::{
    Collection, Data, Encoder, MapperConfig, MappingOptions, Record, RelationFilter, Result,
    Template, TemplateOverrides,
};

use log::{debug, trace};
use std::borrow::Cow;

/// Maps records into document templates and hands them to an encoder.
///
/// A `Mapper` only holds immutable configuration, so one instance can serve
/// concurrent calls from many threads.
#[derive(Debug, Clone)]
pub struct Mapper {
    /// Validated base URL, without a trailing slash
    base_url: String,

    pluralize_type: bool,

    /// Applied to every computed template
    overrides: TemplateOverrides,
}

impl Mapper {
    /// Creates a mapper rooted at `base_url` with default settings.
    pub fn new(base_url: &str) -> Result<Mapper> {
        Mapper::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> Builder {
        Builder::new(base_url)
    }

    pub fn from_config(config: &MapperConfig) -> Result<Mapper> {
        let mut builder = Mapper::builder(config.base_url.clone());
        builder.pluralize_type(config.pluralize_type);

        if let Some(meta) = &config.meta {
            builder.meta(meta.clone());
        }

        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Maps `data` as resources of type `ty` and returns the encoder's output.
    pub fn map<E: Encoder>(
        &self,
        data: &dyn Data,
        ty: &str,
        options: &MappingOptions,
        encoder: &E,
    ) -> Result<E::Output> {
        self.map_with(data, ty, options, &TemplateOverrides::default(), encoder)
    }

    /// Like [`Mapper::map`] with every loaded relation included.
    pub fn map_default<E: Encoder>(
        &self,
        data: &dyn Data,
        ty: &str,
        encoder: &E,
    ) -> Result<E::Output> {
        self.map(data, ty, &MappingOptions::default(), encoder)
    }

    /// Like [`Mapper::map`], applying `overrides` after the mapper's defaults.
    pub fn map_with<E: Encoder>(
        &self,
        data: &dyn Data,
        ty: &str,
        options: &MappingOptions,
        overrides: &TemplateOverrides,
        encoder: &E,
    ) -> Result<E::Output> {
        let template = self.template(data, ty, options, overrides)?;
        let snapshot = utils::to_json(data)?;

        encoder
            .encode(ty, snapshot, &template)
            .map_err(|cause| cause.context(err!("failed to encode `{ty}` document")))
    }

    /// Computes the template for `data` without encoding it.
    pub fn template(
        &self,
        data: &dyn Data,
        ty: &str,
        options: &MappingOptions,
        overrides: &TemplateOverrides,
    ) -> Result<Template> {
        let segment = self.link_segment(ty);

        let mut template = Template::new(
            links::build_top(
                &self.base_url,
                &segment,
                options.pagination.as_ref(),
                &options.query,
            )?,
            links::build_self(&self.base_url, &segment, &options.query)?,
        );

        let relations = options.normalized_relations();
        let shape = utils::classify(data)?;

        match shape {
            Shape::Record(record) => {
                self.describe_record(&mut template, &segment, record, relations)
            }
            Shape::Collection(collection) => {
                self.describe_collection(&mut template, &segment, collection, relations)
            }
        }

        debug!(
            "mapped {} of `{ty}`: attributes={}, relations={}",
            shape.kind(),
            template.attributes.as_ref().map_or(0, Vec::len),
            template.relations.len(),
        );

        Ok(template.merge(&self.overrides.then(overrides)))
    }

    fn describe_record(
        &self,
        template: &mut Template,
        segment: &str,
        record: &dyn Record,
        relations: &RelationFilter,
    ) {
        let mut attributes = utils::get_data_attributes_list(record);

        for (name, related) in record.relations() {
            if !relations.permits(name) {
                trace!("skipping relation `{name}`; not permitted");
                continue;
            }

            attributes.push(name.to_string());
            template.relations.insert(
                name.to_string(),
                relation::build_relation(
                    &self.base_url,
                    segment,
                    name,
                    utils::related_attributes_list(related),
                    true,
                ),
            );
        }

        template.attributes = Some(attributes);
    }

    fn describe_collection(
        &self,
        template: &mut Template,
        segment: &str,
        collection: &dyn Collection,
        relations: &RelationFilter,
    ) {
        let Some(first) = collection.first() else {
            trace!("empty collection; no attributes");
            return;
        };

        let mut attributes = utils::get_data_attributes_list(first);

        for record in collection.records() {
            for (name, related) in record.relations() {
                if !relations.permits(name) {
                    trace!("skipping relation `{name}`; not permitted");
                    continue;
                }

                if !attributes.iter().any(|attribute| attribute == name) {
                    attributes.push(name.to_string());
                }

                // The first member with a non-empty shape for a relation wins
                let needs_template = template
                    .relation(name)
                    .map_or(true, |existing| !existing.has_attributes());

                if !needs_template {
                    trace!("keeping relation template `{name}` from an earlier record");
                    continue;
                }

                template.relations.insert(
                    name.to_string(),
                    relation::build_relation(
                        &self.base_url,
                        segment,
                        name,
                        utils::related_attributes_list(related),
                        true,
                    ),
                );
            }
        }

        template.attributes = Some(attributes);
    }

    fn link_segment<'a>(&self, ty: &'a str) -> Cow<'a, str> {
        if self.pluralize_type && !ty.is_empty() {
            Cow::Owned(pluralizer::pluralize(ty, 2, false))
        } else {
            Cow::Borrowed(ty)
        }
    }
}
