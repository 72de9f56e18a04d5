use super::Mapper;
use crate::{Error, Result, TemplateOverrides};

use serde_json::Value;
use url::Url;

/// Configures and validates a [`Mapper`].
#[derive(Debug, Default)]
pub struct Builder {
    base_url: String,
    pluralize_type: bool,
    overrides: TemplateOverrides,
}

impl Builder {
    pub(super) fn new(base_url: impl Into<String>) -> Builder {
        Builder {
            base_url: base_url.into(),
            ..Builder::default()
        }
    }

    /// Pluralize resource types in generated links (`article` becomes
    /// `articles`). The encoder still receives the type as passed to `map`.
    pub fn pluralize_type(&mut self, pluralize: bool) -> &mut Self {
        self.pluralize_type = pluralize;
        self
    }

    /// Sets the top-level `meta` member of every template.
    pub fn meta(&mut self, meta: Value) -> &mut Self {
        self.overrides.meta = Some(meta);
        self
    }

    /// Sets the overrides applied to every computed template.
    ///
    /// Replaces earlier overrides, including a `meta` set with
    /// [`Builder::meta`] unless `overrides` carries none.
    pub fn overrides(&mut self, overrides: TemplateOverrides) -> &mut Self {
        let meta = self.overrides.meta.take();
        self.overrides = overrides;
        if self.overrides.meta.is_none() {
            self.overrides.meta = meta;
        }
        self
    }

    pub fn build(&self) -> Result<Mapper> {
        let url = Url::parse(&self.base_url)
            .map_err(|err| Error::invalid_base_url(&self.base_url, err.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(Error::invalid_base_url(
                &self.base_url,
                "URL cannot be used as a base",
            ));
        }

        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::invalid_base_url(
                &self.base_url,
                "base URL must not carry a query or fragment",
            ));
        }

        Ok(Mapper {
            base_url: url.as_str().trim_end_matches('/').to_string(),
            pluralize_type: self.pluralize_type,
            overrides: self.overrides.clone(),
        })
    }
}
