//! Maps ORM records into JSON:API document templates.
//!
//! A [`Mapper`] reads a record or a collection through the
//! [`Record`]/[`Collection`] interface, works out which fields become
//! attributes, which relations are included and which links are emitted, and
//! hands the resulting [`Template`] together with a plain snapshot of the data
//! to an [`Encoder`].
//!
//! ```
//! use jsonapi_mapper::plain::PlainRecord;
//! use jsonapi_mapper::{encoder, Mapper, MappingOptions, RelationFilter};
//! use serde_json::json;
//!
//! let mapper = Mapper::new("https://api.example.com").unwrap();
//!
//! let article = PlainRecord::new("1")
//!     .attr("title", json!("JSON:API paints my bikeshed!"))
//!     .with_one("author", PlainRecord::new("9").attr("name", json!("Dan")));
//!
//! let options = MappingOptions::new().relations(RelationFilter::None);
//! let attributes = mapper
//!     .map(&article, "articles", &options, &encoder::from_fn(|_, _, template| {
//!         Ok(template.attributes.clone())
//!     }))
//!     .unwrap();
//!
//! assert_eq!(attributes, Some(vec!["title".to_string()]));
//! ```

pub use jsonapi_mapper_core::{bail, err};
pub use jsonapi_mapper_core::{Collection, Data, Error, IntoError, Record, Related, Result};

mod config;
pub use config::MapperConfig;

pub mod encoder;
pub use encoder::Encoder;

pub mod links;
pub use links::{LinkTemplate, Pagination, TopLevelLinks};

mod mapper;
pub use mapper::{Builder, Mapper};

mod options;
pub use options::{MappingOptions, RelationFilter};

pub mod plain;

pub mod relation;
pub use relation::{RelationTemplate, RelationshipLinks};

mod template;
pub use template::{Template, TemplateOverrides};

pub mod utils;
