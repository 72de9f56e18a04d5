#![allow(dead_code)]

use jsonapi_mapper::plain::{PlainCollection, PlainRecord};
use jsonapi_mapper::{Data, Encoder, Mapper, MappingOptions, Result, Template};
use serde_json::{json, Value};

pub const BASE_URL: &str = "http://localhost:3000/api";

/// What the mapper handed to the encoder.
#[derive(Debug)]
pub struct Encoded {
    pub ty: String,
    pub data: Value,
    pub template: Template,
}

impl Encoded {
    pub fn attributes(&self) -> Vec<&str> {
        self.template
            .attributes
            .as_ref()
            .expect("attributes not computed")
            .iter()
            .map(String::as_str)
            .collect()
    }

    pub fn relation_names(&self) -> Vec<&str> {
        self.template.relations.keys().map(String::as_str).collect()
    }
}

/// Encoder that records its inputs.
pub struct Capture;

impl Encoder for Capture {
    type Output = Encoded;

    fn encode(&self, ty: &str, data: Value, template: &Template) -> Result<Encoded> {
        Ok(Encoded {
            ty: ty.to_string(),
            data,
            template: template.clone(),
        })
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn mapper() -> Mapper {
    init_logging();
    Mapper::new(BASE_URL).unwrap()
}

pub fn map(data: &dyn Data, ty: &str, options: &MappingOptions) -> Encoded {
    mapper().map(data, ty, options, &Capture).unwrap()
}

pub fn person(id: &str, name: &str) -> PlainRecord {
    PlainRecord::new(id).attr("name", json!(name))
}

pub fn comment(id: &str, body: &str) -> PlainRecord {
    PlainRecord::new(id).attr("body", json!(body))
}

/// An article with `comments` and `author` loaded.
pub fn article(id: &str) -> PlainRecord {
    PlainRecord::new(id)
        .attr("title", json!(format!("Article {id}")))
        .attr("body", json!("Lorem ipsum"))
        .with_many(
            "comments",
            vec![comment("10", "First!"), comment("11", "Second")],
        )
        .with_one("author", person("9", "Ann"))
}

pub fn bare_article(id: &str) -> PlainRecord {
    PlainRecord::new(id)
        .attr("title", json!(format!("Article {id}")))
        .attr("body", json!("Lorem ipsum"))
}

pub fn collection(records: Vec<PlainRecord>) -> PlainCollection {
    PlainCollection::from(records)
}
