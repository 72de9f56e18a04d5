//! In-memory record binding.
//!
//! [`PlainRecord`] and [`PlainCollection`] implement the data-access traits
//! over owned JSON values. They are useful for bindings that already hold
//! rows as JSON and as fixtures.

use crate::{Collection, Data, Record, Related};

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// A record holding its attributes and loaded relations by value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainRecord {
    id: String,
    attributes: IndexMap<String, Value>,
    relations: IndexMap<String, PlainRelated>,
}

/// A loaded relation of a [`PlainRecord`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlainRelated {
    One(Box<PlainRecord>),
    Many(PlainCollection),
}

/// An ordered list of [`PlainRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlainCollection {
    records: Vec<PlainRecord>,
}

impl PlainRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Adds or replaces an attribute. Attributes keep insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Marks a to-one relation as loaded.
    pub fn with_one(mut self, name: impl Into<String>, record: PlainRecord) -> Self {
        self.relations
            .insert(name.into(), PlainRelated::One(Box::new(record)));
        self
    }

    /// Marks a to-many relation as loaded.
    pub fn with_many(
        mut self,
        name: impl Into<String>,
        records: impl Into<PlainCollection>,
    ) -> Self {
        self.relations
            .insert(name.into(), PlainRelated::Many(records.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}

impl Record for PlainRecord {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn fields(&self) -> Vec<&str> {
        std::iter::once("id")
            .chain(
                self.attributes
                    .keys()
                    .map(String::as_str)
                    .filter(|name| *name != "id"),
            )
            .collect()
    }

    fn relations(&self) -> Vec<(&str, Related<'_>)> {
        self.relations
            .iter()
            .map(|(name, related)| {
                let related = match related {
                    PlainRelated::One(record) => Related::One(&**record),
                    PlainRelated::Many(records) => Related::Many(records),
                };
                (name.as_str(), related)
            })
            .collect()
    }

    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("id".to_string(), Value::String(self.id.clone()));

        for (name, value) in &self.attributes {
            if name != "id" {
                object.insert(name.clone(), value.clone());
            }
        }

        for (name, related) in &self.relations {
            let value = match related {
                PlainRelated::One(record) => record.to_json(),
                PlainRelated::Many(records) => Collection::to_json(records),
            };
            object.insert(name.clone(), value);
        }

        Value::Object(object)
    }
}

impl PlainCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: PlainRecord) {
        self.records.push(record);
    }

    /// Number of records in the collection.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Collection for PlainCollection {
    fn records(&self) -> Vec<&dyn Record> {
        self.records
            .iter()
            .map(|record| record as &dyn Record)
            .collect()
    }

    fn first(&self) -> Option<&dyn Record> {
        self.records.first().map(|record| record as &dyn Record)
    }
}

impl From<Vec<PlainRecord>> for PlainCollection {
    fn from(records: Vec<PlainRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<PlainRecord> for PlainCollection {
    fn from_iter<I: IntoIterator<Item = PlainRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Data for PlainRecord {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }
}

impl Data for PlainCollection {
    fn as_collection(&self) -> Option<&dyn Collection> {
        Some(self)
    }
}
