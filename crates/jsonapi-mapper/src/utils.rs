//! Classification and introspection of records handed to the mapper.

use crate::{Collection, Data, Error, Record, Related, Result};

use indexmap::IndexSet;
use serde_json::Value;

/// A classified data handle.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    Record(&'a dyn Record),
    Collection(&'a dyn Collection),
}

impl core::fmt::Debug for Shape<'_> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Shape::Record(record) => write!(fmt, "Record({})", record.id()),
            Shape::Collection(collection) => fmt
                .debug_tuple("Collection")
                .field(&collection.records().len())
                .finish(),
        }
    }
}

impl Shape<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Record(_) => "record",
            Shape::Collection(_) => "collection",
        }
    }
}

/// Returns `true` if `data` is a single record.
pub fn is_model(data: &dyn Data) -> bool {
    data.as_record().is_some() && data.as_collection().is_none()
}

/// Returns `true` if `data` is a collection of records.
pub fn is_collection(data: &dyn Data) -> bool {
    data.as_collection().is_some() && data.as_record().is_none()
}

/// Classifies `data`, rejecting handles that are neither or both kinds.
pub fn classify(data: &dyn Data) -> Result<Shape<'_>> {
    match (data.as_record(), data.as_collection()) {
        (Some(record), None) => Ok(Shape::Record(record)),
        (None, Some(collection)) => Ok(Shape::Collection(collection)),
        (Some(_), Some(_)) => Err(Error::unsupported_data(
            "handle claims to be both a record and a collection",
        )),
        (None, None) => Err(Error::unsupported_data(
            "expected a record or a collection",
        )),
    }
}

/// Returns the names of `record`'s attributes in declaration order.
///
/// Internal fields and relation names are excluded, and each field appears
/// once even if the binding reports it twice.
pub fn get_data_attributes_list(record: &dyn Record) -> Vec<String> {
    let relations = record
        .relations()
        .into_iter()
        .map(|(name, _)| name)
        .collect::<IndexSet<_>>();

    record
        .fields()
        .into_iter()
        .filter(|field| !record.is_internal(field) && !relations.contains(field))
        .map(str::to_string)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

/// Attributes of a relation target. Empty for an empty to-many relation.
pub fn related_attributes_list(related: Related<'_>) -> Vec<String> {
    related
        .representative()
        .map(get_data_attributes_list)
        .unwrap_or_default()
}

/// Plain snapshot of `data`, detached from the binding's types.
pub fn to_json(data: &dyn Data) -> Result<Value> {
    Ok(match classify(data)? {
        Shape::Record(record) => record.to_json(),
        Shape::Collection(collection) => collection.to_json(),
    })
}
