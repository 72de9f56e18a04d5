//! Data-access interface implemented by each ORM binding.
//!
//! The mapper never touches ORM types directly. A binding exposes its records
//! and collections through [`Record`], [`Collection`] and [`Data`], and the
//! mapper only ever reads through these traits.

use serde_json::Value;

/// A single entity instance produced by the data layer.
pub trait Record {
    /// Identifier used to build the record's canonical link.
    fn id(&self) -> String;

    /// Own field names, in declaration order.
    ///
    /// May include the identifier and other bookkeeping fields; those are
    /// filtered through [`Record::is_internal`].
    fn fields(&self) -> Vec<&str>;

    /// Relations loaded on this record, in declaration order.
    ///
    /// Relations that were never fetched must not be listed.
    fn relations(&self) -> Vec<(&str, Related<'_>)>;

    /// Plain snapshot of the record, including loaded relations.
    fn to_json(&self) -> Value;

    /// Returns `true` for fields that never become document attributes.
    fn is_internal(&self, field: &str) -> bool {
        field == "id"
    }
}

/// An ordered sequence of records of the same type.
pub trait Collection {
    fn records(&self) -> Vec<&dyn Record>;

    fn first(&self) -> Option<&dyn Record> {
        self.records().into_iter().next()
    }

    fn is_empty(&self) -> bool {
        self.first().is_none()
    }

    /// Plain snapshot of every member, in order.
    fn to_json(&self) -> Value {
        Value::Array(self.records().iter().map(|record| record.to_json()).collect())
    }
}

/// A loaded relation target.
#[derive(Clone, Copy)]
pub enum Related<'a> {
    One(&'a dyn Record),
    Many(&'a dyn Collection),
}

impl<'a> Related<'a> {
    /// The record that describes the shape of this relation's target.
    ///
    /// For a to-many relation this is the first member, if any.
    pub fn representative(&self) -> Option<&'a dyn Record> {
        match *self {
            Related::One(record) => Some(record),
            Related::Many(collection) => collection.first(),
        }
    }

    /// Returns `true` for a to-many relation.
    pub fn is_many(&self) -> bool {
        matches!(self, Related::Many(_))
    }

    pub fn to_json(&self) -> Value {
        match *self {
            Related::One(record) => record.to_json(),
            Related::Many(collection) => collection.to_json(),
        }
    }
}

impl core::fmt::Debug for Related<'_> {
    fn fmt(&self, fmt: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Related::One(record) => write!(fmt, "One({})", record.id()),
            Related::Many(collection) => fmt
                .debug_tuple("Many")
                .field(&collection.records().len())
                .finish(),
        }
    }
}

/// An opaque handle the mapper can classify.
///
/// A valid handle answers `Some` from exactly one of the two methods. A
/// handle answering `None` from both is rejected by the mapper.
pub trait Data {
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_collection(&self) -> Option<&dyn Collection> {
        None
    }
}
