#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod data;
pub use data::{Collection, Data, Record, Related};

/// A Result type alias that uses the mapper's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
