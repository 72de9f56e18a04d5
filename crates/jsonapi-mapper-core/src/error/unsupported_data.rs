use super::Error;

/// Error when a data handle is neither a record nor a collection.
#[derive(Debug)]
pub(super) struct UnsupportedData {
    pub(super) context: Box<str>,
}

impl std::error::Error for UnsupportedData {}

impl core::fmt::Display for UnsupportedData {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported data: {}", self.context)
    }
}

impl Error {
    pub fn unsupported_data(context: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedData(UnsupportedData {
            context: context.into().into(),
        }))
    }

    /// Returns `true` if the mapper was handed data it cannot classify.
    pub fn is_unsupported_data(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedData(_))
    }
}
