use super::Error;

/// Error when a resource type name cannot namespace links and documents.
#[derive(Debug)]
pub(super) struct InvalidResourceType {
    pub(super) name: Box<str>,
}

impl Error {
    /// Creates an invalid resource type error.
    ///
    /// Raised when the resource type passed to the mapper is empty.
    pub fn invalid_resource_type(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidResourceType(InvalidResourceType {
            name: name.into().into(),
        }))
    }

    pub fn is_invalid_resource_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidResourceType(_))
    }
}

impl std::fmt::Display for InvalidResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid resource type: {:?}", self.name)
    }
}
