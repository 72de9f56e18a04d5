use super::Error;

/// Error reported by the document encoder.
#[derive(Debug)]
pub(super) struct EncodeError {
    pub(super) cause: anyhow::Error,
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_ref())
    }
}

impl core::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "document encoding failed: {}", self.cause)
    }
}

impl Error {
    /// Wraps a failure raised by the document encoder.
    pub fn encode(cause: impl Into<anyhow::Error>) -> Error {
        Error::from(super::ErrorKind::Encode(EncodeError {
            cause: cause.into(),
        }))
    }

    pub fn is_encode(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Encode(_))
    }
}
