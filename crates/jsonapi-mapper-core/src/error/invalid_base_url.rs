use super::Error;

#[derive(Debug)]
pub(super) struct InvalidBaseUrl {
    pub(super) url: Box<str>,
    pub(super) message: Box<str>,
}

impl Error {
    pub fn invalid_base_url(url: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidBaseUrl(InvalidBaseUrl {
            url: url.into().into(),
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_base_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidBaseUrl(_))
    }
}

impl std::fmt::Display for InvalidBaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid base URL `{}`: {}", self.url, self.message)
    }
}
