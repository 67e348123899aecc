pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when searching for books.
///
/// Every [`Error`] is an opaque server error from the point of view of the caller, the
/// [`ErrorKind`] only records where the search broke down.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request to the books API failed at the transport level.
    IO,
    /// The response body could not be decoded as the expected JSON.
    Deserialize,
    /// The decoded response is missing a key that every volumes response must carry.
    MalformedResponse,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::IO => f.write_str("Server error (IO)")?,
            ErrorKind::Deserialize => f.write_str("Server error (deserialize)")?,
            ErrorKind::MalformedResponse => f.write_str("Server error (malformed response)")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::MalformedResponse, "'items' key is missing");

        assert_eq!(
            "Server error (malformed response): 'items' key is missing",
            err.to_string()
        );
    }

    #[test]
    fn wrapped_error_is_exposed_as_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::wrap(ErrorKind::IO, io);

        assert_eq!(ErrorKind::IO, err.kind());
        assert!(std::error::Error::source(&err).is_some());
        assert_eq!("Server error (IO): caused by refused", err.to_string());
    }
}
