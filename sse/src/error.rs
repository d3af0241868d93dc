//! Error types for the `sse` crate.
use std::error::Error as StdError;
use std::fmt;

/// Errors raised while opening or feeding a coordinate stream.
/// The `error_kind` drives how the web layer answers the client, while `source`
/// keeps whatever lower level error caused it.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The response transport cannot push bytes to the client incrementally.
    StreamUnsupported,
    /// A coordinate value could not be turned into an event block.
    Format(String),
    /// Writing or flushing to the client failed, usually because it went away.
    Write,
}

impl Error {
    pub fn stream_unsupported() -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::StreamUnsupported,
        }
    }

    pub fn format(reason: impl Into<String>) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Format(reason.into()),
        }
    }

    pub fn write(source: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
        Error {
            source: Some(source.into()),
            error_kind: ErrorKind::Write,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::StreamUnsupported => write!(f, "SSE not supported"),
            ErrorKind::Format(reason) => write!(f, "Malformed coordinate: {reason}"),
            ErrorKind::Write => match &self.source {
                Some(source) => write!(f, "Failed to write event to client: {source}"),
                None => write!(f, "Failed to write event to client"),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error {
            error_kind: ErrorKind::Format(err.to_string()),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_unsupported_displays_client_message() {
        assert_eq!(Error::stream_unsupported().to_string(), "SSE not supported");
    }

    #[test]
    fn write_error_keeps_its_source() {
        let err = Error::write("connection reset");

        assert_eq!(err.error_kind, ErrorKind::Write);
        assert!(StdError::source(&err).is_some());
        assert_eq!(
            err.to_string(),
            "Failed to write event to client: connection reset"
        );
    }

    #[test]
    fn serde_json_errors_become_format_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();

        assert!(matches!(err.error_kind, ErrorKind::Format(_)));
    }
}
