//! Error types for myip.
//!
//! Every variant maps to a distinct process exit code, see [`MyipError::exit_code`].

use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when help or version text was printed
pub const EXIT_INFORMATIONAL: i32 = 2;

/// Kind of command-line error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageKind {
    /// Unknown flag, stray argument or malformed value
    InvalidOption,
    /// Flag given without its required argument
    MissingArgument,
    /// Mutually exclusive flags given together
    ConflictingOptions,
}

impl UsageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageKind::InvalidOption => "invalid option",
            UsageKind::MissingArgument => "missing argument",
            UsageKind::ConflictingOptions => "conflicting options",
        }
    }
}

impl std::fmt::Display for UsageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum MyipError {
    #[error("{kind}: {message}")]
    Usage { kind: UsageKind, message: String },

    #[error("address not found for interface: {0}")]
    AddressNotFound(String),

    #[error("default route address not found")]
    DefaultRouteNotFound,

    #[error("multiple addresses found")]
    MultipleAddresses,

    #[error("no interfaces found")]
    NoInterfaces,

    #[error("no IP address determined")]
    NoAddress,

    #[error("internal error: {0}")]
    Internal(String),
}

impl MyipError {
    pub fn usage(kind: UsageKind, message: impl Into<String>) -> Self {
        MyipError::Usage {
            kind,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MyipError::AddressNotFound(_) | MyipError::NoAddress => 1,
            MyipError::Usage { .. } => 3,
            MyipError::DefaultRouteNotFound => 4,
            MyipError::MultipleAddresses => 5,
            MyipError::NoInterfaces => 6,
            MyipError::Internal(_) => 10,
        }
    }
}

impl From<std::io::Error> for MyipError {
    fn from(err: std::io::Error) -> Self {
        MyipError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(MyipError::NoAddress.exit_code(), 1);
        assert_eq!(MyipError::AddressNotFound("en0".into()).exit_code(), 1);
        assert_eq!(
            MyipError::usage(UsageKind::ConflictingOptions, "-4 and -6").exit_code(),
            3
        );
        assert_eq!(MyipError::DefaultRouteNotFound.exit_code(), 4);
        assert_eq!(MyipError::MultipleAddresses.exit_code(), 5);
        assert_eq!(MyipError::NoInterfaces.exit_code(), 6);
        assert!(MyipError::Internal("boom".into()).exit_code() >= 10);
    }

    #[test]
    fn test_usage_message_is_prefixed_with_kind() {
        let err = MyipError::usage(UsageKind::MissingArgument, "-i requires NAME");
        assert_eq!(err.to_string(), "missing argument: -i requires NAME");
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: MyipError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert_eq!(err.exit_code(), 10);
    }
}
