#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

/// Result type with custom Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error information
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub struct Error {
    /// Type of error and additional information
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub error_type: ErrorType,

    /// Where this error occurred
    pub location: String,
}

/// Possible error types
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[derive(Debug, Clone)]
pub enum ErrorType {
    /// This error was not labeled :(
    LabelMe,

    // ? User related errors
    UnknownUser,
    Banned,
    NotBanned,

    // ? Event related errors
    UnknownEvent,
    CannotPublishPastEvent,
    InvalidCapacity,
    CapacityBelowConfirmed {
        confirmed: u64,
    },

    // ? Guest related errors
    UnknownGuest,
    AlreadyInvited,

    // ? User safety related errors
    UnknownReport,
    CannotReportYourself,
    AlreadyReported,
    ReportAlreadyReviewed,
    UnknownPenalty,
    CannotPenalizeAdmin,
    DurationRequired,
    DurationNotAllowed,

    // ? Permission errors
    NotOwner,
    NotPrivileged,

    // ? General errors
    DatabaseError {
        operation: String,
        collection: String,
    },
    InternalError,
    InvalidOperation,
    NotFound,
    FailedValidation {
        error: String,
    },
}

/// Rough classification of an error, mirroring the HTTP status a transport
/// layer would map it to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input shape
    Validation,
    /// Invariant violation against existing state
    Conflict,
    /// Authorization or role violation
    Forbidden,
    /// Referenced entity does not exist
    NotFound,
    /// Everything else
    Internal,
}

impl ErrorType {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorType::CannotPublishPastEvent
            | ErrorType::InvalidCapacity
            | ErrorType::DurationRequired
            | ErrorType::DurationNotAllowed
            | ErrorType::InvalidOperation
            | ErrorType::FailedValidation { .. } => ErrorKind::Validation,

            ErrorType::NotBanned
            | ErrorType::CapacityBelowConfirmed { .. }
            | ErrorType::AlreadyInvited
            | ErrorType::AlreadyReported
            | ErrorType::ReportAlreadyReviewed => ErrorKind::Conflict,

            ErrorType::Banned
            | ErrorType::CannotReportYourself
            | ErrorType::CannotPenalizeAdmin
            | ErrorType::NotOwner
            | ErrorType::NotPrivileged => ErrorKind::Forbidden,

            ErrorType::UnknownUser
            | ErrorType::UnknownEvent
            | ErrorType::UnknownGuest
            | ErrorType::UnknownReport
            | ErrorType::UnknownPenalty
            | ErrorType::NotFound => ErrorKind::NotFound,

            ErrorType::LabelMe
            | ErrorType::DatabaseError { .. }
            | ErrorType::InternalError => ErrorKind::Internal,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        self.error_type.kind()
    }
}

#[macro_export]
macro_rules! create_error {
    ( $error: ident $( $tt:tt )? ) => {
        $crate::Error {
            error_type: $crate::ErrorType::$error $( $tt )?,
            location: format!("{}:{}:{}", file!(), line!(), column!()),
        }
    };
}

#[macro_export]
macro_rules! create_database_error {
    ( $operation: expr, $collection: expr ) => {
        create_error!(DatabaseError {
            operation: $operation.to_string(),
            collection: $collection.to_string()
        })
    };
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        Ok($self.$type($collection, $($rest),+).await.unwrap())
    };
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! query {
    ( $self: ident, $type: ident, $collection: expr, $($rest:expr),+ ) => {
        $self.$type($collection, $($rest),+).await
            .map_err(|_| create_database_error!(stringify!($type), $collection))
    };
}
