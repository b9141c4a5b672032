use thiserror::Error;

/// Result type alias for example domain operations
pub type ExampleResult<T> = Result<T, ExampleError>;

/// The closed set of failures the examples domain can report.
///
/// Variants split into client errors (caller-correctable, rendered as HTTP
/// 400 with their code and message) and internal errors (server-side faults,
/// rendered as HTTP 500 with a generic message). [`ExampleError::is_client`]
/// draws the line; everything a driver throws is coerced into
/// [`ExampleError::Unknown`] so no foreign error shape ever reaches
/// classification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExampleError {
    // -- Client errors --------------------------------------------------
    /// The supplied identifier is not a valid v4 UUID.
    #[error("The supplied UUID is not a valid v4 UUID.")]
    UidInvalid,

    /// The supplied name fails the display name rules.
    #[error("The supplied name is not valid. A name must be 2 to 50 letters or numbers.")]
    NameInvalid,

    /// Another example already holds the requested name.
    #[error("The supplied name is already in use. Please pick a different name.")]
    NameUsed,

    /// The path identifier and the request body identifier disagree.
    #[error("The path UUID does not match the request body UUID.")]
    IdMismatch,

    /// A required field is absent. The payload names what was expected.
    #[error("One or more required fields are missing. Expected {0}.")]
    MissingReq(&'static str),

    /// The create use case could not complete.
    #[error("The example couldn't be created.")]
    ExampleCreate,

    /// No example matches the requested identifier.
    #[error("The example couldn't be found.")]
    ExampleRead,

    /// The update use case could not complete.
    #[error("The example couldn't be updated.")]
    ExampleUpdate,

    /// The delete use case could not complete.
    #[error("The example couldn't be deleted.")]
    ExampleDelete,

    // -- Internal errors ------------------------------------------------
    /// A domain object could not be assembled from trusted data.
    #[error("A domain object couldn't be constructed: {0}")]
    DomainObject(String),

    /// A unit of work was used without a checked-out connection.
    #[error("The unit of work has no database connection.")]
    UowClient,

    /// Anything the taxonomy does not name.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ExampleError {
    /// Stable symbolic code for this failure. Codes are API surface; the
    /// human-readable messages are free to change, the codes are not.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UidInvalid => "UID_INVALID",
            Self::NameInvalid => "NAME_INVALID",
            Self::NameUsed => "NAME_USED",
            Self::IdMismatch => "ID_MISMATCH",
            Self::MissingReq(_) => "MISSING_REQ",
            Self::ExampleCreate => "EXAMPLE_CREATE",
            Self::ExampleRead => "EXAMPLE_READ",
            Self::ExampleUpdate => "EXAMPLE_UPDATE",
            Self::ExampleDelete => "EXAMPLE_DELETE",
            Self::DomainObject(_) => "DOMAIN_OBJECT",
            Self::UowClient => "UOW_CLIENT",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// Whether the caller can correct this failure by changing the request.
    pub const fn is_client(&self) -> bool {
        matches!(
            self,
            Self::UidInvalid
                | Self::NameInvalid
                | Self::NameUsed
                | Self::IdMismatch
                | Self::MissingReq(_)
                | Self::ExampleCreate
                | Self::ExampleRead
                | Self::ExampleUpdate
                | Self::ExampleDelete
        )
    }
}

impl From<sqlx::Error> for ExampleError {
    fn from(err: sqlx::Error) -> Self {
        Self::Unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_client() {
        let client_errors = [
            ExampleError::UidInvalid,
            ExampleError::NameInvalid,
            ExampleError::NameUsed,
            ExampleError::IdMismatch,
            ExampleError::MissingReq("id"),
            ExampleError::ExampleCreate,
            ExampleError::ExampleRead,
            ExampleError::ExampleUpdate,
            ExampleError::ExampleDelete,
        ];

        for err in client_errors {
            assert!(err.is_client(), "{} should be a client error", err.code());
        }
    }

    #[test]
    fn test_internal_errors_are_not_client() {
        let internal_errors = [
            ExampleError::DomainObject("shape".to_string()),
            ExampleError::UowClient,
            ExampleError::Unknown("driver exploded".to_string()),
        ];

        for err in internal_errors {
            assert!(!err.is_client(), "{} should be internal", err.code());
        }
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ExampleError::UidInvalid.code(), "UID_INVALID");
        assert_eq!(ExampleError::NameUsed.code(), "NAME_USED");
        assert_eq!(ExampleError::IdMismatch.code(), "ID_MISMATCH");
        assert_eq!(ExampleError::MissingReq("id").code(), "MISSING_REQ");
        assert_eq!(ExampleError::ExampleRead.code(), "EXAMPLE_READ");
        assert_eq!(ExampleError::UowClient.code(), "UOW_CLIENT");
    }

    #[test]
    fn test_missing_req_names_the_expectation() {
        let err = ExampleError::MissingReq("at least name");
        assert_eq!(
            err.to_string(),
            "One or more required fields are missing. Expected at least name."
        );
    }

    #[test]
    fn test_sqlx_errors_collapse_into_unknown() {
        let err: ExampleError = sqlx::Error::RowNotFound.into();

        assert_eq!(err.code(), "UNKNOWN");
        assert!(!err.is_client());
        assert!(err.to_string().starts_with("Unknown error:"));
    }
}
