use axum::http::StatusCode;

use crate::error::ExampleError;
use crate::models::ExampleDto;

/// Three-way outcome of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Fail,
    Error,
}

impl Outcome {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
            Outcome::Error => "error",
        }
    }
}

/// Service-level response for the examples domain.
///
/// The enum shape is the point: a success carries an item and nothing else,
/// a fail carries the code and message the caller will see, an error carries
/// a detail that stays server-side. There is no way to assemble a response
/// whose outcome, payload, and status code disagree. Handlers translate
/// this into the HTTP envelope one-to-one.
#[derive(Debug, Clone, PartialEq)]
pub enum ExampleResponse {
    /// The use case completed; rendered as HTTP 200 with the item.
    Success { item: ExampleDto },
    /// A caller-correctable failure; rendered as HTTP 400 with code and
    /// message.
    Fail {
        code: &'static str,
        message: String,
    },
    /// An internal failure; rendered as HTTP 500. The detail is logged,
    /// never sent.
    Error {
        code: &'static str,
        detail: String,
    },
}

impl ExampleResponse {
    pub fn success(item: ExampleDto) -> Self {
        Self::Success { item }
    }

    pub fn fail(err: &ExampleError, message: String) -> Self {
        Self::Fail {
            code: err.code(),
            message,
        }
    }

    pub fn error(err: &ExampleError) -> Self {
        Self::Error {
            code: err.code(),
            detail: err.to_string(),
        }
    }

    /// Shape a failed attempt the uniform way.
    ///
    /// Client errors keep their own code and gain the use case's message as
    /// a prefix, so the caller learns both which operation failed and why.
    /// Everything else is internal and carries no caller-visible detail.
    pub fn from_failure(context: &ExampleError, err: ExampleError) -> Self {
        if err.is_client() {
            let message = format!("{context} {err}");
            Self::fail(&err, message)
        } else {
            Self::error(&err)
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self {
            Self::Success { .. } => Outcome::Success,
            Self::Fail { .. } => Outcome::Fail,
            Self::Error { .. } => Outcome::Error,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.outcome() {
            Outcome::Success => StatusCode::OK,
            Outcome::Fail => StatusCode::BAD_REQUEST,
            Outcome::Error => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_maps_to_200() {
        let response = ExampleResponse::success(ExampleDto::default());

        assert_eq!(response.outcome(), Outcome::Success);
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_client_failure_maps_to_400_with_prefixed_message() {
        let response =
            ExampleResponse::from_failure(&ExampleError::ExampleCreate, ExampleError::NameUsed);

        assert_eq!(response.outcome(), Outcome::Fail);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response,
            ExampleResponse::Fail {
                code: "NAME_USED",
                message: "The example couldn't be created. The supplied name is already in use. \
                          Please pick a different name."
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_internal_failure_maps_to_500() {
        let response = ExampleResponse::from_failure(
            &ExampleError::ExampleRead,
            ExampleError::Unknown("connection reset".to_string()),
        );

        assert_eq!(response.outcome(), Outcome::Error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        match response {
            ExampleResponse::Error { code, detail } => {
                assert_eq!(code, "UNKNOWN");
                assert!(detail.contains("connection reset"));
            }
            other => panic!("expected an error response, got {other:?}"),
        }
    }

    #[test]
    fn test_outcome_strings_match_the_wire_protocol() {
        assert_eq!(Outcome::Success.as_str(), "success");
        assert_eq!(Outcome::Fail.as_str(), "fail");
        assert_eq!(Outcome::Error.as_str(), "error");
    }
}
