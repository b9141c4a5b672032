use crate::error::ExampleResult;
use crate::models::ExampleDto;
use crate::values::UniqueId;

/// Service request addressing one example by id.
///
/// Construction validates the raw path segment, so a request in hand always
/// carries a well-formed identifier. The authorized id is the caller's own
/// identity when authentication is in front; none of the current use cases
/// consult it yet, but the seam is where access checks will live.
#[derive(Debug, Clone)]
pub struct UuidRequest {
    id: UniqueId,
    authorized_id: Option<UniqueId>,
}

impl UuidRequest {
    /// Validate a raw identifier into a request. Fails with `UID_INVALID`.
    pub fn create(id: &str, authorized_id: Option<UniqueId>) -> ExampleResult<Self> {
        Ok(Self {
            id: UniqueId::create(id)?,
            authorized_id,
        })
    }

    pub fn id(&self) -> &UniqueId {
        &self.id
    }

    pub fn authorized_id(&self) -> Option<&UniqueId> {
        self.authorized_id.as_ref()
    }
}

/// Service request carrying an example payload.
///
/// The DTO is passed through untouched; the service decides which fields a
/// given use case requires.
#[derive(Debug, Clone)]
pub struct ExampleRequest {
    example: ExampleDto,
    authorized_id: Option<UniqueId>,
}

impl ExampleRequest {
    pub fn create(example: ExampleDto, authorized_id: Option<UniqueId>) -> Self {
        Self {
            example,
            authorized_id,
        }
    }

    pub fn example(&self) -> &ExampleDto {
        &self.example
    }

    pub fn authorized_id(&self) -> Option<&UniqueId> {
        self.authorized_id.as_ref()
    }
}
