use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::values::{DisplayName, UniqueId};

/// The example entity.
///
/// Fields are private and only reachable through accessors; the struct can
/// only be built from validated value objects, so an `Example` in hand is
/// always well-formed. Timestamps are optional because an entity may exist
/// before it is persisted (no `date_created` yet) and deletion is a marker,
/// not a removal.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    id: UniqueId,
    name: DisplayName,
    date_created: Option<DateTime<Utc>>,
    date_deleted: Option<DateTime<Utc>>,
}

impl Example {
    /// Assemble an entity, generating a fresh id when none is supplied.
    pub fn create(
        id: Option<UniqueId>,
        name: DisplayName,
        date_created: Option<DateTime<Utc>>,
        date_deleted: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(UniqueId::generate),
            name,
            date_created,
            date_deleted,
        }
    }

    pub fn id(&self) -> UniqueId {
        self.id
    }

    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    pub fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }

    pub fn date_deleted(&self) -> Option<DateTime<Utc>> {
        self.date_deleted
    }
}

/// Transport shape of an example at the HTTP boundary.
///
/// Everything is optional and stringly-typed on purpose: requests arrive
/// with whatever fields the caller sent, and validation happens when the
/// DTO is lifted into the domain, not during deserialization. Absent fields
/// are omitted from responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExampleDto {
    /// Canonical hyphenated v4 UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name, 2 to 50 letters or numbers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// RFC 3339 creation timestamp, set by the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    /// RFC 3339 soft-deletion timestamp, absent while the example is live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_deleted: Option<String>,
}
