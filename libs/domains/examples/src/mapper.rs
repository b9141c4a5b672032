use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::{ExampleError, ExampleResult};
use crate::models::{Example, ExampleDto};
use crate::values::{DisplayName, UniqueId};

/// Persistence shape of one `api.examples` row.
#[derive(Debug, Clone, FromRow)]
pub struct ExampleRow {
    pub id: Uuid,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_deleted: Option<DateTime<Utc>>,
}

/// Lift a transport DTO into the domain.
///
/// Field-level problems surface as their own client errors (`UID_INVALID`,
/// `NAME_INVALID`); a DTO with no name at all is a shape violation the
/// handlers should have caught, so it reports as internal `DOMAIN_OBJECT`.
/// A fresh id is generated when the DTO carries none.
pub fn dto_to_domain(dto: &ExampleDto) -> ExampleResult<Example> {
    let name = match dto.name.as_deref() {
        Some(raw) => DisplayName::create(raw)?,
        None => {
            return Err(ExampleError::DomainObject(
                "the example DTO has no name".to_string(),
            ));
        }
    };

    let id = match dto.id.as_deref() {
        Some(raw) => Some(UniqueId::create(raw)?),
        None => None,
    };

    let date_created = parse_date(dto.date_created.as_deref())?;
    let date_deleted = parse_date(dto.date_deleted.as_deref())?;

    Ok(Example::create(id, name, date_created, date_deleted))
}

/// Lift a persisted row into the domain.
///
/// Rows re-enter through the same value objects as user input, so a corrupt
/// row cannot smuggle an invalid name or id past the type layer. The id is
/// always the row's own: after an insert this is how the caller learns the
/// identifier the database actually assigned.
pub fn db_to_domain(row: &ExampleRow) -> ExampleResult<Example> {
    let id = UniqueId::from_uuid(row.id)?;
    let name = DisplayName::create(&row.name)?;

    Ok(Example::create(
        Some(id),
        name,
        Some(row.date_created),
        row.date_deleted,
    ))
}

/// Flatten the entity into its transport shape.
pub fn domain_to_dto(example: &Example) -> ExampleDto {
    ExampleDto {
        id: Some(example.id().to_string()),
        name: Some(example.name().to_string()),
        date_created: example.date_created().map(|date| date.to_rfc3339()),
        date_deleted: example.date_deleted().map(|date| date.to_rfc3339()),
    }
}

fn parse_date(raw: Option<&str>) -> ExampleResult<Option<DateTime<Utc>>> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(|e| ExampleError::DomainObject(format!("bad date in example DTO: {e}"))),
        None => Ok(None),
    }
}
