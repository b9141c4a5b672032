use std::sync::Arc;
use tracing::{error, instrument};

use crate::error::{ExampleError, ExampleResult};
use crate::mapper;
use crate::models::ExampleDto;
use crate::requests::{ExampleRequest, UuidRequest};
use crate::responses::ExampleResponse;
use crate::unit_of_work::{UnitOfWork, UnitOfWorkFactory};
use crate::values::{DisplayName, UniqueId};

/// Use case orchestration for examples.
///
/// Every public method runs the same shape: take a fresh unit of work from
/// the factory, run the attempt (connect, begin, one repository call,
/// commit), then conclude. A failed attempt is rolled back and classified;
/// nothing escapes as an `Err`. The context error names the use case and
/// prefixes every client-visible failure message.
pub struct ExampleService<F: UnitOfWorkFactory> {
    uow_factory: Arc<F>,
}

impl<F: UnitOfWorkFactory> ExampleService<F> {
    pub fn new(uow_factory: F) -> Self {
        Self {
            uow_factory: Arc::new(uow_factory),
        }
    }

    /// Create an example from the request's payload.
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: ExampleRequest) -> ExampleResponse {
        let mut uow = self.uow_factory.unit_of_work();
        let attempt = create_in_transaction(&mut uow, &request).await;

        conclude(uow, attempt, &ExampleError::ExampleCreate).await
    }

    /// Read one example by id.
    #[instrument(skip(self, request))]
    pub async fn read(&self, request: UuidRequest) -> ExampleResponse {
        let mut uow = self.uow_factory.unit_of_work();
        let attempt = read_in_transaction(&mut uow, &request).await;

        conclude(uow, attempt, &ExampleError::ExampleRead).await
    }

    /// Rename an example. The payload must carry both the id and the new
    /// name.
    #[instrument(skip(self, request))]
    pub async fn update(&self, request: ExampleRequest) -> ExampleResponse {
        let mut uow = self.uow_factory.unit_of_work();
        let attempt = update_in_transaction(&mut uow, &request).await;

        conclude(uow, attempt, &ExampleError::ExampleUpdate).await
    }

    /// Soft-delete one example by id.
    #[instrument(skip(self, request))]
    pub async fn delete(&self, request: UuidRequest) -> ExampleResponse {
        let mut uow = self.uow_factory.unit_of_work();
        let attempt = delete_in_transaction(&mut uow, &request).await;

        conclude(uow, attempt, &ExampleError::ExampleDelete).await
    }
}

impl<F: UnitOfWorkFactory> Clone for ExampleService<F> {
    fn clone(&self) -> Self {
        Self {
            uow_factory: Arc::clone(&self.uow_factory),
        }
    }
}

async fn create_in_transaction<U: UnitOfWork>(
    uow: &mut U,
    request: &ExampleRequest,
) -> ExampleResult<ExampleDto> {
    uow.connect().await?;
    uow.begin().await?;

    let example = mapper::dto_to_domain(request.example())?;
    let created = uow.examples()?.create(&example).await?;

    uow.commit().await?;
    Ok(mapper::domain_to_dto(&created))
}

async fn read_in_transaction<U: UnitOfWork>(
    uow: &mut U,
    request: &UuidRequest,
) -> ExampleResult<ExampleDto> {
    uow.connect().await?;
    uow.begin().await?;

    let example = uow.examples()?.read(request.id()).await?;

    uow.commit().await?;
    Ok(mapper::domain_to_dto(&example))
}

async fn update_in_transaction<U: UnitOfWork>(
    uow: &mut U,
    request: &ExampleRequest,
) -> ExampleResult<ExampleDto> {
    uow.connect().await?;
    uow.begin().await?;

    let dto = request.example();

    // Presence first, format second: a payload missing a field reports
    // MISSING_REQ even when the fields it does carry are malformed.
    let raw_id = dto.id.as_deref().ok_or(ExampleError::MissingReq("id"))?;
    let raw_name = dto
        .name
        .as_deref()
        .ok_or(ExampleError::MissingReq("at least name"))?;

    let id = UniqueId::create(raw_id)?;
    let name = DisplayName::create(raw_name)?;

    let updated = uow.examples()?.update(&id, Some(name)).await?;

    uow.commit().await?;
    Ok(mapper::domain_to_dto(&updated))
}

async fn delete_in_transaction<U: UnitOfWork>(
    uow: &mut U,
    request: &UuidRequest,
) -> ExampleResult<ExampleDto> {
    uow.connect().await?;
    uow.begin().await?;

    let example = uow.examples()?.delete(request.id()).await?;

    uow.commit().await?;
    Ok(mapper::domain_to_dto(&example))
}

/// Shared conclusion of every use case.
///
/// On failure the transaction is rolled back before the response is shaped;
/// rollback is safe whether or not the attempt ever connected. A rollback
/// failure is logged and swallowed so the original failure still determines
/// what the caller sees.
async fn conclude<U: UnitOfWork>(
    mut uow: U,
    attempt: ExampleResult<ExampleDto>,
    context: &ExampleError,
) -> ExampleResponse {
    match attempt {
        Ok(item) => ExampleResponse::success(item),
        Err(err) => {
            if let Err(rollback_err) = uow.rollback().await {
                error!(error = %rollback_err, "Rollback failed after an aborted attempt");
            }
            ExampleResponse::from_failure(context, err)
        }
    }
}
