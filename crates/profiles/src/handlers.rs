//! Command/query handlers over a [`DoctorRepository`].
//!
//! These keep to what the request shapes imply (existence, duplicates,
//! paging bounds) so the API can run without the clinic back office.

use std::sync::Arc;

use async_trait::async_trait;

use innoclinic_core::{DoctorId, Error, Outcome, Page};
use innoclinic_mediator::{MediatorBuilder, RequestHandler};

use crate::commands::{CreateDoctorCommand, DeleteDoctorCommand, UpdateDoctorCommand};
use crate::doctor::Doctor;
use crate::queries::{
    FilterByOfficeQuery, FilterBySpecializationQuery, SearchByNameQuery, ViewByIdQuery,
    ViewDoctorsQuery,
};
use crate::repository::DoctorRepository;

/// One handler value serving every doctor command and query.
#[derive(Clone)]
pub struct DoctorHandlers {
    repository: Arc<dyn DoctorRepository>,
}

impl DoctorHandlers {
    pub fn new(repository: Arc<dyn DoctorRepository>) -> Self {
        Self { repository }
    }
}

/// Register the handlers for all doctor requests on `builder`.
pub fn register_in_memory_handlers(
    builder: &mut MediatorBuilder,
    repository: Arc<dyn DoctorRepository>,
) -> &mut MediatorBuilder {
    let handlers = DoctorHandlers::new(repository);
    builder
        .register::<CreateDoctorCommand, _>(handlers.clone())
        .register::<DeleteDoctorCommand, _>(handlers.clone())
        .register::<UpdateDoctorCommand, _>(handlers.clone())
        .register::<FilterByOfficeQuery, _>(handlers.clone())
        .register::<FilterBySpecializationQuery, _>(handlers.clone())
        .register::<SearchByNameQuery, _>(handlers.clone())
        .register::<ViewByIdQuery, _>(handlers.clone())
        .register::<ViewDoctorsQuery, _>(handlers)
}

fn not_found(id: DoctorId) -> Error {
    Error::not_found("doctor.not_found", format!("doctor {id} was not found"))
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait]
impl RequestHandler<CreateDoctorCommand> for DoctorHandlers {
    async fn handle(&self, command: CreateDoctorCommand) -> Outcome<Doctor> {
        command.details.validate()?;

        let doctor = self
            .repository
            .insert_unique(command.account_id, command.details)
            .map_err(|existing| {
                Error::conflict(
                    "doctor.account_taken",
                    format!(
                        "account {} already has doctor profile {}",
                        existing.account_id, existing.id
                    ),
                )
            })?;
        tracing::info!(doctor_id = %doctor.id, account_id = %doctor.account_id, "doctor profile created");
        Ok(doctor)
    }
}

#[async_trait]
impl RequestHandler<DeleteDoctorCommand> for DoctorHandlers {
    async fn handle(&self, command: DeleteDoctorCommand) -> Outcome<()> {
        if !self.repository.remove(command.id) {
            return Err(not_found(command.id).into());
        }
        tracing::info!(doctor_id = %command.id, "doctor profile deleted");
        Ok(())
    }
}

#[async_trait]
impl RequestHandler<UpdateDoctorCommand> for DoctorHandlers {
    async fn handle(&self, command: UpdateDoctorCommand) -> Outcome<Doctor> {
        command.details.validate()?;

        self.repository
            .update(command.id, command.details)
            .ok_or_else(|| not_found(command.id).into())
    }
}

#[async_trait]
impl RequestHandler<FilterByOfficeQuery> for DoctorHandlers {
    async fn handle(&self, query: FilterByOfficeQuery) -> Outcome<Page<Doctor>> {
        query.page.validate()?;

        let matching = self
            .repository
            .list()
            .into_iter()
            .filter(|d| d.details.office_id == query.office_id)
            .collect();
        Ok(Page::paginate(matching, query.page))
    }
}

#[async_trait]
impl RequestHandler<FilterBySpecializationQuery> for DoctorHandlers {
    async fn handle(&self, query: FilterBySpecializationQuery) -> Outcome<Page<Doctor>> {
        query.page.validate()?;

        let matching = self
            .repository
            .list()
            .into_iter()
            .filter(|d| d.details.specialization_id == query.specialization_id)
            .collect();
        Ok(Page::paginate(matching, query.page))
    }
}

#[async_trait]
impl RequestHandler<SearchByNameQuery> for DoctorHandlers {
    async fn handle(&self, query: SearchByNameQuery) -> Outcome<Page<Doctor>> {
        query.page.validate()?;

        if query.first_name.is_none() && query.last_name.is_none() && query.middle_name.is_none() {
            return Err(Error::validation(
                "search.name_required",
                "at least one of firstName, lastName or middleName is required",
            )
            .into());
        }

        let matching = self
            .repository
            .list()
            .into_iter()
            .filter(|d| {
                let first = query
                    .first_name
                    .as_deref()
                    .is_none_or(|n| contains_ci(&d.details.first_name, n));
                let last = query
                    .last_name
                    .as_deref()
                    .is_none_or(|n| contains_ci(&d.details.last_name, n));
                let middle = query.middle_name.as_deref().is_none_or(|n| {
                    d.details
                        .middle_name
                        .as_deref()
                        .is_some_and(|m| contains_ci(m, n))
                });
                first && last && middle
            })
            .collect();
        Ok(Page::paginate(matching, query.page))
    }
}

#[async_trait]
impl RequestHandler<ViewByIdQuery> for DoctorHandlers {
    async fn handle(&self, query: ViewByIdQuery) -> Outcome<Doctor> {
        self.repository
            .get(query.id)
            .ok_or_else(|| not_found(query.id).into())
    }
}

#[async_trait]
impl RequestHandler<ViewDoctorsQuery> for DoctorHandlers {
    async fn handle(&self, query: ViewDoctorsQuery) -> Outcome<Page<Doctor>> {
        query.page.validate()?;
        Ok(Page::paginate(self.repository.list(), query.page))
    }
}
