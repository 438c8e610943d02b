//! Doctor profiles: model, request DTOs, commands/queries and their mapping.
//!
//! The production handlers and storage live in other services; this crate
//! also ships a small in-memory handler set so the API can run standalone.

pub mod commands;
pub mod doctor;
pub mod handlers;
pub mod mapper;
pub mod queries;
pub mod repository;
pub mod requests;

pub use commands::{CreateDoctorCommand, DeleteDoctorCommand, UpdateDoctorCommand};
pub use doctor::{Doctor, DoctorDetails, DoctorStatus};
pub use handlers::{register_in_memory_handlers, DoctorHandlers};
pub use queries::{
    FilterByOfficeQuery, FilterBySpecializationQuery, SearchByNameQuery, ViewByIdQuery,
    ViewDoctorsQuery,
};
pub use repository::{DoctorRepository, InMemoryDoctorRepository};
pub use requests::{CreateDoctorRequest, SearchByNameRequest, UpdateDoctorRequest};
