//! `innoclinic-core`: shared building blocks for the clinic services.
//!
//! This crate contains **pure** primitives (no HTTP, no storage concerns).

pub mod error;
pub mod id;
pub mod pagination;

pub use error::{Error, ErrorKind, Errors, Outcome};
pub use id::{AccountId, DoctorId, OfficeId, SpecializationId};
pub use pagination::{Page, PageRequest};
