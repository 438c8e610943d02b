//! Queries: read-only requests over doctor profiles.

use innoclinic_core::{DoctorId, OfficeId, Page, PageRequest, SpecializationId};
use innoclinic_mediator::Request;

use crate::doctor::Doctor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterByOfficeQuery {
    pub office_id: OfficeId,
    pub page: PageRequest,
}

impl FilterByOfficeQuery {
    pub fn new(office_id: OfficeId, page: PageRequest) -> Self {
        Self { office_id, page }
    }
}

impl Request for FilterByOfficeQuery {
    type Response = Page<Doctor>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBySpecializationQuery {
    pub specialization_id: SpecializationId,
    pub page: PageRequest,
}

impl FilterBySpecializationQuery {
    pub fn new(specialization_id: SpecializationId, page: PageRequest) -> Self {
        Self {
            specialization_id,
            page,
        }
    }
}

impl Request for FilterBySpecializationQuery {
    type Response = Page<Doctor>;
}

/// Case-insensitive substring search over the supplied name parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchByNameQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub page: PageRequest,
}

impl Request for SearchByNameQuery {
    type Response = Page<Doctor>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewByIdQuery {
    pub id: DoctorId,
}

impl ViewByIdQuery {
    pub fn new(id: DoctorId) -> Self {
        Self { id }
    }
}

impl Request for ViewByIdQuery {
    type Response = Doctor;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewDoctorsQuery {
    pub page: PageRequest,
}

impl ViewDoctorsQuery {
    pub fn new(page: PageRequest) -> Self {
        Self { page }
    }
}

impl Request for ViewDoctorsQuery {
    type Response = Page<Doctor>;
}
