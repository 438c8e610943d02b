//! Request DTO + route/query parameters → command/query conversions.

use innoclinic_core::{AccountId, DoctorId, PageRequest};

use crate::commands::{CreateDoctorCommand, UpdateDoctorCommand};
use crate::queries::SearchByNameQuery;
use crate::requests::{CreateDoctorRequest, SearchByNameRequest, UpdateDoctorRequest};

impl From<(AccountId, CreateDoctorRequest)> for CreateDoctorCommand {
    fn from((account_id, request): (AccountId, CreateDoctorRequest)) -> Self {
        Self {
            account_id,
            details: request.into(),
        }
    }
}

impl From<(DoctorId, UpdateDoctorRequest)> for UpdateDoctorCommand {
    fn from((id, request): (DoctorId, UpdateDoctorRequest)) -> Self {
        Self {
            id,
            details: request.into(),
        }
    }
}

impl From<(SearchByNameRequest, PageRequest)> for SearchByNameQuery {
    fn from((request, page): (SearchByNameRequest, PageRequest)) -> Self {
        Self {
            first_name: non_blank(request.first_name),
            last_name: non_blank(request.last_name),
            middle_name: non_blank(request.middle_name),
            page,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
