//! Request DTOs bound from HTTP bodies and query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use innoclinic_core::{OfficeId, SpecializationId};

use crate::doctor::{DoctorDetails, DoctorStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub specialization_id: SpecializationId,
    pub office_id: OfficeId,
    pub career_start_year: i32,
    /// New profiles start `atWork` unless stated otherwise.
    #[serde(default)]
    pub status: DoctorStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub specialization_id: SpecializationId,
    pub office_id: OfficeId,
    pub career_start_year: i32,
    pub status: DoctorStatus,
}

/// Name parts to search by; blank parts are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchByNameRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
}

impl From<CreateDoctorRequest> for DoctorDetails {
    fn from(r: CreateDoctorRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            date_of_birth: r.date_of_birth,
            specialization_id: r.specialization_id,
            office_id: r.office_id,
            career_start_year: r.career_start_year,
            status: r.status,
        }
    }
}

impl From<UpdateDoctorRequest> for DoctorDetails {
    fn from(r: UpdateDoctorRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            middle_name: r.middle_name,
            date_of_birth: r.date_of_birth,
            specialization_id: r.specialization_id,
            office_id: r.office_id,
            career_start_year: r.career_start_year,
            status: r.status,
        }
    }
}
