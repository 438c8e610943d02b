use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use innoclinic_core::{AccountId, DoctorId, Error, OfficeId, SpecializationId};

/// Working status of a doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum DoctorStatus {
    #[default]
    AtWork,
    OnVacation,
    SickDay,
    SickLeave,
    SelfIsolation,
    LeaveWithoutPay,
    Inactive,
}

/// Editable part of a doctor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetails {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub date_of_birth: NaiveDate,
    pub specialization_id: SpecializationId,
    pub office_id: OfficeId,
    pub career_start_year: i32,
    pub status: DoctorStatus,
}

impl DoctorDetails {
    /// Shape checks only; anything needing other services is not checked here.
    pub fn validate(&self) -> Result<(), Error> {
        if self.first_name.trim().is_empty() {
            return Err(Error::validation("doctor.first_name_required", "first name is required"));
        }
        if self.last_name.trim().is_empty() {
            return Err(Error::validation("doctor.last_name_required", "last name is required"));
        }
        Ok(())
    }
}

/// A doctor profile as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: DoctorId,
    pub account_id: AccountId,
    #[serde(flatten)]
    pub details: DoctorDetails,
}
