//! Commands: requests that change doctor profiles.

use innoclinic_core::{AccountId, DoctorId};
use innoclinic_mediator::Request;

use crate::doctor::{Doctor, DoctorDetails};

/// Create a profile for an existing account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDoctorCommand {
    pub account_id: AccountId,
    pub details: DoctorDetails,
}

impl Request for CreateDoctorCommand {
    type Response = Doctor;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteDoctorCommand {
    pub id: DoctorId,
}

impl DeleteDoctorCommand {
    pub fn new(id: DoctorId) -> Self {
        Self { id }
    }
}

impl Request for DeleteDoctorCommand {
    type Response = ();
}

/// Replace the editable details of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDoctorCommand {
    pub id: DoctorId,
    pub details: DoctorDetails,
}

impl Request for UpdateDoctorCommand {
    type Response = Doctor;
}
