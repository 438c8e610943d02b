//! OpenAPI document for the Profiles API.

use utoipa::OpenApi;

use innoclinic_core::{AccountId, DoctorId, Error, ErrorKind, OfficeId, SpecializationId};
use innoclinic_host::BearerAuth;
use innoclinic_profiles::{CreateDoctorRequest, Doctor, DoctorStatus, UpdateDoctorRequest};

use crate::controllers::doctors;

#[derive(OpenApi)]
#[openapi(
    info(title = "Profiles API", description = "Doctor profiles"),
    paths(
        doctors::create_profile,
        doctors::delete_doctor,
        doctors::update_doctor,
        doctors::filter_by_office,
        doctors::filter_by_specialization,
        doctors::search_by_name,
        doctors::view_by_id,
        doctors::view_doctors,
    ),
    components(schemas(
        Doctor,
        DoctorStatus,
        CreateDoctorRequest,
        UpdateDoctorRequest,
        Error,
        ErrorKind,
        DoctorId,
        AccountId,
        OfficeId,
        SpecializationId
    )),
    modifiers(&BearerAuth),
    tags((name = "doctors", description = "Doctor profile endpoints"))
)]
pub struct ApiDoc;
