//! `/api/doctors` controller.
//!
//! Every action follows the same shape: the role guard runs first, the
//! action builds one command/query from the path, query string and body,
//! sends it through the mediator and maps the outcome (`200`/`204`, or `400`
//! with the first error).

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::Response,
    routing::{delete, get, post, put, MethodRouter},
    Json, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use innoclinic_core::{AccountId, DoctorId, Error, OfficeId, Page, PageRequest, SpecializationId};
use innoclinic_host::{require_roles, response, RouteDoc};
use innoclinic_mediator::Mediator;
use innoclinic_profiles::{
    CreateDoctorCommand, CreateDoctorRequest, DeleteDoctorCommand, Doctor, FilterByOfficeQuery,
    FilterBySpecializationQuery, SearchByNameQuery, SearchByNameRequest, UpdateDoctorCommand,
    UpdateDoctorRequest, ViewByIdQuery, ViewDoctorsQuery,
};

pub const CREATE_PROFILE: RouteDoc =
    RouteDoc::new("POST", "/api/doctors/create-profile", "Receptionist");
pub const DELETE: RouteDoc = RouteDoc::new("DELETE", "/api/doctors/:id", "Receptionist");
pub const UPDATE: RouteDoc = RouteDoc::new("PUT", "/api/doctors/:id", "Receptionist, Doctor");
pub const FILTER_BY_OFFICE: RouteDoc = RouteDoc::new("GET", "/api/doctors/by-office", "Patient");
pub const FILTER_BY_SPECIALIZATION: RouteDoc =
    RouteDoc::new("GET", "/api/doctors/by-specialization", "Patient");
pub const SEARCH_BY_NAME: RouteDoc =
    RouteDoc::new("GET", "/api/doctors/search-by-name", "Receptionist");
pub const VIEW_BY_ID: RouteDoc = RouteDoc::new("GET", "/api/doctors/:id", "Patient");
pub const VIEW_DOCTORS: RouteDoc = RouteDoc::new("GET", "/api/doctors", "Patient");

/// Route table; drives the router and role guards below.
pub const ROUTES: [RouteDoc; 8] = [
    CREATE_PROFILE,
    DELETE,
    UPDATE,
    FILTER_BY_OFFICE,
    FILTER_BY_SPECIALIZATION,
    SEARCH_BY_NAME,
    VIEW_BY_ID,
    VIEW_DOCTORS,
];

pub fn router(mediator: Arc<Mediator>) -> Router {
    Router::new()
        .route(VIEW_DOCTORS.path, guarded(VIEW_DOCTORS, get(view_doctors)))
        .route(CREATE_PROFILE.path, guarded(CREATE_PROFILE, post(create_profile)))
        .route(FILTER_BY_OFFICE.path, guarded(FILTER_BY_OFFICE, get(filter_by_office)))
        .route(
            FILTER_BY_SPECIALIZATION.path,
            guarded(FILTER_BY_SPECIALIZATION, get(filter_by_specialization)),
        )
        .route(SEARCH_BY_NAME.path, guarded(SEARCH_BY_NAME, get(search_by_name)))
        .route(
            VIEW_BY_ID.path,
            guarded(VIEW_BY_ID, get(view_by_id))
                .merge(guarded(UPDATE, put(update_doctor)))
                .merge(guarded(DELETE, delete(delete_doctor))),
        )
        .layer(Extension(mediator))
}

fn guarded(doc: RouteDoc, route: MethodRouter) -> MethodRouter {
    require_roles(route, doc.requirement())
}

/// Query strings carrying the optional `pageNumber`/`pageSize` pair.
trait PagedQuery {
    fn page_parts(&self) -> (Option<u32>, Option<u32>);

    fn page(&self) -> PageRequest {
        let (number, size) = self.page_parts();
        PageRequest::from_parts(number, size)
    }
}

macro_rules! paged_query {
    ($($t:ty),+ $(,)?) => {
        $(
            impl PagedQuery for $t {
                fn page_parts(&self) -> (Option<u32>, Option<u32>) {
                    (self.page_number, self.page_size)
                }
            }
        )+
    };
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AccountQuery {
    /// Also accepted as `AccountId`.
    #[serde(alias = "AccountId")]
    pub account_id: AccountId,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OfficeQuery {
    pub office_id: OfficeId,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SpecializationQuery {
    pub specialization_id: SpecializationId,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
}

paged_query!(PageQuery, OfficeQuery, SpecializationQuery, SearchQuery);

#[utoipa::path(
    post,
    path = "/api/doctors/create-profile",
    params(AccountQuery),
    request_body = CreateDoctorRequest,
    responses(
        (status = 200, description = "Profile created", body = Doctor),
        (status = 400, description = "Invalid request or account already has a profile", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Receptionist role")
    ),
    security(("bearerAuth" = ["Receptionist"])),
    tag = "doctors"
)]
pub async fn create_profile(
    Extension(mediator): Extension<Arc<Mediator>>,
    Query(query): Query<AccountQuery>,
    Json(request): Json<CreateDoctorRequest>,
) -> Response {
    let command = CreateDoctorCommand::from((query.account_id, request));
    response::ok(mediator.send(command).await)
}

#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    params(("id" = i32, Path, description = "Doctor id")),
    responses(
        (status = 204, description = "Profile deleted"),
        (status = 400, description = "Unknown doctor", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Receptionist role")
    ),
    security(("bearerAuth" = ["Receptionist"])),
    tag = "doctors"
)]
pub async fn delete_doctor(
    Extension(mediator): Extension<Arc<Mediator>>,
    Path(id): Path<DoctorId>,
) -> Response {
    response::no_content(mediator.send(DeleteDoctorCommand::new(id)).await)
}

#[utoipa::path(
    put,
    path = "/api/doctors/{id}",
    params(("id" = i32, Path, description = "Doctor id")),
    request_body = UpdateDoctorRequest,
    responses(
        (status = 200, description = "Profile updated", body = Doctor),
        (status = 400, description = "Invalid request or unknown doctor", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is neither Receptionist nor Doctor")
    ),
    security(("bearerAuth" = ["Receptionist", "Doctor"])),
    tag = "doctors"
)]
pub async fn update_doctor(
    Extension(mediator): Extension<Arc<Mediator>>,
    Path(id): Path<DoctorId>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Response {
    let command = UpdateDoctorCommand::from((id, request));
    response::ok(mediator.send(command).await)
}

#[utoipa::path(
    get,
    path = "/api/doctors/by-office",
    params(OfficeQuery),
    responses(
        (status = 200, description = "Doctors working in the office", body = Page<Doctor>),
        (status = 400, description = "Invalid paging", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Patient role")
    ),
    security(("bearerAuth" = ["Patient"])),
    tag = "doctors"
)]
pub async fn filter_by_office(
    Extension(mediator): Extension<Arc<Mediator>>,
    Query(query): Query<OfficeQuery>,
) -> Response {
    let outcome = mediator
        .send(FilterByOfficeQuery::new(query.office_id, query.page()))
        .await;
    response::ok(outcome)
}

#[utoipa::path(
    get,
    path = "/api/doctors/by-specialization",
    params(SpecializationQuery),
    responses(
        (status = 200, description = "Doctors with the specialization", body = Page<Doctor>),
        (status = 400, description = "Invalid paging", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Patient role")
    ),
    security(("bearerAuth" = ["Patient"])),
    tag = "doctors"
)]
pub async fn filter_by_specialization(
    Extension(mediator): Extension<Arc<Mediator>>,
    Query(query): Query<SpecializationQuery>,
) -> Response {
    let outcome = mediator
        .send(FilterBySpecializationQuery::new(query.specialization_id, query.page()))
        .await;
    response::ok(outcome)
}

#[utoipa::path(
    get,
    path = "/api/doctors/search-by-name",
    params(SearchQuery),
    responses(
        (status = 200, description = "Doctors matching the name parts", body = Page<Doctor>),
        (status = 400, description = "No name part given or invalid paging", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Receptionist role")
    ),
    security(("bearerAuth" = ["Receptionist"])),
    tag = "doctors"
)]
pub async fn search_by_name(
    Extension(mediator): Extension<Arc<Mediator>>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let page = query.page();
    let request = SearchByNameRequest {
        first_name: query.first_name,
        last_name: query.last_name,
        middle_name: query.middle_name,
    };
    response::ok(mediator.send(SearchByNameQuery::from((request, page))).await)
}

#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    params(("id" = i32, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "The profile", body = Doctor),
        (status = 400, description = "Unknown doctor", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Patient role")
    ),
    security(("bearerAuth" = ["Patient"])),
    tag = "doctors"
)]
pub async fn view_by_id(
    Extension(mediator): Extension<Arc<Mediator>>,
    Path(id): Path<DoctorId>,
) -> Response {
    response::ok(mediator.send(ViewByIdQuery::new(id)).await)
}

#[utoipa::path(
    get,
    path = "/api/doctors",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of profiles", body = Page<Doctor>),
        (status = 400, description = "Invalid paging", body = Error),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller lacks the Patient role")
    ),
    security(("bearerAuth" = ["Patient"])),
    tag = "doctors"
)]
pub async fn view_doctors(
    Extension(mediator): Extension<Arc<Mediator>>,
    Query(query): Query<PageQuery>,
) -> Response {
    response::ok(mediator.send(ViewDoctorsQuery::new(query.page())).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use innoclinic_auth::{PrincipalId, Role};
    use innoclinic_core::Errors;
    use innoclinic_host::PrincipalContext;
    use innoclinic_mediator::handler_fn;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn doctor(id: i32) -> Doctor {
        serde_json::from_value(json!({
            "id": id,
            "accountId": 7,
            "firstName": "Gregory",
            "lastName": "House",
            "middleName": null,
            "dateOfBirth": "1959-06-11",
            "specializationId": 3,
            "officeId": 1,
            "careerStartYear": 1990,
            "status": "atWork"
        }))
        .unwrap()
    }

    async fn send(
        app: Router,
        method: Method,
        uri: &str,
        roles: Option<&[Role]>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        if body.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }
        let mut req = req
            .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
            .unwrap();
        if let Some(roles) = roles {
            req.extensions_mut()
                .insert(PrincipalContext::new(PrincipalId::new(), roles.to_vec()));
        }

        let res = app.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        // Extractor rejections are plain text.
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, body)
    }

    #[tokio::test]
    async fn view_by_id_returns_handler_value() {
        let mut builder = Mediator::builder();
        builder.register(handler_fn(|q: ViewByIdQuery| async move {
            Ok::<Doctor, Errors>(doctor(q.id.get()))
        }));
        let app = router(Arc::new(builder.build()));

        let (status, body) = send(app, Method::GET, "/api/doctors/42", Some(&[Role::PATIENT]), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(doctor(42)).unwrap());
    }

    #[tokio::test]
    async fn delete_maps_not_found_to_400_and_success_to_204() {
        let mut builder = Mediator::builder();
        builder.register(handler_fn(|c: DeleteDoctorCommand| async move {
            if c.id == DoctorId::new(42) {
                Err::<(), Errors>(Error::not_found("doctor.not_found", "doctor 42 not found").into())
            } else {
                Ok(())
            }
        }));
        let app = router(Arc::new(builder.build()));

        let (status, body) = send(
            app.clone(),
            Method::DELETE,
            "/api/doctors/42",
            Some(&[Role::RECEPTIONIST]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({"code": "doctor.not_found", "description": "doctor 42 not found", "type": "NotFound"})
        );

        let (status, body) = send(
            app,
            Method::DELETE,
            "/api/doctors/7",
            Some(&[Role::RECEPTIONIST]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn guard_rejects_before_dispatch() {
        let calls = Arc::new(Mutex::new(0u32));
        let counter = calls.clone();
        let mut builder = Mediator::builder();
        builder.register(handler_fn(move |_: DeleteDoctorCommand| {
            *counter.lock().unwrap() += 1;
            async { Ok::<(), Errors>(()) }
        }));
        let app = router(Arc::new(builder.build()));

        let (status, _) = send(app.clone(), Method::DELETE, "/api/doctors/1", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let wrong_roles: [&[Role]; 3] = [&[Role::DOCTOR], &[Role::PATIENT], &[]];
        for roles in wrong_roles {
            let (status, body) =
                send(app.clone(), Method::DELETE, "/api/doctors/1", Some(roles), None).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body["error"], "forbidden");
        }

        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn same_path_has_per_method_roles() {
        let mut builder = Mediator::builder();
        builder.register(handler_fn(|q: ViewByIdQuery| async move {
            Ok::<Doctor, Errors>(doctor(q.id.get()))
        }));
        let app = router(Arc::new(builder.build()));

        // A doctor may update but not view.
        let (status, _) = send(app, Method::GET, "/api/doctors/1", Some(&[Role::DOCTOR]), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn create_profile_binds_account_id_in_either_case() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut builder = Mediator::builder();
        builder.register(handler_fn(move |c: CreateDoctorCommand| {
            sink.lock().unwrap().push(c.account_id);
            async move { Ok::<Doctor, Errors>(doctor(1)) }
        }));
        let app = router(Arc::new(builder.build()));
        let payload = json!({
            "firstName": "Gregory",
            "lastName": "House",
            "dateOfBirth": "1959-06-11",
            "specializationId": 3,
            "officeId": 1,
            "careerStartYear": 1990
        });

        for uri in [
            "/api/doctors/create-profile?accountId=7",
            "/api/doctors/create-profile?AccountId=8",
        ] {
            let (status, _) = send(
                app.clone(),
                Method::POST,
                uri,
                Some(&[Role::RECEPTIONIST]),
                Some(payload.clone()),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        assert_eq!(*seen.lock().unwrap(), vec![AccountId::new(7), AccountId::new(8)]);
    }

    #[tokio::test]
    async fn update_builds_command_from_path_and_body() {
        let mut builder = Mediator::builder();
        builder.register(handler_fn(|c: UpdateDoctorCommand| async move {
            let mut updated = doctor(c.id.get());
            updated.details = c.details;
            Ok::<Doctor, Errors>(updated)
        }));
        let app = router(Arc::new(builder.build()));
        let payload = json!({
            "firstName": "Lisa",
            "lastName": "Cuddy",
            "middleName": null,
            "dateOfBirth": "1968-01-01",
            "specializationId": 2,
            "officeId": 4,
            "careerStartYear": 1995,
            "status": "onVacation"
        });

        let (status, body) = send(
            app,
            Method::PUT,
            "/api/doctors/9",
            Some(&[Role::DOCTOR]),
            Some(payload),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], 9);
        assert_eq!(body["firstName"], "Lisa");
        assert_eq!(body["status"], "onVacation");
    }

    #[tokio::test]
    async fn list_routes_bind_paging_the_same_way() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let (all, office, spec, search) = (seen.clone(), seen.clone(), seen.clone(), seen.clone());
        let mut builder = Mediator::builder();
        builder
            .register(handler_fn(move |q: ViewDoctorsQuery| {
                all.lock().unwrap().push(q.page);
                async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
            }))
            .register(handler_fn(move |q: FilterByOfficeQuery| {
                office.lock().unwrap().push(q.page);
                async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
            }))
            .register(handler_fn(move |q: FilterBySpecializationQuery| {
                spec.lock().unwrap().push(q.page);
                async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
            }))
            .register(handler_fn(move |q: SearchByNameQuery| {
                search.lock().unwrap().push(q.page);
                async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
            }));
        let app = router(Arc::new(builder.build()));

        let patient: &[Role] = &[Role::PATIENT];
        let receptionist: &[Role] = &[Role::RECEPTIONIST];
        let routes = [
            ("/api/doctors?", patient),
            ("/api/doctors/by-office?officeId=1&", patient),
            ("/api/doctors/by-specialization?specializationId=2&", patient),
            ("/api/doctors/search-by-name?lastName=house&", receptionist),
        ];
        for (base, roles) in routes {
            for uri in [base.to_string(), format!("{base}pageNumber=3&pageSize=5")] {
                let (status, body) = send(app.clone(), Method::GET, &uri, Some(roles), None).await;
                assert_eq!(status, StatusCode::OK, "{uri}");
                assert_eq!(body["items"], json!([]));
            }
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 8);
        for pair in seen.chunks(2) {
            assert_eq!(pair, [PageRequest::new(1, 10), PageRequest::new(3, 5)]);
        }
    }

    #[tokio::test]
    async fn search_passes_trimmed_name_parts() {
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let mut builder = Mediator::builder();
        builder.register(handler_fn(move |q: SearchByNameQuery| {
            let page = q.page;
            *sink.lock().unwrap() = Some(q);
            async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], page)) }
        }));
        let app = router(Arc::new(builder.build()));

        let (status, _) = send(
            app,
            Method::GET,
            "/api/doctors/search-by-name?firstName=%20Greg%20&lastName=&middleName=J",
            Some(&[Role::RECEPTIONIST]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let query = seen.lock().unwrap().take().unwrap();
        assert_eq!(query.first_name.as_deref(), Some("Greg"));
        assert_eq!(query.last_name, None);
        assert_eq!(query.middle_name.as_deref(), Some("J"));
    }

    #[tokio::test]
    async fn malformed_input_is_rejected_by_extractors() {
        let app = router(Arc::new(Mediator::builder().build()));

        let (status, body) = send(
            app.clone(),
            Method::GET,
            "/api/doctors/abc",
            Some(&[Role::PATIENT]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_string(), "{body}");

        let (status, body) = send(
            app.clone(),
            Method::GET,
            "/api/doctors/by-office",
            Some(&[Role::PATIENT]),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.as_str().is_some_and(|text| text.contains("officeId")), "{body}");

        let (status, body) = send(
            app,
            Method::PUT,
            "/api/doctors/1",
            Some(&[Role::DOCTOR]),
            Some(json!({"firstName": "Lisa"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.is_string(), "{body}");
    }

    #[tokio::test]
    async fn missing_handler_surfaces_as_400() {
        let app = router(Arc::new(Mediator::builder().build()));

        let (status, body) =
            send(app, Method::GET, "/api/doctors/1", Some(&[Role::PATIENT]), None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "mediator.no_handler");
        assert_eq!(body["type"], "Unexpected");
    }

    /// Mediator whose handlers only count how often they ran.
    fn counting_mediator(calls: Arc<AtomicUsize>) -> Arc<Mediator> {
        let mut builder = Mediator::builder();
        let c = calls.clone();
        builder.register(handler_fn(move |_: CreateDoctorCommand| {
            c.fetch_add(1, Ordering::SeqCst);
            async { Ok::<Doctor, Errors>(doctor(1)) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |_: DeleteDoctorCommand| {
            c.fetch_add(1, Ordering::SeqCst);
            async { Ok::<(), Errors>(()) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |u: UpdateDoctorCommand| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Doctor, Errors>(doctor(u.id.get())) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |q: FilterByOfficeQuery| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |q: FilterBySpecializationQuery| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |q: SearchByNameQuery| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
        }));
        let c = calls.clone();
        builder.register(handler_fn(move |q: ViewByIdQuery| {
            c.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Doctor, Errors>(doctor(q.id.get())) }
        }));
        builder.register(handler_fn(move |q: ViewDoctorsQuery| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok::<Page<Doctor>, Errors>(Page::paginate(vec![], q.page)) }
        }));
        Arc::new(builder.build())
    }

    /// A well-formed request for `route`, so only the guard can reject it.
    fn valid_request(route: RouteDoc) -> (Method, &'static str, Option<Value>) {
        let details = json!({
            "firstName": "Gregory",
            "lastName": "House",
            "dateOfBirth": "1959-06-11",
            "specializationId": 3,
            "officeId": 1,
            "careerStartYear": 1990,
            "status": "atWork"
        });
        match (route.method, route.path) {
            ("POST", "/api/doctors/create-profile") => {
                (Method::POST, "/api/doctors/create-profile?accountId=7", Some(details))
            }
            ("DELETE", "/api/doctors/:id") => (Method::DELETE, "/api/doctors/1", None),
            ("PUT", "/api/doctors/:id") => (Method::PUT, "/api/doctors/1", Some(details)),
            ("GET", "/api/doctors/by-office") => (Method::GET, "/api/doctors/by-office?officeId=1", None),
            ("GET", "/api/doctors/by-specialization") => (
                Method::GET,
                "/api/doctors/by-specialization?specializationId=1",
                None,
            ),
            ("GET", "/api/doctors/search-by-name") => {
                (Method::GET, "/api/doctors/search-by-name?lastName=House", None)
            }
            ("GET", "/api/doctors/:id") => (Method::GET, "/api/doctors/1", None),
            ("GET", "/api/doctors") => (Method::GET, "/api/doctors", None),
            other => panic!("no sample request for {other:?}"),
        }
    }

    #[tokio::test]
    async fn every_route_admits_exactly_its_roles() {
        let expected: [(RouteDoc, &[Role]); 8] = [
            (CREATE_PROFILE, &[Role::RECEPTIONIST]),
            (DELETE, &[Role::RECEPTIONIST]),
            (UPDATE, &[Role::RECEPTIONIST, Role::DOCTOR]),
            (FILTER_BY_OFFICE, &[Role::PATIENT]),
            (FILTER_BY_SPECIALIZATION, &[Role::PATIENT]),
            (SEARCH_BY_NAME, &[Role::RECEPTIONIST]),
            (VIEW_BY_ID, &[Role::PATIENT]),
            (VIEW_DOCTORS, &[Role::PATIENT]),
        ];
        assert_eq!(expected.map(|(route, _)| route), ROUTES);

        for (route, allowed) in expected {
            for role in [Role::RECEPTIONIST, Role::DOCTOR, Role::PATIENT] {
                let calls = Arc::new(AtomicUsize::new(0));
                let app = router(counting_mediator(calls.clone()));
                let (method, uri, body) = valid_request(route);

                let (status, reply) =
                    send(app, method, uri, Some(std::slice::from_ref(&role)), body).await;

                let case = format!("{} {} as {role}", route.method, route.path);
                if allowed.contains(&role) {
                    assert!(status.is_success(), "{case}: {status} {reply}");
                    assert_eq!(calls.load(Ordering::SeqCst), 1, "{case}");
                } else {
                    assert_eq!(status, StatusCode::FORBIDDEN, "{case}");
                    assert_eq!(reply["error"], "forbidden", "{case}");
                    assert_eq!(calls.load(Ordering::SeqCst), 0, "{case}");
                }
            }
        }
    }

    #[test]
    fn route_table_lists_every_action_once() {
        let mut keys: Vec<_> = ROUTES.iter().map(|r| (r.method, r.path)).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), ROUTES.len());
        assert_eq!(UPDATE.requirement().to_string(), "Receptionist, Doctor");
    }
}
