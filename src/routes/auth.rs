use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, LogoutResponse, Organization, RegisterOrganizationRequest,
    RegisterVolunteerRequest, SessionRole, Volunteer,
};
use crate::services::AuthService;
use crate::state::AppState;
use rocket::http::{Cookie, CookieJar};
use rocket::serde::json::Json;
use rocket::{State, post};

/// Register a new volunteer
#[post("/api/v1/register/volunteer", data = "<request>")]
pub async fn register_volunteer(
    request: Json<RegisterVolunteerRequest>,
    state: &State<AppState>,
) -> Result<Json<Volunteer>, ApiError> {
    let volunteer = AuthService::register_volunteer(&state.database, request.into_inner())?;
    Ok(Json(volunteer))
}

/// Register a new organization
#[post("/api/v1/register/organization", data = "<request>")]
pub async fn register_organization(
    request: Json<RegisterOrganizationRequest>,
    state: &State<AppState>,
) -> Result<Json<Organization>, ApiError> {
    let organization = AuthService::register_organization(&state.database, request.into_inner())?;
    Ok(Json(organization))
}

/// Volunteer login; establishes a session holding the volunteer's own
/// identifier and the "volunteer" role tag
#[post("/api/v1/login/volunteer", data = "<request>")]
pub async fn login_volunteer(
    request: Json<LoginRequest>,
    cookies: &CookieJar<'_>,
    state: &State<AppState>,
) -> Result<Json<LoginResponse>, ApiError> {
    let volunteer = AuthService::login_volunteer(&state.database, &request)?;

    set_session(cookies, volunteer.volunteer_id, SessionRole::Volunteer);

    Ok(Json(LoginResponse {
        ok: true,
        user_id: volunteer.volunteer_id,
        session_type: SessionRole::Volunteer.tag().to_string(),
    }))
}

/// Organization login; symmetric to volunteer login
#[post("/api/v1/login/organization", data = "<request>")]
pub async fn login_organization(
    request: Json<LoginRequest>,
    cookies: &CookieJar<'_>,
    state: &State<AppState>,
) -> Result<Json<LoginResponse>, ApiError> {
    let organization = AuthService::login_organization(&state.database, &request)?;

    set_session(cookies, organization.organization_id, SessionRole::Organization);

    Ok(Json(LoginResponse {
        ok: true,
        user_id: organization.organization_id,
        session_type: SessionRole::Organization.tag().to_string(),
    }))
}

/// Logout; clears the session cookies
#[post("/api/v1/logout")]
pub async fn logout(cookies: &CookieJar<'_>) -> Json<LogoutResponse> {
    cookies.remove(Cookie::from("user_id"));
    cookies.remove(Cookie::from("session_type"));
    Json(LogoutResponse { ok: true })
}

fn set_session(cookies: &CookieJar<'_>, user_id: i32, role: SessionRole) {
    cookies.add(Cookie::new("user_id", user_id.to_string()));
    cookies.add(Cookie::new("session_type", role.tag().to_string()));
}
