use rocket::http::Status;
use rocket::request::{FromRequest, Outcome, Request};
use rocket::serde::{Deserialize, Serialize};

// Authentication request/response models
#[derive(Deserialize, Debug)]
pub struct RegisterVolunteerRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct RegisterOrganizationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub category_code: i32,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub ok: bool,
    pub user_id: i32,
    pub session_type: String,
}

#[derive(Serialize, Debug)]
pub struct LogoutResponse {
    pub ok: bool,
}

/// Role tag stored in the session cookie alongside the entity's identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRole {
    Volunteer,
    Organization,
}

impl SessionRole {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "volunteer" => Some(Self::Volunteer),
            "organization" => Some(Self::Organization),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Volunteer => "volunteer",
            Self::Organization => "organization",
        }
    }
}

// Session guard extracting the logged-in entity from the session cookies.
// The cookies are plain values because the observed scheme is deliberately
// weak; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i32,
    pub role: SessionRole,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionUser {
    type Error = crate::error::ApiError;

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let cookies = request.cookies();

        let user_id = cookies
            .get("user_id")
            .and_then(|c| c.value().parse::<i32>().ok());

        let role = cookies
            .get("session_type")
            .and_then(|c| SessionRole::from_tag(c.value()));

        match (user_id, role) {
            (Some(user_id), Some(role)) => Outcome::Success(SessionUser { user_id, role }),
            _ => Outcome::Error((
                Status::Unauthorized,
                crate::error::ApiError::Unauthorized("Please log in first".to_string()),
            )),
        }
    }
}
