use crate::error::ApiError;
use crate::models::auth::{SessionRole, SessionUser};
use crate::models::{Organization, OrganizationVolunteer, Volunteer};
use crate::services::DispatchRecord;
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{State, delete, get, post};

#[derive(Deserialize, Debug)]
pub struct VolunteerRequestBody {
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct VolunteerRequestResponse {
    pub ok: bool,
    pub dispatched: Vec<DispatchRecord>,
}

/// Organizations the logged-in volunteer belongs to
#[get("/api/v1/me/organizations")]
pub async fn my_organizations(
    session: SessionUser,
    state: &State<AppState>,
) -> Result<Json<Vec<Organization>>, ApiError> {
    if session.role != SessionRole::Volunteer {
        return Err(ApiError::Forbidden(
            "Only volunteers can list their organizations".to_string(),
        ));
    }

    let organizations = state
        .database
        .organizations_for_volunteer(session.user_id)?;

    Ok(Json(organizations))
}

/// Volunteers belonging to an organization; the symmetric traversal.
/// Restricted to the organization's own session.
#[get("/api/v1/organizations/<id>/volunteers")]
pub async fn organization_volunteers(
    id: i32,
    session: SessionUser,
    state: &State<AppState>,
) -> Result<Json<Vec<Volunteer>>, ApiError> {
    require_organization_session(&session, id)?;

    let volunteers = state.database.volunteers_for_organization(id)?;

    Ok(Json(volunteers))
}

/// Create a membership row linking the logged-in volunteer to an
/// organization (self-service join)
#[post("/api/v1/organizations/<id>/join")]
pub async fn join_organization(
    id: i32,
    session: SessionUser,
    state: &State<AppState>,
) -> Result<Json<OrganizationVolunteer>, ApiError> {
    if session.role != SessionRole::Volunteer {
        return Err(ApiError::Forbidden(
            "Only volunteers can join an organization".to_string(),
        ));
    }

    state
        .database
        .find_organization_by_id(id)?
        .ok_or_else(|| ApiError::NotFound(format!("Organization {id} not found")))?;

    if state
        .database
        .find_membership(session.user_id, id)?
        .is_some()
    {
        return Err(ApiError::Conflict(
            "You are already a member of this organization".to_string(),
        ));
    }

    let membership = state.database.create_membership(session.user_id, id)?;

    Ok(Json(membership))
}

/// Remove a membership row. Removing an already-removed membership is a
/// 404; unrelated memberships are never touched.
#[delete("/api/v1/organizations/<id>/volunteers/<volunteer_id>")]
pub async fn remove_membership(
    id: i32,
    volunteer_id: i32,
    session: SessionUser,
    state: &State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    // The organization may remove any of its members; a volunteer may only
    // remove themselves.
    let allowed = match session.role {
        SessionRole::Organization => session.user_id == id,
        SessionRole::Volunteer => session.user_id == volunteer_id,
    };
    if !allowed {
        return Err(ApiError::Forbidden(
            "You don't have permission to remove this membership".to_string(),
        ));
    }

    let membership = state
        .database
        .find_membership(volunteer_id, id)?
        .ok_or_else(|| ApiError::NotFound("Membership not found".to_string()))?;

    let deleted = state.database.remove_membership(membership.orgvol_id)?;
    if deleted == 0 {
        return Err(ApiError::NotFound("Membership not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "message": "Membership removed"
    })))
}

/// Send a volunteer request: broadcast the organization's message to the
/// phone numbers of its member volunteers, one provider call per number.
/// Per-recipient outcomes are returned; one failed send does not abort
/// the rest of the batch.
#[post("/api/v1/organizations/<id>/volunteer-request", data = "<request>")]
pub async fn send_volunteer_request(
    id: i32,
    request: Json<VolunteerRequestBody>,
    session: SessionUser,
    state: &State<AppState>,
) -> Result<Json<VolunteerRequestResponse>, ApiError> {
    require_organization_session(&session, id)?;

    let volunteers = state.database.volunteers_for_organization(id)?;

    let numbers: Vec<String> = volunteers
        .into_iter()
        .map(|volunteer| volunteer.phone_number)
        .collect();

    let dispatched = state.sms.send_broadcast(&request.message, &numbers).await;

    Ok(Json(VolunteerRequestResponse {
        ok: true,
        dispatched,
    }))
}

fn require_organization_session(session: &SessionUser, organization_id: i32) -> Result<(), ApiError> {
    if session.role != SessionRole::Organization || session.user_id != organization_id {
        return Err(ApiError::Forbidden(
            "This action belongs to the organization's own session".to_string(),
        ));
    }
    Ok(())
}
