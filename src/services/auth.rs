use crate::error::ApiError;
use crate::models::{
    LoginRequest, NewOrganization, NewOrganizationParams, NewVolunteer, Organization,
    RegisterOrganizationRequest, RegisterVolunteerRequest, Volunteer,
};
use crate::services::DatabaseService;
use log::debug;

/// Registration and login flows for volunteers and organizations.
///
/// Passwords are stored and compared as plain text. That matches the scheme
/// this service is specified against; it is a documented weakness, not an
/// oversight (see DESIGN.md before changing it, since hashing changes
/// stored-data compatibility).
pub struct AuthService;

impl AuthService {
    pub fn register_volunteer(
        db: &DatabaseService,
        request: RegisterVolunteerRequest,
    ) -> Result<Volunteer, ApiError> {
        let new_volunteer = NewVolunteer::new(
            request.name,
            request.email,
            request.password,
            request.phone_number,
        );

        let volunteer = db.create_volunteer(&new_volunteer)?;

        debug!("Volunteer registered: {}", volunteer.email);
        Ok(volunteer)
    }

    pub fn register_organization(
        db: &DatabaseService,
        request: RegisterOrganizationRequest,
    ) -> Result<Organization, ApiError> {
        let new_organization = NewOrganization::new(NewOrganizationParams {
            name: request.name,
            email: request.email,
            password: request.password,
            address: request.address,
            category_code: request.category_code,
            description: request.description,
            website: request.website,
        });

        // A nonexistent category surfaces as a foreign key violation, which
        // the error conversion maps to Conflict.
        let organization = db.create_organization(&new_organization)?;

        debug!("Organization registered: {}", organization.email);
        Ok(organization)
    }

    /// Verifies a volunteer's email is in the database and the password
    /// matches. Both failure modes are user-visible messages, not fatal
    /// errors; there is no lockout or rate limiting.
    pub fn login_volunteer(
        db: &DatabaseService,
        request: &LoginRequest,
    ) -> Result<Volunteer, ApiError> {
        let volunteer = db
            .find_volunteer_by_email(&request.email)?
            .ok_or_else(|| {
                ApiError::Unauthorized("No user exists with that email address.".to_string())
            })?;

        if volunteer.password != request.password {
            return Err(ApiError::Unauthorized(
                "Incorrect password for the email address entered.".to_string(),
            ));
        }

        debug!("Volunteer authenticated: {}", volunteer.email);
        Ok(volunteer)
    }

    /// Symmetric login flow for organizations
    pub fn login_organization(
        db: &DatabaseService,
        request: &LoginRequest,
    ) -> Result<Organization, ApiError> {
        let organization = db
            .find_organization_by_email(&request.email)?
            .ok_or_else(|| {
                ApiError::Unauthorized(
                    "No organization exists with that email address.".to_string(),
                )
            })?;

        if organization.password != request.password {
            return Err(ApiError::Unauthorized(
                "Incorrect password for the email address entered.".to_string(),
            ));
        }

        debug!("Organization authenticated: {}", organization.email);
        Ok(organization)
    }
}
