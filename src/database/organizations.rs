use super::connection::{DbPool, get_connection_with_retry};
use crate::models::organization::{NewOrganization, Organization};
use crate::schema::organizations;
use diesel::prelude::*;

/// Organization-related database operations
pub struct OrganizationOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> OrganizationOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a new organization. A `category_code` that references no
    /// existing category surfaces as a foreign key violation.
    pub fn create_organization(
        &self,
        new_organization: &NewOrganization,
    ) -> Result<Organization, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(organizations::table)
            .values(new_organization)
            .get_result::<Organization>(&mut conn)
    }

    /// Finds an organization by email (first match wins, as in login)
    pub fn find_organization_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Organization>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        organizations::table
            .filter(organizations::email.eq(email))
            .first::<Organization>(&mut conn)
            .optional()
    }

    /// Finds an organization by id
    pub fn find_organization_by_id(
        &self,
        organization_id: i32,
    ) -> Result<Option<Organization>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        organizations::table
            .find(organization_id)
            .first::<Organization>(&mut conn)
            .optional()
    }
}
