use super::connection::{DbPool, get_connection_with_retry};
use crate::models::membership::{NewOrganizationVolunteer, OrganizationVolunteer};
use crate::models::organization::Organization;
use crate::models::volunteer::Volunteer;
use crate::schema::{organization_volunteers, organizations, volunteers};
use diesel::prelude::*;

/// Membership-related database operations. Expresses the many-to-many
/// relationship between volunteers and organizations as two directional
/// traversals plus create/remove on the join row. Every call re-reads the
/// store; nothing is cached between calls.
pub struct MembershipOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> MembershipOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a membership row linking a volunteer to an organization.
    /// Referencing a nonexistent volunteer or organization surfaces as a
    /// foreign key violation.
    pub fn create_membership(
        &self,
        volunteer_id: i32,
        organization_id: i32,
    ) -> Result<OrganizationVolunteer, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let new_membership = NewOrganizationVolunteer::new(volunteer_id, organization_id);

        diesel::insert_into(organization_volunteers::table)
            .values(&new_membership)
            .get_result::<OrganizationVolunteer>(&mut conn)
    }

    /// Finds the membership row for a (volunteer, organization) pair
    pub fn find_membership(
        &self,
        volunteer_id: i32,
        organization_id: i32,
    ) -> Result<Option<OrganizationVolunteer>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        organization_volunteers::table
            .filter(organization_volunteers::volunteer_id.eq(volunteer_id))
            .filter(organization_volunteers::organization_id.eq(organization_id))
            .first::<OrganizationVolunteer>(&mut conn)
            .optional()
    }

    /// Organizations a volunteer belongs to, joined through the membership
    /// table. Order is implementation-defined but stable for a fixed store
    /// state (join-row id).
    pub fn organizations_for_volunteer(
        &self,
        volunteer_id: i32,
    ) -> Result<Vec<Organization>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        organization_volunteers::table
            .inner_join(organizations::table)
            .filter(organization_volunteers::volunteer_id.eq(volunteer_id))
            .order(organization_volunteers::orgvol_id.asc())
            .select(Organization::as_select())
            .load::<Organization>(&mut conn)
    }

    /// Volunteers belonging to an organization; the symmetric traversal
    pub fn volunteers_for_organization(
        &self,
        organization_id: i32,
    ) -> Result<Vec<Volunteer>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        organization_volunteers::table
            .inner_join(volunteers::table)
            .filter(organization_volunteers::organization_id.eq(organization_id))
            .order(organization_volunteers::orgvol_id.asc())
            .select(Volunteer::as_select())
            .load::<Volunteer>(&mut conn)
    }

    /// Removes a specific membership row. Returns the number of rows
    /// deleted; an already-deleted row yields 0 and leaves every other row
    /// untouched.
    pub fn remove_membership(&self, orgvol_id: i32) -> Result<usize, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::delete(organization_volunteers::table.find(orgvol_id)).execute(&mut conn)
    }
}
