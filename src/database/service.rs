use super::categories::CategoryOperations;
use super::connection::{DbConnection, DbPool, create_pool, get_connection_with_retry};
use super::memberships::MembershipOperations;
use super::organizations::OrganizationOperations;
use super::volunteers::VolunteerOperations;
use crate::models::category::Category;
use crate::models::membership::OrganizationVolunteer;
use crate::models::organization::{NewOrganization, Organization};
use crate::models::volunteer::{NewVolunteer, Volunteer};

/// Main database service that provides a unified interface to all database
/// operations. Owns the connection pool; rows are owned by the store and
/// re-read on every call.
#[derive(Debug)]
pub struct DatabaseService {
    pub pool: DbPool,
}

impl DatabaseService {
    /// Creates a new DatabaseService with an initialized connection pool
    pub fn new(database_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = create_pool(database_url)?;
        Ok(Self { pool })
    }

    /// Gets a connection from the pool with retry logic
    pub fn get_connection(&self) -> Result<DbConnection, diesel::r2d2::Error> {
        get_connection_with_retry(&self.pool)
    }

    // Volunteer operations
    pub fn create_volunteer(
        &self,
        new_volunteer: &NewVolunteer,
    ) -> Result<Volunteer, diesel::result::Error> {
        let ops = VolunteerOperations::new(&self.pool);
        ops.create_volunteer(new_volunteer)
    }

    pub fn find_volunteer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Volunteer>, diesel::result::Error> {
        let ops = VolunteerOperations::new(&self.pool);
        ops.find_volunteer_by_email(email)
    }

    pub fn find_volunteer_by_id(
        &self,
        volunteer_id: i32,
    ) -> Result<Option<Volunteer>, diesel::result::Error> {
        let ops = VolunteerOperations::new(&self.pool);
        ops.find_volunteer_by_id(volunteer_id)
    }

    // Organization operations
    pub fn create_organization(
        &self,
        new_organization: &NewOrganization,
    ) -> Result<Organization, diesel::result::Error> {
        let ops = OrganizationOperations::new(&self.pool);
        ops.create_organization(new_organization)
    }

    pub fn find_organization_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Organization>, diesel::result::Error> {
        let ops = OrganizationOperations::new(&self.pool);
        ops.find_organization_by_email(email)
    }

    pub fn find_organization_by_id(
        &self,
        organization_id: i32,
    ) -> Result<Option<Organization>, diesel::result::Error> {
        let ops = OrganizationOperations::new(&self.pool);
        ops.find_organization_by_id(organization_id)
    }

    // Category operations
    pub fn create_category(&self, name: &str) -> Result<Category, diesel::result::Error> {
        let ops = CategoryOperations::new(&self.pool);
        ops.create_category(name)
    }

    pub fn all_categories(&self) -> Result<Vec<Category>, diesel::result::Error> {
        let ops = CategoryOperations::new(&self.pool);
        ops.all_categories()
    }

    pub fn find_category(
        &self,
        category_code: i32,
    ) -> Result<Option<Category>, diesel::result::Error> {
        let ops = CategoryOperations::new(&self.pool);
        ops.find_category(category_code)
    }

    // Membership operations
    pub fn create_membership(
        &self,
        volunteer_id: i32,
        organization_id: i32,
    ) -> Result<OrganizationVolunteer, diesel::result::Error> {
        let ops = MembershipOperations::new(&self.pool);
        ops.create_membership(volunteer_id, organization_id)
    }

    pub fn find_membership(
        &self,
        volunteer_id: i32,
        organization_id: i32,
    ) -> Result<Option<OrganizationVolunteer>, diesel::result::Error> {
        let ops = MembershipOperations::new(&self.pool);
        ops.find_membership(volunteer_id, organization_id)
    }

    pub fn organizations_for_volunteer(
        &self,
        volunteer_id: i32,
    ) -> Result<Vec<Organization>, diesel::result::Error> {
        let ops = MembershipOperations::new(&self.pool);
        ops.organizations_for_volunteer(volunteer_id)
    }

    pub fn volunteers_for_organization(
        &self,
        organization_id: i32,
    ) -> Result<Vec<Volunteer>, diesel::result::Error> {
        let ops = MembershipOperations::new(&self.pool);
        ops.volunteers_for_organization(organization_id)
    }

    pub fn remove_membership(&self, orgvol_id: i32) -> Result<usize, diesel::result::Error> {
        let ops = MembershipOperations::new(&self.pool);
        ops.remove_membership(orgvol_id)
    }
}
