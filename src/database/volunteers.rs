use super::connection::{DbPool, get_connection_with_retry};
use crate::models::volunteer::{NewVolunteer, Volunteer};
use crate::schema::volunteers;
use diesel::prelude::*;

/// Volunteer-related database operations
pub struct VolunteerOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> VolunteerOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a new volunteer
    pub fn create_volunteer(
        &self,
        new_volunteer: &NewVolunteer,
    ) -> Result<Volunteer, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        diesel::insert_into(volunteers::table)
            .values(new_volunteer)
            .get_result::<Volunteer>(&mut conn)
    }

    /// Finds a volunteer by email. Email uniqueness is not enforced at the
    /// schema level; the first match wins, as in login.
    pub fn find_volunteer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Volunteer>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        volunteers::table
            .filter(volunteers::email.eq(email))
            .first::<Volunteer>(&mut conn)
            .optional()
    }

    /// Finds a volunteer by id
    pub fn find_volunteer_by_id(
        &self,
        volunteer_id: i32,
    ) -> Result<Option<Volunteer>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        volunteers::table
            .find(volunteer_id)
            .first::<Volunteer>(&mut conn)
            .optional()
    }
}
