use super::connection::{DbPool, get_connection_with_retry};
use crate::models::category::{Category, NewCategory};
use crate::schema::categories;
use diesel::prelude::*;

/// Category reference data operations
pub struct CategoryOperations<'a> {
    pool: &'a DbPool,
}

impl<'a> CategoryOperations<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Creates a new category (administrative; the standard set is seeded
    /// by migration)
    pub fn create_category(&self, name: &str) -> Result<Category, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        let new_category = NewCategory {
            name: name.to_string(),
        };

        diesel::insert_into(categories::table)
            .values(&new_category)
            .get_result::<Category>(&mut conn)
    }

    /// Lists all categories
    pub fn all_categories(&self) -> Result<Vec<Category>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        categories::table
            .order(categories::category_code.asc())
            .load::<Category>(&mut conn)
    }

    /// Finds a category by code
    pub fn find_category(
        &self,
        category_code: i32,
    ) -> Result<Option<Category>, diesel::result::Error> {
        let mut conn = get_connection_with_retry(self.pool).map_err(|e| {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UnableToSendCommand,
                Box::new(e.to_string()),
            )
        })?;

        categories::table
            .find(category_code)
            .first::<Category>(&mut conn)
            .optional()
    }
}
