use crate::schema::categories;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Static reference data; rows are seeded by migration and managed
// administratively, not through any user-facing flow.
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub category_code: i32,
    pub name: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
}
