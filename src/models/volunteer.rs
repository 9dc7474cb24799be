use crate::schema::volunteers;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = volunteers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Volunteer {
    pub volunteer_id: i32,
    pub name: String,
    pub email: String,
    // Stored as plain text, matching the original scheme. Never serialized.
    #[serde(skip_serializing)]
    pub password: String,
    pub phone_number: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = volunteers)]
pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub created_at: NaiveDateTime,
}

impl NewVolunteer {
    pub fn new(name: String, email: String, password: String, phone_number: String) -> Self {
        Self {
            name,
            email,
            password,
            phone_number,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
