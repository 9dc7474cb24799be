use crate::schema::organizations;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Organization model
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = organizations)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Organization {
    pub organization_id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub address: String,
    pub category_code: i32,
    pub description: Option<String>,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = organizations)]
pub struct NewOrganization {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub category_code: i32,
    pub description: Option<String>,
    pub website: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct NewOrganizationParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub category_code: i32,
    pub description: Option<String>,
    pub website: Option<String>,
}

impl NewOrganization {
    pub fn new(params: NewOrganizationParams) -> Self {
        Self {
            name: params.name,
            email: params.email,
            password: params.password,
            address: params.address,
            category_code: params.category_code,
            description: params.description,
            website: params.website,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
