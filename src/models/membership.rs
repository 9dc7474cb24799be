use crate::schema::organization_volunteers;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rocket::serde::{Deserialize, Serialize};

// Membership row linking one volunteer to one organization
// (many-to-many join between the two).
#[derive(Queryable, Selectable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = organization_volunteers)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OrganizationVolunteer {
    pub orgvol_id: i32,
    pub volunteer_id: i32,
    pub organization_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = organization_volunteers)]
pub struct NewOrganizationVolunteer {
    pub volunteer_id: i32,
    pub organization_id: i32,
    pub created_at: NaiveDateTime,
}

impl NewOrganizationVolunteer {
    pub fn new(volunteer_id: i32, organization_id: i32) -> Self {
        Self {
            volunteer_id,
            organization_id,
            created_at: chrono::Utc::now().naive_utc(),
        }
    }
}
