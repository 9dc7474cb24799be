use crate::error::ApiError;
use crate::models::Category;
use crate::state::AppState;
use rocket::serde::json::Json;
use rocket::{State, get};

/// List the category reference data (used by the organization
/// registration form)
#[get("/api/v1/categories")]
pub async fn list_categories(state: &State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.database.all_categories()?;
    Ok(Json(categories))
}
