pub mod auth;
pub mod categories;
pub mod health;
pub mod organizations;
pub mod sms;

use rocket::routes;

pub fn get_routes() -> Vec<rocket::Route> {
    routes![
        // API routes with /api/v1/ prefix
        health::health_check,
        categories::list_categories,
        // Registration and session routes
        auth::register_volunteer,
        auth::register_organization,
        auth::login_volunteer,
        auth::login_organization,
        auth::logout,
        // Membership traversal and lifecycle
        organizations::my_organizations,
        organizations::organization_volunteers,
        organizations::join_organization,
        organizations::remove_membership,
        organizations::send_volunteer_request,
        // Provider webhook routes (no prefix; the provider posts here)
        sms::sms_reply,
        sms::sms_reply_get,
    ]
}
