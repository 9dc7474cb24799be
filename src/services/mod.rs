pub mod auth;
pub mod sms;

pub use auth::AuthService;
pub use sms::{DispatchRecord, SmsService};

// The database service lives with its operations in crate::database.
pub use crate::database::DatabaseService;
