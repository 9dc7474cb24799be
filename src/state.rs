use crate::config::AppConfig;
use crate::services::{DatabaseService, SmsService};
use std::sync::Arc;

pub struct AppState {
    pub config: AppConfig,
    pub database: Arc<DatabaseService>,
    pub sms: Arc<SmsService>,
}
