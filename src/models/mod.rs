// Re-export all models from their respective modules
pub mod auth;
pub mod category;
pub mod membership;
pub mod organization;
pub mod volunteer;

// Re-export commonly used models
pub use auth::*;
pub use category::*;
pub use membership::*;
pub use organization::*;
pub use volunteer::*;
