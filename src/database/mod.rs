//! Database module providing organized access to all database operations
//!
//! This module is organized into several sub-modules:
//! - `connection`: Database connection management and pool configuration
//! - `volunteers`: Volunteer-related database operations
//! - `organizations`: Organization-related database operations
//! - `categories`: Category reference data operations
//! - `memberships`: Volunteer/organization membership traversal operations
//! - `service`: Main DatabaseService that provides a unified interface

pub mod categories;
pub mod connection;
pub mod memberships;
pub mod organizations;
pub mod service;
pub mod volunteers;

// Re-export the main types and service for easy access
pub use connection::{DbConnection, DbPool, MIGRATIONS};
pub use service::DatabaseService;

// Re-export operation structs for advanced usage
pub use categories::CategoryOperations;
pub use memberships::MembershipOperations;
pub use organizations::OrganizationOperations;
pub use volunteers::VolunteerOperations;
