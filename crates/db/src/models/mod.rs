//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` request DTOs for the API layer
//! - Internal create/replace inputs consumed by the repositories

pub mod page;
pub mod tenant;
pub mod user;
