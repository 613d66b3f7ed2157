//! Well-known role name constants.
//!
//! These must match the `role` column values written by the signup flow
//! and carried in JWT claims.

pub const ROLE_OWNER: &str = "OWNER";
pub const ROLE_ADMIN: &str = "ADMIN";
pub const ROLE_EDITOR: &str = "EDITOR";
pub const ROLE_VIEWER: &str = "VIEWER";
