//! Role names seeded into an empty `role` table on first start.

pub const ROLE_MANAGER: &str = "Manager";
pub const ROLE_CA: &str = "CA";
pub const ROLE_BA: &str = "BA";

/// Seed order; listings are re-sorted by name regardless.
pub const DEFAULT_ROLES: [&str; 3] = [ROLE_MANAGER, ROLE_CA, ROLE_BA];
