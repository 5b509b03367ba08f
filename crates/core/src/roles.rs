//! Well-known role name constants.
//!
//! These must match the seed data in `20260101000001_create_roles_and_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_READER: &str = "reader";
pub const ROLE_LISTENER: &str = "listener";

/// Whether the role may manage orders and assignments.
pub fn is_staff_role(role: &str) -> bool {
    role == ROLE_ADMIN || role == ROLE_STAFF
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_staff_are_staff_roles() {
        assert!(is_staff_role(ROLE_ADMIN));
        assert!(is_staff_role(ROLE_STAFF));
        assert!(!is_staff_role(ROLE_READER));
        assert!(!is_staff_role(ROLE_LISTENER));
        assert!(!is_staff_role(""));
    }
}
