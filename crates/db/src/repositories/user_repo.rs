use hms_core::error::CoreError;
use hms_core::types::DbId;
use hms_core::user::User;

use crate::store::{self, MemDb};

/// Read access to user accounts.
pub struct UserRepo;

impl UserRepo {
    /// All users in insertion order.
    pub fn list(db: &MemDb) -> Result<Vec<User>, CoreError> {
        Ok(store::read(&db.users)?.clone())
    }

    /// A single user by id.
    pub fn find(db: &MemDb, id: DbId) -> Result<User, CoreError> {
        store::read(&db.users)?
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(CoreError::NotFound { entity: "User", id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use hms_core::user::Role;

    #[test]
    fn seeded_users_cover_all_roles() {
        let db = MemDb::seeded();
        let users = UserRepo::list(&db).unwrap();
        assert_eq!(users.len(), 3);
        for role in [Role::Student, Role::Warden, Role::Admin] {
            assert!(users.iter().any(|u| u.role == role));
        }
    }

    #[test]
    fn find_unknown_user_is_not_found() {
        let db = MemDb::seeded();
        assert_matches!(
            UserRepo::find(&db, 999),
            Err(CoreError::NotFound { entity: "User", id: 999 })
        );
        assert_eq!(UserRepo::find(&db, 2).unwrap().username, "warden1");
    }
}
