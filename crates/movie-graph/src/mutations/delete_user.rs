use async_graphql::ID;

use crate::types::User;

/// Removes the user, reporting whether anything was removed. No cascade:
/// other users' friends lists keep any now-dangling edge.
pub fn execute(users: &mut Vec<User>, id: &ID) -> bool {
    match users.iter().position(|u| u.id == *id) {
        Some(index) => {
            users.remove(index);
            true
        }
        None => false,
    }
}
