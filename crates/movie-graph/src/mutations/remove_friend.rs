use async_graphql::ID;

use crate::types::User;

/// Removes a one-directional friend edge. The user must exist and the
/// edge must currently be present, else a silent no-op.
pub fn execute(users: &mut [User], user_id: &ID, friend_id: &ID) -> Option<User> {
    let user = users.iter_mut().find(|u| u.id == *user_id)?;
    if !user.friends.contains(friend_id) {
        return None;
    }
    user.friends.retain(|id| id != friend_id);
    Some(user.clone())
}
