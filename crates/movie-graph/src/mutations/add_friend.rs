use async_graphql::ID;

use crate::types::User;

/// Adds a one-directional friend edge. Both users must exist and the
/// edge must not already be present; any failed precondition is a
/// silent no-op. The friend's own list is never touched.
pub fn execute(users: &mut [User], user_id: &ID, friend_id: &ID) -> Option<User> {
    if !users.iter().any(|u| u.id == *friend_id) {
        return None;
    }
    let user = users.iter_mut().find(|u| u.id == *user_id)?;
    if user.friends.contains(friend_id) {
        return None;
    }
    user.friends.push(friend_id.clone());
    Some(user.clone())
}
