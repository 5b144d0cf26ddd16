use async_graphql::ID;

use crate::types::User;

/// Flips the user's active flag, treating an unset flag as inactive.
pub fn execute(users: &mut [User], id: &ID) -> Option<User> {
    let user = users.iter_mut().find(|u| u.id == *id)?;
    user.is_active = Some(!user.is_active.unwrap_or(false));
    Some(user.clone())
}
