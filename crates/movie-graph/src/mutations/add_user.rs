use async_graphql::{MaybeUndefined, ID};

use crate::types::{User, UserInput};

/// Appends a new user. The id is the current collection size plus one,
/// a scheme that can re-issue ids after deletions; kept for
/// compatibility with the persisted data. No uniqueness checks on name
/// or email.
pub fn execute(users: &mut Vec<User>, input: UserInput) -> User {
    let user = User {
        id: ID::from((users.len() + 1).to_string()),
        name: input.name,
        age: defined(input.age),
        email: input.email,
        nationality: input.nationality,
        is_active: defined(input.is_active),
        friends: Vec::new(),
        favorite_movies: Vec::new(),
    };
    users.push(user.clone());
    user
}

fn defined<T>(value: MaybeUndefined<T>) -> Option<T> {
    match value {
        MaybeUndefined::Value(value) => Some(value),
        MaybeUndefined::Null | MaybeUndefined::Undefined => None,
    }
}
