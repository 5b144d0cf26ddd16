use async_graphql::{MaybeUndefined, ID};

use crate::types::{User, UserInput};

/// Shallow-merges the input over the stored record. Fields the input
/// does not carry keep their stored values, including the relational
/// lists and the active flag. Explicit nulls clear. Returns `None` when
/// the id resolves to nothing.
pub fn execute(users: &mut [User], id: &ID, input: UserInput) -> Option<User> {
    let user = users.iter_mut().find(|u| u.id == *id)?;
    user.name = input.name;
    user.email = input.email;
    // the schema default makes nationality present on every input
    user.nationality = input.nationality;
    merge(&mut user.age, input.age);
    merge(&mut user.is_active, input.is_active);
    Some(user.clone())
}

fn merge<T>(field: &mut Option<T>, value: MaybeUndefined<T>) {
    match value {
        MaybeUndefined::Undefined => {}
        MaybeUndefined::Null => *field = None,
        MaybeUndefined::Value(value) => *field = Some(value),
    }
}
