//! Resolution of relational fields against the in-memory collections.

use async_graphql::ID;
use rand::Rng;

use crate::types::{Movie, User};

/// Ids drawn when seeding an empty favorite-movie list.
const SEED_POOL: std::ops::RangeInclusive<u32> = 1..=10;

/// Maps a user's friend ids to records, preserving order and leaving a
/// hole for every id that resolves to nothing.
pub fn friends_of_user(user: &User, users: &[User]) -> Vec<Option<User>> {
    user.friends
        .iter()
        .map(|id| users.iter().find(|u| u.id == *id).cloned())
        .collect()
}

/// The `friends` query: every user the given user lists as a friend, in
/// collection order. Unknown users and empty friend lists yield nothing.
pub fn friends_of(user_id: &ID, users: &[User]) -> Vec<User> {
    let Some(user) = users.iter().find(|u| u.id == *user_id) else {
        return Vec::new();
    };
    if user.friends.is_empty() {
        return Vec::new();
    }
    users
        .iter()
        .filter(|u| user.friends.contains(&u.id))
        .cloned()
        .collect()
}

/// Populates an empty favorite-movie list by drawing ids until a draw
/// repeats one already in the list. The first repeat terminates, so the
/// result is 1..=10 distinct ids in draw order. Mutates the shared
/// record in memory only; nothing is persisted.
pub fn ensure_favorite_movies(user: &mut User, rng: &mut impl Rng) {
    if !user.favorite_movies.is_empty() {
        return;
    }
    let mut movie_id = ID::from(rng.gen_range(SEED_POOL).to_string());
    while !user.favorite_movies.contains(&movie_id) {
        user.favorite_movies.push(movie_id);
        movie_id = ID::from(rng.gen_range(SEED_POOL).to_string());
    }
}

/// Maps favorite-movie ids to records, preserving order and multiplicity;
/// unknown ids resolve to `None`.
pub fn favorite_movies_of(ids: &[ID], movies: &[Movie]) -> Vec<Option<Movie>> {
    ids.iter()
        .map(|id| movies.iter().find(|m| m.id == *id).cloned())
        .collect()
}
