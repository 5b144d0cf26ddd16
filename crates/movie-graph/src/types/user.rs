use std::sync::Arc;

use async_graphql::{ComplexObject, Context, SimpleObject, ID};
use serde::{Deserialize, Serialize};

use crate::relations;
use crate::state::AppState;
use crate::types::{Movie, Nationality};

/// A record of the user collection, served as the `User` object type.
///
/// The persisted JSON shape and the schema shape coincide except for the
/// relational fields: `friends` and `favoriteMovies` store foreign ids on
/// disk but resolve to full records in the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[graphql(complex)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: ID,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Nationality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[graphql(skip)]
    #[serde(default)]
    pub friends: Vec<ID>,
    #[graphql(skip)]
    #[serde(default)]
    pub favorite_movies: Vec<ID>,
}

#[ComplexObject]
impl User {
    /// The user's friends in stored-edge order. Dangling ids resolve to
    /// null entries rather than being dropped.
    async fn friends(&self, ctx: &Context<'_>) -> Vec<Option<User>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let users = state.users.read();
        relations::friends_of_user(self, &users)
    }

    /// The user's favorite movies. An empty list is first populated with
    /// randomly drawn movie ids; that write lands on the shared record,
    /// not on disk.
    async fn favorite_movies(&self, ctx: &Context<'_>) -> Vec<Option<Movie>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let ids = {
            let mut users = state.users.write();
            match users.iter_mut().find(|u| u.id == self.id) {
                Some(user) => {
                    let mut rng = state.rng.lock();
                    relations::ensure_favorite_movies(user, &mut *rng);
                    user.favorite_movies.clone()
                }
                // record deleted since the parent resolved; use the snapshot
                None => self.favorite_movies.clone(),
            }
        };
        relations::favorite_movies_of(&ids, &state.movies)
    }
}
