use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::filter;
use crate::relations;
use crate::state::AppState;
use crate::types::{Movie, MovieFilter, User, UserFilter, UsersResult};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Lists users, wrapped in a success or error envelope. Filter
    /// faults are caught here and reported as an error envelope rather
    /// than a field error.
    async fn users(&self, ctx: &Context<'_>, filter: Option<UserFilter>) -> UsersResult {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let users = state.users.read();

        let Some(filter) = filter else {
            return UsersResult::success(users.clone(), "All users fetched successfully");
        };

        let mut matched = Vec::new();
        for user in users.iter() {
            match filter::matches_user(user, &filter) {
                Ok(true) => matched.push(user.clone()),
                Ok(false) => {}
                Err(error) => return UsersResult::filter_error(error.to_string()),
            }
        }
        UsersResult::success(matched, "Users fetched successfully")
    }

    /// The users a given user lists as friends. Unknown users resolve to
    /// an empty list, never an error.
    async fn friends(&self, ctx: &Context<'_>, user_id: ID) -> Vec<User> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let users = state.users.read();
        relations::friends_of(&user_id, &users)
    }

    /// Lists movies, optionally filtered. Unlike `users`, filter faults
    /// propagate to the execution engine as field errors.
    async fn movies(&self, ctx: &Context<'_>, filter: Option<MovieFilter>) -> Result<Vec<Movie>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();

        let Some(filter) = filter else {
            return Ok(state.movies.clone());
        };

        let mut matched = Vec::new();
        for movie in &state.movies {
            if filter::matches_movie(movie, &filter)? {
                matched.push(movie.clone());
            }
        }
        Ok(matched)
    }
}
