//! Mutating operations over the user collection.
//!
//! Each submodule applies one operation to the in-memory collection; the
//! root below wraps it in the lock → apply → persist cycle. The whole
//! collection is written back whenever an operation applied, and only
//! then. Precondition failures return null (or false for deletion)
//! instead of raising.

pub mod add_friend;
pub mod add_user;
pub mod delete_user;
pub mod remove_friend;
pub mod toggle_active;
pub mod update_user;

use std::sync::Arc;

use async_graphql::{Context, Object, Result, ID};

use crate::state::AppState;
use crate::types::{User, UserInput};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_user(&self, ctx: &Context<'_>, input: UserInput) -> Result<User> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let user = add_user::execute(&mut users, input);
        state.store.persist_users(&users)?;
        Ok(user)
    }

    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UserInput,
    ) -> Result<Option<User>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let updated = update_user::execute(&mut users, &id, input);
        if updated.is_some() {
            state.store.persist_users(&users)?;
        }
        Ok(updated)
    }

    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let removed = delete_user::execute(&mut users, &id);
        if removed {
            state.store.persist_users(&users)?;
        }
        Ok(removed)
    }

    async fn add_friend(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        friend_id: ID,
    ) -> Result<Option<User>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let updated = add_friend::execute(&mut users, &user_id, &friend_id);
        if updated.is_some() {
            state.store.persist_users(&users)?;
        }
        Ok(updated)
    }

    async fn remove_friend(
        &self,
        ctx: &Context<'_>,
        user_id: ID,
        friend_id: ID,
    ) -> Result<Option<User>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let updated = remove_friend::execute(&mut users, &user_id, &friend_id);
        if updated.is_some() {
            state.store.persist_users(&users)?;
        }
        Ok(updated)
    }

    async fn toggle_user_active_status(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        let state = ctx.data_unchecked::<Arc<AppState>>();
        let mut users = state.users.write();
        let updated = toggle_active::execute(&mut users, &id);
        if updated.is_some() {
            state.store.persist_users(&users)?;
        }
        Ok(updated)
    }
}
