use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};

use crate::mutations::MutationRoot;
use crate::query::QueryRoot;
use crate::state::AppState;
use crate::types::UserSortField;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Assembles the served schema over the shared state.
pub fn build_schema(state: Arc<AppState>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        // reserved: nothing resolves against it yet
        .register_output_type::<UserSortField>()
        .data(state)
        .finish()
}
