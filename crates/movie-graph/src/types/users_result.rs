use async_graphql::{SimpleObject, Union};

use crate::types::User;

const ERROR_FALLBACK: &str = "Failed to filter users";

/// Outcome envelope for the `users` query. The variant is the
/// discriminant; both shapes still carry the `success` flag clients
/// historically keyed on.
#[derive(Debug, Union)]
pub enum UsersResult {
    Success(UsersSuccessResult),
    Error(UsersErrorResult),
}

#[derive(Debug, SimpleObject)]
pub struct UsersSuccessResult {
    pub success: bool,
    pub message: Option<String>,
    pub users: Vec<User>,
}

#[derive(Debug, SimpleObject)]
pub struct UsersErrorResult {
    pub success: bool,
    pub message: Option<String>,
    pub error_code: Option<String>,
}

impl UsersResult {
    /// Wraps a user list in a success envelope, sorted by name the way
    /// the envelope has always presented it.
    pub fn success(mut users: Vec<User>, message: &str) -> Self {
        users.sort_by_key(|user| user.name.to_lowercase());
        UsersResult::Success(UsersSuccessResult {
            success: true,
            message: Some(message.to_owned()),
            users,
        })
    }

    /// Wraps a filtering fault in an error envelope.
    pub fn filter_error(message: String) -> Self {
        let message = if message.is_empty() {
            ERROR_FALLBACK.to_owned()
        } else {
            message
        };
        UsersResult::Error(UsersErrorResult {
            success: false,
            message: Some(message),
            error_code: Some("FILTER_ERROR".to_owned()),
        })
    }
}
