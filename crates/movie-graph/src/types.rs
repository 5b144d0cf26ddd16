pub mod inputs;
pub mod movie;
pub mod nationality;
pub mod user;
pub mod user_sort_field;
pub mod users_result;

pub use inputs::{MovieFilter, UserFilter, UserInput};
pub use movie::Movie;
pub use nationality::Nationality;
pub use user::User;
pub use user_sort_field::UserSortField;
pub use users_result::{UsersErrorResult, UsersResult, UsersSuccessResult};
