use async_graphql::Enum;

/// Sort keys reserved for a future ordering argument on the `users`
/// query. No resolver consumes this yet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Enum)]
pub enum UserSortField {
    Name,
    Age,
    Email,
    Nationality,
}
