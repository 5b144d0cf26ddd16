use async_graphql::{InputObject, MaybeUndefined, ID};
use serde::Serialize;

use crate::types::Nationality;

/// Fields accepted when creating or updating a user.
///
/// `age` and `isActive` distinguish "absent" from an explicit null so
/// updates can leave a stored value untouched or clear it. `nationality`
/// carries a schema default and is therefore present on every accepted
/// input.
#[derive(Debug, InputObject)]
pub struct UserInput {
    pub name: String,
    pub age: MaybeUndefined<i32>,
    pub email: String,
    #[graphql(default_with = "Some(Nationality::Indian)")]
    pub nationality: Option<Nationality>,
    pub is_active: MaybeUndefined<bool>,
}

/// Sparse per-field constraints on the user collection. Absent fields
/// impose none. Serializes to the sparse JSON map the filter engine
/// classifies.
#[derive(Debug, Default, Serialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<Nationality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friends: Option<Vec<ID>>,
}

/// Sparse per-field constraints on the movie collection.
#[derive(Debug, Default, Serialize, InputObject)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ID>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_in_theaters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}
