use async_graphql::{SimpleObject, ID};
use serde::{Deserialize, Serialize};

/// A record of the movie collection. Movies are read-only: no mutation
/// touches them and they are never written back to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: ID,
    pub title: String,
    pub is_in_theaters: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}
