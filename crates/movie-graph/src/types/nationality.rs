use async_graphql::Enum;
use serde::{Deserialize, Serialize};

/// Nationalities recognised on user records.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Enum)]
#[graphql(rename_items = "PascalCase")]
pub enum Nationality {
    American,
    British,
    Canadian,
    Australian,
    Indian,
    Chinese,
    German,
    French,
    Spanish,
    Italian,
    Mexican,
    Irish,
}
