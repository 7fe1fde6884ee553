use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub movie_id: Option<i32>,
    pub rating: String,
}

/// Body of a review create or update request.
///
/// `id` may be supplied on create to pick an explicit key; on update it must
/// match the id in the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub movie_id: Option<i32>,
    #[serde(default)]
    pub rating: String,
}
