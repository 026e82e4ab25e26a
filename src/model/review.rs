use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of the account that wrote a review.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewAuthorDto {
    pub id: i32,
    pub username: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewDto {
    pub id: i32,
    pub user: ReviewAuthorDto,
    pub title: Option<String>,
    pub content: String,
    /// Star rating from 1 to 5.
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReviewListDto {
    pub reviews: Vec<ReviewDto>,
    /// Whether the logged-in caller has written a review. Always false for anonymous callers.
    pub user_has_reviewed: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct CreateReviewDto {
    pub title: Option<String>,
    pub content: Option<String>,
    pub score: Option<i32>,
}
