//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::review::{CreateReviewDto, ReviewAuthorDto, ReviewDto};

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewAuthor {
    pub id: i32,
    pub username: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub id: i32,
    pub author: ReviewAuthor,
    pub title: Option<String>,
    pub content: String,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Review {
    /// Builds the domain model from a review row and the account that wrote it.
    pub fn from_entity(entity: entity::review::Model, user: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            author: ReviewAuthor {
                id: user.id,
                username: user.username,
                name: user.name,
            },
            title: entity.title,
            content: entity.content,
            score: entity.score,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            user: ReviewAuthorDto {
                id: self.author.id,
                username: self.author.username,
                name: self.author.name,
            },
            title: self.title,
            content: self.content,
            score: self.score,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Review input as submitted. Trimming and range checks happen in the service.
#[derive(Debug, Clone, Default)]
pub struct CreateReviewParams {
    pub title: Option<String>,
    pub content: Option<String>,
    pub score: Option<i32>,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
            score: dto.score,
        }
    }
}

/// Validated review ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRecord {
    pub user_id: i32,
    pub title: Option<String>,
    pub content: String,
    pub score: Option<i32>,
    pub created_at: DateTime<Utc>,
}
