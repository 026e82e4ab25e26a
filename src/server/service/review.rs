//! Restaurant reviews. Each account may leave one review; anyone may read them.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::review::ReviewRepository,
    error::{validation::ValidationError, AppError},
    model::review::{CreateReviewParams, Review, ReviewRecord},
    util::validate::{exceeds_chars, non_blank, REVIEW_TITLE_MAX_CHARS},
};

const ALREADY_REVIEWED: &str = "User has already created a review";

pub struct ReviewService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores the caller's review.
    ///
    /// Title and content are trimmed; a blank title is stored as none.
    ///
    /// # Returns
    /// - `Ok(Review)` - The stored review
    /// - `Err(AppError::Conflict)` - The account already has a review
    /// - `Err(AppError::Validation)` - Title too long, blank content or score outside 1-5
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateReviewParams,
        now: DateTime<Utc>,
    ) -> Result<Review, AppError> {
        let review_repo = ReviewRepository::new(self.db);

        if review_repo.exists_for_user(user_id).await? {
            return Err(AppError::Conflict(ALREADY_REVIEWED.to_string()));
        }

        let title = non_blank(params.title);
        let content = non_blank(params.content);

        let mut errors = ValidationError::new("Invalid review data");
        if title
            .as_deref()
            .is_some_and(|t| exceeds_chars(t, REVIEW_TITLE_MAX_CHARS))
        {
            errors.add(
                "title",
                format!("Title must be at most {REVIEW_TITLE_MAX_CHARS} characters"),
            );
        }
        if content.is_none() {
            errors.add("content", "Content is required");
        }
        if params.score.is_some_and(|s| !(1..=5).contains(&s)) {
            errors.add("score", "Score must be between 1 and 5");
        }
        errors.into_result()?;

        let review = review_repo
            .create(ReviewRecord {
                user_id,
                title,
                content: content.unwrap_or_default(),
                score: params.score,
                created_at: now,
            })
            .await
            .map_err(|e| AppError::conflict_on_unique(e, ALREADY_REVIEWED))?;

        tracing::info!("User {} left review {}", user_id, review.id);

        Ok(review)
    }

    /// Every review, newest first, and whether `viewer` has written one.
    pub async fn get_all(&self, viewer: Option<i32>) -> Result<(Vec<Review>, bool), AppError> {
        let review_repo = ReviewRepository::new(self.db);

        let reviews = review_repo.get_all().await?;
        let user_has_reviewed = match viewer {
            Some(user_id) => review_repo.exists_for_user(user_id).await?,
            None => false,
        };

        Ok((reviews, user_has_reviewed))
    }
}
