//! Review endpoints under `/review`.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewDto, ReviewDto, ReviewListDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::review::{CreateReviewParams, Review},
        service::review::ReviewService,
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Leave a review of the restaurant.
///
/// Requires a logged-in account. Each account may review once.
#[utoipa::path(
    post,
    path = "/review/create-review",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid review or already reviewed", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let ctx = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::new(&state.db)
        .create(ctx.user_id(), CreateReviewParams::from_dto(payload), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(review.into_dto())))
}

/// Every review, newest first.
///
/// `user_has_reviewed` tells a logged-in caller whether they already left one.
#[utoipa::path(
    get,
    path = "/review/get-reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Reviews", body = ReviewListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let viewer = AuthGuard::new(&state.db, &session)
        .current()
        .await?
        .map(|ctx| ctx.user_id());

    let (reviews, user_has_reviewed) = ReviewService::new(&state.db).get_all(viewer).await?;

    Ok((
        StatusCode::OK,
        Json(ReviewListDto {
            reviews: reviews.into_iter().map(Review::into_dto).collect(),
            user_has_reviewed,
        }),
    ))
}
