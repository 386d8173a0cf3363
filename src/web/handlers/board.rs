use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use crate::core::app::AppState;
use crate::core::error::AppResult;
use crate::core::types::{BoardPostResponse, CreateBoardPostRequest};
use crate::web::extract::ValidatedJson;

pub async fn create_post(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<CreateBoardPostRequest>,
) -> AppResult<Json<BoardPostResponse>> {
    let post = state
        .board_service
        .create(request.title, request.content)
        .await?;

    Ok(Json(post.into()))
}

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<Vec<BoardPostResponse>>> {
    let posts = state.board_service.list().await?;

    Ok(Json(posts.into_iter().map(BoardPostResponse::from).collect()))
}

pub async fn get_post(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<String>,
) -> AppResult<Json<BoardPostResponse>> {
    let post = state.board_service.read(&post_id).await?;

    Ok(Json(post.into()))
}
