use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::MessageResponse;

/// Failures raised by the in-memory stores.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("item not found")]
    ItemNotFound,

    #[error("item not available")]
    Unavailable,

    #[error("wishlist not found for user")]
    UserNotFound,

    #[error("item not found in wishlist")]
    ItemNotInWishlist,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::Unavailable) => StatusCode::BAD_REQUEST,
            AppError::Store(
                StoreError::ItemNotFound
                | StoreError::UserNotFound
                | StoreError::ItemNotInWishlist,
            ) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "request rejected");
        (status, axum::Json(MessageResponse::new(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
