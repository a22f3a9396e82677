use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types.
///
/// The leaderboard has exactly one domain error: a score delta outside the
/// permitted per-call range. Everything else (unknown customer ids, rank
/// windows past the end of the board, oversized neighbor counts) is a valid
/// input with an empty or clamped result.
#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected input; the message text is part of the API contract.
    #[error("{0}")]
    InvalidArgument(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let code = self.status_code();

        HttpResponse::build(code).json(ErrorResponse {
            error: self.to_string(),
            code: code.as_u16(),
        })
    }
}
