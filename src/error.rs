use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use serde_json::json;

use thiserror::Error;

use crate::repo::StoreError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building domain objects from user input
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    ParsingError(String),
}

pub type RestResult<T> = std::result::Result<T, RestError>;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("{0}")]
    ParseError(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<Error> for RestError {
    fn from(e: Error) -> Self {
        match e {
            Error::ParsingError(msg) => Self::ParseError(msg),
        }
    }
}

impl From<StoreError> for RestError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error.cause_chain = ?e, "Submission store failure");
        Self::InternalError("Storage error".into())
    }
}

impl From<tokio::task::JoinError> for RestError {
    fn from(e: tokio::task::JoinError) -> Self {
        tracing::error!(error.cause_chain = ?e, "Blocking task failed");
        Self::InternalError("Task error".into())
    }
}

impl ResponseError for RestError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ParseError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InternalError(_) | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut res = HttpResponse::build(self.status_code());
        match self {
            // The public form shows the validation message as-is
            Self::ParseError(msg) => res.content_type("text/plain; charset=utf-8").body(msg.clone()),
            Self::Unauthorized => res.json(json!({ "error": "Unauthorized" })),
            Self::InternalError(_) | Self::Other(_) => {
                res.json(json!({ "error": "Internal Server Error" }))
            }
        }
    }
}
