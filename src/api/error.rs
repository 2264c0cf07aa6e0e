use crate::application_port::{AdventureError, AuthError, InteractionError};
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiErrorCode {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal Server Error")]
    InternalError,
}

impl ApiErrorCode {
    /// Collapses any infrastructure failure to the generic 500; the detail is
    /// logged here and never reaches the caller.
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("internal error: {error}");
        ApiErrorCode::InternalError
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiErrorCode::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiErrorCode::NotFound(_) => StatusCode::NOT_FOUND,
            ApiErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<AuthError> for ApiErrorCode {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Unauthorized => ApiErrorCode::Unauthorized,
            AuthError::Provider(e) => ApiErrorCode::internal(e),
            AuthError::Store(e) => ApiErrorCode::internal(e),
        }
    }
}

impl From<InteractionError> for ApiErrorCode {
    fn from(error: InteractionError) -> Self {
        match &error {
            InteractionError::Duplicate(_) => ApiErrorCode::Conflict(error.to_string()),
            InteractionError::AdventureNotFound => ApiErrorCode::NotFound(error.to_string()),
            InteractionError::Store(e) => ApiErrorCode::internal(e),
        }
    }
}

impl From<AdventureError> for ApiErrorCode {
    fn from(error: AdventureError) -> Self {
        match &error {
            AdventureError::NotFound => ApiErrorCode::NotFound(error.to_string()),
            AdventureError::Forbidden => ApiErrorCode::Forbidden,
            AdventureError::Store(e) => ApiErrorCode::internal(e),
        }
    }
}

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if let Some(code) = err.find::<ApiErrorCode>() {
        (code.status(), code.to_string())
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
    } else if err.find::<warp::cors::CorsForbidden>().is_some() {
        (StatusCode::FORBIDDEN, "Forbidden".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed".to_string(),
        )
    } else {
        warn!("unhandled rejection: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error".to_string(),
        )
    };

    let json = warp::reply::json(&ErrorBody { error: message });
    Ok(warp::reply::with_status(json, status))
}
