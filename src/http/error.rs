use super::reply;
use crate::manager::Error as ManagerError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Error as AxumError,
};
use serde_json::error::Error as SerdeError;
use std::error::Error as StdError;
use tracing::error;

pub(crate) type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    UnreadableBody(AxumError),
    BodyTooLarge { limit: usize },
    InvalidBody(SerdeError),
    Callback(ManagerError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::UnreadableBody(e) => {
                error!(error = %e, "failed to read request body");
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            Error::BodyTooLarge { limit } => {
                error!(%limit, "request body exceeds size limit");
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            Error::InvalidBody(e) => {
                error!(error = %e, "failed to decode request body");
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            Error::Callback(e) => {
                error!(error = %e, source = ?e.source(), "failed to process build callback");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to process build callback",
                )
            }
        };

        reply::error(status, message)
    }
}

impl From<SerdeError> for Error {
    fn from(e: SerdeError) -> Self {
        Error::InvalidBody(e)
    }
}

impl From<ManagerError> for Error {
    fn from(e: ManagerError) -> Self {
        Error::Callback(e)
    }
}
