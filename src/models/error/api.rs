use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::RegistryError;
use crate::models::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request body could not be extracted (malformed JSON, hex or uint).
    #[error("Bad Request: {0}")]
    BadRequest(String),

    /// A contract call was rejected. The response carries the contract code.
    #[error("{0}")]
    Contract(#[from] RegistryError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Contract(err) => match err {
                RegistryError::InvalidMessage => StatusCode::BAD_REQUEST,
                RegistryError::RelayNotFound(_) => StatusCode::NOT_FOUND,
                RegistryError::AlreadyConfirmed(_) => StatusCode::CONFLICT,
                RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Contract(err) => {
                ApiResponse::<()>::contract_error(err.to_string(), err.code())
            }
            ApiError::BadRequest(_) => ApiResponse::<()>::error(self.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
