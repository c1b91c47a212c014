//! Mapping from domain errors to HTTP responses.
//!
//! Every business-logic failure is converted here into a status code and
//! a human-readable message inside the standard envelope. Unexpected
//! failures collapse to a generic 500: downstream error text is logged,
//! never echoed to the client.

use actix_web::HttpResponse;

use jd_core::errors::{AuthError, DomainError};
use jd_shared::types::response::ApiResponse;

/// Message returned for any unexpected failure
const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Convert a domain error into an HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Auth(auth) => auth_error_response(auth),
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("{} not found", resource))),
        DomainError::Token(e) => {
            tracing::error!(error = %e, "token operation failed");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE))
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            tracing::error!(error = %message, "request failed");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE))
        }
    }
}

fn auth_error_response(error: &AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::CaptchaValidationFailed
        | AuthError::AccountInactive
        | AuthError::InvalidCredentials
        | AuthError::InvalidOtp => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(message))
        }
        AuthError::AccountNotFound | AuthError::EmailNotRegistered => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(message))
        }
        AuthError::OtpUpdateFailed
        | AuthError::EmailTemplateMissing
        | AuthError::OtpSendFailed => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
        AuthError::RoleNotFound => {
            tracing::error!("account references a missing role");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(INTERNAL_ERROR_MESSAGE))
        }
    }
}

/// Shorthand for a 400 with a fixed message
pub fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
}
