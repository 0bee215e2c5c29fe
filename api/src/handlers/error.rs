//! The single place where a `DomainError` becomes an HTTP response.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};

use budgetory_core::errors::{AuthError, DomainError};
use budgetory_shared::ErrorResponse;

pub const NOT_FOUND_MESSAGE: &str = "Not found.";
pub const SERVER_ERROR_MESSAGE: &str = "A server error occurred.";
pub const TOKEN_INVALID_MESSAGE: &str = "Token is invalid or expired";
pub const TOKEN_INVALID_CODE: &str = "token_not_valid";

/// Handler result: any `DomainError` propagated with `?` is rendered by
/// [`handle_domain_error`].
pub type ApiResult = Result<HttpResponse, ApiError>;

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub DomainError);

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        Self(error.into())
    }
}

impl From<budgetory_core::FieldErrors> for ApiError {
    fn from(errors: budgetory_core::FieldErrors) -> Self {
        Self(errors.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_of(&self.0)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.0)
    }
}

fn status_of(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::PermissionDenied { .. } => StatusCode::FORBIDDEN,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Auth(AuthError::InvalidApiKey) => StatusCode::FORBIDDEN,
        DomainError::Auth(AuthError::InvalidCredentials | AuthError::NotAuthenticated) => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Auth(AuthError::DemoLoginFailed) => StatusCode::INTERNAL_SERVER_ERROR,
        DomainError::Token(_) => StatusCode::UNAUTHORIZED,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    let status = status_of(error);
    let body = match error {
        DomainError::Validation(fields) => {
            tracing::debug!(errors = %fields, "Request failed validation");
            ErrorResponse::fields(fields)
        }
        DomainError::NotFound { resource } => {
            tracing::debug!(%resource, "Resource not found");
            ErrorResponse::detail(NOT_FOUND_MESSAGE)
        }
        DomainError::PermissionDenied { message } => ErrorResponse::detail(message.clone()),
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "Internal error");
            ErrorResponse::detail(SERVER_ERROR_MESSAGE)
        }
        DomainError::Auth(AuthError::DemoLoginFailed) => {
            ErrorResponse::error(AuthError::DemoLoginFailed.to_string())
        }
        DomainError::Auth(auth) => ErrorResponse::detail(auth.to_string()),
        DomainError::Token(token) => {
            tracing::debug!(reason = %token, "Token rejected");
            ErrorResponse::detail(TOKEN_INVALID_MESSAGE).with_code(TOKEN_INVALID_CODE)
        }
    };

    HttpResponse::build(status).json(body)
}

/// Malformed JSON bodies: `400 {"detail": "JSON parse error - <reason>"}`
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::ContentType => HttpResponse::UnsupportedMediaType()
            .json(ErrorResponse::detail("Unsupported media type in request.")),
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            HttpResponse::PayloadTooLarge().json(ErrorResponse::detail("Request body is too large."))
        }
        _ => HttpResponse::BadRequest()
            .json(ErrorResponse::detail(format!("JSON parse error - {}", err))),
    };
    InternalError::from_response(err, response).into()
}

/// Path segments that do not parse (e.g. a non-numeric pk) match no object
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(ErrorResponse::detail(NOT_FOUND_MESSAGE));
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(ErrorResponse::detail(err.to_string()));
    InternalError::from_response(err, response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use budgetory_core::errors::TokenError;

    async fn body_of(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_error_is_field_map() {
        let response = handle_domain_error(&DomainError::field("email", "Enter a valid email address."));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_of(response).await;
        assert_eq!(body["detail"]["email"][0], "Enter a valid email address.");
    }

    #[actix_web::test]
    async fn test_auth_errors() {
        let response = handle_domain_error(&AuthError::InvalidApiKey.into());
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_of(response).await["detail"], "Invalid or missing API key.");

        let response = handle_domain_error(&AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = handle_domain_error(&AuthError::DemoLoginFailed.into());
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, serde_json::json!({"error": "Demo login failed."}));
    }

    #[actix_web::test]
    async fn test_token_error_carries_code() {
        let response = handle_domain_error(&TokenError::TokenRevoked.into());
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = body_of(response).await;
        assert_eq!(body["detail"], TOKEN_INVALID_MESSAGE);
        assert_eq!(body["code"], TOKEN_INVALID_CODE);
    }

    #[actix_web::test]
    async fn test_internal_error_hides_cause() {
        let response = handle_domain_error(&DomainError::internal("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await["detail"], SERVER_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn test_not_found_and_permission_denied() {
        let response = handle_domain_error(&DomainError::not_found("Entity"));
        assert_eq!(body_of(response).await["detail"], NOT_FOUND_MESSAGE);

        let response = handle_domain_error(&DomainError::permission_denied("User does not have access to Wallet."));
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
