//! Bearer token guard for the wallet and entity scopes.
//!
//! The middleware extracts the access token from the `Authorization: Bearer`
//! header, verifies it with the core token service and injects an
//! [`AuthContext`] into the request extensions. Handlers take `AuthContext`
//! as an argument to require authentication.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::{AUTHORIZATION, WWW_AUTHENTICATE},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use uuid::Uuid;

use budgetory_core::{
    domain::entities::token::Claims,
    errors::{AuthError, DomainError, TokenError},
    repositories::TokenRepository,
    services::TokenService,
};
use budgetory_shared::ErrorResponse;

use crate::handlers::error::{ApiError, TOKEN_INVALID_CODE};

const INVALID_ACCESS_TOKEN_MESSAGE: &str = "Given token not valid for any token type";

/// Authenticated user, taken from verified access token claims
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    /// Id of the access token that authenticated the request
    pub jti: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::InvalidTokenFormat))?;

        Ok(Self {
            user_id,
            email: claims.email,
            is_staff: claims.is_staff,
            is_superuser: claims.is_superuser,
            jti: claims.jti,
        })
    }
}

/// Access token verification, object safe so the middleware does not carry
/// the repository type parameters
pub trait AccessTokenVerifier: Send + Sync {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError>;
}

impl<R: TokenRepository> AccessTokenVerifier for TokenService<R> {
    fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        TokenService::verify_access_token(self, token)
    }
}

/// Wraps a scope so every request in it carries a verified [`AuthContext`]
#[derive(Clone)]
pub struct JwtAuth {
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl JwtAuth {
    pub fn new(verifier: Arc<dyn AccessTokenVerifier>) -> Self {
        Self { verifier }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            verifier: Arc::clone(&self.verifier),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    verifier: Arc<dyn AccessTokenVerifier>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let verified = authenticate(&req, self.verifier.as_ref());

        Box::pin(async move {
            let context = verified?;
            tracing::debug!(user_id = %context.user_id, "Request authenticated");
            req.extensions_mut().insert(context);
            service.call(req).await
        })
    }
}

fn authenticate(req: &ServiceRequest, verifier: &dyn AccessTokenVerifier) -> Result<AuthContext, Error> {
    let token = extract_bearer_token(req).ok_or_else(|| {
        unauthorized(ErrorResponse::detail(AuthError::NotAuthenticated.to_string()))
    })?;

    verifier
        .verify_access_token(&token)
        .and_then(AuthContext::from_claims)
        .map_err(|e| {
            tracing::debug!(error = %e, "Access token rejected");
            unauthorized(ErrorResponse::detail(INVALID_ACCESS_TOKEN_MESSAGE).with_code(TOKEN_INVALID_CODE))
        })
}

fn unauthorized(body: ErrorResponse) -> Error {
    let response = HttpResponse::Unauthorized()
        .insert_header((WWW_AUTHENTICATE, r#"Bearer realm="api""#))
        .json(&body);
    InternalError::from_response(body.detail_message().unwrap_or_default().to_string(), response)
        .into()
}

/// `Authorization: Bearer <token>`, with the scheme matched case-sensitively
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

/// Handlers that take an `AuthContext` answer 401 outside a `JwtAuth` scope
impl FromRequest for AuthContext {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(AuthError::NotAuthenticated));

        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_bearer_header_forms() {
        let cases = [
            (Some("Bearer abc.def.ghi"), Some("abc.def.ghi")),
            (Some("Bearer   padded  "), Some("padded")),
            (Some("abc.def.ghi"), None),
            (Some("bearer abc"), None),
            (Some("KEY abc"), None),
            (Some("Bearer "), None),
            (None, None),
        ];

        for (header, expected) in cases {
            let mut builder = TestRequest::default();
            if let Some(value) = header {
                builder = builder.insert_header((AUTHORIZATION, value));
            }
            let req = builder.to_srv_request();
            assert_eq!(extract_bearer_token(&req).as_deref(), expected, "{:?}", header);
        }
    }

    #[test]
    fn test_context_rejects_malformed_subject() {
        let claims = Claims {
            sub: "not-a-uuid".into(),
            email: "a@example.com".into(),
            is_staff: false,
            is_superuser: false,
            token_type: "access".into(),
            iat: 0,
            exp: 0,
            nbf: 0,
            iss: "budgetory".into(),
            aud: "budgetory-api".into(),
            jti: "jti".into(),
        };
        assert!(AuthContext::from_claims(claims).is_err());
    }
}
