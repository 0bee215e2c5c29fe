use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use budgetory_shared::validation::normalize_email;

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::{LoginRequest, TokenResponse};
use crate::handlers::ApiResult;
use crate::state::{AppState, Storage};

use super::LOGIN_TAG;

/// POST /api/users/login/
///
/// `{"email", "password"}` → `200 {"access", "refresh"}`
pub async fn login<S: Storage>(
    state: web::Data<AppState<S>>,
    request: web::Json<LoginRequest>,
) -> ApiResult {
    let (email, password) = request.into_inner().credentials()?;

    let tokens = state
        .auth_service
        .login(&normalize_email(&email), &password)
        .await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(tokens)))
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::Post,
        OperationParams::summary("User login")
            .with_description("Authenticates User. Returns access and refresh tokens."),
    )]);

    swagger_tag(LOGIN_TAG, Some(params))(
        ViewDoc::new("UserLoginView").action(Action::Post, Method::POST, "/api/users/login/"),
    )
}
