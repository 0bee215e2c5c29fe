use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::TokenResponse;
use crate::handlers::ApiResult;
use crate::state::{AppState, Storage};

use super::LOGIN_TAG;

/// POST /api/users/demo-login/
///
/// Creates a throwaway demo account with a populated wallet and signs it in.
/// Any failure answers `500 {"error": "Demo login failed."}`.
pub async fn demo_login<S: Storage>(state: web::Data<AppState<S>>) -> ApiResult {
    let tokens = state.demo_service.login().await?;
    Ok(HttpResponse::Ok().json(TokenResponse::from(tokens)))
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::Post,
        OperationParams::summary("Demo User login").with_description(
            "Creates and authenticates demo User. Returns access and refresh tokens.",
        ),
    )]);

    swagger_tag(LOGIN_TAG, Some(params))(
        ViewDoc::new("DemoLoginView").action(Action::Post, Method::POST, "/api/users/demo-login/"),
    )
}
