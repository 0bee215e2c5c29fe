use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::{RefreshRequest, TokenResponse};
use crate::handlers::ApiResult;
use crate::state::{AppState, Storage};

use super::LOGIN_TAG;

/// POST /api/users/token/refresh/
///
/// Rotates the refresh token: the presented one is revoked and a new pair
/// is returned.
pub async fn refresh<S: Storage>(
    state: web::Data<AppState<S>>,
    request: web::Json<RefreshRequest>,
) -> ApiResult {
    let token = request.into_inner().token()?;
    let tokens = state.auth_service.refresh(&token).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::from(tokens)))
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::Post,
        OperationParams::summary("Token refresh")
            .with_description("Takes a refresh token and returns a new access token."),
    )]);

    swagger_tag(LOGIN_TAG, Some(params))(
        ViewDoc::new("TokenRefreshView").action(Action::Post, Method::POST, "/api/users/token/refresh/"),
    )
}
