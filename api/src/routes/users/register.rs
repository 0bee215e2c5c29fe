use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use budgetory_core::domain::entities::user::Privileges;
use budgetory_core::domain::value_objects::{RegisteredUser, RegistrationForm};

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::handlers::ApiResult;
use crate::middleware::SuperuserApiKey;
use crate::state::{AppState, Storage};

use super::REGISTER_TAG;

/// POST /api/users/register/
///
/// # Request Body
///
/// ```json
/// {"email": "user@example.com", "username": "user", "password_1": "...", "password_2": "..."}
/// ```
///
/// Answers `201 {"id", "email", "username"}`, or 400 with field errors.
pub async fn register<S: Storage>(
    state: web::Data<AppState<S>>,
    form: web::Json<RegistrationForm>,
) -> ApiResult {
    create_account(&state, form.into_inner(), Privileges::Regular).await
}

/// POST /api/users/register-superuser/
///
/// Same flow as [`register`], guarded by `Authorization: KEY <api key>`. A
/// missing or wrong key answers 403 before the body is read.
pub async fn register_superuser<S: Storage>(
    _key: SuperuserApiKey,
    state: web::Data<AppState<S>>,
    form: web::Json<RegistrationForm>,
) -> ApiResult {
    create_account(&state, form.into_inner(), Privileges::Superuser).await
}

async fn create_account<S: Storage>(
    state: &AppState<S>,
    form: RegistrationForm,
    privileges: Privileges,
) -> ApiResult {
    let user = state.auth_service.register(form, privileges).await?;
    Ok(HttpResponse::Created().json(RegisteredUser::from(&user)))
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::Post,
        OperationParams::summary("Register regular user")
            .with_description("Creates a new user account."),
    )]);

    swagger_tag(REGISTER_TAG, Some(params))(
        ViewDoc::new("UserRegisterView").action(Action::Post, Method::POST, "/api/users/register/"),
    )
}

pub fn superuser_view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::Post,
        OperationParams::summary("Register super user")
            .with_description("Creates a new super user account."),
    )]);

    swagger_tag(REGISTER_TAG, Some(params))(
        ViewDoc::new("SuperUserRegisterView").action(
            Action::Post,
            Method::POST,
            "/api/users/register-superuser/",
        ),
    )
}
