//! Entity viewset, nested under a wallet.
//!
//! The wallet always comes from the path. The caller must be a member of it,
//! otherwise every action answers 403.

use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};
use serde::Deserialize;

use budgetory_core::domain::value_objects::EntityForm;

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::{EntityListQuery, EntityResponse};
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;
use crate::state::{AppState, Storage};

pub const TAG: &str = "06. Entities";

const COLLECTION: &str = "/api/wallets/{wallet_pk}/entities/";
const DETAIL: &str = "/api/wallets/{wallet_pk}/entities/{pk}/";

#[derive(Debug, Deserialize)]
pub struct EntityPath {
    pub wallet_pk: i64,
    pub pk: i64,
}

pub async fn list<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    wallet_pk: web::Path<i64>,
    query: web::Query<EntityListQuery>,
) -> ApiResult {
    let wallet_pk = wallet_pk.into_inner();
    // Membership is checked before the query string is looked at
    state.entity_service.check_access(auth.user_id, wallet_pk).await?;
    let (filter, ordering) = query.into_inner().into_parts()?;

    let entities: Vec<EntityResponse> = state
        .entity_service
        .list(auth.user_id, wallet_pk, &filter, &ordering)
        .await?
        .into_iter()
        .map(EntityResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(entities))
}

pub async fn create<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    wallet_pk: web::Path<i64>,
    form: web::Json<EntityForm>,
) -> ApiResult {
    let entity = state
        .entity_service
        .create(auth.user_id, wallet_pk.into_inner(), form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(EntityResponse::from(entity)))
}

pub async fn retrieve<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    path: web::Path<EntityPath>,
) -> ApiResult {
    let entity = state
        .entity_service
        .get(auth.user_id, path.wallet_pk, path.pk)
        .await?;

    Ok(HttpResponse::Ok().json(EntityResponse::from(entity)))
}

pub async fn update<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    path: web::Path<EntityPath>,
    form: web::Json<EntityForm>,
) -> ApiResult {
    save(auth, state, path.into_inner(), form.into_inner(), false).await
}

pub async fn partial_update<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    path: web::Path<EntityPath>,
    form: web::Json<EntityForm>,
) -> ApiResult {
    save(auth, state, path.into_inner(), form.into_inner(), true).await
}

async fn save<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    path: EntityPath,
    form: EntityForm,
    partial: bool,
) -> ApiResult {
    let entity = state
        .entity_service
        .update(auth.user_id, path.wallet_pk, path.pk, form, partial)
        .await?;

    Ok(HttpResponse::Ok().json(EntityResponse::from(entity)))
}

pub async fn destroy<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    path: web::Path<EntityPath>,
) -> ApiResult {
    state
        .entity_service
        .delete(auth.user_id, path.wallet_pk, path.pk)
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([
        (
            Action::List,
            OperationParams::summary("Entities list").with_description("List of all Wallet Entities."),
        ),
        (
            Action::Create,
            OperationParams::summary("Create Entity")
                .with_description("Creates and returns new Entity instance."),
        ),
        (
            Action::Retrieve,
            OperationParams::summary("Entity details").with_description("Details of single Entity."),
        ),
        (
            Action::PartialUpdate,
            OperationParams::summary("Entity update").with_description("Updates single Entity."),
        ),
        (
            Action::Destroy,
            OperationParams::summary("Entity delete").with_description("Removes single Entity."),
        ),
    ]);

    swagger_tag(TAG, Some(params))(
        ViewDoc::new("EntityViewSet")
            .action(Action::List, Method::GET, COLLECTION)
            .action(Action::Create, Method::POST, COLLECTION)
            .action(Action::Retrieve, Method::GET, DETAIL)
            .action(Action::Update, Method::PUT, DETAIL)
            .action(Action::PartialUpdate, Method::PATCH, DETAIL)
            .action(Action::Destroy, Method::DELETE, DETAIL),
    )
}
