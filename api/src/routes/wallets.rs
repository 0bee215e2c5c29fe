//! Wallet viewset. Every operation is limited to wallets the caller belongs to.

use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use budgetory_core::domain::value_objects::WalletForm;

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::WalletResponse;
use crate::handlers::ApiResult;
use crate::middleware::AuthContext;
use crate::state::{AppState, Storage};

pub const TAG: &str = "03. Wallets";

const COLLECTION: &str = "/api/wallets/";
const DETAIL: &str = "/api/wallets/{pk}/";

pub async fn list<S: Storage>(auth: AuthContext, state: web::Data<AppState<S>>) -> ApiResult {
    let wallets: Vec<WalletResponse> = state
        .wallet_service
        .list(auth.user_id)
        .await?
        .into_iter()
        .map(WalletResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(wallets))
}

pub async fn create<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    form: web::Json<WalletForm>,
) -> ApiResult {
    let wallet = state
        .wallet_service
        .create(auth.user_id, form.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(WalletResponse::from(wallet)))
}

pub async fn retrieve<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    pk: web::Path<i64>,
) -> ApiResult {
    let wallet = state.wallet_service.get(auth.user_id, pk.into_inner()).await?;
    Ok(HttpResponse::Ok().json(WalletResponse::from(wallet)))
}

pub async fn update<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    pk: web::Path<i64>,
    form: web::Json<WalletForm>,
) -> ApiResult {
    save(auth, state, pk.into_inner(), form.into_inner(), false).await
}

pub async fn partial_update<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    pk: web::Path<i64>,
    form: web::Json<WalletForm>,
) -> ApiResult {
    save(auth, state, pk.into_inner(), form.into_inner(), true).await
}

async fn save<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    pk: i64,
    form: WalletForm,
    partial: bool,
) -> ApiResult {
    let wallet = state
        .wallet_service
        .update(auth.user_id, pk, form, partial)
        .await?;

    Ok(HttpResponse::Ok().json(WalletResponse::from(wallet)))
}

pub async fn destroy<S: Storage>(
    auth: AuthContext,
    state: web::Data<AppState<S>>,
    pk: web::Path<i64>,
) -> ApiResult {
    state.wallet_service.delete(auth.user_id, pk.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([
        (Action::List, OperationParams::summary("List wallets of the current user")),
        (
            Action::Create,
            OperationParams::summary("Create a wallet")
                .with_description("The current user becomes a member of the new wallet."),
        ),
    ]);

    swagger_tag(TAG, Some(params))(
        ViewDoc::new("WalletViewSet")
            .action(Action::List, Method::GET, COLLECTION)
            .action(Action::Create, Method::POST, COLLECTION)
            .action(Action::Retrieve, Method::GET, DETAIL)
            .action(Action::Update, Method::PUT, DETAIL)
            .action(Action::PartialUpdate, Method::PATCH, DETAIL)
            .action(Action::Destroy, Method::DELETE, DETAIL),
    )
}
