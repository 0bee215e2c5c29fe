//! Public currency list

use std::collections::HashMap;

use actix_web::{http::Method, web, HttpResponse};

use crate::docs::{swagger_tag, Action, OperationParams, ViewDoc};
use crate::dto::CurrencyResponse;
use crate::handlers::ApiResult;
use crate::state::{AppState, Storage};

pub const TAG: &str = "03. Wallets";

/// GET /api/currencies/
pub async fn list<S: Storage>(state: web::Data<AppState<S>>) -> ApiResult {
    let currencies: Vec<CurrencyResponse> = state
        .wallet_service
        .list_currencies()
        .await?
        .into_iter()
        .map(CurrencyResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(currencies))
}

pub fn view_doc() -> ViewDoc {
    let params = HashMap::from([(
        Action::List,
        OperationParams::summary("Currencies list").with_description("List of all Currencies."),
    )]);

    swagger_tag(TAG, Some(params))(
        ViewDoc::new("CurrencyViewSet").action(Action::List, Method::GET, "/api/currencies/"),
    )
}
