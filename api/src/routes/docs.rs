//! `GET /api/docs/`: the OpenAPI document of every routed view. The same
//! document backs the Swagger UI under `/api/docs/ui/`.

use actix_web::{web, HttpResponse};
use utoipa::openapi::OpenApi;

use crate::docs::ApiDocs;

use super::{currencies, entities, users, wallets};

/// Documentation of every view the application routes
pub fn api_docs() -> ApiDocs {
    ApiDocs::new("Budgetory API", env!("CARGO_PKG_VERSION"))
        .view(users::register::view_doc())
        .view(users::register::superuser_view_doc())
        .view(users::login::view_doc())
        .view(users::demo_login::view_doc())
        .view(users::refresh::view_doc())
        .view(currencies::view_doc())
        .view(wallets::view_doc())
        .view(entities::view_doc())
}

pub async fn openapi(document: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(document.get_ref())
}
