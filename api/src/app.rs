//! Application factory
//!
//! Builds the actix-web `App`: middleware, extractor configuration and every
//! route of the API.

use std::sync::Arc;

use actix_web::{
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::Method,
    web, App, Error, HttpRequest, HttpResponse,
};
use tracing_actix_web::TracingLogger;
use utoipa_swagger_ui::SwaggerUi;

use budgetory_shared::{AppConfig, ErrorResponse};

use crate::handlers::error::{
    json_error_handler, path_error_handler, query_error_handler, NOT_FOUND_MESSAGE,
};
use crate::middleware::{create_cors, AccessTokenVerifier, ApiKeyGuard, JwtAuth};
use crate::routes::{self, currencies, entities, health, users, wallets};
use crate::state::{AppState, Storage};

const SWAGGER_UI_PATH: &str = "/api/docs/ui/{_:.*}";
const OPENAPI_JSON_PATH: &str = "/api/docs/openapi.json";

/// Create and configure the application with all dependencies
pub fn create_app<S: Storage>(
    state: web::Data<AppState<S>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl actix_web::body::MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let verifier: Arc<dyn AccessTokenVerifier> = state.token_service.clone();
    let jwt_auth = JwtAuth::new(verifier);
    let openapi = routes::api_docs().to_openapi();

    App::new()
        .app_data(state)
        .app_data(web::Data::new(openapi.clone()))
        .app_data(web::Data::new(ApiKeyGuard::new(
            config.auth.superuser_api_key.clone(),
        )))
        .app_data(
            web::JsonConfig::default()
                .limit(config.server.max_payload_size)
                .error_handler(json_error_handler),
        )
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check))
        // Registered ahead of the /api scope, which would otherwise claim the paths
        .service(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi))
        .service(
            web::scope("/api")
                .route("/docs/", web::get().to(routes::docs::openapi))
                .service(user_routes::<S>())
                .service(
                    web::resource("/currencies/")
                        .route(web::get().to(currencies::list::<S>))
                        .default_service(web::to(method_not_allowed)),
                )
                .service(wallet_routes::<S>().wrap(jwt_auth)),
        )
        .default_service(web::to(not_found))
}

fn user_routes<S: Storage>() -> actix_web::Scope {
    web::scope("/users")
        .service(post_only("/register/", users::register::register::<S>))
        .service(post_only(
            "/register-superuser/",
            users::register::register_superuser::<S>,
        ))
        .service(post_only("/login/", users::login::login::<S>))
        .service(post_only("/demo-login/", users::demo_login::demo_login::<S>))
        .service(post_only("/token/refresh/", users::refresh::refresh::<S>))
}

fn post_only<F, Args>(path: &str, handler: F) -> actix_web::Resource
where
    F: actix_web::Handler<Args>,
    Args: actix_web::FromRequest + 'static,
    F::Output: actix_web::Responder + 'static,
{
    web::resource(path)
        .route(web::post().to(handler))
        .default_service(web::to(method_not_allowed))
}

fn wallet_routes<S: Storage>() -> actix_web::Scope {
    web::scope("/wallets")
        .service(
            web::resource("/")
                .route(web::get().to(wallets::list::<S>))
                .route(web::post().to(wallets::create::<S>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{pk}/")
                .route(web::get().to(wallets::retrieve::<S>))
                .route(web::put().to(wallets::update::<S>))
                .route(web::patch().to(wallets::partial_update::<S>))
                .route(web::delete().to(wallets::destroy::<S>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{wallet_pk}/entities/")
                .route(web::get().to(entities::list::<S>))
                .route(web::post().to(entities::create::<S>))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/{wallet_pk}/entities/{pk}/")
                .route(web::get().to(entities::retrieve::<S>))
                .route(web::put().to(entities::update::<S>))
                .route(web::patch().to(entities::partial_update::<S>))
                .route(web::delete().to(entities::destroy::<S>))
                .default_service(web::to(method_not_allowed)),
        )
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::detail(NOT_FOUND_MESSAGE))
}

async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }
    HttpResponse::MethodNotAllowed().json(ErrorResponse::detail(format!(
        "Method \"{}\" not allowed.",
        req.method()
    )))
}
