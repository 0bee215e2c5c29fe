//! Shared set-up for the HTTP integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::http::header;
use actix_web::web;
use uuid::Uuid;

use budgetory_api::state::{AppState, MemoryStorage, Repositories};
use budgetory_core::domain::entities::user::Privileges;
use budgetory_core::domain::value_objects::RegistrationForm;
use budgetory_core::repositories::mock::{
    MockCurrencyRepository, MockEntityRepository, MockUserRepository, MockWalletRepository,
};
use budgetory_shared::{AppConfig, JwtConfig};

pub const API_KEY: &str = "test-api-key";
pub const PASSWORD: &str = "Secret123";

pub struct TestContext {
    pub config: AppConfig,
    pub state: web::Data<AppState<MemoryStorage>>,
    pub users: Arc<MockUserRepository>,
    pub wallets: Arc<MockWalletRepository>,
    pub currencies: Arc<MockCurrencyRepository>,
    pub entities: Arc<MockEntityRepository>,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.auth.jwt = JwtConfig::new("integration-test-secret");
    config.auth.superuser_api_key = Some(API_KEY.to_string());
    config.auth.bcrypt_cost = 4;
    config
}

pub fn context() -> TestContext {
    context_with(test_config())
}

pub fn context_with(config: AppConfig) -> TestContext {
    let repositories = Repositories::<MemoryStorage>::in_memory();
    let users = repositories.users.clone();
    let wallets = repositories.wallets.clone();
    let currencies = repositories.currencies.clone();
    let entities = repositories.entities.clone();
    let state = web::Data::new(AppState::new(repositories, &config.auth));

    TestContext {
        config,
        state,
        users,
        wallets,
        currencies,
        entities,
    }
}

impl TestContext {
    /// Register `email` and return its id and an access token
    pub async fn signed_in(&self, email: &str) -> (Uuid, String) {
        let user = self
            .state
            .auth_service
            .register(RegistrationForm::new(email, PASSWORD, PASSWORD), Privileges::Regular)
            .await
            .expect("registration should succeed");
        let tokens = self
            .state
            .token_service
            .generate_tokens(&user)
            .await
            .expect("token issue should succeed");
        (user.id, tokens.access)
    }
}

pub fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

pub fn registration_body(email: &str, password_1: &str, password_2: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "username": "tester",
        "password_1": password_1,
        "password_2": password_2,
    })
}
