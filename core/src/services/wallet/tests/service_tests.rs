use std::sync::Arc;

use uuid::Uuid;

use crate::domain::value_objects::WalletForm;
use crate::errors::DomainError;
use crate::repositories::mock::{MockCurrencyRepository, MockWalletRepository};
use crate::services::wallet::WalletService;

fn service() -> WalletService<MockWalletRepository, MockCurrencyRepository> {
    WalletService::new(
        Arc::new(MockWalletRepository::new()),
        Arc::new(MockCurrencyRepository::seeded()),
    )
}

fn form(name: &str, currency: i64) -> WalletForm {
    WalletForm {
        name: Some(name.to_string()),
        description: None,
        currency: Some(currency),
    }
}

#[tokio::test]
async fn test_list_currencies_ordered_by_name() {
    let names: Vec<_> = service()
        .list_currencies()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["EUR", "GBP", "PLN", "USD"]);
}

#[tokio::test]
async fn test_create_adds_creator_as_member() {
    let service = service();
    let owner = Uuid::new_v4();

    let wallet = service.create(owner, form("Home", 1)).await.unwrap();
    assert_eq!(wallet.member_ids, vec![owner]);
    assert_eq!(service.list(owner).await.unwrap().len(), 1);
    assert!(service.list(Uuid::new_v4()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_unknown_currency() {
    let err = service().create(Uuid::new_v4(), form("Home", 42)).await.unwrap_err();

    match err {
        DomainError::Validation(errors) => {
            assert_eq!(errors.get("currency"), ["Invalid pk \"42\" - object does not exist."]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_member_sees_not_found() {
    let service = service();
    let owner = Uuid::new_v4();
    let stranger = Uuid::new_v4();
    let wallet = service.create(owner, form("Home", 1)).await.unwrap();

    assert!(matches!(service.get(stranger, wallet.id).await, Err(DomainError::NotFound { .. })));
    assert!(matches!(
        service.delete(stranger, wallet.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(service.get(owner, wallet.id).await.is_ok());
}

#[tokio::test]
async fn test_partial_update() {
    let service = service();
    let owner = Uuid::new_v4();
    let wallet = service.create(owner, form("Home", 1)).await.unwrap();

    let patch = WalletForm {
        description: Some("Household".to_string()),
        ..Default::default()
    };
    let updated = service.update(owner, wallet.id, patch, true).await.unwrap();

    assert_eq!(updated.name, "Home");
    assert_eq!(updated.description.as_deref(), Some("Household"));
    assert_eq!(updated.currency_id, 1);
}

#[tokio::test]
async fn test_full_update_requires_fields() {
    let service = service();
    let owner = Uuid::new_v4();
    let wallet = service.create(owner, form("Home", 1)).await.unwrap();

    let result = service.update(owner, wallet.id, WalletForm::default(), false).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn test_delete() {
    let service = service();
    let owner = Uuid::new_v4();
    let wallet = service.create(owner, form("Home", 1)).await.unwrap();

    service.delete(owner, wallet.id).await.unwrap();
    assert!(service.list(owner).await.unwrap().is_empty());
}
