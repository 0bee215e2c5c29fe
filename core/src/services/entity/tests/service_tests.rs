use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::entity::{EntityFilter, EntityOrdering};
use crate::domain::entities::wallet::NewWallet;
use crate::domain::value_objects::EntityForm;
use crate::errors::DomainError;
use crate::repositories::mock::{MockEntityRepository, MockWalletRepository};
use crate::repositories::WalletRepository;
use crate::services::entity::EntityService;

struct Fixture {
    service: EntityService<MockWalletRepository, MockEntityRepository>,
    owner: Uuid,
    wallet_id: i64,
    other_wallet_id: i64,
}

async fn fixture() -> Fixture {
    let wallets = Arc::new(MockWalletRepository::new());
    let owner = Uuid::new_v4();
    let wallet = |name: &str| NewWallet {
        name: name.to_string(),
        description: None,
        currency_id: 1,
        member_ids: vec![owner],
    };
    let wallet_id = wallets.create(wallet("Home")).await.unwrap().id;
    let other_wallet_id = wallets.create(wallet("Trip")).await.unwrap().id;

    Fixture {
        service: EntityService::new(wallets, Arc::new(MockEntityRepository::new())),
        owner,
        wallet_id,
        other_wallet_id,
    }
}

fn named(name: &str) -> EntityForm {
    EntityForm {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_uses_path_wallet() {
    let f = fixture().await;
    let entity = f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap();

    assert_eq!(entity.wallet_id, f.wallet_id);
    assert!(entity.is_active);
    assert!(!entity.is_deposit);
}

#[tokio::test]
async fn test_non_member_is_denied() {
    let f = fixture().await;
    let stranger = Uuid::new_v4();

    let err = f.service.create(stranger, f.wallet_id, named("Shop")).await.unwrap_err();
    match err {
        DomainError::PermissionDenied { message } => {
            assert_eq!(message, "User does not have access to Wallet.");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let result = f
        .service
        .list(stranger, f.wallet_id, &EntityFilter::default(), &EntityOrdering::default())
        .await;
    assert!(matches!(result, Err(DomainError::PermissionDenied { .. })));
}

#[tokio::test]
async fn test_missing_wallet_is_denied() {
    let f = fixture().await;
    let result = f.service.check_access(f.owner, 999).await;

    assert!(matches!(result, Err(DomainError::PermissionDenied { .. })));
}

#[tokio::test]
async fn test_list_only_contains_path_wallet_entities() {
    let f = fixture().await;
    f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap();
    f.service.create(f.owner, f.other_wallet_id, named("Hotel")).await.unwrap();

    let entities = f
        .service
        .list(f.owner, f.wallet_id, &EntityFilter::default(), &EntityOrdering::default())
        .await
        .unwrap();
    let names: Vec<_> = entities.into_iter().map(|e| e.name).collect();

    assert_eq!(names, vec!["Shop"]);
}

#[tokio::test]
async fn test_entity_of_other_wallet_is_not_found() {
    let f = fixture().await;
    let hotel = f.service.create(f.owner, f.other_wallet_id, named("Hotel")).await.unwrap();

    assert!(matches!(
        f.service.get(f.owner, f.wallet_id, hotel.id).await,
        Err(DomainError::NotFound { .. })
    ));
    assert!(matches!(
        f.service.delete(f.owner, f.wallet_id, hotel.id).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_duplicate_name_in_wallet() {
    let f = fixture().await;
    f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap();

    let err = f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap_err();
    match err {
        DomainError::Validation(errors) => {
            assert_eq!(errors.get("name"), ["Entity with given name already exists in Wallet."]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(f.service.create(f.owner, f.other_wallet_id, named("Shop")).await.is_ok());
}

#[tokio::test]
async fn test_update_keeps_own_name() {
    let f = fixture().await;
    let shop = f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap();

    let form = EntityForm {
        name: Some("Shop".to_string()),
        description: Some("Corner shop".to_string()),
        ..Default::default()
    };
    let updated = f.service.update(f.owner, f.wallet_id, shop.id, form, false).await.unwrap();

    assert_eq!(updated.description.as_deref(), Some("Corner shop"));
}

#[tokio::test]
async fn test_partial_update_only_touches_given_fields() {
    let f = fixture().await;
    let form = EntityForm {
        name: Some("Bank".to_string()),
        description: Some("Main account".to_string()),
        ..Default::default()
    };
    let bank = f.service.create(f.owner, f.wallet_id, form).await.unwrap();

    let patch = EntityForm {
        is_deposit: Some(true),
        ..Default::default()
    };
    let updated = f.service.update(f.owner, f.wallet_id, bank.id, patch, true).await.unwrap();

    assert_eq!(updated.name, "Bank");
    assert_eq!(updated.description.as_deref(), Some("Main account"));
    assert!(updated.is_deposit);
}

#[tokio::test]
async fn test_delete() {
    let f = fixture().await;
    let shop = f.service.create(f.owner, f.wallet_id, named("Shop")).await.unwrap();

    f.service.delete(f.owner, f.wallet_id, shop.id).await.unwrap();
    assert!(matches!(
        f.service.get(f.owner, f.wallet_id, shop.id).await,
        Err(DomainError::NotFound { .. })
    ));
}
