use uuid::Uuid;

use crate::domain::entities::wallet::NewWallet;
use crate::repositories::wallet::{MockWalletRepository, WalletRepository};

fn new_wallet(name: &str, members: Vec<Uuid>) -> NewWallet {
    NewWallet {
        name: name.to_string(),
        description: None,
        currency_id: 1,
        member_ids: members,
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = MockWalletRepository::new();
    let owner = Uuid::new_v4();

    let first = repo.create(new_wallet("Home", vec![owner])).await.unwrap();
    let second = repo.create(new_wallet("Trip", vec![owner])).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

#[tokio::test]
async fn test_list_for_member_only_returns_own_wallets() {
    let repo = MockWalletRepository::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    repo.create(new_wallet("Alice", vec![alice])).await.unwrap();
    repo.create(new_wallet("Shared", vec![alice, bob])).await.unwrap();
    repo.create(new_wallet("Bob", vec![bob])).await.unwrap();

    let names: Vec<_> = repo
        .list_for_member(alice)
        .await
        .unwrap()
        .into_iter()
        .map(|w| w.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Shared"]);
}

#[tokio::test]
async fn test_is_member() {
    let repo = MockWalletRepository::new();
    let owner = Uuid::new_v4();
    let wallet = repo.create(new_wallet("Home", vec![owner])).await.unwrap();

    assert!(repo.is_member(wallet.id, owner).await.unwrap());
    assert!(!repo.is_member(wallet.id, Uuid::new_v4()).await.unwrap());
    assert!(!repo.is_member(999, owner).await.unwrap());
}

#[tokio::test]
async fn test_update_keeps_members() {
    let repo = MockWalletRepository::new();
    let owner = Uuid::new_v4();
    let mut wallet = repo.create(new_wallet("Home", vec![owner])).await.unwrap();

    wallet.name = "House".to_string();
    wallet.member_ids.clear();
    let updated = repo.update(wallet).await.unwrap();

    assert_eq!(updated.name, "House");
    assert_eq!(updated.member_ids, vec![owner]);
}

#[tokio::test]
async fn test_delete() {
    let repo = MockWalletRepository::new();
    let wallet = repo.create(new_wallet("Home", vec![Uuid::new_v4()])).await.unwrap();

    assert!(repo.delete(wallet.id).await.unwrap());
    assert!(!repo.delete(wallet.id).await.unwrap());
    assert!(repo.find_by_id(wallet.id).await.unwrap().is_none());
}
