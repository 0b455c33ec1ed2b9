//! User service unit tests with a mocked directory store.

use std::sync::Arc;

use mockall::predicate::eq;

use user_directory::domain::{Address, Company, Geo, User};
use user_directory::errors::AppError;
use user_directory::infra::{MockUserRepository, UserFilter};
use user_directory::services::{UserDirectory, UserService};
use user_directory::types::PaginationParams;

fn test_user(id: i32) -> User {
    User {
        id,
        name: "Leanne Graham".to_string(),
        username: "Bret".to_string(),
        email: "Sincere@april.biz".to_string(),
        phone: "1-770-736-8031".to_string(),
        website: "hildegard.org".to_string(),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

#[tokio::test]
async fn test_get_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(test_user(id))));

    let service = UserDirectory::new(Arc::new(repo));
    let user = service.get_user(3).await.unwrap();

    assert_eq!(user.id, 3);
    assert_eq!(user.company.name, "Romaguera-Crona");
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.get_user(999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_list_users_passes_page_window_to_store() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_and_count()
        .withf(|filter, offset, limit| {
            filter.name.is_none() && *offset == 5 && *limit == 5
        })
        .returning(|_, _, _| Ok((vec![test_user(6), test_user(7)], 7)));

    let service = UserDirectory::new(Arc::new(repo));
    let params = PaginationParams::new(2, 5);
    let (users, total) = service
        .list_users(&params, &UserFilter::default())
        .await
        .unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(total, 7);
}

#[tokio::test]
async fn test_list_users_passes_filter_through() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_and_count()
        .withf(|filter, _, _| filter.username.as_deref() == Some("Bret"))
        .returning(|_, _, _| Ok((vec![test_user(1)], 1)));

    let service = UserDirectory::new(Arc::new(repo));
    let filter = UserFilter {
        username: Some("Bret".to_string()),
        ..Default::default()
    };
    let (users, total) = service
        .list_users(&PaginationParams::new(1, 10), &filter)
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(total, 1);
}

#[tokio::test]
async fn test_update_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_update().returning(|_, _| Ok(None));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.update_user(999, Default::default()).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn test_delete_user_success() {
    let mut repo = MockUserRepository::new();
    repo.expect_remove().with(eq(4)).returning(|_| Ok(true));

    let service = UserDirectory::new(Arc::new(repo));
    assert!(service.delete_user(4).await.is_ok());
}

#[tokio::test]
async fn test_delete_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_remove().returning(|_| Ok(false));

    let service = UserDirectory::new(Arc::new(repo));
    let result = service.delete_user(999).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}
