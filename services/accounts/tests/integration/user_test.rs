use uuid::Uuid;

use aegis_accounts::error::AccountsServiceError;
use aegis_accounts::usecase::profile::{
    GetProfileUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use aegis_accounts::usecase::user::{
    GetUserUseCase, ListUsersUseCase, UpdateUserInput, UpdateUserUseCase,
};

use crate::helpers::{MockProfileRepo, MockUserRepo, test_profile, test_user};

fn update_input(username: &str, email: &str) -> UpdateUserInput {
    UpdateUserInput {
        username: username.to_owned(),
        email: email.to_owned(),
    }
}

#[tokio::test]
async fn should_list_all_users() {
    let repo = MockUserRepo::new(vec![
        test_user("alice", "alice@example.com", "hunter2secret"),
        test_user("bob", "bob@example.com", "hunter2secret"),
    ]);
    let usecase = ListUsersUseCase { repo };

    let users = usecase.execute().await.unwrap();

    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn should_get_user_by_id() {
    let user = test_user("alice", "alice@example.com", "hunter2secret");
    let id = user.id;
    let repo = MockUserRepo::new(vec![user]);
    let usecase = GetUserUseCase { repo };

    let found = usecase.execute(id).await.unwrap();

    assert_eq!(found.username, "alice");
}

#[tokio::test]
async fn should_return_not_found_for_missing_user() {
    let repo = MockUserRepo::empty();
    let usecase = GetUserUseCase { repo };

    let result = usecase.execute(Uuid::now_v7()).await;

    assert!(matches!(result, Err(AccountsServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_update_username_and_email() {
    let user = test_user("alice", "alice@example.com", "hunter2secret");
    let id = user.id;
    let repo = MockUserRepo::new(vec![user]);
    let usecase = UpdateUserUseCase { repo: repo.clone() };

    let updated = usecase
        .execute(id, update_input("alice2", "alice2@example.com"))
        .await
        .unwrap();

    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.email, "alice2@example.com");

    let stored = repo.users_handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored[0].username, "alice2");
    assert!(stored[0].updated_at >= stored[0].created_at);
}

#[tokio::test]
async fn should_allow_noop_rename_to_own_identifiers() {
    let user = test_user("alice", "alice@example.com", "hunter2secret");
    let id = user.id;
    let repo = MockUserRepo::new(vec![user]);
    let usecase = UpdateUserUseCase { repo };

    usecase
        .execute(id, update_input("alice", "alice@example.com"))
        .await
        .unwrap();
}

#[tokio::test]
async fn should_reject_update_taking_anothers_username() {
    let alice = test_user("alice", "alice@example.com", "hunter2secret");
    let bob = test_user("bob", "bob@example.com", "hunter2secret");
    let bob_id = bob.id;
    let repo = MockUserRepo::new(vec![alice, bob]);
    let usecase = UpdateUserUseCase { repo: repo.clone() };

    let result = usecase
        .execute(bob_id, update_input("alice", "bob@example.com"))
        .await;

    assert!(matches!(result, Err(AccountsServiceError::Validation(_))));
    let stored = repo.users_handle();
    let stored = stored.lock().unwrap();
    assert_eq!(stored[1].username, "bob");
}

#[tokio::test]
async fn should_reject_update_of_missing_user() {
    let repo = MockUserRepo::empty();
    let usecase = UpdateUserUseCase { repo };

    let result = usecase
        .execute(Uuid::now_v7(), update_input("ghost", "ghost@example.com"))
        .await;

    assert!(matches!(result, Err(AccountsServiceError::UserNotFound)));
}

#[tokio::test]
async fn should_get_profile_by_id() {
    let profile = test_profile(Uuid::now_v7(), "Alice Example");
    let id = profile.id;
    let repo = MockProfileRepo::new(vec![profile]);
    let usecase = GetProfileUseCase { repo };

    let found = usecase.execute(id).await.unwrap();

    assert_eq!(found.full_name, "Alice Example");
}

#[tokio::test]
async fn should_return_not_found_for_missing_profile() {
    let repo = MockProfileRepo::new(vec![]);
    let usecase = GetProfileUseCase { repo };

    let result = usecase.execute(Uuid::now_v7()).await;

    assert!(matches!(result, Err(AccountsServiceError::ProfileNotFound)));
}

#[tokio::test]
async fn should_update_profile_fields() {
    let profile = test_profile(Uuid::now_v7(), "Alice Example");
    let id = profile.id;
    let repo = MockProfileRepo::new(vec![profile]);
    let usecase = UpdateProfileUseCase { repo: repo.clone() };

    let updated = usecase
        .execute(
            id,
            UpdateProfileInput {
                full_name: "Alice B. Example".to_owned(),
                bio: Some("rustacean".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.full_name, "Alice B. Example");
    assert_eq!(updated.bio.as_deref(), Some("rustacean"));

    let stored = repo.profiles.lock().unwrap();
    assert_eq!(stored[0].full_name, "Alice B. Example");
}

#[tokio::test]
async fn should_require_full_name_on_profile_update() {
    let profile = test_profile(Uuid::now_v7(), "Alice Example");
    let id = profile.id;
    let repo = MockProfileRepo::new(vec![profile]);
    let usecase = UpdateProfileUseCase { repo: repo.clone() };

    let result = usecase
        .execute(
            id,
            UpdateProfileInput {
                full_name: "   ".to_owned(),
                bio: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AccountsServiceError::Validation(_))));
    let stored = repo.profiles.lock().unwrap();
    assert_eq!(stored[0].full_name, "Alice Example");
}
