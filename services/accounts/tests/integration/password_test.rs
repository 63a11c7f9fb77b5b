use aegis_accounts::error::AccountsServiceError;
use aegis_accounts::password::verify_password;
use aegis_accounts::usecase::password::{ChangePasswordInput, ChangePasswordUseCase};

use crate::helpers::{MockUserRepo, test_user};

fn input(email: &str, new_password: &str, confirm: &str) -> ChangePasswordInput {
    ChangePasswordInput {
        email: email.to_owned(),
        new_password: new_password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

#[tokio::test]
async fn should_rehash_password_for_existing_account() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "old-password")]);
    let usecase = ChangePasswordUseCase {
        users: users.clone(),
    };

    usecase
        .execute(input("alice@example.com", "new-password-1", "new-password-1"))
        .await
        .unwrap();

    let stored = users.users_handle();
    let stored = stored.lock().unwrap();
    let user = &stored[0];
    assert!(verify_password("new-password-1", &user.password_hash).unwrap());
    assert!(!verify_password("old-password", &user.password_hash).unwrap());
}

#[tokio::test]
async fn should_reject_unknown_email() {
    let users = MockUserRepo::empty();
    let usecase = ChangePasswordUseCase { users };

    let result = usecase
        .execute(input("ghost@example.com", "new-password-1", "new-password-1"))
        .await;

    assert!(matches!(result, Err(AccountsServiceError::Validation(_))));
}

#[tokio::test]
async fn should_reject_short_password_before_lookup() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "old-password")]);
    let usecase = ChangePasswordUseCase {
        users: users.clone(),
    };

    let result = usecase
        .execute(input("alice@example.com", "short", "short"))
        .await;

    assert!(matches!(result, Err(AccountsServiceError::Validation(_))));
    let stored = users.users_handle();
    let stored = stored.lock().unwrap();
    assert!(verify_password("old-password", &stored[0].password_hash).unwrap());
}

#[tokio::test]
async fn should_reject_mismatched_confirmation() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "old-password")]);
    let usecase = ChangePasswordUseCase {
        users: users.clone(),
    };

    let result = usecase
        .execute(input("alice@example.com", "new-password-1", "new-password-2"))
        .await;

    assert!(matches!(result, Err(AccountsServiceError::Validation(_))));
    let stored = users.users_handle();
    let stored = stored.lock().unwrap();
    assert!(verify_password("old-password", &stored[0].password_hash).unwrap());
}
