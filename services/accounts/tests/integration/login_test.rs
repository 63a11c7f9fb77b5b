use aegis_accounts::error::AccountsServiceError;
use aegis_accounts::usecase::auth::{LoginInput, LoginUseCase, LogoutUseCase};

use crate::helpers::{MemorySessionStore, MockUserRepo, test_user};

fn login_input(username: &str, password: &str) -> LoginInput {
    LoginInput {
        username: username.to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn should_create_session_on_valid_credentials() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let sessions = MemorySessionStore::new();
    let usecase = LoginUseCase {
        users,
        sessions: sessions.clone(),
    };

    let output = usecase
        .execute(login_input("alice", "hunter2secret"))
        .await
        .unwrap();

    assert_eq!(output.username, "alice");
    assert_eq!(output.token.len(), 32);
    assert_eq!(sessions.session_count(), 1);

    let stored = sessions.sessions.lock().unwrap().get(&output.token).cloned();
    let session = stored.unwrap();
    assert!(!session.is_admin);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let sessions = MemorySessionStore::new();
    let usecase = LoginUseCase {
        users,
        sessions: sessions.clone(),
    };

    let result = usecase.execute(login_input("alice", "wrong-password")).await;

    assert!(matches!(
        result,
        Err(AccountsServiceError::InvalidCredentials)
    ));
    assert_eq!(sessions.session_count(), 0);
}

#[tokio::test]
async fn should_reject_unknown_username_with_same_error_as_wrong_password() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let sessions = MemorySessionStore::new();
    let usecase = LoginUseCase { users, sessions };

    let unknown = usecase.execute(login_input("mallory", "hunter2secret")).await;
    let wrong = usecase.execute(login_input("alice", "wrong-password")).await;

    // Account enumeration through error shape is off the table.
    assert!(matches!(
        unknown,
        Err(AccountsServiceError::InvalidCredentials)
    ));
    assert!(matches!(wrong, Err(AccountsServiceError::InvalidCredentials)));
}

#[tokio::test]
async fn should_issue_distinct_tokens_per_login() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let sessions = MemorySessionStore::new();
    let usecase = LoginUseCase {
        users,
        sessions: sessions.clone(),
    };

    let first = usecase
        .execute(login_input("alice", "hunter2secret"))
        .await
        .unwrap();
    let second = usecase
        .execute(login_input("alice", "hunter2secret"))
        .await
        .unwrap();

    assert_ne!(first.token, second.token);
    assert_eq!(sessions.session_count(), 2);
}

#[tokio::test]
async fn should_remove_session_on_logout() {
    let users = MockUserRepo::new(vec![test_user("alice", "alice@example.com", "hunter2secret")]);
    let sessions = MemorySessionStore::new();
    let login = LoginUseCase {
        users,
        sessions: sessions.clone(),
    };
    let output = login
        .execute(login_input("alice", "hunter2secret"))
        .await
        .unwrap();

    let logout = LogoutUseCase {
        sessions: sessions.clone(),
    };
    logout.execute(&output.token).await.unwrap();

    assert_eq!(sessions.session_count(), 0);
}

#[tokio::test]
async fn should_tolerate_logout_of_unknown_token() {
    let sessions = MemorySessionStore::new();
    let logout = LogoutUseCase { sessions };

    logout.execute("no-such-token").await.unwrap();
}
