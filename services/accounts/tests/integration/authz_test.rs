use uuid::Uuid;

use aegis_accounts::authz::{self, Access, SessionToken};
use aegis_accounts::domain::types::Session;
use aegis_accounts::error::AccountsServiceError;

use crate::helpers::MemorySessionStore;

fn session(user_id: Uuid, is_admin: bool) -> Session {
    Session { user_id, is_admin }
}

#[tokio::test]
async fn should_resolve_caller_from_live_session() {
    let sessions = MemorySessionStore::new();
    let user_id = Uuid::now_v7();
    sessions.insert("tok", session(user_id, true));

    let caller = authz::authenticate(&sessions, &SessionToken("tok".to_owned()))
        .await
        .unwrap();

    assert_eq!(caller.user_id, user_id);
    assert!(caller.is_admin);
}

#[tokio::test]
async fn should_reject_unknown_token() {
    let sessions = MemorySessionStore::new();

    let result = authz::authenticate(&sessions, &SessionToken("gone".to_owned())).await;

    assert!(matches!(result, Err(AccountsServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_reject_token_after_logout() {
    use aegis_accounts::usecase::auth::LogoutUseCase;

    let sessions = MemorySessionStore::new();
    sessions.insert("tok", session(Uuid::now_v7(), false));

    let logout = LogoutUseCase {
        sessions: sessions.clone(),
    };
    logout.execute("tok").await.unwrap();

    let result = authz::authenticate(&sessions, &SessionToken("tok".to_owned())).await;
    assert!(matches!(result, Err(AccountsServiceError::Unauthorized)));
}

#[tokio::test]
async fn should_gate_writes_by_ownership_and_reads_by_nothing() {
    let sessions = MemorySessionStore::new();
    let owner_id = Uuid::now_v7();
    sessions.insert("owner", session(owner_id, false));
    sessions.insert("other", session(Uuid::now_v7(), false));

    let owner = authz::authenticate(&sessions, &SessionToken("owner".to_owned()))
        .await
        .unwrap();
    let other = authz::authenticate(&sessions, &SessionToken("other".to_owned()))
        .await
        .unwrap();

    assert!(authz::require_owner_or_read_only(&owner, owner_id, Access::Write).is_ok());
    assert!(authz::require_owner_or_read_only(&other, owner_id, Access::Read).is_ok());
    assert!(matches!(
        authz::require_owner_or_read_only(&other, owner_id, Access::Write),
        Err(AccountsServiceError::Forbidden)
    ));
}

#[tokio::test]
async fn should_keep_admin_flag_out_of_ownership_checks() {
    let admin = authz::Caller {
        user_id: Uuid::now_v7(),
        is_admin: true,
    };
    let owner_id = Uuid::now_v7();

    // Admin status grants the admin-only surface, not other users' writes.
    assert!(authz::require_admin(&admin).is_ok());
    assert!(matches!(
        authz::require_owner_or_read_only(&admin, owner_id, Access::Write),
        Err(AccountsServiceError::Forbidden)
    ));
}
