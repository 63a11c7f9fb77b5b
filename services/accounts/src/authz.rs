//! Per-request capability checks and session resolution.
//!
//! Capability checks are plain functions invoked at the top of each handler,
//! before the use case runs. A failed check short-circuits without touching
//! the user store.

use axum::extract::FromRequestParts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use http::request::Parts;
use uuid::Uuid;

use crate::domain::repository::SessionStore;
use crate::domain::types::SESSION_TTL_SECS;
use crate::error::AccountsServiceError;

/// Session cookie name.
pub const SESSION_COOKIE: &str = "aegis_session";

/// Opaque session token taken from the `aegis_session` cookie or an
/// `Authorization: Bearer` header. Rejects with 401 when neither is present;
/// whether the token maps to a live session is checked by [`authenticate`].
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AccountsServiceError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract values synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(parts).or_else(|| cookie_token(parts));
        async move { token.map(Self).ok_or(AccountsServiceError::Unauthorized) }
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_owned)
}

fn cookie_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get_all(http::header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| Cookie::parse(pair.trim().to_owned()).ok())
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

/// Verified caller identity resolved from the session store.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub user_id: Uuid,
    pub is_admin: bool,
}

/// Resolve the caller from a session token. An unknown or expired token is
/// indistinguishable (the entry is simply gone) and yields `Unauthorized`.
pub async fn authenticate<S: SessionStore>(
    sessions: &S,
    token: &SessionToken,
) -> Result<Caller, AccountsServiceError> {
    let session = sessions
        .find(&token.0)
        .await?
        .ok_or(AccountsServiceError::Unauthorized)?;
    Ok(Caller {
        user_id: session.user_id,
        is_admin: session.is_admin,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// Admin-only capability.
pub fn require_admin(caller: &Caller) -> Result<(), AccountsServiceError> {
    if caller.is_admin {
        Ok(())
    } else {
        Err(AccountsServiceError::Forbidden)
    }
}

/// Owner-or-read-only capability: reads for any authenticated caller, writes
/// only for the resource owner.
pub fn require_owner_or_read_only(
    caller: &Caller,
    owner_id: Uuid,
    access: Access,
) -> Result<(), AccountsServiceError> {
    match access {
        Access::Read => Ok(()),
        Access::Write if caller.user_id == owner_id => Ok(()),
        Access::Write => Err(AccountsServiceError::Forbidden),
    }
}

/// Set the session cookie on the jar.
pub fn set_session_cookie(jar: CookieJar, token: String, domain: String) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .domain(domain)
        .max_age(time::Duration::seconds(SESSION_TTL_SECS as i64))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0.
pub fn clear_session_cookie(jar: CookieJar, domain: String) -> CookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .domain(domain)
        .max_age(time::Duration::seconds(0))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
