use deadpool_redis::Pool as RedisPool;
use sea_orm::DatabaseConnection;

use crate::delivery::DeliveryQueue;
use crate::infra::cache::{RedisOtpCache, RedisSessionStore};
use crate::infra::db::{DbProfileRepository, DbUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: RedisPool,
    pub delivery: DeliveryQueue,
    pub cookie_domain: String,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_cache(&self) -> RedisOtpCache {
        RedisOtpCache {
            pool: self.redis.clone(),
        }
    }

    pub fn session_store(&self) -> RedisSessionStore {
        RedisSessionStore {
            pool: self.redis.clone(),
        }
    }
}
