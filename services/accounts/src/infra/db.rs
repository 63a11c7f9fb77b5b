use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use aegis_accounts_schema::{user_profiles, users};

use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::types::{User, UserProfile};
use crate::error::AccountsServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, AccountsServiceError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await
            .context("find user by username")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AccountsServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &UserProfile,
    ) -> Result<(), AccountsServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.clone();
                Box::pin(async move {
                    insert_user(txn, &user).await?;
                    insert_profile(txn, &profile).await?;
                    Ok(())
                })
            })
            .await
            .context("create user with profile")?;
        Ok(())
    }

    async fn update_identity(
        &self,
        id: Uuid,
        username: &str,
        email: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<(), AccountsServiceError> {
        users::ActiveModel {
            id: Set(id),
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            updated_at: Set(updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user identity")?;
        Ok(())
    }

    async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), AccountsServiceError> {
        users::ActiveModel {
            id: Set(id),
            password_hash: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }
}

async fn insert_user(txn: &DatabaseTransaction, user: &User) -> Result<(), sea_orm::DbErr> {
    users::ActiveModel {
        id: Set(user.id),
        username: Set(user.username.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        is_admin: Set(user.is_admin),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_profile(
    txn: &DatabaseTransaction,
    profile: &UserProfile,
) -> Result<(), sea_orm::DbErr> {
    user_profiles::ActiveModel {
        id: Set(profile.id),
        user_id: Set(profile.user_id),
        full_name: Set(profile.full_name.clone()),
        bio: Set(profile.bio.clone()),
        created_at: Set(profile.created_at),
        updated_at: Set(profile.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        is_admin: model.is_admin,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserProfile>, AccountsServiceError> {
        let model = user_profiles::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find profile by id")?;
        Ok(model.map(profile_from_model))
    }

    async fn update(
        &self,
        id: Uuid,
        full_name: &str,
        bio: Option<&str>,
        updated_at: DateTime<Utc>,
    ) -> Result<(), AccountsServiceError> {
        user_profiles::ActiveModel {
            id: Set(id),
            full_name: Set(full_name.to_owned()),
            bio: Set(bio.map(str::to_owned)),
            updated_at: Set(updated_at),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update profile")?;
        Ok(())
    }
}

fn profile_from_model(model: user_profiles::Model) -> UserProfile {
    UserProfile {
        id: model.id,
        user_id: model.user_id,
        full_name: model.full_name,
        bio: model.bio,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
