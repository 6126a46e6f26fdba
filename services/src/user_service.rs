use crate::error::{ServiceError, ServiceResult};
use crate::service::{check_paging, not_blank, ApplyChanges, Page};
use chrono::Utc;
use db::{
    filters::UserFilter,
    models::{
        booking, review,
        user::{self, ActiveModel, Model, UserRole},
    },
    repositories::{user_repository::UserRepository, Repository},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set,
    SqlErr, TransactionTrait,
};
use serde::Deserialize;
use util::jwt::Claims;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginUser {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Changes a user may make to their own account.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(custom(function = "not_blank", message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
}

/// Changes an admin may make to any account.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AdminUpdateUser {
    #[validate(custom(function = "not_blank", message = "Name must not be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<UserRole>,
}

impl ApplyChanges<user::Entity> for UpdateProfile {
    fn apply_changes(self, active: &mut ActiveModel) -> ServiceResult<()> {
        if let Some(name) = self.name {
            active.name = Set(name.trim().to_owned());
        }
        if let Some(email) = self.email {
            active.email = Set(email.trim().to_lowercase());
        }
        if let Some(password) = self.password {
            active.password_hash = Set(Model::hash_password(&password)?);
        }
        Ok(())
    }
}

impl ApplyChanges<user::Entity> for AdminUpdateUser {
    fn apply_changes(self, active: &mut ActiveModel) -> ServiceResult<()> {
        if let Some(name) = self.name {
            active.name = Set(name.trim().to_owned());
        }
        if let Some(email) = self.email {
            active.email = Set(email.trim().to_lowercase());
        }
        if let Some(role) = self.role {
            active.role = Set(role);
        }
        Ok(())
    }
}

/// A write that lost a race on the unique email index reports the same
/// conflict as the up-front check.
fn email_conflict(err: DbErr) -> ServiceError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ServiceError::Conflict("A user with this email already exists".into())
        }
        _ => ServiceError::Database(err),
    }
}

pub struct UserService;

impl UserService {
    pub async fn register(db: &DatabaseConnection, input: RegisterUser) -> ServiceResult<Model> {
        input.validate()?;
        if Model::find_by_email(db, &input.email).await?.is_some() {
            return Err(ServiceError::Conflict("A user with this email already exists".into()));
        }

        let user = Model::create(db, &input.name, &input.email, &input.password, UserRole::User)
            .await
            .map_err(email_conflict)?;
        tracing::info!(user_id = user.id, "registered new user");
        Ok(user)
    }

    /// Checks credentials; unknown email and wrong password are indistinguishable.
    pub async fn login(db: &DatabaseConnection, input: LoginUser) -> ServiceResult<Model> {
        input.validate()?;
        match Model::find_by_email(db, &input.email).await? {
            Some(user) if user.verify_password(&input.password) => Ok(user),
            _ => Err(ServiceError::Unauthorized("Invalid email or password".into())),
        }
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<Model> {
        user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: &UserFilter,
        page: Option<u64>,
        per_page: Option<u64>,
        sort: Option<&str>,
    ) -> ServiceResult<Page<Model>> {
        let (page, per_page) = check_paging(page, per_page)?;
        let (items, total) = UserRepository::filter(db, filter, page, per_page, sort).await?;
        Ok(Page { items, page, per_page, total })
    }

    pub async fn all(db: &DatabaseConnection) -> ServiceResult<Vec<Model>> {
        Ok(UserRepository::find_all(db, &UserFilter::new(), None).await?)
    }

    pub async fn update_profile(
        db: &DatabaseConnection,
        user_id: i64,
        input: UpdateProfile,
    ) -> ServiceResult<Model> {
        input.validate()?;
        let current = Self::get(db, user_id).await?;
        Self::ensure_email_free(db, input.email.as_deref(), current.id).await?;

        let mut active = current.into_active_model();
        input.apply_changes(&mut active)?;
        active.updated_at = Set(Utc::now());
        active.update(db).await.map_err(email_conflict)
    }

    pub async fn admin_update(
        db: &DatabaseConnection,
        id: i64,
        input: AdminUpdateUser,
    ) -> ServiceResult<Model> {
        input.validate()?;
        let current = Self::get(db, id).await?;
        Self::ensure_email_free(db, input.email.as_deref(), current.id).await?;

        let mut active = current.into_active_model();
        input.apply_changes(&mut active)?;
        active.updated_at = Set(Utc::now());
        active.update(db).await.map_err(email_conflict)
    }

    /// Deletes a user together with their bookings and reviews. Admins cannot
    /// delete their own account.
    pub async fn delete(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<()> {
        if actor.user_id() == id {
            return Err(ServiceError::Forbidden("You cannot delete your own account".into()));
        }
        let user = Self::get(db, id).await?;
        let txn = db.begin().await?;
        booking::Entity::delete_many()
            .filter(booking::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;
        review::Entity::delete_many()
            .filter(review::Column::UserId.eq(user.id))
            .exec(&txn)
            .await?;
        user::Entity::delete_by_id(user.id).exec(&txn).await?;
        txn.commit().await?;
        tracing::info!(user_id = id, by = actor.user_id(), "deleted user");
        Ok(())
    }

    async fn ensure_email_free(
        db: &DatabaseConnection,
        email: Option<&str>,
        owner_id: i64,
    ) -> ServiceResult<()> {
        let Some(email) = email else {
            return Ok(());
        };
        match Model::find_by_email(db, email).await? {
            Some(other) if other.id != owner_id => {
                Err(ServiceError::Conflict("A user with this email already exists".into()))
            }
            _ => Ok(()),
        }
    }
}
