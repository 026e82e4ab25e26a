//! User data repository for database operations.
//!
//! Handles account creation, lookups by id and username, role queries used by the load
//! balancer, and admin maintenance.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::user::{NewUser, UpdateUserParams, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username/email
    pub async fn create(&self, user: NewUser) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            email: ActiveValue::Set(user.email),
            name: ActiveValue::Set(user.name),
            phone_number: ActiveValue::Set(user.phone_number),
            password_hash: ActiveValue::Set(user.password_hash),
            is_admin: ActiveValue::Set(user.roles.admin),
            is_waiter: ActiveValue::Set(user.roles.waiter),
            is_kitchen: ActiveValue::Set(user.roles.kitchen),
            is_active: ActiveValue::Set(user.is_active),
            date_created: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by username together with their stored password hash.
    ///
    /// Only the credential check should call this.
    pub async fn find_credentials(&self, username: &str) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    /// Checks whether `username` is taken by an account other than `excluding`.
    pub async fn username_exists(&self, username: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));
        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether `email` is taken by an account other than `excluding`.
    pub async fn email_exists(&self, email: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin account exists.
    ///
    /// Used at startup to decide whether to bootstrap the first admin.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Ids of every active waiter account, in id order.
    pub async fn get_active_waiter_ids(&self) -> Result<Vec<i32>, DbErr> {
        entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .filter(entity::user::Column::IsWaiter.eq(true))
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// All accounts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Arguments
    /// - `params` - Fields to change; the plaintext password is ignored here
    /// - `password_hash` - New hash when the password changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(existing) = entity::prelude::User::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(phone_number) = params.phone_number {
            active.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }
        if let Some(is_admin) = params.is_admin {
            active.is_admin = ActiveValue::Set(is_admin);
        }
        if let Some(is_waiter) = params.is_waiter {
            active.is_waiter = ActiveValue::Set(is_waiter);
        }
        if let Some(is_kitchen) = params.is_kitchen {
            active.is_kitchen = ActiveValue::Set(is_kitchen);
        }
        if let Some(is_active) = params.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }

    /// Deletes an account. Bills and reservations referencing it keep a null reference.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
