//! User repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{users, wallets};

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id).one(&self.db).await
    }

    /// Checks if an email is already registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .count(&self.db)
            .await?;

        Ok(count > 0)
    }

    /// Creates a user together with their zero-balance wallet.
    ///
    /// Both rows are inserted in one transaction: a user row without a
    /// wallet row must never be observable.
    ///
    /// # Errors
    ///
    /// Returns an error if either insert fails (the transaction rolls back).
    pub async fn create_with_wallet(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<users::Model, DbErr> {
        let now = Utc::now().into();
        let user_id = Uuid::new_v4();

        let txn = self.db.begin().await?;

        let user = users::ActiveModel {
            id: Set(user_id),
            email: Set(email.to_string()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        wallets::ActiveModel {
            user_id: Set(user_id),
            token_balance: Set(0),
            fiat_balance: Set(rust_decimal::Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(user)
    }
}
