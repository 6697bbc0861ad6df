//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for users, wallets, and the token ledger
//! - Repository abstractions carrying the transaction discipline for all
//!   balance mutations
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{UserRepository, WalletError, WalletRepository};

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
