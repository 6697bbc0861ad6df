//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the
//! application. All balance mutations go through `WalletRepository`.

pub mod user;
pub mod wallet;

pub use user::UserRepository;
pub use wallet::{LedgerMutation, WalletError, WalletRepository};
