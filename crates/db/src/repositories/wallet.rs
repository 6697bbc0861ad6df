//! Wallet repository: the ledgered balance-mutation core.
//!
//! Every mutation pairs a wallet balance adjustment with a ledger append,
//! executed inside one database transaction so that either both take effect
//! or neither does. The wallet row is locked (`SELECT ... FOR UPDATE`) at
//! the start of the transaction and held to commit, so concurrent mutations
//! of the same wallet serialize; two concurrent redemptions can never
//! jointly overdraw a balance.
//!
//! Invariant maintained by this module: for every wallet,
//! `token_balance == SUM(token_ledger.amount)` over that user's entries.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::LedgerEntryType, token_ledger, wallets};

/// Error types for wallet operations.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// No wallet row exists for the user.
    #[error("Wallet not found for user {0}")]
    WalletNotFound(Uuid),

    /// Balance cannot cover the requested debit.
    #[error("Insufficient token balance: have {available}, requested {requested}")]
    InsufficientBalance {
        /// Balance at the time of the check.
        available: i64,
        /// Tokens the caller asked to debit.
        requested: i64,
    },

    /// A mutation was requested with an amount the policy layer should have
    /// rejected.
    #[error("Invalid mutation amount: {0}")]
    InvalidAmount(i64),

    /// Balance arithmetic left the representable range.
    #[error("Balance adjustment out of range")]
    BalanceOutOfRange,

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Outcome of a committed balance mutation.
#[derive(Debug, Clone)]
pub struct LedgerMutation {
    /// Wallet balance after the mutation.
    pub new_balance: i64,
    /// The ledger entry appended by the mutation.
    pub entry: token_ledger::Model,
}

/// Wallet repository for balance reads and ledgered mutations.
#[derive(Debug, Clone)]
pub struct WalletRepository {
    db: DatabaseConnection,
}

impl WalletRepository {
    /// Creates a new wallet repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches a wallet by owner.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::WalletNotFound` if no wallet row exists.
    pub async fn get_balance(&self, user_id: Uuid) -> Result<wallets::Model, WalletError> {
        wallets::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or(WalletError::WalletNotFound(user_id))
    }

    /// Credits a seller's wallet for a completed sale.
    ///
    /// Atomically increases `token_balance` by `tokens` and appends a
    /// `CREDIT_SALE` ledger entry carrying the net fiat. A zero-token credit
    /// is accepted and still recorded in the ledger.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::WalletNotFound` if the seller has no wallet,
    /// `WalletError::InvalidAmount` for a negative token count, or a
    /// database error; in every failure case the transaction rolls back with
    /// no observable effect.
    pub async fn credit_sale(
        &self,
        seller_id: Uuid,
        tokens: i64,
        net_fiat: Decimal,
    ) -> Result<LedgerMutation, WalletError> {
        if tokens < 0 {
            return Err(WalletError::InvalidAmount(tokens));
        }

        let txn = self.db.begin().await?;

        let new_balance = match Self::adjust_balance(&txn, seller_id, tokens).await {
            Ok(balance) => balance,
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        };

        let entry = Self::append_entry(
            &txn,
            seller_id,
            LedgerEntryType::CreditSale,
            tokens,
            net_fiat,
        )
        .await?;

        txn.commit().await?;

        tracing::debug!(user_id = %seller_id, tokens, new_balance, "sale credit committed");

        Ok(LedgerMutation { new_balance, entry })
    }

    /// Debits a user's wallet for a token redemption.
    ///
    /// The balance check and the debit happen under one row lock inside one
    /// transaction; a failed check rolls back with no state change. The
    /// ledger entry records the debit with negated amounts.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InsufficientBalance` when the balance cannot
    /// cover `tokens`, `WalletError::WalletNotFound` if the user has no
    /// wallet, or `WalletError::InvalidAmount` for a non-positive token
    /// count.
    pub async fn redeem(
        &self,
        user_id: Uuid,
        tokens: i64,
        fiat_value: Decimal,
    ) -> Result<LedgerMutation, WalletError> {
        if tokens <= 0 {
            return Err(WalletError::InvalidAmount(tokens));
        }

        let txn = self.db.begin().await?;

        let new_balance = match Self::adjust_balance(&txn, user_id, -tokens).await {
            Ok(balance) => balance,
            Err(e) => {
                txn.rollback().await?;
                return Err(e);
            }
        };

        let entry = Self::append_entry(
            &txn,
            user_id,
            LedgerEntryType::DebitRedemption,
            -tokens,
            -fiat_value,
        )
        .await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, tokens, new_balance, "redemption committed");

        Ok(LedgerMutation { new_balance, entry })
    }

    /// Adjusts a wallet balance by `delta` within an open transaction.
    ///
    /// Locks the wallet row for the remainder of the transaction, so
    /// concurrent adjustments to the same wallet execute serially. Rejects
    /// adjustments that would take the balance negative before touching the
    /// row.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::WalletNotFound`,
    /// `WalletError::InsufficientBalance`, or
    /// `WalletError::BalanceOutOfRange`.
    pub async fn adjust_balance(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        delta: i64,
    ) -> Result<i64, WalletError> {
        let wallet = wallets::Entity::find_by_id(user_id)
            .lock_exclusive()
            .one(txn)
            .await?
            .ok_or(WalletError::WalletNotFound(user_id))?;

        let available = wallet.token_balance;
        let new_balance = available
            .checked_add(delta)
            .ok_or(WalletError::BalanceOutOfRange)?;

        if new_balance < 0 {
            return Err(WalletError::InsufficientBalance {
                available,
                requested: -delta,
            });
        }

        let mut active: wallets::ActiveModel = wallet.into();
        active.token_balance = Set(new_balance);
        active.updated_at = Set(Utc::now().into());
        active.update(txn).await?;

        Ok(new_balance)
    }

    /// Appends an immutable ledger entry within an open transaction.
    ///
    /// # Errors
    ///
    /// Returns a database error if the insert fails.
    pub async fn append_entry(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        entry_type: LedgerEntryType,
        amount: i64,
        source_fiat: Decimal,
    ) -> Result<token_ledger::Model, WalletError> {
        let entry = token_ledger::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id),
            entry_type: Set(entry_type),
            amount: Set(amount),
            source_fiat: Set(source_fiat),
            created_at: Set(Utc::now().into()),
        }
        .insert(txn)
        .await?;

        Ok(entry)
    }

    /// Sums the ledger entry amounts for a user.
    ///
    /// For a consistent wallet this equals `token_balance`; the audit tests
    /// assert exactly that.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn ledger_sum(&self, user_id: Uuid) -> Result<i64, WalletError> {
        let entries = token_ledger::Entity::find()
            .filter(token_ledger::Column::UserId.eq(user_id))
            .all(&self.db)
            .await?;

        Ok(entries.iter().map(|e| e.amount).sum())
    }

    /// Counts the ledger entries for a user.
    ///
    /// # Errors
    ///
    /// Returns a database error if the query fails.
    pub async fn ledger_count(&self, user_id: Uuid) -> Result<u64, WalletError> {
        let count = token_ledger::Entity::find()
            .filter(token_ledger::Column::UserId.eq(user_id))
            .count(&self.db)
            .await?;

        Ok(count)
    }
}
