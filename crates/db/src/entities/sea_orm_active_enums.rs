//! Database enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Kind of a token ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ledger_entry_type")]
pub enum LedgerEntryType {
    /// Tokens created when a sale completed; positive amount.
    #[sea_orm(string_value = "CREDIT_SALE")]
    CreditSale,
    /// Tokens burned on redemption; negative amount.
    #[sea_orm(string_value = "DEBIT_REDEMPTION")]
    DebitRedemption,
}
