//! `SeaORM` entity definitions.

pub mod sea_orm_active_enums;
pub mod token_ledger;
pub mod users;
pub mod wallets;
