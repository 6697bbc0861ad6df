//! Shared value types.

pub mod money;

pub use money::{format_fiat, round_cents};
