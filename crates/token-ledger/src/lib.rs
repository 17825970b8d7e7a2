#![cfg_attr(not(feature = "std"), no_std)]

//! Token sale ledger.
//!
//! Tracks one owner, per-account balances and a total supply bounded by a
//! fixed maximum. Three mutating operations exist (`transfer_owner`, `mint`,
//! `sell_tokens`); each either applies completely and appends one event to
//! the log, or fails with a [`LedgerError`] and leaves everything untouched.
//!
//! The guard checks live in [`rules`] so that other hosts (the FRAME pallet)
//! apply exactly the same semantics against their own storage.

extern crate alloc;

mod error;
mod event;
mod ledger;
pub mod rules;

pub use error::{LedgerError, LedgerResult};
pub use event::{EventRecord, LedgerEvent};
pub use ledger::{LedgerConfig, TokenLedger};

/// Token amounts. Balances and supply counters are never negative.
pub type Balance = u128;

/// Log target shared by everything in this crate.
pub(crate) const LOG_TARGET: &str = "token-ledger";
