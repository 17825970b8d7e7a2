use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Reasons a ledger call is rejected.
///
/// A rejected call never mutates state and never emits an event.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Encode,
    Decode,
    MaxEncodedLen,
    TypeInfo,
    thiserror::Error,
)]
pub enum LedgerError {
    /// Caller is not the current owner.
    #[error("caller is not the ledger owner")]
    Unauthorized,
    /// Minting would push the total supply past the cap.
    #[error("mint would exceed the maximum supply")]
    SupplyCapExceeded,
    /// Seller holds fewer tokens than requested.
    #[error("seller balance is lower than the requested amount")]
    InsufficientBalance,
    /// Seller and buyer are the same account.
    #[error("cannot sell tokens to the selling account")]
    SelfTransferRejected,
}

pub type LedgerResult<T> = core::result::Result<T, LedgerError>;
