use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::Balance;

/// Something observable that a successful call did to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub enum LedgerEvent<AccountId> {
    /// New tokens credited to the owner.
    Minting { recipient: AccountId, amount: Balance },
    /// Tokens moved from seller to buyer.
    SellTokens { seller: AccountId, buyer: AccountId, amount: Balance },
    /// Ownership handed to a new account.
    OwnershipTransferred { previous_owner: AccountId, new_owner: AccountId },
}

/// An entry of the append-only event log.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
pub struct EventRecord<AccountId> {
    /// Zero-based position in the ledger's log.
    pub index: u64,
    pub event: LedgerEvent<AccountId>,
}
