//! Guard rules shared by every host of the ledger.
//!
//! Each function validates one operation against the current values and
//! returns the values to write back. Nothing here touches storage, so callers
//! can run every check before the first write and keep calls all-or-nothing.

use crate::{Balance, LedgerError, LedgerResult};

/// Only the current owner may pass. A ledger without an owner rejects
/// everyone.
pub fn ensure_owner<AccountId: PartialEq>(
    caller: &AccountId,
    owner: Option<&AccountId>,
) -> LedgerResult<()> {
    match owner {
        Some(owner) if owner == caller => Ok(()),
        _ => Err(LedgerError::Unauthorized),
    }
}

/// Seller and buyer must differ.
pub fn ensure_distinct<AccountId: PartialEq>(
    seller: &AccountId,
    buyer: &AccountId,
) -> LedgerResult<()> {
    if seller == buyer {
        return Err(LedgerError::SelfTransferRejected);
    }
    Ok(())
}

/// Total supply after minting `amount`.
///
/// Overflow of the counter is reported as a cap violation: no cap can be
/// honoured past `u128::MAX`.
pub fn checked_mint(
    total_supply: Balance,
    amount: Balance,
    max_supply: Balance,
) -> LedgerResult<Balance> {
    total_supply
        .checked_add(amount)
        .filter(|new_total| *new_total <= max_supply)
        .ok_or(LedgerError::SupplyCapExceeded)
}

/// Seller and buyer balances after a sale of `amount`.
///
/// Selling to oneself is rejected before the balance is even looked at.
pub fn checked_sell<AccountId: PartialEq>(
    seller: &AccountId,
    buyer: &AccountId,
    seller_balance: Balance,
    buyer_balance: Balance,
    amount: Balance,
) -> LedgerResult<(Balance, Balance)> {
    ensure_distinct(seller, buyer)?;
    checked_move(seller_balance, buyer_balance, amount)
}

/// Seller and buyer balances after moving `amount`, without the
/// distinctness check. Callers that order their guards themselves run
/// [`ensure_distinct`] first.
pub fn checked_move(
    seller_balance: Balance,
    buyer_balance: Balance,
    amount: Balance,
) -> LedgerResult<(Balance, Balance)> {
    let seller_after =
        seller_balance.checked_sub(amount).ok_or(LedgerError::InsufficientBalance)?;
    // Unreachable while balances sum to a capped supply.
    let buyer_after = buyer_balance.checked_add(amount).ok_or(LedgerError::SupplyCapExceeded)?;
    Ok((seller_after, buyer_after))
}
