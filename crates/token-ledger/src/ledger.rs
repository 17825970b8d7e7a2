use alloc::{collections::BTreeMap, vec::Vec};
use core::fmt::Debug;

use codec::{Decode, Encode};
use scale_info::TypeInfo;

use crate::{rules, Balance, EventRecord, LedgerEvent, LedgerResult, LOG_TARGET};

/// Construction parameters for a [`TokenLedger`].
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LedgerConfig<AccountId> {
    /// Deployer; becomes the first owner.
    pub owner: AccountId,
    /// Upper bound on the total minted supply. Fixed for the ledger's life.
    pub max_supply: Balance,
}

/// In-memory token sale ledger.
///
/// Owns all of its state, so independent ledgers can live side by side.
/// Mutators take the caller identity explicitly and check it against the
/// guards before touching anything.
#[derive(Debug, Clone)]
pub struct TokenLedger<AccountId> {
    owner: AccountId,
    balances: BTreeMap<AccountId, Balance>,
    total_supply: Balance,
    max_supply: Balance,
    events: Vec<EventRecord<AccountId>>,
    // Start of the records appended by the latest successful call.
    last_call_start: usize,
}

impl<AccountId: Clone + Ord + Debug> TokenLedger<AccountId> {
    /// Deploys a ledger owned by `deployer` with nothing minted.
    pub fn new(deployer: AccountId, max_supply: Balance) -> Self {
        Self {
            owner: deployer,
            balances: BTreeMap::new(),
            total_supply: 0,
            max_supply,
            events: Vec::new(),
            last_call_start: 0,
        }
    }

    pub fn from_config(config: LedgerConfig<AccountId>) -> Self {
        Self::new(config.owner, config.max_supply)
    }

    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    /// Balance held by `account`; zero when it never held tokens.
    pub fn balance_of(&self, account: &AccountId) -> Balance {
        self.balances.get(account).copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> Balance {
        self.total_supply
    }

    pub fn max_supply(&self) -> Balance {
        self.max_supply
    }

    /// Whether the whole supply has been minted.
    pub fn max_tokens(&self) -> bool {
        self.total_supply >= self.max_supply
    }

    pub fn remaining_supply(&self) -> Balance {
        self.max_supply.saturating_sub(self.total_supply)
    }

    /// Every record emitted so far, oldest first.
    pub fn events(&self) -> &[EventRecord<AccountId>] {
        &self.events
    }

    /// Records emitted by the most recent successful call.
    pub fn last_call_events(&self) -> &[EventRecord<AccountId>] {
        &self.events[self.last_call_start..]
    }

    /// Hands ownership to `new_owner`. Reassigning to the current owner is
    /// accepted and still logged.
    pub fn transfer_owner(
        &mut self,
        caller: &AccountId,
        new_owner: AccountId,
    ) -> LedgerResult<EventRecord<AccountId>> {
        rules::ensure_owner(caller, Some(&self.owner)).inspect_err(|err| {
            log::debug!(target: LOG_TARGET, "transfer_owner by {caller:?} rejected: {err}");
        })?;

        let previous_owner = core::mem::replace(&mut self.owner, new_owner.clone());
        log::debug!(target: LOG_TARGET, "ownership {previous_owner:?} -> {new_owner:?}");
        Ok(self.emit(LedgerEvent::OwnershipTransferred { previous_owner, new_owner }))
    }

    /// Mints `amount` to the owner's own balance.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        amount: Balance,
    ) -> LedgerResult<EventRecord<AccountId>> {
        let new_total = rules::ensure_owner(caller, Some(&self.owner))
            .and_then(|()| rules::checked_mint(self.total_supply, amount, self.max_supply))
            .inspect_err(|err| {
                log::debug!(target: LOG_TARGET, "mint of {amount} by {caller:?} rejected: {err}");
            })?;
        // Balances sum to the old total, so this cannot overflow.
        let new_balance = self.balance_of(caller) + amount;

        self.total_supply = new_total;
        self.balances.insert(caller.clone(), new_balance);
        log::debug!(target: LOG_TARGET, "minted {amount} to {caller:?}, supply {new_total}");
        Ok(self.emit(LedgerEvent::Minting { recipient: caller.clone(), amount }))
    }

    /// Moves `amount` from the caller to `buyer`.
    ///
    /// Self-sales are rejected first, then non-owner sellers, then
    /// underfunded ones. Total supply is unaffected.
    pub fn sell_tokens(
        &mut self,
        caller: &AccountId,
        buyer: AccountId,
        amount: Balance,
    ) -> LedgerResult<EventRecord<AccountId>> {
        let (seller_after, buyer_after) = rules::ensure_distinct(caller, &buyer)
            .and_then(|()| rules::ensure_owner(caller, Some(&self.owner)))
            .and_then(|()| {
                rules::checked_move(self.balance_of(caller), self.balance_of(&buyer), amount)
            })
            .inspect_err(|err| {
                log::debug!(
                    target: LOG_TARGET,
                    "sale of {amount} from {caller:?} to {buyer:?} rejected: {err}"
                );
            })?;

        self.balances.insert(caller.clone(), seller_after);
        self.balances.insert(buyer.clone(), buyer_after);
        log::debug!(target: LOG_TARGET, "sold {amount} from {caller:?} to {buyer:?}");
        Ok(self.emit(LedgerEvent::SellTokens { seller: caller.clone(), buyer, amount }))
    }

    fn emit(&mut self, event: LedgerEvent<AccountId>) -> EventRecord<AccountId> {
        let record = EventRecord { index: self.events.len() as u64, event };
        self.last_call_start = self.events.len();
        self.events.push(record.clone());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LedgerError;

    const OWNER: u64 = 1;
    const BUYER: u64 = 2;
    const OTHER: u64 = 3;

    fn ledger() -> TokenLedger<u64> {
        TokenLedger::new(OWNER, 3_000)
    }

    #[test]
    fn deployment_state() {
        let ledger = ledger();
        assert_eq!(ledger.owner(), &OWNER);
        assert_eq!(ledger.balance_of(&OWNER), 0);
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.max_supply(), 3_000);
        assert!(!ledger.max_tokens());
        assert!(ledger.events().is_empty());
        assert!(ledger.last_call_events().is_empty());
    }

    #[test]
    fn from_config_uses_owner_and_cap() {
        let ledger = TokenLedger::from_config(LedgerConfig { owner: BUYER, max_supply: 10 });
        assert_eq!(ledger.owner(), &BUYER);
        assert_eq!(ledger.remaining_supply(), 10);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_uses_camel_case_json() {
        let config = LedgerConfig { owner: OWNER, max_supply: 3_000 };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json, serde_json::json!({ "owner": 1, "maxSupply": 3_000 }));

        let parsed: LedgerConfig<u64> =
            serde_json::from_str(r#"{"owner":2,"maxSupply":10}"#).unwrap();
        assert_eq!(parsed, LedgerConfig { owner: BUYER, max_supply: 10 });
    }

    #[test]
    fn owner_can_transfer_ownership() {
        let mut ledger = ledger();
        let record = ledger.transfer_owner(&OWNER, BUYER).unwrap();

        assert_eq!(ledger.owner(), &BUYER);
        assert_eq!(
            record.event,
            LedgerEvent::OwnershipTransferred { previous_owner: OWNER, new_owner: BUYER }
        );
        assert_eq!(ledger.last_call_events(), &[record]);
    }

    #[test]
    fn non_owner_cannot_transfer_ownership() {
        let mut ledger = ledger();
        assert_eq!(ledger.transfer_owner(&BUYER, BUYER), Err(LedgerError::Unauthorized));
        assert_eq!(ledger.owner(), &OWNER);
        assert!(ledger.events().is_empty());
    }

    #[test]
    fn ownership_can_be_reassigned_to_self() {
        let mut ledger = ledger();
        let record = ledger.transfer_owner(&OWNER, OWNER).unwrap();
        assert_eq!(ledger.owner(), &OWNER);
        assert_eq!(
            record.event,
            LedgerEvent::OwnershipTransferred { previous_owner: OWNER, new_owner: OWNER }
        );
    }

    #[test]
    fn previous_owner_loses_privileges() {
        let mut ledger = ledger();
        ledger.transfer_owner(&OWNER, BUYER).unwrap();

        assert_eq!(ledger.mint(&OWNER, 1), Err(LedgerError::Unauthorized));
        assert_eq!(ledger.transfer_owner(&OWNER, OWNER), Err(LedgerError::Unauthorized));
        assert!(ledger.mint(&BUYER, 1).is_ok());
        assert_eq!(ledger.balance_of(&BUYER), 1);
    }

    #[test]
    fn mint_credits_owner_and_supply() {
        let mut ledger = ledger();
        let record = ledger.mint(&OWNER, 150).unwrap();

        assert_eq!(ledger.balance_of(&OWNER), 150);
        assert_eq!(ledger.total_supply(), 150);
        assert_eq!(record.index, 0);
        assert_eq!(record.event, LedgerEvent::Minting { recipient: OWNER, amount: 150 });
    }

    #[test]
    fn non_owner_cannot_mint() {
        let mut ledger = ledger();
        assert_eq!(ledger.mint(&OTHER, 200), Err(LedgerError::Unauthorized));
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(ledger.balance_of(&OTHER), 0);
    }

    #[test]
    fn minting_stops_at_max_supply() {
        let mut ledger = ledger();
        ledger.mint(&OWNER, 3_000).unwrap();

        assert_eq!(ledger.total_supply(), 3_000);
        assert_eq!(ledger.balance_of(&OWNER), 3_000);
        assert!(ledger.max_tokens());
        assert_eq!(ledger.remaining_supply(), 0);

        assert_eq!(ledger.mint(&OWNER, 1), Err(LedgerError::SupplyCapExceeded));
        assert_eq!(ledger.total_supply(), 3_000);
        assert_eq!(ledger.events().len(), 1);
    }

    #[test]
    fn zero_mint_is_accepted_and_logged() {
        let mut ledger = ledger();
        let record = ledger.mint(&OWNER, 0).unwrap();
        assert_eq!(ledger.total_supply(), 0);
        assert_eq!(record.event, LedgerEvent::Minting { recipient: OWNER, amount: 0 });
    }

    #[test]
    fn sale_moves_tokens_and_keeps_supply() {
        let mut ledger = ledger();
        ledger.mint(&OWNER, 500).unwrap();
        let record = ledger.sell_tokens(&OWNER, BUYER, 210).unwrap();

        assert_eq!(ledger.balance_of(&OWNER), 290);
        assert_eq!(ledger.balance_of(&BUYER), 210);
        assert_eq!(ledger.total_supply(), 500);
        assert_eq!(record.index, 1);
        assert_eq!(
            record.event,
            LedgerEvent::SellTokens { seller: OWNER, buyer: BUYER, amount: 210 }
        );
    }

    #[test]
    fn sale_to_self_is_rejected() {
        let mut ledger = ledger();
        assert_eq!(ledger.sell_tokens(&OWNER, OWNER, 10), Err(LedgerError::SelfTransferRejected));

        ledger.mint(&OWNER, 100).unwrap();
        assert_eq!(ledger.sell_tokens(&OWNER, OWNER, 10), Err(LedgerError::SelfTransferRejected));
        // Takes precedence over the owner check too.
        assert_eq!(ledger.sell_tokens(&OTHER, OTHER, 10), Err(LedgerError::SelfTransferRejected));
        assert_eq!(ledger.balance_of(&OWNER), 100);
    }

    #[test]
    fn sale_without_funds_is_rejected() {
        let mut ledger = ledger();
        assert_eq!(ledger.sell_tokens(&OWNER, BUYER, 10), Err(LedgerError::InsufficientBalance));

        ledger.mint(&OWNER, 5).unwrap();
        assert_eq!(ledger.sell_tokens(&OWNER, BUYER, 6), Err(LedgerError::InsufficientBalance));
        assert_eq!(ledger.balance_of(&OWNER), 5);
        assert_eq!(ledger.balance_of(&BUYER), 0);
    }

    #[test]
    fn non_owner_cannot_sell() {
        let mut ledger = ledger();
        ledger.mint(&OWNER, 100).unwrap();
        ledger.sell_tokens(&OWNER, BUYER, 40).unwrap();

        assert_eq!(ledger.sell_tokens(&BUYER, OTHER, 10), Err(LedgerError::Unauthorized));
        assert_eq!(ledger.balance_of(&BUYER), 40);
        assert_eq!(ledger.balance_of(&OTHER), 0);
    }

    #[test]
    fn failed_call_keeps_last_call_events() {
        let mut ledger = ledger();
        let minted = ledger.mint(&OWNER, 10).unwrap();
        assert!(ledger.mint(&OWNER, 5_000).is_err());

        assert_eq!(ledger.last_call_events(), &[minted]);
    }

    #[test]
    fn event_indices_follow_log_order() {
        let mut ledger = ledger();
        ledger.mint(&OWNER, 100).unwrap();
        ledger.sell_tokens(&OWNER, BUYER, 10).unwrap();
        ledger.transfer_owner(&OWNER, BUYER).unwrap();

        let indices: Vec<u64> = ledger.events().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(ledger.last_call_events().len(), 1);
        assert_eq!(ledger.last_call_events()[0].index, 2);
    }

    #[test]
    fn ledgers_are_independent() {
        let mut first = ledger();
        let second = ledger();
        first.mint(&OWNER, 100).unwrap();

        assert_eq!(first.total_supply(), 100);
        assert_eq!(second.total_supply(), 0);
    }
}
