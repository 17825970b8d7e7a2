#![cfg_attr(not(feature = "std"), no_std)]
// Allow the deprecated getter and RuntimeEvent declarations used by this pallet
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! Token sale pallet.
//!
//! One owner may mint tokens to itself up to `MaxSupply`, hand ownership to
//! another account, and sell tokens to buyers. Guard semantics are those of
//! [`token_ledger::rules`]; this pallet only binds them to FRAME storage,
//! signed origins and events.

use frame_support::{dispatch::DispatchResult, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use token_ledger::{rules, Balance, LedgerError};

pub use pallet::*;
pub use weights::WeightInfo;

pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "token-sale";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Upper bound on the total minted supply.
        #[pallet::constant]
        type MaxSupply: Get<Balance>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Account allowed to mint, sell and hand over ownership
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Total minted supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ownership handed to a new account
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
        /// New tokens minted to the owner
        Minting { recipient: T::AccountId, amount: Balance },
        /// Tokens sold from seller to buyer
        SellTokens { seller: T::AccountId, buyer: T::AccountId, amount: Balance },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner
        Unauthorized,
        /// Mint would exceed `MaxSupply`
        SupplyCapExceeded,
        /// Seller holds fewer tokens than requested
        InsufficientBalance,
        /// Seller and buyer are the same account
        SelfTransferRejected,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxSupply::get() > 0, "MaxSupply of zero makes minting impossible");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer_owner())]
        pub fn transfer_owner(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_owner(&caller)?;

            Owner::<T>::put(&new_owner);
            log::debug!(target: LOG_TARGET, "ownership {caller:?} -> {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred { previous_owner: caller, new_owner });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, amount: Balance) -> DispatchResult {
            let caller = ensure_signed(origin)?;
            Self::ensure_owner(&caller)?;
            let new_total =
                rules::checked_mint(TotalSupply::<T>::get(), amount, T::MaxSupply::get())
                    .map_err(Error::<T>::from)?;

            TotalSupply::<T>::put(new_total);
            // Balances sum to the previous total, so this cannot overflow.
            Balances::<T>::mutate(&caller, |bal| *bal += amount);
            log::debug!(target: LOG_TARGET, "minted {amount} to {caller:?}, supply {new_total}");
            Self::deposit_event(Event::Minting { recipient: caller, amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::sell_tokens())]
        pub fn sell_tokens(
            origin: OriginFor<T>,
            buyer: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let seller = ensure_signed(origin)?;
            rules::ensure_distinct(&seller, &buyer).map_err(Error::<T>::from)?;
            Self::ensure_owner(&seller)?;
            let (seller_after, buyer_after) = rules::checked_move(
                Balances::<T>::get(&seller),
                Balances::<T>::get(&buyer),
                amount,
            )
            .map_err(Error::<T>::from)?;

            Balances::<T>::insert(&seller, seller_after);
            Balances::<T>::insert(&buyer, buyer_after);
            log::debug!(target: LOG_TARGET, "sold {amount} from {seller:?} to {buyer:?}");
            Self::deposit_event(Event::SellTokens { seller, buyer, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Deployer of the sale; becomes the first owner
        pub owner: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            // Supply starts at zero with no balances; only the owner is seeded.
            if let Some(ref owner) = self.owner {
                Owner::<T>::put(owner);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The `MaxSupply` constant.
    pub fn max_supply() -> Balance {
        T::MaxSupply::get()
    }

    /// Whether the whole supply has been minted.
    pub fn max_tokens() -> bool {
        TotalSupply::<T>::get() >= T::MaxSupply::get()
    }

    pub fn remaining_supply() -> Balance {
        T::MaxSupply::get().saturating_sub(TotalSupply::<T>::get())
    }

    fn ensure_owner(caller: &T::AccountId) -> Result<(), Error<T>> {
        rules::ensure_owner(caller, Owner::<T>::get().as_ref()).map_err(|err| {
            log::trace!(target: LOG_TARGET, "{caller:?} is not the owner");
            Error::<T>::from(err)
        })
    }

    /// Balances must add up to the total supply, which must respect the cap.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0 as Balance, |acc, bal| acc.checked_add(bal))
            .ok_or("sum of balances overflows")?;
        let total = TotalSupply::<T>::get();
        ensure!(sum == total, "sum of balances differs from total supply");
        ensure!(total <= T::MaxSupply::get(), "total supply exceeds MaxSupply");
        Ok(())
    }
}

impl<T> From<LedgerError> for Error<T> {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Unauthorized => Error::Unauthorized,
            LedgerError::SupplyCapExceeded => Error::SupplyCapExceeded,
            LedgerError::InsufficientBalance => Error::InsufficientBalance,
            LedgerError::SelfTransferRejected => Error::SelfTransferRejected,
        }
    }
}
