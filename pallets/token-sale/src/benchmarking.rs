//! Benchmarking setup for pallet-token-sale

use super::*;

#[allow(unused)]
use crate::Pallet as TokenSale;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer_owner() {
        let owner: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn mint() {
        let owner: T::AccountId = whitelisted_caller();
        let amount = T::MaxSupply::get();
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), amount);

        assert_eq!(Balances::<T>::get(&owner), amount);
        assert_eq!(TotalSupply::<T>::get(), amount);
    }

    #[benchmark]
    fn sell_tokens() {
        let owner: T::AccountId = whitelisted_caller();
        let buyer: T::AccountId = account("buyer", 0, 0);
        let supply = T::MaxSupply::get();

        // Setup: owner holds the whole supply
        Owner::<T>::put(&owner);
        Balances::<T>::insert(&owner, supply);
        TotalSupply::<T>::put(supply);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), buyer.clone(), supply);

        assert_eq!(Balances::<T>::get(&owner), 0);
        assert_eq!(Balances::<T>::get(&buyer), supply);
    }

    impl_benchmark_test_suite!(TokenSale, crate::mock::new_test_ext(), crate::mock::Test);
}
