//! Weights for pallet-token-sale.
//!
//! Hand-set from the storage access of each call until the benchmarks in
//! `benchmarking.rs` are run against a reference machine.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn transfer_owner() -> Weight;
    fn mint() -> Weight;
    fn sell_tokens() -> Weight;
}

/// Weights for a runtime, priced with its own `DbWeight`.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenSale::Owner` (r:1 w:1)
    fn transfer_owner() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    /// Storage: `TokenSale::Owner` (r:1 w:0)
    /// Storage: `TokenSale::TotalSupply` (r:1 w:1)
    /// Storage: `TokenSale::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    /// Storage: `TokenSale::Owner` (r:1 w:0)
    /// Storage: `TokenSale::Balances` (r:2 w:2)
    fn sell_tokens() -> Weight {
        Weight::from_parts(18_000_000, 6_000).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
}

// For tests and mocks
impl WeightInfo for () {
    fn transfer_owner() -> Weight {
        Weight::from_parts(10_000_000, 1_500).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn mint() -> Weight {
        Weight::from_parts(15_000_000, 3_500).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn sell_tokens() -> Weight {
        Weight::from_parts(18_000_000, 6_000).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
}
