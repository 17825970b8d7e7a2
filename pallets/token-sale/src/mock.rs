use crate as pallet_token_sale;
use frame_support::{derive_impl, parameter_types};
use sp_runtime::BuildStorage;

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenSale: pallet_token_sale,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = Block;
    type AccountData = ();
}

pub const OWNER: u64 = 1;
pub const BUYER: u64 = 2;
pub const OTHER: u64 = 3;

parameter_types! {
    pub const MaxSupply: u128 = 3_000;
}

impl pallet_token_sale::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = MaxSupply;
    type WeightInfo = ();
}

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_token_sale::GenesisConfig::<Test> { owner: Some(OWNER) }
        .assimilate_storage(&mut t)
        .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1 onwards.
    ext.execute_with(|| System::set_block_number(1));
    ext
}
