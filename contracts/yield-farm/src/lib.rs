use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::UnorderedMap,
    env,
    json_types::U128,
    near_bindgen, require, AccountId, PanicOnDefault,
};

mod errors;
mod events;
mod farm;
mod internal;
mod staker;
mod types;
mod utils;
mod view;

pub use crate::errors::*;
pub use crate::farm::*;
pub use crate::staker::*;
pub use crate::types::*;
pub use crate::view::*;
use crate::utils::*;

/// Registry of yield farms.
///
/// Each farm accepts deposits of the native asset from its stakers, accrues
/// simple annualized interest on every staked balance, and pays accrued yield
/// or principal back out on demand. The registry allocates farm ids and owns
/// the persistent farm records.
#[near_bindgen]
#[derive(BorshDeserialize, BorshSerialize, PanicOnDefault)]
pub struct YieldFarmContract {
    /// Persistent map from a farm id to the corresponding farm.
    pub farms: UnorderedMap<FarmId, Farm>,
    /// The next farm id to allocate. Ids are dense and start at zero.
    pub next_farm_id: FarmId,
}

#[near_bindgen]
impl YieldFarmContract {
    #[init]
    pub fn new() -> Self {
        require!(!env::state_exists(), ERR_ALREADY_INITIALIZED);

        Self {
            farms: UnorderedMap::new(StorageKey::Farms),
            next_farm_id: 0,
        }
    }

    pub fn version(&self) -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// -- Ledger change methods
#[near_bindgen]
impl YieldFarmContract {
    /// Creates a new farm with an empty pool and the caller as its authority.
    /// `yield_rate` is an annual rate in whole percent and is accepted
    /// unbounded.
    pub fn create_farm(&mut self, name: String, yield_rate: u64) -> FarmId {
        let caller = env::predecessor_account_id();
        self.internal_create_farm(name, yield_rate, caller)
    }

    /// Deposits the attached amount into the caller's ledger entry of the
    /// given farm, creating the entry on first use. Only the farm's authority
    /// may stake.
    #[payable]
    pub fn stake_funds(&mut self, farm_id: FarmId) -> StakerView {
        let amount = env::attached_deposit();
        let caller = env::predecessor_account_id();
        let staker = self.internal_stake_funds(farm_id, amount, caller, current_time_ms());
        (&staker).into()
    }

    /// Credits the yield accrued since the stake time to the given ledger
    /// entry and to the farm's pool, and returns the credited amount. Only
    /// the entry's owner may claim.
    pub fn claim_yield(&mut self, farm_id: FarmId, staker_id: AccountId) -> U128 {
        let caller = env::predecessor_account_id();
        self.internal_claim_yield(farm_id, &staker_id, caller, current_time_ms())
            .into()
    }

    /// Withdraws `amount` from the given ledger entry and transfers it to the
    /// entry's owner. Only the entry's owner may withdraw.
    pub fn withdraw_funds(&mut self, farm_id: FarmId, staker_id: AccountId, amount: U128) {
        let caller = env::predecessor_account_id();
        self.internal_withdraw_funds(farm_id, &staker_id, amount.into(), caller);
    }
}
