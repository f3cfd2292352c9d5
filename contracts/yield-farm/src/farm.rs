use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    collections::UnorderedMap,
    AccountId, Balance,
};

use crate::staker::Staker;
use crate::types::*;
use crate::utils::StorageKey;

/// A yield farm: the aggregation root that owns the pool balance, the yield
/// rate and the ledger entries of all its stakers.
#[derive(BorshDeserialize, BorshSerialize)]
pub struct Farm {
    /// Display label, no uniqueness constraint.
    pub name: String,
    /// Total asset recorded for the farm's pool.
    pub pool_balance: Balance,
    /// Ledger entries keyed by participant account, at most one per account.
    pub stakers: UnorderedMap<AccountId, Staker>,
    /// The account permitted to operate the farm; set to the creator.
    pub authority: AccountId,
    /// Annual yield rate in whole percent.
    pub yield_rate: u64,
}

impl Farm {
    pub fn new(farm_id: FarmId, name: String, authority: AccountId, yield_rate: u64) -> Self {
        Self {
            name,
            pool_balance: 0,
            stakers: UnorderedMap::new(StorageKey::FarmStakers { farm_id }),
            authority,
            yield_rate,
        }
    }

    /// Simple (non-compounding) interest accrued on `balance` over
    /// `elapsed_ms`, annualized and truncated toward zero:
    ///
    /// `balance * yield_rate * elapsed_ms / (100 * ONE_YEAR_MS)`
    ///
    /// The numerator overflows u128 for large balances over long windows,
    /// so the division is carried out in 256 bits.
    pub fn accrued_yield(&self, balance: Balance, elapsed_ms: u64) -> Balance {
        (U256::from(balance) * U256::from(self.yield_rate) * U256::from(elapsed_ms)
            / (U256::from(FULL_PERCENT) * U256::from(ONE_YEAR_MS)))
        .as_u128()
    }
}
