use near_sdk::{
    json_types::U128,
    near_bindgen,
    serde::{Deserialize, Serialize},
    AccountId,
};

use crate::staker::StakerView;
use crate::types::FarmId;
use crate::utils::current_time_ms;
use crate::YieldFarmContract;
use crate::YieldFarmContractExt;

/// The human readable summary of one farm.
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct FarmView {
    pub farm_id: FarmId,
    pub name: String,
    /// Total asset recorded for the farm's pool.
    pub pool_balance: U128,
    pub authority: AccountId,
    /// Annual yield rate in whole percent.
    pub yield_rate: u64,
    pub num_stakers: u64,
}

/// public view functions
#[near_bindgen]
impl YieldFarmContract {
    /// Returns the recorded pool balance of the given farm.
    pub fn get_farm_balance(&self, farm_id: FarmId) -> U128 {
        self.internal_expect_farm(farm_id).pool_balance.into()
    }

    /// Returns the balance held by the given staker entry, or zero if the
    /// participant has never staked into this farm.
    pub fn get_staker_balance(&self, farm_id: FarmId, staker_id: AccountId) -> U128 {
        let farm = self.internal_expect_farm(farm_id);
        farm.stakers
            .get(&staker_id)
            .map(|staker| staker.balance)
            .unwrap_or(0)
            .into()
    }

    pub fn get_farm(&self, farm_id: FarmId) -> FarmView {
        let farm = self.internal_expect_farm(farm_id);
        FarmView {
            farm_id,
            name: farm.name.clone(),
            pool_balance: farm.pool_balance.into(),
            authority: farm.authority.clone(),
            yield_rate: farm.yield_rate,
            num_stakers: farm.stakers.len(),
        }
    }

    /// Returns the list of farms
    pub fn get_farms(&self, from_index: u64, limit: u64) -> Vec<FarmView> {
        let keys = self.farms.keys_as_vector();

        (from_index..std::cmp::min(from_index + limit, keys.len()))
            .map(|index| self.get_farm(keys.get(index).unwrap()))
            .collect()
    }

    pub fn get_number_of_farms(&self) -> u64 {
        self.farms.len()
    }

    /// Returns the ledger entry of the given participant. A participant that
    /// has never staked is reported with zero balances.
    pub fn get_staker(&self, farm_id: FarmId, staker_id: AccountId) -> StakerView {
        let farm = self.internal_expect_farm(farm_id);
        match farm.stakers.get(&staker_id) {
            Some(staker) => (&staker).into(),
            None => StakerView {
                owner: staker_id,
                balance: U128(0),
                stake_time: 0,
                yield_claimed: U128(0),
            },
        }
    }

    /// Returns the list of ledger entries of the given farm
    pub fn get_stakers(&self, farm_id: FarmId, from_index: u64, limit: u64) -> Vec<StakerView> {
        let farm = self.internal_expect_farm(farm_id);
        let keys = farm.stakers.keys_as_vector();

        (from_index..std::cmp::min(from_index + limit, keys.len()))
            .map(|index| {
                let staker = farm.stakers.get(&keys.get(index).unwrap()).unwrap();
                (&staker).into()
            })
            .collect()
    }

    pub fn get_number_of_stakers(&self, farm_id: FarmId) -> u64 {
        self.internal_expect_farm(farm_id).stakers.len()
    }

    /// Returns the yield a claim would credit to the given entry at the
    /// current block time. Zero for a participant that has never staked.
    pub fn get_unclaimed_yield(&self, farm_id: FarmId, staker_id: AccountId) -> U128 {
        let farm = self.internal_expect_farm(farm_id);
        farm.stakers
            .get(&staker_id)
            .map(|staker| {
                let elapsed_ms = current_time_ms().saturating_sub(staker.stake_time);
                farm.accrued_yield(staker.balance, elapsed_ms)
            })
            .unwrap_or(0)
            .into()
    }
}
