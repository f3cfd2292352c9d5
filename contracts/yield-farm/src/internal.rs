use near_sdk::{json_types::U128, log, require, AccountId, Balance, Promise};

use crate::errors::*;
use crate::events::Event;
use crate::farm::Farm;
use crate::staker::Staker;
use crate::types::*;
use crate::YieldFarmContract;

/// Core state transitions.
///
/// Caller identity and the current time are taken as explicit arguments here,
/// not read from the ambient environment; the public entry points in `lib.rs`
/// resolve both once per call. Every function checks all preconditions before
/// the first field is written, so a rejected call leaves no partial update.
impl YieldFarmContract {
    pub(crate) fn internal_create_farm(
        &mut self,
        name: String,
        yield_rate: u64,
        authority: AccountId,
    ) -> FarmId {
        let farm_id = self.next_farm_id;
        self.next_farm_id += 1;

        let farm = Farm::new(farm_id, name.clone(), authority.clone(), yield_rate);
        self.internal_save_farm(farm_id, &farm);

        Event::FarmCreate {
            farm_id,
            name,
            authority,
            yield_rate,
        }
        .emit();
        farm_id
    }

    pub(crate) fn internal_stake_funds(
        &mut self,
        farm_id: FarmId,
        amount: Balance,
        caller: AccountId,
        now: TimestampMs,
    ) -> Staker {
        require!(amount > 0, ERR_INVALID_COIN);

        let mut farm = self.internal_expect_farm(farm_id);
        require!(caller == farm.authority, ERR_NOT_STAKER);

        let staker = match farm.stakers.get(&caller) {
            Some(mut entry) => {
                // The accrual anchor stays at the first deposit.
                entry.balance += amount;
                entry
            }
            None => Staker::new(caller.clone(), amount, now),
        };
        farm.stakers.insert(&caller, &staker);
        self.internal_save_farm(farm_id, &farm);

        Event::Stake {
            farm_id,
            account_id: caller,
            amount: U128(amount),
            new_balance: U128(staker.balance),
            stake_time: staker.stake_time,
        }
        .emit();
        log!(
            "Farm {} has {} stakers",
            farm_id,
            farm.stakers.len()
        );

        staker
    }

    pub(crate) fn internal_claim_yield(
        &mut self,
        farm_id: FarmId,
        staker_id: &AccountId,
        caller: AccountId,
        now: TimestampMs,
    ) -> Balance {
        let mut farm = self.internal_expect_farm(farm_id);
        let mut staker = farm.stakers.get(staker_id).expect(ERR_NOT_STAKER);
        require!(caller == staker.owner, ERR_NOT_STAKER);

        // If the clock regressed below the anchor, accrue nothing rather
        // than underflow.
        let elapsed_ms = now.saturating_sub(staker.stake_time);
        let yield_amount = farm.accrued_yield(staker.balance, elapsed_ms);

        // The minted yield is credited to the staker's spendable balance and
        // mirrored into the farm's recorded pool. The anchor is left at the
        // original stake time, so the next claim measures from there again.
        staker.balance += yield_amount;
        staker.yield_claimed += yield_amount;
        farm.pool_balance += yield_amount;
        farm.stakers.insert(staker_id, &staker);
        self.internal_save_farm(farm_id, &farm);

        Event::ClaimYield {
            farm_id,
            account_id: staker.owner.clone(),
            yield_amount: U128(yield_amount),
            new_balance: U128(staker.balance),
            yield_claimed: U128(staker.yield_claimed),
        }
        .emit();
        log!(
            "Farm {} pool balance is {}. Staker {} balance is {}",
            farm_id,
            farm.pool_balance,
            staker_id,
            staker.balance
        );

        yield_amount
    }

    pub(crate) fn internal_withdraw_funds(
        &mut self,
        farm_id: FarmId,
        staker_id: &AccountId,
        amount: Balance,
        caller: AccountId,
    ) {
        let mut farm = self.internal_expect_farm(farm_id);
        let mut staker = farm.stakers.get(staker_id).expect(ERR_NOT_STAKER);
        require!(caller == staker.owner, ERR_NOT_STAKER);
        require!(amount <= staker.balance, ERR_INSUFFICIENT_FUNDS);

        // The entry is kept even at zero balance; `yield_claimed` is history.
        staker.balance -= amount;
        farm.stakers.insert(staker_id, &staker);
        self.internal_save_farm(farm_id, &farm);

        Event::Withdraw {
            farm_id,
            account_id: staker.owner.clone(),
            amount: U128(amount),
            new_balance: U128(staker.balance),
        }
        .emit();
        Promise::new(staker.owner).transfer(amount);
    }

    /// Inner method to get the given farm, aborting on an unknown id.
    pub(crate) fn internal_expect_farm(&self, farm_id: FarmId) -> Farm {
        self.farms.get(&farm_id).expect(ERR_INVALID_FARM)
    }

    /// Inner method to save the given farm for a given farm id.
    pub(crate) fn internal_save_farm(&mut self, farm_id: FarmId, farm: &Farm) {
        self.farms.insert(&farm_id, farm);
    }
}
