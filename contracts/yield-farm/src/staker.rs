use near_sdk::{
    borsh::{self, BorshDeserialize, BorshSerialize},
    json_types::U128,
    serde::{Deserialize, Serialize},
    AccountId, Balance,
};

use crate::types::TimestampMs;

/// Ledger entry of one participant in one farm.
///
/// An entry is created on the participant's first stake and updated by every
/// following stake, claim or withdrawal. It is never deleted: a zero-balance
/// entry keeps its `yield_claimed` history.
#[derive(BorshDeserialize, BorshSerialize, Debug, PartialEq)]
pub struct Staker {
    /// The participant this entry belongs to. The sole authorization anchor
    /// for claim and withdraw calls.
    pub owner: AccountId,
    /// Currently held balance: staked principal plus credited yield.
    pub balance: Balance,
    /// Accrual anchor. Set by the first deposit and not touched by later
    /// deposits or claims.
    pub stake_time: TimestampMs,
    /// Lifetime cumulative yield credited to this entry.
    pub yield_claimed: Balance,
}

impl Staker {
    pub fn new(owner: AccountId, balance: Balance, stake_time: TimestampMs) -> Self {
        Self {
            owner,
            balance,
            stake_time,
            yield_claimed: 0,
        }
    }
}

/// Staker entry as returned from the contract interface.
#[derive(Serialize, Deserialize)]
#[serde(crate = "near_sdk::serde")]
pub struct StakerView {
    pub owner: AccountId,
    pub balance: U128,
    pub stake_time: TimestampMs,
    pub yield_claimed: U128,
}

impl From<&Staker> for StakerView {
    fn from(staker: &Staker) -> Self {
        Self {
            owner: staker.owner.clone(),
            balance: staker.balance.into(),
            stake_time: staker.stake_time,
            yield_claimed: staker.yield_claimed.into(),
        }
    }
}
