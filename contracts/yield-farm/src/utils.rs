use near_sdk::{
    borsh::{self, BorshSerialize},
    env, BorshStorageKey,
};

use crate::types::*;

pub const NANOS_PER_MS: u64 = 1_000_000;

/// Block time in the millisecond resolution used by the accrual formula.
pub fn current_time_ms() -> TimestampMs {
    env::block_timestamp() / NANOS_PER_MS
}

#[derive(BorshStorageKey, BorshSerialize)]
pub(crate) enum StorageKey {
    Farms,
    FarmStakers { farm_id: FarmId },
}
