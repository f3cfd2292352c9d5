use near_sdk::{json_types::U128, log, serde::Serialize, serde_json::json, AccountId};

use crate::types::{FarmId, TimestampMs};

pub(crate) fn emit_event<T: ?Sized + Serialize>(data: &T) {
    let result = json!(data);
    let event_json = json!({
        "standard": "yield-farm",
        "version": "1.0.0",
        "event": result["event"],
        "data": [result["data"]]
    })
    .to_string();
    log!(format!("EVENT_JSON:{}", event_json));
}

#[derive(Serialize, Debug, Clone)]
#[serde(crate = "near_sdk::serde")]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum Event {
    FarmCreate {
        farm_id: FarmId,
        name: String,
        authority: AccountId,
        yield_rate: u64,
    },
    Stake {
        farm_id: FarmId,
        account_id: AccountId,
        amount: U128,
        new_balance: U128,
        stake_time: TimestampMs,
    },
    ClaimYield {
        farm_id: FarmId,
        account_id: AccountId,
        yield_amount: U128,
        new_balance: U128,
        yield_claimed: U128,
    },
    Withdraw {
        farm_id: FarmId,
        account_id: AccountId,
        amount: U128,
        new_balance: U128,
    },
}

impl Event {
    pub fn emit(&self) {
        emit_event(&self);
    }
}
