pub const ERR_ALREADY_INITIALIZED: &str = "Already initialized";

pub const ERR_INSUFFICIENT_FUNDS: &str = "Not enough staked balance to withdraw";
pub const ERR_INVALID_COIN: &str = "Attached deposit must be positive";
pub const ERR_NOT_STAKER: &str = "Caller is not the staker";
pub const ERR_INVALID_FARM: &str = "Farm not found";
pub const ERR_INVALID_YIELD_CLAIM: &str = "Invalid yield claim";
