use uint::construct_uint;

/// Identifier of a farm, allocated by the contract at farm creation.
pub type FarmId = u64;

/// Millisecond timestamp, the resolution used by the accrual formula.
pub type TimestampMs = u64;

/// Milliseconds in a (non-leap) year, the annualization denominator.
pub const ONE_YEAR_MS: u64 = 365 * 24 * 60 * 60 * 1000;

/// Yield rates are expressed in whole percent, e.g. 10 = 10%/year.
pub const FULL_PERCENT: u64 = 100;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}
