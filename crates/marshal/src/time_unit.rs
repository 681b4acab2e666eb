//! Time units for duration-valued marshalling.

/// Granularity of a duration amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// 10^-9 s
    Nanoseconds,
    /// 10^-6 s
    Microseconds,
    /// 10^-3 s
    Milliseconds,
    /// 1 s
    Seconds,
    /// 60 s
    Minutes,
    /// 3600 s
    Hours,
    /// 86400 s
    Days,
}

impl TimeUnit {
    /// Whole seconds in `amount` of this unit.
    ///
    /// Sub-second units truncate toward zero; larger units saturate at
    /// `i64::MIN`/`i64::MAX` instead of overflowing.
    pub fn to_seconds(self, amount: i64) -> i64 {
        match self {
            TimeUnit::Nanoseconds => amount / 1_000_000_000,
            TimeUnit::Microseconds => amount / 1_000_000,
            TimeUnit::Milliseconds => amount / 1_000,
            TimeUnit::Seconds => amount,
            TimeUnit::Minutes => amount.saturating_mul(60),
            TimeUnit::Hours => amount.saturating_mul(3_600),
            TimeUnit::Days => amount.saturating_mul(86_400),
        }
    }
}
