//! Plain data row types written by output backends.

/// One delivered passenger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassengerRow {
    pub passenger_id: u32,
    pub origin:       u32,
    pub destination:  u32,
    /// The elevator that carried the passenger.
    pub elevator_id:  u16,
    /// Ticks spent waiting before boarding.  Final once the passenger exits.
    pub wait_ticks:   u64,
    /// Tick during which the passenger reached its destination.
    pub exit_tick:    u64,
}

/// Counters for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:    u64,
    pub spawned: u64,
    pub boarded: u64,
    pub exited:  u64,
    pub waiting: u64,
    pub riding:  u64,
}
