//! Effects - side effects declared by the reducer

use crate::state::Unit;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch current conditions for the given city
    FetchWeather { city: String, unit: Unit, seq: u64 },
}
