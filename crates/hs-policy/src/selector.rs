//! The `StationSelector` trait — which queue an arriving truck joins.

use hs_core::{StationId, TruckId};
use hs_fleet::Station;

/// Pluggable station-selection policy.
///
/// Called once per `ArriveStation` event with the current state of every
/// station.  Must return the id of one of `stations`, or `None` only when
/// `stations` is empty (the simulation never calls it in that case).
///
/// Implementations must be deterministic for a given station state: the
/// run's reproducibility depends on it.
///
/// # Example
///
/// ```rust,ignore
/// /// Always send trucks to the first station.
/// struct FirstStation;
///
/// impl StationSelector for FirstStation {
///     fn select(&self, _truck: TruckId, stations: &[Station]) -> Option<StationId> {
///         stations.first().map(|s| s.id)
///     }
/// }
/// ```
pub trait StationSelector: Send + Sync + 'static {
    fn select(&self, truck: TruckId, stations: &[Station]) -> Option<StationId>;
}
