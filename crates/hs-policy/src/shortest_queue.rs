//! Shortest-queue station selection.

use hs_core::{StationId, TruckId};
use hs_fleet::Station;

use crate::StationSelector;

/// Join the station with the fewest trucks assigned (waiting + unloading).
///
/// Ties go to the lowest station id.  Only the current queue length is
/// considered, not how soon the station frees up, so a long queue of nearly
/// finished trucks can lose to a shorter queue that will take longer.
///
/// Cost is a linear scan per arrival.  With many stations a structure keyed
/// by queue length would make this logarithmic.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestQueue;

impl StationSelector for ShortestQueue {
    fn select(&self, _truck: TruckId, stations: &[Station]) -> Option<StationId> {
        // `min_by_key` returns the first of several equal minima.
        stations.iter().min_by_key(|s| s.queue_len()).map(|s| s.id)
    }
}
