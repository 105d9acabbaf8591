//! A single charging resource with a first-come, first-served queue.
//!
//! # Invariants
//!
//! - A vehicle id appears in the queue at most once.
//! - `members` always holds exactly the ids in `queue`.
//! - The vehicle currently charging is the front of the queue, if any.

use std::collections::VecDeque;

use fleet_core::{ChargingStationId, VehicleId};
use rustc_hash::FxHashSet;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ChargingStation {
    id:      ChargingStationId,
    queue:   VecDeque<VehicleId>,
    members: FxHashSet<VehicleId>,
}

impl ChargingStation {
    pub fn new(id: ChargingStationId) -> Self {
        Self {
            id,
            queue:   VecDeque::new(),
            members: FxHashSet::default(),
        }
    }

    #[inline]
    pub fn id(&self) -> ChargingStationId {
        self.id
    }

    /// Append `vehicle` to the back of the queue.
    ///
    /// Returns `false` (and changes nothing) if it is already queued.
    pub fn enqueue(&mut self, vehicle: VehicleId) -> bool {
        if !self.members.insert(vehicle) {
            return false;
        }
        self.queue.push_back(vehicle);
        debug!(station = %self.id, %vehicle, occupants = self.queue.len(), "enqueued");
        true
    }

    /// Remove the front vehicle.  Returns `false` if the queue was empty.
    pub fn dequeue(&mut self) -> bool {
        match self.queue.pop_front() {
            Some(vehicle) => {
                self.members.remove(&vehicle);
                debug!(station = %self.id, %vehicle, occupants = self.queue.len(), "dequeued");
                true
            }
            None => false,
        }
    }

    /// The vehicle allowed to charge right now.
    #[inline]
    pub fn front(&self) -> Option<VehicleId> {
        self.queue.front().copied()
    }

    #[inline]
    pub fn is_front(&self, vehicle: VehicleId) -> bool {
        self.front() == Some(vehicle)
    }

    #[inline]
    pub fn contains(&self, vehicle: VehicleId) -> bool {
        self.members.contains(&vehicle)
    }

    /// Occupants: the charging vehicle plus everyone waiting behind it.
    #[inline]
    pub fn count(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queued vehicles, front first.
    pub fn iter(&self) -> impl Iterator<Item = VehicleId> + '_ {
        self.queue.iter().copied()
    }
}
