//! The charging-station registry.
//!
//! Stations are kept in a `BTreeMap`, so iteration (and therefore the
//! [`lowest_count`](ChargingStations::lowest_count) tie-break) follows id
//! order regardless of the order in which stations were inserted.

use std::collections::BTreeMap;

use fleet_core::ChargingStationId;

use crate::station::ChargingStation;

#[derive(Clone, Debug, Default)]
pub struct ChargingStations {
    stations: BTreeMap<ChargingStationId, ChargingStation>,
}

impl ChargingStations {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` empty stations with ids `0..count`.
    pub fn with_count(count: usize) -> Self {
        let stations = (0..count as u32)
            .map(|i| (ChargingStationId(i), ChargingStation::new(ChargingStationId(i))))
            .collect();
        Self { stations }
    }

    /// Register `station`.  Returns `false` if its id is already taken.
    pub fn insert(&mut self, station: ChargingStation) -> bool {
        use std::collections::btree_map::Entry;
        match self.stations.entry(station.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(station);
                true
            }
        }
    }

    #[inline]
    pub fn get(&self, id: ChargingStationId) -> Option<&ChargingStation> {
        self.stations.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: ChargingStationId) -> Option<&mut ChargingStation> {
        self.stations.get_mut(&id)
    }

    /// The station with the fewest occupants.  On a tie the lowest id wins.
    /// `None` only when no station is registered.
    pub fn lowest_count(&self) -> Option<&ChargingStation> {
        let mut best: Option<&ChargingStation> = None;
        for station in self.stations.values() {
            if best.is_none_or(|b| station.count() < b.count()) {
                best = Some(station);
            }
        }
        best
    }

    /// Mutable form of [`lowest_count`](Self::lowest_count).
    pub fn lowest_count_mut(&mut self) -> Option<&mut ChargingStation> {
        let id = self.lowest_count()?.id();
        self.stations.get_mut(&id)
    }

    /// Stations in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ChargingStation> {
        self.stations.values()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
