//! The fleet registry.
//!
//! Vehicles are stored in insertion order, which is also the order the
//! simulation visits them in every pass.  That order fixes both the station
//! queue order of simultaneous arrivals and the order in which fault draws
//! consume the shared RNG, so it must stay stable across steps.

use std::collections::BTreeMap;

use fleet_core::{SimRng, VehicleId, VehicleModelId};
use fleet_stats::AggregateStatistics;
use rustc_hash::FxHashMap;

use crate::catalog::VehicleModels;
use crate::status::StatusCounts;
use crate::vehicle::Vehicle;

#[derive(Clone, Debug, Default)]
pub struct Vehicles {
    vehicles: Vec<Vehicle>,
    index:    FxHashMap<VehicleId, usize>,
}

impl Vehicles {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` fully charged vehicles with ids `0..count`, each of a model
    /// drawn uniformly from `models`.
    ///
    /// Returns `None` if `count > 0` and the catalog is empty.
    pub fn generate(count: usize, models: &VehicleModels, rng: &mut SimRng) -> Option<Self> {
        let mut vehicles = Self::new();
        for i in 0..count as u32 {
            let model = models.random(rng)?;
            vehicles.insert(Vehicle::new(VehicleId(i), model.clone()));
        }
        Some(vehicles)
    }

    /// Add `vehicle`.  Returns `false` (and drops it) if the id is taken.
    pub fn insert(&mut self, vehicle: Vehicle) -> bool {
        if self.index.contains_key(&vehicle.id()) {
            return false;
        }
        self.index.insert(vehicle.id(), self.vehicles.len());
        self.vehicles.push(vehicle);
        true
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.index.get(&id).map(|&i| &self.vehicles[i])
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.index.get(&id).map(|&i| &mut self.vehicles[i])
    }

    #[inline]
    pub fn contains(&self, id: VehicleId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vehicle> {
        self.vehicles.iter_mut()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Number of vehicles of each model.
    pub fn model_counts(&self) -> BTreeMap<VehicleModelId, usize> {
        let mut counts = BTreeMap::new();
        for vehicle in &self.vehicles {
            *counts.entry(vehicle.model().id()).or_insert(0) += 1;
        }
        counts
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for vehicle in &self.vehicles {
            counts.record(vehicle.status());
        }
        counts
    }

    /// Every vehicle's statistics, summed per model.
    pub fn aggregate_statistics(&self) -> AggregateStatistics {
        self.vehicles
            .iter()
            .map(|v| (v.model().id(), v.statistics()))
            .collect()
    }
}
