//! Fluent builder for constructing a [`Sim`].

use fleet_charging::ChargingStations;
use fleet_core::{SimClock, SimConfig, SimRng};
use fleet_vehicle::{Vehicle, VehicleModels, Vehicles};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Inputs
///
/// | Method          | Default                                                  |
/// |-----------------|----------------------------------------------------------|
/// | `.models(m)`    | Empty catalog                                            |
/// | `.vehicles(v)`  | `config.vehicle_count` vehicles drawn from the catalog   |
/// | `.stations(s)`  | `config.charging_station_count` stations, ids `0..n`     |
///
/// The RNG is seeded from `config.seed` (OS entropy when `None`) and is
/// consumed by the fleet draw before the run starts.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .models(sample_vehicle_models())
///     .build()?;
/// let outcome = sim.run(&mut NoopObserver);
/// ```
pub struct SimBuilder {
    config:   SimConfig,
    models:   VehicleModels,
    vehicles: Option<Vec<Vehicle>>,
    stations: Option<ChargingStations>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            models:   VehicleModels::new(),
            vehicles: None,
            stations: None,
        }
    }

    /// Catalog the fleet is drawn from.
    pub fn models(mut self, models: VehicleModels) -> Self {
        self.models = models;
        self
    }

    /// Use exactly these vehicles instead of drawing `config.vehicle_count`
    /// from the catalog.  Their models are added to the catalog.
    pub fn vehicles(mut self, vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        self.vehicles = Some(vehicles.into_iter().collect());
        self
    }

    /// Use this station registry instead of `config.charging_station_count`
    /// empty stations.
    pub fn stations(mut self, stations: ChargingStations) -> Self {
        self.stations = Some(stations);
        self
    }

    /// Validate inputs, draw the fleet if needed, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut rng = SimRng::from_seed(self.config.seed);
        let mut models = self.models;

        let vehicles = match self.vehicles {
            Some(list) => {
                let mut vehicles = Vehicles::new();
                for vehicle in list {
                    let id = vehicle.id();
                    let model = vehicle.model();
                    if !models.insert(model.clone())
                        && models.get(model.id()).is_some_and(|m| **m != **model)
                    {
                        return Err(SimError::ConflictingModel { vehicle: id, model: model.id() });
                    }
                    if !vehicles.insert(vehicle) {
                        return Err(SimError::DuplicateVehicle(id));
                    }
                }
                vehicles
            }
            None => Vehicles::generate(self.config.vehicle_count, &models, &mut rng).ok_or(
                SimError::EmptyCatalog { vehicles: self.config.vehicle_count },
            )?,
        };

        let stations = self
            .stations
            .unwrap_or_else(|| ChargingStations::with_count(self.config.charging_station_count));

        Ok(Sim {
            config: self.config,
            clock: SimClock::new(),
            models,
            vehicles,
            stations,
            rng,
        })
    }
}
