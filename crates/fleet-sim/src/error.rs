use fleet_core::{FleetError, VehicleId, VehicleModelId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Fleet(#[from] FleetError),

    #[error("vehicle {vehicle} uses a different model under the catalog's id {model}")]
    ConflictingModel {
        vehicle: VehicleId,
        model:   VehicleModelId,
    },

    #[error("cannot draw {vehicles} vehicles from an empty model catalog")]
    EmptyCatalog { vehicles: usize },

    #[error("vehicle {0} supplied more than once")]
    DuplicateVehicle(VehicleId),
}

pub type SimResult<T> = Result<T, SimError>;
