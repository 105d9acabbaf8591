//! The vehicle model catalog.

use std::sync::Arc;

use fleet_core::{SimRng, VehicleModelId};
use rustc_hash::FxHashMap;

use crate::model::VehicleModel;

/// Vehicle models in insertion order, with O(1) lookup by id.
#[derive(Clone, Debug, Default)]
pub struct VehicleModels {
    models: Vec<Arc<VehicleModel>>,
    index:  FxHashMap<VehicleModelId, usize>,
}

impl VehicleModels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `model`.  Returns `false` (and drops it) if the id is taken.
    pub fn insert(&mut self, model: impl Into<Arc<VehicleModel>>) -> bool {
        let model = model.into();
        if self.index.contains_key(&model.id()) {
            return false;
        }
        self.index.insert(model.id(), self.models.len());
        self.models.push(model);
        true
    }

    pub fn get(&self, id: VehicleModelId) -> Option<&Arc<VehicleModel>> {
        self.index.get(&id).map(|&i| &self.models[i])
    }

    /// A model drawn uniformly at random, or `None` if the catalog is empty.
    pub fn random(&self, rng: &mut SimRng) -> Option<&Arc<VehicleModel>> {
        rng.choose(&self.models)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<VehicleModel>> {
        self.models.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl FromIterator<VehicleModel> for VehicleModels {
    /// Later duplicates of an id are ignored.
    fn from_iter<I: IntoIterator<Item = VehicleModel>>(iter: I) -> Self {
        let mut models = Self::new();
        for model in iter {
            models.insert(model);
        }
        models
    }
}
