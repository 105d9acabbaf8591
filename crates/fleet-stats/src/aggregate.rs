//! `AggregateStatistics`: per-model sums of vehicle statistics.

use std::collections::BTreeMap;

use fleet_core::VehicleModelId;

use crate::Statistics;

/// Statistics summed over every vehicle of each model, keyed by model id.
///
/// Iteration is in ascending model-id order, so reports built from it are
/// stable across runs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStatistics {
    by_model: BTreeMap<VehicleModelId, Statistics>,
}

impl AggregateStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one vehicle's statistics into the entry for `model`.
    ///
    /// The first vehicle of a model seeds the entry; later ones are
    /// [aggregated](Statistics::aggregate) into it.
    pub fn add(&mut self, model: VehicleModelId, statistics: &Statistics) {
        self.by_model
            .entry(model)
            .and_modify(|existing| existing.aggregate(statistics))
            .or_insert(*statistics);
    }

    /// Aggregate statistics of `model`, or `None` if no vehicle of that model
    /// was folded in.
    pub fn get(&self, model: VehicleModelId) -> Option<&Statistics> {
        self.by_model.get(&model)
    }

    /// Number of distinct models.
    pub fn len(&self) -> usize {
        self.by_model.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_model.is_empty()
    }

    /// `(model id, statistics)` pairs in ascending model-id order.
    pub fn iter(&self) -> impl Iterator<Item = (VehicleModelId, &Statistics)> + '_ {
        self.by_model.iter().map(|(&id, stats)| (id, stats))
    }
}

impl<'a> FromIterator<(VehicleModelId, &'a Statistics)> for AggregateStatistics {
    fn from_iter<I: IntoIterator<Item = (VehicleModelId, &'a Statistics)>>(iter: I) -> Self {
        let mut aggregate = Self::new();
        for (model, statistics) in iter {
            aggregate.add(model, statistics);
        }
        aggregate
    }
}
