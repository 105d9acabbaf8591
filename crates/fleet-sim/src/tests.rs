//! Integration tests for fleet-sim.

use std::sync::Arc;

use fleet_core::units::{Energy, EnergyPerDistance, Frequency, Speed, Time};
use fleet_core::{SimConfig, VehicleModelId};
use fleet_vehicle::{VehicleModel, VehicleSpecs};
use uom::si::energy::joule;
use uom::si::force::newton;
use uom::si::frequency::hertz;
use uom::si::time::second;
use uom::si::velocity::meter_per_second;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn secs(v: f64) -> Time {
    Time::new::<second>(v)
}

fn test_config(duration_secs: f64, vehicles: usize, stations: usize) -> SimConfig {
    SimConfig::new(secs(duration_secs), vehicles, stations, Some(42))
}

/// 2 J battery, 1 J/m at 1 m/s (endurance 2 s), full charge in 1 s.
fn small_model(id: u32, capacity_j: f64, fault_hz: f64) -> Arc<VehicleModel> {
    Arc::new(VehicleModel::new(
        VehicleModelId(id),
        "Test",
        format!("Small {id}"),
        VehicleSpecs {
            passenger_count:    2,
            cruise_speed:       Speed::new::<meter_per_second>(1.0),
            battery_capacity:   Energy::new::<joule>(capacity_j),
            charging_duration:  secs(1.0),
            mean_fault_rate:    Frequency::new::<hertz>(fault_hz),
            energy_consumption: EnergyPerDistance::new::<newton>(1.0),
        },
    ))
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use fleet_core::{FleetError, VehicleId};
    use fleet_vehicle::{Vehicle, VehicleModels, sample_vehicle_models};

    use super::*;
    use crate::{SimBuilder, SimError};

    #[test]
    fn builds_fleet_and_stations_from_config() {
        let sim = SimBuilder::new(test_config(3_600.0, 20, 3))
            .models(sample_vehicle_models())
            .build()
            .unwrap();
        assert_eq!(sim.vehicles.len(), 20);
        let ids: Vec<_> = sim.stations.iter().map(|s| s.id().0).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(sim.clock.steps, 0);
    }

    #[test]
    fn empty_catalog_errors() {
        let result = SimBuilder::new(test_config(10.0, 3, 1)).build();
        assert!(matches!(result, Err(SimError::EmptyCatalog { vehicles: 3 })));
    }

    #[test]
    fn no_vehicles_needs_no_catalog() {
        let sim = SimBuilder::new(test_config(10.0, 0, 1)).build().unwrap();
        assert!(sim.vehicles.is_empty());
    }

    #[test]
    fn duplicate_vehicle_errors() {
        let model = small_model(0, 2.0, 0.0);
        let result = SimBuilder::new(test_config(10.0, 0, 1))
            .vehicles([
                Vehicle::new(VehicleId(1), model.clone()),
                Vehicle::new(VehicleId(1), model),
            ])
            .build();
        assert!(matches!(result, Err(SimError::DuplicateVehicle(VehicleId(1)))));
    }

    #[test]
    fn negative_duration_errors() {
        let mut config = test_config(10.0, 0, 1);
        config.duration = secs(-1.0);
        let result = SimBuilder::new(config).models(VehicleModels::new()).build();
        assert!(matches!(result, Err(SimError::Fleet(FleetError::Config(_)))));
    }

    #[test]
    fn conflicting_model_under_same_id_errors() {
        let result = SimBuilder::new(test_config(10.0, 0, 1))
            .models([VehicleModel::clone(&small_model(0, 2.0, 0.0))].into_iter().collect())
            .vehicles([Vehicle::new(VehicleId(3), small_model(0, 5.0, 0.0))])
            .build();
        assert!(matches!(
            result,
            Err(SimError::ConflictingModel { vehicle: VehicleId(3), model: VehicleModelId(0) })
        ));
    }

    #[test]
    fn identical_model_under_same_id_is_shared() {
        let sim = SimBuilder::new(test_config(10.0, 0, 1))
            .models([VehicleModel::clone(&small_model(0, 2.0, 0.0))].into_iter().collect())
            .vehicles([Vehicle::new(VehicleId(3), small_model(0, 2.0, 0.0))])
            .build()
            .unwrap();
        assert_eq!(sim.models.len(), 1);
    }

    #[test]
    fn explicit_vehicles_register_their_models() {
        let sim = SimBuilder::new(test_config(10.0, 0, 1))
            .vehicles([Vehicle::new(VehicleId(0), small_model(7, 2.0, 0.0))])
            .build()
            .unwrap();
        assert!(sim.models.get(VehicleModelId(7)).is_some());
    }
}

// ── Step loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use approx::assert_relative_eq;
    use fleet_core::units::ConstZero;
    use fleet_core::{ChargingStationId, VehicleId};
    use fleet_vehicle::{Vehicle, VehicleStatus};

    use super::*;
    use crate::{NoopObserver, SimBuilder};

    #[test]
    fn coinciding_endurances_land_in_the_same_step() {
        // Alpha and Delta both endure 5/3 h, computed through different constants.
        let models = fleet_vehicle::sample_vehicle_models();
        let alpha = models.get(VehicleModelId(0)).unwrap().clone();
        let delta = models.get(VehicleModelId(3)).unwrap().clone();
        let config = SimConfig::new(fleet_core::units::hours(3.0), 0, 2, Some(7));
        let mut sim = SimBuilder::new(config)
            .vehicles([Vehicle::new(VehicleId(0), alpha), Vehicle::new(VehicleId(1), delta)])
            .build()
            .unwrap();

        sim.step().unwrap();
        for v in sim.vehicles.iter() {
            assert_eq!(v.battery(), Energy::ZERO);
            assert!(matches!(v.status(), VehicleStatus::WaitingToCharge(_)));
        }
        // The next transition is a full charge, not a leftover sliver of flight.
        assert!(sim.next_time_step() > secs(1.0));
    }

    #[test]
    fn fly_charge_fly_cycle() {
        let mut sim = SimBuilder::new(test_config(3.0, 0, 1))
            .vehicles([Vehicle::new(VehicleId(0), small_model(0, 2.0, 0.0))])
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);

        assert!(outcome.reached_target());
        // 2 s of flight to empty, then 1 s to full.
        assert_eq!(outcome.steps, 2);
        assert_relative_eq!(outcome.elapsed.get::<second>(), 3.0);

        let v = sim.vehicles.get(VehicleId(0)).unwrap();
        assert_eq!(v.status(), VehicleStatus::Flying);
        let stats = v.statistics();
        assert_eq!(stats.total_flight_count(), 2);
        assert_eq!(stats.total_charging_session_count(), 1);
        assert_relative_eq!(stats.total_flight_duration().get::<second>(), 2.0);
        assert_relative_eq!(stats.total_charging_duration().get::<second>(), 1.0);
        assert_relative_eq!(stats.mean_flight_duration().get::<second>(), 1.0);
    }

    #[test]
    fn unchargeable_fleet_stalls() {
        let mut sim = SimBuilder::new(test_config(10.0, 0, 1))
            .vehicles([Vehicle::new(VehicleId(0), small_model(0, 0.0, 0.0))])
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.stalled);
        assert!(!outcome.reached_target());
        assert_eq!(outcome.steps, 0);
        assert_eq!(outcome.elapsed, Time::ZERO);
    }

    #[test]
    fn zero_duration_takes_no_steps() {
        let mut sim = SimBuilder::new(test_config(0.0, 0, 1))
            .vehicles([Vehicle::new(VehicleId(0), small_model(0, 2.0, 0.0))])
            .build()
            .unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.reached_target());
        assert_eq!(outcome.steps, 0);
        assert!(sim.step().is_none());
    }

    #[test]
    fn empty_fleet_runs_in_one_step() {
        let mut sim = SimBuilder::new(test_config(5.0, 0, 2)).build().unwrap();
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.reached_target());
        assert_eq!(outcome.steps, 1);
    }

    #[test]
    fn first_in_queue_charges_first() {
        let model = small_model(0, 2.0, 0.0);
        let mut sim = SimBuilder::new(test_config(10.0, 0, 1))
            .vehicles([
                Vehicle::with_battery(VehicleId(0), model.clone(), Energy::ZERO),
                Vehicle::with_battery(VehicleId(1), model, Energy::ZERO),
            ])
            .build()
            .unwrap();

        let step = sim.step().unwrap();
        assert_relative_eq!(step.get::<second>(), 1.0);

        let first = sim.vehicles.get(VehicleId(0)).unwrap();
        let follower = sim.vehicles.get(VehicleId(1)).unwrap();
        assert_eq!(first.status(), VehicleStatus::Flying);
        assert_relative_eq!(first.battery().get::<joule>(), 2.0);
        assert_eq!(follower.status(), VehicleStatus::Charging(ChargingStationId(0)));
        assert_eq!(follower.battery(), Energy::ZERO);
        assert_eq!(follower.statistics().total_charging_duration(), Time::ZERO);
    }

    #[test]
    fn aggregates_by_model() {
        let shared = small_model(0, 2.0, 0.0);
        let other = small_model(1, 4.0, 0.0);
        let mut sim = SimBuilder::new(test_config(1.0, 0, 1))
            .vehicles([
                Vehicle::new(VehicleId(0), shared.clone()),
                Vehicle::new(VehicleId(1), shared),
                Vehicle::new(VehicleId(2), other),
            ])
            .build()
            .unwrap();
        sim.run(&mut NoopObserver);

        let agg = sim.aggregate_statistics();
        assert_eq!(agg.len(), 2);
        let shared = agg.get(VehicleModelId(0)).unwrap();
        assert_eq!(shared.total_flight_count(), 2);
        assert_relative_eq!(shared.total_flight_duration().get::<second>(), 2.0);
        assert_relative_eq!(shared.mean_flight_duration().get::<second>(), 1.0);
        assert_eq!(agg.get(VehicleModelId(1)).unwrap().total_flight_count(), 1);
    }
}

// ── Fleet-wide properties ─────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use fleet_core::units::{ConstZero, hours};
    use fleet_vehicle::{VehicleStatus, sample_vehicle_models};

    use super::*;
    use crate::{NoopObserver, Sim, SimBuilder};

    fn sample_sim(seed: u64) -> Sim {
        let config = SimConfig::new(hours(3.0), 20, 3, Some(seed));
        SimBuilder::new(config).models(sample_vehicle_models()).build().unwrap()
    }

    fn check_invariants(sim: &Sim) {
        for v in sim.vehicles.iter() {
            assert!(v.battery() >= Energy::ZERO, "{} below empty", v.id());
            assert!(v.battery() <= v.model().battery_capacity(), "{} above capacity", v.id());
            match v.status() {
                VehicleStatus::WaitingToCharge(id) | VehicleStatus::Charging(id) => {
                    assert!(sim.stations.get(id).unwrap().contains(v.id()));
                }
                VehicleStatus::OnStandby | VehicleStatus::Flying => assert_eq!(v.station(), None),
            }
        }
        for station in sim.stations.iter() {
            for (pos, id) in station.iter().enumerate() {
                let status = sim.vehicles.get(id).unwrap().status();
                match status {
                    VehicleStatus::Charging(s) => {
                        assert_eq!(pos, 0, "{id} charging behind the front");
                        assert_eq!(s, station.id());
                    }
                    VehicleStatus::WaitingToCharge(s) => assert_eq!(s, station.id()),
                    other => panic!("{id} queued at {} while {other}", station.id()),
                }
            }
        }
    }

    #[test]
    fn invariants_hold_every_step() {
        let mut sim = sample_sim(1);
        check_invariants(&sim);
        let mut steps = 0;
        while sim.step().is_some() {
            check_invariants(&sim);
            steps += 1;
        }
        assert!(steps > 0);
        assert!(sim.clock.reached(sim.config.duration));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let mut a = sample_sim(7);
        let mut b = sample_sim(7);
        let out_a = a.run(&mut NoopObserver);
        let out_b = b.run(&mut NoopObserver);
        assert_eq!(out_a, out_b);

        let agg_a = a.aggregate_statistics();
        let agg_b = b.aggregate_statistics();
        assert_eq!(agg_a.len(), agg_b.len());
        for ((ma, sa), (mb, sb)) in agg_a.iter().zip(agg_b.iter()) {
            assert_eq!(ma, mb);
            assert_eq!(sa, sb);
        }
    }

    #[test]
    fn sample_fleet_reaches_target() {
        let mut sim = sample_sim(3);
        let outcome = sim.run(&mut NoopObserver);
        assert!(outcome.reached_target());
        assert!(outcome.elapsed > Time::ZERO);
        let flights: u64 = sim
            .aggregate_statistics()
            .iter()
            .map(|(_, s)| s.total_flight_count())
            .sum();
        assert!(flights >= 20);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use fleet_charging::ChargingStations;
    use fleet_core::VehicleId;
    use fleet_vehicle::{Vehicle, Vehicles};

    use super::*;
    use crate::{RunOutcome, SimBuilder, SimObserver};

    #[derive(Default)]
    struct Recorder {
        starts:    Vec<u64>,
        ends:      Vec<u64>,
        snapshots: Vec<u64>,
        outcome:   Option<RunOutcome>,
    }

    impl SimObserver for Recorder {
        fn on_step_start(&mut self, step: u64, _elapsed: Time) {
            self.starts.push(step);
        }

        fn on_step_end(&mut self, step: u64, _elapsed: Time, _time_step: Time, _vehicles: &Vehicles) {
            self.ends.push(step);
        }

        fn on_snapshot(&mut self, step: u64, _elapsed: Time, _vehicles: &Vehicles, _stations: &ChargingStations) {
            self.snapshots.push(step);
        }

        fn on_sim_end(&mut self, outcome: &RunOutcome) {
            self.outcome = Some(*outcome);
        }
    }

    #[test]
    fn hooks_fire_per_step_and_interval() {
        // Fly 2 s, charge 1 s, fly 2 s, charge 1 s: four steps.
        let config = test_config(6.0, 0, 1).with_output_interval(2);
        let mut sim = SimBuilder::new(config)
            .vehicles([Vehicle::new(VehicleId(0), small_model(0, 2.0, 0.0))])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        let outcome = sim.run(&mut rec);

        assert_eq!(outcome.steps, 4);
        assert_eq!(rec.starts, [0, 1, 2, 3]);
        assert_eq!(rec.ends, [0, 1, 2, 3]);
        assert_eq!(rec.snapshots, [0, 2]);
        assert_eq!(rec.outcome, Some(outcome));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let config = test_config(3.0, 0, 1).with_output_interval(0);
        let mut sim = SimBuilder::new(config)
            .vehicles([Vehicle::new(VehicleId(0), small_model(0, 2.0, 0.0))])
            .build()
            .unwrap();
        let mut rec = Recorder::default();
        sim.run(&mut rec);
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.ends.len(), 2);
    }
}
