//! Unit tests for fleet-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ChargingStationId, VehicleId, VehicleModelId};

    #[test]
    fn index_roundtrip() {
        let id = VehicleId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(VehicleId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(ChargingStationId(0) < ChargingStationId(1));
        assert!(VehicleModelId(100) > VehicleModelId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(VehicleId::INVALID.0, u32::MAX);
        assert_eq!(VehicleModelId::default(), VehicleModelId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(VehicleId(7).to_string(), "VehicleId(7)");
        assert_eq!(ChargingStationId(2).to_string(), "ChargingStationId(2)");
    }
}

#[cfg(test)]
mod units {
    use approx::assert_relative_eq;
    use uom::si::energy::joule;
    use uom::si::force::newton;
    use uom::si::frequency::hertz;
    use uom::si::time::second;
    use uom::si::velocity::meter_per_second;

    use crate::units::*;

    #[test]
    fn catalog_units_convert_to_si() {
        assert_relative_eq!(hours(0.5).get::<second>(), 1_800.0);
        assert_relative_eq!(kilowatt_hours(1.0).get::<joule>(), 3.6e6);
        assert_relative_eq!(miles_per_hour(1.0).get::<meter_per_second>(), 0.44704, epsilon = 1e-9);
        assert_relative_eq!(per_hour(3_600.0).get::<hertz>(), 1.0);
    }

    #[test]
    fn energy_per_distance_is_joule_per_metre() {
        // 1 kWh / 1 mile = 3.6e6 J / 1609.344 m
        let c = kilowatt_hours_per_mile(1.0);
        assert_relative_eq!(c.get::<newton>(), 3.6e6 / 1_609.344, epsilon = 1e-6);
    }

    #[test]
    fn min_time_picks_smaller() {
        let a = Time::new::<second>(1.0);
        let b = Time::new::<second>(2.0);
        assert_eq!(min_time(a, b), a);
        assert_eq!(min_time(b, a), a);
    }

    #[test]
    fn non_negative_clamps() {
        assert_eq!(non_negative(Time::new::<second>(-3.0)), Time::ZERO);
        assert_eq!(non_negative(Time::new::<second>(f64::NAN)), Time::ZERO);
        assert_eq!(non_negative(Time::new::<second>(3.0)), Time::new::<second>(3.0));
    }
}

#[cfg(test)]
mod time {
    use approx::assert_relative_eq;
    use uom::si::time::{hour, second};

    use crate::units::{ConstZero, Time};
    use crate::{SimClock, SimConfig};

    #[test]
    fn clock_advance_accumulates() {
        let mut clock = SimClock::new();
        clock.advance(Time::new::<second>(1.5));
        clock.advance(Time::new::<second>(2.5));
        assert_relative_eq!(clock.elapsed.get::<second>(), 4.0);
        assert_eq!(clock.steps, 2);
    }

    #[test]
    fn clock_remaining_never_negative() {
        let mut clock = SimClock::new();
        let duration = Time::new::<second>(3.0);
        assert_relative_eq!(clock.remaining(duration).get::<second>(), 3.0);
        clock.advance(Time::new::<second>(5.0));
        assert_eq!(clock.remaining(duration), Time::ZERO);
        assert!(clock.reached(duration));
    }

    #[test]
    fn config_clamps_negative_duration() {
        let cfg = SimConfig::new(Time::new::<hour>(-1.0), 3, 1, None);
        assert_eq!(cfg.duration, Time::ZERO);
        assert_eq!(cfg.output_interval_steps, 1);
    }

    #[test]
    fn validate_rejects_hand_assembled_negative_duration() {
        let mut cfg = SimConfig::new(Time::new::<hour>(1.0), 1, 1, None);
        assert!(cfg.validate().is_ok());
        cfg.duration = Time::new::<second>(-1.0);
        assert!(matches!(cfg.validate(), Err(crate::FleetError::Config(_))));
        cfg.duration = Time::new::<second>(f64::NAN);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn config_keeps_counts_and_seed() {
        let cfg = SimConfig::new(Time::new::<hour>(3.0), 20, 3, Some(7)).with_output_interval(5);
        assert_relative_eq!(cfg.duration.get::<second>(), 10_800.0);
        assert_eq!((cfg.vehicle_count, cfg.charging_station_count), (20, 3));
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.output_interval_steps, 5);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.poisson(2.5), r2.poisson(2.5));
        }
    }

    #[test]
    fn poisson_zero_mean_is_zero() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.poisson(0.0), 0);
        assert_eq!(rng.poisson(-1.0), 0);
        assert_eq!(rng.poisson(f64::NAN), 0);
    }

    #[test]
    fn poisson_zero_mean_consumes_nothing() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        a.poisson(0.0);
        let pool: Vec<u32> = (0..1_000).collect();
        for _ in 0..10 {
            assert_eq!(a.choose(&pool), b.choose(&pool));
        }
    }

    #[test]
    fn poisson_sample_mean_is_close() {
        let mut rng = SimRng::new(1);
        let n = 20_000;
        let total: u64 = (0..n).map(|_| rng.poisson(3.0)).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 3.0).abs() < 0.1, "got {mean}");
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[5]), Some(&5));
    }
}
