//! Unit tests for yard-charge.

use yard_core::{Minute, StationId, VehicleId};

use crate::{ChargeNotifier, WaitSeverity};

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Arrival { vehicle: VehicleId, earliest_free_at: Minute, station: StationId, planned: u64 },
    Wait    { vehicle: VehicleId, wait_min: u64, severity: WaitSeverity },
    Start   { vehicle: VehicleId, start: Minute, station: StationId },
    End     { vehicle: VehicleId, end: Minute, station: StationId },
}

/// Notifier that records every callback in order.
#[derive(Default)]
struct Recorder {
    events: Vec<Event>,
}

impl ChargeNotifier for Recorder {
    fn on_arrival_processed(
        &mut self,
        vehicle:            VehicleId,
        _arrival:           Minute,
        _battery_pct:       u8,
        planned_charge_min: u64,
        earliest_free_at:   Minute,
        station:            StationId,
    ) {
        self.events.push(Event::Arrival { vehicle, earliest_free_at, station, planned: planned_charge_min });
    }

    fn on_wait_observed(&mut self, vehicle: VehicleId, wait_min: u64, _station: StationId, severity: WaitSeverity) {
        self.events.push(Event::Wait { vehicle, wait_min, severity });
    }

    fn on_charge_start(&mut self, vehicle: VehicleId, start: Minute, _charge_min: u64, station: StationId) {
        self.events.push(Event::Start { vehicle, start, station });
    }

    fn on_charge_end(&mut self, vehicle: VehicleId, end: Minute, station: StationId) {
        self.events.push(Event::End { vehicle, end, station });
    }
}

// ── ChargeDemand ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod demand_tests {
    use yard_core::YardError;

    use crate::ChargeDemand;

    #[test]
    fn unit_rate_is_exact() {
        let d = ChargeDemand::default();
        assert_eq!(d.minutes_to_full(10).unwrap(), 90);
        assert_eq!(d.minutes_to_full(90).unwrap(), 10);
        assert_eq!(d.minutes_to_full(0).unwrap(), 100);
    }

    #[test]
    fn full_battery_needs_no_time() {
        assert_eq!(ChargeDemand::default().minutes_to_full(100).unwrap(), 0);
        assert_eq!(ChargeDemand::new(7).unwrap().minutes_to_full(100).unwrap(), 0);
    }

    #[test]
    fn non_unit_rate_rounds_up() {
        let d = ChargeDemand::new(3).unwrap();
        assert_eq!(d.minutes_to_full(90).unwrap(), 4); // 10 / 3 → 4
        assert_eq!(d.minutes_to_full(91).unwrap(), 3); // 9 / 3 exact
        assert_eq!(d.minutes_to_full(99).unwrap(), 1);
    }

    #[test]
    fn battery_over_100_rejected() {
        let err = ChargeDemand::default().minutes_to_full(101).unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
    }

    #[test]
    fn zero_rate_rejected() {
        assert!(matches!(ChargeDemand::new(0), Err(YardError::InvalidInput(_))));
    }
}

// ── StationPool ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod pool_tests {
    use yard_core::{Minute, StationId, YardError};

    use crate::{Station, StationPool};

    #[test]
    fn zero_stations_rejected() {
        assert!(matches!(StationPool::new(0), Err(YardError::InvalidInput(_))));
    }

    #[test]
    fn fresh_pool_hands_out_lowest_id_first() {
        let mut pool = StationPool::new(3).unwrap();
        assert_eq!(pool.capacity(), 3);
        for id in 1..=3 {
            let s = pool.take_earliest().unwrap();
            assert_eq!(s, Station { id: StationId(id), free_at: Minute::ZERO });
        }
        assert!(pool.is_empty());
    }

    #[test]
    fn earliest_free_at_wins() {
        let mut pool = StationPool::new(2).unwrap();
        let a = pool.take_earliest().unwrap();
        let b = pool.take_earliest().unwrap();
        pool.release(a.id, Minute(30)).unwrap();
        pool.release(b.id, Minute(10)).unwrap();
        assert_eq!(pool.take_earliest().unwrap().id, StationId(2));
    }

    #[test]
    fn equal_free_at_breaks_tie_by_id() {
        let mut pool = StationPool::new(3).unwrap();
        let taken: Vec<_> = (0..3).map(|_| pool.take_earliest().unwrap()).collect();
        // Release in reverse id order; heap insertion order must not matter.
        for s in taken.iter().rev() {
            pool.release(s.id, Minute(10)).unwrap();
        }
        let order: Vec<u32> = (0..3).map(|_| pool.take_earliest().unwrap().id.0).collect();
        assert_eq!(order, [1, 2, 3]);
    }

    #[test]
    fn empty_pool_errors() {
        let mut pool = StationPool::new(1).unwrap();
        pool.take_earliest().unwrap();
        assert!(matches!(pool.take_earliest(), Err(YardError::EmptyPool)));
    }

    #[test]
    fn double_release_is_protocol_violation() {
        let mut pool = StationPool::new(2).unwrap();
        let s = pool.take_earliest().unwrap();
        pool.release(s.id, Minute(5)).unwrap();
        let err = pool.release(s.id, Minute(6)).unwrap_err();
        assert!(matches!(err, YardError::ProtocolViolation(_)));
        assert_eq!(pool.available(), 2);
    }

    #[test]
    fn release_of_never_taken_station_rejected() {
        let mut pool = StationPool::new(2).unwrap();
        assert!(matches!(pool.release(StationId(2), Minute(1)), Err(YardError::ProtocolViolation(_))));
    }

    #[test]
    fn release_of_unknown_station_rejected() {
        let mut pool = StationPool::new(2).unwrap();
        assert!(matches!(pool.release(StationId(9), Minute(1)), Err(YardError::ProtocolViolation(_))));
        assert!(matches!(pool.release(StationId(0), Minute(1)), Err(YardError::ProtocolViolation(_))));
    }

    #[test]
    fn free_at_never_moves_backwards() {
        let mut pool = StationPool::new(1).unwrap();
        let s = pool.take_earliest().unwrap();
        pool.release(s.id, Minute(20)).unwrap();
        let s = pool.take_earliest().unwrap();
        assert_eq!(s.free_at, Minute(20));
        assert!(matches!(pool.release(s.id, Minute(19)), Err(YardError::ProtocolViolation(_))));
        assert!(pool.is_taken(s.id));
        // Same minute is fine: a zero-length charge.
        pool.release(s.id, Minute(20)).unwrap();
        assert!(!pool.is_taken(s.id));
    }

    #[test]
    fn peek_matches_take() {
        let mut pool = StationPool::new(3).unwrap();
        let first = pool.take_earliest().unwrap();
        pool.release(first.id, Minute(4)).unwrap();
        let peeked = pool.peek_earliest().unwrap();
        assert_eq!(peeked, pool.take_earliest().unwrap());
        assert_eq!(peeked.id, StationId(2));
    }

    #[test]
    fn available_stations_sorted_by_id() {
        let mut pool = StationPool::new(3).unwrap();
        let s1 = pool.take_earliest().unwrap();
        pool.release(s1.id, Minute(50)).unwrap();
        let ids: Vec<u32> = pool.available_stations().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(pool.available_stations()[0].free_at, Minute(50));
    }
}

// ── ArrivalGenerator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_tests {
    use yard_core::{VehicleId, YardConfig, YardRng};

    use crate::ArrivalGenerator;

    #[test]
    fn default_ranges_respected() {
        let mut rng = YardRng::new(7);
        let arrivals = ArrivalGenerator::default().generate(500, &mut rng);
        assert_eq!(arrivals.len(), 500);
        for a in &arrivals {
            assert!(a.arrival.0 <= 20);
            assert!((10..=90).contains(&a.battery_pct));
        }
    }

    #[test]
    fn ids_follow_input_order() {
        let mut rng = YardRng::new(1);
        let arrivals = ArrivalGenerator::default().generate(5, &mut rng);
        let ids: Vec<VehicleId> = arrivals.iter().map(|a| a.vehicle).collect();
        assert_eq!(ids, (0..5).map(VehicleId).collect::<Vec<_>>());
    }

    #[test]
    fn same_seed_same_arrivals() {
        let g = ArrivalGenerator::default();
        let a = g.generate(20, &mut YardRng::new(99));
        let b = g.generate(20, &mut YardRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn from_config_uses_configured_ranges() {
        let cfg = YardConfig {
            arrival_window_min: 0,
            battery_min_pct:    100,
            battery_max_pct:    100,
            ..YardConfig::default()
        };
        let g = ArrivalGenerator::from_config(&cfg).unwrap();
        for a in g.generate(10, &mut YardRng::new(3)) {
            assert_eq!(a.arrival.0, 0);
            assert_eq!(a.battery_pct, 100);
        }
    }

    #[test]
    fn invalid_ranges_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let empty_window = 5..=4;
        assert!(ArrivalGenerator::new(empty_window, 10..=90).is_err());
        assert!(ArrivalGenerator::new(0..=20, 10..=101).is_err());
    }
}

// ── ChargingScheduler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use yard_core::{Minute, StationId, VehicleId, YardConfig, YardError};

    use super::{Event, Recorder};
    use crate::{
        ArrivalRecord, ChargeDemand, ChargingScheduler, NoopNotifier, StationPool, WaitSeverity,
    };

    #[test]
    fn single_station_sequential_scenario() {
        let arrivals = [
            ArrivalRecord::new(0, 0, 100),
            ArrivalRecord::new(1, 0, 90),
            ArrivalRecord::new(2, 0, 80),
        ];
        let results = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap();

        let charge: Vec<u64> = results.iter().map(|r| r.charge_min).collect();
        let starts: Vec<u64> = results.iter().map(|r| r.start.0).collect();
        let ends: Vec<u64> = results.iter().map(|r| r.end.0).collect();
        let waits: Vec<u64> = results.iter().map(|r| r.wait_min).collect();
        assert_eq!(charge, [0, 10, 20]);
        assert_eq!(starts, [0, 0, 10]);
        assert_eq!(ends, [0, 10, 30]);
        assert_eq!(waits, [0, 0, 10]);
        assert!(results.iter().all(|r| r.station == StationId(1)));
    }

    #[test]
    fn two_stations_simultaneous_scenario() {
        let arrivals = [ArrivalRecord::new(0, 5, 50), ArrivalRecord::new(1, 5, 50)];
        let results = ChargingScheduler::default().run(2, &arrivals, &mut NoopNotifier).unwrap();

        assert_eq!(results[0].station, StationId(1));
        assert_eq!(results[1].station, StationId(2));
        for r in &results {
            assert_eq!(r.charge_min, 50);
            assert_eq!(r.start, Minute(5));
            assert_eq!(r.wait_min, 0);
            assert_eq!(r.end, Minute(55));
        }
    }

    #[test]
    fn no_arrivals_no_events() {
        let mut rec = Recorder::default();
        let results = ChargingScheduler::default().run(1, &[], &mut rec).unwrap();
        assert!(results.is_empty());
        assert!(rec.events.is_empty());
    }

    #[test]
    fn zero_stations_rejected() {
        let arrivals = [ArrivalRecord::new(0, 0, 50)];
        let err = ChargingScheduler::default().run(0, &arrivals, &mut NoopNotifier).unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
    }

    #[test]
    fn full_battery_releases_station_instantly() {
        // Vehicle 0 is full; vehicle 1 arrives the same minute and must get
        // the same station with no wait.
        let arrivals = [ArrivalRecord::new(0, 3, 100), ArrivalRecord::new(1, 3, 60)];
        let results = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap();
        assert_eq!(results[0].charge_min, 0);
        assert_eq!(results[0].start, results[0].end);
        assert_eq!(results[0].start, Minute(3));
        assert_eq!(results[1].start, Minute(3));
        assert_eq!(results[1].wait_min, 0);
        assert_eq!(results[1].end, Minute(43));
    }

    #[test]
    fn arrival_ties_processed_in_input_order() {
        // Input order differs from vehicle-id order; ties must follow input order.
        let arrivals = [
            ArrivalRecord::new(2, 4, 90),
            ArrivalRecord::new(0, 4, 90),
            ArrivalRecord::new(1, 4, 90),
        ];
        let mut rec = Recorder::default();
        let results = ChargingScheduler::default().run(1, &arrivals, &mut rec).unwrap();

        let processed: Vec<VehicleId> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Start { vehicle, .. } => Some(*vehicle),
                _ => None,
            })
            .collect();
        assert_eq!(processed, [VehicleId(2), VehicleId(0), VehicleId(1)]);

        // Output is by vehicle id regardless.
        let ids: Vec<u32> = results.iter().map(|r| r.vehicle.0).collect();
        assert_eq!(ids, [0, 1, 2]);
        assert_eq!(results[2].start, Minute(4));
        assert_eq!(results[0].start, Minute(14));
        assert_eq!(results[1].start, Minute(24));
    }

    #[test]
    fn earlier_arrival_processed_first_regardless_of_index() {
        let arrivals = [ArrivalRecord::new(0, 10, 80), ArrivalRecord::new(1, 2, 80)];
        let results = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap();
        assert_eq!(results[1].start, Minute(2));
        assert_eq!(results[1].end, Minute(22));
        assert_eq!(results[0].start, Minute(22));
        assert_eq!(results[0].wait_min, 12);
    }

    #[test]
    fn events_emitted_in_order_per_vehicle() {
        let arrivals = [ArrivalRecord::new(0, 0, 90), ArrivalRecord::new(1, 1, 95)];
        let mut rec = Recorder::default();
        ChargingScheduler::default().run(1, &arrivals, &mut rec).unwrap();

        assert_eq!(rec.events, [
            Event::Arrival { vehicle: VehicleId(0), earliest_free_at: Minute(0), station: StationId(1), planned: 10 },
            Event::Wait    { vehicle: VehicleId(0), wait_min: 0, severity: WaitSeverity::Normal },
            Event::Start   { vehicle: VehicleId(0), start: Minute(0), station: StationId(1) },
            Event::End     { vehicle: VehicleId(0), end: Minute(10), station: StationId(1) },
            Event::Arrival { vehicle: VehicleId(1), earliest_free_at: Minute(10), station: StationId(1), planned: 5 },
            Event::Wait    { vehicle: VehicleId(1), wait_min: 9, severity: WaitSeverity::Normal },
            Event::Start   { vehicle: VehicleId(1), start: Minute(10), station: StationId(1) },
            Event::End     { vehicle: VehicleId(1), end: Minute(15), station: StationId(1) },
        ]);
    }

    #[test]
    fn wait_at_threshold_is_high() {
        let arrivals = [
            ArrivalRecord::new(0, 0, 86),  // charges 0..14
            ArrivalRecord::new(1, 0, 50),  // waits 14, charges 14..64
            ArrivalRecord::new(2, 49, 90), // waits 15
        ];
        let mut rec = Recorder::default();
        ChargingScheduler::default().run(1, &arrivals, &mut rec).unwrap();

        let waits: Vec<(u64, WaitSeverity)> = rec
            .events
            .iter()
            .filter_map(|e| match e {
                Event::Wait { wait_min, severity, .. } => Some((*wait_min, *severity)),
                _ => None,
            })
            .collect();
        assert_eq!(waits, [
            (0, WaitSeverity::Normal),
            (14, WaitSeverity::Normal),
            (15, WaitSeverity::High),
        ]);
    }

    #[test]
    fn custom_threshold_applies() {
        let arrivals = [ArrivalRecord::new(0, 0, 90), ArrivalRecord::new(1, 0, 90)];
        let scheduler = ChargingScheduler::default().with_wait_threshold(Minute(10));
        let mut rec = Recorder::default();
        scheduler.run(1, &arrivals, &mut rec).unwrap();
        assert!(rec.events.contains(&Event::Wait {
            vehicle:  VehicleId(1),
            wait_min: 10,
            severity: WaitSeverity::High,
        }));
    }

    #[test]
    fn invalid_battery_rejected_before_any_work() {
        let arrivals = [ArrivalRecord::new(0, 0, 50), ArrivalRecord::new(1, 0, 120)];
        let mut pool = StationPool::new(2).unwrap();
        let mut rec = Recorder::default();
        let err = ChargingScheduler::default()
            .schedule(&arrivals, &mut pool, &mut rec)
            .unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
        assert!(rec.events.is_empty());
        assert_eq!(pool.available(), 2);
        assert!(pool.available_stations().iter().all(|s| s.free_at == Minute::ZERO));
    }

    #[test]
    fn duplicate_vehicle_rejected() {
        let arrivals = [ArrivalRecord::new(3, 0, 50), ArrivalRecord::new(3, 1, 50)];
        let err = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
    }

    #[test]
    fn charge_ending_past_clock_rejected_before_any_work() {
        let arrivals = [ArrivalRecord::new(0, 0, 50), ArrivalRecord::new(1, u64::MAX - 5, 10)];
        let mut pool = StationPool::new(1).unwrap();
        let mut rec = Recorder::default();
        let err = ChargingScheduler::default()
            .schedule(&arrivals, &mut pool, &mut rec)
            .unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
        assert!(rec.events.is_empty());
        assert_eq!(pool.available_stations()[0].free_at, Minute::ZERO);
    }

    #[test]
    fn wait_pushing_end_past_clock_rejected() {
        // Each charge fits on its own; queued behind v0, v1 would end at MAX + 10.
        let arrivals = [
            ArrivalRecord::new(0, u64::MAX - 20, 90),
            ArrivalRecord::new(1, u64::MAX - 20, 80),
        ];
        let err = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap_err();
        assert!(matches!(err, YardError::InvalidInput(_)));
    }

    #[test]
    fn charge_ending_exactly_at_clock_limit_accepted() {
        let results = ChargingScheduler::default()
            .run(1, &[ArrivalRecord::new(0, u64::MAX - 90, 10)], &mut NoopNotifier)
            .unwrap();
        assert_eq!(results[0].end, Minute(u64::MAX));
    }

    #[test]
    fn drained_pool_is_protocol_violation() {
        let mut pool = StationPool::new(1).unwrap();
        pool.take_earliest().unwrap();
        let arrivals = [ArrivalRecord::new(0, 0, 50)];
        let err = ChargingScheduler::default()
            .schedule(&arrivals, &mut pool, &mut NoopNotifier)
            .unwrap_err();
        assert!(matches!(err, YardError::ProtocolViolation(_)));
    }

    #[test]
    fn pool_carries_state_across_schedule_calls() {
        let mut pool = StationPool::new(1).unwrap();
        let scheduler = ChargingScheduler::default();
        scheduler.schedule(&[ArrivalRecord::new(0, 0, 70)], &mut pool, &mut NoopNotifier).unwrap();
        let second = scheduler
            .schedule(&[ArrivalRecord::new(1, 5, 90)], &mut pool, &mut NoopNotifier)
            .unwrap();
        assert_eq!(second[0].start, Minute(30));
        assert_eq!(second[0].wait_min, 25);
    }

    #[test]
    fn non_unit_rate_from_config() {
        let cfg = YardConfig { charge_rate_pct_per_min: 3, wait_threshold_min: 5, ..YardConfig::default() };
        let scheduler = ChargingScheduler::from_config(&cfg).unwrap();
        assert_eq!(scheduler.demand(), ChargeDemand::new(3).unwrap());
        assert_eq!(scheduler.wait_threshold(), Minute(5));
        let results = scheduler.run(1, &[ArrivalRecord::new(0, 0, 90)], &mut NoopNotifier).unwrap();
        assert_eq!(results[0].charge_min, 4);
    }

    #[test]
    fn plan_jobs_orders_by_arrival_then_index() {
        let arrivals = [
            ArrivalRecord::new(0, 7, 50),
            ArrivalRecord::new(1, 3, 50),
            ArrivalRecord::new(2, 7, 50),
            ArrivalRecord::new(3, 3, 50),
        ];
        let jobs = ChargingScheduler::default().plan_jobs(&arrivals).unwrap();
        let order: Vec<usize> = jobs.iter().map(|j| j.input_index).collect();
        assert_eq!(order, [1, 3, 0, 2]);
    }
}

// ── Properties over random inputs ─────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use std::collections::BTreeMap;

    use yard_core::{StationId, YardRng};

    use crate::{
        ArrivalGenerator, ChargeResult, ChargeRun, ChargingScheduler, NoopNotifier, simulate_batch,
    };

    fn random_runs(count: u64) -> Vec<ChargeRun> {
        let generator = ArrivalGenerator::default();
        (0..count)
            .map(|seed| {
                let mut rng = YardRng::new(seed);
                let stations = rng.gen_range(1..=4u32);
                let vehicles = rng.gen_range(0..=30u32);
                ChargeRun { stations, arrivals: generator.generate(vehicles, &mut rng) }
            })
            .collect()
    }

    fn check_invariants(run: &ChargeRun, results: &[ChargeResult]) {
        // Conservation.
        assert_eq!(results.len(), run.arrivals.len());
        for r in results {
            assert!((1..=run.stations).contains(&r.station.0));
        }

        // Causality.
        for r in results {
            assert!(r.start >= r.arrival);
            assert_eq!(r.wait_min, r.start - r.arrival);
            assert_eq!(r.start.checked_add(r.charge_min), Some(r.end));
        }

        // Non-overlap per station.
        let mut by_station: BTreeMap<StationId, Vec<&ChargeResult>> = BTreeMap::new();
        for r in results {
            by_station.entry(r.station).or_default().push(r);
        }
        for jobs in by_station.values_mut() {
            jobs.sort_by_key(|r| (r.start, r.end));
            for pair in jobs.windows(2) {
                assert!(pair[1].start >= pair[0].end, "{} overlaps {}", pair[0], pair[1]);
            }
        }

        // Output order.
        assert!(results.windows(2).all(|w| w[0].vehicle < w[1].vehicle));
    }

    #[test]
    fn invariants_hold_over_random_runs() {
        let scheduler = ChargingScheduler::default();
        for run in random_runs(200) {
            let results = scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier).unwrap();
            check_invariants(&run, &results);
        }
    }

    #[test]
    fn identical_inputs_identical_results() {
        let scheduler = ChargingScheduler::default();
        for run in random_runs(50) {
            let a = scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier).unwrap();
            let b = scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn batch_matches_individual_runs() {
        let scheduler = ChargingScheduler::default();
        let runs = random_runs(25);
        let batch = simulate_batch(&scheduler, &runs);
        assert_eq!(batch.len(), runs.len());
        for (run, got) in runs.iter().zip(batch) {
            let expected = scheduler.run(run.stations, &run.arrivals, &mut NoopNotifier).unwrap();
            assert_eq!(got.unwrap(), expected);
        }
    }

    #[test]
    fn batch_reports_errors_per_run() {
        let scheduler = ChargingScheduler::default();
        let runs = vec![
            ChargeRun { stations: 0, arrivals: vec![] },
            ChargeRun { stations: 1, arrivals: vec![] },
        ];
        let batch = simulate_batch(&scheduler, &runs);
        assert!(batch[0].is_err());
        assert!(batch[1].as_ref().unwrap().is_empty());
    }
}

// ── ChargeSummary ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod summary_tests {
    use yard_core::{Minute, StationId};

    use crate::{ArrivalRecord, ChargeSummary, ChargingScheduler, NoopNotifier};

    #[test]
    fn summary_of_sequential_scenario() {
        let arrivals = [
            ArrivalRecord::new(0, 0, 100),
            ArrivalRecord::new(1, 0, 90),
            ArrivalRecord::new(2, 0, 80),
        ];
        let results = ChargingScheduler::default().run(2, &arrivals, &mut NoopNotifier).unwrap();
        // v0 frees station 1 instantly, so v1 takes it again (0..10) and v2
        // goes to station 2 (0..20).
        let summary = ChargeSummary::from_results(&results, 2, Minute(15));
        assert_eq!(summary.vehicles, 3);
        assert_eq!(summary.total_wait_min, 0);
        assert_eq!(summary.max_wait_min, 0);
        assert_eq!(summary.high_waits, 0);
        assert_eq!(summary.makespan, Minute(20));
        assert_eq!(summary.stations.len(), 2);
        assert_eq!(summary.stations[0].station, StationId(1));
        assert_eq!(summary.stations[0].jobs, 2);
        assert_eq!(summary.stations[0].busy_min, 10);
        assert_eq!(summary.stations[1].jobs, 1);
        assert_eq!(results[2].station, StationId(2));
        assert!((summary.stations[0].utilization - 0.5).abs() < 1e-9);
        assert!((summary.stations[1].utilization - 1.0).abs() < 1e-9);
    }

    #[test]
    fn summary_counts_high_waits() {
        let arrivals = [ArrivalRecord::new(0, 0, 70), ArrivalRecord::new(1, 0, 70)];
        let results = ChargingScheduler::default().run(1, &arrivals, &mut NoopNotifier).unwrap();
        let summary = ChargeSummary::from_results(&results, 1, Minute(15));
        assert_eq!(summary.max_wait_min, 30);
        assert_eq!(summary.high_waits, 1);
        assert!((summary.mean_wait_min - 15.0).abs() < 1e-9);
    }

    #[test]
    fn empty_summary() {
        let summary = ChargeSummary::from_results(&[], 3, Minute(15));
        assert_eq!(summary.vehicles, 0);
        assert_eq!(summary.mean_wait_min, 0.0);
        assert_eq!(summary.makespan, Minute::ZERO);
        assert_eq!(summary.stations.len(), 3);
        assert!(summary.stations.iter().all(|s| s.jobs == 0 && s.utilization == 0.0));
    }
}
