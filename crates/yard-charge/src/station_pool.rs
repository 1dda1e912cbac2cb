//! `StationPool` — min-priority view of the charging stations.
//!
//! # Why this exists
//!
//! Each arriving vehicle needs the station that frees up first.  Scanning all
//! N stations per vehicle costs O(N·K) over a run; keeping stations in a
//! binary heap keyed by `(free_at, id)` makes every take and release
//! O(log N), so a run costs O(K log N).
//!
//! # Ordering
//!
//! The key is the composite `(free_at, StationId)`, so among stations free at
//! the same minute the lowest id always wins.  Allocation is therefore
//! deterministic no matter how the heap arranges equal-time entries.
//!
//! # Take/release discipline
//!
//! Every [`take_earliest`][StationPool::take_earliest] must be matched by
//! exactly one [`release`][StationPool::release] of the same station.  The
//! pool remembers which stations are out and rejects a release of anything
//! that is not, since a duplicated heap entry would silently corrupt every
//! later allocation.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use yard_core::{Minute, StationId, YardError, YardResult};

/// A station as seen at the moment it was taken from the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Station {
    pub id:      StationId,
    /// Earliest minute the station can start a new charge.
    pub free_at: Minute,
}

/// Heap of available stations plus a ledger of the ones currently taken.
#[derive(Debug)]
pub struct StationPool {
    heap:  BinaryHeap<Reverse<(Minute, StationId)>>,
    /// Indexed by `StationId::slot()`.  `Some(free_at)` while the station is
    /// out of the heap, holding the free-at it was taken with.
    taken: Vec<Option<Minute>>,
}

impl StationPool {
    /// Create `stations` stations with ids `1..=stations`, all free at minute 0.
    pub fn new(stations: u32) -> YardResult<Self> {
        if stations == 0 {
            return Err(YardError::InvalidInput("station pool needs at least one station".into()));
        }
        let heap = (1..=stations)
            .map(|id| Reverse((Minute::ZERO, StationId(id))))
            .collect();
        Ok(Self {
            heap,
            taken: vec![None; stations as usize],
        })
    }

    /// Remove and return the station with the smallest `(free_at, id)`.
    pub fn take_earliest(&mut self) -> YardResult<Station> {
        let Reverse((free_at, id)) = self.heap.pop().ok_or(YardError::EmptyPool)?;
        let slot = self
            .taken
            .get_mut(id.slot())
            .ok_or_else(|| YardError::ProtocolViolation(format!("{id} is not in this pool")))?;
        if slot.is_some() {
            return Err(YardError::ProtocolViolation(format!(
                "{id} was in the heap while marked taken"
            )));
        }
        *slot = Some(free_at);
        Ok(Station { id, free_at })
    }

    /// Return a taken station to the pool, free again from `free_at`.
    ///
    /// Fails with `ProtocolViolation` if `id` is unknown, is not currently
    /// taken, or if `free_at` is earlier than the free-at it was taken with
    /// (a station's free-at never moves backwards).
    pub fn release(&mut self, id: StationId, free_at: Minute) -> YardResult<()> {
        let slot = self
            .taken
            .get_mut(id.slot())
            .ok_or_else(|| YardError::ProtocolViolation(format!("{id} is not in this pool")))?;
        let Some(taken_at) = *slot else {
            return Err(YardError::ProtocolViolation(format!("{id} released while not taken")));
        };
        if free_at < taken_at {
            return Err(YardError::ProtocolViolation(format!(
                "{id} released at {free_at}, before its previous free-at {taken_at}"
            )));
        }
        *slot = None;
        self.heap.push(Reverse((free_at, id)));
        Ok(())
    }
}

// Inspection helpers for tests.
#[cfg(test)]
impl StationPool {
    /// The station `take_earliest` would return, without taking it.
    pub(crate) fn peek_earliest(&self) -> Option<Station> {
        self.heap
            .peek()
            .map(|&Reverse((free_at, id))| Station { id, free_at })
    }

    /// Total number of stations (N), taken or not.
    pub(crate) fn capacity(&self) -> usize {
        self.taken.len()
    }

    /// Stations currently in the heap.
    pub(crate) fn available(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// `true` if `id` is out of the pool awaiting release.
    pub(crate) fn is_taken(&self, id: StationId) -> bool {
        matches!(self.taken.get(id.slot()), Some(Some(_)))
    }

    /// Available stations in ascending id order.
    pub(crate) fn available_stations(&self) -> Vec<Station> {
        let mut stations: Vec<Station> = self
            .heap
            .iter()
            .map(|&Reverse((free_at, id))| Station { id, free_at })
            .collect();
        stations.sort_by_key(|s| s.id);
        stations
    }
}
