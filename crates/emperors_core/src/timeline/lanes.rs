//! Greedy interval lane packing.
//!
//! # Responsibility
//! - Stack time intervals into display rows ("lanes") so that no two
//!   intervals sharing a lane overlap.
//!
//! # Invariants
//! - Input is stably sorted by start; equal starts keep input order.
//! - Each interval takes the lowest lane whose last occupant ended at or
//!   before its start. Touching intervals may share a lane.
//! - Lanes are dense from 0 and an assigned lane never changes.
//! - The same input always produces the same packing.

use serde::Serialize;

/// A closed time range that can be stacked into lanes.
pub trait Interval {
    type Point: Ord + Copy;

    fn start(&self) -> Self::Point;
    fn end(&self) -> Self::Point;
}

impl<P: Ord + Copy> Interval for (P, P) {
    type Point = P;

    fn start(&self) -> P {
        self.0
    }

    fn end(&self) -> P {
        self.1
    }
}

/// One packed item with its assigned lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Laned<T> {
    pub item: T,
    pub lane: usize,
}

/// Packing output in start order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanePacking<T> {
    pub items: Vec<Laned<T>>,
    /// Number of lanes in use; drives the vertical extent of a chart.
    pub total_lanes: usize,
}

impl<T> LanePacking<T> {
    /// Lane index of every item, in packed order.
    pub fn lanes(&self) -> Vec<usize> {
        self.items.iter().map(|laned| laned.lane).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sorts `items` by start and assigns each to the first free lane.
///
/// Runs in `O(n log n + n * L)` where `L` is the number of lanes.
pub fn pack_lanes<T, I>(items: I) -> LanePacking<T>
where
    T: Interval,
    I: IntoIterator<Item = T>,
{
    let mut sorted: Vec<T> = items.into_iter().collect();
    sorted.sort_by(|left, right| left.start().cmp(&right.start()));

    let mut lane_ends: Vec<T::Point> = Vec::new();
    let mut packed = Vec::with_capacity(sorted.len());
    for item in sorted {
        let start = item.start();
        let lane = match lane_ends.iter().position(|lane_end| *lane_end <= start) {
            Some(free) => {
                lane_ends[free] = item.end();
                free
            }
            None => {
                lane_ends.push(item.end());
                lane_ends.len() - 1
            }
        };
        packed.push(Laned { item, lane });
    }

    LanePacking {
        items: packed,
        total_lanes: lane_ends.len(),
    }
}
