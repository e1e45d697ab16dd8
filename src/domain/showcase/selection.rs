// SPDX-License-Identifier: MPL-2.0
//! Selection state: the `(active, previous)` pair and its derived direction.

use super::record::TabId;
use std::cmp::Ordering;

/// Sign of the index delta between the active and previous record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Active record sits before the previous one (moving up).
    Backward,
    /// Same record, no movement.
    Still,
    /// Active record sits after the previous one (moving down).
    Forward,
}

impl Direction {
    /// Direction of travel from `previous` to `active` declaration index.
    #[must_use]
    pub fn between(previous: usize, active: usize) -> Self {
        match active.cmp(&previous) {
            Ordering::Greater => Direction::Forward,
            Ordering::Less => Direction::Backward,
            Ordering::Equal => Direction::Still,
        }
    }

    /// `1`, `0` or `-1`.
    #[must_use]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Still => 0.0,
            Direction::Backward => -1.0,
        }
    }
}

/// The widget's only mutable state.
///
/// Ids and their declaration indices are replaced together by
/// [`SelectionState::advance`], so no reader ever observes a half-updated
/// pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    active: TabId,
    previous: TabId,
    active_index: usize,
    previous_index: usize,
    generation: u64,
}

impl SelectionState {
    /// Initial state: `active = previous = id`.
    pub(super) fn initial(id: TabId, index: usize) -> Self {
        Self {
            active: id.clone(),
            previous: id,
            active_index: index,
            previous_index: index,
            generation: 0,
        }
    }

    /// Moves `active` into `previous`, then installs the target.
    pub(super) fn advance(&mut self, target: TabId, target_index: usize) {
        self.previous = std::mem::replace(&mut self.active, target);
        self.previous_index = std::mem::replace(&mut self.active_index, target_index);
        self.generation += 1;
    }

    #[must_use]
    pub fn active(&self) -> &TabId {
        &self.active
    }

    #[must_use]
    pub fn previous(&self) -> &TabId {
        &self.previous
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Number of transitions applied so far. Presentation keys in-flight
    /// animations on it.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::between(self.previous_index, self.active_index)
    }
}

/// Record of one applied `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub from: TabId,
    pub to: TabId,
    pub direction: Direction,
    pub generation: u64,
}
