//! Allocation engine.
//!
//! # Algorithm
//!
//! 1. Shuffle the selected competitors (uniform, unseeded in production).
//! 2. Hand each competitor to the judge with the fewest assignments among
//!    those still under capacity; stop once every judge is full.
//! 3. Emit one record per judge, in selection order.
//!
//! # Complexity
//! O(n * m) where n=competitors, m=judges. Rosters are small, so no
//! attempt is made at anything smarter than the greedy pass.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;
use tracing::warn;

use super::DEFAULT_CAPACITY;
use crate::models::{Assignment, Competitor, Judge};

/// How least-loaded ties are broken.
///
/// The competitor shuffle is the only source of randomness; tie-breaking
/// stays deterministic so identical shuffles give identical results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Earliest judge in the selection list wins (default).
    #[default]
    RegistrationOrder,
    /// Lexicographically smallest judge name wins.
    ByName,
}

/// Errors from a draw.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("no competitors selected")]
    NoCompetitors,
    #[error("no judges selected")]
    NoJudges,
}

/// Capacity-bounded greedy allocator.
///
/// Every selected competitor is assigned to exactly one judge, subject to
/// the per-judge capacity (default 7). The least-loaded rule approximates
/// an even spread without global optimization. If the selection exceeds
/// total capacity, the excess competitors are left unassigned and a
/// warning is logged; this mirrors long-standing behavior and is not an
/// error.
///
/// # Example
///
/// ```
/// use rounddraw::draw::{DrawEngine, TieBreak};
/// use rounddraw::models::{Competitor, Judge};
///
/// let engine = DrawEngine::new()
///     .with_capacity(5)
///     .with_tie_break(TieBreak::ByName);
///
/// let competitors = vec![Competitor::new("alice")];
/// let judges = vec![Judge::new("erin", "101"), Judge::new("frank", "202")];
/// let assignments = engine.draw(&competitors, &judges).unwrap();
/// assert_eq!(assignments.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DrawEngine {
    capacity: usize,
    tie_break: TieBreak,
}

impl DrawEngine {
    /// Creates an engine with the default capacity and tie-break.
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            tie_break: TieBreak::default(),
        }
    }

    /// Sets the per-judge capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the tie-break rule.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Runs a draw with a fresh thread-local RNG.
    ///
    /// Each call shuffles independently, so repeated draws over the same
    /// selection produce different orderings.
    pub fn draw(
        &self,
        competitors: &[Competitor],
        judges: &[Judge],
    ) -> Result<Vec<Assignment>, DrawError> {
        self.draw_with_rng(competitors, judges, &mut rand::rng())
    }

    /// Runs a draw with a caller-supplied RNG.
    ///
    /// Seed the RNG to make the shuffle, and therefore the whole draw,
    /// reproducible.
    pub fn draw_with_rng<R: Rng + ?Sized>(
        &self,
        competitors: &[Competitor],
        judges: &[Judge],
        rng: &mut R,
    ) -> Result<Vec<Assignment>, DrawError> {
        if competitors.is_empty() {
            return Err(DrawError::NoCompetitors);
        }
        if judges.is_empty() {
            return Err(DrawError::NoJudges);
        }

        let mut order: Vec<usize> = (0..competitors.len()).collect();
        order.shuffle(rng);

        // panels[j] holds indices into `competitors`, in assignment order
        let mut panels: Vec<Vec<usize>> = vec![Vec::new(); judges.len()];

        for (placed, &competitor_idx) in order.iter().enumerate() {
            match self.pick_judge(&panels, judges) {
                Some(judge_idx) => panels[judge_idx].push(competitor_idx),
                None => {
                    let dropped = order.len() - placed;
                    warn!(
                        dropped,
                        capacity = self.capacity,
                        judges = judges.len(),
                        "selection exceeds total judge capacity; remaining competitors left unassigned"
                    );
                    break;
                }
            }
        }

        let assignments = judges
            .iter()
            .zip(panels)
            .map(|(judge, panel)| {
                Assignment::new(
                    judge.display_name(),
                    judge.room.clone(),
                    panel
                        .into_iter()
                        .map(|i| competitors[i].display_name())
                        .collect(),
                )
            })
            .collect();

        Ok(assignments)
    }

    /// Picks the least-loaded judge still under capacity, or `None` if
    /// everyone is full.
    fn pick_judge(&self, panels: &[Vec<usize>], judges: &[Judge]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (idx, panel) in panels.iter().enumerate() {
            if panel.len() >= self.capacity {
                continue;
            }
            best = match best {
                None => Some(idx),
                Some(incumbent) => {
                    if self.beats(idx, incumbent, panels, judges) {
                        Some(idx)
                    } else {
                        Some(incumbent)
                    }
                }
            };
        }
        best
    }

    fn beats(
        &self,
        challenger: usize,
        incumbent: usize,
        panels: &[Vec<usize>],
        judges: &[Judge],
    ) -> bool {
        match panels[challenger].len().cmp(&panels[incumbent].len()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match self.tie_break {
                // iteration runs in selection order, so first-seen wins
                TieBreak::RegistrationOrder => false,
                TieBreak::ByName => judges[challenger].name < judges[incumbent].name,
            },
        }
    }
}

impl Default for DrawEngine {
    fn default() -> Self {
        Self::new()
    }
}
