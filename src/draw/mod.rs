//! Round assignment allocation.
//!
//! Assigns competitors to judges with a randomized, capacity-bounded
//! greedy rule: shuffle the competitors, then hand each one to the
//! least-loaded judge that still has room.
//!
//! # Usage
//!
//! ```
//! use rounddraw::draw::DrawEngine;
//! use rounddraw::models::{Competitor, Judge};
//!
//! let competitors = vec![Competitor::new("alice"), Competitor::new("bob")];
//! let judges = vec![Judge::new("erin", "101")];
//!
//! let assignments = DrawEngine::new().draw(&competitors, &judges).unwrap();
//! assert_eq!(assignments[0].competitor_count(), 2);
//! ```

mod engine;

pub use engine::{DrawEngine, DrawError, TieBreak};

/// Default per-judge capacity for one round.
pub const DEFAULT_CAPACITY: usize = 7;
