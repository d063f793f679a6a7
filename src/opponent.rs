//! Simple opponents used to exercise a [Predictor].
//!
//! [Predictor]: crate::predictor::Predictor

use rand::prelude::*;

use crate::history::MoveHistory;
use crate::moves::*;

/// Interface to an opponent bot.
pub trait Opponent {
    fn name(&self) -> &'static str;

    /// Choose a move, given our move from the previous round ([None] in the
    /// first round).
    fn play(&mut self, previous: Option<Move>) -> Move;
}

/// An opponent with no state: always play the same move.
pub struct Constant(pub Move);
impl Opponent for Constant {
    fn name(&self) -> &'static str { "Constant" }
    fn play(&mut self, _: Option<Move>) -> Move { self.0 }
}

/// An opponent that repeats a fixed sequence of moves.
pub struct Cycle {
    pattern: Vec<Move>,
    idx: usize,
}
impl Cycle {
    pub fn new(pattern: &[Move]) -> Self {
        assert!(!pattern.is_empty());
        Self { pattern: pattern.to_vec(), idx: 0 }
    }
}
impl Opponent for Cycle {
    fn name(&self) -> &'static str { "Cycle" }
    fn play(&mut self, _: Option<Move>) -> Move {
        let res = self.pattern[self.idx % self.pattern.len()];
        self.idx += 1;
        res
    }
}

/// An opponent that plays uniformly at random.
pub struct Random {
    rng: StdRng,
}
impl Random {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}
impl Opponent for Random {
    fn name(&self) -> &'static str { "Random" }
    fn play(&mut self, _: Option<Move>) -> Move {
        *Move::ALL.choose(&mut self.rng).unwrap_or(&Move::Rock)
    }
}

/// An opponent that plays whatever beats our previous move.
pub struct Counter {
    opening: Move,
}
impl Counter {
    pub fn new(opening: Move) -> Self { Self { opening } }
}
impl Opponent for Counter {
    fn name(&self) -> &'static str { "Counter" }
    fn play(&mut self, previous: Option<Move>) -> Move {
        previous.map_or(self.opening, Move::counter)
    }
}

/// An opponent that counters our most frequent move over a window of
/// recent rounds.
pub struct FrequencyCounter {
    window: usize,
    seen: MoveHistory,
}
impl FrequencyCounter {
    pub fn new(window: usize) -> Self {
        Self { window, seen: MoveHistory::new() }
    }
}
impl Opponent for FrequencyCounter {
    fn name(&self) -> &'static str { "FrequencyCounter" }
    fn play(&mut self, previous: Option<Move>) -> Move {
        if let Some(m) = previous {
            self.seen.push(m);
        }
        let counts: MoveCounts = self.seen.recent(self.window).collect();
        counts.most(Preference::ROCK_FIRST).counter()
    }
}
