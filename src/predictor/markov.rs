
use itertools::Itertools;

use crate::history::MoveHistory;
use crate::moves::*;
use crate::predictor::Strategy;

#[derive(Clone, Copy, Debug)]
pub struct MarkovConfig {
    /// Minimum history length before making a prediction.
    pub min_len: usize,
}
impl Default for MarkovConfig {
    fn default() -> Self { Self { min_len: 2 } }
}
impl MarkovConfig {
    pub fn build(self) -> MarkovStrategy {
        MarkovStrategy { cfg: self }
    }
}

/// Counts of observed transitions between consecutive moves.
/// Row 'i' holds the moves that followed [Move] 'i'.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransitionTable([MoveCounts; 3]);
impl TransitionTable {
    pub fn new(history: &MoveHistory) -> Self {
        let mut res = Self::default();
        for (cur, next) in history.iter().tuple_windows() {
            res.0[cur.index()].add(next, 1);
        }
        res
    }

    /// Return the counts of moves observed after 'm'.
    pub fn row(&self, m: Move) -> &MoveCounts {
        &self.0[m.index()]
    }
}

/// An order-1 Markov chain over the opponent's moves: predict the move that
/// most often followed their last one.
pub struct MarkovStrategy {
    cfg: MarkovConfig,
}
impl Strategy for MarkovStrategy {
    fn name(&self) -> &'static str { "Markov" }

    fn predict(&self, history: &MoveHistory) -> Option<Move> {
        if history.len() < self.cfg.min_len {
            return None;
        }
        let last = history.last()?;
        let table = TransitionTable::new(history);
        let row = table.row(last);
        if row.total() == 0 {
            return None;
        }
        Some(row.most(Preference::ROCK_FIRST))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use Move::*;

    fn history(moves: &[Move]) -> MoveHistory {
        moves.iter().copied().collect()
    }

    #[test]
    fn transition_counts() {
        let t = TransitionTable::new(&history(&[Rock, Paper, Rock, Paper, Paper]));
        assert_eq!(t.row(Rock).get(Paper), 2);
        assert_eq!(t.row(Paper).get(Rock), 1);
        assert_eq!(t.row(Paper).get(Paper), 1);
        assert_eq!(t.row(Scissors).total(), 0);
    }

    #[test]
    fn predicts_most_common_successor() {
        let s = MarkovConfig::default().build();
        assert_eq!(s.predict(&history(&[Rock])), None);
        assert_eq!(s.predict(&history(&[Rock, Paper, Rock, Paper])), Some(Rock));
        assert_eq!(s.predict(&history(&[Scissors, Rock, Scissors, Rock, Scissors])), Some(Rock));
    }

    #[test]
    fn abstains_on_unseen_row() {
        let s = MarkovConfig::default().build();
        // Scissors has never been followed by anything.
        assert_eq!(s.predict(&history(&[Rock, Paper, Scissors])), None);
    }

    #[test]
    fn ties_prefer_rock() {
        let s = MarkovConfig::default().build();
        // Paper was followed by Scissors once and Rock once.
        let h = history(&[Paper, Scissors, Paper, Rock, Paper]);
        assert_eq!(s.predict(&h), Some(Rock));
        // Paper was followed by Scissors once and Paper once.
        let h = history(&[Paper, Scissors, Paper, Paper]);
        assert_eq!(s.predict(&h), Some(Paper));
    }
}
