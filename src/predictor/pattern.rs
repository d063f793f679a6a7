
use std::ops::RangeInclusive;
use log::trace;

use crate::history::MoveHistory;
use crate::moves::Move;
use crate::predictor::Strategy;

#[derive(Clone, Debug)]
pub struct PatternConfig {
    /// Minimum history length before searching for patterns.
    pub min_len: usize,
    /// Pattern lengths to try, shortest first.
    pub lengths: RangeInclusive<usize>,
}
impl Default for PatternConfig {
    fn default() -> Self { Self { min_len: 10, lengths: 3..=5 } }
}
impl PatternConfig {
    pub fn build(self) -> PatternStrategy {
        PatternStrategy { cfg: self }
    }
}

/// Look for an earlier occurrence of the opponent's most recent moves, and
/// predict whatever followed it.
pub struct PatternStrategy {
    cfg: PatternConfig,
}
impl PatternStrategy {
    /// Search for the trailing 'len' moves earlier in the history.
    /// Returns the move that followed the earliest occurrence.
    ///
    /// NOTE: Candidate start positions stop at `history.len() - len - 2`,
    /// one short of the latest position that could still be followed by a
    /// move, so an occurrence starting at `history.len() - len - 1` is never
    /// considered. This is probably an off-by-one, but changing it changes
    /// which moves get predicted.
    fn search(history: &MoveHistory, len: usize) -> Option<Move> {
        let n = history.len();
        let recent = history.span(n - len, len);
        let num_candidates = n.checked_sub(len + 1)?;
        (0..num_candidates)
            .find(|&i| history.span(i, len) == recent)
            .and_then(|i| {
                trace!("pattern of length {} at {} matches the last {} moves",
                    len, i, len);
                history.get(i + len)
            })
    }
}
impl Strategy for PatternStrategy {
    fn name(&self) -> &'static str { "Pattern" }

    fn predict(&self, history: &MoveHistory) -> Option<Move> {
        if history.len() < self.cfg.min_len {
            return None;
        }
        self.cfg.lengths.clone()
            .take_while(|len| *len < history.len())
            .find_map(|len| Self::search(history, len))
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
    fn needs_ten_moves() {
        let s = PatternConfig::default().build();
        let h = history(&[Rock, Paper, Scissors, Rock, Paper, Scissors, Rock, Paper, Scissors]);
        assert_eq!(s.predict(&h), None);
    }

    #[test]
    fn finds_repeated_cycle() {
        let s = PatternConfig::default().build();
        // The trailing "P S R" first occurs at positions 1-3, followed by P.
        let h = history(&[
            Rock, Paper, Scissors, Rock, Paper, Scissors, Rock, Paper, Scissors, Rock
        ]);
        assert_eq!(s.predict(&h), Some(Paper));
    }

    #[test]
    fn abstains_without_repeats() {
        let s = PatternConfig::default().build();
        let h = history(&[
            Rock, Rock, Rock, Paper, Paper, Paper, Scissors, Scissors, Scissors, Rock
        ]);
        assert_eq!(s.predict(&h), None);
    }

    #[test]
    fn custom_pattern_lengths() {
        let s = PatternConfig { min_len: 10, lengths: 4..=5 }.build();
        let h = history(&[
            Scissors, Rock, Paper, Paper, Rock, Scissors, Rock,
            Paper, Paper, Scissors, Rock, Paper, Paper
        ]);
        // "S R P P" at 0-3 matches the last four moves.
        assert_eq!(s.predict(&h), Some(Rock));
    }

    #[test]
    fn skips_last_candidate_position() {
        let s = PatternConfig::default().build();
        // "R R R" at 6-8 is followed by a move, but the search stops at 5.
        let h = history(&[
            Paper, Scissors, Paper, Scissors, Paper, Scissors, Rock, Rock, Rock, Rock
        ]);
        assert_eq!(s.predict(&h), None);
    }
}
