//! Combining the predictions of several strategies by weighted vote.

use log::trace;

use crate::history::MoveHistory;
use crate::moves::*;
use crate::predictor::*;

/// The number of votes given to each strategy's prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights {
    pub pattern: usize,
    pub markov: usize,
    pub frequency: usize,
    pub anti_frequency: usize,
    pub trend: usize,
}
impl Default for Weights {
    fn default() -> Self {
        Self { pattern: 3, markov: 2, frequency: 1, anti_frequency: 1, trend: 1 }
    }
}

#[derive(Clone, Debug)]
pub struct EnsembleConfig {
    /// The move played in the first round, before anything is known.
    pub opening: Move,
    pub weights: Weights,
    pub frequency: FrequencyConfig,
    pub pattern: PatternConfig,
    pub anti_frequency: AntiFrequencyConfig,
    pub markov: MarkovConfig,
    pub trend: TrendConfig,
}
impl Default for EnsembleConfig {
    fn default() -> Self {
        Self {
            opening: Move::Rock,
            weights: Weights::default(),
            frequency: FrequencyConfig::default(),
            pattern: PatternConfig::default(),
            anti_frequency: AntiFrequencyConfig::default(),
            markov: MarkovConfig::default(),
            trend: TrendConfig::default(),
        }
    }
}
impl EnsembleConfig {
    pub fn build(self) -> Ensemble {
        let w = self.weights;
        let members: Vec<Member> = vec![
            Member::new(self.pattern.build(), w.pattern),
            Member::new(self.markov.build(), w.markov),
            Member::new(self.frequency.build(), w.frequency),
            Member::new(self.anti_frequency.build(), w.anti_frequency),
            Member::new(self.trend.build(), w.trend),
        ];
        Ensemble { opening: self.opening, members }
    }
}

/// A [Strategy] along with the number of votes its prediction is worth.
pub struct Member {
    strategy: Box<dyn Strategy>,
    weight: usize,
}
impl Member {
    pub fn new(strategy: impl Strategy + 'static, weight: usize) -> Self {
        Self { strategy: Box::new(strategy), weight }
    }
}

/// A single strategy's contribution to a [Ballot].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vote {
    pub strategy: &'static str,
    pub weight: usize,
    /// The predicted move, or [None] if the strategy abstained.
    pub prediction: Option<Move>,
}

/// Every strategy's prediction for the next move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ballot {
    pub votes: Vec<Vote>,
}
impl Ballot {
    /// Return the vote cast by the strategy with the given name.
    pub fn get(&self, strategy: &str) -> Option<&Vote> {
        self.votes.iter().find(|v| v.strategy == strategy)
    }

    /// Return the combined prediction.
    pub fn winner(&self) -> Option<Move> {
        tally(self.votes.iter()
            .filter_map(|v| v.prediction.map(|m| (m, v.weight))))
    }
}

/// Tally weighted votes and return the move with the most votes.
///
/// Ties resolve with [Preference::SCISSORS_FIRST]: Rock needs a strict
/// majority over both other moves, and Paper needs to beat Scissors.
/// Returns [None] when no votes were cast.
pub fn tally(votes: impl IntoIterator<Item = (Move, usize)>) -> Option<Move> {
    let mut counts = MoveCounts::new();
    for (m, weight) in votes {
        counts.add(m, weight);
    }
    if counts.total() == 0 {
        return None;
    }
    Some(counts.most(Preference::SCISSORS_FIRST))
}

/// A weighted ensemble of strategies.
pub struct Ensemble {
    opening: Move,
    members: Vec<Member>,
}
impl Ensemble {
    pub fn opening(&self) -> Move { self.opening }

    /// Collect a prediction from every member.
    pub fn ballot(&self, history: &MoveHistory) -> Ballot {
        let votes = self.members.iter().map(|m| {
            let prediction = m.strategy.predict(history);
            trace!("{:>14}: {:?} (x{})", m.strategy.name(), prediction, m.weight);
            Vote { strategy: m.strategy.name(), weight: m.weight, prediction }
        }).collect();
        Ballot { votes }
    }

    /// Return the combined prediction for the opponent's next move.
    ///
    /// Falls back to the opponent's last move if no strategy voted, and
    /// returns [None] only when the history is empty.
    pub fn predict(&self, history: &MoveHistory) -> Option<Move> {
        self.ballot(history).winner().or_else(|| history.last())
    }
}
