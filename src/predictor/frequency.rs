
use crate::history::MoveHistory;
use crate::moves::*;
use crate::predictor::Strategy;

#[derive(Clone, Copy, Debug)]
pub struct FrequencyConfig {
    /// Minimum history length before counting over the whole history.
    /// Below this, the opponent's last move is predicted.
    pub min_len: usize,
}
impl Default for FrequencyConfig {
    fn default() -> Self { Self { min_len: 3 } }
}
impl FrequencyConfig {
    pub fn build(self) -> FrequencyStrategy {
        FrequencyStrategy { cfg: self }
    }
}

/// Predict the opponent's most frequent move over their entire history.
pub struct FrequencyStrategy {
    cfg: FrequencyConfig,
}
impl Strategy for FrequencyStrategy {
    fn name(&self) -> &'static str { "Frequency" }

    fn predict(&self, history: &MoveHistory) -> Option<Move> {
        if history.len() < self.cfg.min_len {
            return history.last();
        }
        let counts: MoveCounts = history.iter().collect();
        Some(counts.most(Preference::SCISSORS_FIRST))
    }
}


#[derive(Clone, Copy, Debug)]
pub struct AntiFrequencyConfig {
    /// Minimum history length before making a prediction.
    pub min_len: usize,
    /// Number of recent moves considered.
    pub window: usize,
}
impl Default for AntiFrequencyConfig {
    fn default() -> Self { Self { min_len: 5, window: 10 } }
}
impl AntiFrequencyConfig {
    pub fn build(self) -> AntiFrequencyStrategy {
        AntiFrequencyStrategy { cfg: self }
    }
}

/// Predict that the opponent is "due" to play their rarest recent move.
pub struct AntiFrequencyStrategy {
    cfg: AntiFrequencyConfig,
}
impl Strategy for AntiFrequencyStrategy {
    fn name(&self) -> &'static str { "AntiFrequency" }

    fn predict(&self, history: &MoveHistory) -> Option<Move> {
        if history.len() < self.cfg.min_len {
            return None;
        }
        let counts: MoveCounts = history.recent(self.cfg.window).collect();
        Some(counts.least(Preference::ROCK_FIRST))
    }
}
