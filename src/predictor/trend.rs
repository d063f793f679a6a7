
use crate::history::MoveHistory;
use crate::moves::*;
use crate::predictor::Strategy;

#[derive(Clone, Copy, Debug)]
pub struct TrendConfig {
    /// Number of recent moves considered. No prediction is made until the
    /// history holds at least this many.
    pub window: usize,
}
impl Default for TrendConfig {
    fn default() -> Self { Self { window: 5 } }
}
impl TrendConfig {
    pub fn build(self) -> TrendStrategy {
        TrendStrategy { cfg: self }
    }
}

/// Predict the opponent's most frequent move over a short recent window.
pub struct TrendStrategy {
    cfg: TrendConfig,
}
impl Strategy for TrendStrategy {
    fn name(&self) -> &'static str { "Trend" }

    fn predict(&self, history: &MoveHistory) -> Option<Move> {
        if history.len() < self.cfg.window {
            return None;
        }
        let counts: MoveCounts = history.recent(self.cfg.window).collect();
        Some(counts.most(Preference::SCISSORS_FIRST))
    }
}
