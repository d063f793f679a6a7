
use bitvec::prelude::*;
use crate::moves::Move;

/// Number of bits used to store a single [Move].
const MOVE_BITS: usize = 2;

/// The append-only record of every move made by an opponent, oldest first.
///
/// Moves are packed into a bit vector, two bits per move.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveHistory {
    data: BitVec<usize, Lsb0>,
}

// Prints the moves oldest-first, e.g. "RPSR".
impl std::fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let x: String = self.iter().map(|m| m.letter()).collect();
        write!(f, "{}", x)
    }
}

impl MoveHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self { data: BitVec::new() }
    }

    /// Returns the number of recorded moves.
    pub fn len(&self) -> usize { self.data.len() / MOVE_BITS }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    /// Append a move.
    pub fn push(&mut self, m: Move) {
        let bits = m as u8;
        self.data.extend_from_bitslice(&bits.view_bits::<Lsb0>()[..MOVE_BITS]);
    }

    /// Return the move at index 'idx'.
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx >= self.len() {
            return None;
        }
        Some(Move::from_bits(self.span(idx, 1).load_le::<u8>()))
    }

    /// Return the most recent move.
    pub fn last(&self) -> Option<Move> {
        self.len().checked_sub(1).and_then(|idx| self.get(idx))
    }

    /// Iterate over all moves, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        self.data.chunks_exact(MOVE_BITS)
            .map(|c| Move::from_bits(c.load_le::<u8>()))
    }

    /// Iterate over the last 'n' moves (or every move, if there are fewer
    /// than 'n'), oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = Move> + '_ {
        self.iter().skip(self.len().saturating_sub(n))
    }

    /// Return the packed bits for the 'len' moves starting at 'start'.
    ///
    /// Two spans are equal exactly when they hold the same sequence of moves.
    pub fn span(&self, start: usize, len: usize) -> &BitSlice<usize, Lsb0> {
        &self.data[start * MOVE_BITS..(start + len) * MOVE_BITS]
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut res = Self::new();
        for m in iter {
            res.push(m);
        }
        res
    }
}

impl Extend<Move> for MoveHistory {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for m in iter {
            self.push(m);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use Move::*;

    #[test]
    fn push_and_read_back() {
        let mut h = MoveHistory::new();
        assert!(h.is_empty());
        assert_eq!(h.last(), None);

        h.push(Scissors);
        h.push(Rock);
        h.push(Paper);
        assert_eq!(h.len(), 3);
        assert_eq!(h.get(0), Some(Scissors));
        assert_eq!(h.get(2), Some(Paper));
        assert_eq!(h.get(3), None);
        assert_eq!(h.last(), Some(Paper));
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![Scissors, Rock, Paper]);
        assert_eq!(h.to_string(), "SRP");
    }

    #[test]
    fn repeated_moves_are_separate_entries() {
        let mut h = MoveHistory::new();
        h.push(Rock);
        h.push(Rock);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn recent_window() {
        let h: MoveHistory = [Rock, Paper, Scissors, Rock].into_iter().collect();
        assert_eq!(h.recent(2).collect::<Vec<_>>(), vec![Scissors, Rock]);
        assert_eq!(h.recent(10).count(), 4);
    }

    #[test]
    fn spans_compare_by_moves() {
        let h: MoveHistory = [Rock, Paper, Scissors, Rock, Paper, Rock]
            .into_iter().collect();
        assert_eq!(h.span(0, 2), h.span(3, 2));
        assert_ne!(h.span(0, 3), h.span(3, 3));
    }
}
