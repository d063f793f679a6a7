
use std::str::FromStr;
use crate::error::Error;

/// A move in a game of Rock-Paper-Scissors.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move { Rock = 0, Paper = 1, Scissors = 2 }
impl Move {
    pub const ALL: [Move; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Return the move that defeats this one.
    pub fn counter(self) -> Self {
        match self {
            Self::Rock => Self::Paper,
            Self::Paper => Self::Scissors,
            Self::Scissors => Self::Rock,
        }
    }

    /// Returns true when this move defeats 'other'.
    pub fn beats(self, other: Self) -> bool {
        other.counter() == self
    }

    /// The result of playing this move against 'other'.
    pub fn versus(self, other: Self) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats(other) {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    pub fn index(self) -> usize { self as usize }

    /// Convert from the 2-bit packed representation used by [MoveHistory].
    ///
    /// [MoveHistory]: crate::history::MoveHistory
    pub(crate) fn from_bits(bits: u8) -> Self {
        match bits {
            0 => Self::Rock,
            1 => Self::Paper,
            2 => Self::Scissors,
            _ => unreachable!("invalid packed move {:02b}", bits),
        }
    }

    pub fn letter(self) -> char {
        match self {
            Self::Rock => 'R',
            Self::Paper => 'P',
            Self::Scissors => 'S',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Move {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Self::Rock),
            'P' => Ok(Self::Paper),
            'S' => Ok(Self::Scissors),
            _ => Err(Error::InvalidMove(c.to_string())),
        }
    }
}

impl FromStr for Move {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "r" | "rock" => Ok(Self::Rock),
            "p" | "paper" => Ok(Self::Paper),
            "s" | "scissors" => Ok(Self::Scissors),
            _ => Err(Error::InvalidMove(s.to_string())),
        }
    }
}

/// The result of a single round, from the point of view of one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome { Win, Loss, Tie }


/// An explicit tie-break rule: when several moves share the extreme count,
/// the one listed first wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preference([Move; 3]);
impl Preference {
    /// Ties resolve toward Scissors, then Paper, then Rock.
    ///
    /// This is the order induced by the majority chain
    /// `r > p && r > s => Rock; p > s => Paper; else Scissors`: Rock is only
    /// chosen when it is the unique maximum.
    pub const SCISSORS_FIRST: Self = Self([Move::Scissors, Move::Paper, Move::Rock]);

    /// Ties resolve toward Rock, then Paper, then Scissors.
    pub const ROCK_FIRST: Self = Self([Move::Rock, Move::Paper, Move::Scissors]);

    pub fn new(order: [Move; 3]) -> Self { Self(order) }

    pub fn order(&self) -> &[Move; 3] { &self.0 }
}


/// The number of times each [Move] occurs in some sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveCounts([usize; 3]);
impl MoveCounts {
    pub fn new() -> Self { Self([0; 3]) }

    pub fn add(&mut self, m: Move, n: usize) {
        self.0[m.index()] += n;
    }

    pub fn get(&self, m: Move) -> usize { self.0[m.index()] }

    pub fn total(&self) -> usize { self.0.iter().sum() }

    /// Return the move with the highest count, resolving ties with 'pref'.
    pub fn most(&self, pref: Preference) -> Move {
        let max = self.0.iter().copied().max().unwrap_or(0);
        self.first_with(pref, max)
    }

    /// Return the move with the lowest count, resolving ties with 'pref'.
    pub fn least(&self, pref: Preference) -> Move {
        let min = self.0.iter().copied().min().unwrap_or(0);
        self.first_with(pref, min)
    }

    fn first_with(&self, pref: Preference, count: usize) -> Move {
        // Every preference lists all three moves, so one of them must hold
        // the extreme count.
        pref.order().iter().copied()
            .find(|m| self.get(*m) == count)
            .unwrap_or(pref.order()[0])
    }
}

impl FromIterator<Move> for MoveCounts {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut res = Self::new();
        for m in iter {
            res.add(m, 1);
        }
        res
    }
}
