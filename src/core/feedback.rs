//! Per-letter feedback symbols
//!
//! A game reports each guess as a string with one symbol per board position:
//! - `*` = exact match (right letter, right position)
//! - `.` = present but misplaced
//! - `_` = absent from the secret

/// Feedback for a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is in the secret at this position
    Exact,
    /// Letter is in the secret, but somewhere else
    Misplaced,
    /// Letter is not in the secret
    Absent,
}

impl Feedback {
    /// Symbol for exact matches
    pub const EXACT: char = '*';
    /// Symbol for misplaced letters
    pub const MISPLACED: char = '.';
    /// Symbol for absent letters
    pub const ABSENT: char = '_';

    /// Interpret a result symbol
    ///
    /// Anything that is not `*` or `.` reads as absent.
    #[inline]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Self {
        match symbol {
            Self::EXACT => Self::Exact,
            Self::MISPLACED => Self::Misplaced,
            _ => Self::Absent,
        }
    }

    /// The symbol a game uses for this feedback
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => Self::EXACT,
            Self::Misplaced => Self::MISPLACED,
            Self::Absent => Self::ABSENT,
        }
    }
}

/// Render feedback as a result string, e.g. `*_.__`
#[must_use]
pub fn render(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.symbol()).collect()
}
