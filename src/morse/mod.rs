//! Morse signal decoding and the text-entry state machine.

pub mod state;
pub mod table;


pub use state::{SessionState, Text};
pub use table::{lookup, resolve};

/// A single dot or dash input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Signal {
    Dot,
    Dash,
}

impl Signal {
    pub const fn as_char(self) -> char {
        match self {
            Signal::Dot => '.',
            Signal::Dash => '-',
        }
    }
}

impl TryFrom<char> for Signal {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Signal::Dot),
            '-' => Ok(Signal::Dash),
            other => Err(other),
        }
    }
}

/// Punctuation inserted directly from the special-character screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Literal {
    Period,
    Comma,
    Question,
    Exclamation,
    Hyphen,
}

impl Literal {
    /// Menu order.
    pub const ALL: [Literal; 5] = [
        Literal::Period,
        Literal::Comma,
        Literal::Question,
        Literal::Exclamation,
        Literal::Hyphen,
    ];

    pub const fn as_char(self) -> char {
        match self {
            Literal::Period => '.',
            Literal::Comma => ',',
            Literal::Question => '?',
            Literal::Exclamation => '!',
            Literal::Hyphen => '-',
        }
    }
}

impl TryFrom<char> for Literal {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Literal::ALL
            .into_iter()
            .find(|lit| lit.as_char() == c)
            .ok_or(c)
    }
}
