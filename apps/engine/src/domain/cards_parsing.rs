//! Card text form: rank letter then suit letter ("AS", "TH", "2C").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::GameError;

impl Rank {
    pub const fn letter(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    fn from_letter(ch: char) -> Option<Self> {
        Rank::ALL.into_iter().find(|r| r.letter() == ch)
    }
}

impl Suit {
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(ch: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|s| s.letter() == ch)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.letter(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || GameError::illegal_move(format!("unrecognized card: {s:?}"));
        let upper = s.trim().to_ascii_uppercase();
        // "10H" is accepted as an alias of "TH".
        let token = upper.strip_prefix("10").map_or(upper.clone(), |rest| format!("T{rest}"));
        let mut chars = token.chars();
        let (Some(rank_ch), Some(suit_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(bad());
        };
        let rank = Rank::from_letter(rank_ch).ok_or_else(bad)?;
        let suit = Suit::from_letter(suit_ch).ok_or_else(bad)?;
        Ok(Card { suit, rank })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "2C").
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
