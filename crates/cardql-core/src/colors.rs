//! Card colors and color sets.
//!
//! Colors are always iterated and printed in canonical WUBRG order,
//! regardless of the order they were written in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A symbol that is not one of `W`, `U`, `B`, `R`, `G`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {symbol}")]
pub struct UnknownColor {
    pub symbol: String,
}

impl UnknownColor {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[serde(rename = "W")]
    White = 0,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    /// All colors in WUBRG order.
    pub const ALL: [Color; 5] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
    ];

    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Blue => 'U',
            Color::Black => 'B',
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }

    /// Case-insensitive lookup by color letter.
    pub fn from_letter(letter: char) -> Result<Self, UnknownColor> {
        Self::ALL
            .into_iter()
            .find(|c| c.letter().eq_ignore_ascii_case(&letter))
            .ok_or_else(|| UnknownColor::new(letter))
    }

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Accepts a bare letter (`R`) or a mana symbol (`{R}`).
impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim_start_matches('{').trim_end_matches('}');
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::from_letter(letter),
            _ => Err(UnknownColor::new(trimmed)),
        }
    }
}

/// Set of colors, stored as a bitset in WUBRG bit order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColorSet(u8);

impl ColorSet {
    const MASK: u8 = 0b1_1111;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::MASK)
    }

    pub fn insert(&mut self, color: Color) {
        self.0 |= color.bit();
    }

    pub fn with(mut self, color: Color) -> Self {
        self.insert(color);
        self
    }

    pub fn contains(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Colors of WUBRG not in this set.
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::MASK)
    }

    pub fn is_subset(self, other: ColorSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn is_superset(self, other: ColorSet) -> bool {
        other.is_subset(self)
    }

    pub fn iter(self) -> impl Iterator<Item = Color> {
        Color::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Color> for ColorSet {
    fn from_iter<T: IntoIterator<Item = Color>>(iter: T) -> Self {
        let mut set = ColorSet::empty();
        for color in iter {
            set.insert(color);
        }
        set
    }
}

/// Parses a run of color letters such as `RW` or `wubrg`. Duplicates are harmless.
impl FromStr for ColorSet {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Color::from_letter).collect()
    }
}

impl fmt::Display for ColorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in self.iter() {
            write!(f, "{}", color.letter())?;
        }
        Ok(())
    }
}

impl Serialize for ColorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ColorSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let letters = String::deserialize(deserializer)?;
        letters.parse().map_err(serde::de::Error::custom)
    }
}
