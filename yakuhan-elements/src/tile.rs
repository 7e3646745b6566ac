//! [`Tile`] 牌
//!
//! ## Ref
//! - <https://en.wikipedia.org/wiki/Mahjong_tiles>
//! - <https://riichi.wiki/Mahjong_equipment>

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    str::FromStr,
};

/// Represents one tile (牌).
///
/// Encoded as an integer:
///
/// | Encoding   |  Shorthand  | Category      |
/// |------------|-------------|---------------|
/// | 0  ..= 8   |  1m ..= 9m  | characters    |
/// | 9  ..= 17  |  1p ..= 9p  | dots          |
/// | 18 ..= 26  |  1s ..= 9s  | bamboos       |
/// | 27 ..= 30  |  1z ..= 4z  | winds (ESWN)  |
/// | 31, 32, 33 |  7z, 6z, 5z | dragons       |
/// | 34, 35, 36 |  0m, 0p, 0s | reds          |
///
/// The dragon block runs opposite to its shorthand: the printable honor ranks
/// 5, 6, 7 (white, green, red) map to encodings 33, 32, 31 through `12 - n`.
/// This table is assumed across the workspace and must not change.
///
/// Red 5's keep their own encodings so that a parsed hand retains the exact
/// shorthand identity it arrived with (`0m` never compares equal to `5m`);
/// [`Tile::to_normal`] collapses them when only the rank matters.
///
///
/// ## Optional `serde` support
///
/// The string shorthand (e.g. `"1m"`, `"0p"`, `"7z"`) is the serialization
/// format.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&str"))]
pub struct Tile(u8);

impl Tile {
    pub const MIN_ENCODING: u8 = 0;
    pub const MAX_ENCODING: u8 = 36;

    pub const fn from_encoding(encoding: u8) -> Option<Self> {
        if encoding <= Self::MAX_ENCODING { Some(Self(encoding)) } else { None }
    }

    /// Builds a tile from the two halves of its shorthand: rank digit and suit
    /// index (0, 1, 2, 3 for m, p, s, z). Rank 0 of a numbered suit is the red
    /// five; honor ranks 5..=7 land on the reversed dragon block.
    pub const fn from_num_suit(num: u8, suit: u8) -> Option<Self> {
        if !(num <= 9 && suit <= 3) { return None; }
        if suit == 3 {
            if !(1 <= num && num <= 7) { return None; }
            let num = if num >= 5 { 12 - num } else { num };
            Some(Self(27 + num - 1))
        } else if num == 0 {
            Some(Self(34 + suit))
        } else {
            Some(Self(suit * 9 + num - 1))
        }
    }

    pub const fn is_valid(self) -> bool { self.0 <= 36 }

    /// Not red 5
    pub const fn is_normal(self) -> bool { self.0 <= 33 }
    /// Red 5 赤牌
    pub const fn is_red(self) -> bool { 34 <= self.0 && self.0 <= 36 }

    /// Numerals := Characters + Dots + Bamboos
    pub const fn is_numeral(self) -> bool {
        (self.0 <= 26) || (34 <= self.0 && self.0 <= 36)
    }
    /// Pure terminals := {1,9}{m,p,s}
    pub const fn is_pure_terminal(self) -> bool {
        matches!(self.0, 0 | 8 | 9 | 17 | 18 | 26)
    }

    /// Winds := {1,2,3,4}z (E, S, W, N)
    pub const fn is_wind(self) -> bool { 27 <= self.0 && self.0 <= 30 }
    /// Dragons := {7,6,5}z (red, green, white)
    pub const fn is_dragon(self) -> bool { 31 <= self.0 && self.0 <= 33 }
    /// Honors := Winds + Dragons
    pub const fn is_honor(self) -> bool { 27 <= self.0 && self.0 <= 33 }

    /// Terminals := Pure terminals + Honors
    pub const fn is_terminal(self) -> bool {
        self.is_pure_terminal() || self.is_honor()
    }

    pub const fn encoding(self) -> u8 {
        debug_assert!(self.is_valid());
        self.0
    }
    /// Encoding of this tile, except red 5 is converted to normal 5
    pub const fn normal_encoding(self) -> u8 {
        debug_assert!(self.is_valid());
        match self.0 {
            34 => 4,
            35 => 13,
            36 => 22,
            x => x,
        }
    }

    /// Converts a red 5 to normal 5; otherwise no-op.
    pub const fn to_normal(self) -> Self { Self(self.normal_encoding()) }

    /// Converts tile to an internal ordering key where:
    /// 1m < ... < 4m < 0m < 5m < ... < 9m < 1p < ... < 9p < 1s < ... < 9s < 1z < ... < 7z
    ///
    /// This is implemented by doubling the encoding space and inserting the reds
    /// between 4 and 5 tiles.
    const fn to_ordering_key(self) -> u8 {
        debug_assert!(self.is_valid());
        if self.0 <= 33 { self.0 * 2 } else { 7 + (self.0 - 34) * 18 }
    }

    /// Returns the "number" part of the shorthand.
    pub const fn num(self) -> u8 {
        debug_assert!(self.is_valid());
        if self.0 >= 34 { return 0; }
        if self.0 >= 27 {
            let ord = self.0 - 26;
            if ord >= 5 { 12 - ord } else { ord }
        } else {
            self.0 % 9 + 1
        }
    }
    /// Returns the "number" part of the shorthand, with reds converted to non-red (i.e. 0 => 5).
    pub const fn normal_num(self) -> u8 {
        if self.0 >= 34 { 5 } else { self.num() }
    }
    /// Returns the "suit" part of the shorthand (0, 1, 2, 3 for m, p, s, z respectively)
    pub const fn suit(self) -> u8 {
        debug_assert!(self.is_valid());
        if self.0 <= 33 { self.0 / 9 } else { self.0 - 34 }
    }
}

impl PartialOrd<Self> for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_ordering_key().cmp(&other.to_ordering_key())
    }
}

// String/Char Conversions

/// Returns the tile suit represented by the shorthand suit char.
pub(crate) const fn suit_from_char(c: char) -> Option<u8> {
    match c {
        'm' => Some(0),
        'p' => Some(1),
        's' => Some(2),
        'z' => Some(3),
        _ => None,
    }
}

impl Tile {
    /// Returns the "suit" part of the shorthand as a char.
    pub const fn suit_char(self) -> char {
        debug_assert!(self.is_valid());
        match self.suit() {
            0 => 'm',
            1 => 'p',
            2 => 's',
            _ => 'z',
        }
    }

    /// Returns the standard shorthand string of this tile.
    pub const fn as_str(self) -> &'static str {
        debug_assert!(self.is_valid());
        [
            "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", //
            "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", //
            "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", //
            "1z", "2z", "3z", "4z", "7z", "6z", "5z", //
            "0m", "0p", "0s", //
        ][self.encoding() as usize]
    }
}

/// Error for a shorthand string that does not name a tile.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseTileError;

impl std::error::Error for ParseTileError {}

impl Display for ParseTileError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "not a valid tile shorthand")
    }
}

impl FromStr for Tile {
    type Err = ParseTileError;
    fn from_str(tile_str: &str) -> Result<Self, Self::Err> {
        let mut chars = tile_str.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(num_char), Some(suit_char), None) => {
                let num = num_char.to_digit(10).ok_or(ParseTileError)? as u8;
                let suit = suit_from_char(suit_char).ok_or(ParseTileError)?;
                Self::from_num_suit(num, suit).ok_or(ParseTileError)
            }
            _ => Err(ParseTileError),
        }
    }
}

// Blanket adaptors for various ways of converting to/from strings.

impl TryFrom<&str> for Tile {
    type Error = ParseTileError;
    fn try_from(value: &str) -> Result<Self, Self::Error> { value.parse() }
}

impl TryFrom<String> for Tile {
    type Error = ParseTileError;
    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Tile> for &'static str {
    fn from(tile: Tile) -> Self { tile.as_str() }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse shorthand for a list of tiles; digits buffer up until their suit
/// letter arrives. Anything unparseable is skipped.
///
/// Example:
/// ```
/// use yakuhan_elements::tile::*;
/// assert_eq!(tiles_from_str("123m8p8p777z"), vec![
///     t!("1m"), t!("2m"), t!("3m"),
///     t!("8p"), t!("8p"),
///     t!("7z"), t!("7z"), t!("7z"),
/// ]);
/// ```
pub fn tiles_from_str(s: &str) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut nums: Vec<u8> = Vec::new();
    for c in s.chars() {
        if let Some(num) = c.to_digit(10) {
            nums.push(num as u8);
        } else if let Some(suit) = suit_from_char(c) {
            tiles.extend(nums.drain(..).filter_map(|num| Tile::from_num_suit(num, suit)));
        } else {
            nums.clear();
        }
    }
    tiles
}

/// Shortcut for creating a tile literal through its string shorthand.
///
/// Example:
/// ```
/// use yakuhan_elements::tile::*;
/// assert_eq!(t!("3s"), Tile::from_encoding(20).unwrap());
/// ```
#[macro_export]
macro_rules! t {
    ($s:expr) => {{
        use core::str::FromStr;
        $crate::tile::Tile::from_str($s).unwrap()
    }};
}
pub use t;
