//! [`Set`] — one element of a partitioned hand: pair, sequence, triplet or
//! quad, with its exposure flag.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use crate::tile::Tile;

/// The shape of a [`Set`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SetKind {
    /// Two identical tiles.
    Pair,
    /// Three consecutive tiles of one numbered suit.
    Sequence,
    /// Three identical tiles.
    Triplet,
    /// Four identical tiles. Concealed unless flagged open.
    Quad,
}

/// A pair or meld within a partitioned hand.
///
/// The payload is the starting tile (always red-collapsed: `0m` is stored as
/// `5m`) plus whether the set came from an open call. A quad that is *not*
/// open is a concealed quad — publicly visible, but it does not break the
/// hand's concealment.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Set {
    kind: SetKind,
    first: Tile,
    open: bool,
}

#[allow(clippy::len_without_is_empty)]
impl Set {
    /// A pair of `tile`. Pairs only ever come from the closed hand.
    pub fn pair(tile: Tile) -> Self {
        Self { kind: SetKind::Pair, first: tile.to_normal(), open: false }
    }

    /// The sequence `first, first+1, first+2`. `first` must be a numeral of
    /// rank 1..=7.
    pub fn sequence(first: Tile, open: bool) -> Self {
        let first = first.to_normal();
        debug_assert!(first.encoding() <= 26 && first.encoding() % 9 <= 6);
        Self { kind: SetKind::Sequence, first, open }
    }

    /// A triplet of `tile`.
    pub fn triplet(tile: Tile, open: bool) -> Self {
        Self { kind: SetKind::Triplet, first: tile.to_normal(), open }
    }

    /// A quad of `tile`; `open = false` marks a concealed quad.
    pub fn quad(tile: Tile, open: bool) -> Self {
        Self { kind: SetKind::Quad, first: tile.to_normal(), open }
    }

    /// Ingests an exposed set as reported by the table: face-up tiles plus
    /// `None` for the face-down tiles of a concealed quad. Returns `None`
    /// when the raw tiles form no valid sequence, triplet or quad.
    pub fn from_tiles(tiles: &[Option<Tile>]) -> Option<Self> {
        match tiles {
            [Some(a), Some(b), Some(c)] => {
                let mut encodings =
                    [a.normal_encoding(), b.normal_encoding(), c.normal_encoding()];
                encodings.sort_unstable();
                let [lo, mid, hi] = encodings;
                if lo == mid && mid == hi {
                    Some(Self::triplet(a.to_normal(), true))
                } else if hi <= 26 && lo % 9 <= 6 && mid == lo + 1 && hi == lo + 2 {
                    Some(Self::sequence(Tile::from_encoding(lo)?, true))
                } else {
                    None
                }
            }
            [_, _, _, _] => {
                let shown: Vec<Tile> = tiles.iter().flatten().copied().collect();
                let first = shown.first()?.to_normal();
                if shown.iter().any(|tile| tile.to_normal() != first) {
                    return None;
                }
                Some(Self::quad(first, shown.len() == 4))
            }
            _ => None,
        }
    }

    pub fn kind(self) -> SetKind { self.kind }

    /// Starting tile: the minimum of a sequence, the repeated tile otherwise.
    pub fn first(self) -> Tile { self.first }

    /// Whether the set came from an open call. A concealed quad is not open.
    pub fn is_open(self) -> bool { self.open }

    pub fn len(self) -> usize {
        match self.kind {
            SetKind::Pair => 2,
            SetKind::Sequence | SetKind::Triplet => 3,
            SetKind::Quad => 4,
        }
    }

    /// Tile at position `i` of the expanded tile list.
    pub fn tile_at(self, i: usize) -> Tile {
        debug_assert!(i < self.len());
        match self.kind {
            SetKind::Sequence => Tile::from_encoding(self.first.encoding() + i as u8).unwrap(),
            _ => self.first,
        }
    }

    /// The expanded tile list: `n, n+1, n+2` for a sequence, `first` repeated
    /// otherwise.
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        (0..self.len()).map(move |i| self.tile_at(i))
    }

    // Sequences sort ahead of triplets with the same starting tile.
    fn kind_order(self) -> u8 {
        match self.kind {
            SetKind::Sequence => 0,
            _ => 1,
        }
    }
}

impl Ord for Set {
    /// Sorts by length, then starting tile, then sequence-before-triplet.
    /// This is the canonical presentation order of a partition.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.len(), self.first, self.kind_order(), self.open)
            .cmp(&(other.len(), other.first, other.kind_order(), other.open))
    }
}

impl PartialOrd for Set {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<&[Tile]> for Set {
    /// A set equals the plain tile list obtained by expanding it.
    fn eq(&self, other: &&[Tile]) -> bool {
        self.len() == other.len()
            && self.tiles().zip(other.iter()).all(|(a, &b)| a == b.to_normal())
    }
}

impl Display for Set {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile.num())?;
        }
        write!(f, "{}", self.first.suit_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::t;

    fn raw(codes: &[&str]) -> Vec<Option<Tile>> {
        codes.iter()
            .map(|&code| if code == "-" { None } else { Some(t!(code)) })
            .collect()
    }

    #[test]
    fn ingests_triplet() {
        let set = Set::from_tiles(&raw(&["7z", "7z", "7z"])).unwrap();
        assert_eq!(set.kind(), SetKind::Triplet);
        assert_eq!(set.first(), t!("7z"));
        assert!(set.is_open());
    }

    #[test]
    fn ingests_sequence_in_any_order() {
        let set = Set::from_tiles(&raw(&["6s", "4s", "0s"])).unwrap();
        assert_eq!(set.kind(), SetKind::Sequence);
        assert_eq!(set.first(), t!("4s"));
        assert_eq!(set.tiles().collect::<Vec<_>>(), vec![t!("4s"), t!("5s"), t!("6s")]);
    }

    #[test]
    fn ingests_open_and_concealed_quads() {
        let open = Set::from_tiles(&raw(&["2z", "2z", "2z", "2z"])).unwrap();
        assert_eq!(open.kind(), SetKind::Quad);
        assert!(open.is_open());

        let concealed = Set::from_tiles(&raw(&["2z", "2z", "2z", "-"])).unwrap();
        assert_eq!(concealed.kind(), SetKind::Quad);
        assert!(!concealed.is_open());
        assert_eq!(concealed.first(), t!("2z"));
    }

    #[test]
    fn rejects_invalid_shapes() {
        assert_eq!(Set::from_tiles(&raw(&["1m", "2m"])), None);
        assert_eq!(Set::from_tiles(&raw(&["1m", "2m", "4m"])), None);
        assert_eq!(Set::from_tiles(&raw(&["8s", "9s", "1z"])), None);
        assert_eq!(Set::from_tiles(&raw(&["9m", "1p", "2p"])), None);
        assert_eq!(Set::from_tiles(&raw(&["1z", "2z", "3z"])), None);
        assert_eq!(Set::from_tiles(&raw(&["1m", "2m", "-"])), None);
        assert_eq!(Set::from_tiles(&raw(&["5p", "5p", "6p", "-"])), None);
        assert_eq!(Set::from_tiles(&raw(&["-", "-", "-", "-"])), None);
        assert_eq!(Set::from_tiles(&raw(&["1m", "1m", "1m", "1m", "1m"])), None);
    }

    #[test]
    fn red_fives_collapse_on_ingestion() {
        let set = Set::from_tiles(&raw(&["0p", "5p", "5p"])).unwrap();
        assert_eq!(set.kind(), SetKind::Triplet);
        assert_eq!(set.first(), t!("5p"));
    }

    #[test]
    fn canonical_order_is_length_start_then_kind() {
        let pair = Set::pair(t!("9s"));
        let sequence = Set::sequence(t!("1m"), false);
        let triplet = Set::triplet(t!("1m"), false);
        let later_sequence = Set::sequence(t!("3p"), false);
        let quad = Set::quad(t!("1m"), false);

        let mut sets = vec![quad, later_sequence, triplet, sequence, pair];
        sets.sort();
        assert_eq!(sets, vec![pair, sequence, triplet, later_sequence, quad]);
    }

    #[test]
    fn set_equals_its_expansion() {
        let sequence = Set::sequence(t!("4s"), false);
        assert_eq!(sequence, &[t!("4s"), t!("5s"), t!("6s")][..]);
        assert_ne!(sequence, &[t!("4s"), t!("5s"), t!("7s")][..]);
        let quad = Set::quad(t!("5p"), true);
        assert_eq!(quad, &[t!("5p"), t!("0p"), t!("5p"), t!("5p")][..]);
    }

    #[test]
    fn display_uses_shorthand_digits() {
        assert_eq!(Set::sequence(t!("1m"), false).to_string(), "123m");
        assert_eq!(Set::triplet(t!("5z"), false).to_string(), "555z");
        assert_eq!(Set::pair(t!("2p")).to_string(), "22p");
        assert_eq!(Set::quad(t!("7z"), true).to_string(), "7777z");
    }
}
