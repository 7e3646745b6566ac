//! [`TileSet34`] — tile histogram over the 34 normal kinds.

use std::fmt::{Display, Formatter};
use std::ops::{Index, IndexMut};

use derive_more::{Constructor, From, Into, IntoIterator, Index, IndexMut};

use crate::tile::Tile;

/// Histogram for all 34 kinds of normal tiles (red 5's are treated as normal
/// 5's). Can be directly indexed with [`Tile`], and doubles as the mutable
/// count buffer of the hand partitioner.
#[derive(Clone, Debug, Eq, PartialEq, Constructor, From, Into, IntoIterator, Index, IndexMut)]
pub struct TileSet34(pub [u8; 34]);

impl Index<Tile> for TileSet34 {
    type Output = u8;
    fn index(&self, tile: Tile) -> &Self::Output {
        &self.0[tile.normal_encoding() as usize]
    }
}

impl IndexMut<Tile> for TileSet34 {
    fn index_mut(&mut self, tile: Tile) -> &mut Self::Output {
        &mut self.0[tile.normal_encoding() as usize]
    }
}

impl Default for TileSet34 {
    fn default() -> Self { TileSet34([0u8; 34]) }
}

impl Display for TileSet34 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for counts in self.0.chunks(9) {
            for count in counts {
                write!(f, "{}", count)?;
            }
            write!(f, ",")?;
        }
        Ok(())
    }
}

impl FromIterator<Tile> for TileSet34 {
    fn from_iter<T: IntoIterator<Item = Tile>>(tiles: T) -> Self {
        let mut ts = Self::default();
        for tile in tiles {
            ts[tile] += 1;
        }
        ts
    }
}

impl TileSet34 {
    /// No tiles counted at all.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    /// Total number of tiles counted.
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// Iterates through all tiles in this tile set, in encoding order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.0.iter().enumerate().flat_map(|(encoding, &count)|
            itertools::repeat_n(
                Tile::from_encoding(encoding as u8).unwrap(),
                count as usize))
    }
}
