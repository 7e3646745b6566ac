//! Hand partitioning: the seven-pairs reading and depth-first enumeration of
//! every one-pair-plus-four-sets reading.

use itertools::Itertools;
use yakuhan_elements::prelude::*;

use crate::errors::HandError;
use crate::parse;

/// One complete reading of a hand, in canonical order: the pair first, then
/// the remaining sets ascending (see [`Set`]'s ordering).
pub type Partition = Vec<Set>;

/// Splits a hand given as printable codes. Public mainly so the partitioner
/// can be exercised independently of the scorer.
///
/// Returns the seven-pairs reading (if any) followed by every standard
/// reading. An empty result is not an error; it means the tiles do not form
/// a winning shape.
pub fn split<S: AsRef<str>>(
    hand: &[S],
    exposed: &[Vec<S>],
) -> Result<Vec<Partition>, HandError> {
    let hand = parse::parse_hand(hand)?;
    let exposed = exposed.iter()
        .map(|codes| parse::parse_exposed_set(codes))
        .collect::<Result<Vec<_>, _>>()?;
    split_tiles(&hand, &exposed)
}

/// Typed-level [`split`].
pub fn split_tiles(
    hand: &[Tile],
    exposed: &[Vec<Option<Tile>>],
) -> Result<Vec<Partition>, HandError> {
    let sets = ingest_exposed(exposed)?;
    let mut partitions = split_seven_pairs(hand, &sets, false, false);
    partitions.extend(split_standard(hand, &sets));
    Ok(partitions)
}

/// Validates each raw exposed set into its [`Set`] form.
pub(crate) fn ingest_exposed(exposed: &[Vec<Option<Tile>>]) -> Result<Vec<Set>, HandError> {
    exposed.iter()
        .map(|raw| {
            Set::from_tiles(raw).ok_or_else(|| {
                HandError::InvalidSet(
                    raw.iter()
                        .map(|slot| match slot {
                            Some(tile) => tile.to_string(),
                            None => parse::HIDDEN.to_owned(),
                        })
                        .collect(),
                )
            })
        })
        .collect()
}

/// The seven-pairs reading of the closed hand, if it exists.
///
/// With `allow_duplicate_pairs` unset, four of a kind disqualifies the whole
/// reading. With both `allow_duplicate_pairs` and `allow_exposed` set, each
/// concealed quad among the exposed sets counts as two identical pairs. The
/// standard caller passes `(false, false)`.
pub fn split_seven_pairs(
    hand: &[Tile],
    exposed: &[Set],
    allow_duplicate_pairs: bool,
    allow_exposed: bool,
) -> Vec<Partition> {
    let counts = TileSet34::from_iter(hand.iter().copied());

    let mut pairs: Vec<Set> = Vec::new();
    for encoding in 0..34u8 {
        let count = counts[encoding as usize];
        if count >= 4 && !allow_duplicate_pairs {
            return Vec::new();
        }
        let tile = Tile::from_encoding(encoding).unwrap();
        for _ in 0..count / 2 {
            pairs.push(Set::pair(tile));
        }
    }

    if allow_exposed && allow_duplicate_pairs {
        for set in exposed {
            if set.kind() == SetKind::Quad && !set.is_open() {
                pairs.push(Set::pair(set.first()));
                pairs.push(Set::pair(set.first()));
            }
        }
    }

    if pairs.len() < 7 {
        return Vec::new();
    }
    pairs.truncate(7);
    vec![pairs]
}

/// Every distinct one-pair-plus-four-sets reading of the closed hand, each
/// combined with the exposed sets.
pub fn split_standard(hand: &[Tile], exposed: &[Set]) -> Vec<Partition> {
    let mut counts = TileSet34::from_iter(hand.iter().copied());
    let mut chosen: Vec<Set> = exposed.to_vec();
    let mut partitions: Vec<Partition> = Vec::new();

    for encoding in 0..34u8 {
        if counts[encoding as usize] < 2 {
            continue;
        }
        let tile = Tile::from_encoding(encoding).unwrap();
        counts[encoding as usize] -= 2;
        chosen.push(Set::pair(tile));
        find_melds(&mut counts, &mut chosen, 0, &mut partitions);
        chosen.pop();
        counts[encoding as usize] += 2;
    }
    log::trace!("standard split: {} reading(s) of {} closed tiles", partitions.len(), hand.len());
    partitions
}

/// Depth-first extraction of triplets and sequences. `min_encoding` only
/// moves forward, so each multiset of sets is reached exactly once.
fn find_melds(
    counts: &mut TileSet34,
    chosen: &mut Vec<Set>,
    min_encoding: u8,
    partitions: &mut Vec<Partition>,
) {
    if chosen.len() == 5 {
        // A reading must consume the entire closed hand.
        if counts.is_empty() {
            partitions.push(chosen.iter().copied().sorted().collect());
        }
        return;
    }

    for encoding in min_encoding..34 {
        let at = encoding as usize;
        if counts[at] == 0 {
            continue;
        }
        let tile = Tile::from_encoding(encoding).unwrap();

        if counts[at] >= 3 {
            counts[at] -= 3;
            chosen.push(Set::triplet(tile, false));
            find_melds(counts, chosen, encoding, partitions);
            chosen.pop();
            counts[at] += 3;
        }

        if encoding <= 26 && encoding % 9 <= 6 && counts[at + 1] > 0 && counts[at + 2] > 0 {
            counts[at] -= 1;
            counts[at + 1] -= 1;
            counts[at + 2] -= 1;
            chosen.push(Set::sequence(tile, false));
            find_melds(counts, chosen, encoding, partitions);
            chosen.pop();
            counts[at] += 1;
            counts[at + 1] += 1;
            counts[at + 2] += 1;
        }
    }
}
