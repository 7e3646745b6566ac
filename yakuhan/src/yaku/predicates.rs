//! The yaku predicates. All share the [`crate::yaku::YakuCheck`] signature so
//! the registry can hold them uniformly; ones that ignore an argument take it
//! with a leading underscore.

use yakuhan_elements::prelude::*;

use crate::settings::Settings;

/// Standard partition, all sequences, a pair that is neither a seat/round
/// wind nor a dragon, and a sequence whose open end matches the winning tile.
/// The ends of *every* sequence are checked, so a closed or pair wait also
/// qualifies whenever the tile happens to terminate some other sequence.
pub fn is_pinfu(partition: &[Set], winning: Tile, settings: &Settings) -> bool {
    if partition.len() != 5 {
        return false;
    }
    let mut has_pair = false;
    for set in partition {
        match set.kind() {
            SetKind::Pair => {
                if has_pair {
                    return false;
                }
                has_pair = true;
                let pair = set.first();
                if pair == settings.player_wind.to_normal()
                    || pair == settings.round_wind.to_normal()
                    || pair.is_dragon()
                {
                    return false;
                }
            }
            SetKind::Sequence => {}
            _ => return false,
        }
    }
    partition.iter()
        .filter(|set| set.len() == 3)
        .any(|set| winning == set.tile_at(0) || winning == set.tile_at(2))
}

/// No terminals, no honors.
pub fn is_tanyao(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    partition.iter()
        .flat_map(|set| set.tiles())
        .all(|tile| !tile.is_terminal())
}

fn has_triplet_of(partition: &[Set], tile: Tile) -> bool {
    partition.iter().any(|set| {
        matches!(set.kind(), SetKind::Triplet | SetKind::Quad) && set.first() == tile
    })
}

pub fn is_yakuhai_player_wind(partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    has_triplet_of(partition, settings.player_wind.to_normal())
}

pub fn is_yakuhai_round_wind(partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    has_triplet_of(partition, settings.round_wind.to_normal())
}

pub fn is_yakuhai_white(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    has_triplet_of(partition, t!("5z"))
}

pub fn is_yakuhai_green(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    has_triplet_of(partition, t!("6z"))
}

pub fn is_yakuhai_red(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    has_triplet_of(partition, t!("7z"))
}

pub fn is_riichi(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.riichi == 1
}

pub fn is_double_riichi(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.riichi == 2
}

pub fn is_ippatsu(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.ippatsu
}

/// Self-draw; the concealment requirement is the registry's closed rule.
pub fn is_menzen_tsumo(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    !settings.ron
}

/// Two sequences with the same starting tile. Exposure is not inspected
/// here; the registry's closed rule disqualifies open hands.
pub fn is_pure_double_sequence(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    let mut seen: Vec<Tile> = Vec::new();
    for set in partition.iter().filter(|set| set.kind() == SetKind::Sequence) {
        if seen.contains(&set.first()) {
            return true;
        }
        seen.push(set.first());
    }
    false
}

pub fn is_after_a_kan(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.after_a_kan
}

pub fn is_robbing_a_kan(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.robbing_a_kan
}

pub fn is_under_the_sea(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.under_the_sea
}

pub fn is_under_the_river(_partition: &[Set], _winning: Tile, settings: &Settings) -> bool {
    settings.under_the_river
}

/// The same rank held as a triplet in all three numbered suits. A quad counts
/// through its face-up tile.
pub fn is_triple_triplets(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    let mut held = [false; 34];
    for set in partition {
        if matches!(set.kind(), SetKind::Triplet | SetKind::Quad) {
            held[set.first().encoding() as usize] = true;
        }
    }
    (0..9).any(|rank| held[rank] && held[rank + 9] && held[rank + 18])
}

pub fn is_three_quads(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    partition.iter().filter(|set| set.kind() == SetKind::Quad).count() == 3
}

/// A standard partition with no sequences. The length guard keeps a
/// seven-pairs partition from qualifying vacuously.
pub fn is_all_triplets(partition: &[Set], _winning: Tile, _settings: &Settings) -> bool {
    partition.len() == 5 && partition.iter().all(|set| set.kind() != SetKind::Sequence)
}
