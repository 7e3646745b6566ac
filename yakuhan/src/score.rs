//! The scorer: enumerates every reading of the hand, tallies the yaku
//! registry against each, keeps the best, then applies dora bonuses.

use yakuhan_elements::prelude::*;

use crate::errors::HandError;
use crate::parse;
use crate::settings::Settings;
use crate::split::{self, Partition};
use crate::yaku::{ClosedRule, Yaku, YakuEntry, DEFAULT_REGISTRY};

/// Scoring outcome of a winning hand.
///
/// `yakus` holds `(yaku, han contributed)` in registry order with dora
/// entries appended; `yakuman_yakus` holds `(yaku, 0)` placeholders.
///
///
/// ## Optional `serde` support
///
/// Straightforward struct mapping; yaku names serialize as their wire
/// identifiers.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandScore {
    pub han: u8,
    pub yakus: Vec<(Yaku, u8)>,
    pub yakuman: u8,
    pub yakuman_yakus: Vec<(Yaku, u8)>,
}

/// Scores a hand given as printable codes.
///
/// The closed hand may arrive with or without the winning tile: when its
/// length is 3n+1 the winning tile is absorbed into it (self-draw and
/// discard wins score uniformly).
///
/// Returns `Ok(None)` when the tiles form no partition or no registered
/// yaku matches — dora alone never make a winning hand.
pub fn score<S: AsRef<str>>(
    hand: &[S],
    exposed: &[Vec<S>],
    winning_tile: &str,
    settings: &Settings,
) -> Result<Option<HandScore>, HandError> {
    let hand = parse::parse_hand(hand)?;
    let exposed = exposed.iter()
        .map(|codes| parse::parse_exposed_set(codes))
        .collect::<Result<Vec<_>, _>>()?;
    let winning = parse::parse_tile(winning_tile)?;
    score_tiles(&hand, &exposed, winning, settings)
}

/// Typed-level [`score`] over the default registry.
pub fn score_tiles(
    hand: &[Tile],
    exposed: &[Vec<Option<Tile>>],
    winning_tile: Tile,
    settings: &Settings,
) -> Result<Option<HandScore>, HandError> {
    score_with_registry(DEFAULT_REGISTRY, hand, exposed, winning_tile, settings)
}

/// [`score_tiles`] against a caller-chosen registry, for rooms that enable
/// extra yaku (e.g. [`crate::yaku::LAST_TILE_REGISTRY`]).
pub fn score_with_registry(
    registry: &[YakuEntry],
    hand: &[Tile],
    exposed: &[Vec<Option<Tile>>],
    winning_tile: Tile,
    settings: &Settings,
) -> Result<Option<HandScore>, HandError> {
    let sets = split::ingest_exposed(exposed)?;

    let mut closed: Vec<Tile> = hand.to_vec();
    // Printable identity of everything held, for dora counting.
    let mut all_tiles: Vec<Tile> = hand.to_vec();
    all_tiles.extend(exposed.iter().flatten().flatten());
    if closed.len() % 3 == 1 {
        closed.push(winning_tile);
        all_tiles.push(winning_tile);
    }

    // Concealment is a property of the exposed sets alone: only concealed
    // quads keep the hand closed.
    let fully_concealed = sets.iter().all(|set| !set.is_open());
    let winning = winning_tile.to_normal();

    let mut partitions = split::split_seven_pairs(&closed, &sets, false, false);
    partitions.extend(split::split_standard(&closed, &sets));

    let mut best = HandScore::default();
    for partition in &partitions {
        let tally = tally_partition(registry, partition, winning, settings, fully_concealed);
        if tally.yakuman > best.yakuman
            || (tally.yakuman == best.yakuman && tally.han > best.han)
        {
            best = tally;
        }
    }

    if best.han == 0 && best.yakuman == 0 {
        return Ok(None);
    }

    apply_dora(&mut best, &all_tiles, settings);
    log::debug!(
        "scored {} han, {} yakuman over {} reading(s)",
        best.han, best.yakuman, partitions.len(),
    );
    Ok(Some(best))
}

/// Evaluates the registry, in order, against one partition.
fn tally_partition(
    registry: &[YakuEntry],
    partition: &Partition,
    winning: Tile,
    settings: &Settings,
    fully_concealed: bool,
) -> HandScore {
    let mut tally = HandScore::default();
    for entry in registry {
        if entry.closed_rule == ClosedRule::ClosedOnly && !fully_concealed {
            continue;
        }
        if !(entry.check)(partition, winning, settings) {
            continue;
        }
        let mut han = entry.han;
        if entry.closed_rule == ClosedRule::OpenReduced && !fully_concealed {
            han -= 1;
        }
        if entry.yakuman > 0 {
            tally.yakuman += entry.yakuman;
            tally.yakuman_yakus.push((entry.yaku, 0));
        } else {
            tally.han += han;
            tally.yakus.push((entry.yaku, han));
        }
    }
    tally
}

/// Adds dora, red-dora and ura-dora to an already-winning score. Matching is
/// by printable identity: a red five is ordinary dora only when the dora
/// list itself names `5m`/`5p`/`5s`.
fn apply_dora(score: &mut HandScore, all_tiles: &[Tile], settings: &Settings) {
    let dora = all_tiles.iter().filter(|&tile| settings.dora.contains(tile)).count() as u8;
    let red_dora = all_tiles.iter().filter(|tile| tile.is_red()).count() as u8;
    let ura_dora = all_tiles.iter().filter(|&tile| settings.ura_dora.contains(tile)).count() as u8;

    if dora > 0 {
        score.han += dora;
        score.yakus.push((Yaku::Dora, dora));
    }
    if red_dora > 0 {
        score.han += red_dora;
        score.yakus.push((Yaku::RedDora, red_dora));
    }
    if settings.riichi >= 1 && ura_dora > 0 {
        score.han += ura_dora;
        score.yakus.push((Yaku::UraDora, ura_dora));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn open_hand_skips_closed_only_yaku() {
        // Tanyao survives the open call; the self-draw yaku does not.
        let result = score(
            &["2m", "3m", "4m", "5p", "6p", "7p", "3s", "4s", "5s", "6s", "6s"],
            &[vec!["2s", "3s", "4s"]],
            "6s",
            &Settings::default(),
        )
        .unwrap()
        .expect("winning hand");
        assert_eq!(result.yakus, vec![(Yaku::Tanyao, 1)]);
        assert_eq!(result.han, 1);
        assert_eq!(result.yakuman, 0);
    }

    #[test]
    fn concealed_quad_keeps_the_hand_closed() {
        let result = score(
            &["1m", "2m", "3m", "3m", "4m", "5p", "6p", "7p", "2s", "2s"],
            &[vec!["1z", "1z", "1z", "-"]],
            "2m",
            &Settings::default(),
        )
        .unwrap()
        .expect("winning hand");
        assert!(result.yakus.contains(&(Yaku::MenzenTsumo, 1)));
        assert!(result.yakus.contains(&(Yaku::PlayerWind, 1)));
        assert!(result.yakus.contains(&(Yaku::RoundWind, 1)));
        // The quad still rules out an all-sequence reading.
        assert!(!result.yakus.contains(&(Yaku::Pinfu, 1)));
    }

    #[test]
    fn best_reading_wins() {
        // 111222333m reads as three triplets or as three identical runs.
        // Triplet reading: tsumo 1 + all-triplets 2 = 3; run reading:
        // tsumo 1 + pure double sequence 1 = 2. The triplet reading wins.
        let result = score(
            &["1m", "1m", "1m", "2m", "2m", "2m", "3m", "3m", "3m", "7p", "7p", "7p", "9s"],
            &[],
            "9s",
            &Settings::default(),
        )
        .unwrap()
        .expect("winning hand");
        assert!(result.yakus.contains(&(Yaku::AllTriplets, 2)));
        assert!(!result.yakus.contains(&(Yaku::PureDoubleSequence, 1)));
        assert_eq!(result.han, 3);
    }

    #[test]
    fn higher_han_reading_beats_seven_pairs() {
        // 223344m556677p99s reads as seven pairs (just the self-draw han) and
        // as two doubled runs (self-draw + pure double sequence); the run
        // reading must win.
        let hand = ["2m", "2m", "3m", "3m", "4m", "4m", "5p", "5p", "6p", "6p", "7p", "7p", "9s"];
        let result = score(&hand, &[], "9s", &Settings::default()).unwrap().unwrap();
        assert!(result.yakus.contains(&(Yaku::PureDoubleSequence, 1)));
        assert_eq!(result.han, 2);

        let again = score(&hand, &[], "9s", &Settings::default()).unwrap().unwrap();
        assert_eq!(result, again);
    }

    #[test]
    fn no_partition_is_no_yaku() {
        // Thirteen orphans: a yakuman shape, but no registered predicate
        // covers it and it forms no pair-and-sets reading.
        let result = score(
            &["1m", "9m", "1p", "9p", "1s", "9s", "1z", "2z", "3z", "4z", "5z", "6z", "7z"],
            &[],
            "7z",
            &Settings::default(),
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn dora_alone_is_not_a_win() {
        let settings = Settings {
            dora: vec![t!("1m")],
            player_wind: t!("2z"),
            round_wind: t!("3z"),
            ron: true,
            ..Settings::default()
        };
        let result = score(
            &["1m", "2m", "3m", "4p", "5p", "6p", "7s", "8s", "9s", "1z", "1z", "1z", "5s"],
            &[],
            "5s",
            &settings,
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn invalid_codes_propagate() {
        assert_eq!(
            score(&["1m", "9z"], &[], "1m", &Settings::default()),
            Err(HandError::InvalidTile("9z".to_owned())),
        );
        assert_eq!(
            score(&["1m"], &[], "0z", &Settings::default()),
            Err(HandError::InvalidTile("0z".to_owned())),
        );
        assert_eq!(
            score(&["1m"], &[vec!["1p", "1p", "2p"]], "1m", &Settings::default()),
            Err(HandError::InvalidSet(vec!["1p".into(), "1p".into(), "2p".into()])),
        );
    }

    #[test]
    fn red_five_is_red_dora_but_not_plain_dora() {
        let settings = Settings {
            dora: vec![t!("5s")],
            ..Settings::default()
        };
        let result = score(
            &["2m", "3m", "4m", "5p", "6p", "7p", "3s", "4s", "0s", "6s", "6s", "2s", "3s", "4s"],
            &[],
            "6s",
            &settings,
        )
        .unwrap()
        .expect("winning hand");
        // 0s is a red five: one red dora, but the 5s dora indicator does not
        // hit it.
        assert!(result.yakus.contains(&(Yaku::RedDora, 1)));
        assert!(!result.yakus.iter().any(|(yaku, _)| *yaku == Yaku::Dora));
    }
}
