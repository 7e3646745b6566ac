//! The yaku registry: names, values, closed-hand rules and predicates.

pub mod predicates;

use yakuhan_elements::prelude::*;

use crate::settings::Settings;

/// All yaku known to this crate, as a unifying key instead of loose strings.
///
/// The string form of each variant is the identifier the table service
/// forwards to clients (e.g. `"yaku.yakuhai.player_wind"`).
///
///
/// ## Optional `serde` support
///
/// The string identifier is the serialization format.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[derive(strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&str"))]
#[non_exhaustive]
pub enum Yaku {
    /// 立直
    #[strum(serialize = "yaku.riichi")]
    Riichi,
    /// 両立直
    #[strum(serialize = "yaku.double_riichi")]
    DoubleRiichi,
    /// 一発
    #[strum(serialize = "yaku.ippatsu")]
    Ippatsu,
    /// 門前清自摸和
    #[strum(serialize = "yaku.menzen_tsumo")]
    MenzenTsumo,
    /// 平和
    #[strum(serialize = "yaku.pinfu")]
    Pinfu,
    /// 断幺九
    #[strum(serialize = "yaku.tanyao")]
    Tanyao,
    /// 一盃口
    #[strum(serialize = "yaku.pure_double_sequence")]
    PureDoubleSequence,
    /// 自風
    #[strum(serialize = "yaku.yakuhai.player_wind")]
    PlayerWind,
    /// 場風
    #[strum(serialize = "yaku.yakuhai.round_wind")]
    RoundWind,
    /// 役牌 白
    #[strum(serialize = "yaku.yakuhai.white")]
    WhiteDragon,
    /// 役牌 發
    #[strum(serialize = "yaku.yakuhai.green")]
    GreenDragon,
    /// 役牌 中
    #[strum(serialize = "yaku.yakuhai.red")]
    RedDragon,
    /// 嶺上開花
    #[strum(serialize = "yaku.after_a_kan")]
    AfterAKan,
    /// 槍槓
    #[strum(serialize = "yaku.robbing_a_kan")]
    RobbingAKan,
    /// 海底摸月
    #[strum(serialize = "yaku.under_the_sea")]
    UnderTheSea,
    /// 河底撈魚
    #[strum(serialize = "yaku.under_the_river")]
    UnderTheRiver,
    /// 三色同刻
    #[strum(serialize = "yaku.triple_triplets")]
    TripleTriplets,
    /// 三槓子
    #[strum(serialize = "yaku.three_quads")]
    ThreeQuads,
    /// 対々和
    #[strum(serialize = "yaku.all_triplets")]
    AllTriplets,
    /// ドラ
    #[strum(serialize = "yaku.dora")]
    Dora,
    /// 赤ドラ
    #[strum(serialize = "yaku.red_dora")]
    RedDora,
    /// 裏ドラ
    #[strum(serialize = "yaku.ura_dora")]
    UraDora,
}

impl Yaku {
    /// The wire identifier of this yaku.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<String> for Yaku {
    type Error = strum::ParseError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Whether a yaku survives an open hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ClosedRule {
    /// Disqualified unless the hand is fully concealed.
    ClosedOnly,
    /// Unaffected by exposure.
    Always,
    /// Allowed open, at one less han.
    OpenReduced,
}

/// Predicate signature shared by every yaku: the candidate partition, the
/// (red-collapsed) winning tile, and the table settings.
pub type YakuCheck = fn(&[Set], Tile, &Settings) -> bool;

/// One registered yaku: its fixed values, closed-hand rule and predicate.
#[derive(Copy, Clone, Debug)]
pub struct YakuEntry {
    pub yaku: Yaku,
    pub han: u8,
    pub yakuman: u8,
    pub closed_rule: ClosedRule,
    pub check: YakuCheck,
}

const fn entry(yaku: Yaku, han: u8, closed_rule: ClosedRule, check: YakuCheck) -> YakuEntry {
    YakuEntry { yaku, han, yakuman: 0, closed_rule, check }
}

/// The active registry, evaluated in order against every partition.
pub static DEFAULT_REGISTRY: &[YakuEntry] = &[
    entry(Yaku::Riichi, 1, ClosedRule::ClosedOnly, predicates::is_riichi),
    entry(Yaku::DoubleRiichi, 2, ClosedRule::ClosedOnly, predicates::is_double_riichi),
    entry(Yaku::Ippatsu, 1, ClosedRule::ClosedOnly, predicates::is_ippatsu),
    entry(Yaku::MenzenTsumo, 1, ClosedRule::ClosedOnly, predicates::is_menzen_tsumo),
    entry(Yaku::Pinfu, 1, ClosedRule::ClosedOnly, predicates::is_pinfu),
    entry(Yaku::Tanyao, 1, ClosedRule::Always, predicates::is_tanyao),
    entry(Yaku::PureDoubleSequence, 1, ClosedRule::ClosedOnly, predicates::is_pure_double_sequence),
    entry(Yaku::PlayerWind, 1, ClosedRule::Always, predicates::is_yakuhai_player_wind),
    entry(Yaku::RoundWind, 1, ClosedRule::Always, predicates::is_yakuhai_round_wind),
    entry(Yaku::WhiteDragon, 1, ClosedRule::Always, predicates::is_yakuhai_white),
    entry(Yaku::GreenDragon, 1, ClosedRule::Always, predicates::is_yakuhai_green),
    entry(Yaku::RedDragon, 1, ClosedRule::Always, predicates::is_yakuhai_red),
    entry(Yaku::AfterAKan, 1, ClosedRule::Always, predicates::is_after_a_kan),
    entry(Yaku::RobbingAKan, 1, ClosedRule::Always, predicates::is_robbing_a_kan),
    entry(Yaku::TripleTriplets, 2, ClosedRule::Always, predicates::is_triple_triplets),
    entry(Yaku::ThreeQuads, 2, ClosedRule::Always, predicates::is_three_quads),
    entry(Yaku::AllTriplets, 2, ClosedRule::Always, predicates::is_all_triplets),
];

/// Last-draw / last-discard yaku. Not registered by default; append these to
/// [`DEFAULT_REGISTRY`] through [`crate::score::score_with_registry`] for
/// rooms that score them.
pub static LAST_TILE_REGISTRY: &[YakuEntry] = &[
    entry(Yaku::UnderTheSea, 1, ClosedRule::Always, predicates::is_under_the_sea),
    entry(Yaku::UnderTheRiver, 1, ClosedRule::Always, predicates::is_under_the_river),
];
