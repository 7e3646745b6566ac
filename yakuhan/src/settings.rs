//! [`Settings`] — the table and seat context of one scoring call.

use yakuhan_elements::prelude::*;

/// Context assembled by the table service from the room's rules and the
/// current turn's flags. All tile-valued fields keep printable identity
/// (`0m` is not `5m`), which is what the dora comparisons require.
///
///
/// ## Optional `serde` support
///
/// Straightforward struct mapping with tiles as their shorthand strings;
/// missing fields take their defaults, so the service can send only the
/// flags that are set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Tiles currently indicated as dora.
    pub dora: Vec<Tile>,
    /// Under-the-indicator dora; counted only when riichi was declared.
    pub ura_dora: Vec<Tile>,

    /// The winner's seat wind.
    pub player_wind: Tile,
    /// The prevailing round wind.
    pub round_wind: Tile,
    /// 1-based turn number. Reserved for situational yaku; no registered
    /// predicate reads it.
    pub round_number: u32,

    /// 0 = no riichi, 1 = riichi, 2 = double riichi.
    pub riichi: u8,
    /// Won within one uninterrupted go-around of declaring riichi.
    pub ippatsu: bool,

    /// Won on the replacement tile drawn after declaring a quad.
    pub after_a_kan: bool,
    /// Won by claiming the tile another player added to a triplet.
    pub robbing_a_kan: bool,
    /// Won on the last draw of the wall.
    pub under_the_sea: bool,
    /// Won on the last discard of the hand.
    pub under_the_river: bool,

    /// Won on an opponent's discard rather than by self-draw.
    pub ron: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dora: Vec::new(),
            ura_dora: Vec::new(),
            player_wind: t!("1z"),
            round_wind: t!("1z"),
            round_number: 1,
            riichi: 0,
            ippatsu: false,
            after_a_kan: false,
            robbing_a_kan: false,
            under_the_sea: false,
            under_the_river: false,
            ron: false,
        }
    }
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_payload_with_defaults() {
        let settings: Settings = serde_json::from_str(
            r#"{"player_wind":"2z","round_wind":"3z","dora":["1z"],"ura_dora":["0p"],"riichi":1}"#,
        )
        .unwrap();
        assert_eq!(settings.player_wind, t!("2z"));
        assert_eq!(settings.round_wind, t!("3z"));
        assert_eq!(settings.dora, vec![t!("1z")]);
        assert_eq!(settings.ura_dora, vec![t!("0p")]);
        assert_eq!(settings.riichi, 1);
        assert!(!settings.ippatsu);
        assert!(!settings.ron);
        assert_eq!(settings.round_number, 1);
    }

    #[test]
    fn rejects_bad_tile_codes() {
        assert!(serde_json::from_str::<Settings>(r#"{"player_wind":"9z"}"#).is_err());
    }
}
