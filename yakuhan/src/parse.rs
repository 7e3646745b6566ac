//! Printable-code boundary. The table service speaks two-character tile codes
//! (`"1m"`, `"0p"`, `"7z"`); these helpers turn them into typed tiles, with
//! `"-"` standing for the face-down tiles of a concealed quad.

use yakuhan_elements::prelude::*;

use crate::errors::HandError;

/// Code used for a face-down tile inside an exposed concealed quad.
pub const HIDDEN: &str = "-";

pub fn parse_tile(code: &str) -> Result<Tile, HandError> {
    code.parse().map_err(|_| HandError::InvalidTile(code.to_owned()))
}

/// Element-wise [`parse_tile`]; the first bad code aborts the whole hand.
pub fn parse_hand<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Tile>, HandError> {
    codes.iter().map(|code| parse_tile(code.as_ref())).collect()
}

/// Parses one exposed set's codes, mapping [`HIDDEN`] to `None`.
pub fn parse_exposed_set<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Option<Tile>>, HandError> {
    codes.iter()
        .map(|code| match code.as_ref() {
            HIDDEN => Ok(None),
            code => parse_tile(code).map(Some),
        })
        .collect()
}
