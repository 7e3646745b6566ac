use thiserror::Error;

/// Rejections raised while parsing and validating a hand handed to the
/// scorer. "No yaku" is not an error — see [`crate::score::score`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("tile code {0:?} does not parse")]
    InvalidTile(String),

    #[error("exposed set {0:?} is not a sequence, triplet or quad")]
    InvalidSet(Vec<String>),
}
