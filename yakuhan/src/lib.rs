//! Deterministic scoring core for Japanese riichi mahjong.
//!
//! Given a player's closed tiles, their exposed sets, the winning tile and the
//! table context, this crate enumerates every legal reading of the hand
//! ([`split`]) and scores the best one against a registry of yaku predicates
//! ([`score`]), returning the yaku list, han total and yakuman total.
//!
//! The core is pure and synchronous: no I/O, no global state, no
//! interior mutability. The surrounding table service calls [`score`] with
//! fully materialized arguments and forwards the result to its clients.
//!
//! Example:
//! ```
//! use yakuhan::prelude::*;
//!
//! let settings = Settings { riichi: 1, ..Settings::default() };
//! let result = score(
//!     &["1m", "2m", "3m", "3m", "4m", "5p", "6p", "7p", "2s", "2s", "3s", "4s", "5s"],
//!     &[],
//!     "2m",
//!     &settings,
//! ).unwrap().expect("winning hand");
//! assert!(result.yakus.contains(&(Yaku::Pinfu, 1)));
//! ```

pub mod errors;
pub mod parse;
pub mod score;
pub mod settings;
pub mod split;
pub mod yaku;

pub use errors::HandError;
pub use score::{score, score_tiles, score_with_registry, HandScore};
pub use settings::Settings;
pub use split::{split, split_tiles, Partition};
pub use yaku::{ClosedRule, Yaku, YakuEntry, DEFAULT_REGISTRY, LAST_TILE_REGISTRY};

pub mod prelude {
    //! Convenient re-exports of commonly imported items.
    pub use yakuhan_elements::prelude::*;

    pub use crate::errors::HandError;
    pub use crate::score::{score, score_tiles, score_with_registry, HandScore};
    pub use crate::settings::Settings;
    pub use crate::split::{split, split_tiles, Partition};
    pub use crate::yaku::{ClosedRule, Yaku, YakuEntry, DEFAULT_REGISTRY, LAST_TILE_REGISTRY};
}
