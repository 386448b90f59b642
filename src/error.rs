//! Errors raised at the crate's fallible boundaries.
//!
//! Card synthesis itself is total. Only decoding external bytes (legacy
//! cards, persisted `PlayerCard`s) can fail.

use thiserror::Error;

/// Errors surfaced when decoding cards.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("card must have {expected} slots, found {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("card codec error: {0}")]
    Codec(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
