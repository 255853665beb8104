//! Deterministic "game of the day" selection.
//!
//! The calendar day is the only input besides the catalogue itself, so every
//! visitor resolves the same entry on the same local day without any server
//! coordination. The day-key hash below is a frozen behaviour contract:
//! changing it would re-roll every historical daily selection.

use crate::catalog::{Catalogue, GameRecord};
use crate::loader::LoadState;
use chrono::{Datelike, NaiveDate};

/// Textual `YYYY-MM-DD` form of a date, the seed input for daily selection.
#[must_use]
pub fn day_key(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// 32-bit day seed: `h = (h << 5) - h + code_unit`, truncated to signed
/// 32 bits after every step, over the UTF-16 code units of the key.
#[must_use]
pub fn day_seed(key: &str) -> i32 {
    let mut seed: i32 = 0;
    for unit in key.encode_utf16() {
        seed = seed
            .wrapping_shl(5)
            .wrapping_sub(seed)
            .wrapping_add(i32::from(unit));
    }
    seed
}

/// Select the day's record from a catalogue.
///
/// Pure in (catalogue contents, calendar day): equal inputs always yield the
/// same record. Returns `None` only for an empty catalogue.
#[must_use]
pub fn select_for(catalogue: &Catalogue, date: NaiveDate) -> Option<&GameRecord> {
    if catalogue.is_empty() {
        return None;
    }
    let seed = day_seed(&day_key(date));
    let index = seed.unsigned_abs() as usize % catalogue.len();
    catalogue.get(index)
}

/// The daily projection a consumer observes: the chosen record (when the
/// catalogue is ready and non-empty) and the day it was chosen for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyView {
    pub game: Option<GameRecord>,
    pub date: NaiveDate,
}

impl DailyView {
    /// Derive the projection from the loader state. Has no lifetime of its
    /// own: re-derive whenever either input changes.
    #[must_use]
    pub fn project(state: &LoadState, date: NaiveDate) -> Self {
        let game = state
            .catalogue()
            .and_then(|catalogue| select_for(catalogue, date))
            .cloned();
        Self { game, date }
    }
}
