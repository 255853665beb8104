pub mod daily;
pub mod games;

pub use daily::{DailyHandle, DailyState, use_daily_game};
pub use games::{GamesHandle, use_games};
