pub mod matches;
pub mod win_rate;
