//! `playerStatSummaryType` values accepted by
//! [`crate::RiotApiClient::get_summoner_queue_summary`].

pub const ARAM: &str = "AramUnranked5x5";
pub const NORMAL_5V5: &str = "Unranked";
pub const NORMAL_3V3: &str = "Unranked3x3";
pub const RANKED_5V5_DYNAMIC: &str = "RankedSolo5x5";
