//! Synchronous client for the summoner, stats, champion and match endpoints
//! of the Riot Games developer API.
//!
//! ```no_run
//! use riot_lookup::{queue, RiotApiClient};
//!
//! # fn main() -> riot_lookup::Result<()> {
//! let client = RiotApiClient::new("RGAPI-...", "euw")?;
//! let id = client.get_summoner_id("Hide on bush")?;
//! let ranked = client.get_summoner_queue_summary(id, queue::RANKED_5V5_DYNAMIC)?;
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod queue;
pub mod region;

pub use analysis::matches::match_history;
pub use analysis::win_rate::ranked_win_loss_ratio;
pub use api::client::RiotApiClient;
pub use api::models::{normalize_name, Match, StatsEntry, StatsSummary, Summoner};
pub use config::Config;
pub use error::{Result, RiotError};
pub use region::{resolve_platform, Platform, Region};
