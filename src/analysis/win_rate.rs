use crate::api::client::RiotApiClient;
use crate::error::Result;
use crate::queue;

/// Wins over losses in the ranked solo queue, or `None` when the summoner
/// has no entry for that queue. With zero losses the ratio is the win count.
pub fn ranked_win_loss_ratio(client: &RiotApiClient, summoner_name: &str) -> Result<Option<f64>> {
    let summoner_id = client.get_summoner_id(summoner_name)?;
    let entry = client.get_summoner_queue_summary(summoner_id, queue::RANKED_5V5_DYNAMIC)?;

    Ok(entry.map(|stats| {
        let wins = stats.wins as f64;
        let losses = stats.losses.unwrap_or(0).max(1) as f64;
        wins / losses
    }))
}
