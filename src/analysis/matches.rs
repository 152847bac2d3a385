use crate::api::client::RiotApiClient;
use crate::error::Result;
use serde_json::Value;

/// Raw match list for the summoner called `summoner_name`.
pub fn match_history(client: &RiotApiClient, summoner_name: &str) -> Result<Value> {
    let summoner_id = client.get_summoner_id(summoner_name)?;
    client.get_match_list(summoner_id)
}
