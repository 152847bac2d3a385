use crate::api::client::RiotApiClient;
use crate::error::{Result, RiotError};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lower-cases a summoner name and strips every whitespace character,
/// matching the key the summoner endpoint uses in its response.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Reads `field` from a JSON object as an integer.
///
/// Integers, integral floats and numeric strings are accepted.
pub(crate) fn coerce_i64(record: &Value, field: &str) -> Result<i64> {
    let value = record
        .get(field)
        .ok_or_else(|| RiotError::NotFound(format!("field `{}` missing from response", field)))?;

    let coerced = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    coerced.ok_or_else(|| {
        RiotError::Decode(format!("field `{}` is not an integer: {}", field, value))
    })
}

// Stats v1.3 summary entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsEntry {
    pub player_stat_summary_type: String,
    #[serde(default)]
    pub wins: i64,
    #[serde(default)]
    pub losses: Option<i64>,
    #[serde(default)]
    pub modify_date: Option<i64>,
    #[serde(default)]
    pub aggregated_stats: Value,
}

// Stats v1.3 summary response
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub summoner_id: Option<i64>,
    #[serde(default)]
    pub player_stat_summaries: Vec<StatsEntry>,
}

impl StatsSummary {
    pub fn from_json(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| RiotError::Decode(e.to_string()))
    }

    /// First entry of the given queue type. Same-typed entries carry no order,
    /// so the first one wins.
    pub fn queue(&self, queue_type: &str) -> Option<&StatsEntry> {
        self.player_stat_summaries
            .iter()
            .find(|entry| entry.player_stat_summary_type == queue_type)
    }
}

/// A player account, built from one record of the summoner-by-name response.
#[derive(Debug, Clone, PartialEq)]
pub struct Summoner {
    pub id: i64,
    pub name: String,
    pub profile_icon_id: i64,
    pub revision_date: i64,
    pub summoner_level: i64,
    pub stats: Vec<StatsEntry>,
    pub queues: Vec<String>,
    pub matches: Vec<i64>,
}

impl Summoner {
    pub fn from_json(record: &Value) -> Result<Self> {
        if !record.is_object() {
            return Err(RiotError::Decode(format!(
                "summoner record is not an object: {}",
                record
            )));
        }

        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(Summoner {
            id: coerce_i64(record, "id")?,
            name,
            profile_icon_id: coerce_i64(record, "profileIconId")?,
            revision_date: coerce_i64(record, "revisionDate")?,
            summoner_level: coerce_i64(record, "summonerLevel")?,
            stats: Vec::new(),
            queues: Vec::new(),
            matches: Vec::new(),
        })
    }

    pub fn stats_by_queue(&self, queue_type: &str) -> Option<&StatsEntry> {
        self.stats
            .iter()
            .find(|entry| entry.player_stat_summary_type == queue_type)
    }

    /// `revisionDate` is epoch milliseconds.
    pub fn revision_time(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.revision_date).single()
    }
}

/// One completed game. Only the identifier and the raw participant and team
/// blocks are kept.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: i64,
    #[serde(default)]
    pub participants: Vec<Value>,
    #[serde(default)]
    pub teams: Vec<Value>,
}

impl Match {
    pub fn from_json(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| RiotError::Decode(e.to_string()))
    }

    pub fn fetch(client: &RiotApiClient, match_id: i64) -> Result<Self> {
        Match::from_json(client.get_match(match_id)?)
    }
}
