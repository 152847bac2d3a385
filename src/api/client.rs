use crate::config::Config;
use crate::error::{Result, RiotError};
use crate::region::{Platform, Region};
use serde_json::Value;
use std::fmt;
use std::sync::Mutex;

use super::endpoints;
use super::models::{coerce_i64, normalize_name, StatsEntry, StatsSummary, Summoner};

const USER_AGENT: &str = concat!("riot_lookup/", env!("CARGO_PKG_VERSION"));

/// Client for one (API key, region) pair. Every outbound call goes through
/// [`RiotApiClient::get`].
pub struct RiotApiClient {
    agent: ureq::Agent,
    api_key: String,
    region: Region,
    platform: Platform,
    base_url: String,
    strict_status: bool,
    looked_up: Mutex<Vec<Summoner>>,
}

impl RiotApiClient {
    /// Client against the production endpoint.
    pub fn new(api_key: impl Into<String>, region: &str) -> Result<Self> {
        Self::from_config(Config::new(api_key, region))
    }

    pub fn from_config(config: Config) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(RiotError::InvalidConfiguration(
                "API key must not be empty".to_string(),
            ));
        }

        let region = Region::from_code(&config.region).ok_or_else(|| {
            RiotError::InvalidConfiguration(format!("unknown region: {:?}", config.region))
        })?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(RiotError::InvalidConfiguration(
                "base URL must not be empty".to_string(),
            ));
        }

        if config.timeout.is_zero() {
            return Err(RiotError::InvalidConfiguration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build();

        Ok(RiotApiClient {
            agent,
            api_key: config.api_key,
            region,
            platform: region.platform(),
            base_url,
            strict_status: config.strict_status,
            looked_up: Mutex::new(Vec::new()),
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one GET to `base_url + path` with the API key appended and
    /// decodes the body as JSON.
    ///
    /// A non-200 status is reported through `tracing` and the body is still
    /// decoded and returned, unless the client was built with
    /// `strict_status`, in which case a decodable body comes back as
    /// [`RiotError::Http`]. A body that is not JSON is always
    /// [`RiotError::Decode`].
    pub fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::trace!("[RIOT::CLIENT] GET {} {:?}", url, query);

        let mut request = self.agent.get(&url);
        for (key, value) in query {
            request = request.query(key, value);
        }
        request = request.query("api_key", &self.api_key);

        let response = match request.call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(_, resp)) => resp,
            Err(ureq::Error::Transport(e)) => return Err(RiotError::Transport(e.to_string())),
        };

        let status = response.status();
        let reason = response.status_text().to_string();

        if status != 200 {
            tracing::warn!(
                status,
                reason = %reason,
                "[RIOT::CLIENT] HTTP ERROR: {} {} for {}",
                status,
                reason,
                path
            );
        }

        let body = response
            .into_string()
            .map_err(|e| RiotError::Transport(e.to_string()))?;

        let decoded: Value =
            serde_json::from_str(&body).map_err(|e| RiotError::Decode(e.to_string()))?;

        if status != 200 && self.strict_status {
            return Err(RiotError::Http {
                status,
                reason,
                body: decoded,
            });
        }

        Ok(decoded)
    }

    pub fn get_champions(&self, free_to_play: bool) -> Result<Value> {
        let path = endpoints::champions(self.region);
        if free_to_play {
            self.get(&path, &[("freeToPlay", "true")])
        } else {
            self.get(&path, &[])
        }
    }

    pub fn get_champion_by_id(&self, champion_id: i64) -> Result<Value> {
        let champion_id = non_negative("champion_id", champion_id)?;
        self.get(&endpoints::champion_by_id(self.region, champion_id), &[])
    }

    /// Static champion data. `fields` is the `champData` selector, `"all"`
    /// for everything.
    pub fn get_static_champion(&self, champion_id: i64, fields: &str) -> Result<Value> {
        let champion_id = non_negative("champion_id", champion_id)?;
        if fields.trim().is_empty() {
            return Err(RiotError::InvalidArgument(
                "fields must not be empty".to_string(),
            ));
        }

        self.get(
            &endpoints::static_champion(self.region, champion_id),
            &[("champData", fields)],
        )
    }

    pub fn get_champion_mastery(&self, player_id: i64, champion_id: i64) -> Result<Value> {
        let player_id = non_negative("player_id", player_id)?;
        let champion_id = non_negative("champion_id", champion_id)?;
        self.get(
            &endpoints::champion_mastery(self.platform, player_id, champion_id),
            &[],
        )
    }

    /// Summoner record for `name`, taken from under its normalized key.
    pub fn get_summoner_by_name(&self, name: &str) -> Result<Value> {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(RiotError::InvalidArgument(
                "summoner name must not be empty".to_string(),
            ));
        }

        let mut body = self.get(&endpoints::summoner_by_name(self.region, &key), &[])?;

        body.get_mut(&key)
            .map(Value::take)
            .ok_or_else(|| RiotError::NotFound(format!("summoner {}", key)))
    }

    pub fn get_summoner_id(&self, name: &str) -> Result<i64> {
        let record = self.get_summoner_by_name(name)?;
        coerce_i64(&record, "id")
    }

    pub fn get_summoner_stats_summary(&self, summoner_id: i64) -> Result<Value> {
        let summoner_id = non_negative("summoner_id", summoner_id)?;
        self.get(&endpoints::stats_summary(self.region, summoner_id), &[])
    }

    /// First stats entry of `queue_type` for the summoner, if any.
    pub fn get_summoner_queue_summary(
        &self,
        summoner_id: i64,
        queue_type: &str,
    ) -> Result<Option<StatsEntry>> {
        if queue_type.is_empty() {
            return Err(RiotError::InvalidArgument(
                "queue_type must not be empty".to_string(),
            ));
        }

        let summary = StatsSummary::from_json(self.get_summoner_stats_summary(summoner_id)?)?;
        Ok(summary.queue(queue_type).cloned())
    }

    pub fn get_match_list(&self, summoner_id: i64) -> Result<Value> {
        let summoner_id = non_negative("summoner_id", summoner_id)?;
        self.get(&endpoints::match_list(self.region, summoner_id), &[])
    }

    pub fn get_match(&self, match_id: i64) -> Result<Value> {
        let match_id = non_negative("match_id", match_id)?;
        self.get(&endpoints::match_by_id(self.region, match_id), &[])
    }

    /// Builds a [`Summoner`] for `name` and remembers it on this client.
    pub fn lookup_summoner(&self, name: &str) -> Result<Summoner> {
        let record = self.get_summoner_by_name(name)?;
        let mut summoner = Summoner::from_json(&record)?;
        if summoner.name.is_empty() {
            summoner.name = name.to_string();
        }

        self.looked_up
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(summoner.clone());

        Ok(summoner)
    }

    /// Every summoner returned by [`RiotApiClient::lookup_summoner`] so far,
    /// oldest first. Repeated lookups appear repeatedly.
    pub fn looked_up(&self) -> Vec<Summoner> {
        self.looked_up
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

fn non_negative(name: &str, id: i64) -> Result<i64> {
    if id < 0 {
        return Err(RiotError::InvalidArgument(format!(
            "{} must not be negative, got {}",
            name, id
        )));
    }
    Ok(id)
}

impl fmt::Debug for RiotApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RiotApiClient")
            .field("region", &self.region)
            .field("platform", &self.platform)
            .field("base_url", &self.base_url)
            .field("strict_status", &self.strict_status)
            .finish_non_exhaustive()
    }
}
