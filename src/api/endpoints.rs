// Path templates, relative to the client's base URL.

use crate::region::{Platform, Region};

pub fn champions(region: Region) -> String {
    format!("/api/lol/{}/v1.2/champion", region)
}

pub fn champion_by_id(region: Region, champion_id: i64) -> String {
    format!("/api/lol/{}/v1.2/champion/{}", region, champion_id)
}

pub fn static_champion(region: Region, champion_id: i64) -> String {
    format!("/api/lol/static-data/{}/v1.2/champion/{}", region, champion_id)
}

pub fn champion_mastery(platform: Platform, player_id: i64, champion_id: i64) -> String {
    format!(
        "/championmastery/location/{}/player/{}/champion/{}",
        platform, player_id, champion_id
    )
}

pub fn stats_summary(region: Region, summoner_id: i64) -> String {
    format!("/api/lol/{}/v1.3/stats/by-summoner/{}/summary", region, summoner_id)
}

/// `name` must already be normalized.
pub fn summoner_by_name(region: Region, name: &str) -> String {
    format!(
        "/api/lol/{}/v1.4/summoner/by-name/{}",
        region,
        urlencoding::encode(name)
    )
}

pub fn match_list(region: Region, summoner_id: i64) -> String {
    format!("/api/lol/{}/v2.2/matchlist/by-summoner/{}", region, summoner_id)
}

pub fn match_by_id(region: Region, match_id: i64) -> String {
    format!("/api/lol/{}/v2.2/match/{}", region, match_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_scoped_paths_use_lowercase_codes() {
        assert_eq!(champions(Region::Euw), "/api/lol/euw/v1.2/champion");
        assert_eq!(
            stats_summary(Region::Kr, 42),
            "/api/lol/kr/v1.3/stats/by-summoner/42/summary"
        );
    }

    #[test]
    fn mastery_path_uses_platform() {
        assert_eq!(
            champion_mastery(Platform::NA1, 7, 103),
            "/championmastery/location/NA1/player/7/champion/103"
        );
    }

    #[test]
    fn summoner_name_is_percent_encoded() {
        assert_eq!(
            summoner_by_name(Region::Na, "é"),
            "/api/lol/na/v1.4/summoner/by-name/%C3%A9"
        );
    }
}
