use std::fmt;

/// Server grouping the caller picks when building a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Br,
    Eune,
    Euw,
    Kr,
    Lan,
    Las,
    Na,
    Oce,
    Ru,
    Tr,
}

/// Serving cluster behind a [`Region`], used by the platform-scoped endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Platform {
    BR1,
    EUN1,
    EUW1,
    KR,
    LA1,
    LA2,
    NA1,
    OC1,
    RU,
    TR1,
}

impl Region {
    pub const ALL: [Region; 10] = [
        Region::Br,
        Region::Eune,
        Region::Euw,
        Region::Kr,
        Region::Lan,
        Region::Las,
        Region::Na,
        Region::Oce,
        Region::Ru,
        Region::Tr,
    ];

    /// Exact, case-sensitive match on the wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Region::ALL.into_iter().find(|r| r.as_str() == code)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Br => "br",
            Self::Eune => "eune",
            Self::Euw => "euw",
            Self::Kr => "kr",
            Self::Lan => "lan",
            Self::Las => "las",
            Self::Na => "na",
            Self::Oce => "oce",
            Self::Ru => "ru",
            Self::Tr => "tr",
        }
    }

    pub fn platform(self) -> Platform {
        match self {
            Self::Br => Platform::BR1,
            Self::Eune => Platform::EUN1,
            Self::Euw => Platform::EUW1,
            Self::Kr => Platform::KR,
            Self::Lan => Platform::LA1,
            Self::Las => Platform::LA2,
            Self::Na => Platform::NA1,
            Self::Oce => Platform::OC1,
            Self::Ru => Platform::RU,
            Self::Tr => Platform::TR1,
        }
    }
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "BR1",
            Self::EUN1 => "EUN1",
            Self::EUW1 => "EUW1",
            Self::KR => "KR",
            Self::LA1 => "LA1",
            Self::LA2 => "LA2",
            Self::NA1 => "NA1",
            Self::OC1 => "OC1",
            Self::RU => "RU",
            Self::TR1 => "TR1",
        }
    }
}

/// Platform for a region code, or `None` when the code is unknown.
pub fn resolve_platform(region: &str) -> Option<Platform> {
    Region::from_code(region).map(Region::platform)
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_region_resolves_to_its_platform() {
        let expected = [
            ("br", "BR1"),
            ("eune", "EUN1"),
            ("euw", "EUW1"),
            ("kr", "KR"),
            ("lan", "LA1"),
            ("las", "LA2"),
            ("na", "NA1"),
            ("oce", "OC1"),
            ("ru", "RU"),
            ("tr", "TR1"),
        ];

        for (code, platform) in expected {
            assert_eq!(resolve_platform(code).map(|p| p.as_str()), Some(platform));
        }
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        for code in ["", "NA", "Euw", "jp", "na1", " na"] {
            assert_eq!(resolve_platform(code), None, "{:?}", code);
        }
    }

    #[test]
    fn platform_table_is_a_bijection() {
        let mut platforms: Vec<_> = Region::ALL.iter().map(|r| r.platform()).collect();
        platforms.sort_by_key(|p| p.as_str());
        platforms.dedup();
        assert_eq!(platforms.len(), Region::ALL.len());
    }
}
