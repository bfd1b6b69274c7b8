use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified host name of a service, without the trailing root dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hostname(String);

impl Hostname {
    /// Compose `record.zone`.
    ///
    /// Surrounding whitespace and dots are trimmed from both parts.
    /// An empty record name yields the zone apex.
    pub fn compose(record: &str, zone: &str) -> Self {
        let record = trim(record);
        let zone = trim(zone);

        if record.is_empty() {
            Self(zone.to_string())
        } else if zone.is_empty() {
            Self(record.to_string())
        } else {
            Self(format!("{record}.{zone}"))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn trim(s: &str) -> &str {
    s.trim().trim_matches('.')
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::Hostname;

    #[test]
    fn record_and_zone() {
        let h = Hostname::compose("api", "example.com");
        assert_eq!(h.as_str(), "api.example.com");
        assert_eq!(h.to_string(), "api.example.com");
    }

    #[test]
    fn empty_record_is_apex() {
        assert_eq!(Hostname::compose("", "example.com").as_str(), "example.com");
        assert_eq!(Hostname::compose("  ", "example.com.").as_str(), "example.com");
    }

    #[test]
    fn dots_are_trimmed() {
        let h = Hostname::compose("staging.api.", ".example.com.");
        assert_eq!(h.to_string(), "staging.api.example.com");
    }
}
