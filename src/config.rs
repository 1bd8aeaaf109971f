use std::sync::LazyLock;

use log::debug;

/// Region used to read numbers that carry no `+<country code>`.
pub const DEFAULT_COUNTRY: &'static str = "NZ";

/// Environment variable overriding [`DEFAULT_COUNTRY`] for the global
/// configuration.
pub const DEFAULT_COUNTRY_ENV: &'static str = "PHONE_VIEW_DEFAULT_COUNTRY";

/// Process-wide configuration, read from the environment on first use.
pub static PHONE_VIEW_CONFIG: LazyLock<PhoneViewConfig> = LazyLock::new(|| {
    PhoneViewConfig::from_env()
});

/// Deployment configuration consulted when a
/// [`PhoneFormatter`](crate::PhoneFormatter) is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneViewConfig {
    /// Two-letter region code, e.g. `"NZ"`.
    pub default_country: String,
}

impl Default for PhoneViewConfig {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY)
    }
}

impl PhoneViewConfig {
    pub fn new(default_country: impl Into<String>) -> Self {
        Self {
            default_country: default_country.into(),
        }
    }

    /// Reads [`DEFAULT_COUNTRY_ENV`], falling back to [`DEFAULT_COUNTRY`]
    /// when it is unset or blank.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(DEFAULT_COUNTRY_ENV)
            .map(|value| value.trim().to_ascii_uppercase())
            .filter(|value| !value.is_empty())
        {
            Some(default_country) => {
                debug!("Using default country {default_country} from {DEFAULT_COUNTRY_ENV}");
                Self { default_country }
            }
            None => Self::default(),
        }
    }

    /// The configuration shared by the whole process.
    pub fn global() -> &'static PhoneViewConfig {
        &PHONE_VIEW_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COUNTRY_ENV, PhoneViewConfig};

    #[test]
    fn defaults_to_new_zealand() {
        assert_eq!(PhoneViewConfig::default().default_country, "NZ");
        assert_eq!(PhoneViewConfig::from_lookup(|_| None).default_country, "NZ");
    }

    #[test]
    fn reads_override_from_environment() {
        let config = PhoneViewConfig::from_lookup(|key| {
            assert_eq!(key, DEFAULT_COUNTRY_ENV);
            Some(" gb\n".to_owned())
        });
        assert_eq!(config, PhoneViewConfig::new("GB"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = PhoneViewConfig::from_lookup(|_| Some("   ".to_owned()));
        assert_eq!(config, PhoneViewConfig::default());
    }
}
