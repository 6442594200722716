use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested `name` object from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    pub official: String,
    #[serde(default)]
    pub common: Option<String>,
}

/// Nested `flags` object from the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flags {
    pub svg: String,
    #[serde(default)]
    pub alt: Option<String>,
}

/// Raw country object as returned by the REST Countries `name` endpoint.
///
/// `capital` and `languages` are omitted by the API for some territories
/// (Antarctica has no capital), so they default to empty rather than failing
/// the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiCountry {
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: BTreeMap<String, String>,
    pub flags: Flags,
}

/// Tidy record used by this crate (one row = one country).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    pub official_name: String,
    pub capital: Vec<String>,
    pub population: u64,
    /// Language code -> language name, iterated in code order.
    pub languages: BTreeMap<String, String>,
    pub flag_url: String,
}

impl From<ApiCountry> for Country {
    fn from(c: ApiCountry) -> Self {
        Self {
            official_name: c.name.official,
            capital: c.capital,
            population: c.population,
            languages: c.languages,
            flag_url: c.flags.svg,
        }
    }
}

impl Country {
    /// First capital entry, or `"Unknown"` when the API sent none.
    pub fn primary_capital(&self) -> &str {
        self.capital.first().map(String::as_str).unwrap_or("Unknown")
    }

    /// Language names joined by `", "`, in language-code order.
    pub fn language_names(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(name: &str) -> Country {
        Country {
            official_name: name.to_string(),
            capital: vec![],
            population: 0,
            languages: BTreeMap::new(),
            flag_url: String::new(),
        }
    }

    #[test]
    fn primary_capital_falls_back_when_missing() {
        let mut c = bare("Nowhere");
        assert_eq!(c.primary_capital(), "Unknown");
        c.capital = vec!["First".into(), "Second".into()];
        assert_eq!(c.primary_capital(), "First");
    }

    #[test]
    fn language_names_join_in_code_order() {
        let mut c = bare("Trilingua");
        c.languages.insert("fra".into(), "French".into());
        c.languages.insert("deu".into(), "German".into());
        c.languages.insert("ita".into(), "Italian".into());
        assert_eq!(c.language_names(), "German, French, Italian");
    }

    #[test]
    fn language_names_empty_mapping() {
        assert_eq!(bare("Quiet").language_names(), "");
    }
}
