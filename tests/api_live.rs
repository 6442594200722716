//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use country_lookup::{Client, LookupError};

#[test]
fn fetch_single_match() {
    let cli = Client::default();
    let countries = cli.fetch_countries("poland").unwrap();
    assert_eq!(countries.len(), 1);

    let poland = &countries[0];
    assert_eq!(poland.official_name, "Republic of Poland");
    assert_eq!(poland.primary_capital(), "Warsaw");
    assert!(poland.population > 0);
    assert_eq!(poland.language_names(), "Polish");
    assert!(poland.flag_url.starts_with("https://"));
}

#[test]
fn fetch_partial_name_returns_several() {
    let cli = Client::default();
    let countries = cli.fetch_countries("united").unwrap();
    assert!(countries.len() >= 2);

    let names: Vec<&str> = countries.iter().map(|c| c.official_name.as_str()).collect();
    assert!(names.iter().any(|n| n.contains("United")));
}

#[test]
fn fetch_nonsense_is_not_found() {
    let cli = Client::default();
    let err = cli.fetch_countries("xqzzyplugh").unwrap_err();
    assert!(matches!(err, LookupError::Http(404)));
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "404");
}

#[test]
fn fetch_encodes_non_ascii_queries() {
    let cli = Client::default();
    // "côte" must reach the API intact through percent-encoding.
    let countries = cli.fetch_countries("côte").unwrap();
    assert!(!countries.is_empty());
}
