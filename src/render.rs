//! Classify a lookup outcome and rewrite the display surface.
//!
//! The surface has two regions (match list, detail card) and the invariant
//! that at most one of them holds content at any time. Every branch starts
//! by clearing both, then either writes one region or pushes a transient
//! notice and leaves both empty.

use crate::api::LookupError;
use crate::models::Country;
use std::fmt::Write as _;

/// Notice shown when the API reports no match for the query.
pub const NO_COUNTRY_MSG: &str = "Oops, there is no country with that name.";
/// Notice shown when a query matches more than [`LIST_LIMIT`] countries.
pub const TOO_MANY_MSG: &str = "Too many matches found. Please enter a more specific name.";

/// Largest result set rendered as a list; anything bigger is notice-only.
pub const LIST_LIMIT: usize = 10;

/// Severity of a transient notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Failure,
}

/// Transient-notification boundary. The core pushes messages; the host
/// (terminal, toast popup, test recorder) owns presentation and duration.
pub trait Notifier {
    fn notify(&mut self, level: NoticeLevel, message: &str);
}

/// The two mutable regions the renderer owns.
///
/// Constructed once at startup and passed by mutable reference into every
/// [`process`] call, so there is no hidden global display state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DisplaySurface {
    pub list: String,
    pub detail: String,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear both regions. Every render branch starts here.
    pub fn reset(&mut self) {
        self.list.clear();
        self.detail.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty() && self.detail.is_empty()
    }
}

/// Success or failure of one country-name query.
pub type LookupOutcome = Result<Vec<Country>, LookupError>;

/// Apply one lookup outcome to the surface. Stateless between calls.
///
/// - failure: notice only (404 gets the fixed "no country" text)
/// - more than [`LIST_LIMIT`] matches: notice only
/// - 2..=[`LIST_LIMIT`] matches: list region, API order
/// - exactly 1 match: detail region
/// - empty success list: treated as "no country" (the API normally answers
///   this with a 404; an empty 2xx body is the same condition by another
///   route)
pub fn process(outcome: LookupOutcome, surface: &mut DisplaySurface, notifier: &mut dyn Notifier) {
    surface.reset();
    match outcome {
        Err(e) if e.is_not_found() => notifier.notify(NoticeLevel::Failure, NO_COUNTRY_MSG),
        Err(e) => {
            log::warn!("lookup failed: {e}");
            notifier.notify(NoticeLevel::Failure, &e.to_string());
        }
        Ok(countries) if countries.len() > LIST_LIMIT => {
            notifier.notify(NoticeLevel::Info, TOO_MANY_MSG)
        }
        Ok(countries) if countries.len() > 1 => surface.list = render_list(&countries),
        Ok(countries) => match countries.first() {
            Some(country) => surface.detail = render_detail(country),
            None => {
                log::debug!("empty success payload for lookup");
                notifier.notify(NoticeLevel::Info, NO_COUNTRY_MSG);
            }
        },
    }
}

/// One line per match: flag reference then official name. API order is
/// authoritative; no client-side sorting.
fn render_list(countries: &[Country]) -> String {
    let mut out = String::new();
    for c in countries {
        let _ = writeln!(out, "[flag {}] {}", c.flag_url, c.official_name);
    }
    out
}

/// Detail card: flag, official name heading, first capital (or "Unknown"),
/// population as a plain integer, language names joined by ", ".
fn render_detail(c: &Country) -> String {
    format!(
        "[flag {}]\n# {}\nCapital: {}\nPopulation: {}\nLanguages: {}\n",
        c.flag_url,
        c.official_name,
        c.primary_capital(),
        c.population,
        c.language_names()
    )
}
