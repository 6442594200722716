//! country-lookup
//!
//! A small library + CLI for looking up countries by name against the
//! REST Countries API. Pairs with the `country-lookup` binary.
//!
//! ### Features
//! - One blocking HTTP lookup per query, requesting only the rendered fields
//! - Outcome classification: detail card (1 match), list (2–10 matches),
//!   "too many matches" notice (>10), "no country" notice (404)
//! - Debounced input loop for interactive use (300 ms quiet window)
//!
//! ### Example
//! ```no_run
//! use country_lookup::render::{self, NoticeLevel, Notifier};
//! use country_lookup::{Client, DisplaySurface};
//!
//! struct StderrNotifier;
//! impl Notifier for StderrNotifier {
//!     fn notify(&mut self, _level: NoticeLevel, message: &str) {
//!         eprintln!("{message}");
//!     }
//! }
//!
//! let client = Client::default();
//! let mut surface = DisplaySurface::new();
//! render::process(
//!     client.fetch_countries("poland"),
//!     &mut surface,
//!     &mut StderrNotifier,
//! );
//! print!("{}{}", surface.list, surface.detail);
//! ```

pub mod api;
pub mod controller;
pub mod models;
pub mod render;

pub use api::{Client, LookupError};
pub use models::Country;
pub use render::{DisplaySurface, LookupOutcome};
