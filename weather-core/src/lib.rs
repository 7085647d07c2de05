//! Core library for the weather app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Abstraction over the weather provider and its WeatherAPI.com client
//! - The shared domain model and the search-state holder the UI renders from
//!
//! It is used by `weather-app`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod search;

pub use config::{API_KEY_ENV, Config};
pub use error::FetchError;
pub use model::{WeatherSnapshot, format_metric};
pub use provider::{WeatherProvider, weatherapi::WeatherApiProvider};
pub use search::{IconImage, SearchState, Searcher};
