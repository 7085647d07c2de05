use crate::{error::FetchError, model::WeatherSnapshot};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

/// Source of current weather data.
///
/// The trait is the seam between the search-state holder and the network:
/// the holder only ever sees this interface, so its behavior (including the
/// overlapping-search race) is testable with stub implementations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for a free-text location query.
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError>;

    /// Raw bytes of a condition icon.
    async fn icon(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
