use thiserror::Error;

/// Everything that can go wrong between hitting the search trigger and
/// having a `WeatherSnapshot` on screen.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No request is attempted for an empty query.
    #[error("Enter a location to search for")]
    EmptyQuery,

    /// Transport-level failure, the provider never answered.
    #[error("Could not reach the weather service: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-200 status or an unreadable body.
    #[error("{0}")]
    Api(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_presentable() {
        assert_eq!(
            FetchError::EmptyQuery.to_string(),
            "Enter a location to search for"
        );
        assert_eq!(
            FetchError::Api("No matching location found.".to_string()).to_string(),
            "No matching location found."
        );
    }
}
