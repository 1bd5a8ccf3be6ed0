//! Holiday client error types.

/// Errors from fetching holidays.
///
/// A fetch fails in one of three ways: the request never completed
/// (`Http`), the service answered with a non-200 status (`Api`), or the
/// body couldn't be turned into holiday records (`Json`).
#[derive(Debug, thiserror::Error)]
pub enum HolidayError {
    /// HTTP request failed (network error, DNS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a status other than 200
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a valid list of holidays
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Country code can't be sent as a URL path segment
    #[error("country code {0:?} cannot be used as a URL path segment")]
    InvalidCountryCode(String),

    /// Client configuration was rejected
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The blocking client could not start its runtime
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = HolidayError::Api {
            status: 404,
            message: "Not Found".into(),
        };
        assert_eq!(err.to_string(), "API error 404: Not Found");

        let err = HolidayError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));

        let err = HolidayError::InvalidCountryCode("..".into());
        assert_eq!(
            err.to_string(),
            "country code \"..\" cannot be used as a URL path segment"
        );

        let err = HolidayError::Config("bad base URL".into());
        assert_eq!(
            err.to_string(),
            "invalid client configuration: bad base URL"
        );
    }

    #[test]
    fn runtime_error_has_source() {
        use std::error::Error;

        let err = HolidayError::Runtime(std::io::Error::other("no threads"));
        assert!(err.to_string().contains("no threads"));
        assert!(err.source().is_some());
    }
}
