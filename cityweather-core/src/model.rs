use serde::{Deserialize, Serialize};

use crate::error::LookupError;

/// A validated lookup request: a trimmed, non-empty city name.
///
/// Construction is the only place input validation happens, so everything
/// downstream can assume the city is usable as a query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    city: String,
}

impl LookupRequest {
    /// Trim `city` and reject empty or whitespace-only input.
    ///
    /// Rejection happens before any I/O is attempted.
    pub fn new(city: &str) -> Result<Self, LookupError> {
        let trimmed = city.trim();
        if trimmed.is_empty() {
            return Err(LookupError::MissingInput);
        }

        Ok(Self { city: trimmed.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions for one city, as reported by the weather service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temperature_c: f64,
    pub humidity_pct: u8,
    /// Condition text, capitalized for display (e.g. "Light rain").
    pub condition: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    #[test]
    fn empty_city_is_rejected() {
        let err = LookupRequest::new("").unwrap_err();
        assert_eq!(err.kind(), FailureKind::MissingInput);
    }

    #[test]
    fn whitespace_only_city_is_rejected() {
        for input in ["   ", "\t", " \n "] {
            let err = LookupRequest::new(input).unwrap_err();
            assert_eq!(err.kind(), FailureKind::MissingInput);
        }
    }

    #[test]
    fn city_is_trimmed() {
        let request = LookupRequest::new("  London \n").expect("valid city");
        assert_eq!(request.city(), "London");
    }
}
