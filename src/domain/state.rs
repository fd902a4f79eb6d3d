use crate::utils::error::{FerienError, Result};
use std::fmt::Display;

/// Codes of the 16 German federal states, in the order the API documents them.
pub const ALL_STATE_CODES: [&str; 16] = [
    "BW", "BY", "BE", "BB", "HB", "HH", "HE", "MV", "NI", "NW", "RP", "SL", "SN", "ST", "SH",
    "TH",
];

/// Read-only view of the registry. The slice is `'static` and immutable, so
/// callers can hold on to it freely.
pub fn state_codes() -> &'static [&'static str] {
    &ALL_STATE_CODES
}

/// Checks `candidate` (via its `Display` form) against the registry.
pub fn parse_state_code<S: Display + ?Sized>(candidate: &S) -> Result<&'static str> {
    let state_code = candidate.to_string();
    ALL_STATE_CODES
        .iter()
        .copied()
        .find(|code| *code == state_code)
        .ok_or_else(|| {
            FerienError::invalid_argument(format!(
                "Argument state_code (current: '{}') is expected to be one of {:?}",
                state_code, ALL_STATE_CODES
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_sixteen_unique_codes() {
        let codes = state_codes();
        assert_eq!(codes.len(), 16);
        let mut sorted = codes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 16);
    }

    #[test]
    fn test_parse_known_state_code() {
        assert_eq!(parse_state_code("HH").unwrap(), "HH");
        assert_eq!(parse_state_code(&String::from("TH")).unwrap(), "TH");
    }

    #[test]
    fn test_parse_unknown_state_code() {
        let err = parse_state_code("UKW").unwrap_err();
        let msg = err.to_string();
        assert!(matches!(err, FerienError::InvalidArgument { .. }));
        assert!(msg.contains("'UKW'"));
        assert!(msg.contains("\"BW\""));
        assert!(msg.contains("\"TH\""));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(parse_state_code("hh").is_err());
    }

    #[test]
    fn test_parse_non_string_candidate() {
        assert!(parse_state_code(&42).is_err());
    }
}
