//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod reporter_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        // Create a JSON error by trying to parse invalid JSON
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ReporterError::from(json_error);

        match err {
            ReporterError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = ReporterError::from(io_error);

        match err {
            ReporterError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let err = ReporterError::from(parse_error);

        match err {
            ReporterError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_env_display() {
        let err = ReporterError::MissingEnv {
            var: "LEAGUE_ID".to_string(),
        };
        assert_eq!(err.to_string(), "LEAGUE_ID environment variable not set");
    }

    #[test]
    fn test_unknown_player_display() {
        let err = ReporterError::UnknownPlayer {
            id: "4046".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown player: 4046");
    }

    #[test]
    fn test_social_helper() {
        let err = ReporterError::social("rate limited");
        match err {
            ReporterError::Social { ref message } => assert_eq!(message, "rate limited"),
            _ => panic!("Expected Social error variant"),
        }
        assert_eq!(err.to_string(), "Social API error: rate limited");
    }
}
