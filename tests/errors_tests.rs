use greeter::errors::{GreeterError, Result};
use std::error::Error;

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_usage_error() {
        let error = GreeterError::usage("missing name");

        assert!(matches!(error, GreeterError::Usage(_)));
        assert!(error.to_string().contains("Usage Error"));
        assert!(error.to_string().contains("missing name"));
    }

    #[test]
    fn test_log_file_error() {
        let error = GreeterError::log_file("permission denied");

        assert!(matches!(error, GreeterError::LogFile(_)));
        assert!(error.to_string().contains("Log File Error"));
        assert!(error.to_string().contains("permission denied"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            GreeterError::usage(""),
            GreeterError::log_file(""),
            GreeterError::config(""),
            GreeterError::Io(String::new()),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(errors.iter().all(|e| e.exit_code() == 1));
    }

    #[test]
    fn test_format_colored_contains_parts() {
        let error = GreeterError::config("bad level");
        let colored = error.format_colored();

        assert!(colored.contains("E003"));
        assert!(colored.contains("Configuration Error"));
        assert!(colored.contains("bad level"));
    }

    #[test]
    fn test_format_for_terminal_without_colour() {
        colored::control::set_override(false);
        let error = GreeterError::log_file("Could not create log file out.log");
        let rendered = error.format_for_terminal();
        colored::control::unset_override();

        assert_eq!(rendered, error.format_simple());
        assert_eq!(rendered, "Log File Error: Could not create log file out.log");
        assert!(!rendered.contains("[ERROR]"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: GreeterError = io_error.into();

        assert!(matches!(error, GreeterError::Io(_)));
        assert!(error.to_string().contains("file not found"));
    }

    #[test]
    fn test_config_error_conversion() {
        let config_error = config::ConfigError::Message("broken".to_string());
        let error: GreeterError = config_error.into();

        assert!(matches!(error, GreeterError::Config(_)));
        assert_eq!(error.message(), "broken");
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_error_trait_implementation() {
        let error = GreeterError::log_file("no space left");

        let error_trait: &dyn Error = &error;
        assert!(!error_trait.to_string().is_empty());
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_send_sync_traits() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<GreeterError>();
        assert_sync::<GreeterError>();
    }

    #[test]
    fn test_result_alias() {
        fn half(n: i32) -> Result<i32> {
            if n % 2 != 0 {
                return Err(GreeterError::usage("odd"));
            }
            Ok(n / 2)
        }

        assert_eq!(half(8).unwrap(), 4);
        assert!(matches!(half(3), Err(GreeterError::Usage(_))));
    }
}
